use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Meta {
    pub fn total(total: usize) -> Self {
        Self {
            total,
            offset: None,
            limit: None,
        }
    }

    pub fn page<T>(page: &Page<T>) -> Self {
        Self {
            total: page.total,
            offset: Some(page.offset),
            limit: Some(page.limit),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page number and size as the admin tables send them (`?page=2&limit=10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: usize,
    /// Number of items per page
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: Option<usize>, limit: Option<usize>, default_limit: usize) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(default_limit)
                .clamp(1, crate::shared::constants::MAX_PAGE_SIZE),
        }
    }

    /// Saturates for absurd page numbers; such a page is simply empty
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Slice one page out of an already filtered record list
    pub fn apply<T: Clone>(&self, records: &[T]) -> Page<T> {
        let offset = self.offset();
        let items = records
            .iter()
            .skip(offset)
            .take(self.limit)
            .cloned()
            .collect();

        Page {
            items,
            total: records.len(),
            offset,
            limit: self.limit,
        }
    }
}

/// One page of records plus the size of the unpaginated result
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

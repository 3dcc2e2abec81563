use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::core::config::CatalogConfig;
use crate::core::error::{AppError, Result};
use crate::features::catalog_views::browser::{CategoryBrowser, FetchTicket};
use crate::features::catalog_views::dtos::{OpenViewQuery, ViewStateDto};
use crate::features::categories::models::CategoryId;
use crate::modules::catalog_store::{CatalogSource, CategoryFilter};
use crate::shared::constants::DEFAULT_VIEW_PAGE_SIZE;
use crate::shared::types::PageRequest;

struct ViewEntry {
    filter: CategoryFilter,
    browser: CategoryBrowser,
    last_access: Instant,
}

type ViewMap = Arc<RwLock<HashMap<Uuid, ViewEntry>>>;

fn view_not_found(view_id: Uuid) -> AppError {
    AppError::NotFound(format!("Catalog view {} not found", view_id))
}

/// Look up a view and mark it as used
fn touch(views: &mut HashMap<Uuid, ViewEntry>, view_id: Uuid) -> Result<&mut ViewEntry> {
    let entry = views
        .get_mut(&view_id)
        .ok_or_else(|| view_not_found(view_id))?;
    entry.last_access = Instant::now();
    Ok(entry)
}

/// Drop views untouched for `idle_timeout`; returns how many went
fn evict_idle_views(views: &mut HashMap<Uuid, ViewEntry>, idle_timeout: Duration) -> usize {
    let before = views.len();
    views.retain(|view_id, entry| {
        let keep = entry.last_access.elapsed() < idle_timeout;
        if !keep {
            tracing::debug!("Catalog view {} idle; evicting", view_id);
        }
        keep
    });
    before - views.len()
}

/// A view whose category tree fetch is running in the background
pub struct OpenedView {
    pub state: ViewStateDto,
    /// Resolves once the fetch result has been applied or discarded
    pub fetch: JoinHandle<()>,
}

/// Open category browse views, keyed by view id
pub struct CatalogViewService {
    source: Arc<dyn CatalogSource>,
    views: ViewMap,
    config: CatalogConfig,
}

impl CatalogViewService {
    pub fn new(source: Arc<dyn CatalogSource>, config: CatalogConfig) -> Self {
        Self {
            source,
            views: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Remove views nobody has used within the idle timeout
    pub async fn evict_idle(&self) -> usize {
        let mut views = self.views.write().await;
        let evicted = evict_idle_views(&mut views, self.config.view_idle_timeout);
        if evicted > 0 {
            tracing::info!("Evicted {} idle catalog views", evicted);
        }
        evicted
    }

    /// Periodically evict idle views for as long as the runtime lives
    pub fn spawn_idle_sweep(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        let period = (self.config.view_idle_timeout / 2).max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                service.evict_idle().await;
            }
        })
    }

    /// Open a view and start fetching its category tree
    pub async fn open(&self, query: OpenViewQuery) -> Result<OpenedView> {
        let filter = CategoryFilter {
            page: PageRequest::new(query.page, query.limit, DEFAULT_VIEW_PAGE_SIZE),
            search: query.search.filter(|s| !s.trim().is_empty()),
        };

        let view_id = Uuid::now_v7();
        let mut browser = CategoryBrowser::new(self.config.max_tree_depth);
        let ticket = browser.begin_fetch();
        let state = ViewStateDto::from_browser(view_id, &browser);

        {
            let mut views = self.views.write().await;
            evict_idle_views(&mut views, self.config.view_idle_timeout);
            if views.len() >= self.config.max_open_views {
                return Err(AppError::Conflict(format!(
                    "Too many open catalog views (limit {})",
                    self.config.max_open_views
                )));
            }
            views.insert(
                view_id,
                ViewEntry {
                    filter: filter.clone(),
                    browser,
                    last_access: Instant::now(),
                },
            );
        }

        tracing::info!("Catalog view opened: view_id={}", view_id);

        let fetch = self.spawn_fetch(view_id, ticket, filter);
        Ok(OpenedView { state, fetch })
    }

    /// Refetch the tree; selection and expansion start over
    pub async fn reload(&self, view_id: Uuid) -> Result<OpenedView> {
        let (state, ticket, filter) = {
            let mut views = self.views.write().await;
            let entry = touch(&mut views, view_id)?;
            let ticket = entry.browser.begin_fetch();
            (
                ViewStateDto::from_browser(view_id, &entry.browser),
                ticket,
                entry.filter.clone(),
            )
        };

        tracing::info!("Catalog view reloading: view_id={}", view_id);

        let fetch = self.spawn_fetch(view_id, ticket, filter);
        Ok(OpenedView { state, fetch })
    }

    fn spawn_fetch(
        &self,
        view_id: Uuid,
        ticket: FetchTicket,
        filter: CategoryFilter,
    ) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let views = Arc::clone(&self.views);

        tokio::spawn(async move {
            let result = source
                .fetch_category_tree(&filter)
                .await
                .map(|page| page.items);

            let mut views = views.write().await;
            match views.get_mut(&view_id) {
                Some(entry) => {
                    if entry.browser.complete_fetch(ticket, result) {
                        tracing::debug!("Category tree applied to view {}", view_id);
                    }
                }
                None => {
                    tracing::debug!(
                        "Catalog view {} closed before its category tree arrived; discarding",
                        view_id
                    );
                }
            }
        })
    }

    pub async fn state(&self, view_id: Uuid) -> Result<ViewStateDto> {
        let mut views = self.views.write().await;
        let entry = touch(&mut views, view_id)?;
        Ok(ViewStateDto::from_browser(view_id, &entry.browser))
    }

    /// Make a category active and return the refreshed view
    pub async fn select(&self, view_id: Uuid, category_id: CategoryId) -> Result<ViewStateDto> {
        let mut views = self.views.write().await;
        let entry = touch(&mut views, view_id)?;
        entry.browser.select(category_id)?;
        Ok(ViewStateDto::from_browser(view_id, &entry.browser))
    }

    /// Expand or collapse a category and return the refreshed view
    pub async fn toggle(&self, view_id: Uuid, category_id: CategoryId) -> Result<ViewStateDto> {
        let mut views = self.views.write().await;
        let entry = touch(&mut views, view_id)?;
        entry.browser.toggle_expand(category_id)?;
        Ok(ViewStateDto::from_browser(view_id, &entry.browser))
    }

    pub async fn close(&self, view_id: Uuid) -> Result<()> {
        self.views
            .write()
            .await
            .remove(&view_id)
            .ok_or_else(|| view_not_found(view_id))?;

        tracing::info!("Catalog view closed: view_id={}", view_id);
        Ok(())
    }
}

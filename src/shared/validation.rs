use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Product photo URLs must point at an accepted image type
    /// - Valid: "https://cdn.example.com/a.png", "https://x.io/p/1.JPEG"
    /// - Invalid: "https://x.io/p/1.gif", "https://x.io/p/1.png?size=2"
    pub static ref IMAGE_URL_REGEX: Regex =
        Regex::new(r"(?i)\.(jpe?g|png|webp)$").expect("valid image url regex");

    /// Search terms are matched word by word; a word is a run of letters or digits
    /// in any script ("Điện thoại" -> ["Điện", "thoại"])
    pub static ref SEARCH_TOKEN_REGEX: Regex =
        Regex::new(r"[\p{L}\p{N}]+").expect("valid search token regex");
}

/// Split a free-text search into lowercase tokens
pub fn search_tokens(search: &str) -> Vec<String> {
    SEARCH_TOKEN_REGEX
        .find_iter(search)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// True when every token occurs in at least one of the fields
pub fn matches_all_tokens(tokens: &[String], fields: &[&str]) -> bool {
    let haystacks: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    tokens
        .iter()
        .all(|token| haystacks.iter().any(|h| h.contains(token.as_str())))
}

pub fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_positive() && !price.is_zero() {
        Ok(())
    } else {
        let mut error = ValidationError::new("positive");
        error.message = Some("Price must be greater than zero".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_regex_valid() {
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/galaxy-s10.jpg"));
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/a.jpeg"));
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/a.PNG"));
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/a.webp"));
    }

    #[test]
    fn test_image_url_regex_invalid() {
        assert!(!IMAGE_URL_REGEX.is_match("https://example.com/a.gif"));
        assert!(!IMAGE_URL_REGEX.is_match("https://example.com/a.png?w=200"));
        assert!(!IMAGE_URL_REGEX.is_match("https://example.com/png"));
        assert!(!IMAGE_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_search_tokens_unicode() {
        assert_eq!(search_tokens("Điện  thoại!"), vec!["điện", "thoại"]);
        assert!(search_tokens("  -- ").is_empty());
    }

    #[test]
    fn test_matches_all_tokens() {
        let tokens = search_tokens("galaxy tab");
        assert!(matches_all_tokens(&tokens, &["Galaxy Tab A9", "Affordable tablet"]));
        assert!(matches_all_tokens(&tokens, &["Galaxy S10", "Tablet"]));
        assert!(!matches_all_tokens(&tokens, &["Galaxy S10", "Phone"]));
        assert!(matches_all_tokens(&[], &["anything"]));
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price(&Decimal::new(1, 2)).is_ok());
        assert!(validate_positive_price(&Decimal::ZERO).is_err());
        assert!(validate_positive_price(&Decimal::new(-500, 2)).is_err());
    }
}

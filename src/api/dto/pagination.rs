//! Query parameters shared by the resource endpoints.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};
use uuid::Uuid;

use crate::domain::pagination::PageRequest;
use crate::error::AppError;

/// `?id=&page=&limit=` on a resource path.
///
/// `page` and `limit` are lenient: a missing, empty or non-numeric value
/// falls back to the default instead of failing the request. `id` is kept
/// raw so its absence can select list mode and its format can be reported.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub id: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ResourceQuery {
    /// Normalized page for list mode.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), self.limit.unwrap_or(0))
    }

    /// Parses the `id` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is missing or not a UUID.
    pub fn require_id(&self) -> Result<Uuid, AppError> {
        let raw = self
            .id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::bad_request("id is required"))?;

        Uuid::parse_str(raw).map_err(|_| AppError::bad_request(format!("invalid id '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &str) -> ResourceQuery {
        let uri: Uri = uri.parse().unwrap();
        Query::<ResourceQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_defaults() {
        let q = parse("/city");
        let page = q.page_request();

        assert!(q.id.is_none());
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_and_limit() {
        let page = parse("/customer?page=2&limit=10").page_request();

        assert_eq!(page.page(), 2);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 10);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let page = parse("/city?page=abc&limit=").page_request();

        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_is_capped() {
        let page = parse("/city?limit=100000").page_request();

        assert_eq!(page.limit(), MAX_LIMIT);
    }

    #[test]
    fn test_require_id() {
        let id = Uuid::new_v4();

        assert_eq!(parse(&format!("/city?id={id}")).require_id().unwrap(), id);
    }

    #[test]
    fn test_require_id_missing_or_invalid() {
        assert!(matches!(
            parse("/city").require_id(),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            parse("/city?id=").require_id(),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            parse("/city?id=42").require_id(),
            Err(AppError::Validation { .. })
        ));
    }
}

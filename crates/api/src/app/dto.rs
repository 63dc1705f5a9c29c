use serde::Deserialize;

use depot_infra::ListRequest;

/// Query parameters of every listing route.
///
/// Names follow the grid front-end: `name` is the search box, `page` the
/// 1-based page, `limit` the page size. Missing values default to `0`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl From<ListParams> for ListRequest {
    fn from(params: ListParams) -> Self {
        ListRequest::new(
            params.name,
            params.page.unwrap_or(0),
            params.limit.unwrap_or(0),
        )
    }
}

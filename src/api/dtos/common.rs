use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable code (e.g. "NOT_FOUND", "INVALID_RELATIONSHIP")
    pub code: String,
    /// Error label (e.g. "Not found", "Validation error")
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

pub(crate) const fn default_list_page() -> usize {
    1
}

pub(crate) const fn default_list_limit() -> usize {
    10
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub limit: usize,
}

impl PaginationMeta {
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let total_pages = total.div_ceil(limit.max(1));
        Self {
            current_page: page,
            total_pages,
            total,
            has_next: page < total_pages,
            has_prev: page > 1,
            limit,
        }
    }
}

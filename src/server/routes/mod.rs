mod answers;
mod questions;

pub use answers::answers_router;
pub use questions::questions_router;

use serde::Deserialize;

use super::error::ApiError;

pub type ApiResponse<T> = Result<T, ApiError>;

pub const DEFAULT_LIMIT: i64 = 100;

/// `?skip=&limit=` query. Values are not validated, the store decides what
/// a negative or zero value means.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

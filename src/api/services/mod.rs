pub mod games;
pub mod helpers;
pub mod routes;
pub mod stats;
pub mod status;
pub mod types;

pub use routes::{api_scope, json_config};
pub use types::{ErrorDetail, ListGamesQuery, MessageResponse, ValidationErrorItem};

//! Service layer for business logic
//!
//! HTTP handlers stay thin and delegate here. Services own the multi-step
//! flows (cascade delete, increment then log) and never see actix types.

mod game_service;
pub mod patch;
mod stats_service;
mod status_service;

pub use game_service::*;
pub use patch::Patch;
pub use stats_service::*;
pub use status_service::*;

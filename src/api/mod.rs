//! HTTP layer: route handlers, response helpers and middleware

pub mod constants;
pub mod middleware;
pub mod services;

//! GameHub - game catalog REST backend
//!
//! Lists, creates, updates and deletes game entries, records download
//! clicks, and computes aggregate statistics on read.
//!
//! # Architecture
//! - `storage`: SeaORM backend (SQLite, MySQL, PostgreSQL) and domain models
//! - `services`: Business logic shared by every HTTP handler
//! - `api`: HTTP handlers, routes and middleware
//! - `config`: Static configuration (TOML + environment)
//! - `runtime`: Application lifecycle and server mode
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;

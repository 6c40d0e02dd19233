//! # SyncTask Shared Library
//!
//! This crate contains the data layer shared by the SyncTask API server:
//! store documents, write acknowledgments, and database plumbing.
//!
//! ## Module Organization
//!
//! - `models`: user and task documents plus write acknowledgments
//! - `db`: connection pool management and schema bootstrap

pub mod db;
pub mod models;

/// Current version of the SyncTask shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: liveness string and health check
/// - `users`: user creation
/// - `tasks`: task creation, board listing, update, delete

use serde::Serialize;

pub mod health;
pub mod tasks;
pub mod users;

/// Success-shaped body returned when a duplicate insert is suppressed
///
/// Duplicates are reported with a 200 and this message, not an error
/// status.
#[derive(Debug, Serialize)]
pub struct AlreadyExists {
    pub message: &'static str,
}

impl Default for AlreadyExists {
    fn default() -> Self {
        Self {
            message: "Already exists",
        }
    }
}

//! # Onboardly - Employee Onboarding Record Keeper
//!
//! Two independent frontends over a shared domain model:
//! - A JSON HTTP API backed by a flat file document (employees + feedback)
//! - A console menu backed by a SQLite database with cascading deletes
//!
//! Onboardly provides:
//! - Employee profiles with a constrained experience level
//! - Canned onboarding checklists derived from experience level
//! - Feedback ratings (1-5) with a terminal bar-chart distribution view

pub mod config;
pub mod console;
pub mod document;
pub mod employee;
pub mod server;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use document::Document;
pub use employee::{Employee, ExperienceLevel, FeedbackEntry};
pub use storage::SqliteStore;

/// Result type alias for Onboardly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Onboardly operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid experience level '{0}': expected Junior, Mid, or Senior")]
    InvalidExperienceLevel(String),

    #[error("Invalid rating '{0}': expected a number between 1 and 5")]
    InvalidRating(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),
}

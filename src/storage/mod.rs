//! SQLite-backed relational store

pub mod schema;
pub mod sqlite;

pub use sqlite::{OnboardingPlan, SqliteStore};

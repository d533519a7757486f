//! Console operation handlers
//!
//! Each menu operation is a validated request plus a handler over the store.
//! Prompting lives in the menu loop; everything here is testable with an
//! in-memory store and no simulated input. Validation failures leave the
//! database untouched.

use crate::employee::{Employee, ExperienceLevel};
use crate::storage::SqliteStore;
use crate::{Error, Result};

/// A validated add/update request
#[derive(Debug, Clone)]
pub struct EmployeeRequest {
    pub name: String,
    pub department: String,
    pub experience_level: ExperienceLevel,
}

impl EmployeeRequest {
    /// Build a request from raw console input. The level is normalized by
    /// capitalization; anything outside Junior/Mid/Senior is rejected.
    pub fn parse(name: &str, department: &str, level_raw: &str) -> Result<Self> {
        let experience_level: ExperienceLevel = level_raw.parse()?;
        Ok(Self {
            name: name.trim().to_string(),
            department: department.trim().to_string(),
            experience_level,
        })
    }
}

/// Parse a console rating string, accepting only integers in 1..=5
pub fn parse_rating(raw: &str) -> Result<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| Error::InvalidRating(raw.trim().to_string()))
}

pub fn add_employee(store: &SqliteStore, req: &EmployeeRequest) -> Result<Employee> {
    store.insert_employee(&req.name, &req.department, req.experience_level)
}

pub fn list_employees(store: &SqliteStore) -> Result<Vec<Employee>> {
    store.all_employees()
}

pub fn update_employee(store: &SqliteStore, id: i64, req: &EmployeeRequest) -> Result<()> {
    store.update_employee(id, &req.name, &req.department, req.experience_level)
}

pub fn delete_employee(store: &SqliteStore, id: i64) -> Result<()> {
    store.delete_employee(id)
}

/// Compute and record the onboarding checklist for an employee, returning
/// the steps string that was stored.
pub fn personalize_onboarding(store: &SqliteStore, id: i64) -> Result<&'static str> {
    let employee = store
        .get_employee(id)?
        .ok_or(Error::EmployeeNotFound(id))?;
    let steps = employee.experience_level.checklist();
    store.insert_onboarding(id, steps)?;
    Ok(steps)
}

/// Validate and record one feedback entry for an existing employee
pub fn gather_feedback(
    store: &SqliteStore,
    id: i64,
    rating_raw: &str,
    comments: &str,
) -> Result<u8> {
    if store.get_employee(id)?.is_none() {
        return Err(Error::EmployeeNotFound(id));
    }
    let rating = parse_rating(rating_raw)?;
    store.insert_feedback(id, rating, comments.trim())?;
    Ok(rating)
}

/// Feedback counts grouped by rating; empty when no feedback exists
pub fn feedback_histogram(store: &SqliteStore) -> Result<Vec<(u8, usize)>> {
    store.rating_histogram()
}

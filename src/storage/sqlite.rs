//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::employee::{Employee, ExperienceLevel, FeedbackEntry};
use crate::{Error, Result};

use super::schema;

/// SQLite-backed storage for employees, onboarding plans, and feedback.
///
/// Owns a single connection used serially; the connection closes when the
/// store is dropped. Foreign keys are enabled so deleting an employee cascades
/// to its onboarding_process and feedback rows.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        // SQLite ships with foreign keys off; cascade delete depends on them.
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Employee Operations ==========

    /// Insert an employee, returning the stored row with its assigned id
    pub fn insert_employee(
        &self,
        name: &str,
        department: &str,
        level: ExperienceLevel,
    ) -> Result<Employee> {
        self.conn.execute(
            "INSERT INTO employees (name, department, experience_level) VALUES (?1, ?2, ?3)",
            params![name, department, level.as_str()],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Employee {
            id,
            name: name.to_string(),
            department: department.to_string(),
            experience_level: level,
        })
    }

    /// Get an employee by id
    pub fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .query_row(
                "SELECT employee_id, name, department, experience_level FROM employees WHERE employee_id = ?1",
                [id],
                |row| Self::row_to_employee(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Fetch all employees ordered by id
    pub fn all_employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT employee_id, name, department, experience_level FROM employees ORDER BY employee_id",
        )?;

        let employees = stmt
            .query_map([], |row| Self::row_to_employee(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    /// Overwrite all fields of an employee. Errors if the id is unknown.
    pub fn update_employee(
        &self,
        id: i64,
        name: &str,
        department: &str,
        level: ExperienceLevel,
    ) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE employees SET name = ?1, department = ?2, experience_level = ?3 WHERE employee_id = ?4",
            params![name, department, level.as_str(), id],
        )?;
        if changed == 0 {
            return Err(Error::EmployeeNotFound(id));
        }
        Ok(())
    }

    /// Delete an employee; dependent onboarding and feedback rows cascade.
    /// Errors if the id is unknown.
    pub fn delete_employee(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE employee_id = ?1", [id])?;
        if changed == 0 {
            return Err(Error::EmployeeNotFound(id));
        }
        Ok(())
    }

    /// Count all employees
    pub fn count_employees(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_employee(row: &rusqlite::Row) -> rusqlite::Result<Employee> {
        let level_str: String = row.get(3)?;
        let experience_level: ExperienceLevel = level_str.parse().map_err(|e: Error| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            department: row.get(2)?,
            experience_level,
        })
    }

    // ========== Onboarding Operations ==========

    /// Record a computed onboarding plan for an employee
    pub fn insert_onboarding(&self, employee_id: i64, steps: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO onboarding_process (employee_id, steps) VALUES (?1, ?2)",
            params![employee_id, steps],
        )?;
        Ok(())
    }

    /// All onboarding plans recorded for an employee
    pub fn onboarding_for(&self, employee_id: i64) -> Result<Vec<OnboardingPlan>> {
        let mut stmt = self.conn.prepare(
            "SELECT process_id, employee_id, steps FROM onboarding_process WHERE employee_id = ?1 ORDER BY process_id",
        )?;

        let plans = stmt
            .query_map([employee_id], |row| {
                Ok(OnboardingPlan {
                    id: row.get(0)?,
                    employee_id: row.get(1)?,
                    steps: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(plans)
    }

    // ========== Feedback Operations ==========

    /// Insert a feedback row. The rating is range-checked by the schema as
    /// well, but callers validate first so bad input never reaches here.
    pub fn insert_feedback(&self, employee_id: i64, rating: u8, comments: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO feedback (employee_id, rating, comments) VALUES (?1, ?2, ?3)",
            params![employee_id, rating, comments],
        )?;
        Ok(())
    }

    /// All feedback recorded for an employee
    pub fn feedback_for(&self, employee_id: i64) -> Result<Vec<FeedbackEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT feedback_id, employee_id, rating, comments FROM feedback WHERE employee_id = ?1 ORDER BY feedback_id",
        )?;

        let entries = stmt
            .query_map([employee_id], |row| {
                Ok(FeedbackEntry {
                    id: row.get(0)?,
                    employee_id: row.get(1)?,
                    rating: row.get(2)?,
                    comments: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Feedback counts grouped by rating, ordered by rating ascending
    pub fn rating_histogram(&self) -> Result<Vec<(u8, usize)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT rating, COUNT(*) FROM feedback GROUP BY rating ORDER BY rating")?;

        let counts = stmt
            .query_map([], |row| {
                let rating: u8 = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((rating, count as usize))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(counts)
    }
}

/// An onboarding plan row recorded by personalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingPlan {
    pub id: i64,
    pub employee_id: i64,
    pub steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_employee(level: ExperienceLevel) -> (SqliteStore, Employee) {
        let store = SqliteStore::open_in_memory().unwrap();
        let employee = store.insert_employee("Ann", "Engineering", level).unwrap();
        (store, employee)
    }

    #[test]
    fn test_employee_crud() {
        let (store, employee) = store_with_employee(ExperienceLevel::Junior);

        let fetched = store.get_employee(employee.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Ann");
        assert_eq!(fetched.experience_level, ExperienceLevel::Junior);

        store
            .update_employee(employee.id, "Ann B", "Platform", ExperienceLevel::Senior)
            .unwrap();
        let updated = store.get_employee(employee.id).unwrap().unwrap();
        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.department, "Platform");
        assert_eq!(updated.experience_level, ExperienceLevel::Senior);

        store.delete_employee(employee.id).unwrap();
        assert!(store.get_employee(employee.id).unwrap().is_none());
    }

    #[test]
    fn test_update_unknown_employee_errors() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = store
            .update_employee(99, "Nobody", "Nowhere", ExperienceLevel::Mid)
            .unwrap_err();
        assert!(matches!(err, Error::EmployeeNotFound(99)));
    }

    #[test]
    fn test_delete_cascades_to_dependents() {
        let (store, employee) = store_with_employee(ExperienceLevel::Mid);

        store
            .insert_onboarding(employee.id, employee.experience_level.checklist())
            .unwrap();
        store.insert_feedback(employee.id, 4, "solid start").unwrap();
        store.insert_feedback(employee.id, 5, "even better").unwrap();

        store.delete_employee(employee.id).unwrap();

        assert!(store.onboarding_for(employee.id).unwrap().is_empty());
        assert!(store.feedback_for(employee.id).unwrap().is_empty());
    }

    #[test]
    fn test_all_employees_ordered_by_id() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .insert_employee("Ann", "Eng", ExperienceLevel::Junior)
            .unwrap();
        store
            .insert_employee("Bo", "Sales", ExperienceLevel::Senior)
            .unwrap();

        let all = store.all_employees().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
        assert_eq!(all[0].name, "Ann");
    }

    #[test]
    fn test_rating_histogram_groups_and_orders() {
        let (store, employee) = store_with_employee(ExperienceLevel::Junior);

        store.insert_feedback(employee.id, 5, "").unwrap();
        store.insert_feedback(employee.id, 3, "").unwrap();
        store.insert_feedback(employee.id, 5, "").unwrap();

        let histogram = store.rating_histogram().unwrap();
        assert_eq!(histogram, vec![(3, 1), (5, 2)]);
    }

    #[test]
    fn test_rating_histogram_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.rating_histogram().unwrap().is_empty());
    }
}

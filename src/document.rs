//! Flat-file JSON document backing the HTTP API
//!
//! A single document holds two untyped lists (employees, feedback) plus a
//! monotonic id counter. Entries stay raw `serde_json::Value`s: the API layer
//! accepts objects of any shape and performs no validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub employees: Vec<Value>,
    #[serde(default)]
    pub feedback: Vec<Value>,
    /// Next employee id to assign. Survives across loads so ids never collide,
    /// even if a delete operation is added later. Absent in older two-key
    /// documents; recomputed from the list length on load.
    #[serde(default)]
    pub next_employee_id: u64,
}

impl Document {
    /// Load the document from disk. A missing file or a parse failure yields
    /// the empty default document.
    pub fn load(path: &Path) -> Self {
        let mut doc = std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str::<Document>(&contents).ok())
            .unwrap_or_default();

        if doc.next_employee_id == 0 {
            doc.next_employee_id = doc.employees.len() as u64 + 1;
        }
        doc
    }

    /// Persist the whole document, overwriting the file. Not atomic: a crash
    /// mid-write can leave a torn file, which the next load treats as empty.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Assign the next id to an employee object and append it. Returns the
    /// stored object, id included.
    pub fn push_employee(&mut self, mut employee: Value) -> Value {
        let id = self.next_employee_id;
        self.next_employee_id += 1;

        if let Some(obj) = employee.as_object_mut() {
            obj.insert("id".to_string(), Value::from(id));
        }
        self.employees.push(employee.clone());
        employee
    }

    /// Append a raw feedback object. No validation of rating or employee id.
    pub fn push_feedback(&mut self, feedback: Value) -> Value {
        self.feedback.push(feedback.clone());
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::load(&dir.path().join("absent.json"));
        assert!(doc.employees.is_empty());
        assert!(doc.feedback.is_empty());
        assert_eq!(doc.next_employee_id, 1);
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{not json").unwrap();

        let doc = Document::load(&path);
        assert!(doc.employees.is_empty());
        assert!(doc.feedback.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut doc = Document::load(&path);
        doc.push_employee(json!({"name": "Ann", "department": "Eng"}));
        doc.push_employee(json!({"name": "Bo"}));
        doc.push_feedback(json!({"employee_id": 1, "rating": 5, "comments": "great"}));
        doc.save(&path).unwrap();

        let reloaded = Document::load(&path);
        assert_eq!(reloaded.employees, doc.employees);
        assert_eq!(reloaded.feedback, doc.feedback);
        assert_eq!(reloaded.employees[0]["name"], "Ann");
        assert_eq!(reloaded.employees[1]["name"], "Bo");
    }

    #[test]
    fn test_push_employee_assigns_sequential_ids() {
        let mut doc = Document::load(Path::new("/nonexistent/data.json"));
        let first = doc.push_employee(json!({"name": "Ann"}));
        let second = doc.push_employee(json!({"name": "Bo"}));
        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
    }

    #[test]
    fn test_counter_recovered_from_legacy_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"employees": [{"name": "Ann", "id": 1}], "feedback": []}"#,
        )
        .unwrap();

        let mut doc = Document::load(&path);
        let stored = doc.push_employee(json!({"name": "Bo"}));
        assert_eq!(stored["id"], 2);
    }

    #[test]
    fn test_push_feedback_is_unvalidated() {
        let mut doc = Document::default();
        let stored = doc.push_feedback(json!({"rating": 42, "anything": true}));
        assert_eq!(stored["rating"], 42);
        assert_eq!(doc.feedback.len(), 1);
    }
}

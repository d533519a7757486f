//! Database schema definitions

/// SQL to create the employees table
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    department TEXT NOT NULL,
    experience_level TEXT CHECK(experience_level IN ('Junior', 'Mid', 'Senior')) NOT NULL
)
"#;

/// SQL to create the onboarding_process table
pub const CREATE_ONBOARDING_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS onboarding_process (
    process_id INTEGER PRIMARY KEY,
    employee_id INTEGER,
    steps TEXT NOT NULL,
    FOREIGN KEY (employee_id) REFERENCES employees(employee_id) ON DELETE CASCADE
)
"#;

/// SQL to create the feedback table
pub const CREATE_FEEDBACK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS feedback (
    feedback_id INTEGER PRIMARY KEY,
    employee_id INTEGER,
    rating INTEGER CHECK(rating BETWEEN 1 AND 5),
    comments TEXT,
    FOREIGN KEY (employee_id) REFERENCES employees(employee_id) ON DELETE CASCADE
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_onboarding_employee ON onboarding_process(employee_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_employee ON feedback(employee_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_rating ON feedback(rating)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_EMPLOYEES_TABLE,
        CREATE_ONBOARDING_TABLE,
        CREATE_FEEDBACK_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

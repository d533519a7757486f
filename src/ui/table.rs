use tabled::{Table, Tabled, settings::Style};

use crate::employee::Employee;

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Experience")]
    experience: &'static str,
}

/// Render the employee list as a terminal table. Presentation-only.
pub fn employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return String::new();
    }

    let rows: Vec<EmployeeRow> = employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id,
            name: e.name.clone(),
            department: e.department.clone(),
            experience: e.experience_level.as_str(),
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::ExperienceLevel;

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(employee_table(&[]), "");
    }

    #[test]
    fn test_table_has_headers_and_rows() {
        let employees = vec![Employee {
            id: 1,
            name: "Ann".to_string(),
            department: "Engineering".to_string(),
            experience_level: ExperienceLevel::Mid,
        }];

        let rendered = employee_table(&employees);
        for expected in ["ID", "Name", "Department", "Experience", "Ann", "Mid"] {
            assert!(rendered.contains(expected), "missing {expected}: {rendered}");
        }
    }
}

//! Menu-driven console frontend over the SQLite store
//!
//! The loop only prompts and prints; validation and mutation live in
//! [`commands`] so every operation is testable without simulated input.

use ::console::Term;

use crate::storage::SqliteStore;
use crate::{Result, ui};

pub mod commands;

use commands::EmployeeRequest;

const MENU: &str = "\
--- Employee Onboarding Optimizer ---
1. Add New Employee
2. View All Employees (Table View)
3. Update Employee Details
4. Delete Employee
5. Personalize Onboarding Plan
6. Gather Onboarding Feedback
7. Visualize Feedback (Bar Chart)
8. Exit";

/// Run the blocking menu loop until the user exits. The store's connection
/// closes when it is dropped on return.
pub fn run(store: &SqliteStore) -> Result<()> {
    let term = Term::stdout();

    loop {
        println!();
        ui::header(MENU);

        let choice = prompt(&term, "Enter your choice (1-8)")?;
        match choice.as_str() {
            "1" => report(add_employee(&term, store)),
            "2" => report(view_employees(store)),
            "3" => report(update_employee(&term, store)),
            "4" => report(delete_employee(&term, store)),
            "5" => report(personalize_onboarding(&term, store)),
            "6" => report(gather_feedback(&term, store)),
            "7" => report(visualize_feedback(store)),
            "8" => {
                println!("Exiting... Goodbye!");
                return Ok(());
            }
            _ => ui::error("Invalid choice! Please enter a number between 1 and 8."),
        }
    }
}

/// Validation failures abort the operation with a message and return to the
/// menu; nothing is partially written.
fn report(result: Result<()>) {
    if let Err(e) = result {
        ui::error(&e.to_string());
    }
}

fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{label}: "))?;
    Ok(term.read_line()?.trim().to_string())
}

fn prompt_id(term: &Term, label: &str) -> Result<Option<i64>> {
    let raw = prompt(term, label)?;
    Ok(raw.parse().ok())
}

fn add_employee(term: &Term, store: &SqliteStore) -> Result<()> {
    let name = prompt(term, "Enter Employee Name")?;
    let department = prompt(term, "Enter Department")?;
    let level = prompt(term, "Enter Experience Level (Junior/Mid/Senior)")?;

    let req = EmployeeRequest::parse(&name, &department, &level)?;
    let employee = commands::add_employee(store, &req)?;
    ui::success(&format!("Employee {} added successfully!", employee.name));
    Ok(())
}

fn view_employees(store: &SqliteStore) -> Result<()> {
    let employees = commands::list_employees(store)?;
    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    ui::header("Employee List");
    println!("{}", ui::employee_table(&employees));
    Ok(())
}

fn update_employee(term: &Term, store: &SqliteStore) -> Result<()> {
    let Some(id) = prompt_id(term, "Enter Employee ID to update")? else {
        ui::error("Employee not found.");
        return Ok(());
    };

    let name = prompt(term, "Enter New Name")?;
    let department = prompt(term, "Enter New Department")?;
    let level = prompt(term, "Enter New Experience Level (Junior/Mid/Senior)")?;

    let req = EmployeeRequest::parse(&name, &department, &level)?;
    commands::update_employee(store, id, &req)?;
    ui::success("Employee details updated successfully!");
    Ok(())
}

fn delete_employee(term: &Term, store: &SqliteStore) -> Result<()> {
    let Some(id) = prompt_id(term, "Enter Employee ID to delete")? else {
        ui::error("Employee not found.");
        return Ok(());
    };

    commands::delete_employee(store, id)?;
    ui::success("Employee deleted successfully!");
    Ok(())
}

fn personalize_onboarding(term: &Term, store: &SqliteStore) -> Result<()> {
    let Some(id) = prompt_id(term, "Enter Employee ID to personalize onboarding")? else {
        ui::error("Employee not found.");
        return Ok(());
    };

    let steps = commands::personalize_onboarding(store, id)?;
    ui::success(&format!("Personalized onboarding for Employee {id}: {steps}"));
    Ok(())
}

fn gather_feedback(term: &Term, store: &SqliteStore) -> Result<()> {
    let Some(id) = prompt_id(term, "Enter Employee ID for feedback")? else {
        ui::error("Employee not found.");
        return Ok(());
    };

    let rating = prompt(term, "Enter Rating (1-5)")?;
    let comments = prompt(term, "Enter Comments")?;

    commands::gather_feedback(store, id, &rating, &comments)?;
    ui::success("Feedback recorded successfully!");
    Ok(())
}

fn visualize_feedback(store: &SqliteStore) -> Result<()> {
    let histogram = commands::feedback_histogram(store)?;
    if histogram.is_empty() {
        println!("No feedback available.");
        return Ok(());
    }

    ui::header("Onboarding Feedback Distribution");
    print!("{}", ui::rating_chart(&histogram));
    Ok(())
}

//! Roster loading: constructs the initial employee tree.
//!
//! Rosters are TOML files with nested `[[children]]` tables:
//!
//! ```toml
//! id = 1
//! name = "John Smith"
//!
//! [[children]]
//! id = 2
//! name = "Margot Donald"
//! ```

use std::fs;
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;
use tracing::instrument;

use crate::domain::Employee;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("invalid roster format: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate employee id: {0}")]
    DuplicateId(u32),

    #[error("employee {0} has an empty name")]
    EmptyName(u32),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Load and validate a roster file.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> RosterResult<Employee> {
    let content = fs::read_to_string(path)?;
    from_toml(&content)
}

pub fn from_toml(content: &str) -> RosterResult<Employee> {
    let root: Employee = toml::from_str(content)?;
    validate(&root)?;
    Ok(root)
}

/// Ids must be unique tree-wide and names non-empty.
fn validate(root: &Employee) -> RosterResult<()> {
    if let Some(&duplicate) = root.ids().iter().duplicates().next() {
        return Err(RosterError::DuplicateId(duplicate));
    }
    for employee in root.iter() {
        if employee.name.trim().is_empty() {
            return Err(RosterError::EmptyName(employee.id));
        }
    }
    Ok(())
}

/// The built-in sample organization, used when no roster file is given.
pub fn sample() -> Employee {
    Employee::with_children(
        1,
        "John Smith",
        vec![
            Employee::with_children(
                2,
                "Margot Donald",
                vec![Employee::with_children(
                    3,
                    "Cassandra Reynolds",
                    vec![
                        Employee::new(4, "Mary Blue"),
                        Employee::with_children(
                            5,
                            "Bob Saget",
                            vec![Employee::with_children(
                                6,
                                "Tina Teff",
                                vec![Employee::new(7, "Will Turner")],
                            )],
                        ),
                    ],
                )],
            ),
            Employee::with_children(
                8,
                "Tyler Simpson",
                vec![
                    Employee::with_children(
                        9,
                        "Harry Tobs",
                        vec![Employee::new(10, "Thomas Brown")],
                    ),
                    Employee::new(11, "George Carrey"),
                    Employee::new(12, "Gary Styles"),
                ],
            ),
            Employee::new(13, "Ben Willis"),
            Employee::with_children(
                14,
                "Georgina Flangy",
                vec![Employee::new(15, "Sophie Turner")],
            ),
        ],
    )
}

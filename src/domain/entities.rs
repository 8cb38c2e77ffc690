//! Domain entities: the employee tree

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the organizational hierarchy.
///
/// Ownership keeps the tree acyclic and connected by construction: every
/// employee except the root lives in exactly one `children` vector. `Clone`
/// is a deep copy, which is exactly what the snapshot history needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique across the whole tree, immutable once created
    pub id: u32,
    pub name: String,
    /// Direct reports in insertion order; the order is semantically visible
    #[serde(default)]
    pub children: Vec<Employee>,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.name)
    }
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(id: u32, name: impl Into<String>, children: Vec<Employee>) -> Self {
        Self {
            id,
            name: name.into(),
            children,
        }
    }

    /// Pre-order search: self first, then each child subtree in stored order.
    pub fn find(&self, id: u32) -> Option<&Employee> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Employee> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// The node whose immediate children contain `id`. Checks the direct
    /// children first (no recursive self-check), then recurses per subtree.
    /// The root itself has no supervisor.
    pub fn find_supervisor(&self, id: u32) -> Option<&Employee> {
        if self.children.iter().any(|child| child.id == id) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_supervisor(id))
    }

    pub fn find_supervisor_mut(&mut self, id: u32) -> Option<&mut Employee> {
        if self.children.iter().any(|child| child.id == id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_supervisor_mut(id))
    }

    /// Pre-order iterator over all nodes of the subtree.
    pub fn iter(&self) -> EmployeeIter<'_> {
        EmployeeIter { stack: vec![self] }
    }

    /// All ids of the subtree in pre-order.
    pub fn ids(&self) -> Vec<u32> {
        self.iter().map(|node| node.id).collect()
    }

    /// Number of nodes in the subtree.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Employee::depth)
            .max()
            .unwrap_or(0)
    }
}

pub struct EmployeeIter<'a> {
    stack: Vec<&'a Employee>,
}

impl<'a> Iterator for EmployeeIter<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

//! Schema rejection errors.

use std::fmt;

use thiserror::Error;

use crate::schema::Issue;

/// A schema rejected a candidate value.
///
/// Always carries at least one [`Issue`]. On the success path this error
/// reaches the caller; while matching error kinds it only advances dispatch
/// to the next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct SchemaValidationError {
    issues: Vec<Issue>,
}

impl SchemaValidationError {
    /// Creates a validation error from a list of issues.
    ///
    /// An empty list is replaced by a single generic issue.
    pub fn new(issues: Vec<Issue>) -> Self {
        let issues = if issues.is_empty() {
            vec![Issue::new("value was rejected by the schema")]
        } else {
            issues
        };
        Self { issues }
    }

    /// Returns the reported issues in schema order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes the error and returns its issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Schema validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

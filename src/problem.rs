//! Problem instances: a declared count, an optional element list and a label.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::ReversalChecker;
use crate::error::CheckResult;

/// Rendered element lists longer than this are abbreviated in `Display`.
const DISPLAY_LIMIT: usize = 20;
/// Characters kept from each end of an abbreviated element list.
const DISPLAY_EDGE: usize = 10;

/// An immutable problem instance.
///
/// Nothing is validated at construction; the contract is checked when the
/// instance is evaluated.
///
/// ```
/// use reversal_check::Problem;
///
/// let problem = Problem::new(7, vec![10, 321, 5, 23, 12, 17, 123], "statement example");
/// assert_eq!(problem.solve(), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    declared_count: i64,
    elements: Option<Vec<i64>>,
    description: String,
}

impl Problem {
    /// Creates a problem with an element list.
    #[must_use]
    pub fn new(declared_count: i64, elements: Vec<i64>, description: impl Into<String>) -> Self {
        Self {
            declared_count,
            elements: Some(elements),
            description: description.into(),
        }
    }

    /// Creates a problem whose element list is absent.
    #[must_use]
    pub fn without_elements(declared_count: i64, description: impl Into<String>) -> Self {
        Self {
            declared_count,
            elements: None,
            description: description.into(),
        }
    }

    /// Returns the declared element count.
    #[must_use]
    pub const fn declared_count(&self) -> i64 {
        self.declared_count
    }

    /// Returns the elements, if present.
    #[must_use]
    pub fn elements(&self) -> Option<&[i64]> {
        self.elements.as_deref()
    }

    /// Returns the diagnostic label.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluates the problem with the reference rules.
    pub fn solve(&self) -> CheckResult<bool> {
        ReversalChecker::new().check(self)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .elements
            .as_ref()
            .map_or_else(|| "null".to_string(), |elements| format!("{elements:?}"));
        write!(
            f,
            "{}: declared_count={}, elements=",
            self.description, self.declared_count
        )?;
        // Debug output of a Vec<i64> is ASCII, so byte slicing is safe.
        if rendered.len() > DISPLAY_LIMIT {
            write!(
                f,
                "{} ... {}",
                &rendered[..DISPLAY_EDGE],
                &rendered[rendered.len() - DISPLAY_EDGE..]
            )
        } else {
            f.write_str(&rendered)
        }
    }
}

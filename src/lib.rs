//! Reversal check: does the digit-reversal of the last number occur earlier
//! in the list?
//!
//! # Overview
//!
//! The core is a validate-then-compute predicate over a declared element
//! count and an optional list of integers. Input-contract violations are
//! reported as [`CheckError`]s whose messages are fixed text, so existing
//! test suites can compare them verbatim.
//!
//! Around the core sits a test-design and mutation-testing harness: suites
//! built with equivalence partitioning, boundary analysis, cause-effect
//! graphing and decision coverage, plus built-in mutants of the predicate
//! that the suites are expected to kill.
//!
//! # Module Structure
//!
//! - [`error`]: Contract violations and count bounds
//! - [`mirror`]: Decimal digit reversal
//! - [`problem`]: Problem instances
//! - [`checker`]: The checker and its pluggable [`CheckRules`]
//! - [`mutant`]: Built-in mutants
//! - [`suite`]: Test cases per test-design technique
//! - [`mutation`]: Mutation runner and reports
//! - [`config`]: Mutation-run configuration
//!
//! ```
//! use reversal_check::{CheckError, evaluate};
//!
//! assert_eq!(evaluate(7, Some(&[10, 321, 5, 23, 12, 17, 123]), "example"), Ok(true));
//! assert_eq!(
//!     evaluate(0, Some(&[1, 2, 3, 4]), "too few").unwrap_err().to_string(),
//!     "The number of elements is outside the interval [2, 100]."
//! );
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod mirror;
pub mod mutant;
pub mod mutation;
pub mod problem;
pub mod suite;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_logging;

pub use checker::{CheckRules, Reference, ReversalChecker, evaluate};
pub use config::{ConfigError, MutationConfig};
pub use error::{CheckError, CheckErrorKind, CheckResult, MAX_ELEMENTS, MIN_ELEMENTS};
pub use mutant::{Mutant, MutationOperator, builtin_mutants};
pub use mutation::{MutantResult, MutationReport, MutationRunner};
pub use problem::Problem;
pub use suite::{Expected, TestCase, Technique};

//! Test data derived with classic test-design techniques.
//!
//! Each technique produces an ordered list of [`TestCase`]s pairing a
//! [`Problem`] with its [`Expected`] outcome. The same lists drive the
//! reference checks and the mutation runner.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};
use crate::problem::Problem;

const INVALID_COUNT: &str = "The number of elements is outside the interval [2, 100].";
const NULL_INPUT: &str = "Input array is null.";
const LENGTH_MISMATCH: &str = "Input array length is different than the N given.";

/// Expected outcome of evaluating a problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// Evaluation returns this verdict.
    Value(bool),
    /// Evaluation fails with exactly this message.
    Error(String),
}

impl Expected {
    /// Expects a failure with `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Returns true when `outcome` satisfies this expectation.
    ///
    /// Failures are compared by their rendered message, character for character.
    #[must_use]
    pub fn matches(&self, outcome: &CheckResult<bool>) -> bool {
        match (self, outcome) {
            (Self::Value(expected), Ok(actual)) => expected == actual,
            (Self::Error(expected), Err(err)) => *expected == err.to_string(),
            _ => false,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

impl From<&CheckResult<bool>> for Expected {
    fn from(outcome: &CheckResult<bool>) -> Self {
        match outcome {
            Ok(v) => Self::Value(*v),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

impl From<CheckError> for Expected {
    fn from(err: CheckError) -> Self {
        Self::Error(err.to_string())
    }
}

/// A problem paired with its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCase {
    /// The instance under test.
    pub problem: Problem,
    /// What evaluating it must produce.
    pub expected: Expected,
}

impl TestCase {
    /// Creates a case expecting a verdict.
    #[must_use]
    pub fn value(problem: Problem, verdict: bool) -> Self {
        Self {
            problem,
            expected: Expected::Value(verdict),
        }
    }

    /// Creates a case expecting a failure message.
    #[must_use]
    pub fn error(problem: Problem, message: impl Into<String>) -> Self {
        Self {
            problem,
            expected: Expected::error(message),
        }
    }

    /// Returns the display name used in reports.
    #[must_use]
    pub fn name(&self) -> String {
        self.problem.to_string()
    }
}

/// Test-design technique that produced a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Equivalence partitioning.
    EquivalencePartitioning,
    /// Boundary value analysis.
    BoundaryAnalysis,
    /// Cause-effect graphing.
    CauseEffectGraph,
    /// Modified condition/decision coverage.
    DecisionCoverage,
    /// Cases added to kill mutants that survive the other suites.
    MutantKillers,
}

/// All techniques in a stable order.
pub const ALL_TECHNIQUES: &[Technique] = &[
    Technique::EquivalencePartitioning,
    Technique::BoundaryAnalysis,
    Technique::CauseEffectGraph,
    Technique::DecisionCoverage,
    Technique::MutantKillers,
];

/// The black-box techniques.
pub const BLACK_BOX_TECHNIQUES: &[Technique] = &[
    Technique::EquivalencePartitioning,
    Technique::BoundaryAnalysis,
    Technique::CauseEffectGraph,
];

impl Technique {
    /// Returns a stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EquivalencePartitioning => "equivalence_partitioning",
            Self::BoundaryAnalysis => "boundary_analysis",
            Self::CauseEffectGraph => "cause_effect_graph",
            Self::DecisionCoverage => "decision_coverage",
            Self::MutantKillers => "mutant_killers",
        }
    }

    /// Builds this technique's cases.
    #[must_use]
    pub fn cases(self) -> Vec<TestCase> {
        match self {
            Self::EquivalencePartitioning => equivalence_partitioning(),
            Self::BoundaryAnalysis => boundary_analysis(),
            Self::CauseEffectGraph => cause_effect_graph(),
            Self::DecisionCoverage => decision_coverage(),
            Self::MutantKillers => mutant_killers(),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every suite, each case tagged with its technique.
#[must_use]
pub fn all_cases() -> Vec<(Technique, TestCase)> {
    ALL_TECHNIQUES
        .iter()
        .flat_map(|&technique| technique.cases().into_iter().map(move |c| (technique, c)))
        .collect()
}

/// Equivalence partitions.
///
/// `n` splits into `n < 2`, `2 <= n <= 100` and `n > 100`. Inside the valid
/// range the element list is absent, of the wrong length, contains a
/// negative, or is well formed with a false or a true verdict: 2 + 5 classes.
#[must_use]
pub fn equivalence_partitioning() -> Vec<TestCase> {
    vec![
        TestCase::error(Problem::new(0, vec![1, 2, 3, 4], "N < 2"), INVALID_COUNT),
        TestCase::error(
            Problem::new(123, vec![1, 2, 3, 4], "N > 100"),
            INVALID_COUNT,
        ),
        TestCase::error(
            Problem::without_elements(10, "N inside [2, 100] and null input data"),
            NULL_INPUT,
        ),
        TestCase::error(
            Problem::new(
                3,
                vec![1, 2, 3, 4, 5, 6],
                "N inside [2, 100] and input data of invalid length",
            ),
            LENGTH_MISMATCH,
        ),
        TestCase::error(
            Problem::new(
                6,
                vec![1, 2, -3, 4, -5, 6],
                "N inside [2, 100] and input data with negative values",
            ),
            negative_at(2),
        ),
        TestCase::value(
            Problem::new(
                6,
                vec![10, 20, 30, 40, 50, 60],
                "N inside [2, 100] and the result is false",
            ),
            false,
        ),
        TestCase::value(
            Problem::new(
                6,
                vec![10, 11, 12, 13, 14, 31],
                "N inside [2, 100] and the result is true",
            ),
            true,
        ),
    ]
}

/// Boundary values.
///
/// `n` takes 0 and 1 below the range, 2, 50 and 100 inside it, and 101 and
/// 150 above it. Inside the range the mirror sits at the first and at the
/// before-last position; for `n = 2` those coincide, leaving nine cases.
#[must_use]
pub fn boundary_analysis() -> Vec<TestCase> {
    vec![
        TestCase::error(
            Problem::new(0, vec![], "N is less than the lower bound"),
            INVALID_COUNT,
        ),
        TestCase::error(
            Problem::new(1, vec![1], "N is less than the lower bound"),
            INVALID_COUNT,
        ),
        TestCase::value(
            Problem::new(
                2,
                vec![123, 321],
                "N is equal to the lower bound, solution is on the position 0",
            ),
            true,
        ),
        TestCase::value(
            Problem::new(
                50,
                planted(50, 0),
                "N is inside the expected bounds, solution is on the position 0",
            ),
            true,
        ),
        TestCase::value(
            Problem::new(
                50,
                planted(50, 48),
                "N is inside the expected bounds, solution is on the before-the-last position",
            ),
            true,
        ),
        TestCase::value(
            Problem::new(
                100,
                planted(100, 0),
                "N is equal to the higher bound, solution is on the position 0",
            ),
            true,
        ),
        TestCase::value(
            Problem::new(
                100,
                planted(100, 98),
                "N is equal to the higher bound, solution is on the position 98",
            ),
            true,
        ),
        TestCase::error(
            Problem::new(101, vec![123, 321], "N is greater than the higher bound"),
            INVALID_COUNT,
        ),
        TestCase::error(
            Problem::new(150, vec![123, 321], "N is greater than the higher bound"),
            INVALID_COUNT,
        ),
    ]
}

/// Cause-effect graph.
///
/// Causes: C1 `n` in `[2, 100]`, C2 elements absent, C3 length equals `n`,
/// C4 a negative element, C5 the mirror of the last element occurs earlier.
/// Effects: Ef1..Ef4 the four failures, Ef5 `true`, Ef6 `false`.
#[must_use]
pub fn cause_effect_graph() -> Vec<TestCase> {
    vec![
        TestCase::error(
            Problem::new(0, vec![1, 2, 3, 4], "C1 false -> Ef1 true"),
            INVALID_COUNT,
        ),
        TestCase::error(
            Problem::without_elements(10, "C1 true, C2 true -> Ef2 true"),
            NULL_INPUT,
        ),
        TestCase::error(
            Problem::new(
                3,
                vec![1, 2, 3, 4, 5, 6],
                "C1 true, C2 false, C3 false -> Ef3 true",
            ),
            LENGTH_MISMATCH,
        ),
        TestCase::error(
            Problem::new(
                6,
                vec![1, 2, -3, 4, -5, 6],
                "C1 true, C2 false, C3 true, C4 true -> Ef4 true",
            ),
            negative_at(2),
        ),
        TestCase::value(
            Problem::new(
                6,
                vec![16, 2, 3, 4, 5, 61],
                "C1 true, C2 false, C3 true, C4 false, C5 true -> Ef5 true",
            ),
            true,
        ),
        TestCase::value(
            Problem::new(
                6,
                vec![10, 11, 12, 13, 14, 38],
                "C1 true, C2 false, C3 true, C4 false, C5 false -> Ef6 true",
            ),
            false,
        ),
    ]
}

/// Modified condition/decision coverage.
///
/// Every decision of the checker is driven both ways: the count bounds
/// (each operand of the disjunction independently), the absence test, the
/// length test, the validation loop, the natural-number test, the digit loop,
/// the scan loop and the equality test.
#[must_use]
pub fn decision_coverage() -> Vec<TestCase> {
    let plain = || vec![1, 2, 3, 4];
    vec![
        TestCase::error(
            Problem::new(120, vec![1, 2, 3], "count bounds: 'n < 2' false, 'n > 100' true"),
            INVALID_COUNT,
        ),
        TestCase::error(
            Problem::new(1, vec![1, 2, 3], "count bounds: 'n < 2' true, 'n > 100' false"),
            INVALID_COUNT,
        ),
        TestCase::value(
            Problem::new(4, plain(), "count bounds: 'n < 2' false, 'n > 100' false"),
            false,
        ),
        TestCase::error(
            Problem::without_elements(4, "absence test: elements absent"),
            NULL_INPUT,
        ),
        TestCase::value(
            Problem::new(4, plain(), "absence test: elements present"),
            false,
        ),
        TestCase::error(
            Problem::new(4, vec![1, 2, 3], "length test: length differs from n"),
            LENGTH_MISMATCH,
        ),
        TestCase::value(
            Problem::new(4, plain(), "length test: length equals n"),
            false,
        ),
        TestCase::value(
            Problem::new(4, plain(), "validation loop: 'i < n' true and false"),
            false,
        ),
        TestCase::error(
            Problem::new(4, vec![-1, 2, 3, 4], "natural test: 'value < 0' true"),
            negative_at(0),
        ),
        TestCase::value(
            Problem::new(4, plain(), "natural test: 'value < 0' false"),
            false,
        ),
        TestCase::value(
            Problem::new(4, plain(), "digit loop: 'rest != 0' true and false"),
            false,
        ),
        TestCase::value(
            Problem::new(4, plain(), "scan loop: 'i < n - 1' true and false"),
            false,
        ),
        TestCase::value(
            Problem::new(4, vec![12, 2, 3, 21], "equality test: 'value == mirror' true"),
            true,
        ),
        TestCase::value(
            Problem::new(4, plain(), "equality test: 'value == mirror' false"),
            false,
        ),
    ]
}

/// Cases aimed at mutants that survive the black-box suites.
#[must_use]
pub fn mutant_killers() -> Vec<TestCase> {
    vec![
        // A zero element is natural.
        TestCase::value(
            Problem::new(4, vec![0, 1, 2, 12], "kill mutant solve_ROR_32"),
            false,
        ),
        // A palindromic last element must not match itself.
        TestCase::value(
            Problem::new(4, vec![1, 2, 3, 121], "kill mutant solve_ROR_39"),
            false,
        ),
        // A 9 in the last element carries under a post-increment.
        TestCase::value(
            Problem::new(3, vec![91, 5, 19], "kill mutant mirror_AOIS_59"),
            true,
        ),
    ]
}

fn negative_at(index: usize) -> String {
    CheckError::NegativeElement { index, value: -1 }.to_string()
}

/// `1..=n` with 321 planted at `position` and 123 as the last element.
fn planted(n: i64, position: usize) -> Vec<i64> {
    let mut elements: Vec<i64> = (1..=n).collect();
    elements[position] = 321;
    if let Some(last) = elements.last_mut() {
        *last = 123;
    }
    elements
}

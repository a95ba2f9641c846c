//! Built-in mutants of the reversal checker.
//!
//! Each mutant alters exactly one [`CheckRules`] decision point. Names follow
//! the `<routine>_<OPERATOR>_<site>` convention of classic mutation tools so
//! reports stay comparable with generated mutant sets.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::CheckRules;

/// Mutation operator class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MutationOperator {
    /// Arithmetic operator replacement (binary).
    #[serde(rename = "AORB")]
    Aorb,
    /// Arithmetic operator insertion (short-cut increment/decrement).
    #[serde(rename = "AOIS")]
    Aois,
    /// Operator deletion.
    #[serde(rename = "CDL")]
    Cdl,
    /// Relational operator replacement.
    #[serde(rename = "ROR")]
    Ror,
}

impl MutationOperator {
    /// Returns the conventional upper-case abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aorb => "AORB",
            Self::Aois => "AOIS",
            Self::Cdl => "CDL",
            Self::Ror => "ROR",
        }
    }
}

impl fmt::Display for MutationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in mutants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mutant {
    /// Mirror accumulates `acc * 10 - digit`.
    #[serde(rename = "mirror_AORB_20")]
    MirrorSubtractsDigit,
    /// Mirror post-increments before dividing: `rest = (rest + 1) / 10`.
    #[serde(rename = "mirror_AOIS_59")]
    MirrorPostIncrement,
    /// Mirror drops the positional shift and sums digits.
    #[serde(rename = "mirror_CDL_11")]
    MirrorDropsShift,
    /// Natural-number test rejects zero (`value > 0`).
    #[serde(rename = "solve_ROR_32")]
    NaturalExcludesZero,
    /// Scan compares the last element with itself (`i <= n - 1`).
    #[serde(rename = "solve_ROR_39")]
    ScanIncludesLast,
}

/// Returns all built-in mutants in a stable order.
#[must_use]
pub fn builtin_mutants() -> Vec<Mutant> {
    vec![
        Mutant::MirrorSubtractsDigit,
        Mutant::MirrorPostIncrement,
        Mutant::MirrorDropsShift,
        Mutant::NaturalExcludesZero,
        Mutant::ScanIncludesLast,
    ]
}

impl Mutant {
    /// Returns a stable name for the mutant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MirrorSubtractsDigit => "mirror_AORB_20",
            Self::MirrorPostIncrement => "mirror_AOIS_59",
            Self::MirrorDropsShift => "mirror_CDL_11",
            Self::NaturalExcludesZero => "solve_ROR_32",
            Self::ScanIncludesLast => "solve_ROR_39",
        }
    }

    /// Returns the operator class that produced the mutant.
    #[must_use]
    pub const fn operator(self) -> MutationOperator {
        match self {
            Self::MirrorSubtractsDigit => MutationOperator::Aorb,
            Self::MirrorPostIncrement => MutationOperator::Aois,
            Self::MirrorDropsShift => MutationOperator::Cdl,
            Self::NaturalExcludesZero | Self::ScanIncludesLast => MutationOperator::Ror,
        }
    }

    /// Returns a one-line description of the change.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MirrorSubtractsDigit => "mirror: `acc * 10 + digit` becomes `acc * 10 - digit`",
            Self::MirrorPostIncrement => "mirror: digit read as `rest++ % 10`",
            Self::MirrorDropsShift => "mirror: `acc * 10 + digit` becomes `acc + digit`",
            Self::NaturalExcludesZero => "validation: `value < 0` becomes `value <= 0`",
            Self::ScanIncludesLast => "scan: `i < n - 1` becomes `i <= n - 1`",
        }
    }

    /// Looks up a built-in mutant by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        builtin_mutants().into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Mutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CheckRules for Mutant {
    fn mirror(&self, value: i64) -> Option<i64> {
        match self {
            Self::MirrorSubtractsDigit => fold_digits(value, |acc, digit| {
                acc.checked_mul(10)?.checked_sub(digit)
            }),
            Self::MirrorPostIncrement => mirror_post_increment(value),
            Self::MirrorDropsShift => fold_digits(value, i64::checked_add),
            Self::NaturalExcludesZero | Self::ScanIncludesLast => {
                crate::mirror::reverse_digits(value)
            }
        }
    }

    fn is_natural(&self, value: i64) -> bool {
        match self {
            Self::NaturalExcludesZero => value > 0,
            _ => value >= 0,
        }
    }

    fn scan_len(&self, len: usize) -> usize {
        match self {
            Self::ScanIncludesLast => len,
            _ => len.saturating_sub(1),
        }
    }
}

/// Walks the digits of `value` from least significant, combining them with
/// `step`.
fn fold_digits(value: i64, step: impl Fn(i64, i64) -> Option<i64>) -> Option<i64> {
    let mut rest = value;
    let mut acc = 0;
    while rest != 0 {
        acc = step(acc, rest % 10)?;
        rest /= 10;
    }
    Some(acc)
}

fn mirror_post_increment(value: i64) -> Option<i64> {
    let mut rest = value;
    let mut acc: i64 = 0;
    while rest != 0 {
        acc = acc.checked_mul(10)?.checked_add(rest % 10)?;
        rest = rest.checked_add(1)? / 10;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{Reference, ReversalChecker};

    #[test]
    fn names_are_unique_and_roundtrip() {
        let mutants = builtin_mutants();
        for (i, a) in mutants.iter().enumerate() {
            assert_eq!(Mutant::from_name(a.name()), Some(*a));
            for b in &mutants[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(Mutant::from_name("mirror_XYZ_1"), None);
    }

    #[test]
    fn serde_uses_stable_names() {
        let json = serde_json::to_string(&Mutant::ScanIncludesLast).unwrap();
        assert_eq!(json, "\"solve_ROR_39\"");
        let back: Mutant = serde_json::from_str("\"mirror_AORB_20\"").unwrap();
        assert_eq!(back, Mutant::MirrorSubtractsDigit);
        let op = serde_json::to_string(&MutationOperator::Aois).unwrap();
        assert_eq!(op, "\"AOIS\"");
    }

    #[test]
    fn operators() {
        assert_eq!(Mutant::MirrorSubtractsDigit.operator(), MutationOperator::Aorb);
        assert_eq!(Mutant::MirrorDropsShift.operator().as_str(), "CDL");
        assert_eq!(Mutant::ScanIncludesLast.operator().to_string(), "ROR");
    }

    #[test]
    fn subtracting_mirror_goes_negative() {
        assert_eq!(Mutant::MirrorSubtractsDigit.mirror(31), Some(-13));
        assert_eq!(Mutant::MirrorSubtractsDigit.mirror(0), Some(0));
    }

    #[test]
    fn post_increment_mirror_differs_only_on_nines() {
        let m = Mutant::MirrorPostIncrement;
        assert_eq!(m.mirror(123), Some(321));
        assert_eq!(m.mirror(38), Some(83));
        assert_eq!(m.mirror(19), Some(92));
        assert_eq!(m.mirror(9), Some(91));
    }

    #[test]
    fn dropped_shift_sums_digits() {
        assert_eq!(Mutant::MirrorDropsShift.mirror(31), Some(4));
        assert_eq!(Mutant::MirrorDropsShift.mirror(123), Some(6));
    }

    #[test]
    fn validation_and_scan_mutants_keep_reference_mirror() {
        for m in [Mutant::NaturalExcludesZero, Mutant::ScanIncludesLast] {
            assert_eq!(m.mirror(120), Reference.mirror(120));
        }
    }

    #[test]
    fn zero_element_trips_natural_mutant() {
        let checker = ReversalChecker::with_rules(Mutant::NaturalExcludesZero);
        let err = checker
            .evaluate(4, Some(&[0, 1, 2, 12]), "zero")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The element on position 0 is not a natural number."
        );
    }

    #[test]
    fn self_mirroring_last_element_trips_scan_mutant() {
        let checker = ReversalChecker::with_rules(Mutant::ScanIncludesLast);
        assert_eq!(checker.evaluate(4, Some(&[1, 2, 3, 121]), "t"), Ok(true));
        assert_eq!(
            ReversalChecker::new().evaluate(4, Some(&[1, 2, 3, 121]), "t"),
            Ok(false)
        );
    }
}

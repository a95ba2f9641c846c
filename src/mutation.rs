//! Mutation runner and kill/coverage reporting.
//!
//! A run evaluates the reference rules over every selected case (the
//! baseline), then evaluates each mutant over the same cases. A case kills a
//! mutant when the mutant's outcome does not match the case's expectation.
//! A dirty baseline means the suite itself is wrong and the kill counts are
//! not meaningful.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde_json::json;

use crate::checker::{CheckRules, Reference, ReversalChecker};
use crate::config::{ConfigError, MutationConfig};
use crate::mutant::Mutant;
use crate::suite::{Expected, TestCase, Technique};

/// A case whose observed outcome differed from its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMismatch {
    /// Technique that produced the case.
    pub technique: Technique,
    /// Case display name.
    pub case: String,
    /// Expected outcome.
    pub expected: Expected,
    /// Observed outcome.
    pub observed: Expected,
}

/// Result of running the selected cases against one mutant.
#[derive(Debug, Clone)]
pub struct MutantResult {
    /// The mutant.
    pub mutant: Mutant,
    /// Number of cases evaluated. Smaller than the selection when a
    /// fail-fast run stopped at the first kill.
    pub cases_run: usize,
    /// Cases that killed the mutant.
    pub kills: Vec<CaseMismatch>,
}

impl MutantResult {
    /// Returns true if at least one case killed the mutant.
    #[must_use]
    pub fn killed(&self) -> bool {
        !self.kills.is_empty()
    }

    /// Returns the techniques whose cases killed the mutant.
    #[must_use]
    pub fn killing_techniques(&self) -> BTreeSet<Technique> {
        self.kills.iter().map(|kill| kill.technique).collect()
    }
}

/// Coverage entry for a single technique.
#[derive(Debug, Clone)]
pub struct TechniqueCoverage {
    /// Technique name.
    pub technique: Technique,
    /// Mutants killed by at least one of the technique's cases.
    pub killed: Vec<Mutant>,
}

/// Kill coverage across the selected techniques.
#[derive(Debug, Clone)]
pub struct MutationCoverageReport {
    entries: Vec<TechniqueCoverage>,
}

impl MutationCoverageReport {
    fn from_map(techniques: &[Technique], map: &BTreeMap<Technique, BTreeSet<Mutant>>) -> Self {
        let entries = techniques
            .iter()
            .map(|&technique| TechniqueCoverage {
                technique,
                killed: map
                    .get(&technique)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }

    /// Returns the coverage entries in technique order.
    #[must_use]
    pub fn entries(&self) -> &[TechniqueCoverage] {
        &self.entries
    }

    /// Returns the mutants a technique killed (empty if not selected).
    #[must_use]
    pub fn killed_by(&self, technique: Technique) -> &[Mutant] {
        self.entries
            .iter()
            .find(|entry| entry.technique == technique)
            .map(|entry| entry.killed.as_slice())
            .unwrap_or(&[])
    }

    /// Renders a human-readable coverage report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = if entry.killed.is_empty() {
                writeln!(&mut out, "{}: <none>", entry.technique)
            } else {
                let names: Vec<_> = entry.killed.iter().map(|m| m.name()).collect();
                writeln!(&mut out, "{}: {}", entry.technique, names.join(", "))
            };
        }
        out
    }

    /// Renders a JSON coverage report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let techniques = self
            .entries
            .iter()
            .map(|entry| {
                json!({
                    "technique": entry.technique.as_str(),
                    "killed": entry.killed.iter().map(|m| m.name()).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>();

        json!({
            "techniques": techniques,
        })
    }
}

/// Report for a full mutation run.
#[derive(Debug, Clone)]
pub struct MutationReport {
    cases_run: usize,
    baseline_failures: Vec<CaseMismatch>,
    results: Vec<MutantResult>,
    coverage: MutationCoverageReport,
}

impl MutationReport {
    /// Returns the number of cases in the selected suites.
    #[must_use]
    pub const fn cases_run(&self) -> usize {
        self.cases_run
    }

    /// Returns cases the reference rules fail.
    #[must_use]
    pub fn baseline_failures(&self) -> &[CaseMismatch] {
        &self.baseline_failures
    }

    /// Returns true if the reference rules pass every selected case.
    #[must_use]
    pub fn baseline_clean(&self) -> bool {
        self.baseline_failures.is_empty()
    }

    /// Returns all per-mutant results.
    #[must_use]
    pub fn results(&self) -> &[MutantResult] {
        &self.results
    }

    /// Returns the result for `mutant`, if it was evaluated.
    #[must_use]
    pub fn result(&self, mutant: Mutant) -> Option<&MutantResult> {
        self.results.iter().find(|r| r.mutant == mutant)
    }

    /// Returns the coverage report.
    #[must_use]
    pub fn coverage(&self) -> &MutationCoverageReport {
        &self.coverage
    }

    /// Returns mutants no case killed.
    #[must_use]
    pub fn survivors(&self) -> Vec<Mutant> {
        self.results
            .iter()
            .filter(|r| !r.killed())
            .map(|r| r.mutant)
            .collect()
    }

    /// Returns mutants at least one case killed.
    #[must_use]
    pub fn killed(&self) -> Vec<Mutant> {
        self.results
            .iter()
            .filter(|r| r.killed())
            .map(|r| r.mutant)
            .collect()
    }

    /// Fraction of mutants killed; 1.0 when no mutants were run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mutation_score(&self) -> f64 {
        if self.results.is_empty() {
            return 1.0;
        }
        self.killed().len() as f64 / self.results.len() as f64
    }

    /// Renders a human-readable mutation report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let survivors = self.survivors();
        let _ = writeln!(
            &mut out,
            "mutation report: {} cases, {} mutants, {} killed, {} survived, score {:.2}",
            self.cases_run,
            self.results.len(),
            self.results.len() - survivors.len(),
            survivors.len(),
            self.mutation_score()
        );
        for failure in &self.baseline_failures {
            let _ = writeln!(
                &mut out,
                "baseline failure: [{}] {} (expected {}, observed {})",
                failure.technique, failure.case, failure.expected, failure.observed
            );
        }
        for result in &self.results {
            if let Some(first) = result.kills.first() {
                let _ = writeln!(
                    &mut out,
                    "killed: {} ({} kills, first [{}] {})",
                    result.mutant,
                    result.kills.len(),
                    first.technique,
                    first.case
                );
            } else {
                let _ = writeln!(
                    &mut out,
                    "survived: {} ({})",
                    result.mutant,
                    result.mutant.description()
                );
            }
        }
        let _ = writeln!(&mut out, "coverage:");
        out.push_str(&self.coverage.to_text());
        out
    }

    /// Renders a JSON mutation report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mismatch = |m: &CaseMismatch| {
            json!({
                "technique": m.technique.as_str(),
                "case": m.case,
                "expected": m.expected.to_string(),
                "observed": m.observed.to_string(),
            })
        };
        let baseline = self.baseline_failures.iter().map(mismatch).collect::<Vec<_>>();
        let results = self
            .results
            .iter()
            .map(|result| {
                json!({
                    "mutant": result.mutant.name(),
                    "operator": result.mutant.operator().as_str(),
                    "cases_run": result.cases_run,
                    "killed": result.killed(),
                    "kills": result.kills.iter().map(mismatch).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>();
        json!({
            "summary": {
                "cases": self.cases_run,
                "mutants": self.results.len(),
                "killed": self.killed().len(),
                "survived": self.survivors().len(),
                "score": self.mutation_score(),
                "baseline_clean": self.baseline_clean(),
            },
            "baseline_failures": baseline,
            "results": results,
            "coverage": self.coverage.to_json(),
        })
    }
}

/// Runs the selected suites against the reference rules and every mutant.
#[derive(Debug, Clone, Default)]
pub struct MutationRunner {
    config: MutationConfig,
}

impl MutationRunner {
    /// Creates a runner from a validated configuration.
    pub fn new(config: MutationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MutationConfig {
        &self.config
    }

    /// Runs the baseline and every configured mutant.
    #[must_use]
    pub fn run(&self) -> MutationReport {
        let cases: Vec<(Technique, TestCase)> = self
            .config
            .techniques
            .iter()
            .flat_map(|&technique| technique.cases().into_iter().map(move |c| (technique, c)))
            .collect();

        let (baseline_failures, _) = run_cases(&Reference, &cases, false);
        #[cfg(feature = "tracing-integration")]
        if !baseline_failures.is_empty() {
            tracing::warn!(
                failures = baseline_failures.len(),
                "reference rules fail the selected suites"
            );
        }

        let mut results = Vec::with_capacity(self.config.mutants.len());
        let mut coverage_map: BTreeMap<Technique, BTreeSet<Mutant>> = BTreeMap::new();

        for &mutant in &self.config.mutants {
            let (kills, evaluated) = run_cases(&mutant, &cases, self.config.fail_fast);
            for kill in &kills {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(
                    mutant = mutant.name(),
                    technique = kill.technique.as_str(),
                    case = %kill.case,
                    "mutant killed"
                );
                coverage_map.entry(kill.technique).or_default().insert(mutant);
            }
            results.push(MutantResult {
                mutant,
                cases_run: evaluated,
                kills,
            });
        }

        let coverage = MutationCoverageReport::from_map(&self.config.techniques, &coverage_map);
        let report = MutationReport {
            cases_run: cases.len(),
            baseline_failures,
            results,
            coverage,
        };

        #[cfg(feature = "tracing-integration")]
        tracing::info!(
            cases = report.cases_run(),
            mutants = report.results().len(),
            survived = report.survivors().len(),
            score = report.mutation_score(),
            "mutation run complete"
        );

        report
    }
}

/// Returns the mismatches and the number of cases evaluated.
fn run_cases<R: CheckRules>(
    rules: R,
    cases: &[(Technique, TestCase)],
    stop_at_first: bool,
) -> (Vec<CaseMismatch>, usize) {
    let checker = ReversalChecker::with_rules(rules);
    let mut mismatches = Vec::new();
    let mut evaluated = 0;
    for (technique, case) in cases {
        evaluated += 1;
        let outcome = checker.check(&case.problem);
        if case.expected.matches(&outcome) {
            continue;
        }
        mismatches.push(CaseMismatch {
            technique: *technique,
            case: case.name(),
            expected: case.expected.clone(),
            observed: Expected::from(&outcome),
        });
        if stop_at_first {
            break;
        }
    }
    (mismatches, evaluated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutant::builtin_mutants;
    use crate::problem::Problem;

    fn runner(techniques: &[Technique]) -> MutationRunner {
        MutationRunner::new(MutationConfig::default().with_techniques(techniques.to_vec()))
            .expect("valid config")
    }

    #[test]
    fn runner_rejects_empty_selection() {
        let config = MutationConfig::default().with_techniques(Vec::new());
        assert!(matches!(
            MutationRunner::new(config),
            Err(ConfigError::NoTechniques)
        ));
    }

    #[test]
    fn runner_deterministic() {
        let runner = MutationRunner::default();
        let report1 = runner.run();
        let report2 = runner.run();

        assert_eq!(report1.results().len(), report2.results().len());
        for (r1, r2) in report1.results().iter().zip(report2.results()) {
            assert_eq!(r1.mutant, r2.mutant);
            assert_eq!(r1.kills, r2.kills);
        }
    }

    #[test]
    fn default_run_kills_everything() {
        let report = MutationRunner::default().run();
        assert!(report.baseline_clean(), "{}", report.to_text());
        assert_eq!(report.results().len(), builtin_mutants().len());
        assert!(report.survivors().is_empty(), "{}", report.to_text());
        assert!((report.mutation_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_mutants_score_is_one() {
        let config = MutationConfig::default().with_mutants(Vec::new());
        let report = MutationRunner::new(config).unwrap().run();
        assert!(report.results().is_empty());
        assert!((report.mutation_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fail_fast_records_single_kill() {
        let config = MutationConfig::default()
            .with_mutants(vec![Mutant::MirrorSubtractsDigit])
            .with_fail_fast(true);
        let report = MutationRunner::new(config).unwrap().run();
        let result = report.result(Mutant::MirrorSubtractsDigit).unwrap();
        assert_eq!(result.kills.len(), 1);
        // The first true verdict in the first suite.
        assert_eq!(result.kills[0].technique, Technique::EquivalencePartitioning);
        assert_eq!(result.kills[0].observed, Expected::Value(false));
        assert!(result.cases_run < report.cases_run());
        let json = report.to_json();
        assert_eq!(json["results"][0]["cases_run"], result.cases_run);
    }

    #[test]
    fn full_run_evaluates_every_case_per_mutant() {
        let report = MutationRunner::default().run();
        for result in report.results() {
            assert_eq!(result.cases_run, report.cases_run(), "{}", result.mutant);
        }
    }

    #[test]
    fn coverage_lists_selected_techniques_only() {
        let report = runner(&[Technique::DecisionCoverage]).run();
        let coverage = report.coverage();
        assert_eq!(coverage.entries().len(), 1);
        assert!(coverage.killed_by(Technique::BoundaryAnalysis).is_empty());
        assert!(
            coverage
                .killed_by(Technique::DecisionCoverage)
                .contains(&Mutant::ScanIncludesLast)
        );
    }

    #[test]
    fn dirty_baseline_is_reported() {
        let wrong = TestCase::value(Problem::new(2, vec![123, 321], "wrong"), false);
        let cases = vec![(Technique::BoundaryAnalysis, wrong)];
        let (failures, evaluated) = run_cases(Reference, &cases, false);
        assert_eq!(evaluated, 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].expected, Expected::Value(false));
        assert_eq!(failures[0].observed, Expected::Value(true));
        assert!(failures[0].case.starts_with("wrong: "));
    }

    #[test]
    fn report_to_text() {
        let report = runner(crate::suite::BLACK_BOX_TECHNIQUES).run();
        let text = report.to_text();

        assert!(text.contains("mutation report:"));
        assert!(text.contains("killed: mirror_AORB_20"));
        assert!(text.contains("survived: solve_ROR_32"));
        assert!(text.contains("coverage:"));
        assert!(!text.contains("baseline failure"));
    }

    #[test]
    fn report_to_json() {
        let report = MutationRunner::default().run();
        let json = report.to_json();

        assert_eq!(json["summary"]["mutants"].as_u64(), Some(5));
        assert_eq!(json["summary"]["survived"].as_u64(), Some(0));
        assert_eq!(json["summary"]["baseline_clean"], true);
        assert!(json["results"].is_array());
        assert_eq!(json["results"][0]["mutant"], "mirror_AORB_20");
        assert_eq!(json["results"][0]["operator"], "AORB");
        assert!(json["coverage"]["techniques"].is_array());
    }

    #[test]
    fn coverage_to_text_marks_empty_techniques() {
        let config = MutationConfig::default()
            .with_techniques(vec![Technique::CauseEffectGraph])
            .with_mutants(vec![Mutant::NaturalExcludesZero]);
        let report = MutationRunner::new(config).unwrap().run();
        assert_eq!(report.coverage().to_text(), "cause_effect_graph: <none>\n");
    }
}

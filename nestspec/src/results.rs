//! Aggregation of per-pass outcomes into one ordered report.

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;

use crate::core::path::Path;
use crate::core::types::{Failure, Outcome};
use crate::format::PrintFormat;

/// Resolved outcome of one spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecResult {
    /// Registration index of the root procedure this spec belongs to.
    pub root: usize,
    pub path: Path,
    pub name: String,
    pub outcome: Outcome,
    pub failures: Vec<Failure>,
}

impl SpecResult {
    pub fn depth(&self) -> usize {
        self.path.depth()
    }
}

/// Collects results while the driver is running.
///
/// Keyed by `(root, path)`; the first resolved outcome for a key wins.
#[derive(Debug, Default)]
pub struct ResultCollector {
    resolved: BTreeMap<(usize, Path), SpecResult>,
    passes_run: usize,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resolved(&self, root: usize, path: &Path) -> bool {
        self.resolved.contains_key(&(root, path.clone()))
    }

    pub fn count_pass(&mut self) {
        self.passes_run += 1;
    }

    pub fn record(&mut self, result: SpecResult) {
        self.resolved
            .entry((result.root, result.path.clone()))
            .or_insert(result);
    }

    pub fn finish(self) -> Results {
        Results {
            specs: self.resolved.into_values().collect(),
            passes_run: self.passes_run,
        }
    }
}

/// Final report of a run: every spec in pre-order, roots in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Results {
    specs: Vec<SpecResult>,
    passes_run: usize,
}

impl Results {
    pub fn specs(&self) -> &[SpecResult] {
        &self.specs
    }

    /// Number of times a root procedure was invoked.
    pub fn passes_run(&self) -> usize {
        self.passes_run
    }

    pub fn total_count(&self) -> usize {
        self.specs.len()
    }

    pub fn pass_count(&self) -> usize {
        self.count(Outcome::Passed)
    }

    pub fn fail_count(&self) -> usize {
        self.count(Outcome::Failed)
    }

    pub fn ignore_count(&self) -> usize {
        self.count(Outcome::Ignored)
    }

    /// True when nothing failed. Ignored specs do not count against a run.
    pub fn is_success(&self) -> bool {
        self.fail_count() == 0
    }

    /// Find a spec by its chain of names from the root, e.g. `["root", "a"]`.
    pub fn find(&self, names: &[&str]) -> Option<&SpecResult> {
        let (last, _) = names.split_last()?;
        self.specs.iter().find(|spec| {
            spec.name == *last && spec.depth() + 1 == names.len() && self.chain_matches(spec, names)
        })
    }

    /// Render every spec followed by the summary line.
    pub fn print<F: PrintFormat>(&self, format: &mut F) -> io::Result<()> {
        for spec in &self.specs {
            let depth = spec.depth();
            match spec.outcome {
                Outcome::Passed => format.print_passing(depth, &spec.name)?,
                Outcome::Failed => format.print_failing(depth, &spec.name, &spec.failures)?,
                Outcome::Ignored => format.print_ignored(depth, &spec.name)?,
            }
        }
        format.print_summary(self.pass_count(), self.fail_count(), self.ignore_count())
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.specs
            .iter()
            .filter(|spec| spec.outcome == outcome)
            .count()
    }

    fn chain_matches(&self, spec: &SpecResult, names: &[&str]) -> bool {
        let mut path = Some(spec.path.clone());
        for name in names.iter().rev() {
            let Some(current) = path else {
                return false;
            };
            let found = self.specs.iter().any(|other| {
                other.root == spec.root && other.path == current && other.name == *name
            });
            if !found {
                return false;
            }
            path = current.parent();
        }
        path.is_none()
    }
}

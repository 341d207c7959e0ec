//! Per-pass traversal state consulted by every spec declaration.
//!
//! A [`Context`] is bound to one target [`Path`]. Each time the root
//! procedure declares a spec, the context decides whether that spec lies on
//! the way to the target (run its body), is the target (run its body and
//! record its outcome), or is elsewhere (stay silent).

use std::cell::RefCell;
use std::fmt::Debug;
use std::panic::{self, Location};

use crate::core::path::Path;
use crate::core::spec_run::SpecRun;
use crate::core::types::{Failure, FailureKind, Outcome, TraceLocation};
use crate::matchers::Matcher;

/// Unwind payload used by [`Context::assume`] to abandon the rest of a pass.
///
/// The failure is already recorded when this is raised, so the pass boundary
/// discards it instead of reporting a fault.
#[derive(Debug)]
pub(crate) struct AssumptionAbort;

/// A spec declared under the target during its pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    pub path: Path,
    pub name: String,
}

/// Everything a pass reports back to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassRecord {
    pub target: Path,
    /// False when re-running the root never declared the target.
    pub reached: bool,
    pub outcome: Outcome,
    pub failures: Vec<Failure>,
    /// Children of the target, in declaration order. Empty when the target
    /// failed: children of a failing spec are never explored.
    pub children: Vec<Discovered>,
}

#[derive(Debug, Default)]
struct PassState {
    arena: Vec<SpecRun>,
    current: Option<usize>,
    target: Option<usize>,
    failed: bool,
    failures: Vec<Failure>,
}

/// Traversal state for a single pass over a root procedure.
#[derive(Debug)]
pub struct Context {
    target: Path,
    state: RefCell<PassState>,
}

impl Context {
    pub(crate) fn new(target: Path) -> Self {
        Self {
            target,
            state: RefCell::new(PassState::default()),
        }
    }

    /// Path this pass is trying to reach.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// True once a failure has been recorded on the target chain.
    pub fn has_failed(&self) -> bool {
        self.state.borrow().failed
    }

    /// Declare a nested spec. `body` runs immediately if the spec is on the
    /// way to this pass's target, and not at all otherwise.
    #[track_caller]
    pub fn specify<F>(&self, name: impl Into<String>, body: F)
    where
        F: FnOnce(&Context),
    {
        let declared_at = Location::caller();
        if let Some(index) = self.declare(name.into(), false, declared_at) {
            self.enter(index, body);
        }
    }

    /// Declare a nested spec without a body. It is reported as ignored.
    #[track_caller]
    pub fn pending(&self, name: impl Into<String>) {
        let declared_at = Location::caller();
        if let Some(index) = self.declare(name.into(), true, declared_at) {
            self.enter(index, |_| {});
        }
    }

    /// Check `actual` against `matcher`. A mismatch is recorded and the body
    /// keeps running; later declarations in this pass become inert.
    #[track_caller]
    pub fn expect<T, M>(&self, actual: T, matcher: M) -> bool
    where
        T: Debug,
        M: Matcher<T>,
    {
        if matcher.matches(&actual) {
            return true;
        }
        self.record_failure(
            FailureKind::ExpectFailed,
            matcher.description(),
            format!("{actual:?}"),
            Location::caller(),
        );
        false
    }

    /// Like [`Context::expect`], but a mismatch abandons the rest of the pass.
    #[track_caller]
    pub fn assume<T, M>(&self, actual: T, matcher: M)
    where
        T: Debug,
        M: Matcher<T>,
    {
        if matcher.matches(&actual) {
            return;
        }
        self.record_failure(
            FailureKind::AssumeFailed,
            matcher.description(),
            format!("{actual:?}"),
            Location::caller(),
        );
        panic::resume_unwind(Box::new(AssumptionAbort));
    }

    /// Run `root` as the top-level spec of this pass.
    pub(crate) fn run_root(
        &self,
        name: &str,
        declared_at: &'static Location<'static>,
        root: &dyn Fn(&Context),
    ) {
        if let Some(index) = self.declare(name.to_string(), false, declared_at) {
            self.enter(index, root);
        }
    }

    /// Attribute a fault caught at the pass boundary to the target.
    pub(crate) fn record_fault(&self, message: String) {
        let mut state = self.state.borrow_mut();
        state.failed = true;
        let trace = match state.current {
            Some(current) => declaration_trace(&state.arena, current),
            None => Vec::new(),
        };
        state.failures.push(Failure {
            trace,
            ..Failure::fault(message)
        });
    }

    /// Consume the context and summarize the pass.
    pub(crate) fn into_record(self) -> PassRecord {
        let state = self.state.into_inner();
        let mut failures = state.failures;
        let Some(target) = state.target else {
            if failures.is_empty() {
                failures.push(Failure::fault("spec was not reached during its pass"));
            }
            return PassRecord {
                target: self.target,
                reached: false,
                outcome: Outcome::Failed,
                failures,
                children: Vec::new(),
            };
        };

        let outcome = if !failures.is_empty() {
            Outcome::Failed
        } else if state.arena[target].pending {
            Outcome::Ignored
        } else {
            Outcome::Passed
        };
        let children = if outcome == Outcome::Failed {
            Vec::new()
        } else {
            state
                .arena
                .iter()
                .filter(|run| run.parent == Some(target))
                .map(|run| Discovered {
                    path: run.path.clone(),
                    name: run.name.clone(),
                })
                .collect()
        };

        PassRecord {
            target: self.target,
            reached: true,
            outcome,
            failures,
            children,
        }
    }

    fn declare(
        &self,
        name: String,
        pending: bool,
        declared_at: &'static Location<'static>,
    ) -> Option<usize> {
        let mut state = self.state.borrow_mut();
        if state.failed {
            return None;
        }
        // Only the root procedure itself is declared outside any spec body.
        if state.current.is_none() && !state.arena.is_empty() {
            return None;
        }
        let parent = state.current;
        Some(SpecRun::declare(
            &mut state.arena,
            name,
            parent,
            pending,
            declared_at,
        ))
    }

    fn enter<F>(&self, index: usize, body: F)
    where
        F: FnOnce(&Context),
    {
        let previous = {
            let mut state = self.state.borrow_mut();
            let run = &state.arena[index];
            if !run.is_on_target_path(&self.target) {
                return;
            }
            if run.is_target(&self.target) {
                state.target = Some(index);
            }
            state.current.replace(index)
        };

        body(self);

        self.state.borrow_mut().current = previous;
    }

    fn record_failure(
        &self,
        kind: FailureKind,
        message: String,
        actual: String,
        at: &'static Location<'static>,
    ) {
        let mut state = self.state.borrow_mut();
        state.failed = true;
        let Some(current) = state.current else {
            return;
        };
        // Ancestors report their own failures in their own pass.
        if state.target != Some(current) {
            return;
        }
        let mut trace = vec![TraceLocation::from(at)];
        trace.extend(declaration_trace(&state.arena, current));
        state.failures.push(Failure {
            kind,
            message,
            actual,
            trace,
        });
    }
}

fn declaration_trace(arena: &[SpecRun], index: usize) -> Vec<TraceLocation> {
    SpecRun::ancestry(arena, index)
        .into_iter()
        .map(|ancestor| TraceLocation::from(arena[ancestor].declared_at))
        .collect()
}

//! Driver that walks a root procedure's spec tree one pass at a time.
//!
//! The tree only exists while code runs, so every spec is reached by
//! re-invoking its root procedure from the top with a [`Context`] bound to
//! that spec's [`Path`]. Each pass resolves exactly one spec and reveals its
//! direct children, which are queued as later targets.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe, Location};

use tracing::{debug, info, instrument, warn};

use crate::core::context::{AssumptionAbort, Context, PassRecord};
use crate::core::path::Path;
use crate::results::{ResultCollector, Results, SpecResult};

type RootFn<'a> = Box<dyn Fn(&Context) + 'a>;

struct RootSpec<'a> {
    name: String,
    body: RootFn<'a>,
    declared_at: &'static Location<'static>,
}

/// Registered root procedures and the entry point for running them.
#[derive(Default)]
pub struct Runner<'a> {
    roots: Vec<RootSpec<'a>>,
}

impl<'a> Runner<'a> {
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Register a root procedure.
    ///
    /// `body` is invoked once per spec in its tree. It must be deterministic
    /// and safe to re-run from scratch: the same path has to reach the same
    /// spec on every invocation, and side effects must not leak between
    /// invocations. Results are undefined otherwise.
    #[track_caller]
    pub fn add_spec<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&Context) + 'a,
    {
        self.roots.push(RootSpec {
            name: name.into(),
            body: Box::new(body),
            declared_at: Location::caller(),
        });
        self
    }

    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(|root| root.name.as_str())
    }

    /// Run every registered root.
    pub fn run(&self) -> Results {
        self.run_where(|_| true)
    }

    /// Run the roots whose name satisfies `include`, in registration order.
    pub fn run_where<P>(&self, include: P) -> Results
    where
        P: Fn(&str) -> bool,
    {
        let mut collector = ResultCollector::new();
        for (index, root) in self.roots.iter().enumerate() {
            if !include(&root.name) {
                debug!(root = %root.name, "skipping filtered root");
                continue;
            }
            walk(index, root, &mut collector);
        }
        let results = collector.finish();
        info!(
            specs = results.total_count(),
            failures = results.fail_count(),
            ignored = results.ignore_count(),
            passes = results.passes_run(),
            "run finished"
        );
        results
    }
}

#[instrument(skip_all, fields(root = %root.name))]
fn walk(index: usize, root: &RootSpec<'_>, collector: &mut ResultCollector) {
    // Ordered by path, so popping the first entry walks the tree in pre-order.
    let mut work: BTreeMap<Path, String> = BTreeMap::new();
    work.insert(Path::root(), root.name.clone());

    while let Some((target, name)) = work.pop_first() {
        let record = run_pass(&root.name, root.declared_at, &*root.body, &target);
        collector.count_pass();

        for child in &record.children {
            if collector.is_resolved(index, &child.path) {
                continue;
            }
            work.entry(child.path.clone())
                .or_insert_with(|| child.name.clone());
        }

        collector.record(SpecResult {
            root: index,
            path: record.target,
            name,
            outcome: record.outcome,
            failures: record.failures,
        });
    }
}

/// Run a single pass of `root` targeting `target`.
///
/// Panics raised by spec code are caught here and reported as a fault on
/// the target; they never escape the pass.
#[track_caller]
pub fn execute_pass(name: &str, root: &dyn Fn(&Context), target: &Path) -> PassRecord {
    run_pass(name, Location::caller(), root, target)
}

fn run_pass(
    name: &str,
    declared_at: &'static Location<'static>,
    root: &dyn Fn(&Context),
    target: &Path,
) -> PassRecord {
    debug!(path = %target, "starting pass");
    let context = Context::new(target.clone());
    let outcome =
        panic::catch_unwind(AssertUnwindSafe(|| context.run_root(name, declared_at, root)));
    if let Err(payload) = outcome {
        if !payload.is::<AssumptionAbort>() {
            let message = panic_message(payload.as_ref());
            warn!(path = %target, %message, "spec panicked");
            context.record_fault(format!("panicked: {message}"));
        }
    }

    let record = context.into_record();
    if !record.reached {
        warn!(path = %target, "spec was not reached; is the root procedure deterministic?");
    }
    debug!(
        path = %target,
        outcome = ?record.outcome,
        children = record.children.len(),
        "pass finished"
    );
    record
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

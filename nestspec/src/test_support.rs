//! Test-only helpers: a call spy and canned root procedures.

use std::cell::RefCell;

use crate::core::context::Context;
use crate::results::Results;
use crate::runner::Runner;

/// Run a single root procedure named `RootSpec` and return its results.
pub fn results_of_spec<F>(body: F) -> Results
where
    F: Fn(&Context),
{
    let mut runner = Runner::new();
    runner.add_spec("RootSpec", body);
    runner.run()
}

/// Records which spec bodies ran, in order.
#[derive(Debug, Default)]
pub struct Spy {
    calls: RefCell<Vec<String>>,
}

impl Spy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    /// Comma-joined calls since the last `take`, then reset.
    pub fn take(&self) -> String {
        self.calls.borrow_mut().drain(..).collect::<Vec<_>>().join(",")
    }
}

pub fn spec_with_no_children(_c: &Context, spy: &Spy) {
    spy.record("root");
}

pub fn spec_with_one_child(c: &Context, spy: &Spy) {
    spy.record("root");
    c.specify("Child A", |_| spy.record("a"));
}

pub fn spec_with_two_children(c: &Context, spy: &Spy) {
    spy.record("root");
    c.specify("Child A", |_| spy.record("a"));
    c.specify("Child B", |_| spy.record("b"));
}

pub fn spec_with_nested_children(c: &Context, spy: &Spy) {
    spy.record("root");
    c.specify("Child A", |c| {
        spy.record("a");
        c.specify("Child AA", |_| spy.record("aa"));
    });
}

pub fn spec_with_multiple_nested_children(c: &Context, spy: &Spy) {
    spy.record("root");
    c.specify("Child A", |c| {
        spy.record("a");
        c.specify("Child AA", |_| spy.record("aa"));
        c.specify("Child AB", |_| spy.record("ab"));
    });
    c.specify("Child B", |c| {
        spy.record("b");
        c.specify("Child BA", |_| spy.record("ba"));
        c.specify("Child BB", |_| spy.record("bb"));
        c.specify("Child BC", |_| spy.record("bc"));
    });
}

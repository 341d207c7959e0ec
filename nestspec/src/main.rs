//! Demo spec suite for nestspec.
//!
//! Runs a handful of specs through the CLI wrapper. Try
//! `nestspec-demo --format simple` or `RUST_LOG=nestspec=debug nestspec-demo`.

use nestspec::matchers::{
    contains, contains_item, equals, is_false, is_none, is_some, is_true, is_within,
    matches_regex, satisfies,
};
use nestspec::{Context, Runner};

fn main() {
    let mut runner = Runner::new();
    runner.add_spec("Stack", stack_spec);
    runner.add_spec("Matchers", matcher_spec);
    nestspec::cli::main(&runner);
}

fn stack_spec(c: &Context) {
    let mut stack: Vec<&str> = Vec::new();

    c.specify("An empty stack", |c| {
        c.expect(stack.is_empty(), is_true());
        c.expect(stack.last().copied(), is_none());
        c.pending("reports its capacity");
    });

    c.specify("When an item is pushed", |c| {
        stack.push("first");
        c.expect(stack.len(), equals(1));

        c.specify("it is on top", |c| {
            c.expect(stack.last().copied(), is_some());
            c.expect(stack.last().copied(), equals(Some("first")));
        });

        c.specify("and popped again", |c| {
            let popped = stack.pop();
            c.expect(popped, equals(Some("first")));
            c.expect(stack.is_empty(), is_true());
        });

        c.specify("and another is pushed", |c| {
            stack.push("second");
            c.expect(stack.clone(), contains_item("first"));
            c.expect(stack.len(), equals(2));
        });
    });
}

fn matcher_spec(c: &Context) {
    c.specify("strings", |c| {
        c.expect("nested specs", contains("spec"));
        c.expect("8 specs, 0 failures", matches_regex(r"^\d+ specs"));
    });
    c.specify("numbers", |c| {
        c.expect(0.1 + 0.2, is_within(0.3, 1e-9));
        c.expect(7, satisfies("is odd", |n: &i32| n % 2 == 1));
    });
    c.specify("booleans", |c| {
        c.expect(1 > 2, is_false());
    });
}

//! Pass-level behavior: which bodies run for a given target, and which
//! children a pass reveals.

use nestspec::Path;
use nestspec::runner::execute_pass;
use nestspec::test_support::{
    Spy, spec_with_multiple_nested_children, spec_with_nested_children, spec_with_no_children,
    spec_with_one_child, spec_with_two_children,
};
use nestspec::{Context, Outcome, Runner};

fn path(indices: &[usize]) -> Path {
    Path::from(indices.to_vec())
}

fn child_names(record: &nestspec::core::context::PassRecord) -> Vec<&str> {
    record.children.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn root_pass_runs_root_body_only() {
    let spy = Spy::new();
    let record = execute_pass("Root", &|c: &Context| spec_with_no_children(c, &spy), &Path::root());

    assert_eq!(spy.take(), "root");
    assert_eq!(record.outcome, Outcome::Passed);
    assert!(record.children.is_empty());
}

#[test]
fn root_pass_discovers_children_without_running_them() {
    let spy = Spy::new();
    let record = execute_pass(
        "Root",
        &|c: &Context| spec_with_two_children(c, &spy),
        &Path::root(),
    );

    assert_eq!(spy.take(), "root");
    assert_eq!(child_names(&record), vec!["Child A", "Child B"]);
    assert_eq!(record.children[1].path, path(&[1]));
}

#[test]
fn child_pass_skips_siblings() {
    let spy = Spy::new();
    let root = |c: &Context| spec_with_two_children(c, &spy);

    execute_pass("Root", &root, &path(&[0]));
    assert_eq!(spy.take(), "root,a");

    execute_pass("Root", &root, &path(&[1]));
    assert_eq!(spy.take(), "root,b");
}

#[test]
fn ancestors_run_on_the_way_to_a_nested_target() {
    let spy = Spy::new();
    let root = |c: &Context| spec_with_nested_children(c, &spy);

    let record = execute_pass("Root", &root, &path(&[0]));
    assert_eq!(spy.take(), "root,a");
    assert_eq!(child_names(&record), vec!["Child AA"]);

    let record = execute_pass("Root", &root, &path(&[0, 0]));
    assert_eq!(spy.take(), "root,a,aa");
    assert!(record.children.is_empty());
}

#[test]
fn one_child_is_run_in_its_own_pass() {
    let spy = Spy::new();
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| spec_with_one_child(c, &spy));

    let results = runner.run();
    assert_eq!(results.total_count(), 2);
    assert_eq!(results.passes_run(), 2);
    assert_eq!(spy.take(), "root,root,a");
}

#[test]
fn every_spec_gets_exactly_one_pass_in_pre_order() {
    let spy = Spy::new();
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| spec_with_multiple_nested_children(c, &spy));

    let results = runner.run();

    assert_eq!(results.total_count(), 8);
    assert_eq!(results.passes_run(), 8);
    assert_eq!(results.pass_count(), 8);
    assert_eq!(
        spy.take(),
        "root,root,a,root,a,aa,root,a,ab,root,b,root,b,ba,root,b,bb,root,b,bc"
    );
    let names: Vec<&str> = results.specs().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Root", "Child A", "Child AA", "Child AB", "Child B", "Child BA", "Child BB",
            "Child BC"
        ]
    );
    let depths: Vec<usize> = results.specs().iter().map(|s| s.depth()).collect();
    assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2, 2]);
}

#[test]
fn children_with_identical_names_are_distinct_specs() {
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| {
        c.specify("same", |c| c.specify("leaf", |_| {}));
        c.specify("same", |c| c.specify("leaf", |_| {}));
    });

    let results = runner.run();
    assert_eq!(results.total_count(), 5);
    assert!(results.specs().iter().any(|s| s.path == path(&[1, 0])));
}

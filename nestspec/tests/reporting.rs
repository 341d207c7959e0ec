//! Rendered reports for known spec trees.

use nestspec::Runner;
use nestspec::format::{SimpleFormat, VerboseFormat};
use nestspec::matchers::equals;

fn simple_output(runner: &Runner<'_>) -> String {
    let mut format = SimpleFormat::new(Vec::new());
    runner.run().print(&mut format).expect("print");
    String::from_utf8(format.into_inner()).expect("utf8")
}

#[test]
fn simple_format_prints_the_tree_in_pre_order() {
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| {
        c.specify("Child A", |c| {
            c.specify("Child AA", |_| {});
        });
        c.specify("Child B", |_| {});
        c.pending("Child C");
    });

    assert_eq!(
        simple_output(&runner),
        "- Root\n  - Child A\n    - Child AA\n  - Child B\n  - Child C [IGNORED]\n\n5 specs, 0 failures, 1 ignored\n"
    );
}

#[test]
fn simple_format_prints_failures_with_file_names() {
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| {
        c.specify("Broken", |c| {
            c.expect(1, equals(2));
        });
        c.specify("Crashes", |_| panic!("lost"));
    });

    assert_eq!(
        simple_output(&runner),
        concat!(
            "- Root\n",
            "  - Broken [FAIL]\n",
            "*** Expected: equals 2\n",
            "         got: “1”\n",
            "    at reporting.rs\n",
            "    at reporting.rs\n",
            "    at reporting.rs\n",
            "  - Crashes [FAIL]\n",
            "*** panicked: lost\n",
            "    at reporting.rs\n",
            "    at reporting.rs\n",
            "\n3 specs, 2 failures, 0 ignored\n",
        )
    );
}

#[test]
fn verbose_format_prints_root_headings_and_locations() {
    let mut runner = Runner::new();
    runner.add_spec("Root", |c| {
        c.specify("Broken", |c| {
            c.expect(1, equals(2));
        });
    });

    let mut format = VerboseFormat::new(Vec::new());
    runner.run().print(&mut format).expect("print");
    let output = String::from_utf8(format.into_inner()).expect("utf8");

    assert!(output.starts_with("\nRoot\n  - Broken [FAIL]\n\n*** Expected: equals 2\n"));
    assert!(output.contains("reporting.rs:"));
    assert!(output.ends_with("\n2 specs, 1 failures, 0 ignored\n"));
}

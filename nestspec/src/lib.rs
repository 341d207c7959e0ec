//! Nested behavior specs discovered by re-running their root procedure.
//!
//! A root procedure declares specs with [`Context::specify`]; nested specs
//! are plain closures, so the tree is never built up front. The [`Runner`]
//! instead re-invokes the root once per spec, each time with a [`Context`]
//! bound to that spec's [`Path`], running only the chain of bodies that
//! leads to it.
//!
//! - **[`core`]**: Paths, per-pass spec records and the pass context. No I/O.
//! - **[`runner`]**: The driver that schedules passes and collects results.
//! - **[`results`]**, **[`format`]**, **[`matchers`]**: Reporting and assertions.
//! - **[`cli`]**, **[`io`]**: Command-line wrapper, config and JSON report.
//!
//! ```no_run
//! use nestspec::Runner;
//! use nestspec::matchers::equals;
//!
//! let mut runner = Runner::new();
//! runner.add_spec("Addition", |c| {
//!     c.expect(1 + 1, equals(2));
//!     c.specify("is commutative", |c| {
//!         c.expect(2 + 3, equals(3 + 2));
//!     });
//! });
//! nestspec::cli::main(&runner);
//! ```

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod format;
pub mod io;
pub mod logging;
pub mod matchers;
pub mod results;
pub mod runner;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::context::Context;
pub use crate::core::path::Path;
pub use crate::core::types::{Failure, FailureKind, Outcome};
pub use crate::results::{Results, SpecResult};
pub use crate::runner::Runner;

//! Traversal core: paths, per-pass spec records, and the pass context.
//!
//! Nothing here performs I/O. A pass is a pure function of the root
//! procedure and the target path, so everything can be tested in isolation.

pub mod context;
pub mod path;
pub mod spec_run;
pub mod types;

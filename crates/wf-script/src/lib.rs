//! wf-script: line-oriented command scripts over wayfinder graphs.
//!
//! Each non-blank, non-comment line is a command:
//!
//! ```text
//! CreateGraph <graph>
//! AddNode <graph> <node>
//! AddEdge <graph> <parent> <child> <weight>
//! FindPath <graph> <start> <end>
//! ```
//!
//! Blank lines and `#` comments are echoed. A failing command reports the
//! failure in the output and the script carries on.

pub mod driver;
pub mod error;

pub use driver::{ScriptDriver, run_script};
pub use error::{ScriptError, ScriptResult};

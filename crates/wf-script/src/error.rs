//! Script driver errors.

use wf_core::WfError;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    #[error("Bad arguments to {command}: {args:?}")]
    BadArguments {
        command: &'static str,
        args: Vec<String>,
    },

    #[error("Unknown graph: {name}")]
    UnknownGraph { name: String },

    #[error("Invalid edge weight: {raw}")]
    InvalidWeight { raw: String },

    #[error(transparent)]
    Core(#[from] WfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

pub type WfResult<T> = Result<T, WfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative cost for {what}: {value}")]
    NegativeCost { what: &'static str, value: f64 },

    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

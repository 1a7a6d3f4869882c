use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("{arg} must be convertible to a float array of numbers; received {detail}")]
    Type { arg: &'static str, detail: String },

    #[error("tpr and fpr shapes are not broadcastable: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("invalid scores: {0}")]
    InvalidScores(String),

    #[error("unsupported zero_denom_policy {0:?}; expected one of 'independent', 'nan', 'zero'")]
    UnsupportedPolicy(String),
}

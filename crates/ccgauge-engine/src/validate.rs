use ccgauge_core::{Objective, ParseObjectiveError};
use serde_json::Value;
use thiserror::Error;

use crate::types::RunDescription;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("run description must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    #[error("field {field:?} must be numeric, got {got}")]
    NonNumeric { field: String, got: String },

    #[error("field {field:?} must be finite, got {got}")]
    NonFinite { field: String, got: f64 },

    #[error("rule must be a non-empty string")]
    EmptyRule,

    #[error("patterns must be an array of strings, got {0}")]
    BadPatterns(String),

    #[error("J_baselines must be a JSON object, got {0}")]
    BadBaselines(String),

    #[error(transparent)]
    Objective(#[from] ParseObjectiveError),
}

fn coerce_number(value: &Value, field: &str) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ValidationError::NonNumeric {
            field: field.to_string(),
            got: n.to_string(),
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| ValidationError::NonNumeric {
            field: field.to_string(),
            got: format!("{s:?}"),
        }),
        other => Err(ValidationError::NonNumeric {
            field: field.to_string(),
            got: other.to_string(),
        }),
    }
}

fn finite_number(value: &Value, field: &str) -> Result<f64, ValidationError> {
    let v = coerce_number(value, field)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ValidationError::NonFinite {
            field: field.to_string(),
            got: v,
        })
    }
}

impl RunDescription {
    /// Validate and coerce a raw JSON run description.
    ///
    /// Coercions applied at this boundary: numeric strings become numbers,
    /// pattern entries are trimmed and blank ones dropped, the objective is
    /// matched case-insensitively and defaults to minimize. The scoring
    /// engine itself assumes this has already happened.
    pub fn from_mapping(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::NotAnObject(value.to_string()))?;

        let theta = finite_number(
            obj.get("theta").ok_or(ValidationError::MissingField("theta"))?,
            "theta",
        )?;

        let patterns = match obj.get("patterns") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => {
                let mut cleaned = Vec::with_capacity(items.len());
                for item in items {
                    let s = match item {
                        Value::String(s) => s.trim().to_string(),
                        Value::Number(n) => n.to_string(),
                        other => return Err(ValidationError::BadPatterns(other.to_string())),
                    };
                    if !s.is_empty() {
                        cleaned.push(s);
                    }
                }
                cleaned
            }
            Some(other) => return Err(ValidationError::BadPatterns(other.to_string())),
        };

        let rule = obj
            .get("rule")
            .ok_or(ValidationError::MissingField("rule"))?
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::EmptyRule)?
            .to_string();

        let baselines_value = obj
            .get("J_baselines")
            .ok_or(ValidationError::MissingField("J_baselines"))?;
        let baselines_obj = baselines_value
            .as_object()
            .ok_or_else(|| ValidationError::BadBaselines(baselines_value.to_string()))?;
        let mut j_baselines = Vec::with_capacity(baselines_obj.len());
        for (name, raw) in baselines_obj {
            let v = finite_number(raw, &format!("J_baselines[{name:?}]"))?;
            j_baselines.push((name.clone(), v));
        }

        let j_composed = finite_number(
            obj.get("J_composed")
                .ok_or(ValidationError::MissingField("J_composed"))?,
            "J_composed",
        )?;

        let objective = match obj.get("objective") {
            None | Some(Value::Null) => Objective::Minimize,
            Some(Value::String(s)) => s.parse::<Objective>()?,
            Some(other) => return Err(ParseObjectiveError(other.to_string()).into()),
        };

        Ok(Self {
            theta,
            patterns,
            rule,
            j_baselines,
            j_composed,
            objective,
        })
    }
}

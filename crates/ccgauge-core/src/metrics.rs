use std::str::FromStr;

use ndarray::{Array1, ArrayD, ArrayViewD, IxDyn};
use serde_json::Value;

use crate::error::MetricsError;

/// Denominators at or below this are treated as zero by [`compute_cc_max`].
pub const DEFAULT_CC_MAX_EPS: f64 = 1e-12;

/// Scalar-or-array operand for the Youden utilities.
///
/// Two scalar operands produce a scalar result; any array operand produces
/// an array result of the broadcast shape.
#[derive(Debug, Clone, PartialEq)]
pub enum JStat {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl JStat {
    /// Coerce a JSON value into a `JStat`, naming the argument on failure.
    ///
    /// Numbers and numeric strings become scalars; (nested) arrays become
    /// arrays of the corresponding shape. Ragged nesting or non-numeric
    /// elements are type errors.
    pub fn from_json(value: &Value, arg: &'static str) -> Result<Self, MetricsError> {
        match value {
            Value::Number(_) | Value::String(_) => {
                Ok(Self::Scalar(json_scalar(value, arg)?))
            }
            Value::Array(_) => {
                let mut shape: Vec<usize> = Vec::new();
                let mut flat: Vec<f64> = Vec::new();
                let mut leaf_depth = None;
                flatten_json(value, 0, &mut shape, &mut flat, &mut leaf_depth, arg)?;
                ArrayD::from_shape_vec(IxDyn(&shape), flat)
                    .map(Self::Array)
                    .map_err(|_| ragged(arg))
            }
            other => Err(MetricsError::Type {
                arg,
                detail: format!("JSON value {other}"),
            }),
        }
    }

    fn to_dyn(&self) -> ArrayD<f64> {
        match self {
            Self::Scalar(v) => ArrayD::from_elem(IxDyn(&[]), *v),
            Self::Array(a) => a.clone(),
        }
    }
}

impl From<f64> for JStat {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for JStat {
    fn from(v: Vec<f64>) -> Self {
        Self::Array(Array1::from(v).into_dyn())
    }
}

impl From<Array1<f64>> for JStat {
    fn from(v: Array1<f64>) -> Self {
        Self::Array(v.into_dyn())
    }
}

impl From<ArrayD<f64>> for JStat {
    fn from(v: ArrayD<f64>) -> Self {
        Self::Array(v)
    }
}

fn json_scalar(value: &Value, arg: &'static str) -> Result<f64, MetricsError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| MetricsError::Type {
            arg,
            detail: format!("non-float number {n}"),
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| MetricsError::Type {
            arg,
            detail: format!("string {s:?}"),
        }),
        other => Err(MetricsError::Type {
            arg,
            detail: format!("JSON value {other}"),
        }),
    }
}

fn ragged(arg: &'static str) -> MetricsError {
    MetricsError::Type {
        arg,
        detail: "a ragged nested sequence".to_string(),
    }
}

fn flatten_json(
    value: &Value,
    depth: usize,
    shape: &mut Vec<usize>,
    flat: &mut Vec<f64>,
    leaf_depth: &mut Option<usize>,
    arg: &'static str,
) -> Result<(), MetricsError> {
    match value {
        Value::Array(items) => {
            // Once a scalar has fixed the leaf depth, no array may sit at or
            // below it (catches mixed nesting like [1.0, [2.0]]).
            if leaf_depth.is_some_and(|d| depth >= d) {
                return Err(ragged(arg));
            }
            match shape.get(depth) {
                None if shape.len() == depth => shape.push(items.len()),
                Some(&expected) if expected == items.len() => {}
                _ => return Err(ragged(arg)),
            }
            for item in items {
                flatten_json(item, depth + 1, shape, flat, leaf_depth, arg)?;
            }
            Ok(())
        }
        _ => {
            if shape.len() != depth || leaf_depth.is_some_and(|d| d != depth) {
                return Err(ragged(arg));
            }
            *leaf_depth = Some(depth);
            flat.push(json_scalar(value, arg)?);
            Ok(())
        }
    }
}

/// Right-aligned broadcast of two shapes, NumPy rules.
fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Vec<usize>, MetricsError> {
    let ndim = left.len().max(right.len());
    let mut out = Vec::with_capacity(ndim);

    for i in 0..ndim {
        let l = if i < ndim - left.len() {
            1
        } else {
            *left.get(i - (ndim - left.len())).unwrap_or(&1)
        };
        let r = if i < ndim - right.len() {
            1
        } else {
            *right.get(i - (ndim - right.len())).unwrap_or(&1)
        };
        if l == r || l == 1 || r == 1 {
            out.push(l.max(r));
        } else {
            return Err(MetricsError::ShapeMismatch {
                left: left.to_vec(),
                right: right.to_vec(),
            });
        }
    }
    Ok(out)
}

fn clip_preserve(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        v
    }
}

/// Youden's J statistic, J = TPR − FPR.
///
/// Finite results are clipped to [-1, 1]; NaN and ±inf propagate unclipped.
/// Operands broadcast against each other; incompatible shapes are an error
/// naming both shapes.
pub fn youden_j(tpr: &JStat, fpr: &JStat) -> Result<JStat, MetricsError> {
    if let (JStat::Scalar(t), JStat::Scalar(f)) = (tpr, fpr) {
        return Ok(JStat::Scalar(clip_preserve(t - f)));
    }

    let t = tpr.to_dyn();
    let f = fpr.to_dyn();
    let shape = broadcast_shape(t.shape(), f.shape())?;

    let mismatch = || MetricsError::ShapeMismatch {
        left: t.shape().to_vec(),
        right: f.shape().to_vec(),
    };
    let tb: ArrayViewD<'_, f64> = t.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let fb: ArrayViewD<'_, f64> = f.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;

    let raw = &tb - &fb;
    Ok(JStat::Array(raw.mapv(clip_preserve)))
}

/// TPR / FPR / J evaluated over a grid of decision thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct YoudenCurve {
    pub thresholds: Array1<f64>,
    pub tpr: Array1<f64>,
    pub fpr: Array1<f64>,
    pub j: Array1<f64>,
}

fn validate_scores(scores: &[f64], name: &'static str) -> Result<(), MetricsError> {
    if scores.is_empty() {
        return Err(MetricsError::InvalidScores(format!(
            "{name} must be non-empty"
        )));
    }
    if scores.iter().any(|v| !v.is_finite()) {
        return Err(MetricsError::InvalidScores(format!(
            "{name} contains non-finite values; clean or filter upstream"
        )));
    }
    Ok(())
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| a == b);
    out
}

/// Scan Youden's J across thresholds derived from W0/W1 score samples.
///
/// The decision rule is `score >= threshold` when `higher_scores_leakier`,
/// `score <= threshold` otherwise. With no explicit grid the sorted unique
/// union of both score sets is used.
pub fn compute_youden_curve(
    scores_w0: &[f64],
    scores_w1: &[f64],
    thresholds: Option<&[f64]>,
    higher_scores_leakier: bool,
) -> Result<YoudenCurve, MetricsError> {
    validate_scores(scores_w0, "scores_w0")?;
    validate_scores(scores_w1, "scores_w1")?;

    let grid = match thresholds {
        Some(t) => {
            validate_scores(t, "thresholds")?;
            sorted_unique(t.iter().copied())
        }
        None => sorted_unique(scores_w0.iter().chain(scores_w1).copied()),
    };

    let rate = |scores: &[f64], thr: f64| -> f64 {
        let hits = scores
            .iter()
            .filter(|&&s| if higher_scores_leakier { s >= thr } else { s <= thr })
            .count();
        hits as f64 / scores.len() as f64
    };

    let tpr: Vec<f64> = grid.iter().map(|&thr| rate(scores_w1, thr)).collect();
    let fpr: Vec<f64> = grid.iter().map(|&thr| rate(scores_w0, thr)).collect();
    let j: Vec<f64> = tpr
        .iter()
        .zip(&fpr)
        .map(|(t, f)| clip_preserve(t - f))
        .collect();

    Ok(YoudenCurve {
        thresholds: Array1::from(grid),
        tpr: Array1::from(tpr),
        fpr: Array1::from(fpr),
        j: Array1::from(j),
    })
}

/// Best J over the threshold scan, with the full curve for inspection.
/// Ties resolve to the smallest threshold.
pub fn optimal_youden_threshold(
    scores_w0: &[f64],
    scores_w1: &[f64],
    thresholds: Option<&[f64]>,
    higher_scores_leakier: bool,
) -> Result<(f64, f64, YoudenCurve), MetricsError> {
    let curve = compute_youden_curve(scores_w0, scores_w1, thresholds, higher_scores_leakier)?;

    let mut best_j = f64::NEG_INFINITY;
    let mut best_threshold = f64::NAN;
    for (&thr, &j) in curve.thresholds.iter().zip(curve.j.iter()) {
        if j > best_j {
            best_j = j;
            best_threshold = thr;
        }
    }

    Ok((best_j, best_threshold, curve))
}

/// Policy for a near-zero denominator in [`compute_cc_max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDenomPolicy {
    /// Treat the ratio as 1.0 (no composition penalty claimed).
    #[default]
    Independent,
    Nan,
    Zero,
}

impl FromStr for ZeroDenomPolicy {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "nan" => Ok(Self::Nan),
            "zero" => Ok(Self::Zero),
            _ => Err(MetricsError::UnsupportedPolicy(s.to_string())),
        }
    }
}

/// CC_max = `j_observed` / max(`j_dfa`, `j_dp`).
///
/// When the denominator is at or below `eps` the policy decides the result
/// instead of dividing.
pub fn compute_cc_max(
    j_observed: f64,
    j_dfa: f64,
    j_dp: f64,
    eps: f64,
    policy: ZeroDenomPolicy,
) -> f64 {
    let denom = j_dfa.max(j_dp);

    if denom <= eps {
        return match policy {
            ZeroDenomPolicy::Independent => 1.0,
            ZeroDenomPolicy::Nan => f64::NAN,
            ZeroDenomPolicy::Zero => 0.0,
        };
    }

    j_observed / denom
}

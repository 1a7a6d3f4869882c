use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// CC values within this band around 1.0 are treated as Independent.
pub const INDEPENDENT_TOL: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    #[default]
    Minimize,
    Maximize,
}

impl Objective {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("objective must be 'minimize' or 'maximize', got {0:?}")]
pub struct ParseObjectiveError(pub String);

impl FromStr for Objective {
    type Err = ParseObjectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimize" => Ok(Self::Minimize),
            "maximize" => Ok(Self::Maximize),
            _ => Err(ParseObjectiveError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CcLabel {
    Constructive,
    Independent,
    Destructive,
}

impl CcLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Constructive => "Constructive",
            Self::Independent => "Independent",
            Self::Destructive => "Destructive",
        }
    }
}

impl fmt::Display for CcLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best finite baseline J per the objective. None when no baseline is finite.
pub fn best_singleton_value(j_baselines: &[(String, f64)], objective: Objective) -> Option<f64> {
    let finite = j_baselines
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite());

    match objective {
        Objective::Minimize => finite.reduce(f64::min),
        Objective::Maximize => finite.reduce(f64::max),
    }
}

/// Compute the composability coefficient (CC).
///
/// Orientation is chosen so CC < 1 always means "composition better than the
/// best singleton" and CC > 1 always means "worse", for both objectives:
///
/// - minimize: CC = `j_composed` / best
/// - maximize: CC = best / `j_composed`
///
/// Edge cases are values, never errors:
/// - no finite baselines → NaN (no reference to compare against)
/// - minimize with best == 0: composed == 0 → 1.0, otherwise +inf
/// - maximize with composed <= 0: best <= 0 → 1.0, otherwise +inf
pub fn compute_cc(j_baselines: &[(String, f64)], j_composed: f64, objective: Objective) -> f64 {
    let Some(best) = best_singleton_value(j_baselines, objective) else {
        return f64::NAN;
    };

    match objective {
        Objective::Minimize => {
            if best == 0.0 {
                if j_composed == 0.0 {
                    return 1.0;
                }
                return f64::INFINITY;
            }
            j_composed / best
        }
        Objective::Maximize => {
            if j_composed <= 0.0 {
                if best <= 0.0 {
                    return 1.0;
                }
                return f64::INFINITY;
            }
            best / j_composed
        }
    }
}

/// Classify a CC value against a symmetric tolerance band around 1.0.
///
/// Non-finite CC is Independent: an undefined ratio never supports a claim
/// of benefit or harm.
pub fn classify_cc(cc: f64, tol: f64) -> CcLabel {
    if !cc.is_finite() {
        return CcLabel::Independent;
    }

    if cc < 1.0 - tol {
        CcLabel::Constructive
    } else if cc > 1.0 + tol {
        CcLabel::Destructive
    } else {
        CcLabel::Independent
    }
}

pub fn classify_cc_default(cc: f64) -> CcLabel {
    classify_cc(cc, INDEPENDENT_TOL)
}

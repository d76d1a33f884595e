use serde_json::Value;

use crate::{EqError, EqResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Coerce a raw report value to a finite `f64`.
///
/// Solver output carries numbers as JSON numbers or as decimal strings,
/// depending on which writer produced the report. Both are accepted here;
/// anything else, including strings that parse to NaN or infinity, is an
/// error the caller can skip and log instead of propagating.
pub fn coerce_f64(value: &Value, what: &'static str) -> EqResult<Real> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let v = parsed.ok_or_else(|| EqError::NotNumeric {
        what,
        value: value.to_string(),
    })?;
    ensure_finite(v, what)
}

pub fn ensure_finite(v: Real, what: &'static str) -> EqResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EqError::NonFinite { what, value: v })
    }
}

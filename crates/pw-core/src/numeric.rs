use crate::PwError;

/// Floating point type used throughout the system
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PwError::NonFinite { what, value: v })
    }
}

/// Required numeric inputs must be present and finite; a blank field at the
/// boundary arrives as NaN and is reported as missing, not treated as zero.
pub fn ensure_filled(v: Option<Real>, field: &'static str) -> Result<Real, PwError> {
    match v {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(PwError::EmptyInput { field }),
    }
}

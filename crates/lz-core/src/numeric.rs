use crate::LzError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, LzError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LzError::NonFinite { what, value: v })
    }
}

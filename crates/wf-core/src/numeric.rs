use crate::WfError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Negative zero is folded to zero.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, WfError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(WfError::NegativeCost { what, value: v });
    }
    Ok(if v == 0.0 { 0.0 } else { v })
}

/// Bit pattern with `-0.0` mapped onto `0.0`, for hashing floats by value.
#[inline]
pub fn canonical_bits(v: Real) -> u64 {
    if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        let err = ensure_non_negative(-0.5, "edge").unwrap_err();
        assert!(matches!(err, WfError::NegativeCost { value, .. } if value == -0.5));
        assert!(ensure_non_negative(Real::INFINITY, "edge").is_err());
    }

    #[test]
    fn negative_zero_is_folded() {
        let v = ensure_non_negative(-0.0, "edge").unwrap();
        assert_eq!(v.to_bits(), 0.0_f64.to_bits());
        assert_eq!(canonical_bits(-0.0), canonical_bits(0.0));
    }
}

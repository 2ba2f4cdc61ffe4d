//! Exact integer and rational arithmetic.
//!
//! Heights are never compared in floating point: every height, ratio and
//! interpolated coordinate goes through [`Integer`] and [`Rational`], so an
//! interpolated point aimed at a round height lands exactly on it.
//! Floating point is only used for Euclidean distances (see [`to_f64`]).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{ContourError, ContourResult};

/// Arbitrary-precision integer.
pub type Integer = BigInt;

/// Exact rational, always kept in reduced form.
pub type Rational = BigRational;

/// Build an [`Integer`] from a machine integer.
pub fn integer(n: i64) -> Integer {
    Integer::from(n)
}

/// Build a reduced [`Rational`] `numer / denom`.
///
/// Fails with `InvalidRange` for a zero denominator.
pub fn rational(numer: i64, denom: i64) -> ContourResult<Rational> {
    if denom == 0 {
        return Err(ContourError::invalid_range(
            format!("{}/{}", numer, denom),
            "a non-zero denominator",
            "",
        ));
    }
    Ok(Rational::new(numer.into(), denom.into()))
}

/// Lift an integer into the rationals.
pub fn to_rational(n: &Integer) -> Rational {
    Rational::from_integer(n.clone())
}

/// A rational is round when its reduced denominator is 1.
pub fn is_round(r: &Rational) -> bool {
    r.denom().is_one()
}

/// Convert a round rational to an integer.
pub fn to_integer(r: &Rational) -> ContourResult<Integer> {
    if !is_round(r) {
        return Err(ContourError::NotRound {
            value: display(r),
        });
    }
    Ok(r.numer().clone())
}

/// Floor modulo: the result lies in `[0, m)` for every `a` when `m > 0`.
pub fn modulo(a: &Integer, m: &Integer) -> ContourResult<Integer> {
    if !m.is_positive() {
        return Err(ContourError::invalid_range(m, "1", "+inf"));
    }
    let r = a % m;
    Ok(if r.is_negative() { r + m } else { r })
}

/// Floor division: rounds toward negative infinity when `m > 0`.
pub fn div_floor(a: &Integer, m: &Integer) -> ContourResult<Integer> {
    let r = modulo(a, m)?;
    Ok((a - r) / m)
}

/// Whether `lower <= v <= upper`.
pub fn is_between(v: &Rational, lower: &Rational, upper: &Rational) -> bool {
    lower <= v && v <= upper
}

/// Fail with `InvalidRange` unless `0 <= u <= 1`.
pub fn ensure_unit(u: &Rational) -> ContourResult<()> {
    if !is_between(u, &Rational::zero(), &Rational::one()) {
        return Err(ContourError::invalid_range(u, 0, 1));
    }
    Ok(())
}

/// `1 - u` for a unit rational.
pub fn complement(u: &Rational) -> ContourResult<Rational> {
    ensure_unit(u)?;
    Ok(Rational::one() - u)
}

/// Position of `v` inside `[a, b]` as the ratio `(v - a) / (b - a)`.
///
/// `a` and `b` must differ and `v` must lie between them.
pub fn ratio(a: &Integer, b: &Integer, v: &Integer) -> ContourResult<Rational> {
    if a == b {
        return Err(ContourError::invalid_range(v, a, b));
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if v < lo || v > hi {
        return Err(ContourError::invalid_range(v, a, b));
    }
    Ok(Rational::new(v - a, b - a))
}

/// Linear interpolation `(1 - u)·a + u·b` for `u` in `[0, 1]`.
pub fn interpolate(a: &Integer, b: &Integer, u: &Rational) -> ContourResult<Rational> {
    let rest = complement(u)?;
    Ok(rest * to_rational(a) + u * to_rational(b))
}

/// `n` for round rationals, `n/d` otherwise.
pub fn display(r: &Rational) -> String {
    if is_round(r) {
        r.numer().to_string()
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/// Nearest `f64` to a rational. Only for distances and display.
pub fn to_f64(r: &Rational) -> f64 {
    r.to_f64().unwrap_or_else(|| {
        let numer = r.numer().to_f64().unwrap_or(f64::NAN);
        let denom = r.denom().to_f64().unwrap_or(f64::NAN);
        numer / denom
    })
}

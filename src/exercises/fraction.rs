//! Rational numbers kept in lowest terms.
//!
//! A `Fraction` is always stored reduced with a strictly positive
//! denominator, so two equal values always have equal fields and the derived
//! `Eq`/`Hash` agree with numeric equality. Intermediate arithmetic runs in
//! `i64` and is narrowed back to `i32` only after reduction.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::errors::Errors;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

/// Euclid's algorithm on absolute values. `gcd(0, 0) == 0`.
fn gcd(a: i64, b: i64) -> i64 {
    let (a, b) = (a.abs(), b.abs());
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

impl Fraction {
    /// # Errors
    ///
    /// * `Errors::NonPositiveDenominator` if `denominator <= 0`.
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, Errors> {
        if denominator <= 0 {
            debug!(numerator, denominator, "rejected non-positive denominator");
            return Err(Errors::NonPositiveDenominator(denominator));
        }
        Self::normalized(i64::from(numerator), i64::from(denominator))
    }

    /// Reduces `n/d` (with `d != 0`), moves the sign to the numerator and
    /// narrows to `i32`.
    fn normalized(numerator: i64, denominator: i64) -> Result<Self, Errors> {
        let (mut n, mut d) = (numerator, denominator);
        if d < 0 {
            n = -n;
            d = -d;
        }
        let common = gcd(n, d);
        if common > 1 {
            n /= common;
            d /= common;
        }
        Ok(Self {
            numerator: i32::try_from(n).map_err(|_| Errors::FractionOverflow)?,
            denominator: i32::try_from(d).map_err(|_| Errors::FractionOverflow)?,
        })
    }

    #[inline]
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// `d/n`, with the sign carried by the new numerator.
    ///
    /// # Errors
    ///
    /// * `Errors::ReciprocalOfZero` for `0/1`.
    pub fn reciprocal(&self) -> Result<Self, Errors> {
        if self.numerator == 0 {
            return Err(Errors::ReciprocalOfZero);
        }
        Self::normalized(i64::from(self.denominator), i64::from(self.numerator))
    }

    /// `a/b + c/d = (ad + cb) / bd`, reduced.
    ///
    /// # Errors
    ///
    /// * `Errors::FractionOverflow` if the reduced sum does not fit in `i32`.
    pub fn add(&self, other: &Fraction) -> Result<Self, Errors> {
        let n = i64::from(self.numerator) * i64::from(other.denominator)
            + i64::from(other.numerator) * i64::from(self.denominator);
        let d = i64::from(self.denominator) * i64::from(other.denominator);
        Self::normalized(n, d)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let first = i64::from(self.numerator) * i64::from(other.denominator);
        let second = i64::from(other.numerator) * i64::from(self.denominator);
        first.cmp(&second)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

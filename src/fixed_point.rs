//! Integer arithmetic on smallest-unit amounts.
//!
//! Products of two `u64` amounts are formed in `u128`, which holds any such
//! product, and quotients are narrowed back to `u64` only when they fit
//! exactly.

/// Computes `a * b / divisor`, truncating toward zero.
///
/// Returns `None` if `divisor` is zero or the quotient exceeds `u64::MAX`.
pub fn mul_div(a: u64, b: u64, divisor: u64) -> Option<u64> {
  let product = u128::from(a) * u128::from(b);
  let quotient = product.checked_div(u128::from(divisor))?;
  u64::try_from(quotient).ok()
}

/// Computes `dividend / divisor`, rounding any remainder up.
///
/// Returns `None` if `divisor` is zero.
pub fn ceil_div(dividend: u64, divisor: u64) -> Option<u64> {
  (divisor != 0).then(|| dividend.div_ceil(divisor))
}

//! Approximate inverse square root.
//!
//! The classic bit-level approximation with one Newton-Raphson refinement
//! step. `normalize_fast` keeps the same shape as exact normalization so hot
//! paths can swap it in; code whose output is part of a bit-exact contract
//! must use `Vec3::normalize` instead.

use glam::Vec3;

/// Approximate `1 / sqrt(x)`.
///
/// Valid for positive finite inputs. With the refinement step the relative
/// error stays well under 1%.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    let i = 0x5f3759df_u32.wrapping_sub(x.to_bits() >> 1);
    let y = f32::from_bits(i);
    y * (1.5 - 0.5 * x * y * y)
}

/// Normalize a vector using the approximate inverse square root.
#[inline]
pub fn normalize_fast(v: Vec3) -> Vec3 {
    v * inv_sqrt(v.dot(v))
}

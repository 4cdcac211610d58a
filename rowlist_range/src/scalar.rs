// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating-point abstraction for extents, offsets, and scroll positions.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A floating-point scalar usable for row extents and scroll offsets.
///
/// Implemented for `f32` and `f64`. The rounding helpers are written in terms
/// of saturating `as` casts so they work without `std` or `libm`.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Converts an index or count into this scalar.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Rounds down to an index.
    ///
    /// Negative values and NaN map to `0`; values past `usize::MAX` saturate.
    fn floor_to_usize(self) -> usize;

    /// Rounds up to an index.
    ///
    /// Negative values and NaN map to `0`; values past `usize::MAX` saturate.
    fn ceil_to_usize(self) -> usize;

    /// Returns the larger of `self` and `other`, preferring `self` when unordered.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Returns the smaller of `self` and `other`, preferring `self` when unordered.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            #[allow(
                clippy::cast_precision_loss,
                reason = "Row counts beyond the mantissa are not meaningful as pixel offsets"
            )]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "Float to integer casts saturate and map NaN to zero"
            )]
            fn floor_to_usize(self) -> usize {
                // Truncation equals floor for every value the cast keeps.
                self as usize
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss,
                reason = "Float to integer casts saturate and map NaN to zero"
            )]
            fn ceil_to_usize(self) -> usize {
                let truncated = self as usize;
                if (truncated as Self) < self {
                    truncated.saturating_add(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

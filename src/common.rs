// Copyright 2026 the Wedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("wedge requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn atan2(self, other: Self) -> Self => atan2;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// Evenly spaced samples between `start` and `end`.
///
/// Yields `n` values. When `inclusive` is true the last value is exactly
/// `end` (for `n > 1`); otherwise the step is `(end - start) / n` and `end`
/// itself is never reached, which is what a closed outline wants.
///
/// A single sample is always `start`, and `n == 0` yields nothing.
///
/// # Examples
///
/// ```
/// use wedge::common::linspace;
///
/// let v: Vec<f64> = linspace(0.0, 1.0, 5, true).collect();
/// assert_eq!(v, [0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// let v: Vec<f64> = linspace(0.0, 1.0, 4, false).collect();
/// assert_eq!(v, [0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize, inclusive: bool) -> impl Iterator<Item = f64> {
    let divisions = if inclusive { n.saturating_sub(1) } else { n };
    let step = if divisions == 0 {
        0.0
    } else {
        (end - start) / divisions as f64
    };
    (0..n).map(move |i| {
        if inclusive && n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn linspace_edges() {
        assert_eq!(linspace(0.0, 1.0, 0, true).count(), 0);
        let one: Vec<f64> = linspace(3.0, 7.0, 1, true).collect();
        assert_eq!(one, [3.0]);
        let two: Vec<f64> = linspace(3.0, 7.0, 2, true).collect();
        assert_eq!(two, [3.0, 7.0]);
    }

    #[test]
    fn linspace_descending() {
        let v: Vec<f64> = linspace(0.0, -2.0, 3, true).collect();
        assert_eq!(v, [0.0, -1.0, -2.0]);
    }
}

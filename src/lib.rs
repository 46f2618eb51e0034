pub mod complex;
pub mod error;
pub mod markup;
pub mod math;
pub mod prelude;
pub mod util;

/// Create a **[`Complex`]** in Cartesian form from real and imaginary parts.
///
/// ```
/// use complexkit::cart;
/// let z = cart![3.0, -4.0];
///
/// assert_eq!(z.real(), 3.0);
/// assert_eq!(z.imaginary(), -4.0);
/// ```
///
/// [`Complex`]: crate::complex::Complex
#[macro_export]
macro_rules! cart {
    ($re:expr, $im:expr $(,)?) => {
        $crate::complex::Complex::cartesian($re, $im)
    };
}

/// Create a **[`Complex`]** in polar form from an argument in radians and a
/// modulus.
///
/// ```
/// use complexkit::polar;
/// let z = polar![std::f64::consts::PI, 2.0];
///
/// assert_eq!(z.modulus(), 2.0);
/// ```
///
/// [`Complex`]: crate::complex::Complex
#[macro_export]
macro_rules! polar {
    ($arg:expr, $mag:expr $(,)?) => {
        $crate::complex::Complex::polar($arg, $mag)
    };
}

#[cfg(test)]
mod tests {
    use crate::complex::{Complex, Form};
    use std::f64::consts::PI;

    #[test]
    fn test_cart() {
        let test = cart![3.0, -4.0];
        assert_eq!(test.form(), Form::Cartesian);
        assert_eq!(test.real(), 3.0);
        assert_eq!(test.imaginary(), -4.0);
    }

    #[test]
    fn test_polar() {
        let test = polar![PI / 2.0, 2.0];
        assert_eq!(test.form(), Form::Polar);
        assert_eq!(test.argument(), PI / 2.0);
        assert_eq!(test.modulus(), 2.0);
        assert_eq!(test, Complex::cartesian(0.0, 2.0));
    }
}

use crate::complex::Complex;
use crate::error::MathError;
use std::f64::consts::PI;

/// Principal complex logarithm: `(ln(modulus), argument)` in Cartesian form.
pub fn log(value: Complex) -> Result<Complex, MathError> {
    if value.modulus() == 0.0 {
        return Err(MathError::DomainError(
            "cannot take the logarithm of zero".to_string(),
        ));
    }
    Ok(Complex::cartesian(value.modulus().ln(), value.argument()))
}

/// Principal exponential of e raised to a complex exponent, in polar form.
/// Total: defined for every input.
pub fn exp(exponent: Complex) -> Complex {
    Complex::polar(exponent.imaginary(), exponent.real().exp())
}

/// Raise a base to a complex exponent. Fails exactly when [`log`] fails,
/// on a zero base.
pub fn pow(base: Complex, exponent: Complex) -> Result<Complex, MathError> {
    Ok(exp(log(base)?.multiply(exponent)))
}

/// Principal n-th root, in polar form.
///
/// The modulus comes from the Newton solver. A zero principal argument
/// answers with the second root's angle `2pi/n` instead of the positive real
/// axis; this keeps the convention the library has always used.
pub fn root(value: Complex, degree: i32) -> Result<Complex, MathError> {
    let modulus = root_newton(value.modulus(), degree)?;
    let argument = value.argument();
    let argument = if argument == 0.0 {
        (PI / degree as f64) * 2.0
    } else {
        argument / degree as f64
    };
    Ok(Complex::polar(argument, modulus))
}

/// All n distinct n-th roots, starting from the principal root and stepping
/// the argument by `2pi/n` at fixed modulus.
pub fn roots(value: Complex, degree: i32) -> Result<Vec<Complex>, MathError> {
    let principal = root(value, degree)?;
    let modulus = principal.modulus();
    let mut argument = principal.argument();
    let mut list = Vec::with_capacity(degree as usize);
    list.push(principal);
    let increment = (PI / degree as f64) * 2.0;
    for _ in 1..degree {
        argument += increment;
        list.push(Complex::polar(argument, modulus));
    }
    Ok(list)
}

/// The n-th root of a non-negative real number.
///
/// Seeds a guess from `exp(ln(value)/degree)` and refines it with Newton's
/// method (<https://en.wikipedia.org/wiki/Nth_root_algorithm>) until the step
/// falls below [`Complex::TOLERANCE`]. A converged root sitting next to an
/// integer whose n-th power is exactly the input snaps to that integer, so
/// perfect roots come back exact.
pub fn root_newton(value: f64, degree: i32) -> Result<f64, MathError> {
    if degree < 1 {
        return Err(MathError::InvalidArgument(
            "root degree must be at least one".to_string(),
        ));
    }
    if value < 0.0 {
        return Err(MathError::InvalidArgument(
            "value must be a non-negative real number".to_string(),
        ));
    }
    // Short-circuit for roots of zero and one
    if value == 0.0 {
        return Ok(0.0);
    } else if value == 1.0 {
        return Ok(1.0);
    }

    let inv_degree = 1.0 / degree as f64;
    let one_less = degree - 1;
    let mut root = (inv_degree * value.ln()).exp();
    let mut delta = 1.0;
    while delta > Complex::TOLERANCE {
        let next = inv_degree * (one_less as f64 * root + value / root.powi(one_less));
        delta = (next - root).abs();
        root = next;
    }
    // Coerce to integer when appropriate
    let int_root = root.round();
    if int_root.powi(degree) == value {
        root = int_root;
    }
    Ok(root)
}

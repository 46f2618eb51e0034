use crate::error::MathError;
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    f64::consts::PI,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

/// The native coordinate representation of a [`Complex`] value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    #[default]
    Cartesian,
    Polar,
}

impl Form {
    /// Build a value from two components interpreted in this representation:
    /// `(real, imaginary)` for Cartesian, `(argument, modulus)` for polar.
    pub fn parse(&self, x: f64, y: f64) -> Complex {
        match self {
            Form::Cartesian => Complex::cartesian(x, y),
            Form::Polar => Complex::polar(x, y),
        }
    }
}

impl FromStr for Form {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cart" | "cartesian" | "Cartesian" | "ri" | "RI" => Ok(Form::Cartesian),
            "polar" | "Polar" | "ma" | "MA" => Ok(Form::Polar),
            _ => Err("Form not recognized".to_string().into()),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            Form::Cartesian => write!(f, "cartesian"),
            Form::Polar => write!(f, "polar"),
        }
    }
}

/// A point in the complex plane, stored in whichever representation produced
/// it.
///
/// Cartesian values store `(re, im)` and derive the argument and modulus on
/// demand. Polar values store `(arg, mag)` raw; the principal argument in
/// `(-pi, pi]` and the non-negative modulus are computed by the accessors
/// without touching the stored fields, so a negative stored magnitude is
/// legal between construction and first query.
///
/// Values are immutable. Every operation returns a new value, in the
/// representation that operation is natural in: sums come back Cartesian,
/// products keep the form of the left operand.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub enum Complex {
    Cartesian { re: f64, im: f64 },
    Polar { arg: f64, mag: f64 },
}

/// Reduce an angle in radians to the principal range `(-pi, pi]`.
fn principal_argument(arg: f64) -> f64 {
    if -PI < arg && arg <= PI {
        return arg;
    }
    let mut value = arg % (2.0 * PI);
    if value > PI {
        value -= 2.0 * PI;
    } else if value <= -PI {
        value += 2.0 * PI;
    }
    value
}

impl Complex {
    /// The allowed error when comparing values for equality.
    pub const TOLERANCE: f64 = 1e-13;

    /// Create a new complex number from real and imaginary parts
    pub fn cartesian(re: f64, im: f64) -> Self {
        Complex::Cartesian { re, im }
    }

    /// Create a new complex number from an angle in radians and a magnitude
    pub fn polar(arg: f64, mag: f64) -> Self {
        Complex::Polar { arg, mag }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: f64) -> Self {
        Complex::cartesian(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: f64) -> Self {
        Complex::cartesian(0.0, im)
    }

    /// Create a new complex number from a num::complex
    pub fn from_c64(num: Complex64) -> Self {
        Complex::cartesian(num.re, num.im)
    }

    /// Convert to a num::complex
    pub fn to_c64(&self) -> Complex64 {
        Complex64::new(self.real(), self.imaginary())
    }

    /// Get the native representation of the value
    pub fn form(&self) -> Form {
        match self {
            Complex::Cartesian { .. } => Form::Cartesian,
            Complex::Polar { .. } => Form::Polar,
        }
    }

    /// Get the real part
    pub fn real(&self) -> f64 {
        match self {
            Complex::Cartesian { re, .. } => *re,
            Complex::Polar { arg, mag } => mag * arg.cos(),
        }
    }

    /// Get the imaginary part
    pub fn imaginary(&self) -> f64 {
        match self {
            Complex::Cartesian { im, .. } => *im,
            Complex::Polar { arg, mag } => mag * arg.sin(),
        }
    }

    /// Get the principal argument (phase angle) in `(-pi, pi]`.
    ///
    /// A polar value holding a negative raw magnitude reads as the point on
    /// the opposite ray, so pi is added before reduction.
    pub fn argument(&self) -> f64 {
        match self {
            Complex::Cartesian { re, im } => im.atan2(*re),
            Complex::Polar { arg, mag } => {
                if *mag < 0.0 {
                    principal_argument(arg + PI)
                } else {
                    principal_argument(*arg)
                }
            }
        }
    }

    /// Get the modulus (absolute value), always non-negative
    pub fn modulus(&self) -> f64 {
        match self {
            Complex::Cartesian { re, im } => re.hypot(*im),
            Complex::Polar { mag, .. } => mag.abs(),
        }
    }

    /// Get the square of the modulus, avoiding the square root
    pub fn modulus_sqr(&self) -> f64 {
        match self {
            Complex::Cartesian { re, im } => re * re + im * im,
            Complex::Polar { mag, .. } => mag * mag,
        }
    }

    /// Get the additive inverse, negating in the native representation
    pub fn add_inverse(&self) -> Self {
        match self {
            Complex::Cartesian { re, im } => Complex::cartesian(-re, -im),
            Complex::Polar { arg, mag } => Complex::polar(*arg, -mag),
        }
    }

    /// Get the multiplicative inverse
    pub fn mult_inverse(&self) -> Result<Self, MathError> {
        if self.modulus() == 0.0 {
            return Err(MathError::DomainError(
                "no multiplicative inverse of zero".to_string(),
            ));
        }
        match self {
            Complex::Cartesian { re, im } => {
                let mag_sqr = self.modulus_sqr();
                Ok(Complex::cartesian(re / mag_sqr, -im / mag_sqr))
            }
            Complex::Polar { arg, mag } => Ok(Complex::polar(-arg, 1.0 / mag)),
        }
    }

    /// Get the complex conjugate
    pub fn complement(&self) -> Self {
        match self {
            Complex::Cartesian { re, im } => Complex::cartesian(*re, -im),
            Complex::Polar { arg, mag } => Complex::polar(-arg, *mag),
        }
    }

    /// Add another value to this one.
    ///
    /// Addition is Cartesian-native, so the sum comes back in Cartesian form
    /// except for two polar values on the same ray, whose moduli simply sum.
    pub fn add(&self, other: Complex) -> Self {
        match (self, other) {
            (Complex::Polar { .. }, Complex::Polar { .. })
                if self.argument() == other.argument() =>
            {
                Complex::polar(self.argument(), self.modulus() + other.modulus())
            }
            _ => Complex::cartesian(
                self.real() + other.real(),
                self.imaginary() + other.imaginary(),
            ),
        }
    }

    /// Subtract another value from this one
    pub fn subtract(&self, other: Complex) -> Self {
        self.add(other.add_inverse())
    }

    /// Multiply by another value.
    ///
    /// Multiplication is polar-native (argument sum, modulus product); a
    /// Cartesian left operand uses `(ac - bd, ad + bc)` and stays Cartesian.
    pub fn multiply(&self, other: Complex) -> Self {
        match self {
            Complex::Cartesian { re, im } => Complex::cartesian(
                re * other.real() - im * other.imaginary(),
                re * other.imaginary() + im * other.real(),
            ),
            Complex::Polar { .. } => Complex::polar(
                self.argument() + other.argument(),
                self.modulus() * other.modulus(),
            ),
        }
    }

    /// Divide by another value
    pub fn divide(&self, denominator: Complex) -> Result<Self, MathError> {
        if denominator.modulus() == 0.0 {
            return Err(MathError::DomainError(
                "attempted to divide by zero".to_string(),
            ));
        }
        Ok(self.multiply(denominator.mult_inverse()?))
    }

    /// Raise this value to a complex exponent, as `exp(log(self) * exponent)`
    pub fn pow(&self, exponent: Complex) -> Result<Self, MathError> {
        Ok(crate::math::exp(crate::math::log(*self)?.multiply(exponent)))
    }
}

impl PartialEq for Complex {
    /// Tolerance-based distance equality: two values are equal when the
    /// modulus of their difference is below [`Complex::TOLERANCE`].
    fn eq(&self, other: &Self) -> bool {
        self.subtract(*other).modulus() < Self::TOLERANCE
    }
}

impl PartialEq<f64> for Complex {
    /// A value on the real axis equals the matching scalar; anything with a
    /// non-negligible imaginary part equals no scalar at all.
    fn eq(&self, other: &f64) -> bool {
        self.imaginary().abs() < Self::TOLERANCE && (self.real() - other).abs() < Self::TOLERANCE
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

fn canonical_bits(val: f64) -> u64 {
    // Collapse -0.0 so both zeros hash alike
    if val == 0.0 {
        0.0f64.to_bits()
    } else {
        val.to_bits()
    }
}

impl Hash for Complex {
    /// Hash the normalized `(re, im)` pair, folding in only the real part
    /// for values on the real axis so both representations of the same
    /// real number hash alike.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let im = self.imaginary();
        canonical_bits(self.real()).hash(state);
        if im != 0.0 {
            canonical_bits(im).hash(state);
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complex::Cartesian { re, im } => write!(f, "{}+{}i", re, im),
            Complex::Polar { arg, mag } => write!(f, "{}*e^(i*{})", mag, arg),
        }
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::cartesian(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.modulus() < Self::TOLERANCE
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::cartesian(1.0, 0.0)
    }
}

// Implement basic arithmetic operations
impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::add(&self, other)
    }
}

impl Add<&Complex> for Complex {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        Complex::add(&self, *other)
    }
}

impl Add<Complex> for &Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::add(self, other)
    }
}

impl Add<&Complex> for &Complex {
    type Output = Complex;

    fn add(self, other: &Complex) -> Complex {
        Complex::add(self, *other)
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self {
        Complex::add(&self, Complex::from_real(other))
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::add(&Complex::from_real(self), other)
    }
}

impl Add<Complex64> for Complex {
    type Output = Self;

    fn add(self, other: Complex64) -> Self {
        Complex::add(&self, Complex::from_c64(other))
    }
}

impl Add<Complex> for Complex64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::add(&Complex::from_c64(self), other)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Sub<&Complex> for Complex {
    type Output = Self;

    fn sub(self, other: &Self) -> Self {
        self.subtract(*other)
    }
}

impl Sub<Complex> for &Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        self.subtract(other)
    }
}

impl Sub<&Complex> for &Complex {
    type Output = Complex;

    fn sub(self, other: &Complex) -> Complex {
        self.subtract(*other)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, other: f64) -> Self {
        self.subtract(Complex::from_real(other))
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::from_real(self).subtract(other)
    }
}

impl Sub<Complex64> for Complex {
    type Output = Self;

    fn sub(self, other: Complex64) -> Self {
        self.subtract(Complex::from_c64(other))
    }
}

impl Sub<Complex> for Complex64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::from_c64(self).subtract(other)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Mul<&Complex> for Complex {
    type Output = Self;

    fn mul(self, other: &Self) -> Self {
        self.multiply(*other)
    }
}

impl Mul<Complex> for &Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        self.multiply(other)
    }
}

impl Mul<&Complex> for &Complex {
    type Output = Complex;

    fn mul(self, other: &Complex) -> Complex {
        self.multiply(*other)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        self.multiply(Complex::from_real(other))
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::from_real(self).multiply(other)
    }
}

impl Mul<Complex64> for Complex {
    type Output = Self;

    fn mul(self, other: Complex64) -> Self {
        self.multiply(Complex::from_c64(other))
    }
}

impl Mul<Complex> for Complex64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::from_c64(self).multiply(other)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        self.add_inverse()
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.add_inverse()
    }
}

/// Incremental constructor for callers that collect components one at a
/// time, such as a pair of text fields. `build` names the missing piece.
#[derive(Default)]
pub struct ComplexBuilder {
    form: Option<Form>,
    x: Option<f64>,
    y: Option<f64>,
}

impl ComplexBuilder {
    pub fn new() -> Self {
        ComplexBuilder::default()
    }

    pub fn form(mut self, val: Form) -> Self {
        self.form = Some(val);
        self
    }

    /// Set the first component: the real part (Cartesian) or argument (polar)
    pub fn real(mut self, val: f64) -> Self {
        self.x = Some(val);
        self
    }

    pub fn argument(mut self, val: f64) -> Self {
        self.x = Some(val);
        self
    }

    /// Set the second component: the imaginary part (Cartesian) or modulus
    /// (polar)
    pub fn imag(mut self, val: f64) -> Self {
        self.y = Some(val);
        self
    }

    pub fn modulus(mut self, val: f64) -> Self {
        self.y = Some(val);
        self
    }

    pub fn build(self) -> Result<Complex, MathError> {
        let form = self
            .form
            .ok_or_else(|| MathError::MissingOperand("representation must be set".to_string()))?;
        let x = self
            .x
            .ok_or_else(|| MathError::MissingOperand("first component must be set".to_string()))?;
        let y = self
            .y
            .ok_or_else(|| MathError::MissingOperand("second component must be set".to_string()))?;
        Ok(form.parse(x, y))
    }
}

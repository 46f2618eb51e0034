use complexkit::prelude::*;
use complexkit::util::{comp_complex, comp_vec_complex, margin};
use complexkit::{cart, polar};
use std::f64::consts::PI;

#[test]
fn test_builder_roundtrip_through_display() {
    // A UI collects two numbers and a representation, builds a value, and
    // formats the result for display.
    let value = ComplexBuilder::new()
        .form("cartesian".parse::<Form>().unwrap())
        .real(3.0)
        .imag(-4.0)
        .build()
        .unwrap();
    assert_eq!(value.to_string(), "3+-4i");
    assert_eq!(value.to_markup().text(), "3+-4i");

    let incomplete = ComplexBuilder::new().form(Form::Polar).argument(1.0).build();
    assert_eq!(
        incomplete,
        Err(MathError::MissingOperand(
            "second component must be set".to_string()
        ))
    );
}

#[test]
fn test_mult_inverse_identity() {
    for z in [
        cart![3.0, -4.0],
        cart![-0.5, 0.25],
        polar![2.0, 3.0],
        polar![-1.0, 0.125],
    ] {
        comp_complex(
            &Complex::one(),
            &z.multiply(z.mult_inverse().unwrap()),
            margin(),
            "z * 1/z",
        );
    }
}

#[test]
fn test_add_inverse_identity() {
    for z in [cart![3.0, -4.0], polar![2.0, 3.0], cart![0.0, 0.0]] {
        let sum = z.add(z.add_inverse());
        assert_eq!(sum.real(), 0.0);
        assert_eq!(sum.imaginary(), 0.0);
    }
}

#[test]
fn test_exp_log_identity() {
    for z in [cart![76.0, -0.78], cart![-3.0, 2.0], polar![1.0, 5.0]] {
        comp_complex(&z, &exp(log(z).unwrap()), margin(), "exp(log(z))");
    }
}

#[test]
fn test_roots_consumed_as_list() {
    // The roots list is finite, ordered, and exactly degree long, the shape
    // a list display expects.
    let degree = 6;
    let all = roots(cart![1.0, 1.0], degree).unwrap();
    assert_eq!(all.len(), degree as usize);

    let expected: Vec<Complex> = {
        let principal = root(cart![1.0, 1.0], degree).unwrap();
        (0..degree)
            .map(|k| {
                Complex::polar(
                    principal.argument() + k as f64 * 2.0 * PI / degree as f64,
                    principal.modulus(),
                )
            })
            .collect()
    };
    comp_vec_complex(&expected, &all, margin(), "roots(1+1i, 6)");

    for r in &all {
        comp_complex(
            &cart![1.0, 1.0],
            &r.pow(Complex::from_real(degree as f64)).unwrap(),
            margin(),
            "root^6",
        );
    }
}

#[test]
fn test_known_values() {
    assert_eq!(root(cart![-1.0, 0.0], 2).unwrap(), cart![0.0, 1.0]);
    assert_eq!(root(cart![-16.0, 0.0], 4).unwrap(), polar![PI / 4.0, 2.0]);
    assert_eq!(
        log(polar![3.0, 42.0]).unwrap(),
        cart![42.0f64.ln(), 3.0]
    );
    assert_eq!(cart![0.0, 1.0].pow(cart![2.0, 0.0]).unwrap(), cart![-1.0, 0.0]);
    assert_eq!(cart![0.0, 1.0].pow(cart![4.0, 0.0]).unwrap(), cart![1.0, 0.0]);

    let quarter_pi = polar![PI / 4.0, 1.0];
    let matches = roots(cart![-1.0, 0.0], 4)
        .unwrap()
        .into_iter()
        .filter(|r| *r == quarter_pi)
        .count();
    assert_eq!(matches, 1);

    let sum = polar![0.0, 42.0] + polar![PI / 2.0, 42.0];
    assert_eq!(sum.form(), Form::Cartesian);
    assert_eq!(sum, cart![42.0, 42.0]);
}

#[test]
fn test_scalar_equality() {
    assert_eq!(cart![42.0, 0.0], 42.0);
    assert_eq!(polar![0.0, 42.0], 42.0);
    assert_ne!(cart![42.0, 0.1], 42.0);
    assert_ne!(polar![PI / 2.0, 42.0], 42.0);
}

#[test]
fn test_failures_leave_values_usable() {
    let zero = Complex::zero();
    assert!(zero.mult_inverse().is_err());
    assert!(log(zero).is_err());
    assert!(zero.pow(cart![2.0, 0.0]).is_err());
    assert!(root(zero, 0).is_err());
    // The operand is untouched and still usable after a failed call
    assert_eq!(zero.add(cart![1.0, 0.0]), Complex::one());
}

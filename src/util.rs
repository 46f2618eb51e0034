use crate::complex::Complex;
use float_cmp::{approx_eq, F64Margin};

/// Comparison margin matching the crate's equality tolerance.
pub fn margin() -> F64Margin {
    F64Margin {
        epsilon: Complex::TOLERANCE,
        ulps: 4,
    }
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    debug_assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_complex(exemplar: &Complex, calc: &Complex, precision: F64Margin, test: &str) {
    comp_f64(&exemplar.real(), &calc.real(), precision, test, "re");
    comp_f64(
        &exemplar.imaginary(),
        &calc.imaginary(),
        precision,
        test,
        "im",
    );
}

pub fn comp_vec_complex(exemplar: &[Complex], calc: &[Complex], precision: F64Margin, test: &str) {
    for k in 0..calc.len() {
        comp_f64(
            &exemplar[k].real(),
            &calc[k].real(),
            precision,
            test,
            &format!("({}).re", k),
        );
        comp_f64(
            &exemplar[k].imaginary(),
            &calc[k].imaginary(),
            precision,
            test,
            &format!("({}).im", k),
        );
    }
}

//! complexkit prelude.
//!
//! This module contains the most used types, traits, and functions that you
//! can import easily as a group.
//!
//! ```
//! use complexkit::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::complex::{Complex, ComplexBuilder, Form};

#[doc(no_inline)]
pub use crate::error::MathError;

#[doc(no_inline)]
pub use crate::math::{exp, log, pow, root, root_newton, roots};

#[doc(no_inline)]
pub use crate::markup::{MarkupSpan, MarkupText, SpanKind};

#[doc(no_inline)]
pub use num_traits::{One, Zero};

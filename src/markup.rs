use crate::complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Styling attached to a byte range of rendered text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// The imaginary unit, conventionally italicised.
    ImaginaryUnit,
    /// The polar angle, conventionally raised as an exponent.
    Superscript,
}

/// A styled byte range of a [`MarkupText`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

/// Plain text plus the spans a renderer needs to style it.
///
/// The core only names which ranges hold the imaginary unit and the angle;
/// turning those into italics, superscripts, or any other styling is the
/// renderer's business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkupText {
    text: String,
    spans: Vec<MarkupSpan>,
}

impl MarkupText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[MarkupSpan] {
        &self.spans
    }
}

impl fmt::Display for MarkupText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Complex {
    /// Render with styling spans.
    ///
    /// Cartesian `a+bi` marks the trailing `i`. Polar `me^{a}i` raises
    /// everything after the `e` as the exponent, with the closing `i`
    /// additionally marked as the imaginary unit.
    pub fn to_markup(&self) -> MarkupText {
        match self {
            Complex::Cartesian { re, im } => {
                let mut text = format!("{}+{}", re, im);
                let italic = text.len();
                text.push('i');
                MarkupText {
                    spans: vec![MarkupSpan {
                        kind: SpanKind::ImaginaryUnit,
                        start: italic,
                        end: text.len(),
                    }],
                    text,
                }
            }
            Complex::Polar { arg, mag } => {
                let mut text = format!("{}e", mag);
                let superscript = text.len();
                text.push_str(&arg.to_string());
                let italic = text.len();
                text.push('i');
                MarkupText {
                    spans: vec![
                        MarkupSpan {
                            kind: SpanKind::Superscript,
                            start: superscript,
                            end: text.len(),
                        },
                        MarkupSpan {
                            kind: SpanKind::ImaginaryUnit,
                            start: italic,
                            end: text.len(),
                        },
                    ],
                    text,
                }
            }
        }
    }

    /// Format as LaTeX-style math code, without delimiters.
    pub fn to_latex(&self) -> String {
        match self {
            Complex::Cartesian { .. } => self.to_string(),
            Complex::Polar { arg, mag } => format!("{}\\,e^{{{}\\,i}}", mag, arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_markup() {
        let markup = Complex::cartesian(3.0, -4.0).to_markup();
        assert_eq!(markup.text(), "3+-4i");
        assert_eq!(
            markup.spans(),
            &[MarkupSpan {
                kind: SpanKind::ImaginaryUnit,
                start: 4,
                end: 5,
            }]
        );
        assert_eq!(&markup.text()[4..5], "i");
    }

    #[test]
    fn test_polar_markup() {
        let markup = Complex::polar(1.5, 3.0).to_markup();
        assert_eq!(markup.text(), "3e1.5i");
        assert_eq!(
            markup.spans(),
            &[
                MarkupSpan {
                    kind: SpanKind::Superscript,
                    start: 2,
                    end: 6,
                },
                MarkupSpan {
                    kind: SpanKind::ImaginaryUnit,
                    start: 5,
                    end: 6,
                },
            ]
        );
        assert_eq!(&markup.text()[2..6], "1.5i");
        assert_eq!(&markup.text()[5..6], "i");
    }

    #[test]
    fn test_latex() {
        assert_eq!(Complex::cartesian(3.0, 4.0).to_latex(), "3+4i");
        assert_eq!(Complex::polar(1.57, 3.0).to_latex(), "3\\,e^{1.57\\,i}");
    }

    #[test]
    fn test_markup_serialization() {
        let markup = Complex::polar(1.5, 3.0).to_markup();
        let json = serde_json::to_string(&markup).unwrap();
        let back: MarkupText = serde_json::from_str(&json).unwrap();
        assert_eq!(markup, back);
    }
}

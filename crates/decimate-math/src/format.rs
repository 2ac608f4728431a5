//! Locale-independent component formatting
//!
//! Vectors print as `(x, y, z)`. Each component is rendered with a
//! [`ComponentFormat`], which can be parsed from short specifiers such as
//! `"F3"` or `"E2"`. Rust's float formatting never consults a locale, so the
//! decimal separator is always `.`.

use std::fmt;
use std::str::FromStr;

use crate::error::VectorError;

/// Number of decimals used when no precision is requested.
pub const DEFAULT_DECIMALS: usize = 1;

/// Largest precision accepted by the parser.
pub const MAX_DECIMALS: usize = 99;

/// How a single vector component is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFormat {
    /// Fixed-point with the given number of decimals (`F`).
    Fixed(usize),
    /// Scientific notation with the given number of mantissa decimals (`E`),
    /// rendered as `1.500E+003`.
    Exponent(usize),
    /// Shortest representation that round-trips (`G`).
    General,
}

impl Default for ComponentFormat {
    fn default() -> Self {
        ComponentFormat::Fixed(DEFAULT_DECIMALS)
    }
}

impl ComponentFormat {
    /// Writes one component to `out`.
    pub fn write_component<W: fmt::Write>(&self, out: &mut W, value: f32) -> fmt::Result {
        match *self {
            ComponentFormat::Fixed(decimals) => write!(out, "{:.*}", decimals, value),
            ComponentFormat::General => write!(out, "{}", value),
            ComponentFormat::Exponent(decimals) => {
                if !value.is_finite() {
                    return write!(out, "{}", value);
                }
                let rendered = format!("{:.*e}", decimals, value);
                match rendered.split_once('e') {
                    Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                        Ok(exponent) => write!(out, "{}E{:+04}", mantissa, exponent),
                        Err(_) => out.write_str(&rendered),
                    },
                    None => out.write_str(&rendered),
                }
            }
        }
    }

    /// Renders one component to a new string.
    pub fn format_component(&self, value: f32) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_component(&mut out, value);
        out
    }

    /// Writes `(c0, c1, ...)` to `out`.
    pub fn write_components<W: fmt::Write>(&self, out: &mut W, components: &[f32]) -> fmt::Result {
        out.write_char('(')?;
        for (i, value) in components.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            self.write_component(out, *value)?;
        }
        out.write_char(')')
    }
}

impl FromStr for ComponentFormat {
    type Err = VectorError;

    /// Parses `F[n]`, `E[n]` or `G[n]` (case-insensitive).
    ///
    /// A bare `F` means two decimals and a bare `E` means six. The precision
    /// of `G` is accepted and ignored.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || VectorError::InvalidFormat(spec.to_string());

        let mut chars = spec.chars();
        let kind = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();

        let precision = if digits.is_empty() {
            None
        } else {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: usize = digits.parse().map_err(|_| invalid())?;
            if value > MAX_DECIMALS {
                return Err(invalid());
            }
            Some(value)
        };

        match kind.to_ascii_uppercase() {
            'F' => Ok(ComponentFormat::Fixed(precision.unwrap_or(2))),
            'E' => Ok(ComponentFormat::Exponent(precision.unwrap_or(6))),
            'G' => Ok(ComponentFormat::General),
            _ => Err(invalid()),
        }
    }
}

/// Shared `Display` body for the vector types.
///
/// Honors the formatter's precision (`{:.3}`), falling back to
/// [`DEFAULT_DECIMALS`].
pub(crate) fn display_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    let decimals = f.precision().unwrap_or(DEFAULT_DECIMALS);
    ComponentFormat::Fixed(decimals).write_components(f, components)
}

/// Renders `components` with a parsed format specifier.
pub(crate) fn components_to_string(components: &[f32], format: &ComponentFormat) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = format.write_components(&mut out, components);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specifiers() {
        assert_eq!("F1".parse::<ComponentFormat>(), Ok(ComponentFormat::Fixed(1)));
        assert_eq!("f".parse::<ComponentFormat>(), Ok(ComponentFormat::Fixed(2)));
        assert_eq!("E3".parse::<ComponentFormat>(), Ok(ComponentFormat::Exponent(3)));
        assert_eq!("e".parse::<ComponentFormat>(), Ok(ComponentFormat::Exponent(6)));
        assert_eq!("G".parse::<ComponentFormat>(), Ok(ComponentFormat::General));
        assert_eq!("g9".parse::<ComponentFormat>(), Ok(ComponentFormat::General));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for spec in ["", "X", "F-1", "F1.5", "F100", "N2", "FF"] {
            assert_eq!(
                spec.parse::<ComponentFormat>(),
                Err(VectorError::InvalidFormat(spec.to_string())),
                "spec {:?} should be rejected",
                spec
            );
        }
    }

    #[test]
    fn test_fixed() {
        let format = ComponentFormat::Fixed(3);
        assert_eq!(format.format_component(1.5), "1.500");
        assert_eq!(format.format_component(-0.25), "-0.250");
        assert_eq!(ComponentFormat::default().format_component(2.0), "2.0");
    }

    #[test]
    fn test_fixed_rounds_exact_midpoints_to_even() {
        let format = ComponentFormat::Fixed(1);
        assert_eq!(format.format_component(0.25), "0.2");
        assert_eq!(format.format_component(0.75), "0.8");
        assert_eq!(format.format_component(-0.25), "-0.2");
        assert_eq!(ComponentFormat::Fixed(0).format_component(2.5), "2");
        // 0.35 and 0.45 are not midpoints once stored as f32
        assert_eq!(format.format_component(0.35), "0.3");
        assert_eq!(format.format_component(0.45), "0.4");
    }

    #[test]
    fn test_exponent() {
        let format = ComponentFormat::Exponent(3);
        assert_eq!(format.format_component(1500.0), "1.500E+003");
        assert_eq!(format.format_component(0.00025), "2.500E-004");
        assert_eq!(format.format_component(0.0), "0.000E+000");
        assert_eq!(format.format_component(f32::INFINITY), "inf");
    }

    #[test]
    fn test_general() {
        assert_eq!(ComponentFormat::General.format_component(1.0), "1");
        assert_eq!(ComponentFormat::General.format_component(0.1), "0.1");
    }

    #[test]
    fn test_write_components() {
        let text = components_to_string(&[1.0, 2.0, 3.0], &ComponentFormat::Fixed(1));
        assert_eq!(text, "(1.0, 2.0, 3.0)");

        let text = components_to_string(&[f32::NAN, 0.5], &ComponentFormat::Fixed(2));
        assert_eq!(text, "(NaN, 0.50)");
    }
}

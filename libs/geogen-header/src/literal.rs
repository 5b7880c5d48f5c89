//! # Literals and Array Declarations
//!
//! Text forms of individual values and of whole `constexpr std::array`
//! declarations.

use std::fmt::Write;

use config::constants::{ARRAY_INDENT, FLOAT_DECIMALS};

use crate::error::EmitError;

/// Formats a float as a C++ `float` literal.
///
/// The value is printed with a fixed number of decimals, trailing zeros are
/// stripped, at least one decimal digit is kept, and an `f` suffix is added.
/// Callers must pass finite values.
///
/// # Example
///
/// ```rust
/// use geogen_header::format_float;
///
/// assert_eq!(format_float(-1.0), "-1.0f");
/// assert_eq!(format_float(0.5773502), "0.57735f");
/// assert_eq!(format_float(0.0), "0.0f");
/// ```
pub fn format_float(value: f32) -> String {
    let fixed = format!("{:.*}", FLOAT_DECIMALS, value);
    let mut literal = fixed.trim_end_matches('0').to_string();
    if literal.ends_with('.') {
        literal.push('0');
    }
    literal.push('f');
    literal
}

/// Returns true if `name` is a valid C++ identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Writes a `constexpr std::array<float, N>` declaration.
pub fn write_float_array<W: Write>(
    out: &mut W,
    name: &str,
    values: &[f32],
    per_line: usize,
) -> Result<(), EmitError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(EmitError::NonFiniteValue {
            array: name.to_string(),
            index,
            value: values[index],
        });
    }
    write_array(out, "float", name, values, per_line, |v| format_float(*v))
}

/// Writes a `constexpr std::array<unsigned int, N>` declaration.
pub fn write_uint_array<W: Write>(
    out: &mut W,
    name: &str,
    values: &[u32],
    per_line: usize,
) -> Result<(), EmitError> {
    write_array(out, "unsigned int", name, values, per_line, u32::to_string)
}

fn write_array<W: Write, T>(
    out: &mut W,
    element_type: &str,
    name: &str,
    values: &[T],
    per_line: usize,
    literal: impl Fn(&T) -> String,
) -> Result<(), EmitError> {
    if !is_identifier(name) {
        return Err(EmitError::invalid_identifier(name));
    }

    writeln!(
        out,
        "constexpr std::array<{}, {}> {} = {{",
        element_type,
        values.len(),
        name
    )?;
    for line in values.chunks(per_line.max(1)) {
        let items: Vec<String> = line.iter().map(&literal).collect();
        writeln!(out, "{}{},", ARRAY_INDENT, items.join(", "))?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

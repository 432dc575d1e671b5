use super::FormatError;
use super::decimal::{Decimal, group_thousands};
use super::spec::{Conversion, Flags, Index, Segment, Specifier};
use crate::domain_model::LogArg;

pub(crate) fn render(segments: &[Segment<'_>], args: &[LogArg]) -> Result<String, FormatError> {
    let mut out = String::new();
    let mut ordinary = 0;
    let mut last = None;
    for segment in segments {
        let specifier = match segment {
            Segment::Literal(text) => {
                out.push_str(text);
                continue;
            }
            Segment::Specifier(specifier) => specifier,
        };
        let text = if specifier.conversion.takes_argument() {
            let position = match specifier.index {
                Index::Ordinary => {
                    ordinary += 1;
                    ordinary - 1
                }
                Index::Explicit(position) => position - 1,
                Index::Previous => {
                    last.ok_or_else(|| FormatError::MissingArgument(specifier.text.clone()))?
                }
            };
            let arg = args
                .get(position)
                .ok_or_else(|| FormatError::MissingArgument(specifier.text.clone()))?;
            last = Some(position);
            convert(specifier, arg)?
        } else if specifier.conversion == Conversion::Percent {
            "%".to_string()
        } else {
            "\n".to_string()
        };
        justify(&mut out, specifier, &text);
    }
    Ok(out)
}

fn convert(specifier: &Specifier, arg: &LogArg) -> Result<String, FormatError> {
    let text = match (specifier.conversion, arg, arg.signed()) {
        (Conversion::Boolean, LogArg::Null, _) => truncate("false".to_string(), specifier),
        (Conversion::Boolean, LogArg::Bool(value), _) => truncate(value.to_string(), specifier),
        (Conversion::Boolean, _, _) => truncate("true".to_string(), specifier),
        (Conversion::String, arg, _) => truncate(arg.to_string(), specifier),
        (_, LogArg::Null, _) => "null".to_string(),
        (Conversion::Char, LogArg::Char(value), _) => value.to_string(),
        (Conversion::Char, _, Some((value, _))) => code_point(i128::from(value))?,
        (Conversion::Char, LogArg::UInt(value), _) => code_point(i128::from(*value))?,
        (Conversion::Decimal, _, Some((value, _))) => {
            signed(specifier, value < 0, value.unsigned_abs().to_string())
        }
        (Conversion::Decimal, LogArg::UInt(value), _) => {
            signed(specifier, false, value.to_string())
        }
        (Conversion::Octal | Conversion::Hex, _, Some((value, bits))) => {
            unsigned(specifier, twos_complement(value, bits))
        }
        (Conversion::Octal | Conversion::Hex, LogArg::UInt(value), _) => {
            unsigned(specifier, *value)
        }
        (
            Conversion::Scientific | Conversion::Fixed | Conversion::General,
            LogArg::Float(value),
            _,
        ) => float(specifier, *value)?,
        (_, arg, _) => {
            return Err(FormatError::IllegalConversion {
                specifier: specifier.text.clone(),
                argument: arg.kind(),
            });
        }
    };
    Ok(if specifier.upper {
        text.to_uppercase()
    } else {
        text
    })
}

fn truncate(text: String, specifier: &Specifier) -> String {
    match specifier.precision {
        Some(precision) => text.chars().take(precision).collect(),
        None => text,
    }
}

fn code_point(value: i128) -> Result<String, FormatError> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .ok_or_else(|| FormatError::IllegalCodePoint(value.to_string()))
}

fn signed(specifier: &Specifier, negative: bool, digits: String) -> String {
    let body = if specifier.flags.group {
        group_thousands(&digits)
    } else {
        digits
    };
    let (prefix, suffix) = sign(specifier.flags, negative);
    zero_fill(specifier, prefix, &body, suffix)
}

// Negative values keep the width of their source type: -1i8 is 0xff.
fn twos_complement(value: i64, bits: u32) -> u64 {
    (value as u64) & (u64::MAX >> (u64::BITS - bits))
}

fn unsigned(specifier: &Specifier, value: u64) -> String {
    let (digits, prefix) = match specifier.conversion {
        Conversion::Octal => (format!("{value:o}"), "0"),
        _ => (format!("{value:x}"), "0x"),
    };
    let prefix = if specifier.flags.alternate { prefix } else { "" };
    zero_fill(specifier, prefix, &digits, "")
}

fn float(specifier: &Specifier, value: f64) -> Result<String, FormatError> {
    let flags = specifier.flags;
    if value.is_nan() {
        return Ok("NaN".to_string());
    }
    let (prefix, suffix) = sign(flags, value.is_sign_negative());
    if value.is_infinite() {
        return Ok(format!("{prefix}Infinity{suffix}"));
    }

    let precision = i32::try_from(specifier.precision.unwrap_or(6))
        .map_err(|_| FormatError::NumberOverflow(specifier.text.clone()))?;
    let mut decimal = Decimal::from_f64(value);
    let body = match specifier.conversion {
        Conversion::Fixed => {
            decimal.round_fixed(precision);
            decimal.fixed(precision, flags.group, flags.alternate)
        }
        Conversion::Scientific => {
            decimal.round_significant(precision.saturating_add(1));
            decimal.scientific(precision, flags.alternate)
        }
        _ => {
            let precision = precision.max(1);
            decimal.round_significant(precision);
            let exponent = decimal.exponent();
            if decimal.is_zero() || (-4..precision).contains(&exponent) {
                decimal.fixed(precision - exponent - 1, flags.group, false)
            } else {
                decimal.scientific(precision - 1, false)
            }
        }
    };
    Ok(zero_fill(specifier, prefix, &body, suffix))
}

fn sign(flags: Flags, negative: bool) -> (&'static str, &'static str) {
    match (negative, flags.parentheses) {
        (true, true) => ("(", ")"),
        (true, false) => ("-", ""),
        (false, _) if flags.plus => ("+", ""),
        (false, _) if flags.space => (" ", ""),
        _ => ("", ""),
    }
}

// Zeros go between the sign or radix prefix and the digits.
fn zero_fill(specifier: &Specifier, prefix: &str, body: &str, suffix: &str) -> String {
    let mut text = String::from(prefix);
    if let (true, Some(width)) = (specifier.flags.zero_pad, specifier.width) {
        let used = prefix.len() + body.chars().count() + suffix.len();
        for _ in used..width {
            text.push('0');
        }
    }
    text.push_str(body);
    text.push_str(suffix);
    text
}

fn justify(out: &mut String, specifier: &Specifier, text: &str) {
    let padding = specifier
        .width
        .unwrap_or(0)
        .saturating_sub(text.chars().count());
    if specifier.flags.left {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', padding));
    } else {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(text);
    }
}

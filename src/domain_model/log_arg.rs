use std::fmt;

/// A value substituted into a log template.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Null,
}

impl LogArg {
    /// Human-readable kind, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            LogArg::Int8(_)
            | LogArg::Int16(_)
            | LogArg::Int32(_)
            | LogArg::Int(_)
            | LogArg::UInt(_) => "integer",
            LogArg::Float(_) => "float",
            LogArg::Bool(_) => "boolean",
            LogArg::Char(_) => "character",
            LogArg::Str(_) => "string",
            LogArg::Null => "null",
        }
    }

    /// Signed value together with the bit width of the type it came from.
    pub fn signed(&self) -> Option<(i64, u32)> {
        match *self {
            LogArg::Int8(v) => Some((i64::from(v), i8::BITS)),
            LogArg::Int16(v) => Some((i64::from(v), i16::BITS)),
            LogArg::Int32(v) => Some((i64::from(v), i32::BITS)),
            LogArg::Int(v) => Some((v, i64::BITS)),
            _ => None,
        }
    }
}

// Locale-invariant string value: floats keep a fractional digit and switch
// to `E` notation outside [1e-3, 1e7).
impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Int8(v) => write!(f, "{v}"),
            LogArg::Int16(v) => write!(f, "{v}"),
            LogArg::Int32(v) => write!(f, "{v}"),
            LogArg::Int(v) => write!(f, "{v}"),
            LogArg::UInt(v) => write!(f, "{v}"),
            LogArg::Float(v) => write_float(f, *v),
            LogArg::Bool(v) => write!(f, "{v}"),
            LogArg::Char(v) => write!(f, "{v}"),
            LogArg::Str(v) => f.write_str(v),
            LogArg::Null => f.write_str("null"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_sign_negative() {
        f.write_str("-")?;
    }
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return f.write_str("Infinity");
    }
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = magnitude.to_string();
        f.write_str(&plain)?;
        if !plain.contains('.') {
            f.write_str(".0")?;
        }
        return Ok(());
    }
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{mantissa}E{exponent}")
    } else {
        write!(f, "{mantissa}.0E{exponent}")
    }
}

macro_rules! from_signed {
    ($($ty:ty => $variant:ident),*) => {
        $(impl From<$ty> for LogArg {
            fn from(value: $ty) -> Self {
                LogArg::$variant(value)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogArg {
            fn from(value: $ty) -> Self {
                LogArg::UInt(u64::from(value))
            }
        })*
    };
}

from_signed!(i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for LogArg {
    fn from(value: isize) -> Self {
        LogArg::Int(value as i64)
    }
}

impl From<usize> for LogArg {
    fn from(value: usize) -> Self {
        LogArg::UInt(value as u64)
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        LogArg::Float(value)
    }
}

impl From<f32> for LogArg {
    fn from(value: f32) -> Self {
        // Widen through the shortest decimal so 0.1f32 stays 0.1.
        LogArg::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        LogArg::Bool(value)
    }
}

impl From<char> for LogArg {
    fn from(value: char) -> Self {
        LogArg::Char(value)
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Str(value.to_owned())
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        LogArg::Str(value)
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        LogArg::Str(value.clone())
    }
}

impl<T: Into<LogArg>> From<Option<T>> for LogArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogArg::Null, Into::into)
    }
}

use super::FormatError;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Flags {
    pub left: bool,
    pub alternate: bool,
    pub plus: bool,
    pub space: bool,
    pub zero_pad: bool,
    pub group: bool,
    pub parentheses: bool,
}

impl Flags {
    const LEFT: Flags = Flags {
        left: true,
        alternate: false,
        plus: false,
        space: false,
        zero_pad: false,
        group: false,
        parentheses: false,
    };

    /// Sets the flag spelled by `byte`; `Ok(false)` when `byte` is not a flag.
    fn set(&mut self, byte: u8) -> Result<bool, FormatError> {
        let slot = match byte {
            b'-' => &mut self.left,
            b'#' => &mut self.alternate,
            b'+' => &mut self.plus,
            b' ' => &mut self.space,
            b'0' => &mut self.zero_pad,
            b',' => &mut self.group,
            b'(' => &mut self.parentheses,
            _ => return Ok(false),
        };
        if *slot {
            return Err(FormatError::DuplicateFlag(char::from(byte)));
        }
        *slot = true;
        Ok(true)
    }

    fn is_empty(&self) -> bool {
        *self == Flags::default()
    }

    fn intersect(&self, other: Flags) -> Flags {
        Flags {
            left: self.left && other.left,
            alternate: self.alternate && other.alternate,
            plus: self.plus && other.plus,
            space: self.space && other.space,
            zero_pad: self.zero_pad && other.zero_pad,
            group: self.group && other.group,
            parentheses: self.parentheses && other.parentheses,
        }
    }

    fn except(&self, allowed: Flags) -> Flags {
        Flags {
            left: self.left && !allowed.left,
            alternate: self.alternate && !allowed.alternate,
            plus: self.plus && !allowed.plus,
            space: self.space && !allowed.space,
            zero_pad: self.zero_pad && !allowed.zero_pad,
            group: self.group && !allowed.group,
            parentheses: self.parentheses && !allowed.parentheses,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelled = [
            (self.left, '-'),
            (self.alternate, '#'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.zero_pad, '0'),
            (self.group, ','),
            (self.parentheses, '('),
        ];
        for (set, symbol) in spelled {
            if set {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Index {
    Ordinary,
    Explicit(usize),
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conversion {
    Boolean,
    String,
    Char,
    Decimal,
    Octal,
    Hex,
    Scientific,
    Fixed,
    General,
    LineSeparator,
    Percent,
}

impl Conversion {
    pub fn takes_argument(self) -> bool {
        !matches!(self, Conversion::LineSeparator | Conversion::Percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Specifier {
    /// Source text, e.g. `%-8.3f`.
    pub text: String,
    pub index: Index,
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
    pub upper: bool,
    symbol: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Specifier(Specifier),
}

/// Splits `template` into literal runs and validated specifiers.
pub(crate) fn parse(template: &str) -> Result<Vec<Segment<'_>>, FormatError> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = template[cursor..].find('%') {
        let start = cursor + offset;
        if start > cursor {
            segments.push(Segment::Literal(&template[cursor..start]));
        }
        let specifier = Specifier::parse(template, start)?;
        cursor = start + specifier.text.len();
        segments.push(Segment::Specifier(specifier));
    }
    if cursor < template.len() {
        segments.push(Segment::Literal(&template[cursor..]));
    }
    Ok(segments)
}

// %[index$][flags][width][.precision]conversion
impl Specifier {
    fn parse(template: &str, start: usize) -> Result<Self, FormatError> {
        let bytes = template.as_bytes();
        let mut cursor = start + 1;

        let mut index = Index::Ordinary;
        let index_end = digits_end(bytes, cursor);
        if index_end > cursor && bytes.get(index_end) == Some(&b'$') {
            let position = number(template, start, cursor, index_end)?;
            if position == 0 {
                return Err(FormatError::IllegalArgumentIndex(position));
            }
            index = Index::Explicit(position);
            cursor = index_end + 1;
        }

        let mut flags = Flags::default();
        let mut previous = false;
        while let Some(&byte) = bytes.get(cursor) {
            if byte == b'<' {
                if previous {
                    return Err(FormatError::DuplicateFlag('<'));
                }
                previous = true;
            } else if !flags.set(byte)? {
                break;
            }
            cursor += 1;
        }
        if previous {
            index = Index::Previous;
        }

        let mut width = None;
        let width_end = digits_end(bytes, cursor);
        if width_end > cursor {
            width = Some(number(template, start, cursor, width_end)?);
            cursor = width_end;
        }

        let mut precision = None;
        if bytes.get(cursor) == Some(&b'.') {
            let precision_end = digits_end(bytes, cursor + 1);
            if precision_end == cursor + 1 {
                return Err(unknown_after_percent(template, start));
            }
            precision = Some(number(template, start, cursor + 1, precision_end)?);
            cursor = precision_end;
        }

        let symbol = match template[cursor..].chars().next() {
            Some(symbol) if symbol.is_ascii_alphabetic() || symbol == '%' => symbol,
            _ => return Err(unknown_after_percent(template, start)),
        };
        let (conversion, upper) = match symbol {
            'b' => (Conversion::Boolean, false),
            'B' => (Conversion::Boolean, true),
            's' => (Conversion::String, false),
            'S' => (Conversion::String, true),
            'c' => (Conversion::Char, false),
            'C' => (Conversion::Char, true),
            'd' => (Conversion::Decimal, false),
            'o' => (Conversion::Octal, false),
            'x' => (Conversion::Hex, false),
            'X' => (Conversion::Hex, true),
            'e' => (Conversion::Scientific, false),
            'E' => (Conversion::Scientific, true),
            'f' => (Conversion::Fixed, false),
            'g' => (Conversion::General, false),
            'G' => (Conversion::General, true),
            'n' => (Conversion::LineSeparator, false),
            '%' => (Conversion::Percent, false),
            other => return Err(FormatError::UnknownConversion(other.to_string())),
        };
        let end = cursor + symbol.len_utf8();

        let specifier = Specifier {
            text: template[start..end].to_string(),
            index,
            flags,
            width,
            precision,
            conversion,
            upper,
            symbol,
        };
        specifier.validate()?;
        Ok(specifier)
    }

    fn validate(&self) -> Result<(), FormatError> {
        let flags = self.flags;
        match self.conversion {
            Conversion::Percent => {
                self.forbid_precision()?;
                if !flags.except(Flags::LEFT).is_empty() {
                    return Err(FormatError::IllegalFlags(flags.to_string()));
                }
                if self.index == Index::Previous {
                    return Err(FormatError::IllegalFlags("<".to_string()));
                }
                self.require_width()
            }
            Conversion::LineSeparator => {
                if let Some(width) = self.width {
                    return Err(FormatError::IllegalWidth(width));
                }
                self.forbid_precision()?;
                if !flags.is_empty() {
                    return Err(FormatError::IllegalFlags(flags.to_string()));
                }
                if self.index == Index::Previous {
                    return Err(FormatError::IllegalFlags("<".to_string()));
                }
                Ok(())
            }
            Conversion::Boolean | Conversion::String => {
                self.reject(flags.except(Flags::LEFT))?;
                self.require_width()
            }
            Conversion::Char => {
                self.forbid_precision()?;
                self.reject(flags.except(Flags::LEFT))?;
                self.require_width()
            }
            Conversion::Decimal | Conversion::Octal | Conversion::Hex => {
                self.forbid_precision()?;
                self.check_numeric()?;
                let bad = if self.conversion == Conversion::Decimal {
                    Flags {
                        alternate: true,
                        ..Flags::default()
                    }
                } else {
                    Flags {
                        plus: true,
                        space: true,
                        group: true,
                        parentheses: true,
                        ..Flags::default()
                    }
                };
                self.reject(flags.intersect(bad))
            }
            Conversion::Scientific | Conversion::Fixed | Conversion::General => {
                self.check_numeric()?;
                let bad = match self.conversion {
                    Conversion::Scientific => Flags {
                        group: true,
                        ..Flags::default()
                    },
                    Conversion::General => Flags {
                        alternate: true,
                        ..Flags::default()
                    },
                    _ => Flags::default(),
                };
                self.reject(flags.intersect(bad))
            }
        }
    }

    fn check_numeric(&self) -> Result<(), FormatError> {
        let flags = self.flags;
        if (flags.plus && flags.space) || (flags.left && flags.zero_pad) {
            return Err(FormatError::IllegalFlags(flags.to_string()));
        }
        self.require_width()
    }

    fn require_width(&self) -> Result<(), FormatError> {
        if self.width.is_none() && (self.flags.left || self.flags.zero_pad) {
            return Err(FormatError::MissingWidth(self.text.clone()));
        }
        Ok(())
    }

    fn forbid_precision(&self) -> Result<(), FormatError> {
        match self.precision {
            Some(precision) => Err(FormatError::IllegalPrecision(precision)),
            None => Ok(()),
        }
    }

    fn reject(&self, bad: Flags) -> Result<(), FormatError> {
        if bad.is_empty() {
            return Ok(());
        }
        Err(FormatError::FlagsMismatch {
            flags: bad.to_string(),
            conversion: self.symbol,
        })
    }
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    from + bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number(template: &str, start: usize, from: usize, to: usize) -> Result<usize, FormatError> {
    template[from..to]
        .parse()
        .map_err(|_| FormatError::NumberOverflow(template[start..to].to_string()))
}

// A specifier that does not even parse is reported by the character
// right after its `%`.
fn unknown_after_percent(template: &str, start: usize) -> FormatError {
    let symbol = template[start + 1..].chars().next().unwrap_or('%');
    FormatError::UnknownConversion(symbol.to_string())
}

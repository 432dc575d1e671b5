/// Decimal digits of a finite float magnitude.
///
/// Starts from the shortest digit string that round-trips and rounds it
/// half-up, so `0.125` at two places is `0.13` rather than the binary
/// neighbour's `0.12`. Value is `d0.d1d2... * 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    pub fn from_f64(value: f64) -> Self {
        let magnitude = value.abs();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Self::zero();
        }
        let scientific = format!("{magnitude:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let mut decimal = Self {
            digits: mantissa
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|digit| digit - b'0')
                .collect(),
            exponent: exponent.parse().unwrap_or(0),
        };
        decimal.trim();
        decimal
    }

    fn zero() -> Self {
        Self {
            digits: Vec::new(),
            exponent: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Rounds to `places` digits after the decimal point.
    pub fn round_fixed(&mut self, places: i32) {
        self.round_to(self.exponent.saturating_add(1).saturating_add(places));
    }

    /// Rounds to `count` significant digits.
    pub fn round_significant(&mut self, count: i32) {
        self.round_to(count);
    }

    fn round_to(&mut self, keep: i32) {
        let Ok(keep) = usize::try_from(keep) else {
            *self = Self::zero();
            return;
        };
        if keep >= self.digits.len() {
            return;
        }
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut position = keep;
            loop {
                if position == 0 {
                    self.digits.insert(0, 1);
                    self.exponent += 1;
                    break;
                }
                position -= 1;
                if self.digits[position] == 9 {
                    self.digits[position] = 0;
                } else {
                    self.digits[position] += 1;
                    break;
                }
            }
        }
        self.trim();
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.exponent = 0;
        }
    }

    fn digit(&self, power: i32) -> char {
        let digit = usize::try_from(self.exponent - power)
            .ok()
            .and_then(|index| self.digits.get(index).copied())
            .unwrap_or(0);
        char::from(b'0' + digit)
    }

    /// `123.45`-style text with exactly `places` fraction digits.
    pub fn fixed(&self, places: i32, group: bool, force_point: bool) -> String {
        let mut integer = String::new();
        for power in (0..=self.exponent.max(0)).rev() {
            integer.push(self.digit(power));
        }
        let mut text = if group {
            group_thousands(&integer)
        } else {
            integer
        };
        if places > 0 || force_point {
            text.push('.');
        }
        for power in 1..=places {
            text.push(self.digit(-power));
        }
        text
    }

    /// `1.2345e+02`-style text with exactly `places` mantissa fraction digits.
    pub fn scientific(&self, places: i32, force_point: bool) -> String {
        let mut text = String::new();
        text.push(self.digit(self.exponent));
        if places > 0 || force_point {
            text.push('.');
        }
        for offset in 1..=places {
            text.push(self.digit(self.exponent - offset));
        }
        let sign = if self.exponent < 0 { '-' } else { '+' };
        text.push_str(&format!("e{sign}{:02}", self.exponent.unsigned_abs()));
        text
    }
}

/// Inserts `,` between every group of three integer digits.
pub(crate) fn group_thousands(digits: &str) -> String {
    let count = digits.len();
    let mut grouped = String::with_capacity(count + count / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (count - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

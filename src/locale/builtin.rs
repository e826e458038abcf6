//! Built-in culture data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::locale::LocaleProvider;
use crate::numeric;

/// A plain-data culture implementing [`LocaleProvider`].
///
/// Date and time values are parsed from RFC 3339, the common
/// `YYYY-MM-DD[ HH:MM:SS]` layouts, or integer Unix timestamps; values
/// that parse as none of these pass through unchanged.
#[derive(Debug, Clone)]
pub struct Culture {
    pub decimal_separator: char,
    pub group_separator: char,
    pub currency_symbol: &'static str,
    pub currency_decimals: usize,
    pub date_format: &'static str,
    pub time_format: &'static str,
    pub datetime_format: &'static str,
}

impl Default for Culture {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Culture {
    /// US English culture.
    pub fn en_us() -> Self {
        Culture {
            decimal_separator: '.',
            group_separator: ',',
            currency_symbol: "$",
            currency_decimals: 2,
            date_format: "%m/%d/%Y",
            time_format: "%I:%M %p",
            datetime_format: "%m/%d/%Y %I:%M %p",
        }
    }

    /// Format the absolute value with grouped integer digits and the
    /// culture's separators.
    fn grouped_abs(&self, value: f64, decimals: usize) -> String {
        let formatted = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (formatted.as_str(), None),
        };

        let digits = int_part.len();
        let mut out = String::with_capacity(formatted.len() + digits / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    fn grouped(&self, value: f64, decimals: usize) -> String {
        if value < 0.0 {
            format!("-{}", self.grouped_abs(value, decimals))
        } else {
            self.grouped_abs(value, decimals)
        }
    }

    fn render_timestamp(&self, value: &str, format: &str) -> String {
        match parse_timestamp(value) {
            Some(timestamp) => timestamp.format(format).to_string(),
            None => value.to_string(),
        }
    }
}

impl LocaleProvider for Culture {
    fn format_date(&self, value: &str) -> String {
        self.render_timestamp(value, self.date_format)
    }

    fn format_time(&self, value: &str) -> String {
        self.render_timestamp(value, self.time_format)
    }

    fn format_date_time(&self, value: &str) -> String {
        self.render_timestamp(value, self.datetime_format)
    }

    fn format_currency(&self, value: &str) -> String {
        let n = numeric::float_value(value);
        let amount = format!(
            "{}{}",
            self.currency_symbol,
            self.grouped_abs(n, self.currency_decimals)
        );
        if n < 0.0 {
            format!("-{amount}")
        } else {
            amount
        }
    }

    fn format_integer(&self, value: &str) -> String {
        self.grouped(numeric::float_value(value).round(), 0)
    }

    fn format_number(&self, value: &str, precision: usize) -> String {
        self.grouped(numeric::float_value(value), precision)
    }
}

/// Parse a raw cell value as a point in time.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .map(|dt| dt.naive_utc())
}

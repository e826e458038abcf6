//! printf-style patterns for generic format kinds.
//!
//! A format name that matches no known kind is treated as a pattern and
//! applied to the cell value, e.g. `"%s pts"` or `"%05d"`. The supported
//! subset is `%%` plus directives of the form
//! `%[flags][width][.precision]conversion` with flags `-`, `0`, `+` and
//! conversions `s`, `d`/`i`, `u`, `f`/`F`, `x`, `X`, `o`, `b`. A cell
//! carries exactly one value, so every value directive renders that same
//! value.

use crate::error::PatternError;
use crate::numeric;

/// A parsed printf-style pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Directive(Directive),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Directive {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Str,
    Int,
    Unsigned,
    Float,
    HexLower,
    HexUpper,
    Octal,
    Binary,
}

impl Pattern {
    /// Parse a pattern, rejecting malformed directives.
    pub fn parse(source: &str) -> Result<Pattern, PatternError> {
        let chars: Vec<(usize, char)> = source.char_indices().collect();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if ch != '%' {
                literal.push(ch);
                i += 1;
                continue;
            }

            i += 1;
            if i >= chars.len() {
                return Err(PatternError::UnterminatedDirective { position: pos });
            }
            if chars[i].1 == '%' {
                literal.push('%');
                i += 1;
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            let mut left_align = false;
            let mut zero_pad = false;
            let mut plus_sign = false;
            while i < chars.len() {
                match chars[i].1 {
                    '-' => left_align = true,
                    '0' => zero_pad = true,
                    '+' => plus_sign = true,
                    _ => break,
                }
                i += 1;
            }

            let mut width = None;
            while i < chars.len() && chars[i].1.is_ascii_digit() {
                let digit = chars[i].1 as usize - '0' as usize;
                width = Some(width.unwrap_or(0) * 10 + digit);
                i += 1;
            }

            let mut precision = None;
            if i < chars.len() && chars[i].1 == '.' {
                i += 1;
                let mut p = 0;
                while i < chars.len() && chars[i].1.is_ascii_digit() {
                    p = p * 10 + (chars[i].1 as usize - '0' as usize);
                    i += 1;
                }
                precision = Some(p);
            }

            if i >= chars.len() {
                return Err(PatternError::UnterminatedDirective { position: pos });
            }
            let (conv_pos, conv_ch) = chars[i];
            let conversion = match conv_ch {
                's' => Conversion::Str,
                'd' | 'i' => Conversion::Int,
                'u' => Conversion::Unsigned,
                'f' | 'F' => Conversion::Float,
                'x' => Conversion::HexLower,
                'X' => Conversion::HexUpper,
                'o' => Conversion::Octal,
                'b' => Conversion::Binary,
                found => {
                    return Err(PatternError::UnknownConversion {
                        position: conv_pos,
                        found,
                    })
                }
            };
            i += 1;

            segments.push(Segment::Directive(Directive {
                left_align,
                zero_pad,
                plus_sign,
                width,
                precision,
                conversion,
            }));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Pattern {
            source: source.to_string(),
            segments,
        })
    }

    /// Parse a pattern, falling back to a single literal segment when the
    /// source is malformed. The formatting paths use this form so that a
    /// bad pattern degrades instead of failing.
    pub fn parse_lossy(source: &str) -> Pattern {
        Pattern::parse(source).unwrap_or_else(|_| Pattern {
            source: source.to_string(),
            segments: vec![Segment::Literal(source.to_string())],
        })
    }

    /// The pattern source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the pattern against a single value.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Directive(directive) => out.push_str(&directive.render(value)),
            }
        }
        out
    }
}

impl Directive {
    fn render(&self, value: &str) -> String {
        match self.conversion {
            Conversion::Str => {
                let mut s = value.to_string();
                if let Some(p) = self.precision {
                    s = s.chars().take(p).collect();
                }
                self.pad(s, false)
            }
            Conversion::Int => {
                let n = numeric::int_value(value);
                let mut s = n.to_string();
                if self.plus_sign && n >= 0 {
                    s.insert(0, '+');
                }
                self.pad(s, true)
            }
            Conversion::Unsigned => {
                let n = numeric::int_value(value) as u64;
                self.pad(n.to_string(), true)
            }
            Conversion::Float => {
                let n = numeric::float_value(value);
                let mut s = format!("{:.*}", self.precision.unwrap_or(6), n);
                if self.plus_sign && n >= 0.0 {
                    s.insert(0, '+');
                }
                self.pad(s, true)
            }
            Conversion::HexLower => {
                self.pad(format!("{:x}", numeric::int_value(value) as u64), true)
            }
            Conversion::HexUpper => {
                self.pad(format!("{:X}", numeric::int_value(value) as u64), true)
            }
            Conversion::Octal => self.pad(format!("{:o}", numeric::int_value(value) as u64), true),
            Conversion::Binary => self.pad(format!("{:b}", numeric::int_value(value) as u64), true),
        }
    }

    fn pad(&self, s: String, is_numeric: bool) -> String {
        let Some(width) = self.width else {
            return s;
        };
        let len = s.chars().count();
        if len >= width {
            return s;
        }
        let fill = width - len;
        if self.left_align {
            format!("{s}{}", " ".repeat(fill))
        } else if self.zero_pad && is_numeric {
            // Zeros are inserted between the sign and the digits.
            let (sign, digits) = if let Some(rest) = s.strip_prefix('-') {
                ("-", rest)
            } else if let Some(rest) = s.strip_prefix('+') {
                ("+", rest)
            } else {
                ("", s.as_str())
            };
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{s}", " ".repeat(fill))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_only() {
        let p = Pattern::parse("currency").unwrap();
        assert_eq!(p.render("42"), "currency");
    }

    #[test]
    fn test_percent_escape() {
        let p = Pattern::parse("100%%").unwrap();
        assert_eq!(p.render(""), "100%");
    }

    #[test]
    fn test_string_directive() {
        let p = Pattern::parse("%s pts").unwrap();
        assert_eq!(p.render("42"), "42 pts");
    }

    #[test]
    fn test_zero_padded_int() {
        let p = Pattern::parse("%05d").unwrap();
        assert_eq!(p.render("42"), "00042");
        assert_eq!(p.render("-42"), "-0042");
    }

    #[test]
    fn test_float_precision() {
        let p = Pattern::parse("%.2f").unwrap();
        assert_eq!(p.render("3.14159"), "3.14");
        assert_eq!(p.render("abc"), "0.00");
    }

    #[test]
    fn test_left_align() {
        let p = Pattern::parse("[%-4d]").unwrap();
        assert_eq!(p.render("7"), "[7   ]");
    }

    #[test]
    fn test_hex() {
        let p = Pattern::parse("%x").unwrap();
        assert_eq!(p.render("255"), "ff");
        let p = Pattern::parse("%X").unwrap();
        assert_eq!(p.render("255"), "FF");
    }

    #[test]
    fn test_unknown_conversion() {
        let err = Pattern::parse("%q").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnknownConversion {
                position: 1,
                found: 'q'
            }
        );
    }

    #[test]
    fn test_unterminated_directive() {
        let err = Pattern::parse("total: %").unwrap_err();
        assert_eq!(err, PatternError::UnterminatedDirective { position: 7 });
        let err = Pattern::parse("%05").unwrap_err();
        assert_eq!(err, PatternError::UnterminatedDirective { position: 0 });
    }

    #[test]
    fn test_parse_lossy_falls_back_to_literal() {
        let p = Pattern::parse_lossy("%q");
        assert_eq!(p.render("42"), "%q");
        assert_eq!(p.source(), "%q");
    }
}

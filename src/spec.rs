//! Format specifiers and their normalization.

/// Default decimal places for float formats.
pub const DEFAULT_FLOAT_PRECISION: usize = 2;

/// A format kind, resolved once from a case-insensitive name.
///
/// Names that match no known kind become [`FormatKind::Generic`] and are
/// treated as printf-style patterns at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatKind {
    /// Seconds rendered as `h:mm:ss` / `m:ss` (`duration`)
    Duration,
    /// Content wrapped in `<pre>` tags (`fixed`, `pre`, `preformatted`)
    Preformatted,
    /// Locale date (`date`)
    Date,
    /// Locale time (`time`)
    Time,
    /// Locale date and time (`datetime`)
    DateTime,
    /// Locale currency (`currency`)
    Currency,
    /// Locale integer (`int`, `integer`)
    Integer,
    /// Locale integer with a `%` suffix (`percent`)
    Percent,
    /// Locale number with decimal places (`float`, `double`, `f2`, `d2`)
    Float,
    /// Unrecognized name, kept lower-cased as a printf-style pattern
    Generic(String),
}

impl FormatKind {
    /// Resolve a kind from a case-insensitive format name.
    pub fn parse(name: &str) -> FormatKind {
        let name = name.to_lowercase();
        match name.as_str() {
            "duration" => FormatKind::Duration,
            "fixed" | "pre" | "preformatted" => FormatKind::Preformatted,
            "date" => FormatKind::Date,
            "time" => FormatKind::Time,
            "datetime" => FormatKind::DateTime,
            "currency" => FormatKind::Currency,
            "int" | "integer" => FormatKind::Integer,
            "percent" => FormatKind::Percent,
            "f2" | "d2" | "float" | "double" => FormatKind::Float,
            _ => FormatKind::Generic(name),
        }
    }

    /// The canonical name of this kind. For [`FormatKind::Generic`] this is
    /// the pattern source; for locale kinds it doubles as the degenerate
    /// fallback pattern used when no locale provider is present.
    pub fn name(&self) -> &str {
        match self {
            FormatKind::Duration => "duration",
            FormatKind::Preformatted => "pre",
            FormatKind::Date => "date",
            FormatKind::Time => "time",
            FormatKind::DateTime => "datetime",
            FormatKind::Currency => "currency",
            FormatKind::Integer => "integer",
            FormatKind::Percent => "percent",
            FormatKind::Float => "double",
            FormatKind::Generic(pattern) => pattern,
        }
    }
}

/// A normalized format specifier: a kind, optionally with decimal places.
///
/// The precision pair form is only consumed by [`FormatKind::Float`]; for
/// other kinds a given precision is carried but ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    Named(FormatKind),
    NamedWithPrecision(FormatKind, usize),
}

impl FormatSpec {
    /// Normalize a bare format name. The float aliases `f2`, `d2`, `float`
    /// and `double` all resolve to float with two decimal places.
    pub fn new(format: &str) -> FormatSpec {
        match FormatKind::parse(format) {
            FormatKind::Float => {
                FormatSpec::NamedWithPrecision(FormatKind::Float, DEFAULT_FLOAT_PRECISION)
            }
            kind => FormatSpec::Named(kind),
        }
    }

    /// Normalize a name with an explicit precision, preserved as given.
    pub fn with_precision(format: &str, precision: usize) -> FormatSpec {
        FormatSpec::NamedWithPrecision(FormatKind::parse(format), precision)
    }

    pub fn kind(&self) -> &FormatKind {
        match self {
            FormatSpec::Named(kind) => kind,
            FormatSpec::NamedWithPrecision(kind, _) => kind,
        }
    }

    pub fn precision(&self) -> Option<usize> {
        match self {
            FormatSpec::Named(_) => None,
            FormatSpec::NamedWithPrecision(_, precision) => Some(*precision),
        }
    }
}

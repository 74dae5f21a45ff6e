use std::fmt;
use std::str::FromStr;

use crate::util::{csv::split_csv_str, parse_token_params};

/// A quality value, as specified in [RFC7231](https://tools.ietf.org/html/rfc7231#section-5.3.1).
///
/// Quality values are decimal numbers between 0 and 1 (inclusive) with up
/// to 3 fractional digits of precision, stored as thousandths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

static_str_error! {
    pub struct InvalidQuality = "invalid quality value";
}

impl Quality {
    /// The highest quality, `q=1`, which is also the default.
    #[must_use]
    pub const fn one() -> Self {
        Self(1000)
    }

    /// The lowest quality, `q=0`, meaning "not acceptable".
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create a quality from thousandths, clamped to `[0, 1000]`.
    #[must_use]
    pub const fn new_clamped(value: u16) -> Self {
        if value > 1000 { Self(1000) } else { Self(value) }
    }

    /// The quality in thousandths.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::one()
    }
}

impl From<u16> for Quality {
    fn from(value: u16) -> Self {
        Self::new_clamped(value)
    }
}

impl FromStr for Quality {
    type Err = InvalidQuality;

    /// Parses a floating point number, clamping it into `[0, 1]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let q: f64 = s.trim().parse().map_err(|err| {
            tracing::trace!("invalid quality value '{s}': {err}");
            InvalidQuality
        })?;
        if q.is_nan() {
            return Err(InvalidQuality);
        }
        Ok(Self((q.clamp(0.0, 1.0) * 1000.0).round() as u16))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1000 => f.write_str("1"),
            0 => f.write_str("0"),
            mut x => {
                f.write_str("0.")?;
                let mut digits = 3;
                while x % 10 == 0 {
                    x /= 10;
                    digits -= 1;
                }
                write!(f, "{x:0digits$}")
            }
        }
    }
}

/// Represents an item with a quality value as defined in
/// [RFC7231](https://tools.ietf.org/html/rfc7231#section-5.3.1).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct QualityValue<T> {
    /// The actual contents of the field.
    pub value: T,
    /// The quality (client or server preference) for the value.
    pub quality: Quality,
}

impl<T> QualityValue<T> {
    /// Creates a new `QualityValue` from an item and a quality.
    pub const fn new(value: T, quality: Quality) -> Self {
        Self { value, quality }
    }

    /// Creates a new `QualityValue` from an item value alone.
    pub const fn new_value(value: T) -> Self {
        Self {
            value,
            quality: Quality::one(),
        }
    }
}

impl<T> From<T> for QualityValue<T> {
    fn from(value: T) -> Self {
        Self::new_value(value)
    }
}

impl<T: fmt::Display> fmt::Display for QualityValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if self.quality != Quality::one() {
            write!(f, ";q={}", self.quality)?;
        }
        Ok(())
    }
}

impl<T: FromStr> FromStr for QualityValue<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, params) = parse_token_params(s, ';');
        let quality = params
            .get("q")
            .and_then(|q| q.parse().ok())
            .unwrap_or_default();
        token.parse().map(|value| Self::new(value, quality))
    }
}

/// Parse a `token[;q=value], ...` negotiation list.
///
/// A missing or unparsable quality defaults to `1`. Entries with quality `0`
/// are removed and the remaining entries are stably sorted by descending
/// quality, so that alternatives of equal quality keep the order in which
/// they were listed. Entries whose token fails to parse are dropped one by
/// one.
///
/// ```
/// use headwise::Encoding;
/// use headwise::specifier::parse_quality_list;
///
/// let values = ["br;q=1.0, gzip;q=0.8, *;q=0.1", "deflate;q=0"];
/// let list = parse_quality_list::<_, Encoding>(&mut values.iter().copied());
/// let encodings: Vec<_> = list.into_iter().map(|qv| qv.value).collect();
/// assert_eq!(encodings, [Encoding::BR, Encoding::GZIP, Encoding::ANY]);
/// ```
pub fn parse_quality_list<'i, I, T>(values: &mut I) -> Vec<QualityValue<T>>
where
    I: Iterator<Item = &'i str>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let mut entries: Vec<(Quality, &str)> = values
        .flat_map(split_csv_str)
        .map(|element| {
            let (token, params) = parse_token_params(element, ';');
            let quality = params
                .get("q")
                .and_then(|q| q.parse::<Quality>().ok())
                .unwrap_or_default();
            (quality, token)
        })
        .filter(|(quality, _)| *quality != Quality::zero())
        .collect();

    // sort_by is stable
    entries.sort_by(|(a, _), (b, _)| b.cmp(a));

    entries
        .into_iter()
        .filter_map(|(quality, token)| match token.parse() {
            Ok(value) => Some(QualityValue::new(value, quality)),
            Err(err) => {
                tracing::trace!("dropping invalid negotiation list element '{token}': {err}");
                None
            }
        })
        .collect()
}

use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::specifier::RangeUnit;
use crate::util::csv;

/// `Range` header, defined in [RFC7233](https://tools.ietf.org/html/rfc7233#section-3.1)
///
/// The "Range" header field on a GET request modifies the method
/// semantics to request transfer of only one or more subranges of the
/// selected representation data, rather than the entire selected
/// representation data.
///
/// # ABNF
///
/// ```text
/// Range = byte-ranges-specifier / other-ranges-specifier
/// other-ranges-specifier = other-range-unit "=" other-range-set
/// other-range-set = 1*VCHAR
///
/// bytes-unit = "bytes"
///
/// byte-ranges-specifier = bytes-unit "=" byte-range-set
/// byte-range-set = 1#(byte-range-spec / suffix-byte-range-spec)
/// byte-range-spec = first-byte-pos "-" [last-byte-pos]
/// first-byte-pos = 1*DIGIT
/// last-byte-pos = 1*DIGIT
/// ```
///
/// # Example values
///
/// * `bytes=1000-`
/// * `bytes=-2000`
/// * `bytes=0-1,30-40`
/// * `bytes=0-10,20-90,-100`
///
/// # Resolution
///
/// Each [`RangeSpec`] resolves into a half-open interval `[from, to)`.
/// Negative bounds count from the end of the representation, with a
/// resolved upper bound of `0` standing for "the end". Overlap, ordering and
/// the amount of ranges are not validated, that policy is left to the caller.
///
/// ```
/// use headwise::{HeaderMapExt, Range};
///
/// let mut headers = http::HeaderMap::new();
/// headers.insert(
///     http::header::RANGE,
///     "bytes=200-1000, -2000-, 19000-, -3, 2000-1000".parse().unwrap(),
/// );
///
/// let range: Range = headers.typed_get().unwrap();
/// assert_eq!(
///     range.intervals().collect::<Vec<_>>(),
///     vec![200..1001, -2000..0, 19000..i64::MAX, -3..-2],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    unit: RangeUnit,
    specs: Vec<RangeSpec>,
}

/// A single range of a `Range` header, before resolution.
///
/// A negative `from` is a suffix range, counted from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSpec {
    /// First position, negative for suffix ranges.
    pub from: i64,
    /// Last position (inclusive), `None` if open-ended.
    pub to: Option<i64>,
}

static_str_error! {
    pub struct InvalidRangeSpec = "invalid range spec";
}

impl RangeSpec {
    /// Create a new range spec.
    #[must_use]
    pub const fn new(from: i64, to: Option<i64>) -> Self {
        Self { from, to }
    }

    /// The `-<len>-` range: the final `len` units of the representation.
    #[must_use]
    pub fn suffix(len: u64) -> Self {
        Self {
            from: i64::try_from(len).map_or(i64::MIN, |len| -len),
            to: None,
        }
    }

    /// Resolve into a half-open interval, `None` if the upper bound
    /// resolves below the lower one.
    #[must_use]
    pub fn resolve(&self) -> Option<ops::Range<i64>> {
        let end = match self.to {
            Some(to) => to.saturating_add(1),
            None if self.from >= 0 => i64::MAX,
            None => 0,
        };
        (end >= self.from).then_some(self.from..end)
    }

    /// Resolve against a representation of `len` units into absolute,
    /// non-empty `[start, end)` positions.
    ///
    /// Negative bounds are offsets from the end and an upper bound of `0`
    /// following a negative lower bound is the end itself. Bounds beyond the
    /// representation are clamped, `None` is returned if nothing remains.
    ///
    /// ```
    /// use headwise::RangeSpec;
    ///
    /// assert_eq!(RangeSpec::new(200, Some(1000)).resolve_for_length(10_000), Some(200..1001));
    /// assert_eq!(RangeSpec::suffix(2000).resolve_for_length(10_000), Some(8000..10_000));
    /// assert_eq!(RangeSpec::new(19_000, None).resolve_for_length(10_000), None);
    /// ```
    #[must_use]
    pub fn resolve_for_length(&self, len: u64) -> Option<ops::Range<u64>> {
        let interval = self.resolve()?;
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let absolute = |bound: i64| {
            if bound < 0 {
                len.saturating_add(bound).max(0)
            } else {
                bound.min(len)
            }
        };
        let start = absolute(interval.start);
        let end = if interval.start < 0 && interval.end == 0 {
            len
        } else {
            absolute(interval.end)
        };
        (start < end).then(|| start.unsigned_abs()..end.unsigned_abs())
    }

    /// The inverse of [`RangeSpec::resolve`].
    #[must_use]
    pub fn from_interval(interval: ops::Range<i64>) -> Self {
        let to = if interval.end == i64::MAX || (interval.start < 0 && interval.end == 0) {
            None
        } else {
            Some(interval.end.saturating_sub(1))
        };
        Self::new(interval.start, to)
    }
}

fn parse_position(s: &str) -> Result<i64, InvalidRangeSpec> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidRangeSpec);
    }
    s.parse().map_err(|_err| InvalidRangeSpec)
}

// a last position may count from the end as well, e.g. the `-2` of `-5--2`
fn parse_signed_position(s: &str) -> Result<i64, InvalidRangeSpec> {
    match s.trim().strip_prefix('-') {
        Some(s) => parse_position(s).map(|n| -n),
        None => parse_position(s),
    }
}

impl FromStr for RangeSpec {
    type Err = InvalidRangeSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // a leading '-' is the sign of a suffix range, not the separator
        let (suffix, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let sign = |n: i64| if suffix { -n } else { n };

        match rest.split_once('-') {
            Some((from, "")) => Ok(Self::new(sign(parse_position(from)?), None)),
            Some((from, to)) => Ok(Self::new(
                sign(parse_position(from)?),
                Some(parse_signed_position(to)?),
            )),
            None if suffix => {
                let from = sign(parse_position(rest)?);
                Ok(Self::new(from, Some(from)))
            }
            None => Err(InvalidRangeSpec),
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            None => write!(f, "{}-", self.from),
            Some(to) if self.from < 0 && to == self.from => write!(f, "{}", self.from),
            Some(to) => write!(f, "{}-{}", self.from, to),
        }
    }
}

impl Range {
    /// Create a `Range` header in the given unit.
    pub fn new(unit: RangeUnit, specs: impl IntoIterator<Item = RangeSpec>) -> Self {
        Self {
            unit,
            specs: specs.into_iter().collect(),
        }
    }

    /// Create a `bytes` range header.
    pub fn bytes(specs: impl IntoIterator<Item = RangeSpec>) -> Self {
        Self::new(RangeUnit::Bytes, specs)
    }

    /// Create a `bytes` range header from resolved intervals.
    pub fn from_intervals(intervals: impl IntoIterator<Item = ops::Range<i64>>) -> Self {
        Self::bytes(intervals.into_iter().map(RangeSpec::from_interval))
    }

    /// The range unit.
    #[must_use]
    pub fn unit(&self) -> &RangeUnit {
        &self.unit
    }

    /// The unresolved range specs.
    #[must_use]
    pub fn specs(&self) -> &[RangeSpec] {
        &self.specs
    }

    /// Iterate over the resolved half-open intervals.
    ///
    /// Specs whose upper bound resolves below the lower one are skipped.
    pub fn intervals(&self) -> impl Iterator<Item = ops::Range<i64>> + '_ {
        self.specs.iter().filter_map(RangeSpec::resolve)
    }
}

impl FromStr for Range {
    type Err = InvalidRangeSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (unit, set) = s.split_once('=').ok_or(InvalidRangeSpec)?;
        let unit: RangeUnit = unit.parse().map_err(|err| {
            tracing::trace!("invalid range header unit: {err}");
            InvalidRangeSpec
        })?;
        let specs = set
            .split(',')
            .map(str::trim)
            .filter(|spec| !spec.is_empty())
            .filter_map(|spec| match spec.parse::<RangeSpec>() {
                Ok(parsed) if parsed.resolve().is_some() => Some(parsed),
                Ok(_) => {
                    tracing::trace!("dropping unsatisfiable range spec '{spec}'");
                    None
                }
                Err(err) => {
                    tracing::trace!("dropping malformed range spec '{spec}': {err}");
                    None
                }
            })
            .collect();
        Ok(Self { unit, specs })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.unit)?;
        csv::fmt_comma_delimited(f, self.specs.iter())
    }
}

impl crate::TypedHeader for Range {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::RANGE
    }
}

impl crate::HeaderDecode for Range {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        crate::util::decode_single(values)
    }
}

impl crate::HeaderEncode for Range {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        if self.specs.is_empty() {
            return;
        }
        values.extend(::std::iter::once(self.to_string()));
    }
}

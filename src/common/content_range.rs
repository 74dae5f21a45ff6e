use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::common::RangeSpec;
use crate::specifier::RangeUnit;

/// Content-Range, described in [RFC7233](https://tools.ietf.org/html/rfc7233#section-4.2)
///
/// # ABNF
///
/// ```text
/// Content-Range       = byte-content-range
///                     / other-content-range
///
/// byte-content-range  = bytes-unit SP
///                       ( byte-range-resp / unsatisfied-range )
///
/// byte-range-resp     = byte-range "/" ( complete-length / "*" )
/// byte-range          = first-byte-pos "-" last-byte-pos
/// unsatisfied-range   = "*/" complete-length
///
/// complete-length     = 1*DIGIT
///
/// other-content-range = other-range-unit SP other-range-resp
/// other-range-resp    = *CHAR
/// ```
///
/// The range is kept as a resolved half-open interval, the same way
/// [`Range`](crate::Range) resolves its specs, and is written the way
/// [`RangeSpec`] writes it. An unsatisfied range always carries the
/// complete length, `*/*` can neither be parsed nor constructed.
///
/// # Example
///
/// ```
/// use headwise::ContentRange;
///
/// let cr = ContentRange::bytes(0..500, Some(1234));
/// assert_eq!(cr.to_string(), "bytes 0-499/1234");
///
/// let cr = ContentRange::unsatisfied_bytes(1234);
/// assert_eq!(cr.to_string(), "bytes */1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRange {
    unit: RangeUnit,
    range: Option<ops::Range<i64>>,
    complete_length: Option<u64>,
}

static_str_error! {
    pub struct InvalidContentRange = "invalid content-range";
}

impl ContentRange {
    /// Construct a new `Content-Range: unit first-last/complete_length` header.
    #[must_use]
    pub fn new(unit: RangeUnit, range: ops::Range<i64>, complete_length: Option<u64>) -> Self {
        Self {
            unit,
            range: Some(range),
            complete_length,
        }
    }

    /// Construct a new `Content-Range: unit */complete_length` header.
    #[must_use]
    pub fn unsatisfied(unit: RangeUnit, complete_length: u64) -> Self {
        Self {
            unit,
            range: None,
            complete_length: Some(complete_length),
        }
    }

    /// Construct a new `Content-Range: bytes first-last/complete_length` header.
    #[must_use]
    pub fn bytes(range: ops::Range<i64>, complete_length: Option<u64>) -> Self {
        Self::new(RangeUnit::Bytes, range, complete_length)
    }

    /// Create a new `Content-Range: bytes */complete_length` header.
    #[must_use]
    pub fn unsatisfied_bytes(complete_length: u64) -> Self {
        Self::unsatisfied(RangeUnit::Bytes, complete_length)
    }

    /// Get the unit of the range.
    #[must_use]
    pub fn unit(&self) -> &RangeUnit {
        &self.unit
    }

    /// Get the half-open interval for the range, `None` for unsatisfied ranges.
    #[must_use]
    pub fn range(&self) -> Option<ops::Range<i64>> {
        self.range.clone()
    }

    /// Get the complete length, `None` if unknown (`*`).
    #[must_use]
    pub fn complete_length(&self) -> Option<u64> {
        self.complete_length
    }
}

impl FromStr for ContentRange {
    type Err = InvalidContentRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (unit, resp) = s.trim().split_once(' ').ok_or(InvalidContentRange)?;
        let unit: RangeUnit = unit.parse().map_err(|_err| InvalidContentRange)?;
        let (range, complete_length) = resp.trim().split_once('/').ok_or(InvalidContentRange)?;

        let complete_length = match complete_length.trim() {
            "*" => None,
            s if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                Some(s.parse().map_err(|_err| InvalidContentRange)?)
            }
            _ => return Err(InvalidContentRange),
        };

        let range = match range.trim() {
            // an unknown length makes an unsatisfied range meaningless
            "*" if complete_length.is_none() => return Err(InvalidContentRange),
            "*" => None,
            range => {
                let spec: RangeSpec = range.parse().map_err(|_err| InvalidContentRange)?;
                Some(spec.resolve().ok_or(InvalidContentRange)?)
            }
        };

        Ok(Self {
            unit,
            range,
            complete_length,
        })
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.unit)?;
        match &self.range {
            Some(range) => write!(f, "{}", RangeSpec::from_interval(range.clone()))?,
            None => f.write_str("*")?,
        }
        match self.complete_length {
            Some(len) => write!(f, "/{len}"),
            None => f.write_str("/*"),
        }
    }
}

impl crate::TypedHeader for ContentRange {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::CONTENT_RANGE
    }
}

impl crate::HeaderDecode for ContentRange {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        crate::util::decode_single(values)
    }
}

impl crate::HeaderEncode for ContentRange {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        values.extend(::std::iter::once(self.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_bytes() {
        let cr = ContentRange::bytes(0..235, Some(2000));
        assert_eq!(test_encode(cr), ["bytes 0-234/2000"]);
    }

    #[test]
    fn test_bytes_unknown_len() {
        let cr = ContentRange::bytes(0..235, None);
        assert_eq!(test_encode(cr), ["bytes 0-234/*"]);
    }

    #[test]
    fn test_unsatisfied() {
        assert_eq!(
            test_encode(ContentRange::unsatisfied_bytes(800)),
            ["bytes */800"]
        );
    }

    #[test]
    fn test_open_ended() {
        assert_eq!(
            ContentRange::bytes(100..i64::MAX, Some(1000)).to_string(),
            "bytes 100-/1000"
        );
        assert_eq!(
            ContentRange::bytes(-100..0, None).to_string(),
            "bytes -100-/*"
        );
    }

    #[test]
    fn decode() {
        let cr: ContentRange = test_decode(&["bytes 21010-47021/47022"]).unwrap();
        assert_eq!(cr.unit(), &RangeUnit::Bytes);
        assert_eq!(cr.range(), Some(21010..47022));
        assert_eq!(cr.complete_length(), Some(47022));

        let cr: ContentRange = test_decode(&["bytes */47022"]).unwrap();
        assert_eq!(cr.range(), None);
        assert_eq!(cr.complete_length(), Some(47022));

        let cr: ContentRange = test_decode(&["bytes 0-9/*"]).unwrap();
        assert_eq!(cr.range(), Some(0..10));
        assert_eq!(cr.complete_length(), None);
    }

    #[test]
    fn suffix_ranges() {
        assert_eq!(ContentRange::bytes(-3..-2, None).to_string(), "bytes -3/*");
        assert_eq!(
            ContentRange::bytes(-5..-1, Some(10)).to_string(),
            "bytes -5--2/10"
        );

        let cr: ContentRange = test_decode(&["bytes -5--2/10"]).unwrap();
        assert_eq!(cr.range(), Some(-5..-1));
    }

    #[test]
    fn unsatisfied_requires_length() {
        let cr = ContentRange::unsatisfied(RangeUnit::Bytes, 0);
        assert_eq!(test_encode(cr.clone()), ["bytes */0"]);
        assert_eq!(test_decode(&["bytes */0"]), Some(cr));
        assert_eq!(test_decode::<ContentRange>(&["bytes */*"]), None);
    }

    #[test]
    fn decode_invalid() {
        for raw in [
            "bytes */*",
            "bytes 10-5/100",
            "bytes 0-9",
            "0-9/100",
            "bytes 0-9/abc",
            "bytes a-9/100",
            "",
        ] {
            assert_eq!(test_decode::<ContentRange>(&[raw]), None, "{raw:?}");
        }
    }

    #[test]
    fn roundtrip() {
        for cr in [
            ContentRange::bytes(0..500, Some(1234)),
            ContentRange::bytes(500..i64::MAX, None),
            ContentRange::unsatisfied_bytes(42),
            ContentRange::new(RangeUnit::Other("items".to_owned()), 0..1, Some(1)),
            ContentRange::unsatisfied(RangeUnit::Other("items".to_owned()), 7),
            ContentRange::bytes(-3..-2, None),
            ContentRange::bytes(-5..-1, Some(10)),
            ContentRange::bytes(-100..0, Some(10)),
        ] {
            assert_eq!(cr.to_string().parse(), Ok(cr));
        }
    }
}

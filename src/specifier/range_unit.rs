use std::fmt;
use std::str::FromStr;

use crate::util::is_token;

/// A range unit, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-14.1).
///
/// Unit list: <https://www.iana.org/assignments/http-parameters/http-parameters.xhtml#range-units>.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RangeUnit {
    /// `bytes`
    #[default]
    Bytes,
    /// `none`, only meaningful in `Accept-Ranges`
    None,
    /// Any other (lower-cased) unit token.
    Other(String),
}

static_str_error! {
    pub struct InvalidRangeUnit = "invalid range unit";
}

impl FromStr for RangeUnit {
    type Err = InvalidRangeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("bytes") {
            Ok(Self::Bytes)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else if is_token(s) {
            Ok(Self::Other(s.to_ascii_lowercase()))
        } else {
            tracing::trace!("invalid range unit: '{s}'");
            Err(InvalidRangeUnit)
        }
    }
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bytes => "bytes",
            Self::None => "none",
            Self::Other(unit) => unit,
        })
    }
}

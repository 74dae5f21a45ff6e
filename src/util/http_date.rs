use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jiff::tz::TimeZone;

/// A timestamp with HTTP formatting and parsing.
///
/// Parsing accepts the grammars found in the wild, tried in this order:
///
/// 1. RFC 1123, the preferred format: `Sun, 06 Nov 1994 08:49:37 GMT`
/// 2. RFC 850, obsolete: `Sunday, 06-Nov-94 08:49:37 GMT`
/// 3. ISO 8601: `1994-11-06T08:49:37Z`, without an offset UTC is assumed
/// 4. ANSI C `asctime()`: `Sun Nov  6 08:49:37 1994`
///
/// Formatting is always RFC 1123 in UTC with English names.
///
/// The precision is one second. Timestamps before the unix epoch or after
/// the year 9999 are clamped into that range.
///
/// # Example
///
/// ```
/// use headwise::HttpDate;
///
/// let date: HttpDate = "Sunday, 06-Nov-94 08:49:37 GMT".parse().unwrap();
/// assert_eq!(date.to_string(), "Sun, 06 Nov 1994 08:49:37 GMT");
/// assert_eq!(date, "Sun Nov  6 08:49:37 1994".parse().unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpDate(SystemTime);

/// The grammar an [`HttpDate`] was parsed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `Sun, 06 Nov 1994 08:49:37 GMT`
    Rfc1123,
    /// `Sunday, 06-Nov-94 08:49:37 GMT`
    Rfc850,
    /// `1994-11-06T08:49:37Z`
    Iso8601,
    /// `Sun Nov  6 08:49:37 1994`
    Asctime,
}

static_str_error! {
    pub struct InvalidHttpDate = "invalid HTTP date";
}

/// `9999-12-31T23:59:59Z`, the last instant the RFC 1123 grammar can express.
const MAX_UNIX_SECONDS: u64 = 253_402_300_799;

impl HttpDate {
    /// The unix epoch.
    pub const UNIX_EPOCH: Self = Self(UNIX_EPOCH);

    /// Create a date from seconds since the unix epoch.
    #[must_use]
    pub fn from_unix_seconds(seconds: u64) -> Self {
        Self(UNIX_EPOCH + Duration::from_secs(seconds.min(MAX_UNIX_SECONDS)))
    }

    /// Seconds since the unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> u64 {
        self.0
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }

    /// Parse a date, reporting which grammar matched.
    pub fn parse_with_format(s: &str) -> Result<(Self, DateFormat), InvalidHttpDate> {
        let s = s.trim();
        let comma = s.find(',');

        if comma == Some(3)
            && let Ok(time) = httpdate::parse_http_date(s)
        {
            return Ok((time.into(), DateFormat::Rfc1123));
        }

        if comma.is_some_and(|index| index > 3)
            && let Ok(time) = httpdate::parse_http_date(s)
        {
            return Ok((time.into(), DateFormat::Rfc850));
        }

        if let Some(time) = parse_iso8601(s) {
            return Ok((time.into(), DateFormat::Iso8601));
        }

        if comma.is_none()
            && let Ok(time) = httpdate::parse_http_date(s)
        {
            return Ok((time.into(), DateFormat::Asctime));
        }

        tracing::trace!("failed to parse '{s}' as HTTP date");
        Err(InvalidHttpDate)
    }
}

fn parse_iso8601(s: &str) -> Option<SystemTime> {
    if let Ok(timestamp) = s.parse::<jiff::Timestamp>() {
        return Some(timestamp.into());
    }
    let zoned = if let Ok(datetime) = s.parse::<jiff::civil::DateTime>() {
        datetime.to_zoned(TimeZone::UTC).ok()?
    } else {
        s.parse::<jiff::civil::Date>()
            .ok()?
            .to_zoned(TimeZone::UTC)
            .ok()?
    };
    Some(zoned.timestamp().into())
}

impl From<SystemTime> for HttpDate {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => Self::from_unix_seconds(since_epoch.as_secs()),
            Err(_) => Self::UNIX_EPOCH,
        }
    }
}

impl From<HttpDate> for SystemTime {
    fn from(date: HttpDate) -> Self {
        date.0
    }
}

impl FromStr for HttpDate {
    type Err = InvalidHttpDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_format(s).map(|(date, _)| date)
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&httpdate::fmt_http_date(self.0))
    }
}

derive_serde_via_str!(HttpDate);

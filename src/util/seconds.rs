use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A whole amount of seconds, as used by delta-seconds header values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds(u64);

static_str_error! {
    pub struct InvalidSeconds = "invalid delta-seconds";
}

impl Seconds {
    /// Create a new [`Seconds`] value.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Create from a [`Duration`], truncating sub-second precision.
    #[must_use]
    pub const fn from_duration_truncated(dur: Duration) -> Self {
        Self(dur.as_secs())
    }

    /// The amount of seconds.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for Seconds {
    type Err = InvalidSeconds;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSeconds);
        }
        // delta-seconds too large to represent saturate
        Ok(Self(s.parse().unwrap_or(u64::MAX)))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Seconds> for Duration {
    fn from(secs: Seconds) -> Self {
        Self::from_secs(secs.0)
    }
}

impl From<Duration> for Seconds {
    fn from(dur: Duration) -> Self {
        Self::from_duration_truncated(dur)
    }
}

impl From<u64> for Seconds {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

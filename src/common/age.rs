use std::time::Duration;

use crate::util::Seconds;

/// `Age` header, defined in [RFC7234](https://tools.ietf.org/html/rfc7234#section-5.1)
///
/// The "Age" header field conveys the sender's estimate of the amount of
/// time since the response was generated or successfully validated at
/// the origin server.  Age values are calculated as specified in
/// [Section 4.2.3](https://tools.ietf.org/html/rfc7234#section-4.2.3).
///
/// ## ABNF
///
/// ```text
/// Age = delta-seconds
/// ```
///
/// The Age field-value is a non-negative integer, representing time in
/// seconds (see [Section 1.2.1](https://tools.ietf.org/html/rfc7234#section-1.2.1)).
///
/// # Example
///
/// ```
/// use headwise::Age;
///
/// let len = Age::from_secs(60);
/// assert_eq!(len.as_secs(), 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(Seconds);

derive_header!(Age(Seconds), name: AGE);

impl Age {
    /// Creates a new `Age` header from the specified number of whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Seconds::new(secs))
    }

    /// Returns the number of seconds for this `Age` header.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0.as_u64()
    }
}

impl From<Duration> for Age {
    fn from(dur: Duration) -> Self {
        Self(Seconds::from_duration_truncated(dur))
    }
}

impl From<Age> for Duration {
    fn from(age: Age) -> Self {
        age.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn decode() {
        assert_eq!(test_decode::<Age>(&["15"]), Some(Age::from_secs(15)));
        assert_eq!(test_decode::<Age>(&[" 0 "]), Some(Age::from_secs(0)));
        assert_eq!(test_decode::<Age>(&["-1"]), None);
        assert_eq!(test_decode::<Age>(&["1.5"]), None);
        assert_eq!(test_decode::<Age>(&[]), None);
    }

    #[test]
    fn encode_truncates_subseconds() {
        let age = Age::from(Duration::from_millis(2_999));
        assert_eq!(test_encode(age), ["2"]);
    }
}

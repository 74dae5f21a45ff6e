use std::time::SystemTime;

use crate::util::HttpDate;

/// `Expires` header, defined in [RFC7234](https://tools.ietf.org/html/rfc7234#section-5.3)
///
/// The `Expires` header field gives the date/time after which the
/// response is considered stale.
///
/// The presence of an Expires field does not imply that the original
/// resource will change or cease to exist at, before, or after that
/// time.
///
/// # ABNF
///
/// ```text
/// Expires = HTTP-date
/// ```
///
/// # Example values
///
/// * `Thu, 01 Dec 1994 16:00:00 GMT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Expires(HttpDate);

derive_header!(Expires(HttpDate), name: EXPIRES);

impl From<SystemTime> for Expires {
    fn from(time: SystemTime) -> Self {
        Self(time.into())
    }
}

impl From<Expires> for SystemTime {
    fn from(date: Expires) -> Self {
        date.0.into()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_decode;
    use super::*;

    #[test]
    fn decode_rfc1123() {
        let expires = test_decode::<Expires>(&["Thu, 01 Dec 1994 16:00:00 GMT"]).unwrap();
        assert_eq!(
            SystemTime::from(expires),
            SystemTime::UNIX_EPOCH + Duration::from_secs(786_297_600)
        );
    }

    #[test]
    fn zero_is_not_a_date() {
        assert_eq!(test_decode::<Expires>(&["0"]), None);
    }
}

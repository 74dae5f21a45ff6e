/// `Content-Length` header, defined in
/// [RFC7230](https://tools.ietf.org/html/rfc7230#section-3.3.2)
///
/// When a message does not have a `Transfer-Encoding` header field, a
/// Content-Length header field can provide the anticipated size, as a
/// decimal number of octets, for a potential payload body.  For messages
/// that do include a payload body, the Content-Length field-value
/// provides the framing information necessary for determining where the
/// body (and message) ends.  For messages that do not include a payload
/// body, the Content-Length indicates the size of the selected
/// representation.
///
/// # ABNF
///
/// ```text
/// Content-Length = 1*DIGIT
/// ```
///
/// # Example values
///
/// * `3495`
///
/// # Example
///
/// ```
/// use headwise::ContentLength;
///
/// let len = ContentLength(1_000);
/// assert_eq!(len.to_string(), "1000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentLength(pub u64);

derive_header!(ContentLength(u64), name: CONTENT_LENGTH);

impl std::fmt::Display for ContentLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn decode() {
        assert_eq!(
            test_decode::<ContentLength>(&["3495"]),
            Some(ContentLength(3495))
        );
        assert_eq!(test_decode::<ContentLength>(&["-3"]), None);
        assert_eq!(test_decode::<ContentLength>(&["ten"]), None);
    }

    #[test]
    fn encode() {
        assert_eq!(test_encode(ContentLength(0)), ["0"]);
    }
}

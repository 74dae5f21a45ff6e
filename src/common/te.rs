use crate::specifier::Encoding;

derive_quality_list_header! {
    #[header(name = TE, value = Encoding)]
    /// `TE` header, defined in
    /// [RFC7230](https://datatracker.ietf.org/doc/html/rfc7230#section-4.3)
    ///
    /// As RFC7230 states, "The "TE" header field in a request indicates what transfer codings,
    /// besides chunked, the client is willing to accept in response, and
    /// whether or not the client is willing to accept trailer fields in a
    /// chunked transfer coding."
    ///
    /// For HTTP/1.1 compliant clients `chunked` transfer codings are assumed to be acceptable and
    /// so should never appear in this header.
    ///
    /// # ABNF
    ///
    /// ```text
    /// TE        = "TE" ":" #( t-codings )
    /// t-codings = "trailers" | ( transfer-extension [ accept-params ] )
    /// ```
    ///
    /// # Example values
    /// * `trailers`
    /// * `trailers, deflate;q=0.5`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Te;
}

impl Te {
    /// Create a `TE: trailers` header.
    #[must_use]
    pub fn trailers() -> Self {
        Self::new(Encoding::TRAILERS)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;
    use crate::specifier::Quality;

    #[test]
    fn decode_header_compress() {
        let Te(directives) = test_decode(&["compress"]).unwrap();

        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].value, Encoding::COMPRESS);
        assert_eq!(directives[0].quality, Quality::one());
    }

    #[test]
    fn decode_header_trailers_deflate() {
        let Te(directives) = test_decode(&["trailers, deflate;q=0.5"]).unwrap();

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].value, Encoding::TRAILERS);
        assert_eq!(directives[0].quality, Quality::one());
        assert_eq!(directives[1].value, Encoding::DEFLATE);
        assert_eq!(directives[1].quality, Quality::new_clamped(500));
    }

    #[test]
    fn decode_header_trailers_deflate_split() {
        let Te(directives) = test_decode(&["deflate;q=0.5", "trailers"]).unwrap();

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].value, Encoding::TRAILERS);
        assert_eq!(directives[1].value, Encoding::DEFLATE);
    }

    #[test]
    fn encode() {
        assert_eq!(test_encode(Te::trailers()), ["trailers"]);
    }
}

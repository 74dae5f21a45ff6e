use crate::specifier::RangeUnit;

derive_list_header! {
    #[header(name = ACCEPT_RANGES)]
    /// `Accept-Ranges` header, defined in [RFC7233](https://datatracker.ietf.org/doc/html/rfc7233#section-2.3)
    ///
    /// Unit list: <https://www.iana.org/assignments/http-parameters/http-parameters.xhtml#range-units>.
    ///
    /// The `Accept-Ranges` header field allows a server to indicate that it
    /// supports range requests for the target resource.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Ranges     = acceptable-ranges
    /// acceptable-ranges = 1#range-unit / "none"
    /// ```
    ///
    /// # Example values
    /// * `bytes`
    /// * `none`
    /// * `unknown-unit`
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::{AcceptRanges, HeaderMapExt};
    ///
    /// let mut headers = http::HeaderMap::new();
    /// headers.typed_insert(AcceptRanges::bytes());
    /// assert_eq!(headers["accept-ranges"], "bytes");
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptRanges(pub Vec<RangeUnit>);
}

impl AcceptRanges {
    /// A constructor to easily create the common `Accept-Ranges: bytes` header.
    #[must_use]
    pub fn bytes() -> Self {
        Self::new(RangeUnit::Bytes)
    }

    /// Check if the `bytes` unit is accepted.
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        self.0.contains(&RangeUnit::Bytes)
    }

    /// A constructor to easily create the common `Accept-Ranges: none` header.
    #[must_use]
    pub fn none() -> Self {
        Self::new(RangeUnit::None)
    }

    /// Check if the unit is `none`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == [RangeUnit::None]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    fn accept_ranges(s: &str) -> AcceptRanges {
        test_decode(&[s]).unwrap()
    }

    #[test]
    fn bytes_constructor() {
        assert_eq!(accept_ranges("bytes"), AcceptRanges::bytes());
        assert_eq!(accept_ranges("Bytes"), AcceptRanges::bytes());
        assert_eq!(accept_ranges("BYTES"), AcceptRanges::bytes());
        assert!(accept_ranges("bytes").is_bytes());
    }

    #[test]
    fn none_constructor() {
        assert_eq!(accept_ranges("none"), AcceptRanges::none());
        assert!(accept_ranges("None").is_none());
        assert!(!AcceptRanges::bytes().is_none());
    }

    #[test]
    fn multiple_units() {
        let ar = accept_ranges("items, bytes, in valid");
        assert_eq!(
            ar.0,
            vec![RangeUnit::Other("items".to_owned()), RangeUnit::Bytes]
        );
        assert!(ar.is_bytes());
        assert_eq!(test_encode(ar), ["items, bytes"]);
    }
}

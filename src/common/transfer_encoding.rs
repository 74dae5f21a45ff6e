use crate::specifier::Encoding;

derive_list_header! {
    #[header(name = TRANSFER_ENCODING)]
    /// `Transfer-Encoding` header, defined in
    /// [RFC7230](https://tools.ietf.org/html/rfc7230#section-3.3.1)
    ///
    /// The `Transfer-Encoding` header field lists the transfer coding names
    /// corresponding to the sequence of transfer codings that have been (or
    /// will be) applied to the payload body in order to form the message
    /// body.
    ///
    /// Note that setting this header will *remove* any previously set
    /// `Content-Length` header, in an HTTP/1.1 connection. Only the textual
    /// value is handled here, framing is up to the transport.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Transfer-Encoding = 1#transfer-coding
    /// ```
    ///
    /// # Example values
    ///
    /// * `chunked`
    /// * `gzip, chunked`
    ///
    /// # Example
    ///
    /// ```
    /// use headwise::TransferEncoding;
    ///
    /// let transfer = TransferEncoding::chunked();
    /// assert!(transfer.is_chunked());
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TransferEncoding(pub Vec<Encoding>);
}

impl TransferEncoding {
    /// Constructor for the most common Transfer-Encoding, `chunked`.
    #[must_use]
    pub fn chunked() -> Self {
        Self::new(Encoding::CHUNKED)
    }

    /// Returns whether this ends with the `chunked` encoding.
    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.0.last() == Some(&Encoding::CHUNKED)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn chunked_is_chunked() {
        assert!(TransferEncoding::chunked().is_chunked());
    }

    #[test]
    fn decode_gzip_chunked_is_chunked() {
        let te = test_decode::<TransferEncoding>(&["gzip, chunked"]).unwrap();
        assert!(te.is_chunked());
    }

    #[test]
    fn chunked_gzip_is_not_chunked() {
        let te = test_decode::<TransferEncoding>(&["chunked, gzip"]).unwrap();
        assert!(!te.is_chunked());
    }

    #[test]
    fn multiple_values_chunked() {
        let te = test_decode::<TransferEncoding>(&["gzip", "Chunked"]).unwrap();
        assert!(te.is_chunked());
    }
}

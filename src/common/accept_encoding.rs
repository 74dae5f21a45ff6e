use crate::specifier::Encoding;

derive_quality_list_header! {
    #[header(name = ACCEPT_ENCODING, value = Encoding)]
    /// `Accept-Encoding` header, defined in
    /// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.4)
    ///
    /// The `Accept-Encoding` header field can be used by user agents to
    /// indicate what response content-codings are
    /// acceptable in the response.  An  `identity` token is used as a synonym
    /// for "no encoding" in order to communicate when no encoding is
    /// preferred.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Encoding  = #( codings [ weight ] )
    /// codings          = content-coding / "identity" / "*"
    /// ```
    ///
    /// # Example values
    /// * `compress, gzip`
    /// * ``
    /// * `*`
    /// * `compress;q=0.5, gzip;q=1`
    /// * `gzip;q=1.0, identity; q=0.5, *;q=0`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptEncoding;
}

impl AcceptEncoding {
    /// Returns the most preferred coding, if any.
    #[must_use]
    pub fn preferred(&self) -> Option<&Encoding> {
        self.0.first().map(|qv| &qv.value)
    }
}

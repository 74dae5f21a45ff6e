use crate::specifier::Encoding;

derive_list_header! {
    #[header(name = CONTENT_ENCODING)]
    /// `Content-Encoding` header, defined in
    /// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.2.2)
    ///
    /// The `Content-Encoding` header field indicates what content codings
    /// have been applied to the representation, beyond those inherent in the
    /// media type, and thus what decoding mechanisms have to be applied in
    /// order to obtain data in the media type referenced by the Content-Type
    /// header field.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Content-Encoding = 1#content-coding
    /// ```
    ///
    /// # Example values
    ///
    /// * `gzip`
    /// * `br`
    /// * `deflate, gzip`
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::ContentEncoding;
    ///
    /// let content_enc = ContentEncoding::gzip();
    /// assert!(content_enc.contains("GZIP"));
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ContentEncoding(pub Vec<Encoding>);
}

impl ContentEncoding {
    /// A constructor to easily create a `Content-Encoding: gzip` header.
    #[must_use]
    pub fn gzip() -> Self {
        Self::new(Encoding::GZIP)
    }

    /// A constructor to easily create a `Content-Encoding: br` header.
    #[must_use]
    pub fn br() -> Self {
        Self::new(Encoding::BR)
    }

    /// A constructor to easily create a `Content-Encoding: zstd` header.
    #[must_use]
    pub fn zstd() -> Self {
        Self::new(Encoding::ZSTD)
    }

    /// Check if this header contains a given "coding", case-insensitively.
    #[must_use]
    pub fn contains(&self, coding: &str) -> bool {
        self.0
            .iter()
            .any(|enc| enc.as_str().eq_ignore_ascii_case(coding.trim()))
    }
}

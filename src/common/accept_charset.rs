use crate::specifier::Charset;

derive_quality_list_header! {
    #[header(name = ACCEPT_CHARSET, value = Charset)]
    /// `Accept-Charset` header, defined in
    /// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.3)
    ///
    /// The `Accept-Charset` header field can be sent by a user agent to
    /// indicate what charsets are acceptable in textual response content.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Charset = 1#( ( charset / "*" ) [ weight ] )
    /// ```
    ///
    /// # Example values
    /// * `iso-8859-5, unicode-1-1;q=0.8`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptCharset;
}

use crate::specifier::Language;

derive_quality_list_header! {
    #[header(name = ACCEPT_LANGUAGE, value = Language)]
    /// `Accept-Language` header, defined in
    /// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.5)
    ///
    /// The `Accept-Language` header field can be used by user agents to
    /// indicate the set of natural languages that are preferred in the
    /// response.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept-Language = 1#( language-range [ weight ] )
    /// language-range  = <language-range, see [RFC4647], Section 2.1>
    /// ```
    ///
    /// # Example values
    /// * `da, en-gb;q=0.8, en;q=0.7`
    /// * `en-us;q=1.0, en;q=0.5, fr`
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AcceptLanguage;
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn decode() {
        let accept: AcceptLanguage = test_decode(&["en-US;q=1.0, en;q=0.5, fr"]).unwrap();
        let tags: Vec<_> = accept.iter().map(|qv| qv.value.as_str()).collect();
        assert_eq!(tags, ["en-us", "fr", "en"]);
    }
}

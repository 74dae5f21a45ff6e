use crate::specifier::Language;

derive_list_header! {
    #[header(name = CONTENT_LANGUAGE)]
    /// `Content-Language` header, defined in
    /// [RFC7231](https://tools.ietf.org/html/rfc7231#section-3.1.3.2)
    ///
    /// The `Content-Language` header field describes the natural language(s)
    /// of the intended audience for the representation.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Content-Language = 1#language-tag
    /// ```
    ///
    /// # Example values
    ///
    /// * `da`
    /// * `mi, en`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ContentLanguage(pub Vec<Language>);
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn decode_and_encode() {
        let cl: ContentLanguage = test_decode(&["mi, EN-gb", ""]).unwrap();
        assert_eq!(cl.iter().map(Language::as_str).collect::<Vec<_>>(), ["mi", "en-gb"]);
        assert_eq!(test_encode(cl), ["mi, en-gb"]);
    }
}

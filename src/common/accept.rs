use crate::specifier::MediaType;

derive_quality_list_header! {
    #[header(name = ACCEPT, value = MediaType)]
    /// `Accept` header, defined in [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.2)
    ///
    /// The `Accept` header field can be used by user agents to specify
    /// response media types that are acceptable.  Accept header fields can
    /// be used to indicate that the request is specifically limited to a
    /// small set of desired types, as in the case of a request for an
    /// in-line image
    ///
    /// Media range parameters other than the weight are not kept.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Accept = #( media-range [ accept-params ] )
    ///
    /// media-range    = ( "*/*"
    ///                  / ( type "/" "*" )
    ///                  / ( type "/" subtype )
    ///                  ) *( OWS ";" OWS parameter )
    /// accept-params  = weight *( accept-ext )
    /// accept-ext = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
    /// ```
    ///
    /// # Example values
    /// * `audio/*; q=0.2, audio/basic`
    /// * `text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c`
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::{Accept, HeaderMapExt, MediaType, Quality, QualityValue};
    ///
    /// let mut headers = http::HeaderMap::new();
    /// headers.typed_insert(Accept(vec![
    ///     QualityValue::new_value(MediaType::HTML),
    ///     QualityValue::new(MediaType::ANY, Quality::from(800)),
    /// ]));
    /// assert_eq!(headers["accept"], "text/html, */*;q=0.8");
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Accept;
}

impl Accept {
    /// A constructor to easily create `Accept: */*`.
    #[must_use]
    pub fn star() -> Self {
        Self::new(MediaType::ANY)
    }

    /// A constructor to easily create `Accept: application/json`.
    #[must_use]
    pub fn json() -> Self {
        Self::new(MediaType::JSON)
    }

    /// A constructor to easily create `Accept: text/html`.
    #[must_use]
    pub fn html() -> Self {
        Self::new(MediaType::HTML)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;
    use crate::specifier::{Quality, QualityValue};

    #[test]
    fn decode_sorts_by_quality() {
        let accept: Accept = test_decode(&[
            "text/html, application/xhtml+xml;q=0.5, text/xml;q=0.9, */*;q=0.8",
        ])
        .unwrap();
        assert_eq!(
            accept.into_values(),
            vec![
                MediaType::HTML,
                MediaType::XML,
                MediaType::ANY,
                MediaType::XHTML
            ]
        );
    }

    #[test]
    fn decode_drops_invalid_and_unacceptable() {
        let accept: Accept =
            test_decode(&["text/plain;q=0, nonsense, image/png;q=0.7", "text/css"]).unwrap();
        assert_eq!(
            accept.0,
            vec![
                QualityValue::new_value(MediaType::CSS),
                QualityValue::new(MediaType::PNG, Quality::from(700)),
            ]
        );
    }

    #[test]
    fn decode_ignores_media_range_params() {
        let accept: Accept = test_decode(&["text/html;level=1;q=0.5"]).unwrap();
        assert_eq!(
            accept.0,
            vec![QualityValue::new(MediaType::HTML, Quality::from(500))]
        );
    }

    #[test]
    fn encode() {
        let accept = Accept(vec![
            QualityValue::new_value(MediaType::JSON),
            QualityValue::new(MediaType::ANY, Quality::from(100)),
        ]);
        assert_eq!(test_encode(accept), ["application/json, */*;q=0.1"]);
    }

    #[test]
    fn encode_empty_is_nothing() {
        assert!(test_encode(Accept(Vec::new())).is_empty());
    }

    #[test]
    fn roundtrip() {
        let accept = Accept(vec![
            QualityValue::new_value(MediaType::HTML),
            QualityValue::new(MediaType::XML, Quality::from(900)),
            QualityValue::new(MediaType::ANY, Quality::from(800)),
        ]);
        let values = test_encode(accept.clone());
        let values: Vec<_> = values.iter().map(String::as_str).collect();
        assert_eq!(test_decode::<Accept>(&values), Some(accept));
    }
}

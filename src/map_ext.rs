use crate::{Error, HeaderDecode, HeaderEncode, RawHeaders};

/// An extension trait adding "typed" methods to any [`RawHeaders`] store,
/// such as `http::HeaderMap`.
pub trait HeaderMapExt: RawHeaders {
    /// Inserts the typed header into this store, replacing all existing
    /// values of that header.
    ///
    /// A header which encodes to no values at all is removed.
    fn typed_insert<H>(&mut self, header: H)
    where
        H: HeaderEncode,
    {
        let mut values = Vec::new();
        header.encode(&mut values);
        let values = if values.is_empty() { None } else { Some(values) };
        self.set_raw_values(H::name(), values);
    }

    /// Tries to find the header by name, and then decode it into `H`.
    ///
    /// Headers which fail to decode are reported as absent.
    fn typed_get<H>(&self) -> Option<H>
    where
        H: HeaderDecode,
    {
        self.typed_try_get().unwrap_or_else(|err| {
            tracing::debug!("failed to decode {} header: {err}", H::name());
            None
        })
    }

    /// Tries to find the header by name, and then decode it into `H`.
    fn typed_try_get<H>(&self) -> Result<Option<H>, Error>
    where
        H: HeaderDecode,
    {
        match self.raw_values(H::name()) {
            None => Ok(None),
            Some(values) => H::decode(&mut values.iter().map(String::as_str)).map(Some),
        }
    }

    /// Remove all values of the header `H`.
    fn typed_remove<H>(&mut self)
    where
        H: HeaderEncode,
    {
        self.set_raw_values(H::name(), None);
    }
}

impl<T: RawHeaders + ?Sized> HeaderMapExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentLength, ETag, EntityTag, Vary};
    use http::HeaderMap;
    use tracing_test::traced_test;

    #[test]
    fn insert_then_get() {
        let mut headers = HeaderMap::new();
        headers.typed_insert(ContentLength(1024));
        assert_eq!(headers["content-length"], "1024");
        assert_eq!(headers.typed_get(), Some(ContentLength(1024)));
    }

    #[test]
    fn insert_replaces_existing_values() {
        let mut headers = HeaderMap::new();
        headers.append(http::header::ETAG, http::HeaderValue::from_static("\"a\""));
        headers.append(http::header::ETAG, http::HeaderValue::from_static("\"b\""));
        headers.typed_insert(ETag::from(EntityTag::weak("c").unwrap()));
        assert_eq!(headers.get_all(http::header::ETAG).iter().count(), 1);
        assert_eq!(headers[http::header::ETAG], "W/\"c\"");
    }

    #[test]
    fn absent_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(headers.typed_get::<ContentLength>(), None);
        assert!(matches!(headers.typed_try_get::<ContentLength>(), Ok(None)));
    }

    #[test]
    #[traced_test]
    fn malformed_is_none_but_try_get_errors() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_LENGTH,
            http::HeaderValue::from_static("ten"),
        );
        assert!(headers.typed_try_get::<ContentLength>().is_err());
        assert_eq!(headers.typed_get::<ContentLength>(), None);
        assert!(logs_contain("failed to decode content-length header"));
    }

    #[test]
    fn empty_encoding_removes() {
        let mut headers = HeaderMap::new();
        headers.typed_insert(Vary::any());
        assert!(headers.contains_key(http::header::VARY));
        headers.typed_remove::<Vary>();
        assert!(!headers.contains_key(http::header::VARY));

        headers.typed_insert(crate::ContentLanguage::from_iter([crate::Language::ANY]));
        assert!(headers.contains_key(http::header::CONTENT_LANGUAGE));
        headers.typed_insert(crate::ContentLanguage::from_iter([]));
        assert!(!headers.contains_key(http::header::CONTENT_LANGUAGE));
    }
}

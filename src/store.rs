use http::{HeaderMap, HeaderName, HeaderValue};

/// The raw header storage that typed access is layered on.
///
/// A store maps a case-insensitive header name to an ordered list of raw
/// values. Whether multiple values stand for repeated header lines or for a
/// single comma-joined line is up to the header type reading them.
///
/// Implementations are expected to be cheap to read. Writers must serialize
/// access themselves: read-modify-write operations such as
/// [`HeaderAccessors::add_set_cookie`] are not atomic.
///
/// [`HeaderAccessors::add_set_cookie`]: crate::HeaderAccessors::add_set_cookie
pub trait RawHeaders {
    /// All raw values stored for `name`, or `None` if the header is absent.
    fn raw_values(&self, name: &HeaderName) -> Option<Vec<String>>;

    /// Replace all raw values stored for `name`.
    ///
    /// `None` removes the header.
    fn set_raw_values(&mut self, name: &HeaderName, values: Option<Vec<String>>);
}

impl RawHeaders for HeaderMap {
    fn raw_values(&self, name: &HeaderName) -> Option<Vec<String>> {
        let mut iter = self.get_all(name).iter().peekable();
        iter.peek()?;
        Some(iter.map(header_value_to_string).collect())
    }

    fn set_raw_values(&mut self, name: &HeaderName, values: Option<Vec<String>>) {
        self.remove(name);
        for value in values.into_iter().flatten() {
            match HeaderValue::try_from(value) {
                Ok(value) => {
                    self.append(name.clone(), value);
                }
                Err(err) => {
                    tracing::debug!("failed to store raw value for header '{name}': {err}");
                }
            }
        }
    }
}

/// Values are read as UTF-8 when possible and as ISO-8859-1 otherwise,
/// the latter being the historical charset of header field values.
fn header_value_to_string(value: &HeaderValue) -> String {
    match std::str::from_utf8(value.as_bytes()) {
        Ok(s) => s.to_owned(),
        Err(_) => value.as_bytes().iter().copied().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, SET_COOKIE};

    #[test]
    fn absent_header_reads_as_none() {
        let headers = HeaderMap::new();
        assert_eq!(headers.raw_values(&ACCEPT), None);
    }

    #[test]
    fn set_replaces_and_removes() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        assert_eq!(
            headers.raw_values(&SET_COOKIE),
            Some(vec!["a=1".to_owned(), "b=2".to_owned()])
        );

        headers.set_raw_values(&SET_COOKIE, Some(vec!["c=3".to_owned()]));
        assert_eq!(headers.raw_values(&SET_COOKIE), Some(vec!["c=3".to_owned()]));

        headers.set_raw_values(&SET_COOKIE, None);
        assert!(!headers.contains_key(SET_COOKIE));
    }

    #[test]
    fn invalid_values_are_skipped_on_write() {
        let mut headers = HeaderMap::new();
        headers.set_raw_values(
            &ACCEPT,
            Some(vec!["text/html\r\n".to_owned(), "text/plain".to_owned()]),
        );
        assert_eq!(headers.raw_values(&ACCEPT), Some(vec!["text/plain".to_owned()]));
    }

    #[test]
    fn latin1_values_are_decoded() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_bytes(b"caf\xe9").unwrap());
        assert_eq!(headers.raw_values(&ACCEPT), Some(vec!["café".to_owned()]));
    }
}

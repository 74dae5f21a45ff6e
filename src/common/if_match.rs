use crate::util::EntityTag;

derive_list_header! {
    #[header(name = IF_MATCH)]
    /// `If-Match` header, defined in
    /// [RFC7232](https://tools.ietf.org/html/rfc7232#section-3.1)
    ///
    /// The `If-Match` header field makes the request method conditional on
    /// the recipient origin server either having at least one current
    /// representation of the target resource, when the field-value is "*",
    /// or having a current representation of the target resource that has an
    /// entity-tag matching a member of the list of entity-tags provided in
    /// the field-value.
    ///
    /// An origin server MUST use the strong comparison function when
    /// comparing entity-tags for `If-Match`, since the client
    /// intends this precondition to prevent the method from being applied if
    /// there have been any changes to the representation data.
    ///
    /// # ABNF
    ///
    /// ```text
    /// If-Match = "*" / 1#entity-tag
    /// ```
    ///
    /// # Example values
    ///
    /// * `"xyzzy"`
    /// * `"xyzzy", "r2d2xxxx", "c3piozzzz"`
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::{EntityTag, IfMatch};
    ///
    /// let if_match = IfMatch::any();
    /// assert!(if_match.precondition_passes(&EntityTag::Strong("xyzzy".to_owned())));
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct IfMatch(pub Vec<EntityTag>);
}

impl IfMatch {
    /// Create a new `If-Match: *` header.
    #[must_use]
    pub fn any() -> Self {
        Self::new(EntityTag::Wildcard)
    }

    /// Returns whether this is `If-Match: *`, matching any entity tag.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0.iter().any(EntityTag::is_wildcard)
    }

    /// Checks whether the `ETag` strongly matches.
    #[must_use]
    pub fn precondition_passes(&self, etag: &EntityTag) -> bool {
        self.is_any() || self.0.iter().any(|tag| tag.strong_eq(etag))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn is_any() {
        assert!(IfMatch::any().is_any());
        assert!(!IfMatch::new(EntityTag::Strong("yolo".to_owned())).is_any());
    }

    #[test]
    fn precondition_fails() {
        let if_match = IfMatch::new(EntityTag::Strong("foo".to_owned()));

        assert!(!if_match.precondition_passes(&EntityTag::Strong("bar".to_owned())));
        assert!(!if_match.precondition_passes(&EntityTag::Weak("foo".to_owned())));
    }

    #[test]
    fn precondition_passes() {
        let if_match: IfMatch = test_decode(&[r#""bar", "foo""#]).unwrap();
        assert!(if_match.precondition_passes(&EntityTag::Strong("foo".to_owned())));
    }

    #[test]
    fn precondition_any() {
        let if_match: IfMatch = test_decode(&["*"]).unwrap();
        assert!(if_match.precondition_passes(&EntityTag::Weak("foo".to_owned())));
        assert_eq!(test_encode(if_match), ["*"]);
    }

    #[test]
    fn tags_with_commas() {
        let if_match: IfMatch = test_decode(&[r#""a,b", W/"c""#]).unwrap();
        assert_eq!(
            if_match.0,
            vec![
                EntityTag::Strong("a,b".to_owned()),
                EntityTag::Weak("c".to_owned())
            ]
        );
    }
}

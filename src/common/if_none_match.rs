use crate::util::EntityTag;

derive_list_header! {
    #[header(name = IF_NONE_MATCH)]
    /// `If-None-Match` header, defined in
    /// [RFC7232](https://tools.ietf.org/html/rfc7232#section-3.2)
    ///
    /// The `If-None-Match` header field makes the request method conditional
    /// on a recipient cache or origin server either not having any current
    /// representation of the target resource, when the field-value is "*",
    /// or having a selected representation with an entity-tag that does not
    /// match any of those listed in the field-value.
    ///
    /// A recipient MUST use the weak comparison function when comparing
    /// entity-tags for If-None-Match (Section 2.3.2), since weak entity-tags
    /// can be used for cache validation even if there have been changes to
    /// the representation data.
    ///
    /// # ABNF
    ///
    /// ```text
    /// If-None-Match = "*" / 1#entity-tag
    /// ```
    ///
    /// # Example values
    ///
    /// * `"xyzzy"`
    /// * `W/"xyzzy"`
    /// * `"xyzzy", "r2d2xxxx", "c3piozzzz"`
    /// * `W/"xyzzy", W/"r2d2xxxx", W/"c3piozzzz"`
    /// * `*`
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::IfNoneMatch;
    ///
    /// let if_none_match = IfNoneMatch::any();
    /// assert_eq!(if_none_match.to_string(), "*");
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct IfNoneMatch(pub Vec<EntityTag>);
}

impl IfNoneMatch {
    /// Create a new `If-None-Match: *` header.
    #[must_use]
    pub fn any() -> Self {
        Self::new(EntityTag::Wildcard)
    }

    /// Returns whether this is `If-None-Match: *`.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0.iter().any(EntityTag::is_wildcard)
    }

    /// Checks whether the `ETag` passes this precondition,
    /// i.e. it does not weakly match any of the listed tags.
    #[must_use]
    pub fn precondition_passes(&self, etag: &EntityTag) -> bool {
        !self.is_any() && !self.0.iter().any(|tag| tag.weak_eq(etag))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn precondition_fails() {
        let foo = EntityTag::Strong("foo".to_owned());
        let weak_foo = EntityTag::Weak("foo".to_owned());

        let if_none = IfNoneMatch::new(foo.clone());
        assert!(!if_none.precondition_passes(&foo));
        assert!(!if_none.precondition_passes(&weak_foo));
    }

    #[test]
    fn precondition_passes() {
        let if_none: IfNoneMatch = test_decode(&[r#"W/"foo", "baz""#]).unwrap();
        assert!(if_none.precondition_passes(&EntityTag::Strong("bar".to_owned())));
        assert!(!if_none.precondition_passes(&EntityTag::Strong("foo".to_owned())));
    }

    #[test]
    fn precondition_any() {
        let if_none = IfNoneMatch::any();
        assert!(!if_none.precondition_passes(&EntityTag::Strong("foo".to_owned())));
    }
}

use std::fmt;
use std::str::FromStr;

/// Reads a comma-delimited raw header into a collection.
///
/// Elements which fail to parse are dropped, their siblings are kept.
pub(crate) fn from_comma_delimited<'i, I, T, E>(values: &mut I) -> E
where
    I: Iterator<Item = &'i str>,
    T: FromStr,
    T::Err: fmt::Display,
    E: FromIterator<T>,
{
    values
        .flat_map(split_csv_str)
        .filter_map(|element| match element.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!("dropping invalid list element '{element}': {err}");
                None
            }
        })
        .collect()
}

/// Split a comma-delimited string into trimmed, non-empty elements,
/// leaving commas within quoted strings alone.
pub(crate) fn split_csv_str(s: &str) -> impl Iterator<Item = &str> {
    split_unquoted(s, ',').map(str::trim).filter(|s| !s.is_empty())
}

/// Like [`split_csv_str`] but also leaves commas between `<` and `>` alone,
/// as found in the URI references of a `Link` header.
pub(crate) fn split_link_str(s: &str) -> impl Iterator<Item = &str> {
    split_with(s, ',', true)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Split on every `sep` outside of a quoted string.
///
/// Segments are returned as-is: untrimmed and including empty ones.
pub(crate) fn split_unquoted(s: &str, sep: char) -> impl Iterator<Item = &str> {
    split_with(s, sep, false)
}

fn split_with(s: &str, sep: char, angle_brackets: bool) -> impl Iterator<Item = &str> {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut in_angle_brackets = false;
    s.split(move |c| {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quotes = false;
            }
            false // dont split
        } else if in_angle_brackets {
            if c == '>' {
                in_angle_brackets = false;
            }
            false // dont split
        } else if c == sep {
            true // split
        } else {
            if c == '"' {
                in_quotes = true;
            } else if angle_brackets && c == '<' {
                in_angle_brackets = true;
            }
            false // dont split
        }
    })
}

/// Format an array into a comma-delimited string.
pub(crate) fn fmt_comma_delimited<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    mut iter: impl Iterator<Item = T>,
) -> fmt::Result {
    if let Some(part) = iter.next() {
        fmt::Display::fmt(&part, f)?;
    }
    for part in iter {
        f.write_str(", ")?;
        fmt::Display::fmt(&part, f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_quotes() {
        let parts: Vec<_> = split_csv_str(r#"a, b="1,2", c="x\"y,z", , d"#).collect();
        assert_eq!(parts, vec!["a", r#"b="1,2""#, r#"c="x\"y,z""#, "d"]);
    }

    #[test]
    fn split_link_respects_angle_brackets() {
        let parts: Vec<_> =
            split_link_str(r#"<https://a.example/?x=1,2>; rel="next", <https://b.example/>"#)
                .collect();
        assert_eq!(
            parts,
            vec![
                r#"<https://a.example/?x=1,2>; rel="next""#,
                "<https://b.example/>"
            ]
        );
    }

    #[test]
    fn split_unquoted_keeps_empty_segments() {
        let parts: Vec<_> = split_unquoted("; a=1;", ';').collect();
        assert_eq!(parts, vec!["", " a=1", ""]);
    }

    #[test]
    fn from_comma_delimited_drops_bad_elements() {
        let values = ["1, x, 3", "4"];
        let numbers: Vec<u32> = from_comma_delimited(&mut values.iter().copied());
        assert_eq!(numbers, vec![1, 3, 4]);
    }
}

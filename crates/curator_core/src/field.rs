//! Single-line declared field reader/writer.
//!
//! A declared field is a front matter line of the form `name: value`, where the
//! value may be wrapped in single or double quotes. Matching is line-oriented,
//! not a YAML parse. A rewrite changes only the bytes of the value.

use regex::Regex;
use serde::Serialize;
use std::ops::Range;

use crate::error::{CuratorError, Result};

/// Quoting style of a declared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    /// `featuredImage: /images/a.jpg`
    Bare,
    /// `featuredImage: '/images/a.jpg'`
    Single,
    /// `featuredImage: "/images/a.jpg"`
    Double,
}

impl Quote {
    fn wrap(self, value: &str) -> String {
        match self {
            Quote::Bare => value.to_string(),
            Quote::Single => format!("'{}'", value),
            Quote::Double => format!("\"{}\"", value),
        }
    }
}

/// One occurrence of the field in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Unquoted value.
    pub value: String,
    /// How the value was quoted.
    pub quote: Quote,
    /// Byte range of the raw value (quotes included) within the document.
    span: Range<usize>,
}

/// What a document declares for the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookup {
    /// No declaration line.
    Absent,
    /// Exactly one declaration line.
    Declared(Declaration),
    /// More than one declaration line. `first` is the first syntactic match.
    Duplicate {
        first: Declaration,
        count: usize,
    },
}

impl FieldLookup {
    /// First declared value, if any. Duplicates still report their first match.
    pub fn first_value(&self) -> Option<&str> {
        match self {
            FieldLookup::Absent => None,
            FieldLookup::Declared(d) | FieldLookup::Duplicate { first: d, .. } => Some(&d.value),
        }
    }
}

/// Reader/writer for one named front matter field.
#[derive(Debug, Clone)]
pub struct DeclaredField {
    name: String,
    line: Regex,
}

impl DeclaredField {
    /// Compile the line pattern for `name`.
    ///
    /// Names are restricted to identifier-like characters so they can be
    /// embedded in the pattern verbatim.
    pub fn new(name: &str) -> Result<Self> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CuratorError::InvalidField(name.to_string()));
        }

        let line = Regex::new(&format!(
            r"(?m)^[ \t]*{}:[ \t]*(?P<value>[^\r\n]*)",
            regex::escape(name)
        ))?;

        Ok(Self {
            name: name.to_string(),
            line,
        })
    }

    /// Field name as it appears in documents.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find the field's declarations in `content`.
    pub fn read(&self, content: &str) -> FieldLookup {
        let mut matches = self
            .line
            .captures_iter(content)
            .filter_map(|caps| caps.name("value"));

        let Some(first) = matches.next() else {
            return FieldLookup::Absent;
        };
        let first = declaration(content, first.range());

        let extra = matches.count();
        if extra == 0 {
            FieldLookup::Declared(first)
        } else {
            FieldLookup::Duplicate {
                first,
                count: extra + 1,
            }
        }
    }

    /// Replace the value of `declaration` with `new_value`, keeping its quoting.
    ///
    /// Everything outside the value's byte range is left untouched.
    pub fn rewrite(&self, content: &str, declaration: &Declaration, new_value: &str) -> String {
        let Range { start, end } = declaration.span.clone();
        let mut out = String::with_capacity(content.len() + new_value.len());
        out.push_str(&content[..start]);
        if start == end && content[..start].ends_with(':') {
            out.push(' ');
        }
        out.push_str(&declaration.quote.wrap(new_value));
        out.push_str(&content[end..]);
        out
    }
}

fn declaration(content: &str, raw: Range<usize>) -> Declaration {
    let text = &content[raw.clone()];
    let trimmed = text.trim_end();
    let span = raw.start..raw.start + trimmed.len();

    let (value, quote) = match trimmed.as_bytes() {
        [b'"', .., b'"'] => (&trimmed[1..trimmed.len() - 1], Quote::Double),
        [b'\'', .., b'\''] => (&trimmed[1..trimmed.len() - 1], Quote::Single),
        _ => (trimmed, Quote::Bare),
    };

    Declaration {
        value: value.to_string(),
        quote,
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> DeclaredField {
        DeclaredField::new("featuredImage").unwrap()
    }

    fn declared(lookup: FieldLookup) -> Declaration {
        match lookup {
            FieldLookup::Declared(d) => d,
            other => panic!("expected a single declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_read_bare_value() {
        let d = declared(field().read("---\nfeaturedImage: /images/a.jpg\n---\n"));
        assert_eq!(d.value, "/images/a.jpg");
        assert_eq!(d.quote, Quote::Bare);
    }

    #[test]
    fn test_read_quoted_values() {
        let d = declared(field().read("featuredImage: \"/images/a.jpg\"\n"));
        assert_eq!(d.value, "/images/a.jpg");
        assert_eq!(d.quote, Quote::Double);

        let d = declared(field().read("featuredImage: '/images/b.jpg'\n"));
        assert_eq!(d.value, "/images/b.jpg");
        assert_eq!(d.quote, Quote::Single);
    }

    #[test]
    fn test_read_trailing_whitespace_and_crlf() {
        let d = declared(field().read("featuredImage: /images/a.jpg  \r\ntitle: x\r\n"));
        assert_eq!(d.value, "/images/a.jpg");
    }

    #[test]
    fn test_read_absent() {
        assert_eq!(field().read("---\ntitle: Inn\n---\n"), FieldLookup::Absent);
    }

    #[test]
    fn test_read_ignores_other_field_with_same_suffix() {
        let content = "ogfeaturedImage: /x.jpg\nfeaturedImageAlt: Pool at dusk\n";
        assert_eq!(field().read(content), FieldLookup::Absent);
    }

    #[test]
    fn test_read_does_not_span_lines() {
        let d = declared(field().read("featuredImage:\ntitle: Inn\n"));
        assert_eq!(d.value, "");
    }

    #[test]
    fn test_duplicate_reports_first_match() {
        let content = "featuredImage: /first.jpg\ntitle: Inn\nfeaturedImage: /second.jpg\n";
        match field().read(content) {
            FieldLookup::Duplicate { first, count } => {
                assert_eq!(first.value, "/first.jpg");
                assert_eq!(count, 2);
            }
            other => panic!("expected duplicate, got {:?}", other),
        }
        assert_eq!(field().read(content).first_value(), Some("/first.jpg"));
    }

    #[test]
    fn test_rewrite_preserves_surroundings_and_quotes() {
        let f = field();
        let content = "---\ntitle: Inn\nfeaturedImage: \"/old.svg\"\nalt: x\n---\nBody\n";
        let d = declared(f.read(content));
        let out = f.rewrite(content, &d, "/new.jpg");
        assert_eq!(
            out,
            "---\ntitle: Inn\nfeaturedImage: \"/new.jpg\"\nalt: x\n---\nBody\n"
        );
    }

    #[test]
    fn test_rewrite_empty_value() {
        let f = field();
        let content = "featuredImage:\nbody";
        let d = declared(f.read(content));
        assert_eq!(f.rewrite(content, &d, "/new.jpg"), "featuredImage: /new.jpg\nbody");
    }

    #[test]
    fn test_invalid_field_name() {
        assert!(matches!(
            DeclaredField::new("featured image"),
            Err(CuratorError::InvalidField(_))
        ));
        assert!(DeclaredField::new("").is_err());
    }
}

//! Snippet insertion into HTML documents.
//!
//! A [`ContentInserter`] captures a markup snippet once and splices it into
//! HTML documents at a fixed position: the start or the end of the first
//! occurrence of a target element. Tag matching is ASCII-case-insensitive
//! and tolerates attributes on the opening tag; if the target element is
//! absent the document comes back unchanged.

/// Where a [`ContentInserter`] places its snippet.
#[derive(Clone, Debug)]
pub struct InsertOptions {
    /// Target element name, e.g. `head` or `body`.
    pub tag_name: String,
    /// Insert as the element's last child instead of its first.
    pub insert_to_end: bool,
}

impl Default for InsertOptions {
    /// End of `<head>`, where injected `<script>` tags belong.
    fn default() -> Self {
        Self {
            tag_name: "head".to_owned(),
            insert_to_end: true,
        }
    }
}

/// A prepared snippet bound to an insertion position.
#[derive(Clone, Debug)]
pub struct ContentInserter {
    content: String,
    options: InsertOptions,
}

impl ContentInserter {
    /// Create an inserter for `content` at the position given by `options`.
    #[must_use]
    pub fn new(content: impl Into<String>, options: InsertOptions) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }

    /// The raw snippet this inserter splices in.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Return a copy of `html` with the snippet inserted.
    ///
    /// The document is returned unchanged when the target element is not
    /// found.
    #[must_use]
    pub fn insert(&self, html: &str) -> String {
        let tag = self.options.tag_name.to_ascii_lowercase();
        let position = if self.options.insert_to_end {
            find_closing_tag(html, &tag)
        } else {
            find_opening_tag_end(html, &tag)
        };

        match position {
            Some(at) => {
                let mut out = String::with_capacity(html.len() + self.content.len());
                out.push_str(&html[..at]);
                out.push_str(&self.content);
                out.push_str(&html[at..]);
                out
            }
            None => html.to_owned(),
        }
    }

    /// Byte-level variant of [`insert`](Self::insert).
    ///
    /// Invalid UTF-8 sequences are replaced, matching how browsers treat
    /// malformed documents.
    #[must_use]
    pub fn insert_bytes(&self, html: &[u8]) -> Vec<u8> {
        self.insert(&String::from_utf8_lossy(html)).into_bytes()
    }
}

/// Find the byte offset of `</tag>`, ignoring ASCII case.
///
/// Whitespace between the tag name and `>` is allowed, as in `</head >`.
fn find_closing_tag(html: &str, tag: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let needle = format!("</{tag}");
    let mut from = 0;

    while let Some(found) = lower[from..].find(&needle) {
        let start = from + found;
        let after = start + needle.len();

        match lower.as_bytes().get(after) {
            Some(b'>') => return Some(start),
            Some(c) if c.is_ascii_whitespace() => return Some(start),
            // Prefix of a longer name, e.g. `</header>` while scanning
            // for `</head>`
            _ => from = after,
        }
    }

    None
}

/// Find the byte offset just past the `>` of the `<tag …>` opening tag,
/// ignoring ASCII case.
fn find_opening_tag_end(html: &str, tag: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let needle = format!("<{tag}");
    let mut from = 0;

    while let Some(found) = lower[from..].find(&needle) {
        let start = from + found;
        let after = start + needle.len();

        match lower.as_bytes().get(after) {
            Some(b'>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() || *c == b'/' => {
                return lower[after..].find('>').map(|gt| after + gt + 1);
            }
            _ => from = after,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn head_end_inserter(content: &str) -> ContentInserter {
        ContentInserter::new(content, InsertOptions::default())
    }

    #[test]
    fn test_insert_at_head_end() {
        let inserter = head_end_inserter("<script></script>");
        let html = "<html><head><title>t</title></head><body></body></html>";

        assert_eq!(
            inserter.insert(html),
            "<html><head><title>t</title><script></script></head><body></body></html>"
        );
    }

    #[test]
    fn test_insert_is_case_insensitive() {
        let inserter = head_end_inserter("<script></script>");
        let html = "<HTML><HEAD></HEAD><BODY></BODY></HTML>";

        assert_eq!(
            inserter.insert(html),
            "<HTML><HEAD><script></script></HEAD><BODY></BODY></HTML>"
        );
    }

    #[test]
    fn test_insert_skips_longer_tag_names() {
        let inserter = head_end_inserter("X");
        // <header> must not be mistaken for <head>
        let html = "<html><body><header></header></body></html>";

        assert_eq!(inserter.insert(html), html);
    }

    #[test]
    fn test_insert_without_target_returns_unchanged() {
        let inserter = head_end_inserter("<script></script>");

        assert_eq!(inserter.insert("<p>no head</p>"), "<p>no head</p>");
    }

    #[test]
    fn test_insert_at_element_start() {
        let inserter = ContentInserter::new(
            "<meta charset=\"utf-8\">",
            InsertOptions {
                tag_name: "head".to_owned(),
                insert_to_end: false,
            },
        );
        let html = "<head lang=\"en\"><title>t</title></head>";

        assert_eq!(
            inserter.insert(html),
            "<head lang=\"en\"><meta charset=\"utf-8\"><title>t</title></head>"
        );
    }

    #[test]
    fn test_insert_at_body_end() {
        let inserter = ContentInserter::new(
            "<script></script>",
            InsertOptions {
                tag_name: "body".to_owned(),
                insert_to_end: true,
            },
        );
        let html = "<body><p>hi</p></body>";

        assert_eq!(
            inserter.insert(html),
            "<body><p>hi</p><script></script></body>"
        );
    }

    #[test]
    fn test_insert_bytes_round_trips() {
        let inserter = head_end_inserter("<script></script>");
        let html = b"<head></head>".to_vec();

        assert_eq!(
            inserter.insert_bytes(&html),
            b"<head><script></script></head>".to_vec()
        );
    }

    #[test]
    fn test_closing_tag_with_whitespace() {
        let inserter = head_end_inserter("X");

        assert_eq!(inserter.insert("<head></head >"), "<head>X</head >");
    }

    #[test]
    fn test_content_accessor() {
        let inserter = head_end_inserter("<script></script>");

        assert_eq!(inserter.content(), "<script></script>");
    }
}

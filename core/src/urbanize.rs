//! Inline cross-reference parsing for definition and example text.
//!
//! Urban Dictionary marks links to other entries as `[term]`. `urbanize`
//! splits text into plain runs and reference runs so a UI can style the
//! references and turn a click back into a lookup via `term_at`.
//!
//! # Matching rules
//! A reference is the shortest `[...]` span starting at a `[`, and it may not
//! cross a line terminator (`\n`, `\r`, U+0085, U+2028, U+2029). A `[` with no
//! closing `]` on the same line stays in the plain text. The captured term is
//! whitespace-trimmed. Empty plain runs are never emitted; empty references
//! (`[]`) are.

/// One styled run of urbanized text, borrowing from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// A `[term]` cross-reference; holds the trimmed term without brackets.
    Reference(&'a str),
}

impl<'a> Segment<'a> {
    /// The text this segment contributes to the rendered output.
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(text) | Segment::Reference(text) => text,
        }
    }

    /// The referenced term, if this is a reference run.
    pub fn term(&self) -> Option<&'a str> {
        match *self {
            Segment::Reference(term) => Some(term),
            Segment::Plain(_) => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Segment::Reference(_))
    }
}

/// Split `text` into plain and reference segments.
///
/// Text without any complete `[...]` span yields a single plain segment; the
/// empty string yields no segments at all.
pub fn urbanize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('[') {
        let body_start = cursor + offset + 1;
        let stop = text[body_start..].find(|c: char| c == ']' || is_line_terminator(c));
        match stop {
            Some(len) if text.as_bytes()[body_start + len] == b']' => {
                let close = body_start + len;
                push_plain(&mut segments, &text[plain_start..body_start - 1]);
                segments.push(Segment::Reference(text[body_start..close].trim()));
                cursor = close + 1;
                plain_start = cursor;
            }
            Some(len) => {
                // Every `[` before this terminator fails the same way.
                let at = body_start + len;
                let width = text[at..].chars().next().map_or(1, char::len_utf8);
                cursor = at + width;
            }
            None => break,
        }
    }

    push_plain(&mut segments, &text[plain_start..]);
    segments
}

/// Concatenate segment texts the way a UI displays them: plain runs verbatim,
/// references as their trimmed term without brackets.
pub fn render(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// Resolve a byte offset in `render(segments)` to the reference covering it.
///
/// Returns `None` when the offset falls on plain text or past the end.
pub fn term_at<'a>(segments: &[Segment<'a>], offset: usize) -> Option<&'a str> {
    let mut start = 0;
    for segment in segments {
        let end = start + segment.text().len();
        if offset < end {
            return segment.term();
        }
        start = end;
    }
    None
}

fn push_plain<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Plain(text));
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

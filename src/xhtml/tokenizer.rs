//! Tag/text state machine
//!
//! Splits HTML into tag markup and character data. A `<` only opens a tag
//! when followed by a letter, `/`, `!` or `?`; otherwise it is text. Inside
//! a tag, `>` within a quoted attribute value does not close the tag.
//! Comments run to `-->`. An unterminated tag at the end of input is
//! treated as text so it gets escaped rather than passed through.

/// One run of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Everything from `<` through the closing `>`
    Tag(&'a str),
    /// Character data between tags
    Text(&'a str),
}

#[derive(Clone, Copy)]
enum State {
    Text,
    Tag { quote: Option<char> },
    Comment,
}

/// Split `html` into tag and text segments, in order
#[must_use]
pub fn tokenize(html: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut state = State::Text;
    let mut start = 0;
    let mut last_significant: Option<char> = None;

    for (index, ch) in html.char_indices() {
        match state {
            State::Text => {
                if ch == '<' && opens_tag(&html[index + 1..]) {
                    if index > start {
                        segments.push(Segment::Text(&html[start..index]));
                    }
                    start = index;
                    last_significant = None;
                    state = if html[index..].starts_with("<!--") {
                        State::Comment
                    } else {
                        State::Tag { quote: None }
                    };
                }
            }
            State::Tag { quote: Some(q) } => {
                if ch == q {
                    state = State::Tag { quote: None };
                    last_significant = Some(ch);
                }
            }
            State::Tag { quote: None } => match ch {
                '"' | '\'' if last_significant == Some('=') => {
                    state = State::Tag { quote: Some(ch) };
                }
                '>' => {
                    segments.push(Segment::Tag(&html[start..=index]));
                    start = index + 1;
                    state = State::Text;
                }
                c if c.is_whitespace() => {}
                c => last_significant = Some(c),
            },
            State::Comment => {
                if ch == '>' && html[start..=index].ends_with("-->") && index >= start + 6 {
                    segments.push(Segment::Tag(&html[start..=index]));
                    start = index + 1;
                    state = State::Text;
                }
            }
        }
    }

    if start < html.len() {
        segments.push(Segment::Text(&html[start..]));
    }
    segments
}

fn opens_tag(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

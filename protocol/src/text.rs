/// Strips HTML tags, entities and backslash escapes from upstream clue text and collapses whitespace.
///
/// A `<` only opens a tag when followed by a letter or `/`; an unterminated tag is kept as text.
pub fn plain_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' if chars
                .peek()
                .is_some_and(|&next| next.is_ascii_alphabetic() || next == '/') =>
            {
                let mut tag = String::from('<');
                let mut closed = false;
                for c in chars.by_ref() {
                    tag.push(c);
                    if c == '>' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    out.push_str(&tag);
                }
            }
            '\\' => match chars.next() {
                Some(escaped @ ('\'' | '"' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    let out = decode_entities(&out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `&amp;` goes last so `&amp;lt;` decodes to the literal `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

//! Line-by-line markdown-like classification for the preview pane.
//!
//! Each line is classified on its own by a literal prefix test. There are no
//! multi-line constructs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Font scale relative to body text
    pub fn scale(self) -> f32 {
        match self {
            Self::H1 => 2.0,
            Self::H2 => 1.6,
            Self::H3 => 1.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: HeadingLevel, text: &'a str },
    Blockquote(&'a str),
    Bullet(&'a str),
    Rule,
    Spacer,
    Paragraph(&'a str),
}

/// Classify a single line
pub fn classify_line(line: &str) -> Block<'_> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("# ") {
        Block::Heading { level: HeadingLevel::H1, text: rest }
    } else if let Some(rest) = trimmed.strip_prefix("## ") {
        Block::Heading { level: HeadingLevel::H2, text: rest }
    } else if let Some(rest) = trimmed.strip_prefix("### ") {
        Block::Heading { level: HeadingLevel::H3, text: rest }
    } else if let Some(rest) = trimmed.strip_prefix("> ") {
        Block::Blockquote(rest)
    } else if let Some(rest) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
        Block::Bullet(rest)
    } else if trimmed == "---" {
        Block::Rule
    } else if trimmed.is_empty() {
        Block::Spacer
    } else {
        Block::Paragraph(line)
    }
}

/// Classify every line of `text` in order
pub fn parse_blocks(text: &str) -> Vec<Block<'_>> {
    text.split('\n').map(|line| classify_line(line.trim_end_matches('\r'))).collect()
}

/// A run of inline text sharing one emphasis style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

/// Split inline emphasis markup: `**bold**`, `*italic*`, `_italic_` and
/// `` `code` ``. Unterminated markers are kept as literal text.
pub fn inline_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current = Span::default();
    let mut bold = false;
    let mut italic = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let (marker, toggles_bold) = if rest.starts_with("**") {
            ("**", true)
        } else if c == '*' || c == '_' {
            (&rest[..1], false)
        } else if c == '`' {
            if let Some(end) = rest[1..].find('`') {
                push_span(&mut spans, &mut current, bold, italic);
                spans.push(Span {
                    text: rest[1..=end].to_owned(),
                    bold,
                    italic,
                    code: true,
                });
                rest = &rest[end + 2..];
                continue;
            }
            current.text.push(c);
            rest = &rest[1..];
            continue;
        } else {
            current.text.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };

        let after = &rest[marker.len()..];
        let opening = if toggles_bold { !bold } else { !italic };
        if opening && !after.contains(marker) {
            current.text.push_str(marker);
        } else {
            push_span(&mut spans, &mut current, bold, italic);
            if toggles_bold {
                bold = !bold;
            } else {
                italic = !italic;
            }
        }
        rest = after;
    }

    push_span(&mut spans, &mut current, bold, italic);
    spans
}

fn push_span(spans: &mut Vec<Span>, current: &mut Span, bold: bool, italic: bool) {
    if current.text.is_empty() {
        return;
    }
    spans.push(Span {
        text: std::mem::take(&mut current.text),
        bold,
        italic,
        code: false,
    });
}

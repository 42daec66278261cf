use regex::Regex;
use std::sync::LazyLock;

/// `Yellow highlight | Page: 12` or `Yellow highlight | Location: 1,234`.
static HIGHLIGHT_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Yellow highlight \| (?:Page|Location): [0-9]+(?:,[0-9]+)?").unwrap()
});

static NEWLINES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Padding the export puts between entries.
static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

static NOTE_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+Note:").unwrap());

static CHAPTER_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z ]+-Chapter [0-9]+)").unwrap());

/// Convert a raw highlight export into chapter-sectioned Markdown.
///
/// Rule order matters: note and chapter markers are only recognisable once
/// markers and newlines are gone and padding has become paragraph breaks.
pub fn highlights_to_markdown(raw: &str) -> String {
    let text = strip_highlight_markers(raw);
    let text = remove_newlines(&text);
    let text = split_paragraphs(&text);
    let text = inline_notes(&text);
    chapter_headings(&text)
}

pub fn strip_highlight_markers(text: &str) -> String {
    HIGHLIGHT_MARKER_REGEX.replace_all(text, "").into_owned()
}

pub fn remove_newlines(text: &str) -> String {
    NEWLINES_REGEX.replace_all(text, "").into_owned()
}

/// Turn every run of two or more whitespace characters into a blank line.
pub fn split_paragraphs(text: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(text, "\n\n").into_owned()
}

/// Attach `Note:` annotations to the preceding highlight as `- ...`.
pub fn inline_notes(text: &str) -> String {
    NOTE_MARKER_REGEX.replace_all(text, "-").into_owned()
}

pub fn chapter_headings(text: &str) -> String {
    CHAPTER_MARKER_REGEX
        .replace_all(text, "## ${1}\n")
        .into_owned()
}

//! Escaping utilities for safe report generation.
//!
//! Skills, keywords and recommendations are free text written by an external
//! analysis service. They may contain:
//! - HTML entities that could inject scripts (XSS)
//! - Markdown syntax that could break list formatting
//! - Newlines that would split a list item
//!
//! Every such string MUST be escaped before it is embedded in a report.

/// Escape a string for safe inclusion in HTML content and quoted attributes.
///
/// # Examples
///
/// ```
/// use resume_report::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("C++ & Rust"), "C++ &amp; Rust");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for Markdown inline content such as headings and paragraphs.
///
/// # Examples
///
/// ```
/// use resume_report::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**Strong** Match"), "\\*\\*Strong\\*\\* Match");
/// assert_eq!(escape_markdown_inline("C#"), "C\\#");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use as a Markdown list item.
///
/// Lighter than inline escaping: `#` and `_` are harmless mid-item, so
/// "C#" and "snake_case" read naturally. Newlines become "; " to keep the
/// item on one line.
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("Rust"), "Rust");
        assert_eq!(escape_html("R&D"), "R&amp;D");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_xss_vectors() {
        assert_eq!(
            escape_html("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
        assert!(!escape_html("\"><script>").contains('<'));
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("Zürich · 東京"), "Zürich · 東京");
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("plain"), "plain");
        assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
        assert_eq!(escape_markdown_inline("line1\r\nline2"), "line1 line2");
    }

    #[test]
    fn test_escape_markdown_list() {
        assert_eq!(escape_markdown_list("C# and snake_case"), "C# and snake_case");
        assert_eq!(escape_markdown_list("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown_list("first\nsecond"), "first; second");
    }
}

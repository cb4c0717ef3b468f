//! Minimal line-oriented markdown for `cat` on `.md` files.
//!
//! The supported subset is deliberately small: `# ` and `## ` headings
//! render as info lines, `- ` list lines pass through verbatim, a line
//! containing `**bold**` spans renders as a success line with the markers
//! stripped, and everything else is plain. No nesting, links, or fences.

use std::sync::OnceLock;

use regex::Regex;

use crate::render::Line;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // lazy-compiled once; the pattern is a literal and cannot fail
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

pub fn render(content: &str) -> Vec<Line> {
    content.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Line {
    if let Some(rest) = line.strip_prefix("# ") {
        Line::info(rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        Line::info(rest)
    } else if line.starts_with("- ") {
        Line::plain(line)
    } else if bold_re().is_match(line) {
        Line::success(bold_re().replace_all(line, "$1").into_owned())
    } else {
        Line::plain(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Style;

    #[test]
    fn headings_become_info_without_markers() {
        let lines = render("# Title\n## Sub");
        assert_eq!(lines[0], Line::info("Title"));
        assert_eq!(lines[1], Line::info("Sub"));
    }

    #[test]
    fn list_lines_pass_through() {
        let lines = render("- item one");
        assert_eq!(lines[0], Line::plain("- item one"));
    }

    #[test]
    fn bold_spans_are_stripped_and_styled() {
        let lines = render("**Current**: confused");
        assert_eq!(lines[0].style, Style::Success);
        assert_eq!(lines[0].text, "Current: confused");
    }

    #[test]
    fn ordinary_text_is_plain() {
        let lines = render("just words\n");
        assert_eq!(lines[0], Line::plain("just words"));
    }
}

use crate::block::{Block, List};

/// Convert blocks to an HTML fragment, one output line per fragment piece
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in blocks {
        emit_block(block, &mut lines);
    }

    lines.join("\n")
}

fn emit_block(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Heading { level, content } => {
            lines.push(format!("<h{level}>{content}</h{level}>"));
        }
        Block::List(list) => list_to_html(list, lines),
        Block::Line(text) => {
            lines.push(text.replace('\n', "<br />\n"));
        }
    }
}

fn list_to_html(list: &List, lines: &mut Vec<String>) {
    lines.push("<ul>".to_string());
    for item in &list.items {
        lines.push(format!("    <li>{item}</li>"));
    }
    lines.push("</ul>".to_string());
}

/// Legacy whole-answer conversion: each newline becomes a line break tag
pub fn line_breaks_to_html(text: &str) -> String {
    text.replace('\n', "<br />\n")
}

#[cfg(test)]
mod tests {
    use crate::convert;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(convert("# Hello"), "<h1>Hello</h1>");
        assert_eq!(convert("##Second  "), "<h2>Second</h2>");
    }

    #[test]
    fn heading_precedence() {
        assert_eq!(convert("### Title"), "<h3>Title</h3>");
    }

    #[test]
    fn paragraph() {
        assert_eq!(convert("Hello world"), "Hello world");
    }

    #[test]
    fn plain_lines_are_verbatim() {
        assert_eq!(convert("  indented  "), "  indented  ");
    }

    #[test]
    fn bold_and_link() {
        assert_eq!(
            convert("See [docs](http://example.com/x) **now**"),
            r#"See <a href="http://example.com/x">docs</a> <strong>now</strong>"#
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            convert("- a\n- b"),
            "<ul>\n    <li>a</li>\n    <li>b</li>\n</ul>"
        );
    }

    #[test]
    fn empty_list_item() {
        assert_eq!(convert("-"), "<ul>\n    <li></li>\n</ul>");
    }

    #[test]
    fn list_between_headings() {
        assert_eq!(
            convert("# Title\n- one\n- **two**\n## Sub\ntext"),
            "<h1>Title</h1>\n<ul>\n    <li>one</li>\n    <li><strong>two</strong></li>\n</ul>\n<h2>Sub</h2>\ntext"
        );
    }

    #[test]
    fn blank_line_closes_list() {
        assert_eq!(convert("- a\n\n- b"), "<ul>\n    <li>a</li>\n</ul>\n\n<ul>\n    <li>b</li>\n</ul>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn converted_output_is_stable() {
        let once = convert("# Title\n- [a](http://x) **b**\ntext");
        assert_eq!(convert(&once), once);
    }

    #[test]
    fn legacy_line_breaks() {
        assert_eq!(super::line_breaks_to_html("a\nb"), "a<br />\nb");
        assert_eq!(super::line_breaks_to_html("single"), "single");
    }
}

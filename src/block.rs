/// Classification of a single line of the markup dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Heading1,
    Heading2,
    Heading3,
    ListItem,
    Plain,
}

impl LineClass {
    /// Classify a line by its leading characters.
    ///
    /// Longer heading markers win over shorter ones, and a line only counts as
    /// a list item when it is not a heading.
    pub fn classify(line: &str) -> Self {
        if line.starts_with("###") {
            LineClass::Heading3
        } else if line.starts_with("##") {
            LineClass::Heading2
        } else if line.starts_with('#') {
            LineClass::Heading1
        } else if line.starts_with('-') {
            LineClass::ListItem
        } else {
            LineClass::Plain
        }
    }

    /// Heading level (1-3), or `None` for non-heading classes.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineClass::Heading1 => Some(1),
            LineClass::Heading2 => Some(2),
            LineClass::Heading3 => Some(3),
            LineClass::ListItem | LineClass::Plain => None,
        }
    }

    /// Number of leading marker bytes this class consumes.
    fn marker_len(self) -> usize {
        match self {
            LineClass::Heading3 => 3,
            LineClass::Heading2 => 2,
            LineClass::Heading1 | LineClass::ListItem => 1,
            LineClass::Plain => 0,
        }
    }

    /// Strip the marker for this class and the whitespace around the rest.
    ///
    /// Plain lines are returned untouched.
    pub fn strip_marker(self, line: &str) -> &str {
        match self {
            LineClass::Plain => line,
            // Markers are ASCII, so the slice is always on a char boundary.
            _ => line[self.marker_len()..].trim(),
        }
    }
}

/// An unordered list built from a contiguous run of list lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    pub items: Vec<String>,
}

/// Block-level output produced from the markup dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: String },
    List(List),
    /// A plain line, emitted verbatim.
    Line(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("### Title", LineClass::Heading3)]
    #[case("#### Deeper", LineClass::Heading3)]
    #[case("## Title", LineClass::Heading2)]
    #[case("# Title", LineClass::Heading1)]
    #[case("#", LineClass::Heading1)]
    #[case("- item", LineClass::ListItem)]
    #[case("-", LineClass::ListItem)]
    #[case("plain", LineClass::Plain)]
    #[case(" - indented", LineClass::Plain)]
    #[case("", LineClass::Plain)]
    fn classify(#[case] line: &str, #[case] expected: LineClass) {
        assert_eq!(LineClass::classify(line), expected);
    }

    #[test]
    fn strips_only_the_matched_marker() {
        assert_eq!(LineClass::Heading3.strip_marker("####  Deeper "), "#  Deeper");
        assert_eq!(LineClass::Heading1.strip_marker("#Title"), "Title");
        assert_eq!(LineClass::ListItem.strip_marker("-   spaced  "), "spaced");
        assert_eq!(LineClass::ListItem.strip_marker("-"), "");
        assert_eq!(LineClass::Plain.strip_marker("  as is "), "  as is ");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(LineClass::Heading1.heading_level(), Some(1));
        assert_eq!(LineClass::Heading3.heading_level(), Some(3));
        assert_eq!(LineClass::ListItem.heading_level(), None);
    }
}

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// File paths ending in this extension get a top-level `#` heading in the
/// markdown style; everything else gets `##`.
pub const PRIMARY_MARKDOWN_EXTENSION: &str = ".rs";

/// The envelope syntax wrapped around each rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    Newline,
    Separator,
    Markdown,
    #[default]
    Xml,
}

impl HeaderStyle {
    pub const VARIANTS: [&'static str; 4] = ["newline", "separator", "markdown", "xml"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStyle::Newline => "newline",
            HeaderStyle::Separator => "separator",
            HeaderStyle::Markdown => "markdown",
            HeaderStyle::Xml => "xml",
        }
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newline" => Ok(HeaderStyle::Newline),
            "separator" => Ok(HeaderStyle::Separator),
            "markdown" => Ok(HeaderStyle::Markdown),
            "xml" => Ok(HeaderStyle::Xml),
            other => Err(AppError::InvalidArgument(format!(
                "Unknown header style \"{}\" (expected one of: {})",
                other,
                HeaderStyle::VARIANTS.join(", ")
            ))),
        }
    }
}

/// Prefixes each line with its 1-based number, right-justified to the width
/// of the total line count. Empty content is returned unchanged.
pub fn add_line_numbers(content: &str, separator: &str) -> String {
    if content.is_empty() {
        return content.to_string();
    }

    let lines: Vec<&str> = content.lines().collect();
    let padding = lines.len().to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>padding$}{}{}", i + 1, separator, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one file's path and content into the requested envelope.
pub fn format_file_section(
    path: &str,
    content: &str,
    style: HeaderStyle,
    include_footer: bool,
    line_numbers: bool,
    number_separator: &str,
) -> String {
    let formatted_content = if line_numbers {
        add_line_numbers(content, number_separator)
    } else {
        content.to_string()
    };

    match style {
        HeaderStyle::Newline => format!("\n\n{formatted_content}"),
        HeaderStyle::Separator => {
            let start = if include_footer { "start " } else { "" };
            let header = format!("\n=== {start}{path} ===\n");
            let footer = if include_footer {
                format!("\n=== end {path} ===\n")
            } else {
                String::new()
            };
            format!("{header}{formatted_content}{footer}")
        }
        HeaderStyle::Markdown => {
            let level = if path.ends_with(PRIMARY_MARKDOWN_EXTENSION) {
                "#"
            } else {
                "##"
            };
            let start = if include_footer { "start " } else { "" };
            let header = format!("\n{level} {start}{path}\n");
            let footer = if include_footer {
                format!("\n{level} end {path}\n")
            } else {
                String::new()
            };
            format!("{header}{formatted_content}{footer}")
        }
        HeaderStyle::Xml => format!(
            "\n<file>\n<path>{path}</path>\n<content>\n{formatted_content}\n</content>\n</file>"
        ),
    }
}

/// Renders the directory-tree drawing into the requested envelope. The tree
/// section is never line-numbered and carries no footer.
pub fn format_tree_section(tree: &str, style: HeaderStyle) -> String {
    match style {
        HeaderStyle::Newline => format!("\n\n{tree}"),
        HeaderStyle::Separator => format!("\n=== Directory Tree ===\n{tree}"),
        HeaderStyle::Markdown => format!("\n## Directory Tree\n{tree}"),
        HeaderStyle::Xml => format!("\n<directory_tree>\n{tree}\n</directory_tree>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_round_trips_through_from_str() {
        for name in HeaderStyle::VARIANTS {
            let style: HeaderStyle = name.parse().unwrap();
            assert_eq!(style.as_str(), name);
        }
        assert!(matches!(
            "yaml".parse::<HeaderStyle>(),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn line_numbers_basic() {
        assert_eq!(
            add_line_numbers("Line 1\nLine 2\nLine 3", " | "),
            "1 | Line 1\n2 | Line 2\n3 | Line 3"
        );
        assert_eq!(add_line_numbers("Single line", "|"), "1|Single line");
        assert_eq!(add_line_numbers("", "|"), "");
    }

    #[test]
    fn line_numbers_pad_to_total_width() {
        let content: Vec<String> = (1..=100).map(|i| format!("Line {i}")).collect();
        let numbered = add_line_numbers(&content.join("\n"), "|");
        let lines: Vec<&str> = numbered.lines().collect();

        assert_eq!(lines.len(), 100);
        assert_eq!(lines[0], "  1|Line 1");
        assert_eq!(lines[9], " 10|Line 10");
        assert_eq!(lines[99], "100|Line 100");
    }

    #[test]
    fn line_count_is_preserved() {
        let content = "a\nb\nc\nd";
        let numbered = add_line_numbers(content, ">");
        assert_eq!(numbered.lines().count(), content.lines().count());
    }

    #[test]
    fn newline_style_has_no_header() {
        assert_eq!(
            format_file_section("x.txt", "body", HeaderStyle::Newline, true, false, "|"),
            "\n\nbody"
        );
    }

    #[test]
    fn separator_style_with_footer() {
        let section =
            format_file_section("x.txt", "body", HeaderStyle::Separator, true, false, "|");
        assert_eq!(section, "\n=== start x.txt ===\nbody\n=== end x.txt ===\n");
    }

    #[test]
    fn separator_style_without_footer() {
        let section =
            format_file_section("x.txt", "body", HeaderStyle::Separator, false, false, "|");
        assert_eq!(section, "\n=== x.txt ===\nbody");
    }

    #[test]
    fn separator_round_trip_recovers_the_headerless_body() {
        let with_footer =
            format_file_section("x.txt", "body", HeaderStyle::Separator, true, false, "|");
        let without_footer =
            format_file_section("x.txt", "body", HeaderStyle::Separator, false, false, "|");

        let after_start = with_footer
            .strip_prefix("\n=== start x.txt ===\n")
            .unwrap();
        let between = after_start.strip_suffix("\n=== end x.txt ===\n").unwrap();
        assert_eq!(between, without_footer.strip_prefix("\n=== x.txt ===\n").unwrap());
    }

    #[test]
    fn markdown_primary_extension_gets_single_hash() {
        let rust = format_file_section("main.rs", "body", HeaderStyle::Markdown, false, false, "|");
        assert!(rust.starts_with("\n# main.rs\n"));

        let other = format_file_section("notes.txt", "body", HeaderStyle::Markdown, false, false, "|");
        assert!(other.starts_with("\n## notes.txt\n"));
    }

    #[test]
    fn xml_style_ignores_footer_flag() {
        let with_footer = format_file_section("x.txt", "body", HeaderStyle::Xml, true, false, "|");
        let without = format_file_section("x.txt", "body", HeaderStyle::Xml, false, false, "|");
        assert_eq!(with_footer, without);
        assert_eq!(
            with_footer,
            "\n<file>\n<path>x.txt</path>\n<content>\nbody\n</content>\n</file>"
        );
    }

    #[test]
    fn file_section_applies_line_numbers() {
        let section = format_file_section(
            "test.txt",
            "test content",
            HeaderStyle::Separator,
            false,
            true,
            " > ",
        );
        assert!(section.contains("1 > test content"));
    }

    #[test]
    fn tree_section_envelopes() {
        assert_eq!(
            format_tree_section("└── a", HeaderStyle::Newline),
            "\n\n└── a"
        );
        assert_eq!(
            format_tree_section("└── a", HeaderStyle::Separator),
            "\n=== Directory Tree ===\n└── a"
        );
        assert_eq!(
            format_tree_section("└── a", HeaderStyle::Markdown),
            "\n## Directory Tree\n└── a"
        );
        assert_eq!(
            format_tree_section("└── a", HeaderStyle::Xml),
            "\n<directory_tree>\n└── a\n</directory_tree>"
        );
    }
}

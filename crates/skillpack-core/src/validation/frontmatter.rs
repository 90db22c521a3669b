//! Minimal frontmatter reader for `SKILL.md`.
//!
//! Only the leading `---` delimited block is read, and only as flat
//! `key: value` lines. Nesting, lists and multi-line values are not
//! supported; a single field (`name`) is consumed.

use std::collections::HashMap;

const DELIMITER: &str = "---\n";
const CLOSING: &str = "\n---\n";

/// Returns the raw text between the opening and closing `---` lines.
///
/// The document must start with a line of exactly three dashes; the block
/// ends at the first following line of exactly three dashes that is itself
/// terminated by a newline. CRLF line endings are treated as LF.
#[must_use]
pub fn frontmatter_block(content: &str) -> Option<String> {
    let content = content.replace("\r\n", "\n");
    let body = content.strip_prefix(DELIMITER)?;
    let end = body.find(CLOSING)?;
    Some(body[..end].to_string())
}

/// Parses flat `key: value` lines; quotes around values are trimmed.
///
/// Lines without a `:` are ignored; a repeated key keeps its last value.
#[must_use]
pub fn parse_simple_mapping(block: &str) -> HashMap<String, String> {
    block
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// Extracts the trimmed, non-empty frontmatter `name` of a document.
///
/// # Examples
///
/// ```
/// use skillpack_core::validation::frontmatter::extract_skill_name;
///
/// let doc = "---\nname: \"echo-tool\"\ndescription: echoes\n---\n# Echo\n";
/// assert_eq!(extract_skill_name(doc).as_deref(), Some("echo-tool"));
///
/// assert_eq!(extract_skill_name("# No frontmatter\n"), None);
/// ```
#[must_use]
pub fn extract_skill_name(content: &str) -> Option<String> {
    let block = frontmatter_block(content)?;
    let name = parse_simple_mapping(&block).remove("name")?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_extraction() {
        let doc = "---\nname: a\n---\nbody\n";
        assert_eq!(frontmatter_block(doc).as_deref(), Some("name: a"));
    }

    #[test]
    fn test_block_requires_leading_delimiter() {
        assert_eq!(frontmatter_block("\n---\nname: a\n---\n"), None);
        assert_eq!(frontmatter_block("----\nname: a\n---\n"), None);
    }

    #[test]
    fn test_block_requires_closing_delimiter() {
        assert_eq!(frontmatter_block("---\nname: a\n"), None);
        assert_eq!(frontmatter_block("---\nname: a\n---"), None);
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(frontmatter_block("---\n\n---\n").as_deref(), Some(""));
        assert_eq!(frontmatter_block("---\n---\n"), None);
    }

    #[test]
    fn test_block_stops_at_first_closing_line() {
        let doc = "---\nname: a\n---\nmore\n---\n";
        assert_eq!(frontmatter_block(doc).as_deref(), Some("name: a"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = "---\r\nname: echo-tool\r\n---\r\nbody\r\n";
        assert_eq!(extract_skill_name(doc).as_deref(), Some("echo-tool"));
    }

    #[test]
    fn test_mapping_trims_quotes_and_whitespace() {
        let mapping = parse_simple_mapping("name:  'echo-tool' \ntitle: \"Echo: Tool\"\nnot a pair");
        assert_eq!(mapping["name"], "echo-tool");
        assert_eq!(mapping["title"], "Echo: Tool");
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_missing_or_empty_name() {
        assert_eq!(extract_skill_name("---\ndescription: x\n---\n"), None);
        assert_eq!(extract_skill_name("---\nname:   \n---\n"), None);
        assert_eq!(extract_skill_name("---\nname: \"\"\n---\n"), None);
    }

    #[test]
    fn test_last_name_wins() {
        let doc = "---\nname: first\nname: second\n---\n";
        assert_eq!(extract_skill_name(doc).as_deref(), Some("second"));
    }
}

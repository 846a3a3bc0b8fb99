//! Fixed fragments and the shared building blocks of every section

use crate::config::SectionBlock;
use crate::helpers::{html_escape, labeled};

/// Shown while a section's data is in flight
pub const LOADING: &str = r#"<div class="section"><p>Loading...</p></div>"#;

/// Shown for a route that names no section
pub const NOT_FOUND: &str = r#"<div class="section"><h2>Page Not Found</h2><p>The requested page could not be found.</p></div>"#;

/// Shown for any fetch, decode or render failure
pub const ERROR: &str = r#"<div class="section"><h2>Error</h2><p>Failed to load content. Please try again later.</p></div>"#;

/// Placeholder glyph used when a staff member has no photo
pub const PHOTO_PLACEHOLDER: &str = r#"<div class="staff-photo placeholder">👤</div>"#;

/// Wrap rendered content in the section container
pub fn section(body: &str) -> String {
    format!("<div class=\"section\">\n{}</div>\n", body)
}

pub fn heading(level: u8, title: &str) -> String {
    format!("<h{level}>{}</h{level}>\n", html_escape(title))
}

/// The `section-info` block; empty when the block has no entries
pub fn info_block(block: &SectionBlock) -> String {
    if block.info.is_empty() {
        return String::new();
    }

    let lines: String = block
        .info
        .iter()
        .map(|(label, value)| labeled(label, &html_escape(value)))
        .collect::<Vec<_>>()
        .join("\n");

    format!("<div class=\"section-info\">\n{}\n</div>\n", lines)
}

/// The footnote of a block, rendered in a div of the given class
pub fn note(block: &SectionBlock, class: &str) -> String {
    match block.note.as_deref() {
        Some(note) if !note.is_empty() => format!(
            "<div class=\"{}\"><strong>Note:</strong> {}</div>\n",
            class,
            html_escape(note)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_block_keeps_order() {
        let block = SectionBlock {
            info: [("Timing", "8:30"), ("Room", "SH-1")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            note: None,
        };
        let html = info_block(&block);
        let timing = html.find("Timing").unwrap();
        let room = html.find("Room").unwrap();
        assert!(timing < room);
        assert!(html.starts_with("<div class=\"section-info\">"));
    }

    #[test]
    fn test_empty_blocks_render_nothing() {
        let block = SectionBlock::default();
        assert_eq!(info_block(&block), "");
        assert_eq!(note(&block, "note"), "");
    }

    #[test]
    fn test_note_is_escaped() {
        let block = SectionBlock {
            note: Some("Bring <laptops>".to_string()),
            ..SectionBlock::default()
        };
        assert_eq!(
            note(&block, "note"),
            "<div class=\"note\"><strong>Note:</strong> Bring &lt;laptops&gt;</div>\n"
        );
    }
}

//! Content module - section data records and Markdown processing

mod markdown;
pub mod records;

pub use markdown::MarkdownRenderer;
pub use records::Field;

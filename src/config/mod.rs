//! Configuration module

mod site;

pub use site::GradingRow;
pub use site::HighlightConfig;
pub use site::LoaderConfig;
pub use site::SectionBlock;
pub use site::SectionsConfig;
pub use site::SiteConfig;

//! List sections and their data sources

use anyhow::Result;

use crate::section::Section;
use crate::CourseSite;

/// One row of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatus {
    pub section: Section,
    pub path: String,
    pub exists: bool,
}

/// Every section with the data file it reads
pub fn sources(site: &CourseSite) -> Vec<SourceStatus> {
    let loader = site.loader();
    Section::ALL
        .into_iter()
        .map(|section| {
            let path = loader.resource_path(section);
            let exists = site.base_dir.join(&path).is_file();
            SourceStatus {
                section,
                path,
                exists,
            }
        })
        .collect()
}

/// Print the section listing
pub fn run(site: &CourseSite) -> Result<()> {
    let sources = sources(site);
    println!("Sections ({}):", sources.len());
    for source in sources {
        println!(
            "  {:<14} {:<28} {}",
            source.section.id(),
            source.path,
            if source.exists { "ok" } else { "missing" }
        );
    }
    Ok(())
}

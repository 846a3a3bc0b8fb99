//! Per-section templates
//!
//! Every section maps to exactly one template function. A template takes the
//! raw body of the section's data file and returns the full fragment written
//! into the content region.

pub mod fragments;
mod staff;
mod tables;

use serde::de::DeserializeOwned;

use crate::config::{SectionsConfig, SiteConfig};
use crate::content::MarkdownRenderer;
use crate::error::LoadError;
use crate::helpers::{html_escape, table};
use crate::section::Section;

use fragments::{heading, note, section};

/// A section template
pub type Template = fn(&SectionRenderer, &str) -> Result<String, LoadError>;

/// Renders section data into HTML fragments
pub struct SectionRenderer {
    markdown: MarkdownRenderer,
    sections: SectionsConfig,
}

impl SectionRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            markdown: MarkdownRenderer::with_options(&config.highlight),
            sections: config.sections.clone(),
        }
    }

    /// The template bound to a section
    pub fn template(section: Section) -> Template {
        match section {
            Section::About => Self::about,
            Section::Lectures => Self::lectures,
            Section::Labs => Self::labs,
            Section::Assignments => Self::assignments,
            Section::Project => Self::project,
            Section::Examinations => Self::examinations,
            Section::Resources => Self::resources,
            Section::CoursePolicy => Self::course_policy,
            Section::Staff => Self::staff,
        }
    }

    /// Render the body of a section's data file
    pub fn render(&self, section: Section, source: &str) -> Result<String, LoadError> {
        Self::template(section)(self, source)
    }

    pub(crate) fn config(&self) -> &SectionsConfig {
        &self.sections
    }

    fn about(&self, source: &str) -> Result<String, LoadError> {
        let mut body = self.markdown.render(source)?;
        body.push_str(&heading(3, "Graded Components"));
        body.push_str(&self.grading_table());
        body.push_str(&note(&self.sections.about, "note"));
        Ok(section(&body))
    }

    fn grading_table(&self) -> String {
        let rows = &self.sections.grading;
        // widened; weights come from user config
        let total: u64 = rows.iter().map(|row| u64::from(row.weight)).sum();

        let mut body: String = rows
            .iter()
            .map(|row| {
                crate::helpers::table_row([
                    html_escape(&row.component),
                    row.weight.to_string(),
                    html_escape(&row.details),
                ])
            })
            .collect();
        body.push_str(&crate::helpers::table_row([
            "<strong>Total</strong>".to_string(),
            format!("<strong>{}</strong>", total),
            String::new(),
        ]));

        table(&["Component", "Weightage (%)", "Details"], &body)
    }

    fn project(&self, source: &str) -> Result<String, LoadError> {
        self.titled_markdown("Project", source)
    }

    fn course_policy(&self, source: &str) -> Result<String, LoadError> {
        self.titled_markdown("Course Policy", source)
    }

    fn titled_markdown(&self, title: &str, source: &str) -> Result<String, LoadError> {
        let html = self.markdown.render(source)?;
        Ok(section(&format!("{}{}", heading(2, title), html)))
    }
}

/// Decode a JSON data file, tagging failures with the file name
pub(crate) fn parse<T: DeserializeOwned>(section: Section, source: &str) -> Result<T, LoadError> {
    serde_json::from_str(source).map_err(|source| LoadError::Json {
        file: section.source().file,
        source,
    })
}

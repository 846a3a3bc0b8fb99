//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,

    // Directory
    pub data_dir: String,
    pub assets_dir: String,
    pub public_dir: String,

    // Navigation
    pub default_section: String,
    pub theme_storage_key: String,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub sections: SectionsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Course Website".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: String::new(),

            data_dir: "data".to_string(),
            assets_dir: "assets".to_string(),
            public_dir: "public".to_string(),

            default_section: "about".to_string(),
            theme_storage_key: "theme".to_string(),

            highlight: HighlightConfig::default(),
            loader: LoaderConfig::default(),
            sections: SectionsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting inside Markdown sections
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Content loader behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Drop a response if a newer render started while it was in flight
    pub discard_stale: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            discard_stale: true,
        }
    }
}

/// Static text blocks shown around the data-driven parts of each section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub about: SectionBlock,
    pub grading: Vec<GradingRow>,
    pub lectures: SectionBlock,
    pub tutorials: SectionBlock,
    pub labs: SectionBlock,
    pub assignments: SectionBlock,
    pub examinations: SectionBlock,
    pub resources: SectionBlock,
    pub staff: SectionBlock,
}

/// An ordered `label: value` info block plus an optional footnote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionBlock {
    pub info: IndexMap<String, String>,
    pub note: Option<String>,
}

impl SectionBlock {
    fn info<const N: usize>(pairs: [(&str, &str); N]) -> Self {
        Self {
            info: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            note: None,
        }
    }

    fn note(note: &str) -> Self {
        Self {
            info: IndexMap::new(),
            note: Some(note.to_string()),
        }
    }
}

/// One row of the grading breakdown appended to the About section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingRow {
    pub component: String,
    pub weight: u32,
    #[serde(default)]
    pub details: String,
}

impl GradingRow {
    fn new(component: &str, weight: u32, details: &str) -> Self {
        Self {
            component: component.to_string(),
            weight,
            details: details.to_string(),
        }
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        let timings = [
            ("Timing", "8:30 - 9:55"),
            ("Section A", "SH-1"),
            ("Section B", "SH-2"),
        ];

        Self {
            about: SectionBlock::note(
                "The course instructors reserve the right to make modifications to the above \
                 distribution based on the progress of the course.",
            ),
            grading: vec![
                GradingRow::new("Quizzes", 10, "Two quizzes: 5% each"),
                GradingRow::new(
                    "Paper Exams",
                    30,
                    "Mid-semester and End-semester: 15% each",
                ),
                GradingRow::new("Lab Exams", 30, "Mid-semester and End-semester: 15% each"),
                GradingRow::new(
                    "Programming Assignments",
                    10,
                    "Assignment 1 and 2: 5% each",
                ),
                GradingRow::new("Lab Submissions & Paper Assignments", 10, ""),
                GradingRow::new("Project", 10, ""),
            ],
            lectures: SectionBlock::info(timings),
            tutorials: SectionBlock::info(timings),
            labs: SectionBlock::info([
                ("Timing", "14:00 - 17:00"),
                ("Location", "H-105"),
                ("Note", "Laptops are required for all lab sessions."),
            ]),
            assignments: SectionBlock::info([(
                "Note",
                "All submissions will be made through GitHub Classroom or HackerRank.",
            )]),
            examinations: SectionBlock::note(
                "More examinations may be added as the semester progresses. \
                 This is not the final schedule.",
            ),
            resources: SectionBlock::default(),
            staff: SectionBlock::note(
                "Please email a TA at least 24 hours before showing up to their office hours.",
            ),
        }
    }
}

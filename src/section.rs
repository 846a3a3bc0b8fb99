//! Section identifiers and their data sources

use std::fmt;
use std::str::FromStr;

/// One top-level content page of the course site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    About,
    Lectures,
    Labs,
    Assignments,
    Project,
    Examinations,
    Resources,
    CoursePolicy,
    Staff,
}

/// How a section's data file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Markdown,
    Json,
}

/// The static resource backing a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// File name inside the data directory
    pub file: &'static str,
    pub kind: SourceKind,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 9] = [
        Section::About,
        Section::Lectures,
        Section::Labs,
        Section::Assignments,
        Section::Project,
        Section::Examinations,
        Section::Resources,
        Section::CoursePolicy,
        Section::Staff,
    ];

    /// Routing key used in the address-bar fragment
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Lectures => "lectures",
            Section::Labs => "labs",
            Section::Assignments => "assignments",
            Section::Project => "project",
            Section::Examinations => "examinations",
            Section::Resources => "resources",
            Section::CoursePolicy => "course-policy",
            Section::Staff => "staff",
        }
    }

    /// Label shown in the sidebar
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Lectures => "Lectures",
            Section::Labs => "Labs",
            Section::Assignments => "Assignments",
            Section::Project => "Project",
            Section::Examinations => "Examinations",
            Section::Resources => "Resources",
            Section::CoursePolicy => "Course Policy",
            Section::Staff => "Staff",
        }
    }

    pub fn source(self) -> Source {
        use SourceKind::*;
        let (file, kind) = match self {
            Section::About => ("about.md", Markdown),
            Section::Lectures => ("lectures.json", Json),
            Section::Labs => ("labs.json", Json),
            Section::Assignments => ("assignments.json", Json),
            Section::Project => ("project.md", Markdown),
            Section::Examinations => ("examinations.json", Json),
            Section::Resources => ("resources.json", Json),
            Section::CoursePolicy => ("policy.md", Markdown),
            Section::Staff => ("staff.json", Json),
        };
        Source { file, kind }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a known section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

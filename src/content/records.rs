//! Section data records (the JSON data files)
//!
//! Records are loosely typed: every field accepts any JSON scalar. A missing
//! field, `null`, `""`, `false` or `0` is simply empty. Only the top-level arrays are
//! structural; a missing required array makes the whole file malformed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// A single loosely-typed record field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field(Option<String>);

impl Field {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The field text, or the empty string when absent
    pub fn text(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null | Value::Bool(false) => Field(None),
            Value::Bool(true) => Field::new("true"),
            Value::String(s) => Field::new(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => Field(None),
            Value::Number(n) => Field(Some(n.to_string())),
            other => Field(Some(other.to_string())),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Lecture {
    pub number: Field,
    #[serde(rename = "sectionA")]
    pub section_a: Field,
    #[serde(rename = "sectionB")]
    pub section_b: Field,
    pub topic: Field,
    pub slides: Field,
    pub references: Field,
}

/// Tutorials share one date for both sections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tutorial {
    pub number: Field,
    pub date: Field,
    pub topic: Field,
    pub slides: Field,
    pub references: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LecturesFile {
    pub lectures: Vec<Lecture>,
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Lab {
    pub number: Field,
    pub date: Field,
    pub topic: Field,
    pub slides: Field,
    pub activity: Field,
    pub references: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabsFile {
    pub labs: Vec<Lab>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Assignment {
    pub number: Field,
    pub topic: Field,
    pub announcement: Field,
    pub deadline: Field,
    pub link: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentsFile {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Examination {
    pub serial: Field,
    #[serde(rename = "type")]
    pub kind: Field,
    pub start: Field,
    pub end: Field,
    pub link: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExaminationsFile {
    pub examinations: Vec<Examination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub serial: Field,
    #[serde(rename = "type")]
    pub kind: Field,
    pub title: Field,
    pub link: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesFile {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Instructor {
    pub name: Field,
    pub email: Field,
    pub photo: Field,
    pub website: Field,
    #[serde(rename = "researchLab")]
    pub research_lab: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeachingAssistant {
    pub name: Field,
    pub email: Field,
    pub photo: Field,
    pub hours: Field,
    pub location: Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffFile {
    pub instructors: Vec<Instructor>,
    pub tas: Vec<TeachingAssistant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accepts_scalars() {
        let fields: Vec<Field> =
            serde_json::from_str(r#"["Intro", 3, 2.5, true, null, ""]"#).unwrap();
        let texts: Vec<&str> = fields.iter().map(Field::text).collect();
        assert_eq!(texts, vec!["Intro", "3", "2.5", "true", "", ""]);
        assert!(fields[4].is_empty());
        assert!(fields[5].is_empty());
    }

    #[test]
    fn test_falsy_scalars_are_empty() {
        let fields: Vec<Field> = serde_json::from_str(r#"[false, 0, 0.0, -0.0, 10]"#).unwrap();
        assert!(fields[..4].iter().all(Field::is_empty));
        assert_eq!(fields[4].text(), "10");

        let file: LabsFile = serde_json::from_str(
            r#"{"labs": [{"number": 0, "topic": "Setup", "slides": false}]}"#,
        )
        .unwrap();
        assert!(file.labs[0].number.is_empty());
        assert!(file.labs[0].slides.is_empty());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let file: LecturesFile =
            serde_json::from_str(r#"{"lectures": [{"number": 1, "topic": "Intro"}]}"#).unwrap();
        let lecture = &file.lectures[0];
        assert_eq!(lecture.number.text(), "1");
        assert!(lecture.section_a.is_empty());
        assert!(lecture.references.is_empty());
        assert!(file.tutorials.is_empty());
    }

    #[test]
    fn test_required_array_missing() {
        assert!(serde_json::from_str::<LabsFile>(r#"{"lab": []}"#).is_err());
        assert!(serde_json::from_str::<StaffFile>(r#"{"instructors": []}"#).is_err());
    }

    #[test]
    fn test_renamed_fields() {
        let file: StaffFile = serde_json::from_str(
            r#"{"instructors": [{"name": "A", "researchLab": "Systems"}], "tas": []}"#,
        )
        .unwrap();
        assert_eq!(file.instructors[0].research_lab.text(), "Systems");

        let exam: Examination = serde_json::from_str(r#"{"serial": 1, "type": "Quiz"}"#).unwrap();
        assert_eq!(exam.kind.text(), "Quiz");
    }
}

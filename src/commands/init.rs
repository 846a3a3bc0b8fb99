//! Initialize a new course site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CourseSite;

const CONFIG: &str = r#"# Course Site Configuration

# Site
title: Introduction to Programming
subtitle: ''
description: ''
author: ''

# Directory
data_dir: data
assets_dir: assets
public_dir: public

# Navigation
default_section: about
theme_storage_key: theme

# Rendering
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false

# Drop responses that arrive after a newer navigation
loader:
  discard_stale: true

# Section blocks (info lists and notes) keep their defaults unless set here
# sections:
#   examinations:
#     note: All examinations are closed book.
"#;

const ABOUT: &str = r#"# Introduction to Programming

This course introduces the fundamentals of programming in Python:
variables, control flow, functions, data structures and testing.

## Learning Outcomes

- Write and debug small programs
- Decompose problems into functions
- Use lists and dictionaries effectively
"#;

const LECTURES: &str = r#"{
  "lectures": [
    {
      "number": 1,
      "sectionA": "Sun, 12 Jan",
      "sectionB": "Mon, 13 Jan",
      "topic": "Introduction",
      "slides": "assets/lecture1.pdf",
      "references": "Chapter 1"
    },
    {
      "number": 2,
      "sectionA": "Tue, 14 Jan",
      "sectionB": "Wed, 15 Jan",
      "topic": "Variables and Types",
      "slides": "",
      "references": ""
    }
  ],
  "tutorials": [
    {
      "number": 1,
      "date": "Thu, 16 Jan",
      "topic": "Problem Solving",
      "slides": "",
      "references": ""
    }
  ]
}
"#;

const LABS: &str = r#"{
  "labs": [
    {
      "number": 1,
      "date": "Sun, 19 Jan",
      "topic": "Environment Setup",
      "slides": "",
      "activity": "assets/lab1_setup.py",
      "references": ""
    }
  ]
}
"#;

const ASSIGNMENTS: &str = r#"{
  "assignments": [
    {
      "number": 1,
      "topic": "Control Flow",
      "announcement": "Sun, 26 Jan",
      "deadline": "Sun, 2 Feb, 11:59 PM",
      "link": ""
    }
  ]
}
"#;

const PROJECT: &str = r#"Students build a small command line application in teams of two.

## Milestones

1. Proposal
2. Prototype
3. Final submission and demo
"#;

const EXAMINATIONS: &str = r#"{
  "examinations": [
    {
      "serial": 1,
      "type": "Midterm",
      "start": "Sun, 9 Mar, 10:00 AM",
      "end": "Sun, 9 Mar, 12:00 PM",
      "link": ""
    }
  ]
}
"#;

const RESOURCES: &str = r#"{
  "resources": [
    {
      "serial": 1,
      "type": "Book",
      "title": "Think Python",
      "link": "https://greenteapress.com/wp/think-python-2e/"
    }
  ]
}
"#;

const POLICY: &str = r#"## Academic Integrity

All submitted work must be your own. Discussing ideas is encouraged,
sharing code is not.

## Late Submissions

Late submissions lose 10% per day, up to three days.
"#;

const STAFF: &str = r#"{
  "instructors": [
    {
      "name": "Jane Doe",
      "email": "jane.doe@example.edu",
      "photo": "",
      "website": "example.edu/~jane",
      "researchLab": "Systems Lab"
    }
  ],
  "tas": [
    {
      "name": "John Smith",
      "email": "john.smith@example.edu",
      "photo": "",
      "hours": "Mon 2-4 PM",
      "location": "Room 101"
    }
  ]
}
"#;

const LAB_ACTIVITY: &str = r#"print("Hello, lab!")
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched, so running it twice is harmless.
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("data"))?;
    fs::create_dir_all(target_dir.join("assets"))?;

    let files = [
        ("_config.yml", CONFIG),
        ("data/about.md", ABOUT),
        ("data/lectures.json", LECTURES),
        ("data/labs.json", LABS),
        ("data/assignments.json", ASSIGNMENTS),
        ("data/project.md", PROJECT),
        ("data/examinations.json", EXAMINATIONS),
        ("data/resources.json", RESOURCES),
        ("data/policy.md", POLICY),
        ("data/staff.json", STAFF),
        ("assets/lab1_setup.py", LAB_ACTIVITY),
    ];

    for (relative, content) in files {
        let path = target_dir.join(relative);
        if path.exists() {
            tracing::debug!("Keeping existing {:?}", path);
            continue;
        }
        fs::write(&path, content)?;
        tracing::debug!("Created {:?}", path);
    }

    Ok(())
}

/// Run the init command for an existing site
pub fn run(site: &CourseSite) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_every_source() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        for section in Section::ALL {
            let path = dir.path().join("data").join(section.source().file);
            assert!(path.is_file(), "missing {:?}", path);
        }

        let site = CourseSite::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Introduction to Programming");
        assert!(site.config.loader.discard_stale);
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/about.md"), "# Mine").unwrap();

        init_site(dir.path()).unwrap();

        let about = fs::read_to_string(dir.path().join("data/about.md")).unwrap();
        assert_eq!(about, "# Mine");
    }

    #[tokio::test]
    async fn test_scaffold_renders_cleanly() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let loader = CourseSite::new(dir.path()).unwrap().loader();
        for section in Section::ALL {
            assert!(loader.load(section).await.is_ok(), "{} failed", section);
        }
    }
}

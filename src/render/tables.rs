//! Table-backed sections: lectures, labs, assignments, examinations, resources

use super::fragments::{heading, info_block, note, section};
use super::{parse, SectionRenderer};
use crate::content::records::{
    AssignmentsFile, ExaminationsFile, LabsFile, LecturesFile, ResourcesFile,
};
use crate::error::LoadError;
use crate::helpers::{optional_download, optional_link, table, table_row, text};
use crate::section::Section;

const LECTURE_HEADERS: [&str; 6] = [
    "Lecture Number",
    "Section A",
    "Section B",
    "Topic",
    "Slides",
    "References",
];

const TUTORIAL_HEADERS: [&str; 6] = [
    "Tutorial Number",
    "Section A",
    "Section B",
    "Topic",
    "Slides",
    "References",
];

impl SectionRenderer {
    pub(super) fn lectures(&self, source: &str) -> Result<String, LoadError> {
        let data: LecturesFile = parse(Section::Lectures, source)?;
        let sections = self.config();

        let lecture_rows: String = data
            .lectures
            .iter()
            .map(|lecture| {
                table_row([
                    text(&lecture.number),
                    text(&lecture.section_a),
                    text(&lecture.section_b),
                    text(&lecture.topic),
                    optional_link(&lecture.slides, "Slides"),
                    optional_link(&lecture.references, "References"),
                ])
            })
            .collect();

        let tutorial_rows: String = data
            .tutorials
            .iter()
            .map(|tutorial| {
                table_row([
                    text(&tutorial.number),
                    text(&tutorial.date),
                    text(&tutorial.date),
                    text(&tutorial.topic),
                    optional_link(&tutorial.slides, "Slides"),
                    optional_link(&tutorial.references, "References"),
                ])
            })
            .collect();

        let body = [
            heading(2, "Lectures"),
            info_block(&sections.lectures),
            table(&LECTURE_HEADERS, &lecture_rows),
            heading(3, "Tutorials"),
            info_block(&sections.tutorials),
            table(&TUTORIAL_HEADERS, &tutorial_rows),
        ]
        .concat();

        Ok(section(&body))
    }

    pub(super) fn labs(&self, source: &str) -> Result<String, LoadError> {
        let data: LabsFile = parse(Section::Labs, source)?;

        let rows: String = data
            .labs
            .iter()
            .map(|lab| {
                table_row([
                    text(&lab.number),
                    text(&lab.date),
                    text(&lab.topic),
                    optional_link(&lab.slides, "Slides"),
                    optional_download(&lab.activity, "Activity"),
                    optional_link(&lab.references, "References"),
                ])
            })
            .collect();

        let body = [
            heading(2, "Labs"),
            info_block(&self.config().labs),
            table(
                &["Lab Number", "Date", "Topic", "Slides", "Activity", "References"],
                &rows,
            ),
        ]
        .concat();

        Ok(section(&body))
    }

    pub(super) fn assignments(&self, source: &str) -> Result<String, LoadError> {
        let data: AssignmentsFile = parse(Section::Assignments, source)?;

        let rows: String = data
            .assignments
            .iter()
            .map(|assignment| {
                table_row([
                    text(&assignment.number),
                    text(&assignment.topic),
                    text(&assignment.announcement),
                    text(&assignment.deadline),
                    optional_link(&assignment.link, "Link"),
                ])
            })
            .collect();

        let body = [
            heading(2, "Assignments"),
            info_block(&self.config().assignments),
            table(
                &[
                    "Assignment Number",
                    "Topic",
                    "Announcement",
                    "Deadline",
                    "Link",
                ],
                &rows,
            ),
        ]
        .concat();

        Ok(section(&body))
    }

    pub(super) fn examinations(&self, source: &str) -> Result<String, LoadError> {
        let data: ExaminationsFile = parse(Section::Examinations, source)?;
        let block = &self.config().examinations;

        let rows: String = data
            .examinations
            .iter()
            .map(|exam| {
                table_row([
                    text(&exam.serial),
                    text(&exam.kind),
                    text(&exam.start),
                    text(&exam.end),
                    optional_link(&exam.link, "Link"),
                ])
            })
            .collect();

        let body = [
            heading(2, "Examinations"),
            info_block(block),
            table(
                &["Serial Number", "Exam Type", "Start Time", "End Time", "Link"],
                &rows,
            ),
            note(block, "note"),
        ]
        .concat();

        Ok(section(&body))
    }

    pub(super) fn resources(&self, source: &str) -> Result<String, LoadError> {
        let data: ResourcesFile = parse(Section::Resources, source)?;
        let block = &self.config().resources;

        let rows: String = data
            .resources
            .iter()
            .map(|resource| {
                table_row([
                    text(&resource.serial),
                    text(&resource.kind),
                    text(&resource.title),
                    optional_link(&resource.link, "Link"),
                ])
            })
            .collect();

        let body = [
            heading(2, "Resources"),
            info_block(block),
            table(&["Serial Number", "Resource Type", "Title", "Link"], &rows),
            note(block, "note"),
        ]
        .concat();

        Ok(section(&body))
    }
}

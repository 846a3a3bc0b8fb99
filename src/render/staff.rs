//! Staff section: instructor and TA cards

use super::fragments::{heading, note, section, PHOTO_PLACEHOLDER};
use super::{parse, SectionRenderer};
use crate::content::records::StaffFile;
use crate::content::Field;
use crate::error::LoadError;
use crate::helpers::{html_escape, labeled, mail_to, text, website_url};
use crate::section::Section;

impl SectionRenderer {
    pub(super) fn staff(&self, source: &str) -> Result<String, LoadError> {
        let data: StaffFile = parse(Section::Staff, source)?;

        let instructors: String = data
            .instructors
            .iter()
            .map(|instructor| {
                let website = instructor
                    .website
                    .as_deref()
                    .map(|site| {
                        labeled(
                            "Website",
                            &format!(
                                r#"<a href="{}" target="_blank">{}</a>"#,
                                html_escape(&website_url(site)),
                                html_escape(site)
                            ),
                        )
                    })
                    .unwrap_or_default();
                let lab = optional_line("Research Lab", &instructor.research_lab);

                card(&instructor.name, &instructor.email, &instructor.photo, &[website, lab])
            })
            .collect();

        let tas: String = data
            .tas
            .iter()
            .map(|ta| {
                card(
                    &ta.name,
                    &ta.email,
                    &ta.photo,
                    &[
                        optional_line("TA Hours", &ta.hours),
                        optional_line("Location", &ta.location),
                    ],
                )
            })
            .collect();

        let body = [
            heading(2, "Course Staff"),
            group("Instructors", &instructors),
            group("Teaching Assistants", &tas),
            note(&self.config().staff, "staff-note"),
        ]
        .concat();

        Ok(section(&body))
    }
}

fn group(title: &str, cards: &str) -> String {
    format!(
        "<div class=\"staff-container\">\n{}<div class=\"staff-grid\">\n{}</div>\n</div>\n",
        heading(3, title),
        cards
    )
}

fn card(name: &Field, email: &Field, photo: &Field, extra: &[String]) -> String {
    let photo = match photo.as_deref() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="staff-photo">"#,
            html_escape(src),
            text(name)
        ),
        None => PHOTO_PLACEHOLDER.to_string(),
    };

    let email = email
        .as_deref()
        .map(|email| labeled("Email", &mail_to(email)))
        .unwrap_or_default();

    let mut card = format!(
        "<div class=\"staff-card\">\n{}\n<h3>{}</h3>\n{}",
        photo,
        text(name),
        email
    );
    for line in extra.iter().filter(|line| !line.is_empty()) {
        card.push_str(line);
    }
    card.push_str("\n</div>\n");
    card
}

fn optional_line(label: &str, field: &Field) -> String {
    if field.is_empty() {
        String::new()
    } else {
        labeled(label, &text(field))
    }
}

//! HTML helper functions

use crate::content::Field;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped text of a record field, empty when the field is absent
pub fn text(field: &Field) -> String {
    html_escape(field.text())
}

/// Generate an anchor tag that opens in a new tab
///
/// # Examples
/// ```ignore
/// link_to("intro.pdf", "Slides") // -> <a href="intro.pdf" target="_blank">Slides</a>
/// ```
pub fn link_to(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank">{}</a>"#,
        html_escape(href),
        html_escape(label)
    )
}

/// A new-tab link for `field`, or nothing when the field is empty
pub fn optional_link(field: &Field, label: &str) -> String {
    field
        .as_deref()
        .map(|href| link_to(href, label))
        .unwrap_or_default()
}

/// A download link for `field`, or nothing when the field is empty
pub fn optional_download(field: &Field, label: &str) -> String {
    field
        .as_deref()
        .map(|href| {
            format!(
                r#"<a href="{}" download>{}</a>"#,
                html_escape(href),
                html_escape(label)
            )
        })
        .unwrap_or_default()
}

/// Generate a mailto anchor
pub fn mail_to(email: &str) -> String {
    let email = html_escape(email);
    format!(r#"<a href="mailto:{}">{}</a>"#, email, email)
}

/// Absolute URL for a bare host such as `example.edu/~prof`
pub fn website_url(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

/// A `<p><strong>label:</strong> value</p>` line with an already-rendered value
pub fn labeled(label: &str, value_html: &str) -> String {
    format!(
        "<p><strong>{}:</strong> {}</p>",
        html_escape(label),
        value_html
    )
}

/// A table row from already-rendered cells
pub fn table_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut row = String::from("<tr>");
    for cell in cells {
        row.push_str("<td>");
        row.push_str(cell.as_ref());
        row.push_str("</td>");
    }
    row.push_str("</tr>\n");
    row
}

/// A full table with a header row and pre-rendered body rows
pub fn table(headers: &[&str], rows: &str) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", html_escape(h)))
        .collect();
    format!(
        "<table>\n<thead><tr>{}</tr></thead>\n<tbody>\n{}</tbody>\n</table>\n",
        head, rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Q&A</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Q&amp;A&lt;/a&gt;"
        );
    }

    #[test]
    fn test_optional_link() {
        assert_eq!(
            optional_link(&Field::new("intro.pdf"), "Slides"),
            r#"<a href="intro.pdf" target="_blank">Slides</a>"#
        );
        assert_eq!(optional_link(&Field::default(), "Slides"), "");
    }

    #[test]
    fn test_optional_download() {
        assert!(optional_download(&Field::new("lab1.py"), "Activity").contains("download"));
        assert_eq!(optional_download(&Field::default(), "Activity"), "");
    }

    #[test]
    fn test_website_url() {
        assert_eq!(website_url("example.edu"), "https://example.edu");
        assert_eq!(website_url("http://example.edu"), "http://example.edu");
    }

    #[test]
    fn test_table_row() {
        assert_eq!(table_row(["1", ""]), "<tr><td>1</td><td></td></tr>\n");
    }
}

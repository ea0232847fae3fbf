//! HTML fragment rendering
//!
//! Every dynamic value goes through [`escape_html`].

use crate::db::StudentRecord;
use std::fmt;

pub const CONNECTED_LINE: &str = "<p>Conexión exitosa a la base de datos!</p>";
pub const ROWS_HEADER: &str = "<p>Datos cargados exitosamente:</p>";
pub const NO_DATA_LINE: &str = "<p>No se encontraron datos de prueba en la tabla 'alumnos'.</p>";

/// The HTML produced by one reporter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput(String);

impl RenderedOutput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn title_line(title: &str) -> String {
    format!("<h1>{}</h1>", escape_html(title))
}

fn student_item(student: &StudentRecord) -> String {
    format!(
        "<li>{} {}</li>",
        escape_html(&student.nombre),
        escape_html(&student.apellido)
    )
}

fn finish(lines: Vec<String>) -> RenderedOutput {
    let mut out = lines.join("\n");
    out.push('\n');
    RenderedOutput(out)
}

/// Render the connection check page: title and connection success line
pub fn render_connected(title: &str) -> RenderedOutput {
    finish(vec![title_line(title), CONNECTED_LINE.to_string()])
}

/// Render the full report for the given rows, in the given order
pub fn render_report(title: &str, students: &[StudentRecord]) -> RenderedOutput {
    let mut lines = vec![title_line(title), CONNECTED_LINE.to_string()];

    if students.is_empty() {
        lines.push(NO_DATA_LINE.to_string());
    } else {
        lines.push(ROWS_HEADER.to_string());
        lines.push("<ul>".to_string());
        lines.extend(students.iter().map(student_item));
        lines.push("</ul>".to_string());
    }

    finish(lines)
}

//! Export of recommendation results to a downloadable file.
//!
//! Content is generated from the current recommendation at the moment the
//! export is requested; nothing is cached from the results screen.
//!
//! | Format | File                      | Content                                  |
//! |--------|---------------------------|------------------------------------------|
//! | `text` | `recommended_prompts.txt` | answers, summary, grouped prompts        |
//! | `doc`  | `recommended_prompts.doc` | same, as word-processor compatible HTML  |
//! | `list` | `recommended_prompts.txt` | unique prompts, one per line             |

use crate::engine::Recommendation;
use crate::error::{Result, SurveyError};
use crate::report::{Report, NO_MATCHES_EXPORT};
use crate::types::ExportFormat;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the export body for a format.
pub fn render(format: ExportFormat, recommendation: &Recommendation) -> String {
    let report = Report::new(recommendation);
    match format {
        ExportFormat::Text => render_text(&report),
        ExportFormat::Doc => render_doc(&report),
        ExportFormat::List => render_list(&report),
    }
}

/// Write the export into `dir` and return the path of the written file.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    recommendation: &Recommendation,
) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(SurveyError::export(format!(
            "export directory {} does not exist",
            dir.display()
        )));
    }

    let path = dir.join(format.file_name());
    fs::write(&path, render(format, recommendation))?;
    info!("Exported {} results to {}", format, path.display());
    Ok(path)
}

fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();
    for (label, value) in report.answer_lines() {
        let _ = writeln!(out, "{}: {}", label, value);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", report.summary());
    out.push('\n');

    let grouping = &report.recommendation().grouping;
    if grouping.is_empty() {
        out.push_str(NO_MATCHES_EXPORT);
    } else {
        for (category, prompts) in grouping.iter() {
            let _ = writeln!(out, "{}:", category);
            for prompt in prompts {
                let _ = writeln!(out, " - {}", prompt);
            }
            out.push('\n');
        }
    }
    out
}

fn render_doc(report: &Report<'_>) -> String {
    let mut body = String::new();
    for (label, value) in report.answer_lines() {
        let _ = writeln!(
            body,
            "<p><strong>{}:</strong> {}</p>",
            escape_html(label),
            escape_html(&value)
        );
    }
    let _ = writeln!(body, "<p>{}</p>", escape_html(&report.summary()));

    let grouping = &report.recommendation().grouping;
    if grouping.is_empty() {
        let _ = writeln!(body, "<p>{}</p>", NO_MATCHES_EXPORT);
    } else {
        for (category, prompts) in grouping.iter() {
            let _ = writeln!(body, "<h3>{}</h3>", escape_html(category));
            body.push_str("<ul>\n");
            for prompt in prompts {
                let _ = writeln!(body, "<li>{}</li>", escape_html(prompt));
            }
            body.push_str("</ul>\n");
        }
    }

    format!(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n\
         <head><meta charset=\"utf-8\"><title>Recommended Prompts</title></head>\n\
         <body>\n{}</body>\n</html>\n",
        body
    )
}

fn render_list(report: &Report<'_>) -> String {
    report.recommendation().grouping.all_prompts().join("\n")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

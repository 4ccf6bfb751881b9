//! Box-drawn credential table.
//!
//! Renders conn_id → credential as a two-column table with passwords masked.
//!
//! ```text
//! ┌─────────┬──────────────────────────────────────────────┐
//! │ conn_id │ credential (passwords can only be seen ...)  │
//! ├─────────┼──────────────────────────────────────────────┤
//! │ db1     │ {"kind":"database",...,"password":"*******"} │
//! └─────────┴──────────────────────────────────────────────┘
//! ```

use unicode_width::UnicodeWidthStr;

use crate::core::types::CredentialMap;
use crate::error::Result;

/// Header of the first column.
pub const CONN_ID_HEADER: &str = "conn_id";

/// Header of the second column.
pub const CREDENTIAL_HEADER: &str =
    "credential (passwords can only be seen when loading the specific conn_id)";

/// Render every credential, masking passwords, in map order.
///
/// A non-empty password becomes one `*` per character, so its length is
/// still visible. Each record is shown as single-line JSON.
pub fn render(credentials: &CredentialMap) -> Result<String> {
    let header = [CONN_ID_HEADER.to_string(), CREDENTIAL_HEADER.to_string()];

    let mut rows = Vec::with_capacity(credentials.len());
    for (conn_id, credential) in credentials {
        let json = serde_json::to_string(&credential.redacted())?;
        rows.push([conn_id.clone(), json]);
    }

    let mut widths = header.clone().map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border('┌', '┬', '┐', &widths));
    lines.push(row_line(&header, &widths, center));
    lines.push(border('├', '┼', '┤', &widths));
    for row in &rows {
        lines.push(row_line(row, &widths, ljust));
    }
    lines.push(border('└', '┴', '┘', &widths));

    Ok(lines.join("\n"))
}

fn border(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let mid = mid.to_string();
    format!("{}{}{}", left, segments.join(mid.as_str()), right)
}

fn row_line(cells: &[String], widths: &[usize], align: fn(&str, usize) -> String) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {} ", align(cell, *width)))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Left-justify to `width` display columns.
fn ljust(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Center in `width` display columns; the odd space goes to the right.
fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
}

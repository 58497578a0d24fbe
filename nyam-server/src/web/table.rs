//! Generic result table
//!
//! Renders a list of uniformly-shaped rows as an HTML table: headers
//! come from the first row's keys, null shows as an em-dash, booleans
//! as yes/no, and ISO-timestamp-looking strings as dates. Stateless —
//! no pagination, no sorting.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::db::row::JsonRow;

/// Render a result set. An empty set renders a placeholder paragraph.
pub fn render_table(rows: &[JsonRow]) -> String {
    let Some(first) = rows.first() else {
        return r#"<p class="empty">No rows.</p>"#.to_string();
    };

    let mut html = String::from("<table>\n<thead>\n<tr>");
    for header in first.keys() {
        html.push_str("<th>");
        html.push_str(&escape_html(header));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for header in first.keys() {
            html.push_str("<td>");
            let cell = row.get(header).unwrap_or(&Value::Null);
            html.push_str(&format_value(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// Format one cell.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => match parse_timestamp(s) {
            Some(ts) => ts.format("%d/%m/%Y %H:%M").to_string(),
            None => escape_html(s),
        },
        // Arrays/objects never appear in flat query rows; show raw JSON
        other => escape_html(&other.to_string()),
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }
    None
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

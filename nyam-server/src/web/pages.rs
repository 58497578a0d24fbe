//! Page handlers
//!
//! The data dump and the report menu are rendered entirely server-side
//! from query rows; only the insert forms (served from `assets/`) carry
//! client-side script.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::table::{escape_html, render_table};
use crate::core::ServerState;
use crate::db::reports::{self, ReportKind};
use crate::db::{dump, row::JsonRow};
use crate::utils::AppResult;

/// Shared page chrome: one stylesheet, one small nav.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Ñam Ñam</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
<nav>
  <a href="/">Ñam Ñam</a>
  <a href="/insert">Insert</a>
  <a href="/data">Data</a>
  <a href="/queries">Queries</a>
</nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
        body = body,
    ))
}

/// GET /
pub async fn index() -> Html<String> {
    layout(
        "Home",
        "<h1>Ñam Ñam</h1>\n\
         <p>Demo database for a fictitious restaurant.</p>\n\
         <ul>\n\
         <li><a href=\"/insert\">Insert records</a> — forms for the six tables</li>\n\
         <li><a href=\"/data\">View data</a> — full dump of every table</li>\n\
         <li><a href=\"/queries\">Run queries</a> — eight prepared reports</li>\n\
         </ul>",
    )
}

/// GET /data — dump of all six tables.
pub async fn data(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let tables = dump::run_all(state.pool()).await?;

    let mut body = String::from("<h1>Data</h1>\n");
    for (title, rows) in tables {
        body.push_str("<section>\n<h2>");
        body.push_str(&escape_html(title));
        body.push_str("</h2>\n");
        body.push_str(&render_table(&rows));
        body.push_str("\n</section>\n");
    }

    Ok(layout("Data", &body))
}

#[derive(Debug, Deserialize)]
pub struct ReportPageQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// GET /queries[?type=K] — the report menu, plus the selected report's
/// result table when a valid key is given.
pub async fn queries(
    State(state): State<ServerState>,
    Query(query): Query<ReportPageQuery>,
) -> AppResult<Response> {
    let selected = match query.kind.as_deref() {
        None => None,
        Some(key) => match key.parse::<ReportKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                let body = format!(
                    "<h1>Queries</h1>\n<p class=\"error\">Unknown query type: {}</p>",
                    escape_html(key)
                );
                return Ok((StatusCode::BAD_REQUEST, layout("Queries", &body)).into_response());
            }
        },
    };

    let result: Option<(ReportKind, Vec<JsonRow>)> = match selected {
        Some(kind) => Some((kind, reports::run(state.pool(), kind).await?)),
        None => None,
    };

    let mut body = String::from("<h1>Queries</h1>\n<ul class=\"reports\">\n");
    for kind in ReportKind::ALL {
        body.push_str(&format!(
            "<li><a href=\"/queries?type={key}\">{title}</a> — {description}</li>\n",
            key = kind.key(),
            title = escape_html(kind.title()),
            description = escape_html(kind.description()),
        ));
    }
    body.push_str("</ul>\n");

    if let Some((kind, rows)) = result {
        body.push_str("<section>\n<h2>");
        body.push_str(&escape_html(kind.title()));
        body.push_str("</h2>\n");
        body.push_str(&render_table(&rows));
        body.push_str("\n</section>\n");
    }

    Ok(layout("Queries", &body).into_response())
}

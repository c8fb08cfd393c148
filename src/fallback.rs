//! Response for requests no registered application claims
//!
//! `/` gets the platform's root page; every other path gets a 404 page
//! naming the path and the mount points that do exist.

use std::fmt;

/// Mount points listed on the 404 page, with a short description each
const MOUNT_POINTS: &[(&str, &str)] = &[
    ("/static", "serves static files from the project's static directory."),
    ("/data/?query", "serves aggregates from HBase."),
    (
        "/transform/<name>/?query",
        "serves aggregates transformed with a transformer from the project's transformers directory.",
    ),
];

const ROOT_BODY: &str = "ZOHMG!";
const CONTENT_TYPE: &str = "text/html";

/// A fully rendered fallback response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResponse {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl FallbackResponse {
    /// Status line as sent on the wire, e.g. `404 Not Found`
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.reason)
    }
}

impl fmt::Display for FallbackResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_line())?;
        writeln!(f, "content-type: {}", self.content_type)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

/// Build the response for `path`
pub fn handle(path: &str) -> FallbackResponse {
    if path == "/" {
        return FallbackResponse {
            status: 200,
            reason: "OK",
            content_type: CONTENT_TYPE,
            body: ROOT_BODY.to_string(),
        };
    }

    FallbackResponse {
        status: 404,
        reason: "Not Found",
        content_type: CONTENT_TYPE,
        body: not_found_page(path),
    }
}

fn not_found_page(path: &str) -> String {
    let applications: String = MOUNT_POINTS
        .iter()
        .map(|(mount, description)| {
            format!(
                "        <li>\n            <strong><![CDATA[{}]]></strong> - {}\n        </li>\n",
                mount, description
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN"
        "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">

<head>
    <title>Zohmg 404</title>
    <meta http-equiv="content-type" content="text/html;charset=utf-8" />
</head>

<body>

    <h1>404 Not Found</h1>

    <p>
    There is no application for the path
    <blockquote>
    {path}
    </blockquote>
    </p>

    <p>
    Available applications
    <ul>
{applications}    </ul>
    </p>

</body>
</html>"#,
        path = escape_html(path),
        applications = applications,
    )
}

/// Escape the characters that are significant in XHTML text content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

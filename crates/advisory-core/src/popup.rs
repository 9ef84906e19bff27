// crates/advisory-core/src/popup.rs
use crate::model::CountryAdvisory;
use serde::Serialize;
use std::fmt;

/// What the marker popup (or the advisory modal) shows for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupContent {
    pub title: String,
    pub message: String,
    pub source_url: String,
    pub sources_active: u32,
}

impl PopupContent {
    pub fn from_advisory(advisory: &CountryAdvisory) -> Self {
        Self {
            title: advisory.name.clone(),
            message: advisory.advisory_message.clone(),
            source_url: advisory.source_url.clone(),
            sources_active: advisory.sources_active,
        }
    }

    /// Popup markup for the map widget. All feed text is escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<h5>{}</h5>\n<p class=\"advisory-message\">Advisory: {}</p>\n\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Source: {}</a>",
            escape_html(&self.title),
            escape_html(&self.message),
            escape_html(&self.source_url),
            self.sources_active,
        )
    }
}

impl From<&CountryAdvisory> for PopupContent {
    fn from(advisory: &CountryAdvisory) -> Self {
        Self::from_advisory(advisory)
    }
}

impl fmt::Display for PopupContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Advisory: {}", self.message)?;
        write!(f, "Source: {} ({} active)", self.source_url, self.sources_active)
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

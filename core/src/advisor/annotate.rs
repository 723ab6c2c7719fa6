use regex::Regex;

use crate::error::{CoreError, CoreResult};

use super::model::Citation;

/// Renderable run of message text: either untouched prose or an interactive
/// reference resolved against the owning message's citation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    CitationRef {
        id: String,
        label: String,
        citation: Citation,
    },
}

impl Segment {
    /// Text this segment contributes when segments are concatenated back
    /// into the original message body.
    pub fn as_text(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::CitationRef { label, .. } => label,
        }
    }
}

/// Split `text` into plain runs and citation references, left to right.
///
/// A bracket marker `[n]` becomes a `CitationRef` only when exactly one
/// citation in the supplied list carries that id. Unmatched, duplicate or
/// malformed markers (including an unterminated `[`) stay inside the
/// surrounding plain run; no diagnostic is raised.
pub fn annotate(text: &str, citations: &[Citation]) -> CoreResult<Vec<Segment>> {
    let marker = Regex::new(r"\[(\d+)\]")
        .map_err(|_e| CoreError::InvalidInput("Regex compilation failed".to_string()))?;

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for mat in marker.find_iter(text) {
        let label = mat.as_str();
        let id = &label[1..label.len() - 1];

        let mut resolved = citations.iter().filter(|c| c.id == id);
        let citation = match (resolved.next(), resolved.next()) {
            (Some(citation), None) => citation,
            // zero or ambiguous matches: the marker stays plain text
            _ => continue,
        };

        if cursor < mat.start() {
            segments.push(Segment::Plain(text[cursor..mat.start()].to_string()));
        }
        segments.push(Segment::CitationRef {
            id: id.to_string(),
            label: label.to_string(),
            citation: citation.clone(),
        });
        cursor = mat.end();
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }

    Ok(segments)
}

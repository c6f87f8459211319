//! Error types for loading room files and picking a room

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("failed to read room file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("room file parse error at {span:?}: {message}")]
    Parse { message: String, span: Option<Span> },

    #[error("room file contains no rooms")]
    NoRooms,

    #[error("room '{name}' not found{}", format_suggestions(.suggestions))]
    RoomNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error(
        "{} rooms to choose from ({}); select one by name",
        candidates.len(),
        candidates.join(", ")
    )]
    AmbiguousRoom { candidates: Vec<String> },

    #[error("room '{room}' has no boundary loop {index} ({available} available)")]
    MissingLoop {
        room: String,
        index: usize,
        available: usize,
    },
}

impl From<toml::de::Error> for RoomError {
    fn from(err: toml::de::Error) -> Self {
        RoomError::Parse {
            message: err.message().trim().to_string(),
            span: err.span(),
        }
    }
}

impl RoomError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Parse { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, span) = match self {
            RoomError::Parse {
                message,
                span: Some(span),
            } => (message, span),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid room file")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_with_suggestions() {
        let err = RoomError::RoomNotFound {
            name: "Kitchn".to_string(),
            suggestions: vec!["Kitchen".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "room 'Kitchn' not found (did you mean Kitchen?)"
        );
    }

    #[test]
    fn test_not_found_without_suggestions() {
        let err = RoomError::RoomNotFound {
            name: "Attic".to_string(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "room 'Attic' not found");
    }

    #[test]
    fn test_ambiguous_lists_candidates() {
        let err = RoomError::AmbiguousRoom {
            candidates: vec!["Hall".to_string(), "Bath".to_string()],
        };
        assert!(err.to_string().contains("Hall, Bath"));
    }

    #[test]
    fn test_format_parse_error_with_context() {
        let source = "[[rooms]]\nname = 42\n";
        let err = RoomError::Parse {
            message: "invalid type".to_string(),
            span: Some(17..19),
        };
        let report = err.format(source, "rooms.toml");
        assert!(report.contains("rooms.toml"));
        assert!(report.contains("invalid type"));
    }

    #[test]
    fn test_format_without_span_is_plain_message() {
        let err = RoomError::NoRooms;
        assert_eq!(err.format("", "rooms.toml"), "room file contains no rooms");
    }
}

// Diagnostics reporter
//
// Front-end structural errors are collected as data and serialized into a
// single diagnostics document per invocation.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use crate::ast::Span;
use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub file: Option<PathBuf>,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            span: None,
        }
    }

    pub fn at(message: impl Into<String>, file: PathBuf, span: Span) -> Self {
        Self {
            message: message.into(),
            file: Some(file),
            span: Some(span),
        }
    }

    /// Order by file, then start position; diagnostics without a file sort first
    pub fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then_with(|| {
                let a = self.span.map(|s| (s.start, s.end));
                let b = other.span.map(|s| (s.start, s.end));
                a.cmp(&b)
            })
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, &self.span) {
            (Some(file), Some(span)) => {
                write!(f, "{}:{}: {}", file.display(), span.start, self.message)
            }
            (Some(file), None) => write!(f, "{}: {}", file.display(), self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// Build the diagnostics document, or `None` when there is nothing to report
pub fn build_document(diagnostics: &[Diagnostic]) -> Option<Document> {
    if diagnostics.is_empty() {
        return None;
    }

    let mut doc = Document::new();
    let root = doc.create_root("Diagnostics");
    for diagnostic in diagnostics {
        let node = root.create_child("Diagnostic");
        node.set_attribute("Message", diagnostic.message.as_str());
        if let Some(file) = &diagnostic.file {
            node.set_attribute("Filename", file.display().to_string());
        }
        if let Some(span) = diagnostic.span {
            if span.start.is_valid() {
                node.set_attribute("StartLine", span.start.line.to_string());
                node.set_attribute("StartColumn", span.start.column.to_string());
            }
            if span.end.is_valid() {
                node.set_attribute("EndLine", span.end.line.to_string());
                node.set_attribute("EndColumn", span.end.column.to_string());
            }
        }
    }
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Pos;

    #[test]
    fn test_empty_list_builds_no_document() {
        assert!(build_document(&[]).is_none());
    }

    #[test]
    fn test_positions_use_their_own_slots() {
        let diag = Diagnostic::at(
            "syntax error: unexpected }",
            PathBuf::from("src/main.go"),
            Span::new(Pos::new(4, 9), Pos::new(4, 10)),
        );
        let doc = build_document(&[diag]).expect("one diagnostic");
        let root = doc.root().expect("root");
        assert_eq!(root.tag(), "Diagnostics");

        let node = root.find("Diagnostic").expect("diagnostic element");
        assert_eq!(node.attribute("Message"), Some("syntax error: unexpected }"));
        assert_eq!(node.attribute("Filename"), Some("src/main.go"));
        assert_eq!(node.attribute("StartLine"), Some("4"));
        assert_eq!(node.attribute("StartColumn"), Some("9"));
        assert_eq!(node.attribute("EndLine"), Some("4"));
        assert_eq!(node.attribute("EndColumn"), Some("10"));
    }

    #[test]
    fn test_diagnostic_without_position_has_message_only() {
        let doc = build_document(&[Diagnostic::new("no Go files")]).expect("document");
        let node = doc.root().and_then(|r| r.find("Diagnostic")).expect("node");
        let keys: Vec<_> = node.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Message"]);
    }

    #[test]
    fn test_sort_orders_by_file_then_position() {
        let a = Diagnostic::at("x", "a.go".into(), Span::new(Pos::new(9, 1), Pos::NONE));
        let b = Diagnostic::at("y", "a.go".into(), Span::new(Pos::new(2, 5), Pos::NONE));
        let c = Diagnostic::at("z", "b.go".into(), Span::new(Pos::new(1, 1), Pos::NONE));
        let mut all = vec![c.clone(), a.clone(), b.clone()];
        all.sort_by(Diagnostic::sort_key_cmp);
        assert_eq!(all, vec![b, a, c]);
    }
}

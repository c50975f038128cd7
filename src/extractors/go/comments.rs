// Comment grouping and attachment
//
// Comments are extras in the tree-sitter grammar, so they are collected in a
// single pass and grouped the way the Go toolchain groups them: adjacent
// comments with no blank line between them form a group, and a comment that
// follows code on its line starts a trailing group that only extends along
// that same line.
//
// A group is a doc for the item starting on the line after it ends, and a
// trailing comment for the item ending on the line where it starts.

use tree_sitter::Node;

use crate::ast::{Comment, CommentGroup, Pos};
use crate::extractors::base::BaseExtractor;

#[derive(Debug, Default)]
pub(super) struct CommentIndex {
    groups: Vec<IndexedGroup>,
}

#[derive(Debug)]
struct IndexedGroup {
    group: CommentGroup,
    trailing: bool,
}

impl CommentIndex {
    pub(super) fn build(base: &BaseExtractor, root: &Node) -> Self {
        let mut groups: Vec<IndexedGroup> = Vec::new();

        for node in base.collect_comments(root) {
            let comment = Comment {
                text: base.get_node_text(&node),
                span: BaseExtractor::span(&node),
            };
            let after_code = !base.starts_line(&node);

            let extends_current = groups.last().is_some_and(|current| {
                let last_end = current.group.span().end.line;
                if after_code {
                    // only a trailing group can absorb a comment mid-line
                    current.trailing && comment.span.start.line == last_end
                } else if current.trailing {
                    false
                } else {
                    comment.span.start.line <= last_end + 1
                }
            });

            match groups.last_mut() {
                Some(current) if extends_current => current.group.comments.push(comment),
                _ => groups.push(IndexedGroup {
                    group: CommentGroup {
                        comments: vec![comment],
                    },
                    trailing: after_code,
                }),
            }
        }

        Self { groups }
    }

    /// The group ending on the line directly above `start`
    pub(super) fn doc_for(&self, start: Pos) -> Option<CommentGroup> {
        if !start.is_valid() {
            return None;
        }
        self.groups
            .iter()
            .find(|g| !g.trailing && g.group.span().end.line + 1 == start.line)
            .map(|g| g.group.clone())
    }

    /// The trailing group starting on the same line as, and after, `end`
    pub(super) fn trailing_for(&self, end: Pos) -> Option<CommentGroup> {
        if !end.is_valid() {
            return None;
        }
        self.groups
            .iter()
            .find(|g| {
                let start = g.group.span().start;
                g.trailing && start.line == end.line && start.column >= end.column
            })
            .map(|g| g.group.clone())
    }
}

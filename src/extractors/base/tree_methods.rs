// Tree navigation helpers for BaseExtractor

use tree_sitter::Node;

use super::extractor::BaseExtractor;

impl BaseExtractor<'_> {
    /// Named children that are not extras (comments)
    pub fn named_children<'t>(&self, node: &Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node
            .named_children(&mut cursor)
            .filter(|child| !child.is_extra())
            .collect();
        children
    }

    /// Named children carrying the given field name, in source order
    ///
    /// Separators such as `,` can share the field with the nodes they split.
    pub fn children_by_field<'t>(&self, node: &Node<'t>, field: &str) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node
            .children_by_field_name(field, &mut cursor)
            .filter(|child| child.is_named() && !child.is_extra())
            .collect();
        children
    }

    /// Find first child (named or anonymous) by type
    pub fn find_child_by_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == child_type);
        found
    }

    /// Find last child (named or anonymous) by type
    pub fn find_last_child_by_type<'t>(
        &self,
        node: &Node<'t>,
        child_type: &str,
    ) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .filter(|c| c.kind() == child_type)
            .last();
        found
    }

    pub fn count_children_of_type(&self, node: &Node, child_type: &str) -> usize {
        let mut cursor = node.walk();
        let count = node
            .children(&mut cursor)
            .filter(|c| c.kind() == child_type)
            .count();
        count
    }

    /// Named children following the first anonymous `token` child
    pub fn named_children_after<'t>(&self, node: &Node<'t>, token: &str) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .skip_while(|c| c.kind() != token)
            .skip(1)
            .filter(|c| c.is_named() && !c.is_extra())
            .collect();
        children
    }

    /// Every comment node in the tree, in source order
    pub fn collect_comments<'t>(&self, root: &Node<'t>) -> Vec<Node<'t>> {
        let mut comments = Vec::new();
        let mut cursor = root.walk();
        let mut visited_children = false;
        loop {
            let node = cursor.node();
            if !visited_children {
                if node.kind() == "comment" {
                    comments.push(node);
                }
                if cursor.goto_first_child() {
                    continue;
                }
            }
            if cursor.goto_next_sibling() {
                visited_children = false;
            } else if cursor.goto_parent() {
                visited_children = true;
            } else {
                break;
            }
        }
        comments
    }
}

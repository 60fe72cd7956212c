//! A small arena tree standing in for the host markup: tags, attributes,
//! class lists and text. The game consumes its declarative attributes and
//! reports its state back through class changes.
use std::fmt;

use crate::game_error::GameError;

pub(crate) mod json_read;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Node {
        Node {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            text: None,
            parent,
            children: Vec::new(),
        }
    }
}

/// A tree of labeled nodes. Nodes are never removed, so a [`NodeId`] handed
/// out by a document stays valid for its whole life.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document holding only a root element with the given tag.
    pub fn new(root_tag: &str) -> Document {
        Document {
            nodes: vec![Node::new(root_tag, None)],
        }
    }

    /// Loads a document from its JSON description:
    ///
    /// ```json
    /// { "tag": "div", "attributes": { "data-yath-screen": "welcome" },
    ///   "classes": [], "text": "Hello", "children": [] }
    /// ```
    ///
    /// Every field but `tag` is optional. Node ids follow document order.
    pub fn from_json(json_string: &str) -> Result<Document, GameError> {
        json_read::load_from_string(json_string)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    pub(crate) fn node(&self, node: NodeId) -> Result<&Node, GameError> {
        self.nodes.get(node.0).ok_or(GameError::UnknownNode(node))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Node, GameError> {
        self.nodes.get_mut(node.0).ok_or(GameError::UnknownNode(node))
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, GameError> {
        self.node(parent)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        self.node_mut(parent)?.children.push(id);

        Ok(id)
    }

    pub fn get_tag(&self, node: NodeId) -> Result<&str, GameError> {
        Ok(self.node(node)?.tag.as_str())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| {
            n.attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    /// Sets an attribute, replacing its value in place if it already exists.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), GameError> {
        let n = self.node_mut(node)?;

        match n.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => n.attributes.push((name.to_string(), value.to_string())),
        }

        Ok(())
    }

    /// Removes an attribute and returns its previous value.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>, GameError> {
        let n = self.node_mut(node)?;
        let index = n.attributes.iter().position(|(k, _)| k == name);

        Ok(index.map(|i| n.attributes.remove(i).1))
    }

    pub fn get_classes(&self, node: NodeId) -> Result<&[String], GameError> {
        Ok(self.node(node)?.classes.as_slice())
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Adds a class unless the node already carries it.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), GameError> {
        let n = self.node_mut(node)?;

        if !n.classes.iter().any(|c| c == class) {
            n.classes.push(class.to_string());
        }

        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), GameError> {
        self.node_mut(node)?.classes.retain(|c| c != class);

        Ok(())
    }

    pub fn get_text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| n.text.as_deref())
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), GameError> {
        self.node_mut(node)?.text = Some(text.to_string());

        Ok(())
    }

    pub fn get_parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn get_children(&self, node: NodeId) -> Result<&[NodeId], GameError> {
        Ok(self.node(node)?.children.as_slice())
    }

    /// Descendants of `node` in document order, `node` itself excluded.
    pub fn descendants(&self, node: NodeId) -> Result<Vec<NodeId>, GameError> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.node(node)?.children.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.node(current)?.children.iter().rev().copied());
        }

        Ok(result)
    }

    /// Descendants of `node` carrying the attribute `name`, in document order.
    pub fn select_with_attribute(&self, node: NodeId, name: &str) -> Result<Vec<NodeId>, GameError> {
        Ok(self
            .descendants(node)?
            .into_iter()
            .filter(|d| self.has_attribute(*d, name))
            .collect())
    }

    /// `node` followed by its ancestors up to the root.
    pub fn ancestors_inclusive(&self, node: NodeId) -> Result<Vec<NodeId>, GameError> {
        let mut result = vec![node];
        let mut current = self.node(node)?.parent;

        while let Some(parent) = current {
            result.push(parent);
            current = self.node(parent)?.parent;
        }

        Ok(result)
    }

    /// First node, in document order, whose `id` attribute is `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|n| self.get_attribute(*n, "id") == Some(id))
    }

    /// Concatenated text of `node` and all of its descendants.
    pub fn text_content(&self, node: NodeId) -> Result<String, GameError> {
        let mut sb = String::new();

        if let Some(text) = self.get_text(node) {
            sb.push_str(text);
        }

        for d in self.descendants(node)? {
            if let Some(text) = self.get_text(d) {
                if !sb.is_empty() && !sb.ends_with(char::is_whitespace) {
                    sb.push(' ');
                }
                sb.push_str(text);
            }
        }

        Ok(sb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_follow_document_order() {
        let mut doc = Document::new("body");
        let a = doc.append_element(doc.root(), "div").unwrap();
        let a1 = doc.append_element(a, "p").unwrap();
        let b = doc.append_element(doc.root(), "div").unwrap();
        let a2 = doc.append_element(a, "p").unwrap();

        assert_eq!(vec![a, a1, a2, b], doc.descendants(doc.root()).unwrap());
        assert_eq!(vec![a1, a2], doc.descendants(a).unwrap());
        assert_eq!(vec![a2, a, doc.root()], doc.ancestors_inclusive(a2).unwrap());
    }

    #[test]
    fn attributes_and_classes() {
        let mut doc = Document::new("body");
        let a = doc.append_element(doc.root(), "a").unwrap();

        doc.set_attribute(a, "href", "#").unwrap();
        doc.set_attribute(a, "href", "#top").unwrap();
        assert_eq!(Some("#top"), doc.get_attribute(a, "href"));
        assert_eq!(Some("#top".to_string()), doc.remove_attribute(a, "href").unwrap());
        assert!(!doc.has_attribute(a, "href"));

        doc.add_class(a, "x").unwrap();
        doc.add_class(a, "x").unwrap();
        assert_eq!(1, doc.get_classes(a).unwrap().len());
        doc.remove_class(a, "x").unwrap();
        assert!(!doc.has_class(a, "x"));
    }

    #[test]
    fn unknown_node() {
        let mut doc = Document::new("body");

        assert!(matches!(
            doc.add_class(NodeId(7), "x"),
            Err(GameError::UnknownNode(NodeId(7)))
        ));
        assert!(doc.get_attribute(NodeId(7), "id").is_none());
    }
}

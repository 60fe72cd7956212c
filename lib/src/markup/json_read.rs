use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{
    game_error::GameError,
    markup::{Document, NodeId},
};

#[derive(Deserialize)]
struct NodeSpec {
    tag: String,
    #[serde(default, deserialize_with = "attributes_in_source_order")]
    attributes: Vec<(String, String)>,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    children: Vec<NodeSpec>,
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of attribute names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut attributes = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((name, value)) = map.next_entry::<String, String>()? {
            attributes.push((name, value));
        }

        Ok(attributes)
    }
}

fn attributes_in_source_order<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, String)>, D::Error> {
    deserializer.deserialize_map(AttributesVisitor)
}

pub(crate) fn load_from_string(s: &str) -> Result<Document, GameError> {
    let root: NodeSpec = serde_json::from_str(s)?;

    let mut doc = Document::new(&root.tag);
    let root_id = doc.root();
    fill_node(&mut doc, root_id, &root)?;

    Ok(doc)
}

fn fill_node(doc: &mut Document, id: NodeId, spec: &NodeSpec) -> Result<(), GameError> {
    if spec.tag.trim().is_empty() {
        return Err(GameError::BadMarkup(format!("node {id} has an empty tag")));
    }

    for (name, value) in spec.attributes.iter() {
        doc.set_attribute(id, name, value)?;
    }

    for class in spec.classes.iter() {
        doc.add_class(id, class)?;
    }

    if let Some(text) = &spec.text {
        doc.set_text(id, text)?;
    }

    for child in spec.children.iter() {
        let child_id = doc.append_element(id, &child.tag)?;
        fill_node(doc, child_id, child)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_load() {
        let s = r##"{"tag":"main","children":[{"tag":"section","attributes":{"data-yath-screen":"welcome"},"text":"Hi"}]}"##;
        let doc = load_from_string(s).unwrap();

        assert_eq!(2, doc.len());
        assert_eq!("main", doc.get_tag(doc.root()).unwrap());
        assert_eq!(Some("welcome"), doc.get_attribute(NodeId(1), "data-yath-screen"));
        assert_eq!(Some("Hi"), doc.get_text(NodeId(1)));
    }

    #[test]
    fn ids_follow_document_order() {
        let s = r##"
        {
            "tag": "main",
            "children": [
                { "tag": "div", "attributes": { "id": "a" },
                  "children": [ { "tag": "p", "attributes": { "id": "a1" } } ] },
                { "tag": "div", "attributes": { "id": "b" }, "classes": ["x", "x"] }
            ]
        }"##;
        let doc = load_from_string(s).unwrap();

        assert_eq!(Some(NodeId(1)), doc.find_by_id("a"));
        assert_eq!(Some(NodeId(2)), doc.find_by_id("a1"));
        assert_eq!(Some(NodeId(3)), doc.find_by_id("b"));
        assert_eq!(1, doc.get_classes(NodeId(3)).unwrap().len());
    }

    #[test]
    fn attributes_keep_source_order() {
        let s = r##"{"tag":"a","attributes":{"href":"#","data-yath-go-to":"shop","id":"link","href":"#top"}}"##;
        let doc = load_from_string(s).unwrap();
        let names: Vec<&str> = doc
            .node(doc.root())
            .unwrap()
            .attributes
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();

        assert_eq!(vec!["href", "data-yath-go-to", "id"], names);
        // A repeated name keeps its first position and takes the last value.
        assert_eq!(Some("#top"), doc.get_attribute(doc.root(), "href"));
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            load_from_string(r#"{"children": []}"#),
            Err(GameError::BadMarkup(_))
        ));
        assert!(matches!(
            load_from_string(r#"{"tag": " "}"#),
            Err(GameError::BadMarkup(_))
        ));
    }
}

//! Finds the screens declared in a container and turns them into [`Screen`]s.
use std::collections::HashSet;

use log::debug;

use crate::{
    game_error::GameError,
    markup::{Document, NodeId},
    screen::{Screen, SCREEN_CLASS, VISIBLE_CLASS},
};

/// Attribute declaring a screen; its value is the screen name.
pub const SCREEN_ATTRIBUTE: &str = "data-yath-screen";

/// Harvests every descendant of `container` marked with
/// [`SCREEN_ATTRIBUTE`], in document order.
///
/// Each screen node gets the [`SCREEN_CLASS`] class plus a class named after
/// the screen, and loses the declarative attribute and any
/// [`VISIBLE_CLASS`] it arrived with: no screen is visible until the game
/// first goes to one. Names are checked before any node is touched, so a
/// duplicate leaves the document unchanged.
pub fn discover_screens(doc: &mut Document, container: NodeId) -> Result<Vec<Screen>, GameError> {
    let mut declared: Vec<(NodeId, String)> = Vec::new();
    let mut seen = HashSet::new();

    for node in doc.select_with_attribute(container, SCREEN_ATTRIBUTE)? {
        let name = doc
            .get_attribute(node, SCREEN_ATTRIBUTE)
            .unwrap_or_default()
            .to_string();

        if !seen.insert(name.clone()) {
            return Err(GameError::DuplicateScreenName(name));
        }

        declared.push((node, name));
    }

    let mut screens = Vec::with_capacity(declared.len());

    for (node, name) in declared {
        doc.add_class(node, SCREEN_CLASS)?;
        if !name.is_empty() {
            doc.add_class(node, &name)?;
        }
        doc.remove_attribute(node, SCREEN_ATTRIBUTE)?;
        doc.remove_class(node, VISIBLE_CLASS)?;

        debug!("discovered screen '{name}' at {node}");
        screens.push(Screen::new(&name, node));
    }

    Ok(screens)
}

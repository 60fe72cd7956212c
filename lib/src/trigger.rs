//! Declarative click triggers found in the markup.
use log::debug;
use strum::Display;

use crate::{
    game_error::GameError,
    markup::{Document, NodeId},
};

/// Attribute naming the click callback to run.
pub const ONCLICK_ATTRIBUTE: &str = "data-yath-onclick";
/// Attribute naming the screen to go to.
pub const GO_TO_ATTRIBUTE: &str = "data-yath-go-to";
/// Class every bound node carries.
pub const CLICKABLE_CLASS: &str = "yathClickable";

#[derive(Debug, PartialEq, Eq, Display, Clone, Copy)]
pub enum TriggerKind {
    /// Runs a named click callback.
    Action,
    /// Goes to a named screen.
    Navigate,
}

impl TriggerKind {
    pub fn attribute(&self) -> &'static str {
        match self {
            TriggerKind::Action => ONCLICK_ATTRIBUTE,
            TriggerKind::Navigate => GO_TO_ATTRIBUTE,
        }
    }
}

/// A listener installed on a node: what to do when it's clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBinding {
    pub node: NodeId,
    pub kind: TriggerKind,
    /// Callback name for [`TriggerKind::Action`], screen name for
    /// [`TriggerKind::Navigate`].
    pub target_name: String,
}

/// Binds every trigger below `container`: action triggers first, then
/// navigation triggers, each in document order.
///
/// The declarative attribute is stripped from every bound node, so running
/// this again over the same container finds nothing new. Nothing is resolved
/// here; callback and screen names are looked up at click time.
pub fn bind_triggers(doc: &mut Document, container: NodeId) -> Result<Vec<TriggerBinding>, GameError> {
    let mut bindings = Vec::new();

    for kind in [TriggerKind::Action, TriggerKind::Navigate] {
        let attribute = kind.attribute();

        for node in doc.select_with_attribute(container, attribute)? {
            let target_name = doc.remove_attribute(node, attribute)?.unwrap_or_default();
            doc.add_class(node, CLICKABLE_CLASS)?;

            debug!("bound {kind} trigger '{target_name}' at {node}");
            bindings.push(TriggerBinding {
                node,
                kind,
                target_name,
            });
        }
    }

    Ok(bindings)
}

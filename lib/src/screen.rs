//! A [`Screen`] is one mutually-exclusive view panel of a game.
use crate::markup::NodeId;

/// Class every discovered screen carries.
pub const SCREEN_CLASS: &str = "yathScreen";
/// Class carried by the currently visible screen.
pub const VISIBLE_CLASS: &str = "yathScreen--visible";

/// A named panel of the game, as registered by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    name: String,
    node: NodeId,
    pub(crate) visible: bool,
    pub(crate) visit_count: u32,
}

impl Screen {
    pub(crate) fn new(name: &str, node: NodeId) -> Screen {
        Screen {
            name: name.to_string(),
            node,
            visible: false,
            visit_count: 0,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The markup node rendering this screen.
    pub fn get_node(&self) -> NodeId {
        self.node
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of completed transitions into this screen.
    pub fn get_visit_count(&self) -> u32 {
        self.visit_count
    }
}

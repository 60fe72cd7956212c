//! [`Game`] is the entry point: it discovers the screens of a document, binds
//! its click triggers and keeps the navigation and inventory state.
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    game::{callbacks::ClickCallback, screen_change::ScreenChangeHandler},
    inventory::Inventory,
    markup::{Document, NodeId},
    screen_registry::ScreenRegistry,
    trigger::TriggerBinding,
};

/// Options read when building a [`Game`].
#[derive(Default)]
pub struct GameConfig {
    container: Option<NodeId>,
    click_callbacks: HashMap<String, Rc<RefCell<dyn ClickCallback>>>,
    on_screen_change: Option<Rc<RefCell<dyn ScreenChangeHandler>>>,
}

impl GameConfig {
    pub fn new() -> GameConfig {
        GameConfig::default()
    }

    /// Node whose descendants hold the screens and triggers. Defaults to the
    /// document root.
    pub fn with_container(mut self, container: NodeId) -> GameConfig {
        self.container = Some(container);
        self
    }

    /// Registers the callback run by `data-yath-onclick="<name>"` triggers.
    /// A later registration under the same name replaces the earlier one.
    pub fn with_click_callback(
        mut self,
        name: &str,
        callback: Rc<RefCell<dyn ClickCallback>>,
    ) -> GameConfig {
        self.click_callbacks.insert(name.to_string(), callback);
        self
    }

    /// Handler asked before every screen transition.
    pub fn with_screen_change_handler(
        mut self,
        handler: Rc<RefCell<dyn ScreenChangeHandler>>,
    ) -> GameConfig {
        self.on_screen_change = Some(handler);
        self
    }
}

/// A running game: the document it plays, its screens, its bound triggers
/// and the player's inventory.
pub struct Game {
    document: Document,
    container: NodeId,
    pub(crate) registry: ScreenRegistry,
    pub(crate) bindings: Vec<TriggerBinding>,
    inventory: Inventory,
    pub(crate) click_callbacks: HashMap<String, Rc<RefCell<dyn ClickCallback>>>,
    pub(crate) on_screen_change: Option<Rc<RefCell<dyn ScreenChangeHandler>>>,
}

mod misc {
    use log::debug;

    use crate::{
        discovery::discover_screens,
        game::{Game, GameConfig},
        game_error::GameError,
        inventory::Inventory,
        markup::{Document, NodeId},
        screen_registry::ScreenRegistry,
    };

    impl Game {
        /// Builds a game over `document`: discovers the screens below the
        /// configured container, then binds the triggers found there.
        ///
        /// No screen is visible until the first
        /// [`go_to_screen`](Game::go_to_screen).
        pub fn new(mut document: Document, config: GameConfig) -> Result<Game, GameError> {
            let container = config.container.unwrap_or(document.root());

            if !document.contains(container) {
                return Err(GameError::UnknownNode(container));
            }

            let screens = discover_screens(&mut document, container)?;
            let registry = ScreenRegistry::new(screens)?;

            let mut game = Game {
                document,
                container,
                registry,
                bindings: Vec::new(),
                inventory: Inventory::new(),
                click_callbacks: config.click_callbacks,
                on_screen_change: config.on_screen_change,
            };

            game.attach_events(container)?;

            debug!(
                "game ready: {} screens, {} triggers",
                game.registry.len(),
                game.bindings.len()
            );

            Ok(game)
        }

        /// Same as [`Game::new`], loading the document from JSON first.
        pub fn from_json(json_string: &str, config: GameConfig) -> Result<Game, GameError> {
            Game::new(Document::from_json(json_string)?, config)
        }

        pub fn get_container(&self) -> NodeId {
            self.container
        }

        pub fn document(&self) -> &Document {
            &self.document
        }

        /// Direct access to the document, for host-side changes such as text
        /// updates. Newly added triggers need
        /// [`attach_events`](Game::attach_events) to become live.
        pub fn document_mut(&mut self) -> &mut Document {
            &mut self.document
        }

        pub fn inventory(&self) -> &Inventory {
            &self.inventory
        }

        pub fn inventory_mut(&mut self) -> &mut Inventory {
            &mut self.inventory
        }
    }
}

pub mod callbacks;
mod events;
mod navigation;
pub mod screen_change;

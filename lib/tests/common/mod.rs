#![allow(dead_code)]

use std::{cell::RefCell, error::Error, fs, path::Path, rc::Rc};

use yath::{
    click_event::ClickEvent,
    game::{
        callbacks::{ClickCallback, ClickResponse},
        screen_change::{ScreenChange, ScreenChangeHandler, Transition},
        Game, GameConfig,
    },
    game_error::GameError,
    markup::{Document, NodeId},
};

pub fn get_markup_string(filename: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(filename);
    let markup = fs::read_to_string(path)?;

    Ok(markup)
}

pub fn load_game(filename: &str, config: GameConfig) -> Result<Game, GameError> {
    let markup = get_markup_string(filename).unwrap();

    Game::from_json(&markup, config)
}

/// Node with the given `id` attribute; panics when missing.
pub fn node(game: &Game, id: &str) -> NodeId {
    game.document()
        .find_by_id(id)
        .unwrap_or_else(|| panic!("no node with id '{id}'"))
}

/// Names of the screens currently carrying the visible class.
pub fn visible_screens(game: &Game) -> Vec<String> {
    game.get_screen_names()
        .into_iter()
        .filter(|name| {
            let screen = game.get_screen(name).unwrap();
            game.document()
                .has_class(screen.get_node(), "yathScreen--visible")
        })
        .map(str::to_string)
        .collect()
}

/// Builds `<main>` holding one empty `<section>` per screen name.
pub fn document_with_screens(names: &[&str]) -> Document {
    let mut doc = Document::new("main");

    for name in names {
        let section = doc.append_element(doc.root(), "section").unwrap();
        doc.set_attribute(section, "id", name).unwrap();
        doc.set_attribute(section, "data-yath-screen", name).unwrap();
    }

    doc
}

/// Click callback answering a fixed response and recording every call.
pub struct Recorder {
    pub response: ClickResponse,
    pub calls: Vec<(NodeId, NodeId)>,
}

impl Recorder {
    pub fn new(response: ClickResponse) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder {
            response,
            calls: Vec::new(),
        }))
    }
}

impl ClickCallback for Recorder {
    fn on_click(&mut self, _game: &mut Game, event: &mut ClickEvent) -> ClickResponse {
        self.calls
            .push((event.get_target(), event.get_current_target()));
        self.response
    }
}

/// Click callback adding the item named by the target's `data-item`.
pub struct TakeItem {}

impl ClickCallback for TakeItem {
    fn on_click(&mut self, game: &mut Game, event: &mut ClickEvent) -> ClickResponse {
        let item = game
            .document()
            .get_attribute(event.get_target(), "data-item")
            .map(str::to_string);

        match item {
            Some(item) => {
                game.inventory_mut().add_item(&item);
                ClickResponse::Suppress
            }
            None => ClickResponse::PassThrough,
        }
    }
}

/// Screen change handler recording what it was asked and answering
/// `answer` for every screen.
pub struct Gate {
    pub answer: Transition,
    pub asked: Vec<String>,
    pub current_when_asked: Vec<Option<String>>,
}

impl Gate {
    pub fn new(answer: Transition) -> Rc<RefCell<Gate>> {
        Rc::new(RefCell::new(Gate {
            answer,
            asked: Vec::new(),
            current_when_asked: Vec::new(),
        }))
    }
}

impl ScreenChangeHandler for Gate {
    fn on_screen_change(&mut self, change: &ScreenChange<'_>) -> Transition {
        assert_eq!(change.screen_name, change.screen.get_name());

        self.asked.push(change.screen_name.to_string());
        self.current_when_asked.push(
            change
                .game
                .get_current_screen()
                .map(|s| s.get_name().to_string()),
        );

        self.answer
    }
}

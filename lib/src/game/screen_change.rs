//! The handler asked before every screen transition.
use std::{cell::RefCell, rc::Rc};

use strum::Display;

use crate::{game::Game, screen::Screen};

/// Answer of a [`ScreenChangeHandler`].
#[derive(Debug, PartialEq, Eq, Display, Clone, Copy)]
pub enum Transition {
    Proceed,
    /// Cancel the transition; nothing changes.
    Abort,
}

/// What is about to happen.
///
/// The game is only readable from here: a handler cannot start another
/// transition while one is being decided.
pub struct ScreenChange<'a> {
    pub game: &'a Game,
    pub screen_name: &'a str,
    pub screen: &'a Screen,
}

/// Defines the method called before the game goes to a screen.
pub trait ScreenChangeHandler {
    fn on_screen_change(&mut self, change: &ScreenChange<'_>) -> Transition;
}

impl Game {
    /// Replaces the handler given in the
    /// [`GameConfig`](crate::game::GameConfig), or removes it with `None`.
    pub fn set_screen_change_handler(
        &mut self,
        handler: Option<Rc<RefCell<dyn ScreenChangeHandler>>>,
    ) {
        self.on_screen_change = handler;
    }
}

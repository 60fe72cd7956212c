//! Named click callbacks run by `data-yath-onclick` triggers.
use std::{cell::RefCell, rc::Rc};

use strum::Display;

use crate::{click_event::ClickEvent, game::Game, game_error::GameError};

/// What a click callback wants done with the click once it returns.
#[derive(Debug, PartialEq, Eq, Display, Clone, Copy)]
pub enum ClickResponse {
    /// Let the click keep its default action and keep propagating.
    PassThrough,
    /// Prevent the default action and stop every further listener.
    Suppress,
}

/// Defines the method called when a bound node is clicked.
pub trait ClickCallback {
    fn on_click(&mut self, game: &mut Game, event: &mut ClickEvent) -> ClickResponse;
}

/// # Click Callbacks
/// Methods dealing with the callbacks that `data-yath-onclick` triggers run.
impl Game {
    /// Binds a callback after the game was built. Triggers look their
    /// callback up when clicked, so markup may name callbacks that are only
    /// supplied later.
    pub fn bind_click_callback(
        &mut self,
        name: &str,
        callback: Rc<RefCell<dyn ClickCallback>>,
    ) -> Result<(), GameError> {
        if self.click_callbacks.contains_key(name) {
            return Err(GameError::BadArgument(format!(
                "Click callback '{name}' has already been bound."
            )));
        }

        self.click_callbacks.insert(name.to_string(), callback);

        Ok(())
    }

    /// Removes a callback. Triggers naming it become no-ops again.
    pub fn unbind_click_callback(&mut self, name: &str) -> Result<(), GameError> {
        if self.click_callbacks.remove(name).is_none() {
            return Err(GameError::BadArgument(format!(
                "Click callback '{name}' has not been bound."
            )));
        }

        Ok(())
    }

    pub fn has_click_callback(&self, name: &str) -> bool {
        self.click_callbacks.contains_key(name)
    }
}

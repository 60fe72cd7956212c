use log::{debug, warn};

use crate::{
    game::{
        screen_change::{ScreenChange, Transition},
        Game,
    },
    game_error::GameError,
    screen::{Screen, VISIBLE_CLASS},
};

/// # Navigation
/// Methods to move between screens and to read where the player has been.
impl Game {
    /// Makes `screen_name` the only visible screen and counts a visit to it.
    ///
    /// The screen change handler, if any, is asked first. When it answers
    /// [`Transition::Abort`] nothing changes and `Abort` is returned. Going
    /// to the screen that is already visible is a regular transition: the
    /// handler is asked and the visit is counted.
    ///
    /// Fails with [`GameError::UnknownScreen`] if no such screen was
    /// discovered, leaving the game untouched.
    pub fn go_to_screen(&mut self, screen_name: &str) -> Result<Transition, GameError> {
        let transition = self.ask_screen_change_handler(screen_name)?;

        if transition == Transition::Abort {
            debug!("transition to '{screen_name}' aborted by handler");
            return Ok(Transition::Abort);
        }

        let committed = self.registry.commit(screen_name)?;

        // Other screens may carry the class from the markup or from the host.
        for node in committed.others {
            if self.document().has_class(node, VISIBLE_CLASS) {
                self.document_mut().remove_class(node, VISIBLE_CLASS)?;
            }
        }

        self.document_mut().add_class(committed.shown, VISIBLE_CLASS)?;

        debug!(
            "went to screen '{screen_name}' (visit {})",
            self.get_screen_visits(screen_name).unwrap_or_default()
        );

        Ok(Transition::Proceed)
    }

    fn ask_screen_change_handler(&self, screen_name: &str) -> Result<Transition, GameError> {
        let screen = self
            .registry
            .get(screen_name)
            .ok_or_else(|| GameError::UnknownScreen(screen_name.to_string()))?;

        let handler = match &self.on_screen_change {
            Some(handler) => handler.clone(),
            None => return Ok(Transition::Proceed),
        };

        let mut handler = handler.try_borrow_mut().map_err(|_| {
            warn!("screen change handler re-entered while going to '{screen_name}'");
            GameError::ReentrantCallback("screen change handler".to_owned())
        })?;

        let change = ScreenChange {
            game: self,
            screen_name,
            screen,
        };

        Ok(handler.on_screen_change(&change))
    }

    /// Visit count of a screen, or `None` if the game has no such screen.
    pub fn get_screen_visits(&self, screen_name: &str) -> Option<u32> {
        self.registry.visits(screen_name)
    }

    /// Whether the screen was entered at least once. Unknown screens were
    /// never visited.
    pub fn has_visited_screen(&self, screen_name: &str) -> bool {
        self.registry.has_visited(screen_name)
    }

    /// The visible screen, `None` before the first transition.
    pub fn get_current_screen(&self) -> Option<&Screen> {
        self.registry.current()
    }

    pub fn get_screen(&self, screen_name: &str) -> Option<&Screen> {
        self.registry.get(screen_name)
    }

    /// Names of all screens, in document order.
    pub fn get_screen_names(&self) -> Vec<&str> {
        self.registry.iter().map(Screen::get_name).collect()
    }
}

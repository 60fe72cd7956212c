//! The navigation state machine: the registered screens, which one is
//! visible, and how many times each one was entered.
//!
//! The registry knows nothing about markup. It decides visibility and counts
//! visits; [`Game`](crate::game::Game) mirrors the outcome onto the document.
use std::collections::HashMap;

use crate::{game_error::GameError, markup::NodeId, screen::Screen};

/// Outcome of a committed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommittedTransition {
    /// Nodes of every other screen, none of which may stay marked visible.
    pub(crate) others: Vec<NodeId>,
    /// Node of the screen that is now visible.
    pub(crate) shown: NodeId,
}

#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    screens: Vec<Screen>,
    index: HashMap<String, usize>,
    current: Option<usize>,
}

impl ScreenRegistry {
    /// Builds a registry where no screen is visible and all counters are 0.
    pub(crate) fn new(screens: Vec<Screen>) -> Result<ScreenRegistry, GameError> {
        let mut registry = ScreenRegistry::default();

        for screen in screens {
            registry.register(screen)?;
        }

        Ok(registry)
    }

    /// A screen whose name is already taken is rejected, the first one stays.
    pub(crate) fn register(&mut self, mut screen: Screen) -> Result<(), GameError> {
        if self.index.contains_key(screen.get_name()) {
            return Err(GameError::DuplicateScreenName(screen.get_name().to_string()));
        }

        screen.visible = false;
        screen.visit_count = 0;

        self.index
            .insert(screen.get_name().to_string(), self.screens.len());
        self.screens.push(screen);

        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Screen> {
        self.index.get(name).map(|&i| &self.screens[i])
    }

    /// Screens in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// `None` until the first completed transition.
    pub fn current(&self) -> Option<&Screen> {
        self.current.map(|i| &self.screens[i])
    }

    /// Visit count of `name`, `None` if no such screen exists.
    pub fn visits(&self, name: &str) -> Option<u32> {
        self.get(name).map(Screen::get_visit_count)
    }

    pub fn has_visited(&self, name: &str) -> bool {
        self.visits(name).map(|v| v > 0).unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.screens.iter().filter(|s| s.is_visible()).count()
    }

    /// Makes `name` the only visible screen and counts the visit. Going to the
    /// current screen counts as a new visit too.
    pub(crate) fn commit(&mut self, name: &str) -> Result<CommittedTransition, GameError> {
        let target = *self
            .index
            .get(name)
            .ok_or_else(|| GameError::UnknownScreen(name.to_string()))?;

        let mut others = Vec::with_capacity(self.screens.len().saturating_sub(1));

        for (i, screen) in self.screens.iter_mut().enumerate() {
            if i != target {
                screen.visible = false;
                others.push(screen.get_node());
            }
        }

        let screen = &mut self.screens[target];
        screen.visit_count = screen.visit_count.saturating_add(1);
        screen.visible = true;
        self.current = Some(target);

        Ok(CommittedTransition {
            others,
            shown: screen.get_node(),
        })
    }
}

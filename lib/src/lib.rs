//! A tiny runtime for screen-based interactive fiction.
//!
//! A game is a [`Document`](markup::Document) holding screens and click
//! triggers declared with attributes:
//!
//! * `data-yath-screen="<name>"` declares a screen,
//! * `data-yath-go-to="<screen>"` goes to a screen when clicked,
//! * `data-yath-onclick="<callback>"` runs a named [`ClickCallback`](game::callbacks::ClickCallback).
//!
//! [`Game`](game::Game) consumes those attributes once, keeps exactly one
//! screen visible at a time, counts the visits to each screen and carries an
//! [`Inventory`](inventory::Inventory) for the player.

pub mod click_event;
pub mod discovery;
pub mod game;
pub mod game_error;
pub mod inventory;
pub mod markup;
pub mod screen;
pub mod screen_registry;
pub mod trigger;

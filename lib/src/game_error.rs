//! Errors that happen while building or playing a [`Game`](crate::game::Game).
use core::fmt;

use crate::markup::NodeId;

/// Error returned by the fallible operations of a [`Game`](crate::game::Game).
///
/// Missing click callbacks and unknown inventory items are never errors; only
/// conditions that leave the caller with an inconsistent game end up here.
#[derive(Debug)]
pub enum GameError {
    /// Tried to go to a screen that was never discovered.
    UnknownScreen(String),
    /// Two screens were declared with the same name.
    DuplicateScreenName(String),
    /// A node id that doesn't belong to the document.
    UnknownNode(NodeId),
    /// A click callback was invoked again while it was still running.
    ReentrantCallback(String),
    /// The markup for the document was not valid.
    BadMarkup(String),
    /// A method was called with an inappropriate argument.
    BadArgument(String),
}

impl GameError {
    pub(crate) fn get_message(&self) -> String {
        match self {
            GameError::UnknownScreen(name) => format!("screen '{name}', which is not found"),
            GameError::DuplicateScreenName(name) => {
                format!("screen '{name}' is declared more than once")
            }
            GameError::UnknownNode(node) => format!("node {node} is not in the document"),
            GameError::ReentrantCallback(name) => {
                format!("click callback '{name}' is already running")
            }
            GameError::BadMarkup(msg) | GameError::BadArgument(msg) => msg.clone(),
        }
    }
}

impl std::error::Error for GameError {}

impl std::convert::From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> GameError {
        GameError::BadMarkup(err.to_string())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::UnknownScreen(_) => write!(f, "Try to go to {}", self.get_message()),
            GameError::DuplicateScreenName(_) => {
                write!(f, "Invalid markup: {}", self.get_message())
            }
            GameError::UnknownNode(_) => write!(f, "Bad node: {}", self.get_message()),
            GameError::ReentrantCallback(_) => {
                write!(f, "Reentrant click: {}", self.get_message())
            }
            GameError::BadMarkup(desc) => write!(f, "Error parsing markup: {}", desc),
            GameError::BadArgument(arg) => write!(f, "Bad argument: {}", arg),
        }
    }
}

//! The event passed along a click dispatch.
use crate::markup::NodeId;

/// A click travelling from its target up through the target's ancestors.
///
/// After [`Game::click`](crate::game::Game::click) returns, the host checks
/// [`is_default_prevented`](ClickEvent::is_default_prevented) to decide
/// whether to run its own default action (following a link, for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: NodeId,
    pub(crate) current_target: NodeId,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
}

impl ClickEvent {
    pub(crate) fn new(target: NodeId) -> ClickEvent {
        ClickEvent {
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    /// The node that was clicked.
    pub fn get_target(&self) -> NodeId {
        self.target
    }

    /// The node whose listener is running.
    pub fn get_current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// No ancestor listener will see this click.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// No other listener, not even on the current node, will see this click.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    pub(crate) fn suppress(&mut self) {
        self.prevent_default();
        self.stop_propagation();
        self.stop_immediate_propagation();
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }
}

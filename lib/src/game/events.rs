use log::{debug, trace, warn};

use crate::{
    click_event::ClickEvent,
    game::{callbacks::ClickResponse, Game},
    game_error::GameError,
    markup::NodeId,
    trigger::{bind_triggers, TriggerBinding, TriggerKind},
};

/// # Events
/// Methods to bind triggers and to deliver clicks to them.
impl Game {
    /// Binds the triggers found below `subtree` and returns how many were
    /// bound. Nodes bound earlier lost their trigger attribute, so calling
    /// this again never binds a node twice.
    pub fn attach_events(&mut self, subtree: NodeId) -> Result<usize, GameError> {
        let new_bindings = bind_triggers(self.document_mut(), subtree)?;
        let count = new_bindings.len();

        self.bindings.extend(new_bindings);

        Ok(count)
    }

    /// All listeners, in binding order.
    pub fn get_bindings(&self) -> &[TriggerBinding] {
        &self.bindings
    }

    /// Whether clicking `node` itself runs at least one listener.
    pub fn is_clickable(&self, node: NodeId) -> bool {
        self.bindings.iter().any(|b| b.node == node)
    }

    /// Delivers a click on `target`. Listeners run from the target up
    /// through its ancestors, in binding order on each node, until one of
    /// them stops the propagation.
    ///
    /// The returned event tells the host whether its default action was
    /// prevented. Errors raised by a listener, such as a navigation trigger
    /// naming an unknown screen, abort the dispatch.
    pub fn click(&mut self, target: NodeId) -> Result<ClickEvent, GameError> {
        let path = self.document().ancestors_inclusive(target)?;
        let mut event = ClickEvent::new(target);

        trace!("click on {target}");

        for node in path {
            let listeners: Vec<TriggerBinding> = self
                .bindings
                .iter()
                .filter(|b| b.node == node)
                .cloned()
                .collect();

            event.current_target = node;

            for binding in listeners.iter() {
                self.run_listener(binding, &mut event)?;

                if event.is_immediate_propagation_stopped() {
                    break;
                }
            }

            if event.is_propagation_stopped() {
                break;
            }
        }

        Ok(event)
    }

    fn run_listener(&mut self, binding: &TriggerBinding, event: &mut ClickEvent) -> Result<(), GameError> {
        match binding.kind {
            TriggerKind::Action => {
                let name = binding.target_name.as_str();

                let callback = match self.click_callbacks.get(name) {
                    Some(callback) => callback.clone(),
                    None => {
                        trace!("no click callback named '{name}', keeping default action");
                        return Ok(());
                    }
                };

                let response = {
                    let mut callback = callback.try_borrow_mut().map_err(|_| {
                        warn!("click callback '{name}' re-entered");
                        GameError::ReentrantCallback(name.to_string())
                    })?;

                    callback.on_click(self, event)
                };

                if response == ClickResponse::Suppress {
                    debug!("click callback '{name}' suppressed the click");
                    event.suppress();
                }
            }
            TriggerKind::Navigate => {
                event.suppress();
                self.go_to_screen(&binding.target_name)?;
            }
        }

        Ok(())
    }
}

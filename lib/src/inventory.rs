//! The inventory ledger: how many of each item the player holds.
use std::collections::HashMap;

/// An item and its current quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTotal {
    pub name: String,
    pub total: u32,
}

/// Item quantities, never negative. An item that was never touched counts
/// as 0, and touching an unknown item simply creates it.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<ItemTotal>,
    index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory::default()
    }

    pub fn count_item(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map(|&i| self.items[i].total)
            .unwrap_or(0)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.count_item(name) > 0
    }

    /// Adds one `name` and returns the new total.
    pub fn add_item(&mut self, name: &str) -> u32 {
        self.add_items(name, 1)
    }

    /// Adds `delta` of `name` and returns the new total. Saturates at
    /// `u32::MAX`.
    pub fn add_items(&mut self, name: &str, delta: u32) -> u32 {
        let item = self.entry(name);
        item.total = item.total.saturating_add(delta);
        item.total
    }

    /// Removes one `name` and returns the new total.
    pub fn remove_item(&mut self, name: &str) -> u32 {
        self.remove_items(name, 1)
    }

    /// Removes `delta` of `name`, clamping at 0, and returns the new total.
    pub fn remove_items(&mut self, name: &str, delta: u32) -> u32 {
        let item = self.entry(name);
        item.total = item.total.saturating_sub(delta);
        item.total
    }

    /// Snapshot of every item touched so far, in order of first touch.
    /// Items that went back to 0 are kept.
    pub fn get_all_items(&self) -> Vec<ItemTotal> {
        self.items.clone()
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    fn entry(&mut self, name: &str) -> &mut ItemTotal {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.items.push(ItemTotal {
                    name: name.to_string(),
                    total: 0,
                });
                self.index.insert(name.to_string(), self.items.len() - 1);
                self.items.len() - 1
            }
        };

        &mut self.items[i]
    }
}

use yath::{
    game::{Game, GameConfig},
    game_error::GameError,
    inventory::{Inventory, ItemTotal},
};

mod common;

#[test]
fn add_and_count_test() {
    let mut inventory = Inventory::new();

    assert_eq!(1, inventory.add_item("potion"));
    assert_eq!(2, inventory.add_item("potion"));
    assert_eq!(2, inventory.count_item("potion"));
    assert!(inventory.has_item("potion"));
}

#[test]
fn removal_clamps_at_zero_test() {
    let mut inventory = Inventory::new();
    inventory.add_item("potion");
    inventory.add_item("potion");

    assert_eq!(0, inventory.remove_items("potion", 5));
    assert_eq!(0, inventory.count_item("potion"));
    assert!(!inventory.has_item("potion"));

    assert_eq!(0, inventory.remove_item("never-seen"));
    assert_eq!(0, inventory.count_item("never-seen"));
}

#[test]
fn unknown_item_counts_zero_test() {
    let inventory = Inventory::new();

    assert_eq!(0, inventory.count_item("unknown-item"));
    assert!(!inventory.has_item("unknown-item"));
    assert!(inventory.get_all_items().is_empty());
}

#[test]
fn deltas_test() {
    let mut inventory = Inventory::new();

    assert_eq!(10, inventory.add_items("coin", 10));
    assert_eq!(7, inventory.remove_items("coin", 3));
    assert_eq!(7, inventory.add_items("coin", 0));
    assert_eq!(u32::MAX, inventory.add_items("coin", u32::MAX));
}

#[test]
fn all_items_in_first_touch_order_test() {
    let mut inventory = Inventory::new();

    inventory.add_item("sword");
    inventory.remove_item("shield");
    inventory.add_items("coin", 3);
    inventory.add_item("sword");

    assert_eq!(
        vec![
            ItemTotal {
                name: "sword".to_string(),
                total: 2
            },
            ItemTotal {
                name: "shield".to_string(),
                total: 0
            },
            ItemTotal {
                name: "coin".to_string(),
                total: 3
            },
        ],
        inventory.get_all_items()
    );
}

#[test]
fn snapshot_is_detached_test() {
    let mut inventory = Inventory::new();
    inventory.add_item("map");

    let snapshot = inventory.get_all_items();
    inventory.add_item("map");

    assert_eq!(1, snapshot[0].total);
    assert_eq!(2, inventory.count_item("map"));
}

#[test]
fn reset_test() {
    let mut inventory = Inventory::new();
    inventory.add_items("coin", 3);
    inventory.add_item("map");

    inventory.reset();

    assert_eq!(0, inventory.count_item("coin"));
    assert!(inventory.get_all_items().is_empty());

    inventory.add_item("map");
    assert_eq!("map", inventory.get_all_items()[0].name);
}

#[test]
fn inventory_is_independent_from_navigation_test() -> Result<(), GameError> {
    let mut game = Game::new(
        common::document_with_screens(&["welcome", "shop"]),
        GameConfig::new(),
    )?;

    game.inventory_mut().add_items("coin", 5);
    game.go_to_screen("shop")?;
    game.go_to_screen("welcome")?;

    assert_eq!(5, game.inventory().count_item("coin"));
    assert!(game.go_to_screen("attic").is_err());
    assert_eq!(5, game.inventory().count_item("coin"));

    Ok(())
}

//! Tests for the selection grid.

use card_view::card::{CardEvent, CardHandle, CardId, MenuPosition};
use card_view::config::{GridConfig, RangeEmit};
use card_view::error::GridError;
use card_view::grid::{EventResult, GridEvent, SelectedEvent, SelectionGrid};
use card_view::item::{CardItem, Contentlet};
use serde_json::json;

fn item(id: &str) -> Contentlet {
    Contentlet::new(format!("{id}-inode"), format!("{id}-ident"))
        .with_field("title", id.to_uppercase())
}

fn items(ids: &[&str]) -> Vec<Contentlet> {
    ids.iter().map(|id| item(id)).collect()
}

fn mounted(ids: &[&str], value: Option<&str>) -> SelectionGrid<Contentlet> {
    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::new(GridConfig::new("test"));
    grid.set_items(items(ids)).unwrap();
    grid.set_value(value);
    grid.mount();
    grid
}

fn selected(grid: &SelectionGrid<Contentlet>) -> Vec<String> {
    grid.selection().iter().map(|i| i.inode().to_string()).collect()
}

fn checked(grid: &SelectionGrid<Contentlet>) -> Vec<bool> {
    grid.cards().iter().map(|c| c.checked()).collect()
}

fn selected_events(events: Vec<GridEvent<Contentlet>>) -> Vec<SelectedEvent<Contentlet>> {
    events
        .into_iter()
        .filter_map(|event| match event {
            GridEvent::Selected(selected) => Some(selected),
            GridEvent::CardClick(_) => None,
        })
        .collect()
}

// ============================================================================
// Mount & Render
// ============================================================================

#[test]
fn test_mount_renders_one_card_per_item() {
    let grid = mounted(&["a", "b", "c"], Some("b-inode"));
    assert!(grid.is_mounted());
    assert_eq!(grid.cards().len(), 3);
    assert_eq!(checked(&grid), vec![false, true, false]);
    assert_eq!(selected(&grid), vec!["b-inode"]);

    let titles: Vec<_> = grid
        .views()
        .map(|v| v.item.title().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn test_empty_items_render_nothing() {
    let grid = mounted(&[], Some("a-inode"));
    assert!(grid.cards().is_empty());
    assert!(grid.selection().is_empty());
    assert_eq!(grid.get_value(), "");
}

#[test]
fn test_set_value_rechecks_cards() {
    let mut grid = mounted(&["a", "b", "c"], None);
    assert_eq!(checked(&grid), vec![false, false, false]);

    grid.set_value(Some("c-inode,a-inode"));
    assert_eq!(checked(&grid), vec![true, false, true]);
    assert_eq!(selected(&grid), vec!["a-inode", "c-inode"]);
}

#[test]
fn test_set_value_json_non_string_clears() {
    let mut grid = mounted(&["a", "b"], Some("a-inode"));
    grid.set_value_json(&json!(17));
    assert!(grid.selection().is_empty());
    assert_eq!(checked(&grid), vec![false, false]);

    grid.set_value_json(&json!("b-inode"));
    assert_eq!(selected(&grid), vec!["b-inode"]);
}

#[test]
fn test_set_items_drops_stale_selection() {
    let mut grid = mounted(&["a", "b"], Some("a-inode,b-inode"));
    grid.set_items(items(&["b", "c"])).unwrap();
    assert_eq!(selected(&grid), vec!["b-inode"]);
    assert_eq!(checked(&grid), vec![true, false]);
}

#[test]
fn test_set_items_reuses_cards_by_inode() {
    let mut grid = mounted(&["a", "b"], None);
    let b = grid.cards()[1].id();

    grid.set_items(items(&["c", "b"])).unwrap();
    assert_eq!(grid.cards()[1].id(), b);
    assert_ne!(grid.cards()[0].id(), b);
    assert_eq!(grid.item_for(b).unwrap().inode(), "b-inode");
    assert_eq!(grid.card_for_inode("c-inode").unwrap().id(), grid.cards()[0].id());
}

#[test]
fn test_value_applies_once_items_arrive() {
    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::default();
    grid.mount();
    grid.set_value(Some("b-inode"));
    assert!(grid.selection().is_empty());

    grid.set_items(items(&["a", "b"])).unwrap();
    assert_eq!(selected(&grid), vec!["b-inode"]);
    assert_eq!(checked(&grid), vec![false, true]);
}

#[test]
fn test_get_value_is_canonical() {
    let grid = mounted(&["a", "b"], Some("a-inode,z-inode"));
    assert_eq!(grid.value(), Some("a-inode,z-inode"));
    assert_eq!(grid.get_value(), "a-inode");
}

// ============================================================================
// Direct Toggle
// ============================================================================

#[test]
fn test_toggle_check_and_uncheck() {
    let mut grid = mounted(&["a", "b", "x"], None);
    let x = grid.cards()[2].id();

    assert_eq!(grid.handle(CardEvent::check(x, true)), EventResult::Consumed);
    assert_eq!(selected(&grid), vec!["x-inode"]);
    assert_eq!(grid.get_value(), "x-inode");
    let events = selected_events(grid.drain_events());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].selection, vec![item("x")]);
    assert_eq!(events[0].value, "x-inode");

    grid.handle(CardEvent::check(x, false));
    assert!(grid.selection().is_empty());
    assert_eq!(grid.get_value(), "");
    let events = selected_events(grid.drain_events());
    assert_eq!(events.len(), 1);
    assert!(events[0].selection.is_empty());
}

#[test]
fn test_toggle_keeps_selection_order() {
    let mut grid = mounted(&["a", "b", "c"], None);
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[2], true));
    grid.handle(CardEvent::check(ids[0], true));
    assert_eq!(selected(&grid), vec!["c-inode", "a-inode"]);
    assert_eq!(grid.value(), Some("c-inode,a-inode"));
    assert_eq!(checked(&grid), vec![true, false, true]);
}

#[test]
fn test_toggle_duplicate_identifier_first_wins() {
    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::default();
    grid.set_items(vec![
        Contentlet::new("v1", "page"),
        Contentlet::new("v2", "page"),
    ])
    .unwrap();
    grid.mount();
    let ids = grid.card_ids();

    grid.toggle(ids[0], true);
    assert_eq!(checked(&grid), vec![true, false]);

    grid.toggle(ids[1], true);
    assert_eq!(selected(&grid), vec!["v1"]);
    assert_eq!(checked(&grid), vec![true, false]);

    grid.toggle(ids[1], false);
    assert!(grid.selection().is_empty());
    assert_eq!(checked(&grid), vec![false, false]);
}

#[test]
fn test_duplicate_identifier_checkbox_events_mirror_selection() {
    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::default();
    grid.set_items(vec![
        Contentlet::new("v1", "page"),
        Contentlet::new("v2", "page"),
    ])
    .unwrap();
    grid.set_value(Some("v1"));
    grid.mount();
    let ids = grid.card_ids();
    assert_eq!(checked(&grid), vec![true, false]);

    grid.handle(CardEvent::check(ids[1], true));
    assert_eq!(grid.get_value(), "v1");
    assert_eq!(checked(&grid), vec![true, false]);

    grid.handle(CardEvent::check(ids[1], false));
    assert_eq!(grid.get_value(), "");
    assert_eq!(checked(&grid), vec![false, false]);
}

#[test]
fn test_range_over_selected_cards_keeps_them_checked() {
    let mut grid = mounted(&["a", "b", "c"], Some("a-inode,b-inode"));
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[0], true));
    grid.handle(CardEvent::shift_check(ids[2], true));
    assert_eq!(checked(&grid), vec![true, true, true]);
    assert_eq!(selected(&grid), vec!["a-inode", "b-inode", "c-inode"]);
}

#[test]
fn test_toggle_unknown_card() {
    let mut grid = mounted(&["a"], None);
    assert!(!grid.toggle(CardId::new(), true));
    assert!(grid.pending_events().is_empty());
}

// ============================================================================
// Range Select
// ============================================================================

#[test]
fn test_range_select_gesture() {
    let mut grid = mounted(&["a", "b", "c", "d", "e"], None);
    let ids = grid.card_ids();

    // shift-click with no prior interaction selects only the origin
    grid.handle(CardEvent::shift_check(ids[2], true));
    assert_eq!(selected(&grid), vec!["c-inode"]);
    assert_eq!(grid.last_checked(), Some(ids[2]));

    grid.handle(CardEvent::check(ids[0], true));
    assert_eq!(grid.last_checked(), Some(ids[0]));

    grid.handle(CardEvent::shift_check(ids[3], true));
    assert_eq!(selected(&grid), vec!["c-inode", "a-inode", "b-inode", "d-inode"]);
    assert_eq!(checked(&grid), vec![true, true, true, true, false]);
    assert_eq!(grid.last_checked(), Some(ids[3]));
}

#[test]
fn test_range_select_backwards() {
    let mut grid = mounted(&["a", "b", "c", "d", "e"], None);
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[4], true));
    grid.handle(CardEvent::shift_check(ids[1], true));
    assert_eq!(selected(&grid), vec!["e-inode", "b-inode", "c-inode", "d-inode"]);
    assert_eq!(checked(&grid), vec![false, true, true, true, true]);
}

#[test]
fn test_range_emits_per_toggle() {
    let mut grid = mounted(&["a", "b", "c", "d"], None);
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[0], true));
    grid.drain_events();
    grid.handle(CardEvent::shift_check(ids[3], true));

    let events = selected_events(grid.drain_events());
    assert_eq!(events.len(), 4);
    assert_eq!(events.last().unwrap().value, "a-inode,b-inode,c-inode,d-inode");
}

#[test]
fn test_range_coalesced_emits_once() {
    let mut grid: SelectionGrid<Contentlet> =
        SelectionGrid::new(GridConfig::new("test").range_emit(RangeEmit::Coalesced));
    grid.set_items(items(&["a", "b", "c", "d"])).unwrap();
    grid.mount();
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[1], true));
    grid.drain_events();
    grid.handle(CardEvent::shift_check(ids[3], true));

    let events = selected_events(grid.drain_events());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, "b-inode,c-inode,d-inode");
}

#[test]
fn test_shift_uncheck_is_single_toggle() {
    let mut grid = mounted(&["a", "b", "c", "d"], Some("a-inode,b-inode,c-inode"));
    let ids = grid.card_ids();

    grid.handle(CardEvent::check(ids[0], true));
    grid.handle(CardEvent::shift_check(ids[2], false));
    assert_eq!(selected(&grid), vec!["a-inode", "b-inode"]);
    assert_eq!(checked(&grid), vec![true, true, false, false]);
    assert_eq!(grid.last_checked(), Some(ids[2]));
}

#[test]
fn test_stale_anchor_forgotten_on_render() {
    let mut grid = mounted(&["a", "b", "c"], None);
    let a = grid.cards()[0].id();
    grid.handle(CardEvent::check(a, true));
    assert_eq!(grid.last_checked(), Some(a));

    grid.set_items(items(&["b", "c"])).unwrap();
    assert_eq!(grid.last_checked(), None);

    let ids = grid.card_ids();
    grid.handle(CardEvent::shift_check(ids[1], true));
    assert_eq!(selected(&grid), vec!["c-inode"]);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_value_is_silent() {
    let mut grid = mounted(&["a", "b", "c"], None);
    let ids = grid.card_ids();
    grid.handle(CardEvent::check(ids[0], true));
    grid.handle(CardEvent::check(ids[1], true));
    grid.drain_events();

    grid.clear_value();
    assert_eq!(grid.get_value(), "");
    assert_eq!(grid.value(), Some(""));
    assert!(grid.selection().is_empty());
    assert_eq!(checked(&grid), vec![false, false, false]);
    assert!(grid.pending_events().is_empty());
}

// ============================================================================
// Click & Context Menu
// ============================================================================

#[test]
fn test_activate_emits_card_click() {
    let mut grid = mounted(&["a", "b"], None);
    let b = grid.cards()[1].id();

    assert!(grid.handle(CardEvent::Activated { card: b }).is_handled());
    let events = grid.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        GridEvent::CardClick(click) => {
            assert_eq!(click.card, b);
            assert_eq!(click.item, item("b"));
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(grid.selection().is_empty());
}

#[test]
fn test_context_menu_is_exclusive() {
    let mut grid = mounted(&["a", "b", "c"], None);
    let ids = grid.card_ids();

    grid.handle(CardEvent::ContextMenu {
        card: ids[0],
        x: 10,
        y: 20,
    });
    assert_eq!(
        grid.card(ids[0]).unwrap().menu(),
        Some(MenuPosition { x: 10, y: 20 })
    );

    grid.handle(CardEvent::ContextMenu {
        card: ids[2],
        x: 5,
        y: 6,
    });
    assert_eq!(grid.card(ids[0]).unwrap().menu(), None);
    assert!(grid.card(ids[2]).unwrap().is_menu_open());

    grid.handle(CardEvent::Activated { card: ids[1] });
    assert!(grid.cards().iter().all(|c| !c.is_menu_open()));
}

#[test]
fn test_context_menu_click_closes_menus() {
    let mut grid = mounted(&["a", "b"], None);
    let a = grid.cards()[0].id();

    grid.handle(CardEvent::ContextMenu {
        card: a,
        x: 1,
        y: 1,
    });
    grid.handle(CardEvent::ContextMenuClick { card: a });
    assert!(grid.cards().iter().all(|c| !c.is_menu_open()));
    assert!(grid.pending_events().is_empty());
}

#[test]
fn test_menu_survives_rerender() {
    let mut grid = mounted(&["a", "b"], None);
    let b = grid.cards()[1].id();
    grid.handle(CardEvent::ContextMenu {
        card: b,
        x: 3,
        y: 4,
    });

    grid.set_value(Some("a-inode"));
    assert!(grid.card(b).unwrap().is_menu_open());
}

// ============================================================================
// Robustness
// ============================================================================

#[test]
fn test_unknown_card_is_ignored() {
    let mut grid = mounted(&["a"], None);
    let result = grid.handle(CardEvent::check(CardId::new(), true));
    assert_eq!(result, EventResult::Ignored);
    assert!(!result.is_handled());
    assert!(grid.selection().is_empty());
    assert!(grid.pending_events().is_empty());
}

#[test]
fn test_events_before_mount_are_ignored() {
    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::default();
    grid.set_items(items(&["a"])).unwrap();
    assert!(grid.cards().is_empty());
    assert_eq!(
        grid.handle(CardEvent::Activated { card: CardId::new() }),
        EventResult::Ignored
    );
}

#[test]
fn test_reject_duplicates_keeps_previous_items() {
    let mut grid: SelectionGrid<Contentlet> =
        SelectionGrid::new(GridConfig::new("strict").reject_duplicates());
    grid.set_items(items(&["a"])).unwrap();
    grid.mount();

    let result = grid.set_items(vec![
        Contentlet::new("v1", "page"),
        Contentlet::new("v2", "page"),
    ]);
    match result {
        Err(GridError::DuplicateIdentifier {
            identifier,
            first,
            second,
        }) => {
            assert_eq!(identifier, "page");
            assert_eq!(first, "v1");
            assert_eq!(second, "v2");
        }
        other => panic!("expected duplicate error, got {:?}", other),
    }
    assert_eq!(grid.items(), items(&["a"]).as_slice());
    assert_eq!(grid.cards().len(), 1);
}

#[test]
fn test_dirty_tracking() {
    let mut grid = mounted(&["a", "b"], None);
    assert!(grid.is_dirty());
    grid.clear_dirty();
    assert!(!grid.is_dirty());

    let a = grid.cards()[0].id();
    grid.handle(CardEvent::check(a, true));
    assert!(grid.is_dirty());
}

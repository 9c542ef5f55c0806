//! End-to-end layout scenarios
//!
//! Every event is resolved from an element of a freshly rendered fake
//! presentation layer, so ids and slot tags travel the same path they would
//! in a real host.

use modview_core::{
    LayoutSettings, Orientation, PaneId, Point, Rect, SequentialIdGenerator, SplitId,
    ViewController,
};

use super::dom::FakeDom;

type View = ViewController<&'static str, SequentialIdGenerator>;

fn new_view() -> View {
    ViewController::with_root_id(LayoutSettings::default(), "r", SequentialIdGenerator::new("n"))
}

fn dom(view: &View) -> FakeDom {
    FakeDom::render(&view.to_render_tree())
}

fn root() -> SplitId {
    SplitId::from("r")
}

/// Drops onto the split element itself (not into a slot).
fn drop_on_split(view: &mut View, split_id: &SplitId, payload: &'static str) -> PaneId {
    let dom = dom(view);
    let chain = dom.chain(dom.split(split_id));
    view.on_drop(&chain, payload).unwrap()
}

/// Presses the delete affordance inside a leaf.
fn delete_leaf(view: &mut View, pane_id: &PaneId) -> &'static str {
    let dom = dom(view);
    let chain = dom.chain(dom.leaf(pane_id));
    view.on_request_remove(&chain).unwrap().content
}

fn leaf_content(view: &View, split: &SplitId, first: bool) -> Option<&'static str> {
    let node = view.root().find_by_id(split)?;
    let slot = if first { &node.slot1 } else { &node.slot2 };
    slot.as_leaf().map(|pane| pane.content)
}

#[test]
fn third_drop_nests_slot_two() {
    let mut view = new_view();
    drop_on_split(&mut view, &root(), "A");
    assert_eq!(leaf_content(&view, &root(), true), Some("A"));
    assert!(view.root().slot2.is_empty());

    drop_on_split(&mut view, &root(), "B");
    assert_eq!(leaf_content(&view, &root(), false), Some("B"));

    drop_on_split(&mut view, &root(), "C");
    let nested = view.root().slot2.as_split().unwrap();
    assert_eq!(nested.orientation, Orientation::Column);
    assert_eq!(nested.depth, 1);
    assert_eq!(leaf_content(&view, &nested.id, true), Some("B"));
    assert_eq!(leaf_content(&view, &nested.id, false), Some("C"));
    assert_eq!(leaf_content(&view, &root(), true), Some("A"));
}

#[test]
fn removal_promotes_survivor_then_keeps_root() {
    let mut view = new_view();
    let a = drop_on_split(&mut view, &root(), "A");
    let b = drop_on_split(&mut view, &root(), "B");
    drop_on_split(&mut view, &root(), "C");
    let nested_id = view.root().slot2.as_split().unwrap().id.clone();

    assert_eq!(delete_leaf(&mut view, &b), "B");
    assert!(!view.root().contains(&nested_id));
    assert_eq!(leaf_content(&view, &root(), true), Some("A"));
    assert_eq!(leaf_content(&view, &root(), false), Some("C"));

    assert_eq!(delete_leaf(&mut view, &a), "A");
    assert!(view.root().slot1.is_empty());
    assert_eq!(leaf_content(&view, &root(), false), Some("C"));
    assert_eq!(view.root().split_count(), 1);
}

#[test]
fn drop_into_leaf_nests_the_entered_slot() {
    let mut view = new_view();
    let a = drop_on_split(&mut view, &root(), "A");
    drop_on_split(&mut view, &root(), "B");

    // Dropping onto A's content enters the root through slot 1
    let dom = dom(&view);
    let chain = dom.chain(dom.leaf(&a));
    view.on_drop(&chain, "D").unwrap();

    let nested = view.root().slot1.as_split().unwrap();
    assert_eq!(leaf_content(&view, &nested.id, true), Some("A"));
    assert_eq!(leaf_content(&view, &nested.id, false), Some("D"));
    assert_eq!(leaf_content(&view, &root(), false), Some("B"));
}

#[test]
fn resize_drag_through_rendered_handle() {
    let mut view = new_view();
    drop_on_split(&mut view, &root(), "A");

    // One child: no handle is drawn
    assert!(!dom(&view).has_handle(&root()));

    drop_on_split(&mut view, &root(), "B");
    let dom = dom(&view);
    assert!(view.on_pointer_down(&dom.chain(dom.handle(&root()))));

    let bounds = Rect::new(10.0, 10.0, 400.0, 300.0);
    for x in [110.0, 210.0, 310.0, 510.0] {
        let division = view.on_resize_drag(&root(), Point::new(x, 0.0), bounds).unwrap();
        assert!((0.0..=1.0).contains(&division));
    }
    assert!((view.root().division - 1.0).abs() < f64::EPSILON);
    view.on_pointer_release();

    let render = view.to_render_tree();
    assert!((render.children[0].weight - 1.0).abs() < f64::EPSILON);
    assert!(render.children[1].weight.abs() < f64::EPSILON);
}

#[test]
fn drop_on_resize_handle_is_not_a_target() {
    let mut view = new_view();
    drop_on_split(&mut view, &root(), "A");
    drop_on_split(&mut view, &root(), "B");

    let dom = dom(&view);
    let chain = dom.chain(dom.handle(&root()));
    assert_eq!(view.try_drop(&chain, "X"), Err("X"));
    assert_eq!(view.root().pane_count(), 2);
}

#[test]
fn rotate_nested_region_only() {
    let mut view = new_view();
    drop_on_split(&mut view, &root(), "A");
    drop_on_split(&mut view, &root(), "B");
    drop_on_split(&mut view, &root(), "C");
    let nested_id = view.root().slot2.as_split().unwrap().id.clone();

    assert!(view.on_rotate_request(&nested_id));
    assert_eq!(view.root().orientation, Orientation::Row);
    assert_eq!(
        view.root().find_by_id(&nested_id).unwrap().orientation,
        Orientation::Row
    );
}

#[test]
fn stale_element_after_removal_is_ignored() {
    let mut view = new_view();
    drop_on_split(&mut view, &root(), "A");
    let b = drop_on_split(&mut view, &root(), "B");
    let c = drop_on_split(&mut view, &root(), "C");
    let nested_id = view.root().slot2.as_split().unwrap().id.clone();

    // The host still holds elements rendered before the removal
    let stale = dom(&view);
    delete_leaf(&mut view, &b);
    let revision = view.revision();

    assert!(view.on_drop(&stale.chain(stale.split(&nested_id)), "X").is_none());
    assert!(view.on_request_remove(&stale.chain(stale.leaf(&b))).is_none());
    assert_eq!(view.revision(), revision);

    // C moved up into the root; its old element still names the gone split
    assert!(view.on_request_remove(&stale.chain(stale.leaf(&c))).is_none());
    assert_eq!(view.root().pane_count(), 2);
}

#[test]
fn emptying_the_view_keeps_the_root() {
    let mut view = new_view();
    let ids: Vec<PaneId> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|payload| drop_on_split(&mut view, &root(), payload))
        .collect();

    for id in &ids {
        delete_leaf(&mut view, id);
    }
    assert!(view.root().is_empty());
    assert_eq!(view.root().id, root());
    assert_eq!(view.to_render_tree().box_count(), 1);
}

//! Property-based tests for the split tree model
//!
//! **Feature: modview-split-tree**
//!
//! Random sequences of inserts, removals and rotations are applied to a
//! tree and its structural invariants are checked after every step.

use std::collections::HashSet;

use modview_core::split::{
    IdGenerator, Orientation, Pane, PaneId, SequentialIdGenerator, Slot, SplitId, ViewNode,
};
use proptest::prelude::*;

// ============================================================================
// Test Strategies
// ============================================================================

/// An operation on a tree; indices pick among the ids currently present
#[derive(Debug, Clone)]
enum TreeOp {
    Insert {
        target: usize,
        preferred: Option<Slot>,
    },
    Remove {
        pane: usize,
    },
    Rotate {
        split: usize,
    },
    Resize {
        split: usize,
        division: f64,
    },
}

fn slot_preference_strategy() -> impl Strategy<Value = Option<Slot>> {
    prop_oneof![Just(None), Just(Some(Slot::First)), Just(Some(Slot::Second))]
}

fn insert_strategy() -> impl Strategy<Value = TreeOp> {
    (0usize..32, slot_preference_strategy())
        .prop_map(|(target, preferred)| TreeOp::Insert { target, preferred })
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        4 => insert_strategy(),
        2 => (0usize..32).prop_map(|pane| TreeOp::Remove { pane }),
        1 => (0usize..32).prop_map(|split| TreeOp::Rotate { split }),
        1 => (0usize..32, -0.5f64..1.5).prop_map(|(split, division)| TreeOp::Resize { split, division }),
    ]
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

/// Tree under test together with its id source
struct Fixture {
    tree: ViewNode<u32>,
    ids: SequentialIdGenerator,
    next_content: u32,
}

impl Fixture {
    fn new(orientation: Orientation) -> Self {
        Self {
            tree: ViewNode::new("root", orientation),
            ids: SequentialIdGenerator::new("id"),
            next_content: 0,
        }
    }

    fn pick_split(&self, index: usize) -> SplitId {
        let ids = self.tree.split_ids();
        ids[index % ids.len()].clone()
    }

    fn insert(&mut self, target: &SplitId, preferred: Option<Slot>, max_depth: Option<usize>) -> Option<PaneId> {
        let pane_id = self.ids.next_pane_id();
        self.next_content += 1;
        let pane = Pane::new(pane_id.clone(), self.next_content);
        self.tree
            .insert(target, pane, preferred, max_depth, &mut self.ids)
            .ok()
            .map(|_| pane_id)
    }

    /// Applies an operation, ignoring refusals
    fn apply(&mut self, op: &TreeOp) {
        match op {
            TreeOp::Insert { target, preferred } => {
                let target = self.pick_split(*target);
                self.insert(&target, *preferred, None);
            }
            TreeOp::Remove { pane } => {
                let panes = self.tree.pane_ids();
                if !panes.is_empty() {
                    let _ = self.tree.remove_pane(&panes[pane % panes.len()]);
                }
            }
            TreeOp::Rotate { split } => {
                let split = self.pick_split(*split);
                let _ = self.tree.rotate(&split);
            }
            TreeOp::Resize { split, division } => {
                let split = self.pick_split(*split);
                let _ = self.tree.set_division(&split, *division);
            }
        }
    }
}

fn depths_are_distances(node: &ViewNode<u32>, expected: usize) -> bool {
    node.depth == expected
        && [&node.slot1, &node.slot2]
            .into_iter()
            .filter_map(|content| content.as_split())
            .all(|child| depths_are_distances(child, expected + 1))
}

/// No split other than the root has an empty slot
fn non_root_splits_are_full(tree: &ViewNode<u32>) -> bool {
    tree.split_ids()
        .iter()
        .skip(1)
        .all(|id| tree.find_by_id(id).is_some_and(ViewNode::is_full))
}

fn orientations(tree: &ViewNode<u32>) -> Vec<(SplitId, Orientation)> {
    tree.split_ids()
        .into_iter()
        .map(|id| {
            let orientation = tree.find_by_id(&id).map(|node| node.orientation);
            (id, orientation.unwrap_or_default())
        })
        .collect()
}

// ============================================================================
// Property 1: Id Uniqueness
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-split-tree, Property 1: Id Uniqueness
    //
    // *For any* sequence of inserts, every split id and pane id in the tree
    // is distinct.

    /// Test that inserts never produce duplicate ids
    #[test]
    fn prop_ids_unique_after_inserts(
        inserts in proptest::collection::vec(insert_strategy(), 0..40),
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &inserts {
            fixture.apply(op);
        }

        let splits = fixture.tree.split_ids();
        let panes = fixture.tree.pane_ids();
        let mut seen = HashSet::new();
        for id in splits.iter().map(SplitId::as_str).chain(panes.iter().map(PaneId::as_str)) {
            prop_assert!(seen.insert(id.to_owned()), "duplicate id {}", id);
        }
        prop_assert_eq!(panes.len(), inserts.len());
    }

    /// Test that ids stay unique across mixed operations
    #[test]
    fn prop_ids_unique_after_mixed_ops(
        ops in proptest::collection::vec(tree_op_strategy(), 0..60),
    ) {
        let mut fixture = Fixture::new(Orientation::Column);
        for op in &ops {
            fixture.apply(op);
        }

        let mut seen = HashSet::new();
        for id in fixture.tree.split_ids() {
            prop_assert!(seen.insert(id.as_str().to_owned()));
        }
        for id in fixture.tree.pane_ids() {
            prop_assert!(seen.insert(id.as_str().to_owned()));
        }
    }
}

// ============================================================================
// Property 2: Compaction Normal Form
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-split-tree, Property 2: Compaction Normal Form
    //
    // *For any* sequence of operations, no split has an empty slot unless it
    // is the root, and every depth equals the distance from the root.

    /// Test that the normal form holds after every step
    #[test]
    fn prop_normal_form_after_every_op(
        orientation in orientation_strategy(),
        ops in proptest::collection::vec(tree_op_strategy(), 0..60),
    ) {
        let mut fixture = Fixture::new(orientation);
        for op in &ops {
            fixture.apply(op);
            prop_assert!(non_root_splits_are_full(&fixture.tree), "after {:?}", op);
            prop_assert!(fixture.tree.is_compact());
            prop_assert!(depths_are_distances(&fixture.tree, 0));
        }
    }

    /// Test that removing every leaf empties the tree down to the root
    #[test]
    fn prop_removing_all_leaves_leaves_bare_root(
        inserts in proptest::collection::vec(insert_strategy(), 1..30),
        order_seed in any::<usize>(),
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &inserts {
            fixture.apply(op);
        }

        let mut remaining = fixture.tree.pane_count();
        while remaining > 0 {
            let panes = fixture.tree.pane_ids();
            let pane = &panes[order_seed % panes.len()];
            prop_assert!(fixture.tree.remove_pane(pane).is_ok());
            remaining -= 1;
            prop_assert_eq!(fixture.tree.pane_count(), remaining);
            prop_assert!(fixture.tree.find_pane(pane).is_none());
        }

        prop_assert!(fixture.tree.is_empty());
        prop_assert_eq!(fixture.tree.split_count(), 1);
        prop_assert_eq!(fixture.tree.id.as_str(), "root");
    }
}

// ============================================================================
// Property 3: Insert/Remove Inverse
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-split-tree, Property 3: Insert/Remove Inverse
    //
    // *For any* tree in normal form and any target split, inserting a leaf
    // and then removing that same leaf restores the previous tree, ids of
    // untouched nodes included.

    /// Test that insert followed by removal of the new leaf is an identity
    #[test]
    fn prop_insert_then_remove_restores_tree(
        ops in proptest::collection::vec(tree_op_strategy(), 0..40),
        target in 0usize..32,
        preferred in slot_preference_strategy(),
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &ops {
            fixture.apply(op);
        }
        let before = fixture.tree.clone();

        let target = fixture.pick_split(target);
        let pane_id = fixture.insert(&target, preferred, None);
        prop_assert!(pane_id.is_some());
        let pane_id = pane_id.unwrap_or_else(|| PaneId::from("unreachable"));

        let removed = fixture.tree.remove_pane(&pane_id);
        prop_assert!(removed.is_ok());
        prop_assert_eq!(&fixture.tree, &before);
    }

    /// Test that nesting is refused exactly past the depth limit and refusals leave the tree unchanged
    #[test]
    fn prop_max_depth_is_respected(
        max_depth in 1usize..4,
        inserts in proptest::collection::vec(insert_strategy(), 0..40),
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &inserts {
            let TreeOp::Insert { target, preferred } = op else {
                continue;
            };
            let target = fixture.pick_split(*target);
            let node = fixture.tree.find_by_id(&target);
            prop_assert!(node.is_some());
            let (nests, target_depth) =
                node.map_or((false, 0), |node| (node.is_full(), node.depth));
            let before = fixture.tree.clone();

            let inserted = fixture.insert(&target, *preferred, Some(max_depth));
            let refused = nests && target_depth + 1 > max_depth;

            prop_assert_eq!(inserted.is_none(), refused);
            if refused {
                prop_assert_eq!(&fixture.tree, &before);
            }
        }
    }
}

// ============================================================================
// Property 4: Rotation Is Subtree-Total
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-split-tree, Property 4: Rotation Is Subtree-Total
    //
    // *For any* split S, rotating S flips S and every split below it; every
    // other split keeps its orientation.

    /// Test that rotation flips exactly the subtree
    #[test]
    fn prop_rotation_flips_exactly_the_subtree(
        ops in proptest::collection::vec(tree_op_strategy(), 0..40),
        split in 0usize..32,
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &ops {
            fixture.apply(op);
        }
        let target = fixture.pick_split(split);
        let subtree: HashSet<SplitId> = fixture
            .tree
            .find_by_id(&target)
            .map(ViewNode::split_ids)
            .unwrap_or_default()
            .into_iter()
            .collect();
        let before = orientations(&fixture.tree);

        prop_assert!(fixture.tree.rotate(&target).is_ok());

        let after = orientations(&fixture.tree);
        prop_assert_eq!(before.len(), after.len());
        for ((id, old), (_, new)) in before.iter().zip(&after) {
            if subtree.contains(id) {
                prop_assert_eq!(*new, old.complement());
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    /// Test that rotating twice restores the tree
    #[test]
    fn prop_double_rotation_is_identity(
        ops in proptest::collection::vec(tree_op_strategy(), 0..40),
        split in 0usize..32,
    ) {
        let mut fixture = Fixture::new(Orientation::Column);
        for op in &ops {
            fixture.apply(op);
        }
        let before = fixture.tree.clone();
        let target = fixture.pick_split(split);

        prop_assert!(fixture.tree.rotate(&target).is_ok());
        prop_assert!(fixture.tree.rotate(&target).is_ok());
        prop_assert_eq!(&fixture.tree, &before);
    }
}

// ============================================================================
// Property 5: Division Bounds
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-split-tree, Property 5: Division Bounds
    //
    // *For any* sequence of operations every division stays within [0, 1].

    /// Test that divisions never leave the unit range
    #[test]
    fn prop_divisions_stay_in_unit_range(
        ops in proptest::collection::vec(tree_op_strategy(), 0..60),
    ) {
        let mut fixture = Fixture::new(Orientation::Row);
        for op in &ops {
            fixture.apply(op);
            for id in fixture.tree.split_ids() {
                let division = fixture.tree.find_by_id(&id).map_or(0.5, |node| node.division);
                prop_assert!((0.0..=1.0).contains(&division));
            }
        }
    }
}

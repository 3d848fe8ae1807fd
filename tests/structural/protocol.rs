//! Integration tests for copy, equality, and the deep path protocol.

use trellis::foundation::{State, path, record};
use trellis::structural::{Comparable, Copyable, Structural};

use crate::types::{Shape, Tally, Vector};

// =============================================================================
// Copy and equality laws
// =============================================================================

#[test]
fn copy_is_distinct_and_equal() {
    let v1 = Vector::new(2, 2);
    let v2 = v1.copy();

    assert!(v1.equals(&v2));
    assert!(v2.equals(&v1));
    // Mutating the copy leaves the original untouched.
    let v3 = v2.apply_root(record! { "x" => 99 }).unwrap();
    assert!(v1.equals(&Vector::new(2, 2)));
    assert!(v3.equals(&Vector::new(99, 2)));
}

#[test]
fn equality_requires_same_constructor() {
    #[derive(Clone)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl trellis::foundation::Stateful for Point {
        fn state(&self) -> State {
            record! { "x" => self.x, "y" => self.y }
        }

        fn set_state(&mut self, _update: State) -> trellis::foundation::Result<()> {
            Ok(())
        }

        fn duplicate(&self) -> Box<dyn trellis::foundation::Stateful> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    let vector = Vector::new(1, 2);
    let point = Point { x: 1, y: 2 };
    // Identical state shape, different concrete type: never equal.
    assert!(!vector.equals(&point));
}

#[test]
fn equality_is_value_based() {
    assert!(Vector::new(3, 2).equals(&Vector::new(3, 2)));
    assert!(!Vector::new(3, 2).equals(&Vector::new(2, 3)));
}

// =============================================================================
// apply: copy-on-write writes
// =============================================================================

#[test]
fn apply_root_replaces_fields() {
    let v1 = Vector::new(2, 2);
    let v3 = v1.apply_root(record! { "x" => 3, "y" => 2 }).unwrap();

    assert!(v1.equals(&Vector::new(2, 2)));
    assert!(v3.equals(&Vector::new(3, 2)));
}

#[test]
fn apply_partial_root_update_keeps_other_fields() {
    let v1 = Vector::new(2, 7);
    let v2 = v1.apply_root(record! { "x" => 5 }).unwrap();
    assert!(v2.equals(&Vector::new(5, 7)));
}

#[test]
fn apply_never_mutates_the_original() {
    let shape = Shape::new("turquoise", Vector::new(10, 10));
    let before = shape.deep_state().unwrap();

    let _updated = shape.apply("position", record! { "y" => 5 }).unwrap();

    assert_eq!(shape.deep_state().unwrap(), before);
}

#[test]
fn apply_round_trips_a_direct_write() {
    let shape = Shape::new("teal", Vector::new(1, 1));
    let updated = shape.apply(path!("position", "y"), 5).unwrap();
    assert_eq!(updated.get_in(path!("position", "y")).unwrap(), State::Int(5));
}

#[test]
fn nested_partial_update_preserves_sub_structure() {
    let shape = Shape::new("turquoise", Vector::new(10, 10));
    let shape2 = shape.apply("position", record! { "y" => 5 }).unwrap();

    // The untouched field and the concrete sub-type both survive.
    assert_eq!(shape2.position.x, 10);
    assert_eq!(shape2.position.y, 5);
    assert_eq!(shape2.color, "turquoise");
}

#[test]
fn node_update_value_replaces_wholesale() {
    let shape = Shape::new("teal", Vector::new(1, 1));
    let replacement = trellis::foundation::NodeRef::new(Vector::new(8, 9));
    let shape2 = shape
        .apply_root(record! { "position" => replacement })
        .unwrap();

    assert!(shape2.position.equals(&Vector::new(8, 9)));
}

#[test]
fn scalar_state_root_replacement() {
    let t1 = Tally(4);
    let t2 = t1.apply_root(9).unwrap();
    assert_eq!(t1.0, 4);
    assert_eq!(t2.0, 9);
}

// =============================================================================
// get_in: flattened deep reads
// =============================================================================

#[test]
fn deep_state_flattens_embedded_nodes() {
    let shape = Shape::new("turquoise", Vector::new(10, 10));
    let shape2 = shape.apply("position", record! { "y" => 5 }).unwrap();

    let expected = record! {
        "color" => "turquoise",
        "position" => record! { "x" => 10, "y" => 5 },
    };
    assert_eq!(shape2.deep_state().unwrap(), expected);
}

#[test]
fn get_in_terminal_node_is_flattened() {
    let shape = Shape::new("teal", Vector::new(3, 4));
    let position = shape.get_in("position").unwrap();
    assert_eq!(position, record! { "x" => 3, "y" => 4 });
}

#[test]
fn get_in_descends_through_nodes() {
    let shape = Shape::new("teal", Vector::new(3, 4));
    assert_eq!(shape.get_in(path!("position", "x")).unwrap(), State::Int(3));
}

#[test]
fn get_in_scalar_root() {
    let t = Tally(42);
    assert_eq!(t.deep_state().unwrap(), State::Int(42));
}

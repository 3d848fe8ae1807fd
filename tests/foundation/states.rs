//! Integration tests for the State value tree.

use std::any::Any;

use trellis::foundation::{
    Error, NodeRef, Result, State, Stateful, copy_state, deep_equal, record,
};

#[derive(Clone)]
struct Cell(i64);

impl Stateful for Cell {
    fn state(&self) -> State {
        record! { "value" => self.0 }
    }

    fn set_state(&mut self, update: State) -> Result<()> {
        if let Some(v) = update.field("value") {
            self.0 = v
                .as_int()
                .ok_or_else(|| Error::type_mismatch("int", v.kind()))?;
        }
        Ok(())
    }

    fn duplicate(&self) -> Box<dyn Stateful> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Clone)]
struct Mirror(i64);

impl Stateful for Mirror {
    fn state(&self) -> State {
        record! { "value" => self.0 }
    }

    fn set_state(&mut self, _update: State) -> Result<()> {
        Ok(())
    }

    fn duplicate(&self) -> Box<dyn Stateful> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Construction and accessors
// =============================================================================

#[test]
fn state_scalar_accessors() {
    assert!(State::Nil.is_nil());
    assert_eq!(State::from(false).as_bool(), Some(false));
    assert_eq!(State::from(7).as_int(), Some(7));
    assert_eq!(State::from(1.5).as_float(), Some(1.5));
    assert_eq!(State::from("hello").as_str(), Some("hello"));
    assert_eq!(State::from(7).as_str(), None);
}

#[test]
fn state_record_field_lookup() {
    let state = record! { "color" => "red", "width" => 3 };
    assert_eq!(state.field("color").and_then(State::as_str), Some("red"));
    assert!(state.field("height").is_none());
}

#[test]
fn state_kinds() {
    assert_eq!(State::Nil.kind(), "nil");
    assert_eq!(State::from(1).kind(), "int");
    assert_eq!(record! {}.kind(), "record");
    assert_eq!(State::from(vec![1i32]).kind(), "list");
    assert_eq!(State::Node(NodeRef::new(Cell(1))).kind(), "node");
}

// =============================================================================
// Deep equality
// =============================================================================

#[test]
fn deep_equal_nested_records() {
    let a = record! { "outer" => record! { "inner" => vec![1i32, 2] } };
    let b = record! { "outer" => record! { "inner" => vec![1i32, 2] } };
    assert!(deep_equal(&a, &b));
}

#[test]
fn deep_equal_delegates_to_nodes() {
    let a = record! { "cell" => NodeRef::new(Cell(5)) };
    let b = record! { "cell" => NodeRef::new(Cell(5)) };
    let c = record! { "cell" => NodeRef::new(Cell(6)) };
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &c));
}

#[test]
fn deep_equal_node_never_equals_plain_record() {
    let node = record! { "cell" => NodeRef::new(Cell(5)) };
    let plain = record! { "cell" => record! { "value" => 5 } };
    assert!(!deep_equal(&node, &plain));
}

#[test]
fn deep_equal_constructor_identity() {
    // Same state shape, different concrete types.
    let cell = State::Node(NodeRef::new(Cell(5)));
    let mirror = State::Node(NodeRef::new(Mirror(5)));
    assert!(!deep_equal(&cell, &mirror));
}

// =============================================================================
// Leaf copier
// =============================================================================

#[test]
fn copy_state_duplicates_nodes() {
    let node = NodeRef::new(Cell(9));
    let original = record! { "cell" => node.clone() };

    let copied = copy_state(&original).unwrap();
    let copied_node = copied.field("cell").and_then(State::as_node).unwrap();

    assert!(copied_node.node_eq(&node));
    assert!(!copied_node.ptr_eq(&node));
}

#[test]
fn copy_state_preserves_equality() {
    let original = record! {
        "name" => "grid",
        "cells" => vec![1i32, 2, 3],
        "nested" => record! { "deep" => record! { "leaf" => true } },
    };
    let copied = copy_state(&original).unwrap();
    assert_eq!(original, copied);
}

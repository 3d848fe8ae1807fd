//! Property tests for the protocol's algebraic laws.

use proptest::prelude::*;

use trellis::foundation::{State, Stateful, record};
use trellis::structural::{Comparable, Copyable, Structural};

use crate::types::{Shape, Vector};

fn arb_vector() -> impl Strategy<Value = Vector> {
    (any::<i64>(), any::<i64>()).prop_map(|(x, y)| Vector::new(x, y))
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    ("[a-z]{1,12}", arb_vector()).prop_map(|(color, position)| Shape::new(color, position))
}

proptest! {
    #[test]
    fn copy_equals_original(v in arb_vector()) {
        let copy = v.copy();
        prop_assert!(v.equals(&copy));
        prop_assert!(copy.equals(&v));
    }

    #[test]
    fn apply_does_not_mutate_original(shape in arb_shape(), y in any::<i64>()) {
        let before = shape.deep_state().unwrap();
        let _updated = shape.apply("position", record! { "y" => y }).unwrap();
        prop_assert_eq!(shape.deep_state().unwrap(), before);
    }

    #[test]
    fn apply_round_trip(shape in arb_shape(), x in any::<i64>()) {
        let updated = shape.apply(trellis::foundation::path!("position", "x"), x).unwrap();
        prop_assert_eq!(
            updated.get_in(trellis::foundation::path!("position", "x")).unwrap(),
            State::Int(x)
        );
    }

    #[test]
    fn partial_update_preserves_untouched_fields(shape in arb_shape(), y in any::<i64>()) {
        let updated = shape.apply("position", record! { "y" => y }).unwrap();
        prop_assert_eq!(updated.position.x, shape.position.x);
        prop_assert_eq!(updated.position.y, y);
        prop_assert_eq!(&updated.color, &shape.color);
    }

    #[test]
    fn set_state_of_own_state_is_noop(v in arb_vector()) {
        let snapshot = v.copy().apply_root(v.state()).unwrap();
        prop_assert!(snapshot.equals(&v));
    }
}

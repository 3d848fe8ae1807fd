//! Integration tests for the persistent collections.

use trellis::foundation::{Key, State, StateMap, StateVec};

#[test]
fn vec_modifications_share_structure() {
    let v1: StateVec<i64> = (0..100).collect();
    let v2 = v1.push_back(100);
    let v3 = v1.update(0, -1).unwrap();

    assert_eq!(v1.len(), 100);
    assert_eq!(v2.len(), 101);
    assert_eq!(v3.get(0), Some(&-1));
    assert_eq!(v1.get(0), Some(&0));
}

#[test]
fn map_insert_remove_do_not_mutate() {
    let m1: StateMap<Key, State> = StateMap::new().insert(Key::from("a"), State::Int(1));
    let m2 = m1.insert(Key::from("b"), State::Int(2));
    let m3 = m2.remove(&Key::from("a"));

    assert_eq!(m1.len(), 1);
    assert_eq!(m2.len(), 2);
    assert_eq!(m3.len(), 1);
    assert!(m1.contains_key(&Key::from("a")));
    assert!(!m3.contains_key(&Key::from("a")));
}

#[test]
fn map_union_prefers_other() {
    let base = StateMap::new()
        .insert(Key::from("x"), State::Int(1))
        .insert(Key::from("y"), State::Int(2));
    let update = StateMap::new().insert(Key::from("x"), State::Int(9));

    let merged = base.union(&update);
    assert_eq!(merged.get(&Key::from("x")), Some(&State::Int(9)));
    assert_eq!(merged.get(&Key::from("y")), Some(&State::Int(2)));
}

#[test]
fn collections_equal_by_value() {
    let a: StateVec<i64> = (0..5).collect();
    let b: StateVec<i64> = (0..5).collect();
    assert_eq!(a, b);

    let m1: StateMap<Key, State> = StateMap::new().insert(Key::from("k"), State::Bool(true));
    let m2: StateMap<Key, State> = StateMap::new().insert(Key::from("k"), State::Bool(true));
    assert_eq!(m1, m2);
}

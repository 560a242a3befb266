//! SparseSet generational handle tests.
//!
//! The curve registry hands out `IndexSlot`s as curve handles, so stale
//! handles must be detected after removal and slots must be reused.

use bezel_core::alloc::sparse_set::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let first = set.push(String::from("left rail"));
    let second = set.push(String::from("right rail"));

    assert_eq!(set.get(first), "left rail");
    assert_eq!(set.get(second), "right rail");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();

    let idx = set.push(vec![1.0_f32]);
    set.get_mut(idx).push(2.0);

    assert_eq!(set.get(idx), &vec![1.0, 2.0]);
}

#[test]
fn test_try_get_out_of_range() {
    let set = SparseSet::<i32>::new();
    assert_eq!(set.try_get(IndexSlot::new(0, 999)), None);
}

#[test]
#[should_panic(expected = "invalid generation")]
fn test_use_after_free_panics() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    set.remove(idx);

    let _ = set.get(idx);
}

#[test]
fn test_try_remove_twice() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    assert_eq!(set.try_remove(idx), Some(42));
    assert_eq!(set.try_remove(idx), None);
    assert_eq!(set.len(), 0);
}

#[test]
fn test_slot_reuse_bumps_generation() {
    let mut set = SparseSet::new();

    let a = set.push(1);
    let b = set.push(2);
    let _c = set.push(3);

    set.remove(b);
    let d = set.push(4);

    assert_eq!(d.index(), b.index());
    assert_eq!(d.generation(), b.generation() + 1);
    assert_eq!(set.try_get(b), None);
    assert_eq!(*set.get(d), 4);
    assert_eq!(*set.get(a), 1);
}

#[test]
fn test_iteration_skips_removed() {
    let mut set = SparseSet::new();

    set.push(10);
    let idx = set.push(20);
    set.push(30);
    set.remove(idx);

    let values: Vec<_> = set.iter().copied().collect();
    assert_eq!(values, vec![10, 30]);

    let slots: Vec<_> = set.iter_with_slots().map(|(slot, _)| slot.index()).collect();
    assert_eq!(slots, vec![0, 2]);
}

#[test]
fn test_iter_mut() {
    let mut set = SparseSet::new();

    set.push(10);
    set.push(20);

    for val in set.iter_mut() {
        *val *= 2;
    }

    let values: Vec<_> = set.iter().copied().collect();
    assert_eq!(values, vec![20, 40]);
}

//! Drop accounting across the array's lifecycle: every constructed element is
//! dropped exactly once, and relocation never constructs or drops.

use dynarray::{dynarray, DynArray};
use dynarray_test_utils::{values, Tracker};

#[test]
fn growth_relocates_without_cloning() {
    let tracker = Tracker::new();
    let mut array = DynArray::new();
    for i in 0..100 {
        array.push_back(tracker.track(i));
    }
    assert_eq!(tracker.created(), 100);
    assert_eq!(tracker.dropped(), 0);

    array.reserve(1000);
    array.shrink_to_fit();
    assert_eq!(array.capacity(), 100);
    assert_eq!(tracker.created(), 100);
    assert_eq!(tracker.dropped(), 0);
}

#[test]
fn every_removal_path_drops_once() {
    let tracker = Tracker::new();
    {
        let mut array = DynArray::new();
        for i in 0..10 {
            array.push_back(tracker.track(i));
        }

        drop(array.pop_back());
        assert_eq!(tracker.live(), 9);

        array.truncate(6);
        assert_eq!(tracker.live(), 6);

        array.resize_with(4, || unreachable!("shrinking never constructs"));
        assert_eq!(tracker.live(), 4);

        let copy = array.clone();
        assert_eq!(tracker.live(), 8);

        array.clear();
        assert_eq!(tracker.live(), 4);
        assert_eq!(array.capacity(), 16);

        array.extend(copy);
        assert_eq!(values(&array), vec![0, 1, 2, 3]);
    }
    assert_eq!(tracker.live(), 0);
    assert_eq!(tracker.created(), tracker.dropped());
}

#[test]
fn moves_transfer_without_double_drop() {
    let tracker = Tracker::new();
    let mut source = DynArray::from([tracker.track(1), tracker.track(2)]);

    let mut target = source.take();
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);

    let mut other = dynarray![tracker.track(7)];
    other.assign_from(&mut target);
    assert_eq!(tracker.live(), 2);
    assert_eq!(values(&other), vec![1, 2]);
    assert_eq!(target.capacity(), 0);

    drop(source);
    drop(target);
    assert_eq!(tracker.live(), 2);
    drop(other);
    assert_eq!(tracker.live(), 0);
}

#[test]
fn swap_touches_no_element() {
    let tracker = Tracker::new();
    let mut a = DynArray::from([tracker.track(1)]);
    let mut b = DynArray::from([tracker.track(2), tracker.track(3)]);

    let created = tracker.created();
    a.swap_with(&mut b);
    assert_eq!(tracker.created(), created);
    assert_eq!(tracker.dropped(), 0);
    assert_eq!(values(&a), vec![2, 3]);
    assert_eq!(values(&b), vec![1]);
}

#[test]
fn clone_then_compare_round_trip() {
    let tracker = Tracker::new();
    let original: DynArray<_> = (0..6).map(|i| tracker.track(i)).collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_back(tracker.track(6));
    assert!(original < copy);
    assert_eq!(original.len(), 6);
}

#[test]
fn owned_iteration_drops_the_unconsumed_tail() {
    let tracker = Tracker::new();
    let array = DynArray::from_fn(5, tracker.factory());

    let firsts: Vec<i32> = array.into_iter().take(2).map(|t| t.value()).collect();
    assert_eq!(firsts, vec![0, 1]);
    assert_eq!(tracker.live(), 0);
}

//! Strong failure guarantee: a construction that fails part-way through a
//! growing operation leaves the array exactly as it was, with nothing leaked
//! and nothing dropped twice.

use dynarray::{DynArray, TryBuildError};
use dynarray_test_utils::{assert_panics, values, InjectedFailure, Tracked, Tracker};

/// Push `0..n` one at a time, so capacity follows the doubling schedule.
fn filled(tracker: &Tracker, n: i32) -> DynArray<Tracked> {
    let mut array = DynArray::new();
    for i in 0..n {
        array.push_back(tracker.track(i));
    }
    array
}

#[test]
fn emplace_back_failure_while_full_keeps_state() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 4);
    assert_eq!(array.capacity(), 4);
    let data = array.as_ptr();

    tracker.fail_on(1);
    let mut make = tracker.factory();
    assert_panics(|| {
        array.emplace_back(&mut make);
    });

    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.as_ptr(), data);
    assert_eq!(values(&array), vec![0, 1, 2, 3]);
    assert_eq!(tracker.live(), 4);
}

#[test]
fn try_emplace_back_failure_while_full_keeps_state() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 2);

    tracker.fail_on(1);
    let result = array.try_emplace_back(tracker.try_factory()).map(|slot| slot.value());
    assert_eq!(result, Err(TryBuildError::Element(InjectedFailure)));

    assert_eq!(array.capacity(), 2);
    assert_eq!(values(&array), vec![0, 1]);
    assert_eq!(tracker.live(), 2);
}

#[test]
fn resize_past_capacity_failure_keeps_state() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 3);
    let fill = tracker.track(9);
    assert_eq!(array.capacity(), 4);

    tracker.fail_on(3);
    assert_panics(|| array.resize_with_value(8, &fill));

    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 4);
    assert_eq!(values(&array), vec![0, 1, 2]);
    assert_eq!(tracker.live(), 4);
}

#[test]
fn resize_within_capacity_failure_keeps_state() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 5);
    let fill = tracker.track(9);
    assert_eq!(array.capacity(), 8);

    tracker.fail_on(2);
    assert_panics(|| array.resize_with_value(8, &fill));

    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 8);
    assert_eq!(tracker.live(), 6);
}

#[test]
fn try_resize_with_reports_element_error_and_rolls_back() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 2);

    tracker.fail_on(4);
    let result = array.try_resize_with(10, tracker.try_factory());
    assert_eq!(result, Err(TryBuildError::Element(InjectedFailure)));
    assert_eq!(array.len(), 2);
    assert_eq!(array.capacity(), 2);
    assert_eq!(tracker.live(), 2);

    array.try_resize_with(4, tracker.try_factory()).unwrap();
    assert_eq!(values(&array), vec![0, 1, 0, 1]);
}

#[test]
fn clone_failure_leaks_nothing_and_leaves_source_alone() {
    let tracker = Tracker::new();
    let original = filled(&tracker, 5);

    tracker.fail_on(3);
    assert_panics(|| original.clone());

    assert_eq!(tracker.live(), 5);
    assert_eq!(values(&original), vec![0, 1, 2, 3, 4]);
}

#[test]
fn clone_from_failure_leaves_target_unchanged() {
    let tracker = Tracker::new();
    let source = filled(&tracker, 3);
    let mut target = DynArray::from([tracker.track(100)]);

    tracker.fail_on(2);
    assert_panics(|| target.clone_from(&source));

    assert_eq!(values(&target), vec![100]);
    assert_eq!(target.capacity(), 1);
    assert_eq!(tracker.live(), 4);
}

#[test]
fn from_elem_failure_releases_partial_run() {
    let tracker = Tracker::new();
    let template = tracker.track(1);

    tracker.fail_on(3);
    assert_panics(|| DynArray::from_elem(5, &template));

    assert_eq!(tracker.live(), 1);
}

#[test]
fn from_slice_failure_releases_partial_run() {
    let tracker = Tracker::new();
    let items: Vec<Tracked> = (0..4).map(|i| tracker.track(i)).collect();

    tracker.fail_on(4);
    assert_panics(|| DynArray::from_slice(&items));

    assert_eq!(tracker.live(), 4);
}

#[test]
fn from_fn_panic_releases_partial_run() {
    let tracker = Tracker::new();

    tracker.fail_on(6);
    assert_panics(|| DynArray::from_fn(6, tracker.factory()));

    assert_eq!(tracker.live(), 0);
}

#[test]
fn try_from_fn_error_releases_partial_run() {
    let tracker = Tracker::new();

    tracker.fail_on(5);
    let result = DynArray::try_from_fn(6, tracker.try_factory());

    assert!(matches!(result, Err(TryBuildError::Element(InjectedFailure))));
    assert_eq!(tracker.live(), 0);
}

#[test]
fn array_is_usable_after_failed_growth() {
    let tracker = Tracker::new();
    let mut array = filled(&tracker, 4);

    tracker.fail_on(1);
    assert_panics(|| array.resize_with(6, tracker.factory()));

    array.push_back(tracker.track(4));
    assert_eq!(values(&array), vec![0, 1, 2, 3, 4]);
    assert_eq!(array.capacity(), 8);
    drop(array);
    assert_eq!(tracker.live(), 0);
}

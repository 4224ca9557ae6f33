//! Benchmark workloads for the dynarray container.
//!
//! Each workload exists in two forms, one over [`DynArray`] and one over
//! `Vec`, so the benches compare like with like:
//!
//! - [`push_sequence`] / [`push_sequence_vec`]: `n` tail pushes from empty
//! - [`churn`] / [`churn_vec`]: interleaved push, pop and resize

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynArray;

/// Push `0..n` onto an empty array.
pub fn push_sequence(n: u64) -> DynArray<u64> {
    let mut array = DynArray::new();
    for i in 0..n {
        array.push_back(i);
    }
    array
}

/// `Vec` counterpart of [`push_sequence`].
pub fn push_sequence_vec(n: u64) -> Vec<u64> {
    let mut vec = Vec::new();
    for i in 0..n {
        vec.push(i);
    }
    vec
}

/// Run `rounds` of: push 8, pop 3, resize to `len + 2`, every 16th round
/// shrink to fit. Returns the final length.
pub fn churn(rounds: usize) -> usize {
    let mut array: DynArray<u64> = DynArray::new();
    for round in 0..rounds {
        for i in 0..8 {
            array.push_back(i);
        }
        for _ in 0..3 {
            array.pop_back();
        }
        let len = array.len();
        array.resize_with_value(len + 2, &(round as u64));
        if round % 16 == 15 {
            array.shrink_to_fit();
        }
    }
    array.len()
}

/// `Vec` counterpart of [`churn`].
pub fn churn_vec(rounds: usize) -> usize {
    let mut vec: Vec<u64> = Vec::new();
    for round in 0..rounds {
        for i in 0..8 {
            vec.push(i);
        }
        for _ in 0..3 {
            vec.pop();
        }
        let len = vec.len();
        vec.resize(len + 2, round as u64);
        if round % 16 == 15 {
            vec.shrink_to_fit();
        }
    }
    vec.len()
}

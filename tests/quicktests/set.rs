use avl_set::{AvlSet, Error};

use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to an `AvlSet` and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values as the model. Duplicate
/// inserts must be refused exactly when the model already holds the value,
/// and removals must report presence exactly as the model does.
fn do_ops<K>(ops: &[Op<K>], set: &mut AvlSet<K>, model: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                let expected = if model.contains(k) {
                    Err(Error::DuplicateValue)
                } else {
                    Ok(true)
                };
                assert_eq!(set.add(k.clone()), expected);
                model.insert(k.clone());
            }
            Op::Remove(k) => {
                assert_eq!(set.remove(k), model.remove(k));
            }
            Op::Iter => {
                assert!(set.iter().eq(model.iter()));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = AvlSet::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut set, &mut model);

    set.len() == model.len() && model.iter().all(|k| set.contains(k))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut set = AvlSet::new();
    for x in &xs {
        // Duplicates in the input are refused; everything else goes in.
        let _ = set.add(*x);
    }

    xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut set = AvlSet::new();
    for x in &xs {
        let _ = set.add(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x))
}

#[quickcheck]
fn iteration_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut set = AvlSet::new();
    let mut model = BTreeSet::new();
    do_ops(&ops, &mut set, &mut model);

    let values: Vec<i8> = set.iter().copied().collect();
    values.windows(2).all(|w| w[0] < w[1]) && values.len() == set.len()
}

#[quickcheck]
fn first_and_last_match_the_model(xs: Vec<i8>) -> bool {
    let mut set = AvlSet::new();
    for x in &xs {
        let _ = set.add(*x);
    }
    let model: BTreeSet<i8> = xs.into_iter().collect();

    set.first().ok() == model.iter().next() && set.last().ok() == model.iter().last()
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, probe: i8) -> bool {
    let mut set = AvlSet::new();
    for x in &xs {
        let _ = set.add(*x);
    }
    if set.contains(&probe) {
        // Already present; nothing to round-trip.
        return true;
    }
    let before: Vec<i8> = set.iter().copied().collect();

    set.add(probe).unwrap();
    assert!(set.remove(&probe));

    set.iter().copied().eq(before)
}

#[quickcheck]
fn cursor_drains_the_ascending_sequence(xs: Vec<i8>) -> bool {
    let mut set = AvlSet::new();
    for x in &xs {
        let _ = set.add(*x);
    }
    let before: Vec<i8> = set.iter().copied().collect();

    let mut drained = Vec::new();
    let mut cursor = set.cursor();
    while let Some(value) = cursor.next() {
        drained.push(value);
        cursor.remove().unwrap();
    }

    drained == before && set.is_empty()
}

#[quickcheck]
fn range_queries_match_the_model(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let (from, to) = if a < b { (a, b) } else { (b, a) };
    if from == to {
        return true;
    }

    let mut set = AvlSet::new();
    for x in &xs {
        let _ = set.add(*x);
    }
    let model: BTreeSet<i8> = xs.into_iter().collect();
    let in_range: Vec<i8> = model.range(from..to).copied().collect();

    let view = set.sub_range(from, to).unwrap();
    view.len() == in_range.len()
        && in_range.iter().all(|x| view.contains(x))
        && view.first().ok() == in_range.first()
        && view.last().ok() == in_range.last()
}

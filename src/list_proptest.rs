#![cfg(test)]

// Property tests for DoublyLinkedList kept inside the crate so the arena and
// cursor can be checked structurally after each operation.

use crate::error::Error;
use crate::list::DoublyLinkedList;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    PushBack(u16),
    PushFront(u16),
    PopBack,
    PopFront,
    Get(usize),
    Set(usize, u16),
    InsertBefore(usize, u16),
    InsertAfter(usize, u16),
    InsertMany(usize, Vec<u16>),
    Remove(usize),
    Clear,
}

// Indices are drawn a little past any length the ops build, so both the
// in-range and out-of-range paths are exercised.
fn arb_op() -> impl Strategy<Value = Op> {
    let idx = 0usize..48;
    prop_oneof![
        4 => any::<u16>().prop_map(Op::PushBack),
        3 => any::<u16>().prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        4 => idx.clone().prop_map(Op::Get),
        2 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| Op::InsertBefore(i, v)),
        2 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| Op::InsertAfter(i, v)),
        1 => (idx.clone(), proptest::collection::vec(any::<u16>(), 0..6))
            .prop_map(|(i, vs)| Op::InsertMany(i, vs)),
        3 => idx.prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

// Property: State-machine equivalence against VecDeque.
// - Forward and reverse walks match the model after every op.
// - Index errors carry the index and length, and leave the list unchanged.
// - The arena holds exactly len + 2 nodes; links are symmetric; the cursor
//   points at a live node whose offset matches its position.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_vecdeque(ops in proptest::collection::vec(arb_op(), 1..80)) {
        let mut sut: DoublyLinkedList<u16> = DoublyLinkedList::new();
        let mut model: VecDeque<u16> = VecDeque::new();

        for op in ops {
            let len = model.len();
            match op {
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push_back(v);
                }
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.push_front(v);
                }
                Op::PopBack => match model.pop_back() {
                    Some(v) => prop_assert_eq!(sut.pop_back(), Ok(v)),
                    None => prop_assert_eq!(sut.pop_back(), Err(Error::underflow("pop"))),
                },
                Op::PopFront => match model.pop_front() {
                    Some(v) => prop_assert_eq!(sut.pop_front(), Ok(v)),
                    None => prop_assert_eq!(sut.pop_front(), Err(Error::underflow("shift"))),
                },
                Op::Get(i) => match model.get(i) {
                    Some(v) => prop_assert_eq!(sut.get(i), Ok(v)),
                    None => prop_assert_eq!(sut.get(i), Err(Error::out_of_range(i, len))),
                },
                Op::Set(i, v) => {
                    if i < len {
                        let old = core::mem::replace(&mut model[i], v);
                        prop_assert_eq!(sut.set(i, v), Ok(old));
                    } else {
                        prop_assert_eq!(sut.set(i, v), Err(Error::out_of_range(i, len)));
                    }
                }
                Op::InsertBefore(i, v) => {
                    if i < len {
                        prop_assert_eq!(sut.insert_before(i, v), Ok(()));
                        model.insert(i, v);
                    } else {
                        prop_assert!(sut.insert_before(i, v).is_err());
                    }
                }
                Op::InsertAfter(i, v) => {
                    if i < len {
                        prop_assert_eq!(sut.insert_after(i, v), Ok(()));
                        model.insert(i + 1, v);
                    } else {
                        prop_assert!(sut.insert_after(i, v).is_err());
                    }
                }
                Op::InsertMany(i, vs) => {
                    if i <= len {
                        prop_assert_eq!(sut.insert(i, vs.clone()), Ok(()));
                        for (k, v) in vs.into_iter().enumerate() {
                            model.insert(i + k, v);
                        }
                    } else {
                        prop_assert_eq!(sut.insert(i, vs), Err(Error::out_of_range(i, len)));
                    }
                }
                Op::Remove(i) => match model.remove(i) {
                    Some(v) => prop_assert_eq!(sut.remove(i), Ok(v)),
                    None => prop_assert_eq!(sut.remove(i), Err(Error::out_of_range(i, len))),
                },
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            sut.check_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.iter().eq(model.iter()));
            prop_assert!(sut.iter_rev().eq(model.iter().rev()));
        }
    }
}

// Property: any order of indexed reads returns the model's values and keeps
// the cursor consistent.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_seek_any_order(
        values in proptest::collection::vec(any::<i32>(), 1..64),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..64),
    ) {
        let sut = DoublyLinkedList::from_vec(values.clone());
        for pick in picks {
            let i = pick.index(values.len());
            prop_assert_eq!(sut.seek(i), Ok(&values[i]));
            sut.check_invariants();
        }
    }
}

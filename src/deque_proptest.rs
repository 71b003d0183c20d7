#![cfg(test)]

// Property tests for Deque under arbitrary power-of-two policies, kept inside
// the crate to share the policy strategy with the buffer tests.

use crate::buffer_proptest::arb_custom_policy;
use crate::capacity::{CapacityPolicy, GrowTrigger, Rounding};
use crate::deque::Deque;
use crate::error::Error;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Insert(usize, Vec<i32>),
    Remove(usize),
    Rotate(isize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => any::<i32>().prop_map(Op::PushBack),
        4 => any::<i32>().prop_map(Op::PushFront),
        3 => Just(Op::PopBack),
        3 => Just(Op::PopFront),
        2 => (0usize..40, proptest::collection::vec(any::<i32>(), 0..10))
            .prop_map(|(i, vs)| Op::Insert(i, vs)),
        2 => (0usize..40).prop_map(Op::Remove),
        1 => (-20isize..20).prop_map(Op::Rotate),
        1 => Just(Op::Clear),
    ]
}

fn arb_deque_policy() -> impl Strategy<Value = CapacityPolicy> {
    prop_oneof![
        Just(CapacityPolicy::squared()),
        arb_custom_policy(vec![Rounding::PowerOfTwo]),
    ]
}

// Property: State-machine equivalence against VecDeque.
// - Contents and order match the model after every op, in both directions.
// - Capacity stays a power of two no smaller than the length or the policy
//   minimum; an AtCapacity trigger keeps a free slot.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_vecdeque(
        policy in arb_deque_policy(),
        ops in proptest::collection::vec(arb_op(), 1..100),
    ) {
        let mut sut: Deque<i32> = Deque::with_policy(policy)?;
        let mut model: VecDeque<i32> = VecDeque::new();

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
                Op::Insert(i, vs) => {
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
                Op::Rotate(r) => {
                    sut.rotate(r);
                    if len > 0 {
                        model.rotate_left(r.rem_euclid(len as isize) as usize);
                    }
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.iter().eq(model.iter()));
            prop_assert!(sut.iter().rev().eq(model.iter().rev()));
            prop_assert!(sut.capacity().is_power_of_two());
            prop_assert!(sut.capacity() >= sut.len());
            prop_assert!(sut.capacity() >= policy.min_capacity());
            if policy.trigger() == GrowTrigger::AtCapacity {
                prop_assert!(sut.capacity() > sut.len());
            }
        }
    }
}

#![cfg(test)]

// Property tests for GrowableBuffer and the array types built on it. Kept
// inside the crate so the physical allocation can be inspected.

use crate::buffer::GrowableBuffer;
use crate::capacity::{CapacityPolicy, GrowTrigger, Rounding, MIN_CAPACITY};
use crate::error::Error;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Shift,
    Unshift(Vec<i32>),
    Insert(usize, Vec<i32>),
    Remove(usize),
    Set(usize, i32),
    Get(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    let values = proptest::collection::vec(any::<i32>(), 0..12);
    prop_oneof![
        6 => any::<i32>().prop_map(Op::Push),
        3 => Just(Op::Pop),
        2 => Just(Op::Shift),
        1 => values.clone().prop_map(Op::Unshift),
        2 => (0usize..40, values).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => (0usize..40).prop_map(Op::Remove),
        2 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0usize..40).prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

fn arb_policy() -> impl Strategy<Value = CapacityPolicy> {
    prop_oneof![
        Just(CapacityPolicy::standard()),
        Just(CapacityPolicy::arrayed()),
        Just(CapacityPolicy::squared()),
    ]
}

/// Any policy `CapacityPolicy::new` accepts, including decays steeper than
/// the truncate threshold.
pub(crate) fn arb_custom_policy(roundings: Vec<Rounding>) -> impl Strategy<Value = CapacityPolicy> {
    (
        1.05f64..4.0,
        0.05f64..0.95,
        0.05f64..0.95,
        0u32..6,
        prop::sample::select(vec![GrowTrigger::AtCapacity, GrowTrigger::BeyondCapacity]),
        prop::sample::select(roundings),
    )
        .prop_filter_map("policy rejected", |(g, d, t, shift, trigger, rounding)| {
            CapacityPolicy::new(g, d, t, 1usize << shift, trigger, rounding).ok()
        })
}

fn arb_any_policy() -> impl Strategy<Value = CapacityPolicy> {
    prop_oneof![
        arb_policy(),
        arb_custom_policy(vec![Rounding::Exact, Rounding::PowerOfTwo]),
    ]
}

fn check_capacity(sut: &GrowableBuffer<i32>) -> Result<(), TestCaseError> {
    let policy = sut.policy();
    prop_assert!(sut.len() <= sut.capacity(), "len {} cap {}", sut.len(), sut.capacity());
    prop_assert!(sut.capacity() >= policy.min_capacity());
    prop_assert!(sut.physical_capacity() >= sut.capacity());
    if policy.rounding() == Rounding::PowerOfTwo {
        prop_assert!(sut.capacity().is_power_of_two());
        if policy.trigger() == GrowTrigger::AtCapacity {
            prop_assert!(sut.len() < sut.capacity());
        }
    }
    Ok(())
}

// Property: State-machine equivalence against Vec.
// - Contents and order match the model after every op.
// - Out-of-range indices and empty-end operations fail without mutating.
// - Capacity bounds hold after every op for the presets and for arbitrary
//   accepted policies.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_vec(policy in arb_any_policy(), ops in proptest::collection::vec(arb_op(), 1..80)) {
        let mut sut: GrowableBuffer<i32> = GrowableBuffer::with_policy(policy);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    sut.push(v);
                    model.push(v);
                }
                Op::Pop => match model.pop() {
                    Some(v) => prop_assert_eq!(sut.pop(), Ok(v)),
                    None => prop_assert_eq!(sut.pop(), Err(Error::underflow("pop"))),
                },
                Op::Shift => {
                    if model.is_empty() {
                        prop_assert_eq!(sut.shift(), Err(Error::underflow("shift")));
                    } else {
                        prop_assert_eq!(sut.shift(), Ok(model.remove(0)));
                    }
                }
                Op::Unshift(vs) => {
                    sut.unshift(vs.clone());
                    model.splice(0..0, vs);
                }
                Op::Insert(i, vs) => {
                    let len = model.len();
                    if i <= len {
                        prop_assert_eq!(sut.insert(i, vs.clone()), Ok(()));
                        model.splice(i..i, vs);
                    } else {
                        prop_assert_eq!(sut.insert(i, vs), Err(Error::out_of_range(i, len)));
                    }
                }
                Op::Remove(i) => {
                    let len = model.len();
                    if i < len {
                        prop_assert_eq!(sut.remove(i), Ok(model.remove(i)));
                    } else {
                        prop_assert_eq!(sut.remove(i), Err(Error::out_of_range(i, len)));
                    }
                }
                Op::Set(i, v) => {
                    let len = model.len();
                    if i < len {
                        let old = core::mem::replace(&mut model[i], v);
                        prop_assert_eq!(sut.set(i, v), Ok(old));
                    } else {
                        prop_assert_eq!(sut.set(i, v), Err(Error::out_of_range(i, len)));
                    }
                }
                Op::Get(i) => {
                    prop_assert_eq!(sut.get(i).ok(), model.get(i));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), sut.policy().min_capacity());
                }
            }
            prop_assert_eq!(sut.as_slice(), model.as_slice());
            check_capacity(&sut)?;
        }
    }
}

// Property: filling then emptying a preset buffer returns its capacity to the minimum.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_capacity_decays(policy in arb_policy(), n in 0usize..600) {
        let mut sut: GrowableBuffer<usize> = GrowableBuffer::with_policy(policy);
        for i in 0..n {
            sut.push(i);
        }
        prop_assert!(sut.capacity() >= n);
        while sut.pop().is_ok() {}
        prop_assert_eq!(sut.capacity(), MIN_CAPACITY);
    }
}

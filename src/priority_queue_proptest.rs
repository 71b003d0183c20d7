#![cfg(test)]

// Property tests for PriorityQueue kept inside the crate so the heap order
// can be checked after every operation.

use crate::error::Error;
use crate::priority_queue::PriorityQueue;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u32, i64),
    Pop,
    Peek,
    Clear,
}

// A narrow priority range forces plenty of ties.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (any::<u32>(), -4i64..4).prop_map(|(v, p)| Op::Push(v, p)),
        3 => Just(Op::Pop),
        2 => Just(Op::Peek),
        1 => Just(Op::Clear),
    ]
}

// Model entry: (priority, insertion sequence, value).
fn model_max(model: &[(i64, u64, u32)]) -> Option<usize> {
    model
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)))
        .map(|(i, _)| i)
}

// Property: equivalence against a linear-scan model.
// - `pop` returns the highest priority, earliest pushed value.
// - Heap order holds after every op; capacity stays a power of two above len.
// - `to_vec` reports the remaining pop order without consuming.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_model(ops in proptest::collection::vec(arb_op(), 1..120)) {
        let mut sut: PriorityQueue<u32> = PriorityQueue::new();
        let mut model: Vec<(i64, u64, u32)> = Vec::new();
        let mut seq = 0u64;

        for op in ops {
            match op {
                Op::Push(v, p) => {
                    sut.push(v, p);
                    model.push((p, seq, v));
                    seq += 1;
                }
                Op::Pop => match model_max(&model) {
                    Some(i) => {
                        let (_, _, v) = model.remove(i);
                        prop_assert_eq!(sut.pop(), Ok(v));
                    }
                    None => prop_assert_eq!(sut.pop(), Err(Error::underflow("pop"))),
                },
                Op::Peek => match model_max(&model) {
                    Some(i) => prop_assert_eq!(sut.peek(), Ok(&model[i].2)),
                    None => prop_assert_eq!(sut.peek(), Err(Error::underflow("peek"))),
                },
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            sut.check_heap();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.capacity().is_power_of_two());
            prop_assert!(sut.capacity() > sut.len());
        }

        let mut sorted = model.clone();
        sorted.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        let expected: Vec<u32> = sorted.iter().map(|e| e.2).collect();
        prop_assert_eq!(crate::traits::Collection::to_vec(&sut), expected.clone());
        prop_assert_eq!(sut.len(), expected.len());
        prop_assert_eq!(sut.into_sorted_vec(), expected);
    }
}

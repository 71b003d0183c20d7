use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use seq_collections::{Deque, DoublyLinkedList, FixedArray, Map};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_fixed_array_push(c: &mut Criterion) {
    c.bench_function("fixed_array_push_10k", |b| {
        b.iter_batched(
            FixedArray::<u64>::new,
            |mut a| {
                for x in lcg(1).take(10_000) {
                    a.push(x);
                }
                black_box(a)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_deque_ends(c: &mut Criterion) {
    c.bench_function("deque_push_pop_both_ends_10k", |b| {
        b.iter_batched(
            Deque::<u64>::new,
            |mut d| {
                for (i, x) in lcg(3).take(10_000).enumerate() {
                    if i % 2 == 0 {
                        d.push_back(x);
                    } else {
                        d.push_front(x);
                    }
                }
                while let Ok(x) = d.pop_front() {
                    black_box(x);
                }
                black_box(d)
            },
            BatchSize::SmallInput,
        )
    });
}

// Ascending index reads walk one link each thanks to the cursor.
fn bench_list_sequential_get(c: &mut Criterion) {
    c.bench_function("list_sequential_get_10k", |b| {
        let list: DoublyLinkedList<u64> = lcg(5).take(10_000).collect();
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..list.len() {
                sum = sum.wrapping_add(*list.get(i).unwrap());
            }
            black_box(sum)
        })
    });
}

fn bench_list_random_get(c: &mut Criterion) {
    c.bench_function("list_random_get", |b| {
        let list: DoublyLinkedList<u64> = lcg(7).take(10_000).collect();
        let mut picks = lcg(11).map(|x| (x % 10_000) as usize);
        b.iter(|| {
            let i = picks.next().unwrap();
            black_box(list.get(i).unwrap());
        })
    });
}

fn bench_map_put_get(c: &mut Criterion) {
    c.bench_function("map_put_get_1k", |b| {
        let keys: Vec<u64> = lcg(13).take(1_000).collect();
        b.iter_batched(
            Map::<u64, usize>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.put(*k, i);
                }
                for k in &keys {
                    black_box(m.get(k).unwrap());
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_fixed_array_push, bench_deque_ends, bench_list_sequential_get,
        bench_list_random_get, bench_map_put_get
}
criterion_main!(benches);

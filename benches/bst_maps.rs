use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_symbol_table::red_black_tree::RedBlackMap;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn seeded_keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let keys = seeded_keys();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for key in &keys {
                map.insert(*key, *key);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let keys = seeded_keys();
    let map = keys.iter().map(|key| (*key, *key)).collect::<BTreeMap<u32, u32>>();

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_red_black_map_insert(c: &mut Criterion) {
    let keys = seeded_keys();
    c.bench_function("bench red_black_tree insert", move |b| {
        b.iter(|| {
            let mut map = RedBlackMap::new();
            for key in &keys {
                map.insert(*key, *key);
            }
        })
    });
}

fn bench_red_black_map_get(c: &mut Criterion) {
    let keys = seeded_keys();
    let map = keys.iter().map(|key| (*key, *key)).collect::<RedBlackMap<u32, u32>>();

    c.bench_function("bench red_black_tree get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key).ok());
            }
        })
    });
}

fn bench_red_black_map_remove(c: &mut Criterion) {
    let keys = seeded_keys();
    let pairs = keys.iter().map(|key| (*key, *key)).collect::<Vec<(u32, u32)>>();

    c.bench_function("bench red_black_tree remove", move |b| {
        b.iter(|| {
            let mut map = pairs.iter().cloned().collect::<RedBlackMap<u32, u32>>();
            for key in &keys {
                black_box(map.remove(key).ok());
            }
        })
    });
}

fn bench_red_black_map_rank_select(c: &mut Criterion) {
    let keys = seeded_keys();
    let map = keys.iter().map(|key| (*key, *key)).collect::<RedBlackMap<u32, u32>>();

    c.bench_function("bench red_black_tree rank select", move |b| {
        b.iter(|| {
            for key in &keys {
                let rank = map.rank(key).unwrap_or(0);
                black_box(map.select(rank).ok());
            }
        })
    });
}

fn bench_red_black_map_range(c: &mut Criterion) {
    let keys = seeded_keys();
    let map = keys.iter().map(|key| (*key, *key)).collect::<RedBlackMap<u32, u32>>();
    let width = u32::max_value() / 100;

    c.bench_function("bench red_black_tree range", move |b| {
        b.iter(|| {
            for key in &keys {
                let hi = key.saturating_add(width);
                black_box(map.range(key, &hi).count());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_red_black_map_get,
    bench_red_black_map_insert,
    bench_red_black_map_remove,
    bench_red_black_map_rank_select,
    bench_red_black_map_range,
);

criterion_main!(benches);

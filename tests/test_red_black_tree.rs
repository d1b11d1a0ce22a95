use ordered_symbol_table::red_black_tree::{Error, RedBlackMap, RedBlackSet};
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_RANGE: u32 = 2_000;

fn assert_height_bound<U>(map: &RedBlackMap<u32, U>) {
    let bound = 2.0 * ((map.len() + 1) as f64).log2();
    assert!(
        map.height() as f64 <= bound,
        "height {} exceeds {} for {} keys",
        map.height(),
        bound,
        map.len(),
    );
}

#[test]
fn int_test_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for i in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);
        let val = rng.next_u32();

        if rng.gen_range(0, 3) == 0 {
            match expected.remove(&key) {
                Some(value) => assert_eq!(map.remove(&key), Ok((key, value))),
                None => assert_eq!(map.remove(&key), Err(Error::AbsentKey)),
            }
        } else {
            assert_eq!(map.insert(key, val), expected.insert(key, val));
        }

        assert_eq!(map.len(), expected.len());
        if i % 500 == 0 {
            assert!(map.validate().is_ok());
            assert_height_bound(&map);
        }
    }

    assert!(map.validate().is_ok());
    assert_height_bound(&map);
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for key in 0..KEY_RANGE {
        match expected.get(&key) {
            Some(value) => assert_eq!(map.get(&key), Ok(value)),
            None => assert_eq!(map.get(&key), Err(Error::AbsentKey)),
        }
    }
}

#[test]
fn int_test_map_remove_min_max() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS / 4 {
        let key = rng.next_u32();
        map.insert(key, key);
        expected.insert(key, key);
    }

    let mut i = 0;
    while !expected.is_empty() {
        if rng.gen() {
            let key = *expected.keys().next().unwrap();
            expected.remove(&key);
            assert_eq!(map.remove_min(), Ok((key, key)));
        } else {
            let key = *expected.keys().next_back().unwrap();
            expected.remove(&key);
            assert_eq!(map.remove_max(), Ok((key, key)));
        }

        assert_eq!(map.len(), expected.len());
        if i % 100 == 0 {
            assert!(map.validate().is_ok());
        }
        i += 1;
    }

    assert!(map.is_empty());
    assert_eq!(map.remove_min(), Err(Error::EmptyTable));
    assert_eq!(map.remove_max(), Err(Error::EmptyTable));
}

#[test]
fn int_test_map_order_statistics() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS / 4 {
        let key = rng.gen_range(0, KEY_RANGE);
        map.insert(key, ());
        expected.insert(key);
    }

    for index in 0..map.len() {
        let key = map.select(index).unwrap();
        assert_eq!(map.rank(key), Ok(index));
    }
    assert_eq!(map.select(map.len()), Err(Error::InvalidRank));

    for (index, key) in expected.iter().enumerate() {
        assert_eq!(map.rank(key), Ok(index));
        assert_eq!(map.select(index), Ok(key));
    }

    for key in 0..KEY_RANGE + 1 {
        match expected.range(..=key).next_back() {
            Some(floor) => assert_eq!(map.floor(&key), Ok(floor)),
            None => assert_eq!(map.floor(&key), Err(Error::TooSmallFloorKey)),
        }
        match expected.range(key..).next() {
            Some(ceil) => assert_eq!(map.ceil(&key), Ok(ceil)),
            None => assert_eq!(map.ceil(&key), Err(Error::TooLargeCeilingKey)),
        }
    }
}

#[test]
fn int_test_map_range() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS / 4 {
        let key = rng.gen_range(0, KEY_RANGE);
        let val = rng.next_u32();
        map.insert(key, val);
        expected.insert(key, val);
    }

    for _ in 0..1_000 {
        let lo = rng.gen_range(0, KEY_RANGE + 10);
        let hi = rng.gen_range(0, KEY_RANGE + 10);
        let actual = map.range(&lo, &hi).collect::<Vec<(&u32, &u32)>>();

        assert_eq!(map.range_len(&lo, &hi), actual.len());
        if lo <= hi {
            assert_eq!(actual, expected.range(lo..=hi).collect::<Vec<(&u32, &u32)>>());
        } else {
            assert!(actual.is_empty());
        }
    }
}

#[test]
fn int_test_map_overwrite() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([5, 5, 5, 5]);
    let mut map = RedBlackMap::new();
    for key in 0..100u32 {
        map.insert(key, 0);
    }

    for _ in 0..1_000 {
        let key = rng.gen_range(0, 100);
        let val = rng.next_u32();
        map.insert(key, val);
        assert_eq!(map.len(), 100);
        assert_eq!(map.get(&key), Ok(&val));
    }
    assert!(map.validate().is_ok());
}

#[test]
fn int_test_map_failed_remove_is_noop() {
    let mut map = RedBlackMap::new();
    for key in (0..64u32).map(|key| key * 2) {
        map.insert(key, key);
    }
    let before = map.iter().map(|(key, value)| (*key, *value)).collect::<Vec<(u32, u32)>>();

    for key in (0..64u32).map(|key| key * 2 + 1) {
        assert_eq!(map.remove(&key), Err(Error::AbsentKey));
    }

    let after = map.iter().map(|(key, value)| (*key, *value)).collect::<Vec<(u32, u32)>>();
    assert_eq!(before, after);
    assert_eq!(map.len(), 64);
    assert!(map.validate().is_ok());
}

#[test]
fn int_test_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([6, 6, 6, 6]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        if rng.gen() {
            assert_eq!(set.insert(key), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key).is_ok(), expected.remove(&key));
        }
        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
}

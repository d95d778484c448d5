//! Scenario tests against the public API.

use nexus_ordered_map::{Entry, InvalidHandle, OrderedMap};

type Table = OrderedMap<String, i32>;

fn table(entries: &[(&str, i32)]) -> Table {
    entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

fn entries(map: &Table) -> Vec<(&str, i32)> {
    map.iter().map(|(k, v)| (k.as_str(), *v)).collect()
}

/// Value at `position`, through the handle `at` returns.
fn value_at(map: &Table, position: usize) -> Option<i32> {
    map.at(position).and_then(|h| map.resolve(h)).map(|(_, v)| *v)
}

fn value_of(map: &Table, key: &str) -> Option<i32> {
    map.find(key).and_then(|h| map.resolve(h)).map(|(_, v)| *v)
}

// =============================================================================
// Literal scenarios
// =============================================================================

#[test]
fn scenario_set_three() {
    let map = table(&[("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(map.len(), 3);
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2), ("c", 3)]);
    let (key, value) = map.resolve(map.at(1).unwrap()).unwrap();
    assert_eq!((key.as_str(), *value), ("b", 2));
}

#[test]
fn scenario_update_keeps_position() {
    let mut map = table(&[("a", 1), ("b", 2), ("c", 3)]);

    map.set("c".into(), 5);

    assert_eq!(entries(&map), vec![("a", 1), ("b", 2), ("c", 5)]);
    assert_eq!(value_at(&map, 2), Some(5));
}

#[test]
fn scenario_erase_middle() {
    let mut map = table(&[("a", 1), ("b", 2), ("c", 3)]);

    map.erase("b");

    assert_eq!(entries(&map), vec![("a", 1), ("c", 3)]);
    assert!(map.find("b").is_none());
    assert_eq!(value_at(&map, 1), Some(3));
}

#[test]
fn scenario_sort_by_key() {
    let mut map = table(&[("c", 1), ("b", 2), ("a", 3)]);

    map.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

    assert_eq!(entries(&map), vec![("a", 3), ("b", 2), ("c", 1)]);
    assert_eq!(value_of(&map, "a"), Some(3));
}

#[test]
fn scenario_merge() {
    let mut m1 = Table::new();
    m1.set("a".into(), 1);
    m1.set("b".into(), 2);
    let mut m2 = Table::new();
    m2.set("b".into(), 99);
    m2.set("c".into(), 3);

    m1.merge(&mut m2);

    assert_eq!(entries(&m1), vec![("a", 1), ("b", 99), ("c", 3)]);
    assert!(m2.is_empty());
}

// =============================================================================
// Longer sequences
// =============================================================================

#[test]
fn erase_then_set_appends_at_back() {
    let mut map = table(&[("a", 1), ("b", 2), ("c", 3)]);

    map.erase("c");
    map.set("d".into(), 7);

    assert_eq!(map.len(), 3);
    assert_eq!(value_of(&map, "c"), None);
    assert_eq!(value_of(&map, "d"), Some(7));
    assert_eq!(value_at(&map, 2), Some(7));
}

#[test]
fn walkthrough_sequence() {
    let mut map = table(&[("a", 1), ("b", 2), ("c", 3)]);

    map.set("c".into(), 4);
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2), ("c", 4)]);

    map.set("d".into(), 5);
    map.erase("c");
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2), ("d", 5)]);

    let d = map.find("d").unwrap();
    assert_eq!(map.erase_handle(d), Ok(None));
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2)]);

    map.sort_by(|(k1, _), (k2, _)| k2.cmp(k1));
    assert_eq!(entries(&map), vec![("b", 2), ("a", 1)]);
    map.sort_keys();
    assert_eq!(entries(&map), vec![("a", 1), ("b", 2)]);
}

#[test]
fn erase_and_continue_from_next() {
    let mut map: OrderedMap<u32, u32> = (0..10).map(|i| (i, i)).collect();

    // drop every multiple of three, continuing from the returned handle
    let mut cur = map.front_handle();
    while let Some(h) = cur {
        let (k, _) = map.resolve(h).unwrap();
        cur = if k % 3 == 0 {
            map.erase_handle(h).unwrap()
        } else {
            map.next_handle(h)
        };
    }

    assert_eq!(map.to_keys(), vec![1, 2, 4, 5, 7, 8]);
}

#[test]
fn handles_survive_unrelated_mutation() {
    let mut map = table(&[("x", 0)]);
    let x = map.find("x").unwrap();

    for i in 0..100 {
        map.set(format!("k{i}"), i);
    }
    for i in (0..100).step_by(2) {
        map.erase(format!("k{i}").as_str());
    }
    map.sort_by(|(_, v1), (_, v2)| v2.cmp(v1));
    let mut other = table(&[("x", 42), ("y", 1)]);
    map.merge(&mut other);

    let (key, value) = map.resolve(x).unwrap();
    assert_eq!((key.as_str(), *value), ("x", 42));
    assert_eq!(map.find("x"), Some(x));
}

#[test]
fn foreign_handle_is_rejected() {
    let mut a = table(&[("k", 1)]);
    let b = a.clone();
    let from_b = b.find("k").unwrap();

    assert!(a.resolve(from_b).is_none());
    assert_eq!(a.erase_handle(from_b), Err(InvalidHandle { handle: from_b }));
    assert_eq!(a.len(), 1);

    let err = a.move_to_back(from_b).unwrap_err();
    assert!(err.to_string().contains("does not refer to a live entry"));
}

#[test]
fn moved_map_keeps_handles() {
    let map = table(&[("a", 1), ("b", 2)]);
    let b = map.find("b").unwrap();

    let boxed = Box::new(map);

    assert_eq!(boxed.index_of(b), Some(1));
}

#[test]
fn lru_by_move_to_back() {
    const CAPACITY: usize = 3;

    fn touch(cache: &mut OrderedMap<u32, &'static str>, key: u32, value: &'static str) {
        match cache.find(&key) {
            Some(h) => cache.move_to_back(h).unwrap(),
            None => {
                if cache.len() == CAPACITY {
                    cache.pop_front();
                }
                cache.set(key, value);
            }
        }
    }

    let mut cache = OrderedMap::new();

    touch(&mut cache, 1, "one");
    touch(&mut cache, 2, "two");
    touch(&mut cache, 3, "three");
    touch(&mut cache, 1, "one");
    touch(&mut cache, 4, "four");

    assert_eq!(cache.to_keys(), vec![3, 1, 4]);
}

#[test]
fn word_count_with_entry() {
    let text = "the quick brown fox jumps over the lazy dog the end";
    let mut counts: OrderedMap<&str, usize> = OrderedMap::new();

    for word in text.split_whitespace() {
        match counts.entry(word) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                e.insert(1);
            }
        }
    }

    assert_eq!(counts.len(), 9);
    assert_eq!(counts.front(), Some((&"the", &3)));
    assert_eq!(counts.back(), Some((&"end", &1)));
}

#[test]
fn round_trip_through_to_vec() {
    let mut map = table(&[("q", 1), ("w", 2), ("e", 3)]);
    map.sort_keys();

    let rebuilt: Table = map.to_vec().into_iter().collect();

    assert_eq!(rebuilt, map);
}

#[test]
fn owned_iteration_in_order() {
    let map = table(&[("z", 26), ("a", 1), ("m", 13)]);

    let keys: Vec<String> = map.clone().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);

    let reversed: Vec<i32> = map.into_iter().rev().map(|(_, v)| v).collect();
    assert_eq!(reversed, vec![13, 1, 26]);
}

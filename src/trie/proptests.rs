use super::tests::check_invariants;
use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Set(Vec<u8>, u64),
    Remove(Vec<u8>),
    Get(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A small alphabet, including 0x00 and 0xff, makes shared prefixes and splits at every depth
    // likely.
    prop::collection::vec(prop_oneof![Just(0u8), Just(b'a'), Just(b'b'), Just(0xff)], 0..=8)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Set(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: Trie<Vec<u8>, u64> = Trie::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(key, value) => {
                    let updated = t.set(key.clone(), value);
                    let old = m.insert(key, value);
                    prop_assert_eq!(updated, old.is_some());
                }
                Op::Remove(key) => {
                    let old_t = t.remove(key.as_slice());
                    let old_m = m.remove(key.as_slice());
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(key.as_slice()), m.get(key.as_slice()));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            check_invariants(&t);
        }

        let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_insert_then_drain(keys in prop::collection::btree_set(key_strategy(), 0..64)) {
        let mut t = Trie::new();
        for (i, key) in keys.iter().enumerate() {
            prop_assert!(!t.set(key.clone(), i));
        }
        check_invariants(&t);
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(t.get(key.as_slice()), Some(&i));
        }
        for key in &keys {
            prop_assert!(t.delete(key.as_slice()));
            prop_assert!(!t.contains_key(key.as_slice()));
            check_invariants(&t);
        }
        prop_assert!(t.is_empty());
        prop_assert!(t.root.is_empty());
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

const SMALL_SET: [&str; 6] = ["", "a", "b", "aa", "ab", "aab"];

#[test]
fn exhaustive_insert_order_small_set() {
    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = Trie::new();
        for (i, key) in perm.iter().enumerate() {
            assert!(!t.set(*key, i));
            check_invariants(&t);
        }
        for (i, key) in perm.iter().enumerate() {
            assert_eq!(t.get(*key), Some(&i), "order {perm:?}");
        }
        let keys: Vec<&str> = t.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["", "a", "aa", "aab", "ab", "b"]);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    for_each_permutation(&SMALL_SET, |perm| {
        // Insert in a fixed order, then remove in every order.
        let mut t: Trie<_, _> = SMALL_SET.iter().map(|key| (*key, key.len())).collect();
        let mut m: BTreeMap<_, _> = SMALL_SET.iter().map(|key| (*key, key.len())).collect();

        for key in perm {
            assert_eq!(t.remove(key), m.remove(key));
            check_invariants(&t);
            for (k, v) in &m {
                assert_eq!(t.get(*k), Some(v));
            }
        }
        assert!(t.is_empty());
        assert!(t.root.is_empty());
    });
}

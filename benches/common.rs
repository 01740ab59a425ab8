use std::ops::Range;

use rand::{distr::Alphanumeric, seq::SliceRandom, Rng, SeedableRng};

/// Generates shuffled keys built from a few shared random prefixes, so that the trie has to split
/// at many different depths. Keys may repeat.
pub fn get_samples(
    seed: u64,
    prefix_count: usize,
    prefix_sizes: Range<usize>,
    suffix_count: usize,
    suffix_size: usize,
) -> Vec<String> {
    let random_string = |seed: u64, size: usize| {
        rand::rngs::StdRng::seed_from_u64(seed)
            .sample_iter(Alphanumeric)
            .map(char::from)
            .take(size)
            .collect::<String>()
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut keys = Vec::new();
    for prefix_size in prefix_sizes {
        let prefixes: Vec<String> = (0..prefix_count)
            .map(|_| random_string(rng.random(), prefix_size))
            .collect();
        for suffix_index in 0..suffix_count {
            let mut key = String::new();
            for prefix in prefixes.iter().take(suffix_index % prefix_count) {
                key.push_str(prefix);
            }
            key.push_str(&random_string(rng.random(), suffix_size));
            keys.push(key);
        }
    }
    keys.shuffle(&mut rng);
    keys
}

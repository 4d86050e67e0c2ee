//! Round-trip checks over larger pseudo-random fixtures than proptest's
//! default case sizes bother generating, covering both binary noise and
//! editing a big repeating buffer (the encoder's two extremes: no matches
//! at all vs. a match practically everywhere).

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use lzp::decoder::decode;
use lzp::encoder::{encode_with_options, EncodeOptions};

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn roundtrips_large_random_binary_data() {
    for seed in 0..5u64 {
        let source = random_bytes(seed, 8192);
        let target = random_bytes(seed.wrapping_add(1), 8192);
        let (patch, _) =
            encode_with_options(&target, &[&source], &EncodeOptions::default()).unwrap();
        let decoded = decode(&patch, &[&source], true).unwrap();
        assert_eq!(decoded, target, "seed {seed} failed to round trip");
    }
}

#[test]
fn roundtrips_a_lightly_edited_repeating_buffer() {
    let mut rng = StdRng::seed_from_u64(42);
    let source: Vec<u8> = (0..16384u32).map(|i| (i % 251) as u8).collect();
    let mut target = source.clone();
    for _ in 0..64 {
        let index = rng.random_range(0..target.len());
        target[index] = rng.random();
    }

    let (patch, stats) =
        encode_with_options(&target, &[&source], &EncodeOptions::default()).unwrap();
    assert!(
        patch.len() < target.len() / 2,
        "patch ({}) should be much smaller than the target ({})",
        patch.len(),
        target.len()
    );
    assert!(stats.copy_bytes > stats.literal_bytes);

    let decoded = decode(&patch, &[&source], true).unwrap();
    assert_eq!(decoded, target);
}

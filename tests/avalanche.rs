use crypto_lab::lab::{bit_difference, run_digest_lab};
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn repeated_digests_are_identical(msg in vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(crypto_lab::sha256(&msg), crypto_lab::sha256(&msg));
        prop_assert_eq!(crypto_lab::sha1(&msg), crypto_lab::sha1(&msg));
        prop_assert_eq!(&crypto_lab::derived512(&msg)[..], &crypto_lab::derived512(&msg)[..]);
    }

    #[test]
    fn single_bit_flip_changes_about_half(msg in vec(any::<u8>(), 1..120), bit in any::<usize>()) {
        let mut flipped = msg.clone();
        let bit = bit % (msg.len() * 8);
        flipped[bit / 8] ^= 1 << (bit % 8);

        let d = bit_difference(&crypto_lab::sha256(&msg), &crypto_lab::sha256(&flipped));
        // mean 128, standard deviation 8
        prop_assert!((64..=192).contains(&d), "only {} of 256 bits changed", d);

        let d = bit_difference(&crypto_lab::sha1(&msg), &crypto_lab::sha1(&flipped));
        prop_assert!((40..=120).contains(&d), "only {} of 160 bits changed", d);
    }
}

#[test]
fn lab_sample_messages_differ_everywhere() {
    let report = run_digest_lab("network security", "network secur1ty");
    for c in &report.comparisons {
        assert!(!c.same(), "{} digests matched", c.algorithm.name());
        let ratio = c.differing_bits() as f64 / c.total_bits() as f64;
        assert!((0.3..0.7).contains(&ratio), "{}: {ratio}", c.algorithm.name());
    }
}

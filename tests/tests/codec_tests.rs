//! Integration tests for message sealing

use peercrypt::prelude::*;
use peercrypt_tests::vectors::{self, ALICE_PRIVATE, ALICE_PUBLIC, BOB_PRIVATE, BOB_PUBLIC};
use peercrypt_tests::{key_pair, seeded_rng};
use proptest::prelude::*;

#[test]
fn test_golden_messages() {
    let alice = vectors::private_key(ALICE_PRIVATE);
    let bob = vectors::private_key(BOB_PRIVATE);
    let alice_pub = vectors::public_key(ALICE_PUBLIC);
    let bob_pub = vectors::public_key(BOB_PUBLIC);
    let nonce = vectors::nonce();

    assert_eq!(seal(&alice, &bob_pub, "hello", &nonce).unwrap(), vectors::HELLO);
    assert_eq!(seal(&alice, &bob_pub, "", &nonce).unwrap(), vectors::EMPTY);
    assert_eq!(open_text(&bob, &alice_pub, vectors::HELLO, &nonce).unwrap(), "hello");
    assert_eq!(open_text(&bob, &alice_pub, vectors::EMPTY, &nonce).unwrap(), "");
}

#[test]
fn test_random_nonces_round_trip() {
    let mut rng = seeded_rng(2024);
    let (sk_a, pk_a) = key_pair([1u8; 32]);
    let (sk_b, pk_b) = key_pair([2u8; 32]);

    for i in 0..16 {
        let nonce = MessageNonce::random(&mut rng);
        let text = format!("message number {}", i);
        let wire = seal(&sk_a, &pk_b, &text, &nonce).unwrap();
        assert_eq!(open_text(&sk_b, &pk_a, &wire, &nonce).unwrap(), text);
    }
}

#[test]
fn test_sender_can_read_own_message() {
    // Both directions derive the same key, so the sender can open too.
    let (sk_a, pk_a) = key_pair([3u8; 32]);
    let (_, pk_b) = key_pair([4u8; 32]);
    let nonce = MessageNonce::from_bytes([9u8; 12]);

    let wire = seal(&sk_a, &pk_b, "note to self", &nonce).unwrap();
    assert!(open_text(&sk_a, &pk_a, &wire, &nonce).is_err());
    assert_eq!(open_text(&sk_a, &pk_b, &wire, &nonce).unwrap(), "note to self");
}

#[test]
fn test_codec_with_negotiated_salt() {
    let (sk_a, pk_a) = key_pair([5u8; 32]);
    let (sk_b, pk_b) = key_pair([6u8; 32]);
    let nonce = MessageNonce::from_bytes([0u8; 12]);
    let config = CodecConfig::default().with_salt(SaltPolicy::Negotiated(b"room-42".to_vec()));
    let codec = MessageCodec::new(config);

    let wire = codec.seal(&sk_a, &pk_b, "salted", &nonce).unwrap();
    assert_eq!(codec.open_text(&sk_b, &pk_a, &wire, &nonce).unwrap(), "salted");
    assert!(matches!(
        open(&sk_b, &pk_a, &wire, &nonce),
        Err(Error::Authentication { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_seal_open_round_trip(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        text in ".{0,200}",
    ) {
        let (sk_a, pk_a) = key_pair(a);
        let (sk_b, pk_b) = key_pair(b);
        let nonce = MessageNonce::from_bytes(nonce);

        let wire = seal(&sk_a, &pk_b, &text, &nonce).unwrap();
        prop_assert_eq!(wire.len(), 2 * (text.len() + 16));
        prop_assert!(wire.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert_eq!(open_text(&sk_b, &pk_a, &wire, &nonce).unwrap(), text);
    }

    #[test]
    fn prop_seal_is_deterministic(a in any::<[u8; 32]>(), text in ".{0,64}") {
        let (sk_a, _) = key_pair(a);
        let (_, pk_b) = key_pair([0x42; 32]);
        let nonce = MessageNonce::from_bytes([7u8; 12]);
        prop_assert_eq!(
            seal(&sk_a, &pk_b, &text, &nonce).unwrap(),
            seal(&sk_a, &pk_b, &text, &nonce).unwrap()
        );
    }

    #[test]
    fn prop_any_bit_flip_is_rejected(
        text in ".{1,64}",
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (sk_a, pk_a) = key_pair([0x11; 32]);
        let (sk_b, pk_b) = key_pair([0x22; 32]);
        let nonce = MessageNonce::from_bytes([1u8; 12]);

        let wire = seal(&sk_a, &pk_b, &text, &nonce).unwrap();
        let mut bytes = hex::decode(&wire).unwrap();
        let i = position.index(bytes.len());
        bytes[i] ^= 1 << bit;

        let result = open(&sk_b, &pk_a, &hex::encode(&bytes), &nonce);
        let rejected = matches!(result, Err(Error::Authentication { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn prop_wrong_key_is_rejected(c in any::<[u8; 32]>(), text in ".{0,64}") {
        let (sk_a, _) = key_pair([0x33; 32]);
        let (sk_b, _) = key_pair([0x44; 32]);
        let (_, pk_c) = key_pair(c);
        let (_, pk_b) = key_pair([0x44; 32]);
        prop_assume!(pk_c != key_pair([0x33; 32]).1);

        let nonce = MessageNonce::from_bytes([2u8; 12]);
        let wire = seal(&sk_a, &pk_b, &text, &nonce).unwrap();
        prop_assert!(open(&sk_b, &pk_c, &wire, &nonce).is_err());
    }
}

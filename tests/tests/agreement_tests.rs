//! Integration tests for key agreement

use peercrypt::ecdh::{clamp, prepare_scalar, SaltPolicy};
use peercrypt::prelude::*;
use peercrypt_tests::vectors::{self, ALICE_PRIVATE, ALICE_PUBLIC, BOB_PRIVATE, BOB_PUBLIC};
use peercrypt_tests::{key_pair, public_key_for};
use proptest::prelude::*;

#[test]
fn test_vector_keys_are_consistent() {
    let alice = vectors::private_key(ALICE_PRIVATE);
    let bob = vectors::private_key(BOB_PRIVATE);
    assert_eq!(public_key_for(&alice).to_hex(), ALICE_PUBLIC);
    assert_eq!(public_key_for(&bob).to_hex(), BOB_PUBLIC);
}

#[test]
fn test_shared_secret_and_key_vectors() {
    let alice = vectors::private_key(ALICE_PRIVATE);
    let bob_pub = vectors::public_key(BOB_PUBLIC);

    let shared = derive_shared_secret(&alice, &bob_pub);
    assert_eq!(hex::encode(shared.as_bytes()), vectors::SHARED_SECRET);

    let key = derive_symmetric_key(&alice, &bob_pub).unwrap();
    assert_eq!(hex::encode(key.as_bytes()), vectors::SYMMETRIC_KEY);
}

#[test]
fn test_public_key_case_does_not_matter() {
    let alice = vectors::private_key(ALICE_PRIVATE);
    let lower = vectors::public_key(BOB_PUBLIC);
    let upper = vectors::public_key(&BOB_PUBLIC.to_uppercase());
    assert_eq!(
        derive_symmetric_key(&alice, &lower).unwrap(),
        derive_symmetric_key(&alice, &upper).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_agreement_is_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (sk_a, pk_a) = key_pair(a);
        let (sk_b, pk_b) = key_pair(b);
        prop_assert_eq!(derive_shared_secret(&sk_a, &pk_b), derive_shared_secret(&sk_b, &pk_a));
        prop_assert_eq!(
            derive_symmetric_key(&sk_a, &pk_b).unwrap(),
            derive_symmetric_key(&sk_b, &pk_a).unwrap()
        );
    }

    #[test]
    fn prop_agreement_is_deterministic(a in any::<[u8; 32]>(), pk in any::<[u8; 32]>()) {
        // Any 32 bytes are accepted as a public key, on the curve or not
        let sk = PrivateKey::from_bytes(a);
        let pk = PublicKey::from_bytes(pk);
        prop_assert_eq!(derive_shared_secret(&sk, &pk), derive_shared_secret(&sk, &pk));
        prop_assert!(derive_symmetric_key(&sk, &pk).is_ok());
    }

    #[test]
    fn prop_prepared_scalar_is_clamped(a in any::<[u8; 32]>()) {
        let scalar = prepare_scalar(&PrivateKey::from_bytes(a));
        let bytes = scalar.as_bytes();
        prop_assert_eq!(bytes[0] & 7, 0);
        prop_assert_eq!(bytes[31] & 0x80, 0);
        prop_assert_eq!(bytes[31] & 0x40, 0x40);

        let mut again = *bytes;
        clamp(&mut again);
        prop_assert_eq!(&again, bytes);
    }

    #[test]
    fn prop_zeroed_and_empty_salt_agree(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (sk_a, _) = key_pair(a);
        let (_, pk_b) = key_pair(b);
        let empty = KdfParams::default().with_salt(SaltPolicy::Empty);
        prop_assert_eq!(
            derive_symmetric_key(&sk_a, &pk_b).unwrap(),
            derive_symmetric_key_with(&sk_a, &pk_b, &empty).unwrap()
        );
    }
}

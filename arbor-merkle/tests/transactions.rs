use std::path::PathBuf;

use arbor_merkle::binary::{
    MerkleTree,
    Sha256Hasher,
};
use arbor_merkle_test_helpers::{
    transactions::{
        hash_records,
        load_records,
        load_transactions,
    },
    TEST_DATA,
};

const FIXTURE_ROOT: &str =
    "b3aff342c54f6b591026685d31b0856b2245df15607b0aee7008f3acbb47b300";

const TAMPERED_RECORD: &str = "From: 0x006546305b8eab155bf087b176fad3cf45ecaf1a, To: 0x30f7225274fba7d6b431a11eabf02556407ee439, ETH: 0.200815824264";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_tree() -> (Vec<String>, MerkleTree<Sha256Hasher>) {
    let records = load_records(fixture("transactions_100.txt")).unwrap();
    let tree = MerkleTree::new(hash_records(&records)).unwrap();
    (records, tree)
}

#[test]
fn loaded_records_build_the_known_root() {
    let (records, tree) = load_tree();

    assert_eq!(records.len(), 100);
    assert_eq!(tree.root().map(hex::encode).as_deref(), Some(FIXTURE_ROOT));
    assert_eq!(tree.height(), 7);
}

#[test]
fn loaded_records_parse_as_transactions() {
    let transactions = load_transactions(fixture("transactions_100.txt")).unwrap();
    let (records, _) = load_tree();

    for (transaction, record) in transactions.iter().zip(&records) {
        assert_eq!(&transaction.to_string(), record);
    }
}

#[test]
fn every_loaded_record_proves_against_the_root() {
    let (records, tree) = load_tree();
    let root = tree.root().unwrap();

    for leaf in hash_records(&records) {
        let proof = tree.prove(&leaf).unwrap();
        assert!(proof.verify(&Sha256Hasher, root, &leaf));
    }
}

#[test]
fn a_record_outside_the_file_has_no_proof() {
    let (_, tree) = load_tree();
    let outsider = hash_records([TAMPERED_RECORD])[0];

    assert!(tree.prove(&outsider).is_err());
}

#[test]
fn modifying_the_first_record_breaks_integrity() {
    let (records, mut tree) = load_tree();
    assert!(tree.verify_integrity());

    *tree.leaf_mut(0).unwrap() = hash_records([TAMPERED_RECORD])[0];
    assert!(!tree.verify_integrity());

    *tree.leaf_mut(0).unwrap() = hash_records(&records[..1])[0];
    assert!(tree.verify_integrity());
}

#[test]
fn sample_records_build_the_known_root() {
    let tree = MerkleTree::<Sha256Hasher>::new(hash_records(&TEST_DATA[..3])).unwrap();

    assert_eq!(
        tree.root().map(hex::encode).as_deref(),
        Some("bb20c6b229a2bcf54fd8c22b1c6db5e570cafa307e0b66cd15e6a38481fa8e15")
    );
}

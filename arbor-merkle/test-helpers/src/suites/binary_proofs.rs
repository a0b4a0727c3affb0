use std::path::{
    Path,
    PathBuf,
};

use arbor_merkle::{
    binary::{
        MerkleTree,
        Sha256Hasher,
        Side,
    },
    common::Bytes32,
};
use arbor_merkle_test_helpers::{
    binary::sum,
    data::{
        binary::ProofTest,
        EncodedValue,
        Encoding,
        TestError,
    },
};

use clap::Parser;
use function_name::named;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "write-bmt-test-suite",
    about = "Regenerate the binary Merkle tree proof fixtures"
)]
struct Args {
    /// Directory the YAML fixtures are written to
    #[arg(long, default_value = "./arbor-merkle/tests-data-binary/fixtures")]
    output_dir: PathBuf,
}

fn generate_test(
    name: String,
    function_name: String,
    description: String,
    sample_data: &[Bytes32],
    proof_index: u64,
) -> Result<ProofTest, TestError> {
    let tree = MerkleTree::<Sha256Hasher>::new(sample_data.iter().copied())
        .map_err(|e| TestError::Failed(name.clone(), e.to_string()))?;
    let proof = tree
        .prove_index(proof_index)
        .map_err(|e| TestError::Failed(name.clone(), e.to_string()))?;
    let root = tree
        .root()
        .copied()
        .ok_or_else(|| TestError::Failed(name.clone(), "tree has no root".to_string()))?;
    let data = sample_data[proof_index as usize];

    let (proof_set, sides) = proof.into_parts();
    let encoded_proof_set = proof_set
        .iter()
        .map(|v| EncodedValue::from_raw(v, Encoding::Hex))
        .collect::<Vec<_>>();

    Ok(ProofTest {
        name,
        function_name,
        description,
        root: EncodedValue::from_raw(root, Encoding::Hex),
        data: EncodedValue::from_raw(data, Encoding::Hex),
        proof_set: encoded_proof_set,
        sides,
        expected_verification: true,
    })
}

fn write_test(dir: &Path, test: &ProofTest) -> Result<(), TestError> {
    let yaml = serde_yaml::to_string(test)?;
    let file_name = format!("{}.yaml", test.name.to_lowercase().replace(' ', "_"));
    let path = dir.join(file_name);
    std::fs::write(&path, yaml)?;
    tracing::info!(path = %path.display(), "wrote fixture");
    Ok(())
}

#[named]
fn generate_test_10_leaves_index_4(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 10 Leaves Index 4".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 10 leaves and leaf index 4. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[100..110];
    let proof_index = 4;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_1_leaf_index_0(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 1 Leaf Index 0".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 1 leaf and leaf index 0. \
        The leaf is the root, so the proof is empty. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[200..201];
    let proof_index = 0;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_3_leaves_index_2(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 3 Leaves Index 2".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 3 leaves and leaf index 2. \
        The last leaf is duplicated, so its first sibling is itself. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[300..303];
    let proof_index = 2;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_5_leaves_index_4(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 5 Leaves Index 4".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 5 leaves and leaf index 4. \
        The last leaf and the last node of the odd level above it are both duplicated. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[400..405];
    let proof_index = 4;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_100_leaves_index_10(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 100 Leaves Index 10".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 100 leaves and leaf index 10. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[1000..1100];
    let proof_index = 10;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_1024_leaves_index_512(
    test_data: &[Bytes32],
) -> Result<ProofTest, TestError> {
    let name = "Test 1024 Leaves Index 512".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 1024 leaves and leaf index 512. \
        This proof is valid and verification is expected to pass."
        .to_string();
    let sample_data = &test_data[4096..5120];
    let proof_index = 512;
    generate_test(name, function_name, description, sample_data, proof_index)
}

#[named]
fn generate_test_1_leaf_invalid_root(test_data: &[Bytes32]) -> Result<ProofTest, TestError> {
    let name = "Test 1 Leaf Invalid Root".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 1 leaf and manually set the root. \
        The root is manually set to the SHA256 hash of the string \"invalid\". \
        This proof is invalid because root is not generated from canonical Merkle tree construction. \
        Verification is expected to fail."
        .to_string();
    let sample_data = &test_data[200..201];
    let proof_index = 0;
    let mut test =
        generate_test(name, function_name, description, sample_data, proof_index)?;
    test.root = EncodedValue::new(hex::encode(sum(b"invalid")), Encoding::Hex);
    test.expected_verification = false;
    Ok(test)
}

#[named]
fn generate_test_1024_leaves_invalid_root(
    test_data: &[Bytes32],
) -> Result<ProofTest, TestError> {
    let name = "Test 1024 Leaves Invalid Root".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 1024 leaves and manually set the root. \
        The root is manually set to the SHA256 hash of the string \"invalid\". \
        This proof is invalid because root is not generated from canonical Merkle tree construction. \
        Verification is expected to fail."
        .to_string();
    let sample_data = &test_data[4096..5120];
    let proof_index = 512;
    let mut test =
        generate_test(name, function_name, description, sample_data, proof_index)?;
    test.root = EncodedValue::new(hex::encode(sum(b"invalid")), Encoding::Hex);
    test.expected_verification = false;
    Ok(test)
}

#[named]
fn generate_test_10_leaves_flipped_side(
    test_data: &[Bytes32],
) -> Result<ProofTest, TestError> {
    let name = "Test 10 Leaves Flipped Side".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 10 leaves and leaf index 4, \
        then swap the side of the first proof step. \
        This proof is invalid because the sibling is concatenated on the wrong side. \
        Verification is expected to fail."
        .to_string();
    let sample_data = &test_data[100..110];
    let proof_index = 4;
    let mut test =
        generate_test(name, function_name, description, sample_data, proof_index)?;
    test.sides[0] = match test.sides[0] {
        Side::Left => Side::Right,
        Side::Right => Side::Left,
    };
    test.expected_verification = false;
    Ok(test)
}

#[named]
fn generate_test_100_leaves_truncated_proof(
    test_data: &[Bytes32],
) -> Result<ProofTest, TestError> {
    let name = "Test 100 Leaves Truncated Proof".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 100 leaves and leaf index 10, \
        then drop the last proof step and its side. \
        This proof is invalid because it stops below the root. \
        Verification is expected to fail."
        .to_string();
    let sample_data = &test_data[1000..1100];
    let proof_index = 10;
    let mut test =
        generate_test(name, function_name, description, sample_data, proof_index)?;
    test.proof_set.pop();
    test.sides.pop();
    test.expected_verification = false;
    Ok(test)
}

#[named]
fn generate_test_10_leaves_missing_side(
    test_data: &[Bytes32],
) -> Result<ProofTest, TestError> {
    let name = "Test 10 Leaves Missing Side".to_string();
    let function_name = function_name!().to_string();
    let description = "\
        Build a proof from a binary Merkle tree consisting of 10 leaves and leaf index 4, \
        then drop the last side but keep every proof digest. \
        This proof is malformed because it has more digests than sides. \
        Verification is expected to fail."
        .to_string();
    let sample_data = &test_data[100..110];
    let proof_index = 4;
    let mut test =
        generate_test(name, function_name, description, sample_data, proof_index)?;
    test.sides.pop();
    test.expected_verification = false;
    Ok(test)
}

fn main() -> Result<(), TestError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.output_dir)?;

    let test_data_count = 2u64.pow(16);
    let test_data = (0..test_data_count)
        .map(|i| sum(&i.to_be_bytes()))
        .collect::<Vec<Bytes32>>();

    let generators: [fn(&[Bytes32]) -> Result<ProofTest, TestError>; 11] = [
        generate_test_10_leaves_index_4,
        generate_test_1_leaf_index_0,
        generate_test_3_leaves_index_2,
        generate_test_5_leaves_index_4,
        generate_test_100_leaves_index_10,
        generate_test_1024_leaves_index_512,
        generate_test_1_leaf_invalid_root,
        generate_test_1024_leaves_invalid_root,
        generate_test_10_leaves_flipped_side,
        generate_test_100_leaves_truncated_proof,
        generate_test_10_leaves_missing_side,
    ];
    for generate in generators {
        let test = generate(&test_data)?;
        write_test(&args.output_dir, &test)?;
    }

    tracing::info!(count = generators.len(), "binary proof suite written");
    Ok(())
}

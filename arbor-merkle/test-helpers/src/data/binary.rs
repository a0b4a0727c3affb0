use arbor_merkle::{
    binary::{
        verify,
        Sha256Hasher,
        Side,
    },
    common::Bytes32,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    binary::verify as verify_from_test_helper,
    data::{
        EncodedValue,
        TestError,
    },
};

#[derive(Serialize, Deserialize, Debug)]
pub struct ProofTest {
    pub name: String,
    pub function_name: String,
    pub description: String,
    pub root: EncodedValue,
    pub data: EncodedValue,
    pub proof_set: Vec<EncodedValue>,
    pub sides: Vec<Side>,
    pub expected_verification: bool,
}

impl ProofTest {
    pub fn execute(self) -> Result<(), TestError> {
        let root = self.root.into_digest()?;
        let data = self.data.into_digest()?;
        let proof_set = self
            .proof_set
            .into_iter()
            .map(EncodedValue::into_digest)
            .collect::<Result<Vec<Bytes32>, _>>()?;

        // A malformed proof cannot verify.
        let verification =
            verify(&Sha256Hasher, &root, &data, &proof_set, &self.sides).unwrap_or(false);
        let verification_from_test_helper =
            verify_from_test_helper(&root, &data, &proof_set, &self.sides);
        let expected_verification = self.expected_verification;

        if verification != verification_from_test_helper {
            return Err(TestError::Failed(
                self.name,
                format!(
                    "Verification {verification} does not match reference verification {verification_from_test_helper}",
                ),
            ));
        }

        if verification != expected_verification {
            return Err(TestError::Failed(
                self.name,
                format!(
                    "Verification {verification} does not match expected verification {expected_verification}",
                ),
            ));
        }

        Ok(())
    }
}

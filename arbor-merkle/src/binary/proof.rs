use crate::binary::{
    fold_path,
    Hasher,
};

use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
};

/// Where a proof digest goes relative to the running hash during
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    /// The sibling is the left child: `running = hash(sibling ++ running)`.
    Left,
    /// The sibling is the right child: `running = hash(running ++ sibling)`.
    Right,
}

impl Side {
    pub const fn as_u8(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.as_u8()
    }
}

impl TryFrom<u8> for Side {
    type Error = ProofError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::Left),
            1 => Ok(Side::Right),
            other => Err(ProofError::InvalidSide(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ProofError {
    #[display(fmt = "proof path has {} digests but {} sides", path, sides)]
    LengthMismatch { path: usize, sides: usize },

    #[display(fmt = "side value {} is neither left (0) nor right (1)", _0)]
    InvalidSide(u8),

    #[display(fmt = "digest of step {} has an unexpected length of {} bytes", step, len)]
    DigestLength { step: usize, len: usize },

    #[display(fmt = "proof has {} steps, more than the encoding can count", _0)]
    TooManySteps(usize),

    #[display(fmt = "encoded proof ends before its last step")]
    Truncated,

    #[display(fmt = "encoded proof is followed by {} unexpected bytes", _0)]
    TrailingBytes(usize),
}

#[cfg(feature = "std")]
impl std::error::Error for ProofError {}

/// An inclusion proof: sibling digests and their sides, ordered from the leaf
/// toward the root.
///
/// The hasher type is part of the proof, so a proof can only be checked with
/// the strategy that produced it.
pub struct Proof<H: Hasher> {
    path: Vec<H::Output>,
    sides: Vec<Side>,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: Hasher> Proof<H> {
    pub fn from_parts(path: Vec<H::Output>, sides: Vec<Side>) -> Result<Self, ProofError> {
        if path.len() != sides.len() {
            return Err(ProofError::LengthMismatch {
                path: path.len(),
                sides: sides.len(),
            })
        }
        Ok(Self {
            path,
            sides,
            _hasher: PhantomData,
        })
    }

    /// Builds a proof from sides in their numeric form (0 = left, 1 = right).
    pub fn from_raw_parts(path: Vec<H::Output>, sides: &[u8]) -> Result<Self, ProofError> {
        let sides = sides
            .iter()
            .map(|side| Side::try_from(*side))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(path, sides)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            sides: Vec::with_capacity(capacity),
            _hasher: PhantomData,
        }
    }

    pub(crate) fn push(&mut self, digest: H::Output, side: Side) {
        self.path.push(digest);
        self.sides.push(side);
    }

    pub fn path(&self) -> &[H::Output] {
        &self.path
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&H::Output, Side)> + '_ {
        self.path.iter().zip(self.sides.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<H::Output>, Vec<Side>) {
        (self.path, self.sides)
    }

    /// Replays the proof from `leaf` and returns the root it commits to.
    pub fn compute_root(&self, hasher: &H, leaf: &H::Output) -> H::Output {
        fold_path(hasher, leaf, self.iter())
    }

    pub fn verify(&self, hasher: &H, root: &H::Output, leaf: &H::Output) -> bool {
        self.compute_root(hasher, leaf) == *root
    }

    /// Encodes the proof as a little-endian `u32` step count followed by
    /// `side (u8) | digest length (u8) | digest` for every step.
    ///
    /// Fails when a digest is longer than 255 bytes or when the step count
    /// does not fit in a `u32`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProofError> {
        let count = u32::try_from(self.len())
            .map_err(|_| ProofError::TooManySteps(self.len()))?;
        let digest_len = self.path.first().map_or(0, |digest| digest.as_ref().len());
        let mut out = Vec::with_capacity(4 + self.len() * (2 + digest_len));
        out.extend_from_slice(&count.to_le_bytes());
        for (step, (digest, side)) in self.iter().enumerate() {
            let digest = digest.as_ref();
            let len = u8::try_from(digest.len()).map_err(|_| ProofError::DigestLength {
                step,
                len: digest.len(),
            })?;
            out.push(side.as_u8());
            out.push(len);
            out.extend_from_slice(digest);
        }
        Ok(out)
    }

    pub fn from_bytes(hasher: &H, bytes: &[u8]) -> Result<Self, ProofError> {
        let (count, mut rest) = split(bytes, 4)?;
        let count = u32::from_le_bytes([count[0], count[1], count[2], count[3]]);

        let mut proof = Self::with_capacity(0);
        for step in 0..count as usize {
            let (header, tail) = split(rest, 2)?;
            let side = Side::try_from(header[0])?;
            let len = header[1] as usize;
            let (digest, tail) = split(tail, len)?;
            let digest = hasher
                .output_from_slice(digest)
                .ok_or(ProofError::DigestLength { step, len })?;
            proof.push(digest, side);
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(ProofError::TrailingBytes(rest.len()))
        }
        Ok(proof)
    }
}

fn split(bytes: &[u8], at: usize) -> Result<(&[u8], &[u8]), ProofError> {
    if bytes.len() < at {
        return Err(ProofError::Truncated)
    }
    Ok(bytes.split_at(at))
}

impl<H: Hasher> Clone for Proof<H> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            sides: self.sides.clone(),
            _hasher: PhantomData,
        }
    }
}

impl<H: Hasher> PartialEq for Proof<H> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.sides == other.sides
    }
}

impl<H: Hasher> Eq for Proof<H> {}

impl<H: Hasher> fmt::Debug for Proof<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.iter()
                    .map(|(digest, side)| (side, hex::encode(digest.as_ref()))),
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        binary::{
            MerkleTree,
            Sha256Hasher,
        },
        common::sum,
    };

    type Sha256Proof = Proof<Sha256Hasher>;

    fn sample_proof() -> Sha256Proof {
        Sha256Proof::from_parts(
            vec![sum(b"sibling"), sum(b"uncle"), sum(b"great uncle")],
            vec![Side::Right, Side::Left, Side::Right],
        )
        .unwrap()
    }

    #[test]
    fn side_try_from_accepts_only_zero_and_one() {
        assert_eq!(Side::try_from(0), Ok(Side::Left));
        assert_eq!(Side::try_from(1), Ok(Side::Right));
        assert_eq!(Side::try_from(2), Err(ProofError::InvalidSide(2)));
        assert_eq!(u8::from(Side::Right), 1);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn side_serializes_as_a_lowercase_name() {
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), "\"left\"");
        let side: Side = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn from_parts_rejects_mismatched_lengths() {
        let result = Sha256Proof::from_parts(vec![sum(b"a"), sum(b"b")], vec![Side::Left]);
        assert_eq!(
            result,
            Err(ProofError::LengthMismatch { path: 2, sides: 1 })
        );
    }

    #[test]
    fn from_raw_parts_rejects_an_unknown_side() {
        let result = Sha256Proof::from_raw_parts(vec![sum(b"a"), sum(b"b")], &[1, 7]);
        assert_eq!(result, Err(ProofError::InvalidSide(7)));

        let proof = Sha256Proof::from_raw_parts(vec![sum(b"a"), sum(b"b")], &[1, 0]).unwrap();
        assert_eq!(proof.sides(), &[Side::Right, Side::Left]);
    }

    #[test]
    fn to_bytes_lays_out_count_then_side_length_and_digest() {
        let proof = sample_proof();
        let bytes = proof.to_bytes().unwrap();

        assert_eq!(bytes.len(), 4 + 3 * (2 + 32));
        assert_eq!(&bytes[..4], &3u32.to_le_bytes());
        assert_eq!(bytes[4], 1);
        assert_eq!(bytes[5], 32);
        assert_eq!(&bytes[6..38], &sum(b"sibling"));
        assert_eq!(bytes[38], 0);
    }

    #[test]
    fn from_bytes_restores_the_encoded_proof() {
        let proof = sample_proof();
        let bytes = proof.to_bytes().unwrap();
        let decoded = Sha256Proof::from_bytes(&Sha256Hasher, &bytes).unwrap();
        assert_eq!(decoded, proof);

        let empty = Sha256Proof::from_parts(vec![], vec![]).unwrap();
        let bytes = empty.to_bytes().unwrap();
        let decoded = Sha256Proof::from_bytes(&Sha256Hasher, &bytes).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn from_bytes_rejects_malformed_input() {
        let bytes = sample_proof().to_bytes().unwrap();

        assert_eq!(
            Sha256Proof::from_bytes(&Sha256Hasher, &bytes[..2]),
            Err(ProofError::Truncated)
        );
        assert_eq!(
            Sha256Proof::from_bytes(&Sha256Hasher, &bytes[..bytes.len() - 1]),
            Err(ProofError::Truncated)
        );

        let mut trailing = bytes.clone();
        trailing.extend_from_slice(&[0, 0]);
        assert_eq!(
            Sha256Proof::from_bytes(&Sha256Hasher, &trailing),
            Err(ProofError::TrailingBytes(2))
        );

        let mut bad_side = bytes.clone();
        bad_side[4] = 2;
        assert_eq!(
            Sha256Proof::from_bytes(&Sha256Hasher, &bad_side),
            Err(ProofError::InvalidSide(2))
        );

        let mut short_digest = 1u32.to_le_bytes().to_vec();
        short_digest.extend_from_slice(&[0, 16]);
        short_digest.extend_from_slice(&[0xab; 16]);
        assert_eq!(
            Sha256Proof::from_bytes(&Sha256Hasher, &short_digest),
            Err(ProofError::DigestLength { step: 0, len: 16 })
        );
    }

    #[test]
    fn compute_root_folds_siblings_on_their_recorded_side() {
        let hasher = Sha256Hasher;
        let leaf = sum(b"leaf");
        let proof = sample_proof();

        let step_1 = hasher.hash_pair(&leaf, &sum(b"sibling"));
        let step_2 = hasher.hash_pair(&sum(b"uncle"), &step_1);
        let step_3 = hasher.hash_pair(&step_2, &sum(b"great uncle"));

        assert_eq!(proof.compute_root(&hasher, &leaf), step_3);
        assert!(proof.verify(&hasher, &step_3, &leaf));
        assert!(!proof.verify(&hasher, &step_2, &leaf));
    }

    #[test]
    fn to_bytes_rejects_a_digest_longer_than_its_length_byte() {
        struct WideHasher;

        impl Hasher for WideHasher {
            type Output = [u8; 256];

            fn hash(&self, data: &[u8]) -> [u8; 256] {
                let mut out = [0u8; 256];
                for (chunk, seed) in out.chunks_mut(32).zip(0u8..) {
                    chunk.copy_from_slice(&crate::common::sum_iter([&[seed][..], data]));
                }
                out
            }

            fn output_from_slice(&self, bytes: &[u8]) -> Option<[u8; 256]> {
                bytes.try_into().ok()
            }
        }

        let tree = MerkleTree::from_leaves(
            WideHasher,
            [WideHasher.hash(b"left"), WideHasher.hash(b"right")],
        )
        .unwrap();
        let proof = tree.prove_index(0).unwrap();

        assert_eq!(
            proof.to_bytes(),
            Err(ProofError::DigestLength { step: 0, len: 256 })
        );
    }
}

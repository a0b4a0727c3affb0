use crate::common::{
    sum,
    sum_iter,
    Bytes32,
};

use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
};
use digest::Digest;

/// Hash strategy shared by tree construction, proof generation and proof
/// verification.
///
/// Interior nodes are committed as `hash_pair(left, right)`, which must equal
/// `hash(left ++ right)`: no prefixes, left child first.
pub trait Hasher {
    type Output: Clone + Eq + AsRef<[u8]> + fmt::Debug;

    fn hash(&self, data: &[u8]) -> Self::Output;

    fn hash_pair(&self, lhs: &Self::Output, rhs: &Self::Output) -> Self::Output {
        let lhs = lhs.as_ref();
        let rhs = rhs.as_ref();
        let mut data = Vec::with_capacity(lhs.len() + rhs.len());
        data.extend_from_slice(lhs);
        data.extend_from_slice(rhs);
        self.hash(&data)
    }

    /// Rebuilds a digest from its byte form, or `None` if `bytes` does not
    /// have this hasher's output length.
    fn output_from_slice(&self, bytes: &[u8]) -> Option<Self::Output>;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    type Output = H::Output;

    fn hash(&self, data: &[u8]) -> Self::Output {
        (**self).hash(data)
    }

    fn hash_pair(&self, lhs: &Self::Output, rhs: &Self::Output) -> Self::Output {
        (**self).hash_pair(lhs, rhs)
    }

    fn output_from_slice(&self, bytes: &[u8]) -> Option<Self::Output> {
        (**self).output_from_slice(bytes)
    }
}

/// The default strategy: SHA-256 with 32-byte digests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    type Output = Bytes32;

    fn hash(&self, data: &[u8]) -> Bytes32 {
        sum(data)
    }

    fn hash_pair(&self, lhs: &Bytes32, rhs: &Bytes32) -> Bytes32 {
        sum_iter([lhs, rhs])
    }

    fn output_from_slice(&self, bytes: &[u8]) -> Option<Bytes32> {
        Bytes32::try_from(bytes).ok()
    }
}

/// Adapts any fixed-output [`Digest`] into a [`Hasher`].
pub struct DigestHasher<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> DigestHasher<D> {
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHasher<D> {}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHasher")
            .field("digest", &core::any::type_name::<D>())
            .finish()
    }
}

impl<D: Digest> Hasher for DigestHasher<D> {
    type Output = digest::Output<D>;

    fn hash(&self, data: &[u8]) -> Self::Output {
        D::digest(data)
    }

    fn hash_pair(&self, lhs: &Self::Output, rhs: &Self::Output) -> Self::Output {
        D::new().chain_update(lhs).chain_update(rhs).finalize()
    }

    fn output_from_slice(&self, bytes: &[u8]) -> Option<Self::Output> {
        (bytes.len() == <D as Digest>::output_size())
            .then(|| digest::Output::<D>::clone_from_slice(bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type Keccak256Hasher = DigestHasher<sha3::Keccak256>;

    #[test]
    fn hash_pair_hashes_the_concatenation_left_before_right() {
        let hasher = Sha256Hasher;
        let lhs = hasher.hash(b"left");
        let rhs = hasher.hash(b"right");

        let mut concatenated = lhs.to_vec();
        concatenated.extend_from_slice(&rhs);

        assert_eq!(hasher.hash_pair(&lhs, &rhs), sum(&concatenated));
        assert_ne!(hasher.hash_pair(&lhs, &rhs), hasher.hash_pair(&rhs, &lhs));
    }

    #[test]
    fn default_hash_pair_matches_the_specialised_sha256_pair() {
        struct Unspecialised;

        impl Hasher for Unspecialised {
            type Output = Bytes32;

            fn hash(&self, data: &[u8]) -> Bytes32 {
                sum(data)
            }

            fn output_from_slice(&self, bytes: &[u8]) -> Option<Bytes32> {
                bytes.try_into().ok()
            }
        }

        let lhs = sum(b"a");
        let rhs = sum(b"b");
        assert_eq!(
            Unspecialised.hash_pair(&lhs, &rhs),
            Sha256Hasher.hash_pair(&lhs, &rhs)
        );
    }

    #[test]
    fn digest_hasher_over_sha2_agrees_with_sha256_hasher() {
        let hasher = DigestHasher::<sha2::Sha256>::new();
        let lhs = hasher.hash(b"Go ahead, make my day.");
        let rhs = hasher.hash(b"May the Force be with you.");

        assert_eq!(lhs.as_slice(), &Sha256Hasher.hash(b"Go ahead, make my day.")[..]);
        assert_eq!(
            hasher.hash_pair(&lhs, &rhs).as_slice(),
            &Sha256Hasher.hash_pair(&lhs.into(), &rhs.into())[..]
        );
    }

    #[test]
    fn keccak_and_sha256_commit_to_different_digests() {
        let keccak = Keccak256Hasher::new();
        assert_ne!(keccak.hash(b"data").as_slice(), &Sha256Hasher.hash(b"data")[..]);
    }

    #[test]
    fn output_from_slice_rejects_the_wrong_length() {
        let digest = Sha256Hasher.hash(b"data");
        assert_eq!(Sha256Hasher.output_from_slice(&digest), Some(digest));
        assert_eq!(Sha256Hasher.output_from_slice(&digest[..31]), None);

        let keccak = Keccak256Hasher::new();
        assert!(keccak.output_from_slice(&[0u8; 32]).is_some());
        assert!(keccak.output_from_slice(&[0u8; 33]).is_none());
    }
}

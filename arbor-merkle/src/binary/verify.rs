use crate::binary::{
    Hasher,
    MerkleTreeError,
    ProofError,
    Side,
};

pub(crate) fn fold_path<'a, H, I>(hasher: &H, leaf: &H::Output, steps: I) -> H::Output
where
    H: Hasher,
    H::Output: 'a,
    I: IntoIterator<Item = (&'a H::Output, Side)>,
{
    steps
        .into_iter()
        .fold(leaf.clone(), |running, (sibling, side)| match side {
            Side::Left => hasher.hash_pair(sibling, &running),
            Side::Right => hasher.hash_pair(&running, sibling),
        })
}

/// Checks that `leaf` is committed to by `root` through the sibling `path`.
///
/// Returns `Ok(false)` when the recomputed root differs, and an error only when
/// the proof itself is malformed.
pub fn verify<H: Hasher>(
    hasher: &H,
    root: &H::Output,
    leaf: &H::Output,
    path: &[H::Output],
    sides: &[Side],
) -> Result<bool, MerkleTreeError> {
    if path.len() != sides.len() {
        return Err(ProofError::LengthMismatch {
            path: path.len(),
            sides: sides.len(),
        }
        .into())
    }

    let computed = fold_path(hasher, leaf, path.iter().zip(sides.iter().copied()));
    Ok(computed == *root)
}

use alloy_primitives::{Address, B256, U256};
use anchor_lang::solana_program::keccak::hashv;

use crate::constants::LEAF_ENCODING_LEN;

/// Packs a `(account, max_amount)` pair exactly as the off-chain tree builder does:
/// the raw 20 address bytes followed by the 32-byte big-endian amount, no padding.
pub fn encode_leaf(account: &Address, max_amount: &U256) -> [u8; LEAF_ENCODING_LEN] {
    let mut encoded = [0u8; LEAF_ENCODING_LEN];
    encoded[..20].copy_from_slice(account.as_slice());
    encoded[20..].copy_from_slice(&max_amount.to_be_bytes::<32>());
    encoded
}

/// Leaf node hash: keccak256(encode_leaf(account, max_amount))
pub fn leaf_hash(account: &Address, max_amount: &U256) -> B256 {
    B256::from(hashv(&[&encode_leaf(account, max_amount)]).to_bytes())
}

/// Hashes two nodes with the smaller one first, so proofs need no direction bits.
pub fn combine(a: &B256, b: &B256) -> B256 {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    B256::from(hashv(&[left.as_slice(), right.as_slice()]).to_bytes())
}

/// Returns true if `leaf` can be proved to be part of the tree defined by `root`.
/// The `proof` holds sibling hashes on the branch from the leaf to the root,
/// ordered from the bottom up.
pub fn verify(proof: &[B256], root: B256, leaf: B256) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |computed, sibling| combine(&computed, sibling));
    computed == root
}

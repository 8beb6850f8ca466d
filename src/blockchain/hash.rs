use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a block's canonical representation.
///
/// Field order is fixed (nonce, index, timestamp, parent hash, data) and the
/// fields are joined with `':'`, so any holder of the same fields reproduces
/// the same digest.
pub fn block_digest(
    nonce: u64,
    index: u64,
    timestamp: i64,
    parent_hash: &str,
    data: &str,
) -> String {
    let preimage = format!("{}:{}:{}:{}:{}", nonce, index, timestamp, parent_hash, data);
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::block_digest;

    #[test]
    fn digest_is_deterministic() {
        let a = block_digest(7, 1, 1_700_000_000, "parent", "payload");
        let b = block_digest(7, 1, 1_700_000_000, "parent", "payload");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA-256
    }

    #[test]
    fn digest_changes_with_any_field() {
        let base = block_digest(7, 1, 1_700_000_000, "parent", "payload");
        assert_ne!(base, block_digest(8, 1, 1_700_000_000, "parent", "payload"));
        assert_ne!(base, block_digest(7, 2, 1_700_000_000, "parent", "payload"));
        assert_ne!(base, block_digest(7, 1, 1_700_000_001, "parent", "payload"));
        assert_ne!(base, block_digest(7, 1, 1_700_000_000, "other", "payload"));
        assert_ne!(base, block_digest(7, 1, 1_700_000_000, "parent", "other"));
    }
}

//! Stable hashing for task IDs

use sha2::{Digest, Sha256};

/// First 16 hex digits of SHA-256 over the task's identifying inputs.
///
/// `attempt` is bumped by the caller to re-salt on collision.
pub fn task_hash(text: &str, deadline: &str, salt: &str, seq: usize, attempt: usize) -> String {
    let hash_input = format!("{salt}:{seq}:{attempt}:{deadline}:{text}");
    let mut hasher = Sha256::new();
    hasher.update(hash_input.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)[..16].to_string()
}

//! Message identifier derivation
//!
//! Every locked message is identified by a 32-byte keccak256 digest computed
//! by the contract at lock time. Off-chain clients can reproduce it with the
//! `ComputeMessageId` query or by hashing the same layout themselves.
//!
//! # Byte Layout
//! - 4 bytes:  sender length (u32, big-endian)
//! - N bytes:  sender address (UTF-8)
//! - 4 bytes:  recipient length (u32, big-endian)
//! - M bytes:  recipient address (UTF-8)
//! - 8 bytes:  nonce (u64, big-endian)
//! - 8 bytes:  creation time in seconds (u64, big-endian)
//! - 32 bytes: keccak256(content)
//!
//! The nonce is a global counter that is never reused, so two locks created in
//! the same block for the same recipient with the same content still differ.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the identifier of a locked message.
pub fn compute_message_id(
    sender: &str,
    recipient: &str,
    nonce: u64,
    created_at_seconds: u64,
    content: &str,
) -> [u8; 32] {
    let content_hash = keccak256(content.as_bytes());

    let mut data = Vec::with_capacity(4 + sender.len() + 4 + recipient.len() + 8 + 8 + 32);
    data.extend_from_slice(&(sender.len() as u32).to_be_bytes());
    data.extend_from_slice(sender.as_bytes());
    data.extend_from_slice(&(recipient.len() as u32).to_be_bytes());
    data.extend_from_slice(recipient.as_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    data.extend_from_slice(&created_at_seconds.to_be_bytes());
    data.extend_from_slice(&content_hash);

    keccak256(&data)
}

/// Convert 32-byte hash to `0x`-prefixed lowercase hex (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(value: &str) -> Result<[u8; 32], &'static str> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    if value.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let mut result = [0u8; 32];
    hex::decode_to_slice(value, &mut result).map_err(|_| "Invalid hex character")?;
    Ok(result)
}

/// Interpret raw bytes as a 32-byte message id
pub fn bytes_to_message_id(bytes: &[u8]) -> Result<[u8; 32], String> {
    bytes
        .try_into()
        .map_err(|_| format!("expected 32 bytes, got {}", bytes.len()))
}

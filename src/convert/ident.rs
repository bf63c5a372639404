//! Identifier packing
//!
//! UUIDs carried over byte-oriented transports use the RFC 4122 layout:
//! bytes 0-7 hold the most significant 64 bits big-endian, bytes 8-15 the
//! least significant 64 bits.

use uuid::Uuid;

use crate::error::{ToolboxError, ToolboxResult};

/// Number of bytes in a packed identifier.
pub const ID_LEN: usize = 16;

/// Unpack a 16-byte buffer into a UUID.
///
/// Any other buffer length is rejected before a single byte is interpreted.
pub fn id_from_bytes(bytes: &[u8]) -> ToolboxResult<Uuid> {
    if bytes.len() != ID_LEN {
        return Err(ToolboxError::IdentifierLength { len: bytes.len() });
    }
    let mut msb: u64 = 0;
    let mut lsb: u64 = 0;
    for &byte in &bytes[..8] {
        msb = (msb << 8) | u64::from(byte);
    }
    for &byte in &bytes[8..] {
        lsb = (lsb << 8) | u64::from(byte);
    }
    Ok(Uuid::from_u64_pair(msb, lsb))
}

/// Pack a UUID into its 16-byte RFC 4122 representation.
///
/// Exact inverse of [`id_from_bytes`] for every 128-bit value.
pub fn id_to_bytes(id: Uuid) -> [u8; ID_LEN] {
    let (msb, lsb) = id.as_u64_pair();
    let mut buffer = [0u8; ID_LEN];
    for i in 0..8 {
        buffer[i] = (msb >> (8 * (7 - i))) as u8;
        buffer[i + 8] = (lsb >> (8 * (7 - i))) as u8;
    }
    buffer
}

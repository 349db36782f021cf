//! The NDN VarNum codec.
//!
//! A VarNum is the variable-width unsigned integer used for both the type and
//! the length field of every TLV element:
//!
//! | value range         | encoding                  | width |
//! |---------------------|---------------------------|-------|
//! | `0..=252`           | the value itself          | 1     |
//! | `253..=0xFFFF`      | `0xFD` + 2-byte big-endian | 3     |
//! | `..=0xFFFF_FFFF`    | `0xFE` + 4-byte big-endian | 5     |
//! | `..=u64::MAX`       | `0xFF` + 8-byte big-endian | 9     |
//!
//! Encoding always picks the shortest form. Decoding rejects any wider form.

use crate::error::{TlvError, TlvResult};

/// Marker for a 2-byte big-endian payload.
pub const MARKER_U16: u8 = 0xFD;
/// Marker for a 4-byte big-endian payload.
pub const MARKER_U32: u8 = 0xFE;
/// Marker for an 8-byte big-endian payload.
pub const MARKER_U64: u8 = 0xFF;

/// Number of bytes `encode(n)` produces.
pub const fn encoded_len(n: u64) -> usize {
    if n < MARKER_U16 as u64 {
        1
    } else if n <= u16::MAX as u64 {
        3
    } else if n <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Encode `n` in its minimal form.
///
/// # Examples
///
/// ```
/// use ndn_tlv::varnum;
///
/// assert_eq!(varnum::encode(8), vec![0x08]);
/// assert_eq!(varnum::encode(253), vec![0xFD, 0x00, 0xFD]);
/// ```
pub fn encode(n: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(n));
    write(&mut buf, n);
    buf
}

/// Append the minimal encoding of `n` to `buf`.
pub fn write(buf: &mut Vec<u8>, n: u64) {
    match encoded_len(n) {
        1 => buf.push(n as u8),
        3 => {
            buf.push(MARKER_U16);
            buf.extend_from_slice(&(n as u16).to_be_bytes());
        }
        5 => {
            buf.push(MARKER_U32);
            buf.extend_from_slice(&(n as u32).to_be_bytes());
        }
        _ => {
            buf.push(MARKER_U64);
            buf.extend_from_slice(&n.to_be_bytes());
        }
    }
}

/// Encode `n` into a fixed output buffer, returning the bytes written.
///
/// Fails with [`TlvError::BufferTooSmall`] when `out` cannot hold the
/// minimal form of `n`.
pub fn encode_into(n: u64, out: &mut [u8]) -> TlvResult<usize> {
    let width = encoded_len(n);
    if out.len() < width {
        return Err(TlvError::BufferTooSmall {
            needed: width,
            available: out.len(),
        });
    }
    match width {
        1 => out[0] = n as u8,
        3 => {
            out[0] = MARKER_U16;
            out[1..3].copy_from_slice(&(n as u16).to_be_bytes());
        }
        5 => {
            out[0] = MARKER_U32;
            out[1..5].copy_from_slice(&(n as u32).to_be_bytes());
        }
        _ => {
            out[0] = MARKER_U64;
            out[1..9].copy_from_slice(&n.to_be_bytes());
        }
    }
    Ok(width)
}

/// Decode a VarNum starting at `offset`. Returns `(value, bytes_consumed)`.
pub fn decode(data: &[u8], offset: usize) -> TlvResult<(u64, usize)> {
    let rest = data.get(offset..).unwrap_or_default();
    let Some(&marker) = rest.first() else {
        return Err(TlvError::Truncated {
            needed: 1,
            available: 0,
        });
    };

    let payload = match marker {
        MARKER_U16 => 2,
        MARKER_U32 => 4,
        MARKER_U64 => 8,
        _ => return Ok((marker as u64, 1)),
    };
    let width = 1 + payload;
    if rest.len() < width {
        return Err(TlvError::Truncated {
            needed: width,
            available: rest.len(),
        });
    }

    let value = rest[1..width]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);
    if encoded_len(value) != width {
        return Err(TlvError::NonMinimal { value, width });
    }
    Ok((value, width))
}

//! Type-length-value element framing.

use crate::error::{TlvError, TlvResult};
use crate::varnum;

/// A TLV element borrowed from the front of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvElement<'a> {
    /// The element's TLV type.
    pub typ: u64,
    /// The element's value bytes.
    pub value: &'a [u8],
    /// Total bytes the element occupies, header included.
    pub consumed: usize,
}

/// Total encoded size of an element with the given type and value length.
pub const fn tlv_len(typ: u64, value_len: usize) -> usize {
    varnum::encoded_len(typ) + varnum::encoded_len(value_len as u64) + value_len
}

/// Append `VarNum(typ) ++ VarNum(len) ++ value` to `buf`.
pub fn write_tlv(buf: &mut Vec<u8>, typ: u64, value: &[u8]) {
    buf.reserve(tlv_len(typ, value.len()));
    varnum::write(buf, typ);
    varnum::write(buf, value.len() as u64);
    buf.extend_from_slice(value);
}

/// Read one element from the front of `data`.
///
/// Bytes after the element are left alone; `consumed` tells the caller where
/// the next element starts.
pub fn read_tlv(data: &[u8]) -> TlvResult<TlvElement<'_>> {
    let (typ, type_len) = varnum::decode(data, 0)?;
    let (length, length_len) = varnum::decode(data, type_len)?;
    let start = type_len + length_len;
    let available = data.len() - start;
    if length > available as u64 {
        return Err(TlvError::LengthMismatch {
            declared: length,
            actual: available,
        });
    }
    let end = start + length as usize;
    Ok(TlvElement {
        typ,
        value: &data[start..end],
        consumed: end,
    })
}

/// Read one element and require it to carry `expected` as its type.
pub fn read_tlv_of(data: &[u8], expected: u64) -> TlvResult<TlvElement<'_>> {
    let element = read_tlv(data)?;
    if element.typ != expected {
        return Err(TlvError::UnexpectedType {
            expected,
            actual: element.typ,
        });
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let mut buf = Vec::new();
        write_tlv(&mut buf, 0x08, b"local");
        write_tlv(&mut buf, 0x08, b"ndn");
        assert_eq!(&buf[..7], b"\x08\x05local");

        let first = read_tlv(&buf).unwrap();
        assert_eq!(first.typ, 0x08);
        assert_eq!(first.value, b"local");
        assert_eq!(first.consumed, 7);

        let second = read_tlv(&buf[first.consumed..]).unwrap();
        assert_eq!(second.value, b"ndn");
        assert_eq!(second.consumed, 5);
    }

    #[test]
    fn wide_type_and_length() {
        let value = vec![0xAB; 300];
        let mut buf = Vec::new();
        write_tlv(&mut buf, 0x5765, &value);
        assert_eq!(&buf[..6], &[0xFD, 0x57, 0x65, 0xFD, 0x01, 0x2C]);
        assert_eq!(buf.len(), tlv_len(0x5765, 300));

        let element = read_tlv(&buf).unwrap();
        assert_eq!(element.typ, 0x5765);
        assert_eq!(element.value.len(), 300);
    }

    #[test]
    fn empty_value() {
        let element = read_tlv(&[0x08, 0x00]).unwrap();
        assert_eq!(element.value, b"");
        assert_eq!(element.consumed, 2);
    }

    #[test]
    fn length_overrun() {
        let err = read_tlv(&[0x08, 0x05, b'a', b'b']).unwrap_err();
        assert_eq!(
            err,
            TlvError::LengthMismatch {
                declared: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn missing_length() {
        assert!(matches!(
            read_tlv(&[0x08]).unwrap_err(),
            TlvError::Truncated { .. }
        ));
    }

    #[test]
    fn expected_type() {
        let data = [0x07, 0x02, 0x08, 0x00];
        assert_eq!(read_tlv_of(&data, 0x07).unwrap().value, &[0x08, 0x00]);
        assert_eq!(
            read_tlv_of(&data, 0x05).unwrap_err(),
            TlvError::UnexpectedType {
                expected: 0x05,
                actual: 0x07
            }
        );
    }
}

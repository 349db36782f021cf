use std::cmp::Ordering;
use std::fmt;

use bytes::Bytes;
use ndn_tlv::{read_tlv, tlv_len, write_tlv, TlvError};
use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};

/// Reserved TLV type numbers for name components and the name element.
pub mod types {
    /// The Name element wrapping a sequence of components.
    pub const NAME: u64 = 0x07;
    /// SHA-256 digest of the whole Data packet.
    pub const IMPLICIT_SHA256: u64 = 0x01;
    /// SHA-256 digest of an Interest's parameters.
    pub const PARAMETERS_SHA256: u64 = 0x02;
    /// Ordinary, uninterpreted component.
    pub const GENERIC: u64 = 0x08;
    /// Segment number convention.
    pub const SEGMENT: u64 = 0x21;
    /// Byte offset convention.
    pub const BYTE_OFFSET: u64 = 0x22;
    /// Version convention.
    pub const VERSION: u64 = 0x23;
    /// Timestamp convention.
    pub const TIMESTAMP: u64 = 0x24;
    /// Sequence number convention.
    pub const SEQUENCE_NUM: u64 = 0x25;
}

/// The closed set of component types the codecs give meaning to.
///
/// Every `u64` type number maps to exactly one kind; numbers without a
/// reserved meaning land in [`ComponentKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    ImplicitSha256,
    ParametersSha256,
    Generic,
    Segment,
    ByteOffset,
    Version,
    Timestamp,
    SequenceNum,
    Other(u64),
}

impl ComponentKind {
    /// Classify a TLV type number.
    pub const fn from_type(typ: u64) -> Self {
        match typ {
            types::IMPLICIT_SHA256 => Self::ImplicitSha256,
            types::PARAMETERS_SHA256 => Self::ParametersSha256,
            types::GENERIC => Self::Generic,
            types::SEGMENT => Self::Segment,
            types::BYTE_OFFSET => Self::ByteOffset,
            types::VERSION => Self::Version,
            types::TIMESTAMP => Self::Timestamp,
            types::SEQUENCE_NUM => Self::SequenceNum,
            other => Self::Other(other),
        }
    }

    /// The TLV type number of this kind.
    pub const fn type_number(self) -> u64 {
        match self {
            Self::ImplicitSha256 => types::IMPLICIT_SHA256,
            Self::ParametersSha256 => types::PARAMETERS_SHA256,
            Self::Generic => types::GENERIC,
            Self::Segment => types::SEGMENT,
            Self::ByteOffset => types::BYTE_OFFSET,
            Self::Version => types::VERSION,
            Self::Timestamp => types::TIMESTAMP,
            Self::SequenceNum => types::SEQUENCE_NUM,
            Self::Other(typ) => typ,
        }
    }

    /// Returns `true` for the two SHA-256 digest kinds.
    pub const fn is_digest(self) -> bool {
        matches!(self, Self::ImplicitSha256 | Self::ParametersSha256)
    }

    /// Returns `true` for the five kinds that carry a big-endian integer.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Segment | Self::ByteOffset | Self::Version | Self::Timestamp | Self::SequenceNum
        )
    }
}

impl From<u64> for ComponentKind {
    fn from(typ: u64) -> Self {
        Self::from_type(typ)
    }
}

impl From<ComponentKind> for u64 {
    fn from(kind: ComponentKind) -> Self {
        kind.type_number()
    }
}

/// One type-tagged segment of a name.
///
/// A component is the TLV triplet `VarNum(type) ++ VarNum(length) ++ value`.
/// The type and value are stored decoded, so the length always equals the
/// value's byte count. Values are backed by [`Bytes`]; cloning a component
/// never copies its value.
///
/// Components are totally ordered by type, then value length, then value
/// bytes. See [`Component::compare`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Component {
    typ: u64,
    value: Bytes,
}

impl Component {
    /// Build a component from a type number and a value.
    pub fn from_parts(typ: u64, value: impl Into<Bytes>) -> Self {
        Self {
            typ,
            value: value.into(),
        }
    }

    /// Build a component of the given kind.
    pub fn from_kind(kind: ComponentKind, value: impl Into<Bytes>) -> Self {
        Self::from_parts(kind.type_number(), value)
    }

    /// Build a GENERIC component.
    pub fn from_bytes(value: impl Into<Bytes>) -> Self {
        Self::from_parts(types::GENERIC, value)
    }

    /// Build a component whose value is given as hex (either case).
    pub fn from_hex(hex_value: &str, typ: u64) -> Result<Self> {
        let value = hex::decode(hex_value).map_err(|e| NameError::InvalidHex(e.to_string()))?;
        Ok(Self::from_parts(typ, value))
    }

    /// Parse a component that spans exactly `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let (component, consumed) = Self::parse_prefix(data)?;
        if consumed != data.len() {
            let header = consumed - component.value.len();
            return Err(TlvError::LengthMismatch {
                declared: component.value.len() as u64,
                actual: data.len() - header,
            }
            .into());
        }
        Ok(component)
    }

    /// Parse one component from the front of `data`.
    ///
    /// Returns the component and the number of bytes it occupied.
    pub fn parse_prefix(data: &[u8]) -> Result<(Self, usize)> {
        let element = read_tlv(data)?;
        let component = Self::from_parts(element.typ, Bytes::copy_from_slice(element.value));
        Ok((component, element.consumed))
    }

    /// The TLV type number.
    pub fn typ(&self) -> u64 {
        self.typ
    }

    /// The component's kind.
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::from_type(self.typ)
    }

    /// The value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// The value as a shared buffer.
    pub fn value_bytes(&self) -> &Bytes {
        &self.value
    }

    /// Size of the wire encoding.
    pub fn encoded_len(&self) -> usize {
        tlv_len(self.typ, self.value.len())
    }

    /// Append the wire encoding to `buf`.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        write_tlv(buf, self.typ, &self.value);
    }

    /// The wire encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf);
        buf
    }

    /// Decode the value as a big-endian unsigned integer.
    ///
    /// Works on any component, not just the numeric conventions. Leading zero
    /// bytes are accepted; the significant bytes must fit in a `u64`.
    pub fn to_number(&self) -> Result<u64> {
        if self.value.is_empty() {
            return Err(NameError::EmptyNumber);
        }
        let first = self
            .value
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(self.value.len());
        let significant = &self.value[first..];
        if significant.len() > 8 {
            return Err(NameError::NumberTooWide {
                len: significant.len(),
            });
        }
        Ok(significant
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Canonical comparison: type, then value length, then value bytes.
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.typ
            .cmp(&b.typ)
            .then(a.value.len().cmp(&b.value.len()))
            .then_with(|| a.value[..].cmp(&b.value[..]))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({self})")
    }
}

impl TryFrom<&[u8]> for Component {
    type Error = NameError;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::parse(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ZEROS: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const FFS: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF";

    #[test]
    fn generic_encoding() {
        let comp = Component::from_bytes("ndn-python");
        assert_eq!(comp.to_bytes(), b"\x08\x0andn-python");
        assert_eq!(comp.typ(), types::GENERIC);
        assert_eq!(comp.kind(), ComponentKind::Generic);
        assert_eq!(comp.encoded_len(), 12);
    }

    #[test]
    fn empty_generic() {
        let comp = Component::from_bytes(Bytes::new());
        assert_eq!(comp.to_bytes(), vec![0x08, 0x00]);
        assert!(comp.value().is_empty());
    }

    #[test]
    fn parse_exact() {
        let comp = Component::parse(b"\x08\x07foo%bar").unwrap();
        assert_eq!(comp.value(), b"foo%bar");

        let wide = Component::parse(&[0xFD, 0x57, 0x65, 0x01, 0x2E]).unwrap();
        assert_eq!(wide.typ(), 0x5765);
        assert_eq!(wide.kind(), ComponentKind::Other(0x5765));
        assert_eq!(wide.value(), b".");
    }

    #[test]
    fn parse_accepts_type_zero() {
        let comp = Component::parse(b"\x00\x01A").unwrap();
        assert_eq!(comp.typ(), 0);
    }

    #[test]
    fn parse_rejects_length_mismatch() {
        let short = Component::parse(b"\x00\x01ABC").unwrap_err();
        assert_eq!(
            short,
            NameError::Tlv(TlvError::LengthMismatch {
                declared: 1,
                actual: 3
            })
        );
        assert!(short.is_decode());

        assert!(Component::parse(b"\x08\x05abc").is_err());
        assert!(Component::parse(b"\x08").is_err());
        assert!(Component::parse(b"").is_err());
    }

    #[test]
    fn parse_prefix_leaves_tail() {
        let (comp, used) = Component::parse_prefix(b"\x08\x03ndn\x08\x01x").unwrap();
        assert_eq!(comp.value(), b"ndn");
        assert_eq!(used, 5);
    }

    #[test]
    fn kind_roundtrip() {
        for typ in [0u64, 1, 2, 3, 8, 0x21, 0x22, 0x23, 0x24, 0x25, 0x5265, u64::MAX] {
            let kind = ComponentKind::from_type(typ);
            assert_eq!(kind.type_number(), typ);
            assert_eq!(u64::from(kind), typ);
        }
        assert!(ComponentKind::ImplicitSha256.is_digest());
        assert!(ComponentKind::Version.is_numeric());
        assert!(!ComponentKind::Generic.is_numeric());
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let lower = Component::from_hex("28bad4", types::IMPLICIT_SHA256).unwrap();
        let upper = Component::from_hex("28BAD4", types::IMPLICIT_SHA256).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.value(), &[0x28, 0xBA, 0xD4]);
        assert!(matches!(
            Component::from_hex("2", types::IMPLICIT_SHA256),
            Err(NameError::InvalidHex(_))
        ));
    }

    #[test]
    fn to_number_big_endian() {
        let comp = Component::from_parts(
            types::TIMESTAMP,
            vec![0x00, 0x37, 0xBB, 0x0D, 0x76, 0xED, 0x4C, 0x60],
        );
        assert_eq!(comp.to_number().unwrap(), 15686790223318112);

        let generic = Component::from_bytes(vec![0x01, 0x00]);
        assert_eq!(generic.to_number().unwrap(), 256);
    }

    #[test]
    fn to_number_limits() {
        assert_eq!(
            Component::from_bytes(Bytes::new()).to_number().unwrap_err(),
            NameError::EmptyNumber
        );
        assert_eq!(
            Component::from_bytes(vec![0xFF; 8]).to_number().unwrap(),
            u64::MAX
        );
        assert_eq!(
            Component::from_bytes(vec![0x01; 9]).to_number().unwrap_err(),
            NameError::NumberTooWide { len: 9 }
        );

        let mut padded = vec![0x00; 4];
        padded.extend_from_slice(&[0x12; 8]);
        assert_eq!(
            Component::from_bytes(padded).to_number().unwrap(),
            0x1212_1212_1212_1212
        );
        assert_eq!(Component::from_bytes(vec![0x00; 12]).to_number().unwrap(), 0);
    }

    #[test]
    fn canonical_order_table() {
        let comps = vec![
            Component::from_hex(ZEROS, 1).unwrap(),
            Component::from_hex(ONE, 1).unwrap(),
            Component::from_hex(FFS, 1).unwrap(),
            Component::from_hex(ZEROS, 2).unwrap(),
            Component::from_hex(ONE, 2).unwrap(),
            Component::from_hex(FFS, 2).unwrap(),
            Component::from_parts(3, Bytes::new()),
            Component::from_parts(3, &b"\x44"[..]),
            Component::from_parts(3, &b"\x46"[..]),
            Component::from_parts(3, &b"\x41\x41"[..]),
            Component::from_bytes(Bytes::new()),
            Component::from_bytes("D"),
            Component::from_bytes("F"),
            Component::from_bytes("AA"),
            Component::from_parts(21426, Bytes::new()),
            Component::from_parts(21426, "D"),
            Component::from_parts(21426, "F"),
            Component::from_parts(21426, "AA"),
        ];
        for (i, lhs) in comps.iter().enumerate() {
            for (j, rhs) in comps.iter().enumerate() {
                assert_eq!(lhs.cmp(rhs), i.cmp(&j), "{lhs:?} vs {rhs:?}");
                assert_eq!(lhs == rhs, i == j);
            }
        }
    }

    #[test]
    fn type_then_length_then_bytes() {
        let small = Component::from_parts(252, vec![0xFFu8; 300]);
        let large = Component::from_parts(253, Bytes::new());
        assert!(small < large);

        let aa = Component::from_bytes("AA");
        let b = Component::from_bytes("B");
        assert!(b < aa);

        let mut sorted = vec![aa.clone(), large.clone(), b.clone(), small.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![b, aa, small, large]);
    }

    fn arb_component() -> impl Strategy<Value = Component> {
        (
            prop_oneof![Just(1u64), Just(8u64), 0u64..300, any::<u64>()],
            proptest::collection::vec(any::<u8>(), 0..12),
        )
            .prop_map(|(typ, value)| Component::from_parts(typ, value))
    }

    proptest! {
        #[test]
        fn binary_roundtrip(comp in arb_component()) {
            let parsed = Component::parse(&comp.to_bytes()).unwrap();
            prop_assert_eq!(parsed.typ(), comp.typ());
            prop_assert_eq!(parsed.value(), comp.value());
        }

        #[test]
        fn order_is_total_and_transitive(
            a in arb_component(),
            b in arb_component(),
            c in arb_component(),
        ) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }
    }
}

//! Numeric naming conventions.
//!
//! Segment numbers, byte offsets, versions, timestamps and sequence numbers
//! each have a reserved component type whose value is the shortest
//! big-endian encoding of the integer (at least one byte).

use crate::component::{Component, ComponentKind};

fn minimal_be_bytes(n: u64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let skip = (n.leading_zeros() / 8).min(7) as usize;
    bytes[skip..].to_vec()
}

impl Component {
    /// Build a component of any type carrying `n` as a big-endian integer.
    pub fn from_number(n: u64, typ: u64) -> Self {
        Self::from_parts(typ, minimal_be_bytes(n))
    }

    /// A segment component (type 0x21).
    pub fn from_segment(segment: u64) -> Self {
        Self::from_number(segment, ComponentKind::Segment.type_number())
    }

    /// A byte-offset component (type 0x22).
    pub fn from_byte_offset(offset: u64) -> Self {
        Self::from_number(offset, ComponentKind::ByteOffset.type_number())
    }

    /// A version component (type 0x23).
    pub fn from_version(version: u64) -> Self {
        Self::from_number(version, ComponentKind::Version.type_number())
    }

    /// A timestamp component (type 0x24).
    ///
    /// Timestamps are microseconds since the UNIX epoch by convention.
    pub fn from_timestamp(timestamp: u64) -> Self {
        Self::from_number(timestamp, ComponentKind::Timestamp.type_number())
    }

    /// A sequence-number component (type 0x25).
    pub fn from_sequence_num(seq: u64) -> Self {
        Self::from_number(seq, ComponentKind::SequenceNum.type_number())
    }

    fn number_of(&self, kind: ComponentKind) -> Option<u64> {
        if self.kind() != kind {
            return None;
        }
        self.to_number().ok()
    }

    /// The segment number, if this is a well-formed segment component.
    pub fn as_segment(&self) -> Option<u64> {
        self.number_of(ComponentKind::Segment)
    }

    /// The byte offset, if this is a well-formed byte-offset component.
    pub fn as_byte_offset(&self) -> Option<u64> {
        self.number_of(ComponentKind::ByteOffset)
    }

    /// The version, if this is a well-formed version component.
    pub fn as_version(&self) -> Option<u64> {
        self.number_of(ComponentKind::Version)
    }

    /// The timestamp, if this is a well-formed timestamp component.
    pub fn as_timestamp(&self) -> Option<u64> {
        self.number_of(ComponentKind::Timestamp)
    }

    /// The sequence number, if this is a well-formed sequence-number component.
    pub fn as_sequence_num(&self) -> Option<u64> {
        self.number_of(ComponentKind::SequenceNum)
    }
}

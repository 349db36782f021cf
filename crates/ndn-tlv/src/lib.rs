//! TLV primitives for Named Data Networking.
//!
//! Every NDN packet field is a type-length-value element whose type and
//! length are VarNums. This crate provides the VarNum codec and the element
//! framing helpers the naming crate builds on.
//!
//! # Modules
//!
//! - [`varnum`] — minimal-width VarNum encode/decode
//! - [`element`] — reading and writing whole TLV elements
//! - [`error`] — [`TlvError`] and the [`TlvResult`] alias

pub mod element;
pub mod error;
pub mod varnum;

pub use element::{read_tlv, read_tlv_of, tlv_len, write_tlv, TlvElement};
pub use error::{TlvError, TlvResult};

//! Names for Named Data Networking.
//!
//! Every Interest and Data packet is identified by a [`Name`]: an ordered
//! sequence of type-tagged [`Component`]s. This crate provides the binary
//! TLV codec, the URI text codec, the canonical total order, and the numeric
//! naming conventions for both types.
//!
//! # Key Types
//!
//! - [`Component`] — one TLV triplet (type, length, value)
//! - [`ComponentKind`] — reserved component types as a closed enum
//! - [`Name`] — ordered component sequence with prefix semantics
//! - [`UriOptions`] — rendering options for the text form
//! - [`NameError`] — decode/encode failures
//!
//! # Example
//!
//! ```
//! use ndn_name::{Component, Name};
//!
//! let prefix: Name = "/ndn/app".parse().unwrap();
//! let name = prefix.append(Component::from_segment(13));
//! assert_eq!(name.to_string(), "/ndn/app/33=%0d");
//! assert!(prefix.is_prefix_of(&name));
//! assert!(prefix < name);
//!
//! let wire = name.to_bytes();
//! assert_eq!(Name::parse(&wire).unwrap(), name);
//! ```

pub mod component;
pub mod convention;
pub mod error;
pub mod name;
pub mod options;
pub mod uri;

pub use component::{types, Component, ComponentKind};
pub use error::{NameError, Result};
pub use name::Name;
pub use options::{HexCase, UriOptions};
pub use uri::{IMPLICIT_SHA256_PREFIX, PARAMETERS_SHA256_PREFIX};

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use ndn_tlv::{read_tlv_of, tlv_len, write_tlv};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::{types, Component, ComponentKind};
use crate::error::{NameError, Result};
use crate::options::UriOptions;

/// An ordered sequence of components identifying a network resource.
///
/// Components are positional: `/a/b` and `/b/a` are different names. The
/// empty name is the root, rendered `/`, and is a prefix of every name.
///
/// Names order lexicographically by component, with a strict prefix ordering
/// before any name it prefixes.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    components: Vec<Component>,
}

impl Name {
    /// The root name.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// Parse the concatenated component encodings of a name.
    ///
    /// The input carries no outer Name element; see [`Name::from_tlv`].
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut components = Vec::new();
        let mut offset = 0;
        while offset < data.len() {
            let (component, consumed) =
                Component::parse_prefix(&data[offset..]).map_err(|e| {
                    debug!(offset, error = %e, "malformed name component");
                    e
                })?;
            components.push(component);
            offset += consumed;
        }
        Ok(Self { components })
    }

    /// Parse a Name element (type 7) from the front of `data`.
    ///
    /// Returns the name and the number of bytes the element occupied.
    pub fn from_tlv(data: &[u8]) -> Result<(Self, usize)> {
        let element = read_tlv_of(data, types::NAME).map_err(|e| {
            debug!(error = %e, "malformed name element");
            NameError::from(e)
        })?;
        Ok((Self::parse(element.value)?, element.consumed))
    }

    /// Size of the concatenated component encodings.
    pub fn encoded_len(&self) -> usize {
        self.components.iter().map(Component::encoded_len).sum()
    }

    /// The concatenated component encodings, without an outer element.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        for component in &self.components {
            component.write_to(&mut buf);
        }
        buf
    }

    /// The name wrapped in a Name element (type 7).
    pub fn to_tlv(&self) -> Vec<u8> {
        let inner = self.to_bytes();
        let mut buf = Vec::with_capacity(tlv_len(types::NAME, inner.len()));
        write_tlv(&mut buf, types::NAME, &inner);
        buf
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Alias for [`Name::is_empty`].
    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn first(&self) -> Option<&Component> {
        self.components.first()
    }

    pub fn last(&self) -> Option<&Component> {
        self.components.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The first `n` components. Saturates at the full name.
    pub fn prefix(&self, n: usize) -> Self {
        let n = n.min(self.components.len());
        Self {
            components: self.components[..n].to_vec(),
        }
    }

    /// A new name with `component` appended.
    pub fn append(&self, component: Component) -> Self {
        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend_from_slice(&self.components);
        components.push(component);
        Self { components }
    }

    /// A new name with every component of `suffix` appended.
    pub fn concat(&self, suffix: &Name) -> Self {
        let mut components = Vec::with_capacity(self.components.len() + suffix.len());
        components.extend_from_slice(&self.components);
        components.extend_from_slice(&suffix.components);
        Self { components }
    }

    /// This name without a trailing implicit digest component.
    pub fn without_implicit_digest(&self) -> Self {
        match self.last() {
            Some(last) if last.kind() == ComponentKind::ImplicitSha256 => {
                self.prefix(self.len() - 1)
            }
            _ => self.clone(),
        }
    }

    /// Returns `true` if `prefix` equals the leading components of `name`.
    pub fn is_prefix(prefix: &Name, name: &Name) -> bool {
        prefix.len() <= name.len()
            && prefix
                .components
                .iter()
                .zip(&name.components)
                .all(|(a, b)| a == b)
    }

    /// Returns `true` if `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        Self::is_prefix(self, other)
    }

    /// Canonical comparison over components; a strict prefix orders first.
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.components.iter().cmp(b.components.iter())
    }

    /// Render with the default options.
    pub fn to_uri(&self) -> String {
        self.to_uri_with(&UriOptions::default())
    }

    /// Render with numeric types and uppercase escapes, the form forwarder
    /// management APIs key registrations on.
    pub fn to_canonical_uri(&self) -> String {
        self.to_uri_with(&UriOptions::canonical())
    }

    pub fn to_uri_with(&self, options: &UriOptions) -> String {
        if self.components.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for component in &self.components {
            out.push('/');
            component.write_uri(&mut out, options);
        }
        out
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({self})")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for Name {
    type Err = NameError;

    /// Parse a name URI.
    ///
    /// A single leading `/` and a single trailing `/` are optional. Interior
    /// empty segments are empty GENERIC components.
    /// Only `""` and `/` yield the root; whitespace is component data, so
    /// `" "` parses to `/%20`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndn_name::Name;
    ///
    /// for uri in ["/hello/world", "hello/world", "hello/world/"] {
    ///     let name: Name = uri.parse().unwrap();
    ///     assert_eq!(name.to_string(), "/hello/world");
    /// }
    /// assert!("".parse::<Name>().unwrap().is_root());
    /// assert_eq!(" ".parse::<Name>().unwrap().to_string(), "/%20");
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let mut segments: Vec<&str> = s.split('/').collect();
        if segments.first() == Some(&"") {
            segments.remove(0);
        }
        if segments.last() == Some(&"") {
            segments.pop();
        }
        let components = segments
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Component>>>()
            .map_err(|e| {
                debug!(uri = s, error = %e, "malformed name uri");
                e
            })?;
        Ok(Self { components })
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_uri()
    }
}

impl From<Vec<Component>> for Name {
    fn from(components: Vec<Component>) -> Self {
        Self { components }
    }
}

impl From<Component> for Name {
    fn from(component: Component) -> Self {
        Self {
            components: vec![component],
        }
    }
}

impl FromIterator<Component> for Name {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::from_components(iter)
    }
}

impl IntoIterator for Name {
    type Item = Component;
    type IntoIter = std::vec::IntoIter<Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl Index<usize> for Name {
    type Output = Component;

    fn index(&self, index: usize) -> &Component {
        &self.components[index]
    }
}

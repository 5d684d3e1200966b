//! In-memory tag tree.

use crate::error::AccessError;
use crate::kind::TagKind;

/// A single tag payload.
///
/// Names live on the containing [`Compound`] entry, not on the value, so list
/// elements (which are unnamed on the wire) share this type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// Returns the wire type of this tag.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Byte(_) => TagKind::Byte,
            Self::Short(_) => TagKind::Short,
            Self::Int(_) => TagKind::Int,
            Self::Long(_) => TagKind::Long,
            Self::Float(_) => TagKind::Float,
            Self::Double(_) => TagKind::Double,
            Self::ByteArray(_) => TagKind::ByteArray,
            Self::String(_) => TagKind::String,
            Self::List(_) => TagKind::List,
            Self::Compound(_) => TagKind::Compound,
            Self::IntArray(_) => TagKind::IntArray,
            Self::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Widens any integer scalar to `i64`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Byte(v) => Some(*v as i64),
            Self::Short(v) => Some(*v as i64),
            Self::Int(v) => Some(*v as i64),
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }
}

/// A homogeneous list of unnamed tags.
///
/// One variant per element type, so a list mixing element types cannot be
/// built. An empty list keeps its element type; `End` is the list whose
/// declared element type is the end marker, which is always empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum List {
    End,
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<u8>>),
    String(Vec<String>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

impl List {
    /// Returns the declared element type.
    #[must_use]
    pub const fn element_kind(&self) -> TagKind {
        match self {
            Self::End => TagKind::End,
            Self::Byte(_) => TagKind::Byte,
            Self::Short(_) => TagKind::Short,
            Self::Int(_) => TagKind::Int,
            Self::Long(_) => TagKind::Long,
            Self::Float(_) => TagKind::Float,
            Self::Double(_) => TagKind::Double,
            Self::ByteArray(_) => TagKind::ByteArray,
            Self::String(_) => TagKind::String,
            Self::List(_) => TagKind::List,
            Self::Compound(_) => TagKind::Compound,
            Self::IntArray(_) => TagKind::IntArray,
            Self::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::End => 0,
            Self::Byte(v) => v.len(),
            Self::Short(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Long(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::ByteArray(v) => v.len(),
            Self::String(v) => v.len(),
            Self::List(v) => v.len(),
            Self::Compound(v) => v.len(),
            Self::IntArray(v) => v.len(),
            Self::LongArray(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clones element `index` out as a standalone tag.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tag> {
        match self {
            Self::End => None,
            Self::Byte(v) => v.get(index).map(|e| Tag::Byte(*e)),
            Self::Short(v) => v.get(index).map(|e| Tag::Short(*e)),
            Self::Int(v) => v.get(index).map(|e| Tag::Int(*e)),
            Self::Long(v) => v.get(index).map(|e| Tag::Long(*e)),
            Self::Float(v) => v.get(index).map(|e| Tag::Float(*e)),
            Self::Double(v) => v.get(index).map(|e| Tag::Double(*e)),
            Self::ByteArray(v) => v.get(index).cloned().map(Tag::ByteArray),
            Self::String(v) => v.get(index).cloned().map(Tag::String),
            Self::List(v) => v.get(index).cloned().map(Tag::List),
            Self::Compound(v) => v.get(index).cloned().map(Tag::Compound),
            Self::IntArray(v) => v.get(index).cloned().map(Tag::IntArray),
            Self::LongArray(v) => v.get(index).cloned().map(Tag::LongArray),
        }
    }
}

/// An ordered record of named, heterogeneously-typed child tags.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Compound {
    entries: Vec<(String, Tag)>,
}

impl Compound {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, tag: Tag) -> Self {
        self.insert(name, tag);
        self
    }

    /// Inserts a child, replacing an existing child of the same name in place.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, name: impl Into<String>, tag: Tag) -> Option<Tag> {
        let name = name.into();
        if let Some(slot) = self.get_mut(&name) {
            return Some(std::mem::replace(slot, tag));
        }
        self.entries.push((name, tag));
        None
    }

    /// Appends a child without checking for an existing name.
    ///
    /// Used by the decoder so that files carrying duplicate names re-encode
    /// byte-for-byte.
    pub(crate) fn push(&mut self, name: String, tag: Tag) {
        self.entries.push((name, tag));
    }

    /// Removes the first child with this name.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tag)| tag)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, tag)| tag)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates children in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(n, tag)| (n.as_str(), tag))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a child that must exist.
    pub fn require(&self, name: &str) -> Result<&Tag, AccessError> {
        self.get(name).ok_or_else(|| AccessError::Missing {
            name: name.to_string(),
        })
    }

    /// Returns the byte child `name`.
    pub fn get_byte(&self, name: &str) -> Result<i8, AccessError> {
        match self.require(name)? {
            Tag::Byte(v) => Ok(*v),
            other => Err(wrong_type(name, TagKind::Byte, other)),
        }
    }

    /// Returns the short child `name`.
    pub fn get_short(&self, name: &str) -> Result<i16, AccessError> {
        match self.require(name)? {
            Tag::Short(v) => Ok(*v),
            other => Err(wrong_type(name, TagKind::Short, other)),
        }
    }

    /// Returns the int child `name`.
    pub fn get_int(&self, name: &str) -> Result<i32, AccessError> {
        match self.require(name)? {
            Tag::Int(v) => Ok(*v),
            other => Err(wrong_type(name, TagKind::Int, other)),
        }
    }

    /// Returns the long child `name`.
    pub fn get_long(&self, name: &str) -> Result<i64, AccessError> {
        match self.require(name)? {
            Tag::Long(v) => Ok(*v),
            other => Err(wrong_type(name, TagKind::Long, other)),
        }
    }

    /// Returns the string child `name`.
    pub fn get_string(&self, name: &str) -> Result<&str, AccessError> {
        match self.require(name)? {
            Tag::String(v) => Ok(v),
            other => Err(wrong_type(name, TagKind::String, other)),
        }
    }

    /// Returns the payload of byte array child `name`.
    pub fn get_byte_array(&self, name: &str) -> Result<&[u8], AccessError> {
        match self.require(name)? {
            Tag::ByteArray(v) => Ok(v),
            other => Err(wrong_type(name, TagKind::ByteArray, other)),
        }
    }

    /// Returns the list child `name`.
    pub fn get_list(&self, name: &str) -> Result<&List, AccessError> {
        match self.require(name)? {
            Tag::List(v) => Ok(v),
            other => Err(wrong_type(name, TagKind::List, other)),
        }
    }

    /// Returns the compound child `name`.
    pub fn get_compound(&self, name: &str) -> Result<&Self, AccessError> {
        match self.require(name)? {
            Tag::Compound(v) => Ok(v),
            other => Err(wrong_type(name, TagKind::Compound, other)),
        }
    }
}

fn wrong_type(name: &str, expected: TagKind, found: &Tag) -> AccessError {
    AccessError::WrongType {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// The outermost compound of a file together with its name.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedCompound {
    pub name: String,
    pub compound: Compound,
}

impl NamedCompound {
    #[must_use]
    pub fn new(name: impl Into<String>, compound: Compound) -> Self {
        Self {
            name: name.into(),
            compound,
        }
    }
}

//! Property-key addressing into nested state trees.
//!
//! A [`Path`] is an ordered sequence of [`Key`]s identifying a location
//! inside a (possibly multi-level-nested) state tree. The empty path is the
//! root. Paths address record fields and embedded node sub-trees; list
//! elements are leaves for navigation.

use std::fmt;
use std::sync::Arc;

/// A property key within a record state.
///
/// Keys are cheaply cloneable shared strings.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Arc<str>);

impl Key {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for Key {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}

/// An ordered key sequence locating a position within a nested state tree.
///
/// The empty path addresses the root state.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    /// Creates an empty path (the root).
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Appends a key and returns the extended path (builder pattern).
    #[must_use]
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.0.push(key.into());
        self
    }

    /// Pushes a key onto the path.
    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// Returns true if this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of keys in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the final key, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// Returns the path without its final key, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Splits the path into its first key and the remainder.
    #[must_use]
    pub fn split_first(&self) -> Option<(Key, Path)> {
        let (head, rest) = self.0.split_first()?;
        Some((head.clone(), Self(rest.to_vec())))
    }

    /// Iterates over the keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.0.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for key in &self.0 {
            write!(f, ".{key}")?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Self::root().key(key)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self::root().key(key)
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Constructs a [`Path`] from a sequence of keys.
///
/// # Examples
///
/// ```
/// use trellis_foundation::path;
///
/// let p = path!("position", "x");
/// assert_eq!(format!("{p}"), "$.position.x");
///
/// let root = path!();
/// assert!(root.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($key:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Key::from($key));
        )+
        p
    }};
}

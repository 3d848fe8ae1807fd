//! The state value tree.
//!
//! A [`State`] is the opaque value a [`Stateful`](crate::Stateful) instance
//! exposes through its accessor: everything about the instance that
//! participates in equality, copying, and deep path addressing. States are
//! immutable and cheaply cloneable; composite variants share structure via
//! persistent collections.

use std::fmt;
use std::sync::Arc;

use crate::collections::{StateMap, StateVec};
use crate::equality::deep_equal;
use crate::path::Key;
use crate::stateful::NodeRef;

/// A value in a state tree.
#[derive(Clone)]
pub enum State {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Persistent list of values. Leaves for path navigation.
    List(StateVec<State>),
    /// Persistent record of keyed values. The navigable spine of a tree.
    Record(StateMap<Key, State>),
    /// An embedded stateful instance, treated as its own sub-tree.
    Node(NodeRef),
}

impl State {
    /// Returns a short name for this value's kind, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Node(_) => "node",
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&StateVec<State>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a record reference.
    #[must_use]
    pub const fn as_record(&self) -> Option<&StateMap<Key, State>> {
        match self {
            Self::Record(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract an embedded node reference.
    #[must_use]
    pub const fn as_node(&self) -> Option<&NodeRef> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Gets a record field by key name.
    ///
    /// Returns `None` if this value is not a record or the key is absent.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&State> {
        self.as_record()?.get(&Key::from(key))
    }
}

// Equality delegates to the deep oracle so that embedded nodes compare by
// their own structural equality rather than by reference.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(v) => write!(f, "{v:?}"),
            Self::Record(m) => write!(f, "{m:?}"),
            Self::Node(n) => write!(f, "{n:?}"),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Record(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Node(n) => write!(f, "{}", n.state()),
        }
    }
}

// Convenience From implementations

impl From<bool> for State {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for State {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for State {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for State {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for State {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<NodeRef> for State {
    fn from(node: NodeRef) -> Self {
        Self::Node(node)
    }
}

impl From<StateVec<State>> for State {
    fn from(v: StateVec<State>) -> Self {
        Self::List(v)
    }
}

impl From<StateMap<Key, State>> for State {
    fn from(m: StateMap<Key, State>) -> Self {
        Self::Record(m)
    }
}

impl<T: Into<State>> From<Vec<T>> for State {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// Constructs a [`State::Record`] literal.
///
/// # Examples
///
/// ```
/// use trellis_foundation::record;
///
/// let vector = record! { "x" => 2, "y" => 2 };
/// assert_eq!(vector.field("x").and_then(|v| v.as_int()), Some(2));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::State::Record($crate::StateMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StateMap::new();
        $(
            map = map.insert($crate::Key::from($key), $crate::State::from($value));
        )+
        $crate::State::Record(map)
    }};
}

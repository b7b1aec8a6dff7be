use std::{collections::BTreeMap, fmt};

/// Stores the value last assigned to each variable of a session.
///
/// Names are case sensitive. Entries are added or overwritten by assignments
/// and never removed; the store lives as long as the session that owns it.
///
/// ## Usage
///
/// The evaluator reads from the store when it meets an identifier and writes
/// to it only after a line evaluated successfully.
///
/// ```
/// use notatio::interpreter::variables::VariableStore;
///
/// let mut vars = VariableStore::new();
/// vars.assign("x", 7);
/// vars.assign("X", 1);
/// vars.assign("x", 8);
///
/// assert_eq!(vars.get("x"), Some(8));
/// assert_eq!(vars.len(), 2);
/// assert_eq!(vars.to_string(), "{X=1, x=8}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    values: BTreeMap<String, i64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        self.values.insert(name.to_string(), value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl fmt::Display for VariableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "}}")
    }
}

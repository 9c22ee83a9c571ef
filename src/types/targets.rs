// ABOUTME: One-or-many container references for stop and delete.
// ABOUTME: Backed by NonEmpty so an empty target list cannot be built.

use nonempty::NonEmpty;

/// Containers (or `container/snapshot` pairs) addressed by a single command.
///
/// Order is preserved; each target becomes exactly one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets(NonEmpty<String>);

impl Targets {
    pub fn single(target: impl Into<String>) -> Self {
        Self(NonEmpty::new(target.into()))
    }

    /// Build from a list, returning None if the list is empty.
    pub fn from_vec<S: Into<String>>(targets: Vec<S>) -> Option<Self> {
        NonEmpty::from_vec(targets.into_iter().map(Into::into).collect()).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a target list holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for Targets {
    fn from(target: &str) -> Self {
        Self::single(target)
    }
}

impl From<String> for Targets {
    fn from(target: String) -> Self {
        Self::single(target)
    }
}

impl From<NonEmpty<String>> for Targets {
    fn from(targets: NonEmpty<String>) -> Self {
        Self(targets)
    }
}

impl std::fmt::Display for Targets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(" "))
    }
}

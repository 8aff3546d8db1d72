use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global string interner for ids — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_serial() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A lightweight, interned identifier for a component in the document.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
///
/// Ids are opaque: generated ones carry a `comp-` prefix, but imported
/// documents may use any string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(Spur);

impl ComponentId {
    /// Intern an existing id string (e.g. from imported JSON).
    pub fn intern(s: &str) -> Self {
        ComponentId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Mint a fresh, process-unique component id.
    pub fn generate() -> Self {
        Self::intern(&format!("comp-{:x}", next_serial()))
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ComponentId::intern(&s))
    }
}

/// Identifier for a whole form document. Regenerated on `clear()` and on
/// fresh documents; otherwise stable across edits and export/import.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Spur);

impl FormId {
    pub fn intern(s: &str) -> Self {
        FormId(INTERNER.get_or_intern(s))
    }

    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Mint a fresh form id.
    pub fn generate() -> Self {
        Self::intern(&format!("form-{:x}", next_serial()))
    }
}

impl fmt::Debug for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FormId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FormId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ComponentId::intern("comp-login-email");
        let b = ComponentId::intern("comp-login-email");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "comp-login-email");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ComponentId::generate()));
        }
    }

    #[test]
    fn form_ids_are_unique() {
        let a = FormId::generate();
        let b = FormId::generate();
        assert_ne!(a, b);
    }
}

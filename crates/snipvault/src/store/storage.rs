use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::{Snippet, Style};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const SNIPPET_KEY: &str = "snippets";
pub const STYLE_KEY: &str = "style";

/// Outcome of a save that also asked the backend for durability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// The backend confirmed the write is durable.
    Confirmed,
    /// The backend has no way to confirm durability. The write itself succeeded.
    Unconfirmed,
}

/// Typed access to the two documents snipvault keeps: the snippet collection and the style.
///
/// A missing document is never an error: reads write the default back and return it.
pub struct SnippetStorage<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SnippetStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snippets(&self) -> Result<Vec<Snippet>> {
        self.get_or_init(SNIPPET_KEY, Vec::new())
    }

    /// Prepends `snippet` to the stored collection unless a record with the same id is
    /// already there.
    pub fn add_snippet(&self, snippet: &Snippet) -> Result<()> {
        let mut snippets = self.snippets()?;
        if !snippets.iter().any(|stored| stored.id == snippet.id) {
            snippets.insert(0, snippet.clone());
        }
        self.set(SNIPPET_KEY, snippets)?;
        Ok(())
    }

    /// Removes every stored record with `id` and returns what is left.
    pub fn remove_snippet(&self, id: &str) -> Result<Vec<Snippet>> {
        let mut snippets = self.snippets()?;
        snippets.retain(|stored| stored.id != id);
        self.set(SNIPPET_KEY, snippets)
    }

    pub fn save_snippets(&self, snippets: &[Snippet]) -> Result<Durability> {
        self.set(SNIPPET_KEY, snippets)?;
        self.persist()
    }

    pub fn style(&self, default: Style) -> Result<Style> {
        self.get_or_init(STYLE_KEY, default)
    }

    pub fn save_style(&self, style: &Style) -> Result<Durability> {
        self.set(STYLE_KEY, style)?;
        self.persist()
    }

    fn persist(&self) -> Result<Durability> {
        match self.backend.persist() {
            Some(Ok(())) => Ok(Durability::Confirmed),
            Some(Err(e)) => Err(e),
            None => Ok(Durability::Unconfirmed),
        }
    }

    fn get_or_init<T: Serialize + DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        if self.backend.contains_key(key) {
            if let Some(raw) = self.backend.read(key)? {
                return Ok(serde_json::from_str(&raw)?);
            }
        }
        self.set(key, default)
    }

    /// Writes `value` and hands it back, so "write the default if absent" is one expression.
    fn set<T: Serialize>(&self, key: &str, value: T) -> Result<T> {
        let raw = serde_json::to_string(&value)?;
        self.backend.write(key, &raw)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipError;
    use crate::store::mem_backend::MemBackend;

    fn snippet(id: &str, title: &str) -> Snippet {
        let mut snippet = Snippet::new(title, "");
        snippet.id = id.to_string();
        snippet
    }

    #[test]
    fn test_snippets_writes_default_when_absent() {
        let backend = MemBackend::new();
        let storage = SnippetStorage::new(backend.clone());

        assert!(storage.snippets().unwrap().is_empty());
        assert_eq!(backend.read(SNIPPET_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_add_snippet_prepends_and_dedups_by_id() {
        let storage = SnippetStorage::new(MemBackend::new());
        storage.add_snippet(&snippet("1", "First")).unwrap();
        storage.add_snippet(&snippet("2", "Second")).unwrap();
        storage.add_snippet(&snippet("1", "First again")).unwrap();

        let stored = storage.snippets().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, "2");
        assert_eq!(stored[1].title, "First");
    }

    #[test]
    fn test_remove_snippet_returns_remainder() {
        let storage = SnippetStorage::new(MemBackend::new());
        storage.add_snippet(&snippet("1", "A")).unwrap();
        storage.add_snippet(&snippet("2", "B")).unwrap();

        let remaining = storage.remove_snippet("1").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
        assert_eq!(storage.snippets().unwrap(), remaining);
    }

    #[test]
    fn test_save_snippets_durability() {
        let backend = MemBackend::new();
        let storage = SnippetStorage::new(backend.clone());
        let list = vec![snippet("1", "A")];

        assert_eq!(storage.save_snippets(&list).unwrap(), Durability::Confirmed);

        backend.set_simulate_persist_rejection(true);
        assert!(matches!(
            storage.save_snippets(&list),
            Err(SnipError::PersistRejected(_))
        ));

        let unconfirmed = SnippetStorage::new(MemBackend::without_durability());
        assert_eq!(
            unconfirmed.save_snippets(&list).unwrap(),
            Durability::Unconfirmed
        );
    }

    #[test]
    fn test_style_default_then_saved_value() {
        let storage = SnippetStorage::new(MemBackend::new());
        let default = Style::from_json(r#"{"font":"mono"}"#).unwrap();
        assert_eq!(storage.style(default.clone()).unwrap(), default);

        let custom = Style::from_json(r#"{"font":"serif"}"#).unwrap();
        storage.save_style(&custom).unwrap();
        assert_eq!(storage.style(default).unwrap(), custom);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let backend = MemBackend::new();
        backend.write(SNIPPET_KEY, "{not json").unwrap();
        let storage = SnippetStorage::new(backend);
        assert!(matches!(
            storage.snippets(),
            Err(SnipError::Serialization(_))
        ));
    }
}

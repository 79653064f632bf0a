//! The in-memory genre collection and the operations over it.
//!
//! The registry is the single shared mutable resource of the service. Every
//! operation takes the one mutex, finishes its work, and releases it before
//! anything awaits — so each create/update/delete is atomic with respect to
//! the others without any further discipline.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::error::RegistryError;
use crate::genre::{Genre, validate_payload};

/// Registry handle shared across concurrent connection tasks.
pub type SharedRegistry = Arc<Registry>;

/// The ordered, insertion-preserving collection of genres.
///
/// Owned by the process; lifetime = process lifetime. There is no
/// persistence: every restart begins again from the seed entries.
pub struct Registry {
    inner: Mutex<Inner>,
}

struct Inner {
    genres: Vec<Genre>,
    /// Monotonic id source. Deliberately independent of `genres.len()` so
    /// ids are never reused after deletions.
    next_id: u32,
}

impl Registry {
    /// A registry holding the three seed genres with ids 1..=3.
    pub fn seeded() -> SharedRegistry {
        Self::with_genres(
            ["Action", "Drama", "Horror"]
                .into_iter()
                .zip(1..)
                .map(|(name, id)| Genre { id, name: name.to_owned() })
                .collect(),
        )
    }

    /// An empty registry; ids start at 1.
    pub fn empty() -> SharedRegistry {
        Self::with_genres(Vec::new())
    }

    fn with_genres(genres: Vec<Genre>) -> SharedRegistry {
        let next_id = genres.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            inner: Mutex::new(Inner { genres, next_id }),
        })
    }

    // No operation can panic while holding the lock, but a poisoned mutex
    // still holds consistent data, so recover rather than propagate.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The full current sequence, insertion order. Always succeeds.
    pub fn list(&self) -> Vec<Genre> {
        self.lock().genres.clone()
    }

    /// The first genre whose id matches, or `NotFound`.
    pub fn get(&self, id: u32) -> Result<Genre, RegistryError> {
        self.lock()
            .genres
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    /// Validates the payload, assigns the next id, and appends.
    pub fn create(&self, payload: &Value) -> Result<Genre, RegistryError> {
        let name = validate_payload(payload)?;
        let mut inner = self.lock();
        let genre = Genre { id: inner.next_id, name: name.to_owned() };
        inner.next_id += 1;
        inner.genres.push(genre.clone());
        Ok(genre)
    }

    /// Renames the genre with the given id.
    ///
    /// Lookup happens before validation, and either failure returns
    /// immediately — the collection is untouched on any error.
    pub fn update(&self, id: u32, payload: &Value) -> Result<Genre, RegistryError> {
        let mut inner = self.lock();
        let genre = inner
            .genres
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(RegistryError::NotFound)?;
        let name = validate_payload(payload)?;
        genre.name = name.to_owned();
        Ok(genre.clone())
    }

    /// Removes the genre with the given id and returns what remains.
    pub fn delete(&self, id: u32) -> Result<Vec<Genre>, RegistryError> {
        let mut inner = self.lock();
        let index = inner
            .genres
            .iter()
            .position(|g| g.id == id)
            .ok_or(RegistryError::NotFound)?;
        inner.genres.remove(index);
        Ok(inner.genres.clone())
    }
}

//! Explicit recovery from backend failures.

use tracing::warn;

use crate::error::NetworkError;

/// A value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    Remote(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Sourced::Remote(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Remote(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        match self {
            Sourced::Remote(v) => Sourced::Remote(f(v)),
            Sourced::Fallback(v) => Sourced::Fallback(f(v)),
        }
    }
}

pub trait FallbackExt<T> {
    /// Substitute `fallback()` on error, logging the failure under `what`.
    fn or_fallback<F>(self, what: &'static str, fallback: F) -> Sourced<T>
    where
        F: FnOnce() -> T;
}

impl<T> FallbackExt<T> for Result<T, NetworkError> {
    fn or_fallback<F>(self, what: &'static str, fallback: F) -> Sourced<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Ok(value) => Sourced::Remote(value),
            Err(error) => {
                warn!(%error, what, "backend unavailable, using local data");
                Sourced::Fallback(fallback())
            }
        }
    }
}

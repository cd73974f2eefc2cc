use crate::error::FailureReason;

/// Result of reading one upstream source
///
/// Keeps "fetched and empty" apart from "could not fetch", even where the page
/// renders both the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ready(T),
    Unavailable(FailureReason),
}

impl<T> Outcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Unavailable(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ready(value) => Outcome::Ready(f(value)),
            Outcome::Unavailable(reason) => Outcome::Unavailable(reason),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Collapse a failure to the empty value
    pub fn unwrap_or_empty(self) -> T {
        match self {
            Outcome::Ready(value) => value,
            Outcome::Unavailable(_) => T::default(),
        }
    }
}

//! Hierarchical addresses for repeated and dynamically created component
//! instances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An ordered sequence of slot numbers addressing one component instance.
///
/// Statically known siblings use paths of length one (`0`, `1`, ...);
/// dynamically created instances nest under their static slot (`0.0`,
/// `0.1`, ...). Equality and hashing are structural; no ordering between
/// paths is defined or relied on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(Vec<usize>);

impl Index {
    pub fn new(path: impl Into<Vec<usize>>) -> Self {
        Index(path.into())
    }

    /// A length-one path addressing a static slot.
    pub fn single(slot: usize) -> Self {
        Index(vec![slot])
    }

    /// Extends the path one level down, addressing a dynamic instance
    /// nested under this one.
    pub fn child(&self, slot: usize) -> Self {
        let mut path = self.0.clone();
        path.push(slot);
        Index(path)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<usize> for Index {
    fn from(slot: usize) -> Self {
        Index::single(slot)
    }
}

impl From<Vec<usize>> for Index {
    fn from(path: Vec<usize>) -> Self {
        Index(path)
    }
}

impl<const N: usize> From<[usize; N]> for Index {
    fn from(path: [usize; N]) -> Self {
        Index(path.into())
    }
}

impl From<&[usize]> for Index {
    fn from(path: &[usize]) -> Self {
        Index(path.to_vec())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

/// Failure to parse an [`Index`] from its dot-separated text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexParseError {
    #[error("empty index path")]
    Empty,

    #[error("invalid path segment '{0}'")]
    InvalidSegment(String),
}

impl FromStr for Index {
    type Err = IndexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IndexParseError::Empty);
        }
        let path = s
            .split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| IndexParseError::InvalidSegment(segment.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Index(path))
    }
}

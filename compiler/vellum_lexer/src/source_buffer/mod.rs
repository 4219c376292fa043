//! Immutable, shared input bytes.
//!
//! The tokenizer and anything else that wants to look at the stylesheet
//! share one allocation. The bytes are never mutated after construction, so
//! a clone is only a reference-count increment.

use std::sync::Arc;

/// Reference-counted handle to the bytes of one stylesheet.
///
/// The content does not have to be valid UTF-8. Invalid sequences surface
/// as U+FFFD in the tokens that contain them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceBuffer {
    bytes: Arc<[u8]>,
}

impl SourceBuffer {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        SourceBuffer {
            bytes: bytes.into(),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        SourceBuffer::new(source.as_bytes())
    }
}

impl From<String> for SourceBuffer {
    fn from(source: String) -> Self {
        SourceBuffer::new(source.into_bytes())
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(bytes: &[u8]) -> Self {
        SourceBuffer::new(bytes)
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        SourceBuffer::new(bytes)
    }
}

#[cfg(test)]
mod tests;

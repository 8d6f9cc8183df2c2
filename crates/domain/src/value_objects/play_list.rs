//! The concrete filename sequence passed to the decoder for one launch.

/// Requested files repeated `repeats` times in sequence.
///
/// `[A, B]` with `repeats = 2` is `[A, B, A, B]` - concatenation, never interleaving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayList<T> {
    entries: Vec<T>,
}

impl<T: Clone> PlayList<T> {
    /// Expand the requested files by the configured repeat count.
    ///
    /// Order and duplicates in `files` are preserved.
    pub fn expand(files: &[T], repeats: u32) -> Self {
        let mut entries = Vec::with_capacity(files.len() * repeats as usize);
        for _ in 0..repeats {
            entries.extend_from_slice(files);
        }
        Self { entries }
    }
}

impl<T> PlayList<T> {
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

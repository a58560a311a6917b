use std::cell::Cell;

use pictor_core::Size;

/// Memo of the last `parent size -> size` answer a node gave.
///
/// Any query with a different parent size recomputes and replaces the entry.
#[derive(Debug, Default)]
pub struct SizeCache {
    entry: Cell<Option<(Size, Size)>>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, parent_size: Size, compute: impl FnOnce() -> Size) -> Size {
        if let Some((parent, size)) = self.entry.get() {
            if parent == parent_size {
                return size;
            }
        }
        let size = compute();
        self.entry.set(Some((parent_size, size)));
        size
    }

    pub fn clear(&self) {
        self.entry.set(None);
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Sentinel score meaning "not reached yet" (+∞).
pub const UNREACHABLE: i32 = i32::MAX;

/// Priority of an open-set entry: lowest `f` first, then earliest insertion.
///
/// `seq` is unique per search run, so two keys never compare equal and the
/// cells they carry never need comparing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpenKey {
    pub f: i32,
    pub seq: u64,
}

/// Open-set entry: a key plus the flat index of the cell it refers to.
#[derive(Copy, Clone, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) key: OpenKey,
    pub(crate) idx: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-run bookkeeping, indexed by flat cell index. Dropped when the run ends.
pub(crate) struct SearchState {
    pub(crate) g: Vec<i32>,
    pub(crate) f: Vec<i32>,
    pub(crate) came_from: Vec<Option<usize>>,
    open: BinaryHeap<OpenEntry>,
    in_open: Vec<bool>,
    seq: u64,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: vec![None; len],
            open: BinaryHeap::new(),
            in_open: vec![false; len],
            seq: 0,
        }
    }

    /// Queue `idx` at its current `f` score.
    pub(crate) fn push(&mut self, idx: usize) {
        let key = OpenKey {
            f: self.f[idx],
            seq: self.seq,
        };
        self.seq += 1;
        self.open.push(OpenEntry { key, idx });
        self.in_open[idx] = true;
    }

    /// Remove and return the cell with the lowest key.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let entry = self.open.pop()?;
        self.in_open[entry.idx] = false;
        Some(entry.idx)
    }

    #[inline]
    pub(crate) fn is_open(&self, idx: usize) -> bool {
        self.in_open[idx]
    }

    #[inline]
    pub(crate) fn open_len(&self) -> usize {
        self.open.len()
    }
}

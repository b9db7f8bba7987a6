use std::collections::VecDeque;

/// Most cursor-trail elements tracked at once.
pub const MAX_TRAILS: usize = 20;
/// How long a trail element lives before removing itself.
pub const TRAIL_LIFETIME_MS: i32 = 1_000;

/// Bounded FIFO: pushing past capacity hands back the oldest entry.
#[derive(Debug, Clone)]
pub struct TrailQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TrailQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Track `item`, returning the evicted oldest entry if over capacity.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

impl<T> Default for TrailQueue<T> {
    fn default() -> Self {
        Self::new(MAX_TRAILS)
    }
}

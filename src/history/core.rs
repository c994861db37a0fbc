use std::fmt;

use super::backing::Backing;
use super::notify::{Flag, Flags, ListenerId, Listeners};
use super::position::Position;
use super::snapshot::Snapshot;
use crate::config::{Capacity, HistoryConfig};
use crate::error::{HistoryError, Result};

/// A linear undo/redo history of snapshots.
///
/// The valid window runs from `start` (oldest) to `end` (newest reachable by
/// redo), with `current` somewhere inside it. Recording a snapshot after
/// undoing discards everything that could have been redone.
///
/// With a fixed capacity the history is a ring and the oldest snapshot is
/// evicted once it is full. With [`Capacity::Unbounded`] it grows without
/// limit.
///
/// The history is not thread safe; listeners are plain `FnMut` closures, so a
/// `HistoryBuffer` is neither `Send` nor `Sync`. Callers sharing one across
/// threads must provide their own synchronisation around it.
pub struct HistoryBuffer<T> {
    backing: Backing<T>,
    capacity: Capacity,
    start: usize,
    end: usize,
    current: Option<usize>,
    listeners: Listeners,
}

impl<T> HistoryBuffer<T> {
    /// Create an empty history. A `capacity` of `0` grows without limit.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Capacity::from(capacity))
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            backing: Backing::new(capacity),
            capacity,
            start: 0,
            end: 0,
            current: None,
            listeners: Listeners::new(),
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::with_capacity(config.capacity())
    }

    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// True if there is an element before the current one.
    pub fn can_undo(&self) -> bool {
        matches!(self.current, Some(c) if c > self.start)
    }

    /// True if there is an element after the current one.
    pub fn can_redo(&self) -> bool {
        matches!(self.current, Some(c) if c < self.end)
    }

    pub fn flags(&self) -> Flags {
        Flags {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Number of snapshots reachable through undo and redo, current included.
    pub fn valid_count(&self) -> usize {
        match self.current {
            Some(_) => self.end - self.start + 1,
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// How many times `try_undo` would succeed in a row.
    pub fn undo_steps(&self) -> usize {
        self.current.map_or(0, |c| c - self.start)
    }

    /// How many times `try_redo` would succeed in a row.
    pub fn redo_steps(&self) -> usize {
        self.current.map_or(0, |c| self.end - c)
    }

    pub fn position(&self) -> Position {
        Position::of(self.start, self.end, self.current)
    }

    /// The currently selected snapshot.
    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|c| self.backing.get(c))
    }

    /// Snapshot `offset` places after the oldest valid one.
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.valid_count() {
            return None;
        }
        self.backing.get(self.start + offset)
    }

    /// Iterate over the valid window, oldest first. Includes snapshots that are
    /// only reachable through redo.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            history: self,
            front: 0,
            back: self.valid_count(),
        }
    }

    /// Forget every snapshot. Listeners are not notified.
    pub fn clear(&mut self) {
        log::debug!("clearing history of {} snapshots", self.valid_count());
        self.backing.clear();
        self.start = 0;
        self.end = 0;
        self.current = None;
    }

    /// Register a callback run with the new value whenever `can_undo` flips.
    pub fn on_can_undo_changed(&mut self, f: impl FnMut(bool) + 'static) -> ListenerId {
        self.listeners.add(Flag::CanUndo, Box::new(f))
    }

    /// Register a callback run with the new value whenever `can_redo` flips.
    pub fn on_can_redo_changed(&mut self, f: impl FnMut(bool) + 'static) -> ListenerId {
        self.listeners.add(Flag::CanRedo, Box::new(f))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        if removed {
            log::debug!("removed history listener {:?}", id);
        }
        removed
    }

    /// Keep ring indices below twice the capacity. All three cursors move by a
    /// whole number of laps so every index still maps onto the same slot.
    fn rebase(&mut self) {
        let n = match self.capacity {
            Capacity::Fixed(n) => n.get(),
            Capacity::Unbounded => return,
        };
        if self.start >= n {
            self.start -= n;
            self.end -= n;
            self.current = self.current.map(|c| c - n);
        }
    }
}

impl<T: Snapshot> HistoryBuffer<T> {
    /// Record `value` as the new current snapshot.
    ///
    /// Returns false, changing nothing, if the value is invalid or equal to the
    /// current snapshot.
    pub fn try_insert(&mut self, value: T) -> bool {
        self.try_insert_checked(value).is_ok()
    }

    /// Like [`HistoryBuffer::try_insert`] but reports why a value was refused.
    pub fn try_insert_checked(&mut self, value: T) -> Result<()> {
        if !value.is_valid() {
            log::debug!("refused invalid snapshot");
            return Err(HistoryError::InvalidSnapshot);
        }
        // An empty history has no current element to compare against.
        if self.current() == Some(&value) {
            log::debug!("refused snapshot unchanged from current");
            return Err(HistoryError::UnchangedSnapshot);
        }

        let before = self.flags();
        let next = self.current.map_or(self.start, |c| c + 1);
        self.backing.write(next, value);

        if let Capacity::Fixed(n) = self.capacity {
            if next - self.start == n.get() {
                self.start += 1;
                log::debug!("history full at {} snapshots, evicted the oldest", n);
            }
        }
        self.current = Some(next);
        self.end = next;
        self.rebase();

        log::trace!("recorded snapshot: start={} end={}", self.start, self.end);
        self.listeners.notify(before, self.flags());
        Ok(())
    }
}

impl<T: Clone> HistoryBuffer<T> {
    /// Step back to the previous snapshot and return it.
    pub fn try_undo(&mut self) -> Option<T> {
        let prev = match self.current {
            Some(c) if c > self.start => c - 1,
            _ => return None,
        };
        self.move_to(prev)
    }

    /// Step forward to the next snapshot and return it.
    pub fn try_redo(&mut self) -> Option<T> {
        let next = match self.current {
            Some(c) if c < self.end => c + 1,
            _ => return None,
        };
        self.move_to(next)
    }

    fn move_to(&mut self, index: usize) -> Option<T> {
        let value = self.backing.get(index)?.clone();
        let before = self.flags();
        self.current = Some(index);
        log::trace!(
            "moved to snapshot: start={} current={} end={}",
            self.start,
            index,
            self.end
        );
        self.listeners.notify(before, self.flags());
        Some(value)
    }
}

impl<T> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(Capacity::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for HistoryBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HistoryBuffer")
            .field("capacity", &self.capacity)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("current", &self.current)
            .field("snapshots", &self.iter().collect::<Vec<_>>())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<T> std::ops::Index<usize> for HistoryBuffer<T> {
    type Output = T;

    /// Panics if `offset` is outside the valid window, like slice indexing.
    fn index(&self, offset: usize) -> &Self::Output {
        match self.get(offset) {
            Some(x) => x,
            None => panic!(
                "history offset {} out of range for {} snapshots",
                offset,
                self.valid_count()
            ),
        }
    }
}

/// Iterator over the valid window of a [`HistoryBuffer`], oldest first.
pub struct Iter<'a, T> {
    history: &'a HistoryBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let out = self.history.get(self.front);
        self.front += 1;
        out
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.history.get(self.back)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a HistoryBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use crate::config::Capacity;

/// Initial reservation for unbounded storage. Only a hint, never a limit.
const UNBOUNDED_RESERVE: usize = 100;

/// Storage behind a history, chosen once at construction.
///
/// Indices are logical: a fixed ring maps them onto its slots modulo the slot
/// count, growable storage uses them directly.
pub enum Backing<T> {
    Fixed(Box<[Option<T>]>),
    Unbounded(Vec<T>),
}

impl<T> Backing<T> {
    pub fn new(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Fixed(n) => Backing::Fixed((0..n.get()).map(|_| None).collect()),
            Capacity::Unbounded => Backing::Unbounded(Vec::with_capacity(UNBOUNDED_RESERVE)),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Backing::Fixed(slots) => slots.get(index.checked_rem(slots.len())?)?.as_ref(),
            Backing::Unbounded(items) => items.get(index),
        }
    }

    /// Overwrite the element at `index`, returning the one it replaced.
    ///
    /// Growable storage only overwrites existing elements; use [`Backing::append`]
    /// to extend it.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        match self {
            Backing::Fixed(slots) => {
                let n = slots.len();
                let slot = slots.get_mut(index.checked_rem(n)?)?;
                slot.replace(value)
            }
            Backing::Unbounded(items) => {
                let slot = items.get_mut(index)?;
                Some(std::mem::replace(slot, value))
            }
        }
    }

    /// Push onto the end of growable storage. A ring has no end to extend, so the
    /// value is handed back.
    pub fn append(&mut self, value: T) -> Option<T> {
        match self {
            Backing::Fixed(_) => Some(value),
            Backing::Unbounded(items) => {
                items.push(value);
                None
            }
        }
    }

    /// Record `value` as the newest element at `index`.
    ///
    /// Growable storage appends when `index` is one past the end and otherwise
    /// overwrites, dropping everything stored after `index`. A ring writes the
    /// slot `index` maps onto; stale slots are left for later writes.
    pub fn write(&mut self, index: usize, value: T) {
        match self {
            Backing::Fixed(_) => {
                self.set(index, value);
            }
            Backing::Unbounded(items) => {
                debug_assert!(index <= items.len());
                if index < items.len() {
                    items.truncate(index + 1);
                    self.set(index, value);
                } else {
                    self.append(value);
                }
            }
        }
    }

    /// Drop every stored element while keeping the allocation.
    pub fn clear(&mut self) {
        match self {
            Backing::Fixed(slots) => slots.iter_mut().for_each(|slot| *slot = None),
            Backing::Unbounded(items) => items.clear(),
        }
    }

    /// Number of elements physically held, reachable or not.
    pub fn stored(&self) -> usize {
        match self {
            Backing::Fixed(slots) => slots.iter().filter(|slot| slot.is_some()).count(),
            Backing::Unbounded(items) => items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_wraps() {
        let mut b = Backing::new(Capacity::from(3));
        for i in 0..5 {
            b.write(i, i * 10);
        }
        // slots: [30, 40, 20]
        assert_eq!(b.get(2), Some(&20));
        assert_eq!(b.get(3), Some(&30));
        assert_eq!(b.get(4), Some(&40));
        assert_eq!(b.get(7), Some(&40));
        assert_eq!(b.stored(), 3);
        assert_eq!(b.append(99), Some(99));
        assert_eq!(b.set(5, 50), Some(20));
        assert_eq!(b.get(2), Some(&50));
    }

    #[test]
    fn growable_truncates_on_overwrite() {
        let mut b = Backing::new(Capacity::Unbounded);
        b.write(0, 'a');
        b.write(1, 'b');
        b.write(2, 'c');
        assert_eq!(b.stored(), 3);

        b.write(1, 'd');
        assert_eq!(b.stored(), 2);
        assert_eq!(b.get(1), Some(&'d'));
        assert_eq!(b.get(2), None);
        assert_eq!(b.set(5, 'x'), None);
    }

    #[test]
    fn clear_keeps_slots() {
        let mut b = Backing::new(Capacity::from(2));
        b.write(0, 1);
        b.write(1, 2);
        b.clear();
        assert_eq!(b.stored(), 0);
        assert_eq!(b.get(0), None);
        b.write(0, 3);
        assert_eq!(b.get(0), Some(&3));

        let mut b = Backing::new(Capacity::Unbounded);
        b.write(0, 1);
        b.clear();
        assert_eq!(b.stored(), 0);
        b.write(0, 2);
        assert_eq!(b.get(0), Some(&2));
    }
}

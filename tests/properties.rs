use std::cell::RefCell;
use std::rc::Rc;

use history_buffer::HistoryBuffer;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(u8),
    Undo,
    Redo,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..4).prop_map(Op::Insert),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::Clear),
    ]
}

/// Naive reference: the valid window as a plain vector plus a cursor into it.
struct Model {
    items: Vec<u8>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Model {
    fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.items.len())
    }

    fn insert(&mut self, v: u8) -> bool {
        if let Some(c) = self.cursor {
            if self.items[c] == v {
                return false;
            }
            self.items.truncate(c + 1);
        }
        self.items.push(v);
        if self.capacity > 0 && self.items.len() > self.capacity {
            self.items.remove(0);
        }
        self.cursor = Some(self.items.len() - 1);
        true
    }

    fn undo(&mut self) -> Option<u8> {
        let c = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(c);
        Some(self.items[c])
    }

    fn redo(&mut self) -> Option<u8> {
        let c = self.cursor.filter(|&c| c + 1 < self.items.len())? + 1;
        self.cursor = Some(c);
        Some(self.items[c])
    }

    fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }
}

proptest! {
    #[test]
    fn matches_reference_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(op(), 0..80),
    ) {
        let flips = Rc::new(RefCell::new((0usize, 0usize)));
        let mut h = HistoryBuffer::new(capacity);
        let f = Rc::clone(&flips);
        h.on_can_undo_changed(move |_| f.borrow_mut().0 += 1);
        let f = Rc::clone(&flips);
        h.on_can_redo_changed(move |_| f.borrow_mut().1 += 1);

        let mut model = Model { items: Vec::new(), cursor: None, capacity };

        for op in ops {
            let before = (model.can_undo(), model.can_redo());
            *flips.borrow_mut() = (0, 0);

            match op {
                Op::Insert(v) => {
                    prop_assert_eq!(h.try_insert(v), model.insert(v));
                }
                Op::Undo => {
                    prop_assert_eq!(h.try_undo(), model.undo());
                }
                Op::Redo => {
                    prop_assert_eq!(h.try_redo(), model.redo());
                }
                Op::Clear => {
                    h.clear();
                    model.clear();
                }
            }

            let after = (model.can_undo(), model.can_redo());
            prop_assert_eq!(h.can_undo(), after.0);
            prop_assert_eq!(h.can_redo(), after.1);
            prop_assert_eq!(h.valid_count(), model.items.len());
            prop_assert_eq!(h.current(), model.cursor.map(|c| &model.items[c]));
            prop_assert_eq!(h.iter().copied().collect::<Vec<_>>(), model.items.clone());
            if capacity > 0 {
                prop_assert!(h.valid_count() <= capacity);
            }

            let expected = match op {
                Op::Clear => (0, 0),
                _ => (usize::from(before.0 != after.0), usize::from(before.1 != after.1)),
            };
            prop_assert_eq!(*flips.borrow(), expected);
        }
    }

    #[test]
    fn unchanged_insert_keeps_everything(
        values in prop::collection::vec(any::<u16>(), 1..30),
        undos in 0usize..30,
    ) {
        let mut h = HistoryBuffer::new(8);
        for v in &values {
            h.try_insert(*v);
        }
        for _ in 0..undos {
            h.try_undo();
        }
        let snapshot = (h.valid_count(), h.undo_steps(), h.redo_steps(), h.position());
        let current = *h.current().unwrap();

        prop_assert!(!h.try_insert(current));
        prop_assert_eq!((h.valid_count(), h.undo_steps(), h.redo_steps(), h.position()), snapshot);
    }
}

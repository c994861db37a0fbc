use std::fmt;

/// Callback receiving the new value of a flag.
pub type Listener = Box<dyn FnMut(bool)>;

/// Handle returned on registration, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// The two observable availability flags of a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    CanUndo,
    CanRedo,
}

/// Snapshot of both flags, taken before and after a mutation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub can_undo: bool,
    pub can_redo: bool,
}

impl Flags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::CanUndo => self.can_undo,
            Flag::CanRedo => self.can_redo,
        }
    }
}

/// Registered listeners for both flags.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    undo: Vec<(ListenerId, Listener)>,
    redo: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, flag: Flag, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.list_mut(flag).push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        for list in [&mut self.undo, &mut self.redo] {
            if let Some(pos) = list.iter().position(|(x, _)| *x == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.undo.len() + self.redo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call the listeners of every flag that differs between `before` and `after`.
    /// Undo listeners run before redo listeners, each list in registration order.
    pub fn notify(&mut self, before: Flags, after: Flags) {
        for flag in [Flag::CanUndo, Flag::CanRedo] {
            let value = after.get(flag);
            if before.get(flag) == value {
                continue;
            }
            for (_, listener) in self.list_mut(flag).iter_mut() {
                listener(value);
            }
        }
    }

    fn list_mut(&mut self, flag: Flag) -> &mut Vec<(ListenerId, Listener)> {
        match flag {
            Flag::CanUndo => &mut self.undo,
            Flag::CanRedo => &mut self.redo,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("undo", &self.undo.len())
            .field("redo", &self.redo.len())
            .finish()
    }
}

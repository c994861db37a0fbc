//! Undo/redo history over caller-supplied snapshots.
//!
//! A [`HistoryBuffer`] keeps a single linear history: recording a snapshot
//! after undoing discards the redo tail. With a fixed capacity the oldest
//! snapshot is evicted once the ring is full; a capacity of `0` grows without
//! limit.
//!
//! ```
//! use history_buffer::HistoryBuffer;
//!
//! let mut history = HistoryBuffer::new(2);
//! history.try_insert("a");
//! history.try_insert("b");
//! history.try_insert("c");
//!
//! assert_eq!(history.try_undo(), Some("b"));
//! assert_eq!(history.try_undo(), None); // "a" was evicted
//! assert_eq!(history.try_redo(), Some("c"));
//! ```

pub mod config;
pub mod error;
pub mod history;

pub use config::{Capacity, HistoryConfig, DEFAULT_CAPACITY};
pub use error::{HistoryError, Result};
pub use history::{Flag, Flags, HistoryBuffer, ListenerId, Position, Snapshot};

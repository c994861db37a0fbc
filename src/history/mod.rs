pub mod backing;
pub mod core;
pub mod notify;
pub mod position;
pub mod snapshot;

pub use self::core::{HistoryBuffer, Iter};
pub use self::notify::{Flag, Flags, ListenerId};
pub use self::position::Position;
pub use self::snapshot::Snapshot;

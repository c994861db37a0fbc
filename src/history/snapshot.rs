use std::rc::Rc;
use std::sync::Arc;

/// A value that can be recorded in a history.
///
/// Equality decides whether an insert changes anything: a snapshot equal to
/// the current one is not recorded. `is_valid` lets a state type refuse to be
/// recorded at all, for example a half-built document.
pub trait Snapshot: PartialEq {
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! always_valid {
    ($($t:ty),* $(,)?) => {
        $(impl Snapshot for $t {})*
    };
}

always_valid!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
);

impl Snapshot for &str {}

// NaN is never equal to itself, so it could never be deduplicated.
impl Snapshot for f32 {
    fn is_valid(&self) -> bool {
        !self.is_nan()
    }
}

impl Snapshot for f64 {
    fn is_valid(&self) -> bool {
        !self.is_nan()
    }
}

impl<T: PartialEq> Snapshot for Vec<T> {}

/// `None` plays the part of a null snapshot and is never recorded.
impl<T: Snapshot> Snapshot for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().map_or(false, |x| x.is_valid())
    }
}

impl<T: Snapshot + ?Sized> Snapshot for Box<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Snapshot + ?Sized> Snapshot for Rc<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Snapshot + ?Sized> Snapshot for Arc<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

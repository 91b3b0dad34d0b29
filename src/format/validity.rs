use std::rc;
use std::sync::{self, Arc};

/// Whether an object reference still points at something usable.
///
/// Implement this for host object handles that can go stale.
pub trait Validity {
    fn is_valid(&self) -> bool;
}

impl<T: Validity> Validity for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(Validity::is_valid)
    }
}

impl<T: Validity + ?Sized> Validity for &T {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Validity + ?Sized> Validity for Box<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: ?Sized> Validity for Arc<T> {
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Validity for rc::Rc<T> {
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Validity for sync::Weak<T> {
    fn is_valid(&self) -> bool {
        self.strong_count() > 0
    }
}

impl<T: ?Sized> Validity for rc::Weak<T> {
    fn is_valid(&self) -> bool {
        self.strong_count() > 0
    }
}

use std::{mem, ops};


// A value that remembers whether it was modified since the last `take_dirt` call. The session uses
// it to write back only the parts of the state that changed.
#[derive(Clone, Debug)]
pub struct Dirty<T> {
    value: T,
    dirty: bool,
}

impl<T> Dirty<T> {
    pub fn new(value: T) -> Self { Self { value, dirty: false } }

    pub fn get_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.value
    }

    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn take_dirt(&mut self) -> bool { mem::take(&mut self.dirty) }
    pub fn mark_dirty(&mut self) { self.dirty = true; }
}

impl<T: PartialEq> Dirty<T> {
    // Replacing a value with an equal one is not a change.
    pub fn set(&mut self, value: T) {
        if self.value != value {
            self.value = value;
            self.dirty = true;
        }
    }
}

impl<T> ops::Deref for Dirty<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target { &self.value }
}
// No `DerefMut`: every mutation must go through `get_mut`, which sets the flag.

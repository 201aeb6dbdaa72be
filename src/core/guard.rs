use super::position::GamePosition;
use std::ops::{Deref, DerefMut};

/// A move applied to a position for as long as the guard lives.
///
/// Construction plays the move, dropping the guard takes it back. Whatever
/// path leaves the scope (normal return, early `break` on a cutoff, a panic
/// unwinding through the search) the position is restored.
pub struct Applied<'a, P: GamePosition> {
    position: &'a mut P,
}

impl<'a, P: GamePosition> Applied<'a, P> {
    pub fn new(position: &'a mut P, mv: &P::Move) -> Self {
        position.apply(mv);
        Applied { position }
    }
}

impl<P: GamePosition> Deref for Applied<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: GamePosition> DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.position
    }
}

impl<P: GamePosition> Drop for Applied<'_, P> {
    fn drop(&mut self) {
        self.position.undo();
    }
}

use std::rc::Rc;

use super::ModalSurface;

/// Suppresses background scrolling for as long as it is alive.
pub struct ScrollLock<S: ModalSurface> {
    surface: Rc<S>,
}

impl<S: ModalSurface> ScrollLock<S> {
    pub fn acquire(surface: Rc<S>) -> Self {
        surface.set_background_scroll(false);
        log::trace!("🔒 Background scroll locked");
        Self { surface }
    }
}

impl<S: ModalSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.set_background_scroll(true);
        log::trace!("🔓 Background scroll restored");
    }
}

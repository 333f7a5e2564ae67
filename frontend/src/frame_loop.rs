use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Repeating requestAnimationFrame loop. The callback returns whether it wants
/// another frame; dropping the loop cancels any frame still pending.
pub struct FrameLoop {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let frame = Rc::new(RefCell::new(None));
        let cancelled = Rc::new(Cell::new(false));
        schedule(frame.clone(), cancelled.clone(), Rc::new(RefCell::new(on_frame)));
        Self { frame, cancelled }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancelled.set(true);
        // Dropping the pending frame cancels it and breaks the Rc cycle
        // between the slot and the callback that refills it.
        let pending = self.frame.borrow_mut().take();
        drop(pending);
    }
}

fn schedule<F>(slot: Rc<RefCell<Option<AnimationFrame>>>, cancelled: Rc<Cell<bool>>, on_frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        if cancelled.get() {
            return;
        }
        let wants_more = (on_frame.borrow_mut())(timestamp);
        // The callback may have torn the loop down while it ran
        if wants_more && !cancelled.get() {
            schedule(next_slot, cancelled, on_frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

//! Cancellable `requestAnimationFrame` loop.
//!
//! Lifecycle is tracked by [`FrameTask`]; the browser handle of the pending
//! frame is kept so [`FrameLoop::stop`] can cancel it. The scheduled closure
//! only holds a weak reference, so dropping the loop frees everything.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use effects::glow::FrameTask;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::DomError;
use crate::util::dom;

struct LoopState {
    task: FrameTask,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    /// Run `frame` once per animation frame until it returns `false` or the
    /// loop is stopped.
    pub fn start<F>(mut frame: F) -> Result<Self, DomError>
    where
        F: FnMut() -> bool + 'static,
    {
        let state = Rc::new(RefCell::new(LoopState { task: FrameTask::new(), handle: None, callback: None }));
        let weak: Weak<RefCell<LoopState>> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            {
                let mut s = state.borrow_mut();
                s.handle = None;
                if !s.task.tick() {
                    return;
                }
            }
            if !frame() {
                state.borrow_mut().task.stop();
                return;
            }
            if let Err(err) = schedule(&state) {
                log::warn!("animation loop stopped: {err}");
                state.borrow_mut().task.stop();
            }
        }) as Box<dyn FnMut(f64)>);

        {
            let mut s = state.borrow_mut();
            s.callback = Some(callback);
            s.task.start();
        }
        schedule(&state)?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().task.is_running()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.state.borrow().task.frames()
    }

    /// Cancel the pending frame. Returns `false` if already stopped.
    pub fn stop(&self) -> bool {
        let mut s = self.state.borrow_mut();
        let was_running = s.task.stop();
        if let Some(handle) = s.handle.take() {
            if let Ok(window) = dom::window() {
                if let Err(err) = window.cancel_animation_frame(handle) {
                    log::warn!("cancelAnimationFrame failed: {}", DomError::from(err));
                }
            }
        }
        was_running
    }
}

fn schedule(state: &Rc<RefCell<LoopState>>) -> Result<(), DomError> {
    let window = dom::window()?;
    let mut s = state.borrow_mut();
    let handle = {
        let Some(callback) = s.callback.as_ref() else {
            return Ok(());
        };
        window.request_animation_frame(callback.as_ref().unchecked_ref())?
    };
    s.handle = Some(handle);
    Ok(())
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.state.borrow_mut().callback = None;
    }
}

impl std::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("FrameLoop").field("state", &s.task.state()).field("frames", &s.task.frames()).finish()
    }
}

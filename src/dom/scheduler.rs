//! `window.setTimeout` scheduling

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::engine::{Scheduler, Task};

/// Timeout id returned by `setTimeout`, `None` if scheduling failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutHandle(Option<i32>);

pub struct WindowScheduler {
    window: Window,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WindowScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, delay_ms: u32, task: Task) -> TimeoutHandle {
        // Freed by JS after its single call; a cleared timeout leaks it
        let callback = Closure::once_into_js(task);
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        {
            Ok(id) => TimeoutHandle(Some(id)),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                TimeoutHandle(None)
            }
        }
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        if let TimeoutHandle(Some(id)) = handle {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

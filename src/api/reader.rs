//! JavaScript-facing reading pacer
//!
//! Thin facade over `DomPacer`. A UI binds its controls to `start`, `pause`,
//! `increaseSpeed` and `decreaseSpeed` (or `dispatch`) and reads `delay` for
//! its speed readout.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use crate::api::helpers::{deserialize_or_default, pacer_error};
use crate::dom::{self, DomPacer, DomSelection, WindowScheduler};
use crate::engine::{ControlAction, Pacer};
use crate::models::{PacerConfig, PlaybackState};
use crate::{wasm_error, wasm_info, wasm_warn};

#[wasm_bindgen]
pub struct ReadingPacer {
    pacer: DomPacer,
}

#[wasm_bindgen]
impl ReadingPacer {
    /// Create a pacer over the element matched by `selector`
    ///
    /// `config` is `{ delay, minDelay, maxDelay }` (all optional);
    /// `on_complete` is called once when the whole text has been selected.
    #[wasm_bindgen(constructor)]
    pub fn new(
        selector: &str,
        config: JsValue,
        on_complete: Option<js_sys::Function>,
    ) -> Result<ReadingPacer, JsValue> {
        wasm_info!("ReadingPacer::new called: selector={}", selector);
        let window = dom::window().map_err(pacer_error)?;
        let root = dom::resolve_container(&window, selector).map_err(pacer_error)?;
        Self::build(window, root, config, on_complete)
    }

    /// Create a pacer over an element the caller already holds
    #[wasm_bindgen(js_name = fromElement)]
    pub fn from_element(
        element: Element,
        config: JsValue,
        on_complete: Option<js_sys::Function>,
    ) -> Result<ReadingPacer, JsValue> {
        let window = dom::window().map_err(pacer_error)?;
        Self::build(window, element.into(), config, on_complete)
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.pacer.start().map_err(pacer_error)
    }

    pub fn pause(&self) {
        self.pacer.pause();
    }

    #[wasm_bindgen(js_name = increaseSpeed)]
    pub fn increase_speed(&self) {
        self.pacer.increase_speed();
    }

    #[wasm_bindgen(js_name = decreaseSpeed)]
    pub fn decrease_speed(&self) {
        self.pacer.decrease_speed();
    }

    /// Apply a named control: "start", "pause", "faster" or "slower"
    pub fn dispatch(&self, action: &str) -> Result<(), JsValue> {
        let action: ControlAction = action.parse().map_err(|e: String| {
            wasm_error!("{}", e);
            JsValue::from_str(&e)
        })?;
        self.pacer.dispatch(action).map_err(pacer_error)
    }

    /// Current step interval in milliseconds
    #[wasm_bindgen(getter)]
    pub fn delay(&self) -> u32 {
        self.pacer.delay()
    }

    #[wasm_bindgen(getter, js_name = currentOffset)]
    pub fn current_offset(&self) -> usize {
        self.pacer.current_offset()
    }

    #[wasm_bindgen(getter, js_name = totalLength)]
    pub fn total_length(&self) -> usize {
        self.pacer.total_length()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.pacer.progress()
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> PlaybackState {
        self.pacer.state()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.pacer.is_running()
    }

    /// Message of the selection failure that ended playback, if any
    #[wasm_bindgen(getter, js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.pacer.last_error().map(|e| e.to_string())
    }
}

impl ReadingPacer {
    fn build(
        window: web_sys::Window,
        root: Node,
        config: JsValue,
        on_complete: Option<js_sys::Function>,
    ) -> Result<ReadingPacer, JsValue> {
        let config: PacerConfig = deserialize_or_default(config, "Invalid pacer config")?;
        let selection = DomSelection::new(window.clone()).map_err(pacer_error)?;
        let scheduler = WindowScheduler::new(window);

        let mut pacer = Pacer::new(&root, config, selection, scheduler).map_err(pacer_error)?;
        if let Some(callback) = on_complete {
            pacer = pacer.with_on_complete(move || {
                if let Err(e) = callback.call0(&JsValue::NULL) {
                    wasm_error!("onComplete threw: {:?}", e);
                }
            });
        }

        if pacer.total_length() == 0 {
            wasm_warn!("Container has no visible text; playback will do nothing");
        }

        Ok(ReadingPacer { pacer })
    }
}

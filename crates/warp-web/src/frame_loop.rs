//! `requestAnimationFrame` driver.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Calls a callback once per display frame with the seconds elapsed since
/// the previous frame (0 on the first). Stops on `stop()` or drop.
pub struct FrameLoop {
    // Owns the Rust side of the callback. JS only holds a function handle,
    // so there is no reference cycle to leak.
    _closure: Closure<dyn FnMut(f64)>,
    stopped: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let stopped = Rc::new(Cell::new(false));
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));

        let closure = {
            let stopped = stopped.clone();
            let handle = handle.clone();
            let callback = callback.clone();
            let window = window.clone();
            let mut last_ms: Option<f64> = None;

            Closure::wrap(Box::new(move |now_ms: f64| {
                handle.set(None);
                if stopped.get() {
                    return;
                }

                let dt = match last_ms {
                    Some(prev) => ((now_ms - prev) / 1000.0).max(0.0) as f32,
                    None => 0.0,
                };
                last_ms = Some(now_ms);

                on_frame(dt);

                // The callback may have stopped the loop
                if stopped.get() {
                    return;
                }
                if let Some(f) = callback.borrow().as_ref() {
                    match window.request_animation_frame(f) {
                        Ok(id) => handle.set(Some(id)),
                        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let id = window.request_animation_frame(&function)?;
        handle.set(Some(id));
        *callback.borrow_mut() = Some(function);

        Ok(Self {
            _closure: closure,
            stopped,
            handle,
        })
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

//! Page-side lifecycle: one mounted animation per slot.
//!
//! A slot is a `thread_local!` cell generated by `export_animation!`. The
//! frame loop reaches the animation through the slot rather than owning it,
//! so unmount (including from inside an event callback) is just taking the
//! value out.

use std::cell::RefCell;
use std::thread::LocalKey;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use warp_engine::{Animation, AnimationEvent, EngineError, InputEvent, Viewport};

use crate::canvas::CanvasSurface;
use crate::frame_loop::FrameLoop;
use crate::runner::AnimationRunner;

/// A running animation attached to the page.
pub struct Mounted<A: Animation> {
    runner: AnimationRunner<A, CanvasSurface>,
    frames: FrameLoop,
    on_event: Option<js_sys::Function>,
}

pub type MountCell<A> = RefCell<Option<Mounted<A>>>;
pub type Slot<A> = LocalKey<MountCell<A>>;

fn surface_error(what: &'static str) -> JsValue {
    JsValue::from_str(&EngineError::SurfaceUnavailable(what).to_string())
}

/// Attach `animation` to the element with id `container_id` and start it.
/// Anything already mounted in `slot` is torn down first.
///
/// `on_event` receives each event as a `Float32Array` of
/// `[kind, a, b, c]`.
pub fn mount<A: Animation + 'static>(
    slot: &'static Slot<A>,
    animation: A,
    container_id: &str,
    on_event: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    unmount(slot);

    let document = web_sys::window()
        .ok_or_else(|| surface_error("no window"))?
        .document()
        .ok_or_else(|| surface_error("no document"))?;

    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| surface_error("container element not found"))?
        .dyn_into::<HtmlElement>()?;

    let viewport = Viewport::new(container.client_width() as f32, container.client_height() as f32);

    let mut config = animation.config();
    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u64);
    }

    let surface = CanvasSurface::attach(&container, viewport, config.dpi)?;
    let mut runner = AnimationRunner::with_config(animation, surface, config);

    // The first frame cannot arrive before this function returns, so the
    // slot is filled before `frame` ever reads it.
    let (frames, initial) = match runner.launch(|| FrameLoop::start(move |dt| frame(slot, dt))) {
        Ok(started) => started,
        Err((e, surface)) => {
            if let Some(surface) = surface {
                surface.remove();
            }
            return Err(e);
        }
    };

    slot.with(|cell| {
        *cell.borrow_mut() = Some(Mounted {
            runner,
            frames,
            on_event: on_event.clone(),
        });
    });

    dispatch(on_event.as_ref(), &initial);
    Ok(())
}

/// Stop the loop, cancel every task and remove the canvas. Returns whether
/// anything was mounted.
pub fn unmount<A: Animation + 'static>(slot: &'static Slot<A>) -> bool {
    let taken = slot.with(|cell| cell.borrow_mut().take());
    let Some(mut mounted) = taken else {
        return false;
    };

    mounted.frames.stop();
    if let Some(surface) = mounted.runner.teardown() {
        surface.remove();
    }
    true
}

pub fn is_mounted<A: Animation + 'static>(slot: &'static Slot<A>) -> bool {
    slot.with(|cell| cell.borrow().is_some())
}

/// Match a new container size. Negative or non-finite sizes are rejected.
pub fn resize<A: Animation + 'static>(slot: &'static Slot<A>, width: f32, height: f32) -> bool {
    let viewport = match Viewport::checked(width, height) {
        Ok(vp) => vp,
        Err(e) => {
            log::warn!("{}", e);
            return false;
        }
    };
    slot.with(|cell| match cell.borrow_mut().as_mut() {
        Some(mounted) => {
            mounted.runner.resize(viewport);
            true
        }
        None => false,
    })
}

pub fn push_input<A: Animation + 'static>(slot: &'static Slot<A>, event: InputEvent) -> bool {
    slot.with(|cell| match cell.borrow_mut().as_mut() {
        Some(mounted) => {
            mounted.runner.push_input(event);
            true
        }
        None => false,
    })
}

fn frame<A: Animation + 'static>(slot: &'static Slot<A>, dt: f32) {
    let pending = slot.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let mounted = borrow.as_mut()?;
        let events = mounted.runner.tick(dt);
        if events.is_empty() {
            return None;
        }
        Some((mounted.on_event.clone()?, events))
    });

    // Outside the borrow: the callback is free to unmount or remount.
    if let Some((callback, events)) = pending {
        dispatch(Some(&callback), &events);
    }
}

fn dispatch(callback: Option<&js_sys::Function>, events: &[AnimationEvent]) {
    let Some(callback) = callback else {
        return;
    };
    for event in events {
        let wire = event.to_wire();
        let array = js_sys::Float32Array::from(wire.as_floats());
        if let Err(e) = callback.call1(&JsValue::NULL, &array) {
            log::warn!("event callback threw: {:?}", e);
        }
    }
}

pub mod canvas;
pub mod frame_loop;
pub mod host;
pub mod runner;

pub use canvas::CanvasSurface;
pub use frame_loop::FrameLoop;
pub use runner::{AnimationRunner, RunnerState};

// Used by `export_animation!` expansions.
pub use js_sys;
pub use warp_engine::{FromSetupJson, InputEvent};

/// Route `log` to the browser console and panics to `console.error`.
/// Safe to call more than once.
pub fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate the `#[wasm_bindgen]` exports for one animation.
///
/// Produces `thread_local!` storage for the mounted instance and the free
/// functions a page needs to drive it: `animation_mount`,
/// `animation_unmount`, `animation_resize`, the pointer and custom input
/// handlers, and `animation_is_mounted`.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use warp_engine::OrbitalField;
///
/// warp_web::export_animation!(OrbitalField, "blackhole-countdown");
/// ```
///
/// # Arguments
///
/// - `$anim_type`: a type implementing `warp_engine::Animation`,
///   `FromSetupJson` and `Default`
/// - `$anim_name`: a string literal used in log messages
#[macro_export]
macro_rules! export_animation {
    ($anim_type:ty, $anim_name:literal) => {
        thread_local! {
            static MOUNTED: $crate::host::MountCell<$anim_type> = ::std::cell::RefCell::new(None);
        }

        /// Mount into the element with id `container_id`. `config_json` is an
        /// optional `{ "engine": {..}, "animation": {..} }` document.
        #[wasm_bindgen]
        pub fn animation_mount(
            container_id: &str,
            on_event: Option<$crate::js_sys::Function>,
            config_json: Option<String>,
        ) -> bool {
            $crate::install_logging();

            let animation = match config_json.as_deref() {
                Some(json) => match <$anim_type as $crate::FromSetupJson>::from_setup_json(json) {
                    Ok(a) => a,
                    Err(e) => {
                        log::error!("{}: {}", $anim_name, e);
                        return false;
                    }
                },
                None => <$anim_type>::default(),
            };

            match $crate::host::mount(&MOUNTED, animation, container_id, on_event) {
                Ok(()) => {
                    log::info!("{}: mounted in #{}", $anim_name, container_id);
                    true
                }
                Err(e) => {
                    log::error!("{}: mount failed: {:?}", $anim_name, e);
                    false
                }
            }
        }

        #[wasm_bindgen]
        pub fn animation_unmount() -> bool {
            let was_mounted = $crate::host::unmount(&MOUNTED);
            if was_mounted {
                log::info!("{}: unmounted", $anim_name);
            }
            was_mounted
        }

        #[wasm_bindgen]
        pub fn animation_is_mounted() -> bool {
            $crate::host::is_mounted(&MOUNTED)
        }

        #[wasm_bindgen]
        pub fn animation_resize(width: f32, height: f32) -> bool {
            $crate::host::resize(&MOUNTED, width, height)
        }

        #[wasm_bindgen]
        pub fn animation_pointer_move(x: f32, y: f32) -> bool {
            $crate::host::push_input(&MOUNTED, $crate::InputEvent::PointerMove { x, y })
        }

        #[wasm_bindgen]
        pub fn animation_pointer_leave() -> bool {
            $crate::host::push_input(&MOUNTED, $crate::InputEvent::PointerLeave)
        }

        #[wasm_bindgen]
        pub fn animation_custom_event(kind: u32, a: f32, b: f32, c: f32) -> bool {
            $crate::host::push_input(&MOUNTED, $crate::InputEvent::Custom { kind, a, b, c })
        }
    };
}

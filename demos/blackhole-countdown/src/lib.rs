//! Countdown star field. Mount with `animation_mount("stage", onEvent)`;
//! `animation_custom_event(1, 0, 0, 0)` ends the countdown early.

use wasm_bindgen::prelude::*;
use warp_engine::OrbitalField;

warp_web::export_animation!(OrbitalField, "blackhole-countdown");

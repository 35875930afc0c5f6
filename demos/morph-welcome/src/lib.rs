use wasm_bindgen::prelude::*;
use warp_engine::MorphSwarm;

warp_web::export_animation!(MorphSwarm, "morph-welcome");

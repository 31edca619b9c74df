//! Wavefield library - GPU particle wave field with a live parameter store and
//! scripted camera motions

pub mod bindings;
pub mod camera;
pub mod cli;
pub mod error;
pub mod panel;
pub mod params;
pub mod particles;
pub mod render_loop;
pub mod rendering;
pub mod shader;
pub mod store;

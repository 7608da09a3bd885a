pub mod arbiter;
pub mod conditioner;
pub mod config;
pub mod consts;
pub mod error;
pub mod landmarks;
pub mod overlay;
pub mod replay;
pub mod synth;
// cmd and reports belong to the binary crate (main.rs).

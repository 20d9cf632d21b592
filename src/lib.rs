//! design-ref-rust ライブラリルート

pub mod cli;
pub mod config;
pub mod loader;
pub mod render;
pub mod review;
pub mod store;

pub mod app;
pub mod components;
pub mod config;
pub mod frame_loop;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

pub use app::App;

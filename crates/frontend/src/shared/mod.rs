pub mod cdn;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod data;
pub mod icons;
pub mod modal_frame;
pub mod toast;

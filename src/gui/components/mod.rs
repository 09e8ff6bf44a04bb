// src/gui/components/mod.rs
pub mod metrics;
pub mod project_panel;
pub mod tables;
pub mod tabs;

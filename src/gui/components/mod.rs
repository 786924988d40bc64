// src/gui/components/mod.rs
pub mod data_table;
pub mod profile_bar;
pub mod tabs;

// src/gui/actions/mod.rs
pub mod export;
pub mod refresh;

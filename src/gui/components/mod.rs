// src/gui/components/mod.rs
pub mod detail_list;
pub mod facet_bar;
pub mod share_bar;
pub mod status_bar;
pub mod thumb_grid;

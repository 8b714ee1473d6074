// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod cart;
pub mod catalog;
pub mod csv;
pub mod feed;
pub mod filter;
pub mod gui;
pub mod net;
pub mod progress;
pub mod store;
pub mod sync;

pub mod cli;

#![forbid(unsafe_code)]

//! Tilesort demo: a terminal front end for the tile sorting animations.
//!
//! The library half holds everything testable without a terminal: argument
//! parsing, the key-to-action mapping and app state, and the bar layout.
//! `main.rs` wires it to a real terminal or to stdout in headless mode.

pub mod app;
pub mod cli;
pub mod headless;
pub mod logging;
pub mod terminal;
pub mod view;

//! HVAC cluster library - testable modules for the climate display simulator.
//!
//! This library contains the state, command handling and all panel rendering.
//! The binary (`main.rs`) adds the simulator window, the mouse-to-panel
//! mapping and the clock task.
//!
//! # Testing
//!
//! Rendering tests draw into an off-screen `SimulatorDisplay`, so the whole
//! library runs under a plain `cargo test`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::struct_excessive_bools)] // HvacState mirrors the unit's flags

// Configuration
pub mod colors;
pub mod config;
pub mod styles;

// State and commands
pub mod app;
pub mod bus;
pub mod command;
pub mod state;
pub mod timer;

// Rendering
pub mod layout;
pub mod panels;
pub mod render;
pub mod widgets;

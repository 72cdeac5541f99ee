//! # TTL Lab
//!
//! A digital-logic workbench for TTL-style parts.
//!
//! This library provides:
//! - Pin-accurate models of 74-series parts: an 8-bit ALU, synchronous
//!   and up/down counters, an octal register, a static RAM, and discrete
//!   gates
//! - A wiring graph connecting component pins, with direction checking
//!   and cascading deletes
//! - Deterministic breadth-first signal propagation with a cycle guard
//!   for feedback loops
//! - A bench facade addressing components by id and pins by name
//! - JSON netlists for saving and replaying whole benches

pub mod circuit;
pub mod component;
pub mod components;
pub mod dispatcher;
pub mod error;
pub mod netlist;
pub mod pin;
pub mod workbench;

// Re-export commonly used items for easier importing
pub use circuit::{Circuit, ComponentId, Connection, PinId, Position};
pub use component::{BaseComponent, Component, PendingOperation};
pub use components::ComponentType;
pub use dispatcher::{Dispatcher, PinChange, Wave};
pub use error::SimError;
pub use netlist::Netlist;
pub use pin::{PinFunction, PinValue};
pub use workbench::{PinState, Workbench};

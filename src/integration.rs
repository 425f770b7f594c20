//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - Runtime: message queues, update cycle and command execution
//! - AppRunner: main loop over terminal events and backend results
//! - Renderer and Coalescer: drawing and render/resize batching

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;

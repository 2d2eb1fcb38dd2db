//! Grid snake: a tick-driven snake game split into a pure movement/collision
//! engine (`game`), a controller that owns the state and mediates timer and
//! input events (`controller`), and thin terminal collaborators for input
//! mapping and rendering.

pub mod app;
pub mod controller;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;

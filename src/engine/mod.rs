//! Playback engine
//!
//! Drives the text index forward one character per step under a pausable,
//! speed-adjustable schedule. The host selection API and timer are injected
//! collaborators so the engine runs the same against the DOM or a test double.
//!
//! - `session`: the `Pacer` state machine
//! - `selection`: selection directives and the `SelectionSink` trait
//! - `scheduler`: the cancellable `Scheduler` trait
//! - `control`: `ControlAction` for UI bindings

pub mod control;
pub mod scheduler;
pub mod selection;
pub mod session;

pub use control::ControlAction;
pub use scheduler::{Scheduler, Task};
pub use selection::{SelectionDirective, SelectionSink};
pub use session::Pacer;

//! Control actions
//!
//! A UI binds its buttons to these four actions and reads the delay back for
//! its speed readout. It holds no playback state of its own.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Start,
    Pause,
    /// Shorten the step delay
    Faster,
    /// Lengthen the step delay
    Slower,
}

impl FromStr for ControlAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "play" => Ok(ControlAction::Start),
            "pause" => Ok(ControlAction::Pause),
            "faster" | "increase" => Ok(ControlAction::Faster),
            "slower" | "decrease" => Ok(ControlAction::Slower),
            other => Err(format!("Unknown control action: {}", other)),
        }
    }
}

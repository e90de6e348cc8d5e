pub mod episodes;
pub mod error;
pub mod mdps;
pub mod simulator;

pub use episodes::*;
pub use error::*;
pub use mdps::*;
pub use simulator::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub type Discrete = usize;
pub type Continous = f64;

/// Refer: https://gymnasium.farama.org/api/spaces/fundamental/#discrete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteSpace {
    pub n: Discrete,
}

impl DiscreteSpace {
    pub fn new(n: Discrete) -> Self {
        Self { n }
    }

    pub fn contains(&self, x: Discrete) -> bool {
        x < self.n
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFrame {
    Ansi(String),
}

impl RenderFrame {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RenderFrame::Ansi(s) => Some(s),
        }
    }
}

impl fmt::Display for RenderFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFrame::Ansi(s) => f.write_str(s),
        }
    }
}

/// One possible outcome of taking an action in a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub probability: Continous,
    pub next_state: Discrete,
    pub reward: f64,
    pub done: bool,
}

impl Transition {
    pub fn new(probability: Continous, next_state: Discrete, reward: f64, done: bool) -> Self {
        Self {
            probability,
            next_state,
            reward,
            done,
        }
    }
}

/// Outcome distributions keyed by `(state, action)`.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

#[derive(Debug, Clone)]
pub struct StepInfo {
    pub observation: Discrete,
    pub reward: f64,
    pub truncated: bool,
    pub terminated: bool,
    pub info: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeEvent {
    pub s: Discrete,
    pub r: f64,
}

/// Anything that can draw itself given the current state and the last action taken.
pub trait Render {
    fn render(&self, s: Discrete, last_action: Option<Discrete>) -> RenderFrame;
}

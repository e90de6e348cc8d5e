use crate::*;
use ndarray::Array1;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, trace};

pub trait Weighted {
    fn p(&self) -> Continous;
}

impl Weighted for Transition {
    fn p(&self) -> Continous {
        self.probability
    }
}

pub fn pick_next<'a, T>(rng: &mut StdRng, ts: &'a [T]) -> Result<&'a T, EnvError>
where
    T: Weighted,
{
    let dist = WeightedIndex::new(ts.iter().map(|item| item.p()))?;
    Ok(&ts[dist.sample(rng)])
}

/// Generic runtime for a fully enumerated discrete MDP.
///
/// Owns sampling of the initial state, stepping through the outcome
/// distributions and tracking the current state. The model itself is
/// shared and never mutated, so any number of runtimes can step over the
/// same `Transitions` concurrently.
#[derive(Debug, Clone)]
pub struct DiscreteEnv {
    obs_space: DiscreteSpace,
    act_space: DiscreteSpace,
    transitions: Arc<Transitions>,
    isd: Array1<Continous>,
    isd_dist: WeightedIndex<Continous>,
    max_episode_steps: Option<usize>,
    rng: StdRng,
    s: Option<Discrete>,
    last_action: Option<Discrete>,
    elapsed_steps: usize,
}

impl DiscreteEnv {
    pub fn new(
        n_s: usize,
        n_a: usize,
        transitions: Arc<Transitions>,
        isd: Array1<Continous>,
        max_episode_steps: Option<usize>,
    ) -> Result<Self, EnvError> {
        if isd.len() != n_s {
            return Err(EnvError::IsdShape {
                expected: n_s,
                got: isd.len(),
            });
        }
        let isd_dist = WeightedIndex::new(isd.iter())?;

        Ok(Self {
            obs_space: DiscreteSpace::new(n_s),
            act_space: DiscreteSpace::new(n_a),
            transitions,
            isd,
            isd_dist,
            max_episode_steps,
            rng: StdRng::from_entropy(),
            s: None,
            last_action: None,
            elapsed_steps: 0,
        })
    }

    pub fn observation_space(&self) -> &DiscreteSpace {
        &self.obs_space
    }

    pub fn action_space(&self) -> &DiscreteSpace {
        &self.act_space
    }

    pub fn transitions(&self) -> Arc<Transitions> {
        Arc::clone(&self.transitions)
    }

    pub fn isd(&self) -> &Array1<Continous> {
        &self.isd
    }

    /// Current state, `None` until the first `reset`.
    pub fn s(&self) -> Option<Discrete> {
        self.s
    }

    pub fn last_action(&self) -> Option<Discrete> {
        self.last_action
    }

    pub fn action_space_sample(&mut self) -> Discrete {
        self.rng.gen_range(0..self.act_space.n)
    }

    pub fn reset(&mut self, seed: Option<u64>) -> Discrete {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let s = self.isd_dist.sample(&mut self.rng);
        self.s = Some(s);
        self.last_action = None;
        self.elapsed_steps = 0;
        debug!(s, ?seed, "reset");

        s
    }

    pub fn step(&mut self, a: Discrete) -> Result<StepInfo, EnvError> {
        let s = self.s.ok_or(EnvError::NotReset)?;
        if !self.act_space.contains(a) {
            return Err(EnvError::InvalidAction {
                action: a,
                n: self.act_space.n,
            });
        }

        let ts = self
            .transitions
            .get(&(s, a))
            .ok_or(EnvError::MissingTransitions { s, a })?;
        let t = *pick_next(&mut self.rng, ts)?;

        self.s = Some(t.next_state);
        self.last_action = Some(a);
        self.elapsed_steps += 1;
        let truncated = self
            .max_episode_steps
            .is_some_and(|max| self.elapsed_steps >= max);
        trace!(s, a, next = t.next_state, reward = t.reward, done = t.done, "step");

        Ok(StepInfo {
            observation: t.next_state,
            reward: t.reward,
            truncated,
            terminated: t.done,
            info: json!({ "prob": t.probability }),
        })
    }

    /// Renders the current state with `r`, `None` until the first `reset`.
    pub fn render<R: Render + ?Sized>(&self, r: &R) -> Option<RenderFrame> {
        self.s.map(|s| r.render(s, self.last_action))
    }
}

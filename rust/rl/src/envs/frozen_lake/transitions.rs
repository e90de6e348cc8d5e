use super::{action::Action, config::FrozenLakeConfig, map::*};
use gymnasium::{Discrete, Transition, Transitions};
use itertools::iproduct;

pub const N_A: usize = 4;

pub const GOAL_REWARD: f64 = 100.;
pub const HOLE_ABSORBING_REWARD: f64 = -100.;

pub const SLIP_INTENDED_P: f64 = 0.8;
pub const SLIP_SIDE_P: f64 = 0.1;

/// Fully enumerated outcome distributions, indexed by state then action.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionModel {
    outcomes: Vec<[Vec<Transition>; N_A]>,
}

impl TransitionModel {
    pub fn build(grid: &Grid, config: &FrozenLakeConfig) -> Self {
        let outcomes = iproduct!(0..grid.nrow(), 0..grid.ncol())
            .map(|(row, col)| {
                std::array::from_fn(|a| outcomes_for(grid, config, row, col, Action::ALL[a]))
            })
            .collect();

        Self { outcomes }
    }

    pub fn n_s(&self) -> usize {
        self.outcomes.len()
    }

    /// # Panics
    ///
    /// If `s` is not a state of the grid the model was built from.
    pub fn outcomes(&self, s: Discrete, a: Action) -> &[Transition] {
        &self.outcomes[s][a.index()]
    }

    /// Associative `(state, action) -> outcomes` view handed to the runtime.
    pub fn to_transitions(&self) -> Transitions {
        iproduct!(0..self.n_s(), Action::ALL)
            .map(|(s, a)| ((s, a.index()), self.outcomes(s, a).to_vec()))
            .collect()
    }
}

fn outcomes_for(
    grid: &Grid,
    config: &FrozenLakeConfig,
    row: usize,
    col: usize,
    a: Action,
) -> Vec<Transition> {
    let s = grid.to_s(row, col);
    let letter = grid.cell(row, col);
    if letter.is_absorbing() {
        let rew = if letter == Cell::Goal {
            GOAL_REWARD
        } else {
            HOLE_ABSORBING_REWARD
        };
        return vec![Transition::new(1.0, s, rew, true)];
    }

    if config.is_slippery {
        a.slip_headings()
            .into_iter()
            .map(|b| {
                let p = if b == a { SLIP_INTENDED_P } else { SLIP_SIDE_P };
                outcome(grid, config, row, col, b, p)
            })
            .collect()
    } else {
        vec![outcome(grid, config, row, col, a, 1.0)]
    }
}

fn outcome(
    grid: &Grid,
    config: &FrozenLakeConfig,
    row: usize,
    col: usize,
    b: Action,
    p: f64,
) -> Transition {
    let (newrow, newcol) = grid.inc(row, col, b);
    let newletter = grid.cell(newrow, newcol);

    Transition::new(
        p,
        grid.to_s(newrow, newcol),
        reward(newletter, config),
        newletter.is_absorbing(),
    )
}

/// Reward for landing on `letter`. The goal always pays `GOAL_REWARD`; shaping
/// only replaces the reward of frozen and hole cells.
fn reward(letter: Cell, config: &FrozenLakeConfig) -> f64 {
    let rew = if letter == Cell::Goal { GOAL_REWARD } else { 0. };
    if !config.rewarding {
        return rew;
    }

    match letter {
        Cell::Frozen => config.step_reward,
        Cell::Hole => config.hole_reward,
        _ => rew,
    }
}

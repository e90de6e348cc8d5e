use super::*;
use rand::prelude::*;
use std::cell::RefCell;

pub trait Policy {
    fn policy(&self, s: Discrete) -> Discrete;
}

/// Picks every action uniformly at random, ignoring the state.
pub struct RandomPolicy {
    pub act_space: DiscreteSpace,
    rng: RefCell<StdRng>,
}

impl RandomPolicy {
    pub fn new(act_space: DiscreteSpace, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            act_space,
            rng: RefCell::new(rng),
        }
    }
}

impl Policy for RandomPolicy {
    fn policy(&self, _s: Discrete) -> Discrete {
        self.rng.borrow_mut().gen_range(0..self.act_space.n)
    }
}

use gymnasium::*;
use ndarray::Array1;
use std::sync::Arc;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// Exposes the fully enumerated model only; stepping belongs to [`DiscreteEnv`].
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    fn transitions(&self) -> Arc<Transitions>;

    /// Initial state distribution.
    fn isd(&self) -> Array1<Continous>;

    fn make_env(&self, max_episode_steps: Option<usize>) -> Result<DiscreteEnv, EnvError> {
        DiscreteEnv::new(
            self.n_s(),
            self.n_a(),
            self.transitions(),
            self.isd(),
            max_episode_steps,
        )
    }
}

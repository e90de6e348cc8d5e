use crate::*;

pub trait EpisodeGenerator {
    fn generate(&mut self, n: usize, seed: Option<u64>) -> Result<Vec<Vec<EpisodeEvent>>, EnvError>;
}

/// Rolls out episodes by following `policy` in `env`.
///
/// Each episode starts with the reset state and a zero reward, and ends once
/// a step terminates or truncates. The seed, if any, applies to the first
/// reset only; later episodes continue the same random stream. Episodes in an
/// environment without `max_episode_steps` only end on termination.
pub struct EpisodeGeneratorForEnv<'a, P: Policy + ?Sized> {
    pub env: &'a mut DiscreteEnv,
    pub policy: &'a P,
}

impl<'a, P: Policy + ?Sized> EpisodeGenerator for EpisodeGeneratorForEnv<'a, P> {
    fn generate(
        &mut self,
        n: usize,
        seed: Option<u64>,
    ) -> Result<Vec<Vec<EpisodeEvent>>, EnvError> {
        let mut eps = Vec::with_capacity(n);

        for i in 0..n {
            let mut s = self.env.reset(if i == 0 { seed } else { None });
            let mut ep = vec![EpisodeEvent { s, r: 0. }];
            loop {
                let si = self.env.step(self.policy.policy(s))?;
                ep.push(EpisodeEvent {
                    s: si.observation,
                    r: si.reward,
                });
                if si.terminated || si.truncated {
                    break;
                }

                s = si.observation;
            }
            eps.push(ep);
        }

        Ok(eps)
    }
}

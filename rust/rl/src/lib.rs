pub mod envs;
pub mod error;
pub mod mdps;

pub use envs::frozen_lake::*;
pub use error::ConfigError;
pub use mdps::mdp::Mdp;

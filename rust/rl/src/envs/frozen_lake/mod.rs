pub mod action;
pub mod config;
pub mod map;
pub mod presets;
pub mod transitions;

pub use action::Action;
pub use config::FrozenLakeConfig;
pub use map::{Cell, Grid};
pub use transitions::TransitionModel;

use crate::{error::ConfigError, mdps::mdp::Mdp};
use gymnasium::*;
use ndarray::Array1;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

const HIGHLIGHT: &str = "\u{1b}[41m";
const RESET: &str = "\u{1b}[0m";

/// Frozen lake with optional reward shaping.
///
/// The surface is described using a grid like the following
///
/// ```text
///     SFFF
///     FHFH
///     FFFH
///     HFFG
/// ```
///
/// S: starting point, F: frozen surface, H: hole, G: goal. The episode ends
/// when the agent reaches the goal or falls in a hole. Reaching the goal pays
/// 100. With `rewarding` on, every step onto ice costs `step_reward` and
/// falling in a hole costs `hole_reward`.
///
/// Not `Clone`: a fresh lake comes from [`FrozenLake::new_instance`].
#[derive(Debug)]
pub struct FrozenLake {
    config: FrozenLakeConfig,
    grid: Grid,
    model: TransitionModel,
    isd: Array1<Continous>,
}

impl FrozenLake {
    pub fn new(config: &FrozenLakeConfig) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let model = TransitionModel::build(&grid, config);
        let isd = grid.isd();
        debug!(
            nrow = grid.nrow(),
            ncol = grid.ncol(),
            rewarding = config.rewarding,
            is_slippery = config.is_slippery,
            "built frozen lake"
        );

        Ok(Self {
            config: config.clone(),
            grid,
            model,
            isd,
        })
    }

    /// Builds an independent lake from the same configuration.
    pub fn new_instance(&self) -> Result<Self, ConfigError> {
        Self::new(&self.config)
    }

    pub fn config(&self) -> &FrozenLakeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn nrow(&self) -> usize {
        self.grid.nrow()
    }

    pub fn ncol(&self) -> usize {
        self.grid.ncol()
    }

    pub fn outcomes(&self, s: Discrete, a: Action) -> &[Transition] {
        self.model.outcomes(s, a)
    }

    pub fn colors() -> BTreeMap<Cell, &'static str> {
        [Cell::Start, Cell::Frozen, Cell::Hole, Cell::Goal]
            .into_iter()
            .filter_map(|c| c.color().map(|color| (c, color)))
            .collect()
    }

    pub fn directions() -> BTreeMap<Action, char> {
        Action::ALL.into_iter().map(|a| (a, a.glyph())).collect()
    }
}

impl Mdp for FrozenLake {
    fn n_s(&self) -> usize {
        self.grid.n_s()
    }

    fn n_a(&self) -> usize {
        transitions::N_A
    }

    /// Builds the associative view from the array-indexed model on each call.
    fn transitions(&self) -> Arc<Transitions> {
        Arc::new(self.model.to_transitions())
    }

    fn isd(&self) -> Array1<Continous> {
        self.isd.clone()
    }
}

impl Render for FrozenLake {
    fn render(&self, s: Discrete, last_action: Option<Discrete>) -> RenderFrame {
        let (row, col) = self.grid.from_s(s);
        let mut out = match last_action.and_then(Action::from_index) {
            Some(a) => format!("  ({})\n", a.name()),
            None => "\n".to_string(),
        };

        for (r, line) in self.grid.rows().enumerate() {
            for (c, cell) in line.iter().enumerate() {
                if (r, c) == (row, col) {
                    out.push_str(HIGHLIGHT);
                    out.push(cell.as_char());
                    out.push_str(RESET);
                } else {
                    out.push(cell.as_char());
                }
            }
            out.push('\n');
        }

        RenderFrame::Ansi(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_highlights_the_current_cell() {
        let config = FrozenLakeConfig::default().with_desc(["GGGH", "GSGH", "GGGF", "FFFG"]);
        let lake = FrozenLake::new(&config).unwrap();

        assert_eq!(
            lake.render(5, None).as_str().unwrap(),
            "\nGGGH\nG\u{1b}[41mS\u{1b}[0mGH\nGGGF\nFFFG\n"
        );
        assert_eq!(
            lake.render(9, Some(1)).as_str().unwrap(),
            "  (Down)\nGGGH\nGSGH\nG\u{1b}[41mG\u{1b}[0mGF\nFFFG\n"
        );
    }

    #[test]
    fn metadata_tables_cover_every_label_and_action() {
        let colors = FrozenLake::colors();
        assert_eq!(colors[&Cell::Start], "green");
        assert_eq!(colors[&Cell::Frozen], "skyblue");
        assert_eq!(colors[&Cell::Hole], "black");
        assert_eq!(colors[&Cell::Goal], "gold");

        let directions = FrozenLake::directions();
        assert_eq!(directions.values().collect::<String>(), "⬅⬇➡⬆");
    }

    #[test]
    fn unknown_labels_render_as_given_and_have_no_color() {
        let lake = FrozenLake::new(&FrozenLakeConfig::default().with_desc(["SX", "FG"])).unwrap();

        assert_eq!(
            lake.render(3, Some(2)).as_str().unwrap(),
            "  (Right)\nSX\nF\u{1b}[41mG\u{1b}[0m\n"
        );
        assert_eq!(FrozenLake::colors().len(), 4);
    }

    #[test]
    fn transitions_view_matches_the_model() {
        let lake = FrozenLake::new(&FrozenLakeConfig::default().with_slippery(true)).unwrap();
        let transitions = lake.transitions();

        assert_eq!(transitions.len(), lake.n_s() * lake.n_a());
        for ((s, a), ts) in transitions.iter() {
            let a = Action::from_index(*a).unwrap();
            assert_eq!(ts.as_slice(), lake.outcomes(*s, a));
        }
        assert_eq!(*transitions, *lake.transitions());
    }
}

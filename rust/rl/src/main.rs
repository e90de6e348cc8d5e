use anyhow::{Context, Result};
use clap::Parser;
use frozen_lake::{FrozenLake, FrozenLakeConfig, Mdp};
use gymnasium::{EpisodeEvent, Policy, RandomPolicy};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Roll out random episodes on a rewarding Frozen Lake.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with the lake configuration. Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preset layout: 4x4, 8x8, 15x15 or 20x20.
    #[arg(long)]
    map_name: Option<String>,

    /// Explicit layout as comma separated rows, e.g. SFFF,FHFH,FFFH,HFFG.
    #[arg(long, value_delimiter = ',')]
    desc: Option<Vec<String>>,

    /// Slip sideways with probability 0.1 each way. `--slippery` alone means true.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    slippery: Option<bool>,

    /// Shape step and hole rewards; `--rewarding false` only pays the goal.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    rewarding: Option<bool>,

    #[arg(long, allow_negative_numbers = true)]
    step_reward: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    hole_reward: Option<f64>,

    #[arg(long, default_value_t = 10)]
    episodes: usize,

    #[arg(long, default_value_t = 100)]
    max_steps: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Print every frame to the terminal.
    #[arg(long)]
    render: bool,

    /// Write the recorded episodes to this file as JSON.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn lake_config(&self) -> Result<FrozenLakeConfig> {
        let mut config = match &self.config {
            Some(path) => FrozenLakeConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => FrozenLakeConfig::default(),
        };

        if let Some(name) = &self.map_name {
            config = config.with_map_name(name.clone());
        }
        if let Some(desc) = &self.desc {
            config = config.with_desc(desc.iter().cloned());
        }
        if let Some(is_slippery) = self.slippery {
            config.is_slippery = is_slippery;
        }
        if let Some(rewarding) = self.rewarding {
            config.rewarding = rewarding;
        }
        if let Some(r) = self.step_reward {
            config.step_reward = r;
        }
        if let Some(r) = self.hole_reward {
            config.hole_reward = r;
        }

        Ok(config)
    }
}

fn write_episodes(path: &Path, eps: &[Vec<EpisodeEvent>]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, eps)
        .with_context(|| format!("Failed to write episodes to {}", path.display()))?;
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.lake_config()?;
    let lake = FrozenLake::new(&config).context("Failed to build the lake")?;
    info!(
        nrow = lake.nrow(),
        ncol = lake.ncol(),
        slippery = config.is_slippery,
        rewarding = config.rewarding,
        "lake ready"
    );

    let mut env = lake.make_env(Some(cli.max_steps))?;
    let policy = RandomPolicy::new(*env.action_space(), cli.seed);

    let mut eps = Vec::with_capacity(cli.episodes);
    for ep in 0..cli.episodes {
        let mut s = env.reset(if ep == 0 { cli.seed } else { None });
        let mut events = vec![EpisodeEvent { s, r: 0. }];
        let mut tot_reward = 0.;
        let mut steps = 0;
        loop {
            let si = env.step(policy.policy(s))?;
            tot_reward += si.reward;
            steps += 1;
            s = si.observation;
            events.push(EpisodeEvent {
                s: si.observation,
                r: si.reward,
            });

            if cli.render {
                if let Some(frame) = env.render(&lake) {
                    print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
                    println!("{frame}");
                }
            }

            if si.truncated || si.terminated {
                info!(
                    episode = ep,
                    steps,
                    total_reward = tot_reward,
                    terminated = si.terminated,
                    "episode finished"
                );
                break;
            }
        }
        eps.push(events);
    }

    if let Some(path) = &cli.output {
        write_episodes(path, &eps)?;
        info!(episodes = eps.len(), path = %path.display(), "episodes written");
    }

    Ok(())
}

extern crate float_eq;
extern crate frozen_lake;
extern crate gymnasium;

use float_eq::*;
use frozen_lake::*;
use gymnasium::{EpisodeGenerator, EpisodeGeneratorForEnv, RandomPolicy, Render, Transition};
use rstest::*;
use std::thread;

#[fixture]
fn lake_4x4() -> FrozenLake {
    FrozenLake::new(&FrozenLakeConfig::default()).unwrap()
}

#[rstest]
#[case::right_from_start(0, Action::Right, Transition::new(1.0, 1, -1., false))]
#[case::down_from_start(0, Action::Down, Transition::new(1.0, 4, -1., false))]
#[case::inside_hole(5, Action::Left, Transition::new(1.0, 5, -100., true))]
#[case::inside_hole_up(5, Action::Up, Transition::new(1.0, 5, -100., true))]
#[case::onto_goal(14, Action::Right, Transition::new(1.0, 15, 100., true))]
fn fl_4x4_deterministic_outcomes(
    lake_4x4: FrozenLake,
    #[case] s: usize,
    #[case] a: Action,
    #[case] expected: Transition,
) {
    assert_eq!(lake_4x4.outcomes(s, a), [expected]);
    assert_eq!(lake_4x4.transitions()[&(s, a.index())], vec![expected]);
}

#[rstest]
fn fl_4x4_spaces_and_isd(lake_4x4: FrozenLake) {
    assert_eq!(lake_4x4.n_s(), 16);
    assert_eq!(lake_4x4.n_a(), 4);
    assert_eq!(lake_4x4.transitions().len(), 64);

    let isd = lake_4x4.isd();
    assert_float_eq!(isd.sum(), 1., abs <= 1e-12);
    assert_float_eq!(isd[0], 1., abs <= 1e-12);
    assert!(isd.iter().skip(1).all(|&p| p == 0.));
}

#[test]
fn fl_missing_map_source_fails_construction() {
    let config = FrozenLakeConfig {
        desc: None,
        map_name: None,
        ..Default::default()
    };

    assert!(matches!(FrozenLake::new(&config), Err(ConfigError::MissingMap)));
}

#[rstest]
#[case("4x4", 16)]
#[case("8x8", 64)]
#[case("15x15", 225)]
#[case("20x20", 400)]
fn fl_presets_build_complete_models(
    #[case] name: &str,
    #[case] n_s: usize,
    #[values(false, true)] slippery: bool,
) {
    let config = FrozenLakeConfig::default()
        .with_map_name(name)
        .with_slippery(slippery);
    let lake = FrozenLake::new(&config).unwrap();

    assert_eq!(lake.n_s(), n_s);
    assert_eq!(lake.transitions().len(), n_s * 4);
    for ts in lake.transitions().values() {
        let total: f64 = ts.iter().map(|t| t.probability).sum();
        assert_float_eq!(total, 1., abs <= 1e-12);
        assert!(ts.len() == 1 || (slippery && ts.len() == 3));
    }
}

#[test]
fn fl_new_instance_is_identical() {
    let config = FrozenLakeConfig::default().with_map_name("8x8").with_slippery(true);
    let lake = FrozenLake::new(&config).unwrap();
    let fresh = lake.new_instance().unwrap();
    let rebuilt = FrozenLake::new(&config).unwrap();

    for other in [&fresh, &rebuilt] {
        assert_eq!(*lake.transitions(), *other.transitions());
        assert_eq!(lake.isd(), other.isd());
        assert_eq!(lake.config(), other.config());
    }
}

#[test]
fn fl_multiple_starts_share_mass() {
    let lake = FrozenLake::new(&FrozenLakeConfig::default().with_desc(["SFS", "FHG"])).unwrap();

    assert_float_eq!(
        lake.isd().to_vec(),
        vec![0.5, 0., 0.5, 0., 0., 0.],
        abs_all <= 1e-12
    );
}

#[rstest]
fn fl_runtime_follows_deterministic_model(lake_4x4: FrozenLake) {
    let env = &mut lake_4x4.make_env(None).unwrap();
    assert_eq!(env.reset(Some(2718)), 0);

    let path = [
        Action::Down,
        Action::Down,
        Action::Right,
        Action::Right,
        Action::Down,
        Action::Right,
    ];
    let mut tot_reward = 0.;
    let mut last = None;
    for a in path {
        let si = env.step(a.index()).unwrap();
        tot_reward += si.reward;
        last = Some(si);
    }

    let last = last.unwrap();
    assert_eq!(last.observation, 15);
    assert!(last.terminated);
    assert!(!last.truncated);
    assert_float_eq!(tot_reward, 95., abs <= 1e-12);

    assert_eq!(
        env.render(&lake_4x4).unwrap().as_str().unwrap(),
        "  (Right)\nSFFF\nFHFH\nFFFH\nHFF\u{1b}[41mG\u{1b}[0m\n"
    );
}

#[test]
fn fl_runtime_only_starts_on_start_cells() {
    let lake = FrozenLake::new(&FrozenLakeConfig::default().with_desc(["SFS", "FHG"])).unwrap();
    let env = &mut lake.make_env(None).unwrap();

    env.reset(Some(7));
    for _ in 0..200 {
        let s = env.reset(None);
        assert!(s == 0 || s == 2, "started on {s}");
    }
}

#[test]
fn fl_random_episodes_are_reproducible() {
    let config = FrozenLakeConfig::default()
        .with_map_name("8x8")
        .with_slippery(true);
    let lake = FrozenLake::new(&config).unwrap();

    let run = || {
        let env = &mut lake.make_env(Some(50)).unwrap();
        let policy = RandomPolicy::new(*env.action_space(), Some(42));
        EpisodeGeneratorForEnv { env, policy: &policy }
            .generate(20, Some(2718))
            .unwrap()
    };

    let eps = run();
    assert_eq!(eps, run());
    for ep in &eps {
        assert!(ep.len() >= 2 && ep.len() <= 51);
        assert_eq!(ep[0].s, 0);
    }
}

#[test]
fn fl_model_is_shared_across_threads() {
    let config = FrozenLakeConfig::default()
        .with_map_name("8x8")
        .with_slippery(true);
    let lake = FrozenLake::new(&config).unwrap();
    let transitions = lake.transitions();

    let handles = (0..4)
        .map(|_| {
            let transitions = std::sync::Arc::clone(&transitions);
            thread::spawn(move || {
                transitions
                    .values()
                    .map(|ts| ts.iter().map(|t| t.probability).sum::<f64>())
                    .sum::<f64>()
            })
        })
        .collect::<Vec<_>>();

    for h in handles {
        assert_float_eq!(h.join().unwrap(), 256., abs <= 1e-9);
    }
}

#[test]
fn fl_render_before_any_action() {
    let lake = FrozenLake::new(&FrozenLakeConfig::default()).unwrap();

    assert_eq!(
        lake.render(0, None).as_str().unwrap(),
        "\n\u{1b}[41mS\u{1b}[0mFFF\nFHFH\nFFFH\nHFFG\n"
    );
}

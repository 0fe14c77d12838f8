mod helpers;

use helpers::{NullSurface, RecordingSurface};
use rand::SeedableRng;

use score_fireworks::physic_engine::config::SimConfig;
use score_fireworks::physic_engine::firework::Firework;
use score_fireworks::physic_engine::simulation::SimulationState;
use score_fireworks::physic_engine::types::Vec2;

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

// ==================================
// 1. Tests de déclenchement (spawn)
// ==================================

#[test]
fn test_no_spawn_without_trigger() {
    let cfg = SimConfig::default();
    let mut state = SimulationState::new(&cfg, BOUNDS);

    for _ in 0..1000 {
        assert!(!state.spawn_if_triggered(false, 1.0));
    }
    assert!(!state.has_activity());
}

#[test]
fn test_spawn_is_certain_at_probability_one() {
    let cfg = SimConfig::default();
    let mut state = SimulationState::new(&cfg, BOUNDS);

    for i in 1..=10 {
        assert!(state.spawn_if_triggered(true, 1.0));
        assert_eq!(state.fireworks.len(), i, "each trial must add one firework");
    }
}

#[test]
fn test_spawn_rate_matches_bernoulli_probability() {
    let cfg = SimConfig::default();
    let mut state = SimulationState::new(&cfg, BOUNDS);

    const TRIALS: usize = 100_000;
    let mut spawned = 0usize;
    for _ in 0..TRIALS {
        if state.spawn_if_triggered(true, 0.05) {
            spawned += 1;
        }
        // Vide la collection pour ne pas accumuler 5000 fusées vivantes
        state.fireworks.clear();
    }

    let rate = spawned as f64 / TRIALS as f64;
    assert!(
        (0.04..=0.06).contains(&rate),
        "observed spawn rate {} outside the statistically reasonable band [0.04, 0.06]",
        rate
    );
}

// ==================================
// 2. Tests de tick et d'élagage
// ==================================

#[test]
fn test_tick_removes_only_completed_fireworks() {
    let cfg = SimConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut state = SimulationState::new(&cfg, BOUNDS);

    let mut a = Firework::new(&cfg, BOUNDS, &mut rng);
    a.hue = 10.0;
    let mut b = Firework::new(&cfg, BOUNDS, &mut rng);
    b.hue = 20.0;
    // `b` est terminé : explosé, tous fragments élagués
    b.exploded = true;
    let mut c = Firework::new(&cfg, BOUNDS, &mut rng);
    c.hue = 30.0;

    state.fireworks.extend([a, b, c]);

    let stats = state.tick(&mut NullSurface);

    assert_eq!(state.fireworks.len(), 2, "exactly the completed one is removed");
    assert_eq!(stats.fireworks, 2);
    let hues: Vec<f32> = state.fireworks.iter().map(|fw| fw.hue).collect();
    assert_eq!(hues, vec![10.0, 30.0], "survivors keep their insertion order");
}

#[test]
fn test_tick_updates_and_renders_every_firework() {
    let cfg = SimConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut state = SimulationState::new(&cfg, BOUNDS);

    for _ in 0..3 {
        state
            .fireworks
            .push(Firework::new(&cfg, BOUNDS, &mut rng));
    }
    let positions_before: Vec<Vec2> = state.fireworks.iter().map(|fw| fw.rocket.pos).collect();

    let mut surface = RecordingSurface::new();
    state.tick(&mut surface);

    assert_eq!(surface.points.len(), 3, "one rocket point per firework");
    for (fw, before) in state.fireworks.iter().zip(positions_before) {
        assert_ne!(fw.rocket.pos, before, "every rocket must have moved");
    }
}

#[test]
fn test_gravity_pulls_rockets_downward_each_frame() {
    let cfg = SimConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut state = SimulationState::new(&cfg, BOUNDS);
    state.fireworks.push(Firework::new(&cfg, BOUNDS, &mut rng));

    let vel_before = state.fireworks[0].rocket.vel.y;
    state.tick(&mut NullSurface);
    let vel_after = state.fireworks[0].rocket.vel.y;

    assert!(
        (vel_after - vel_before - cfg.gravity).abs() < 1e-6,
        "vertical velocity must increase by the gravity constant per frame"
    );
}

// ==================================
// 3. Tests d'activité
// ==================================

#[test]
fn test_has_activity_reflects_live_fireworks() {
    let cfg = SimConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let mut state = SimulationState::new(&cfg, BOUNDS);
    assert!(!state.has_activity());

    state.fireworks.push(Firework::new(&cfg, BOUNDS, &mut rng));
    assert!(state.has_activity());

    // Un feu d'artifice tourne jusqu'au bout une fois lancé : au plus
    // quelques centaines de frames pour ce profil de config.
    let mut ticks = 0;
    while state.has_activity() {
        state.tick(&mut NullSurface);
        ticks += 1;
        assert!(ticks < 1000, "firework must eventually complete");
    }
    assert!(state.fireworks.is_empty());
}

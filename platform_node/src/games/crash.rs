//! Crash game engine.
//!
//! A single tokio task owns the whole round state and publishes
//! read-only snapshots through a `watch` channel. Handlers (and the
//! websocket feed) only ever clone the latest snapshot, so there is
//! exactly one writer in the system.

use crate::types::round2;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CrashConfig {
    /// Seconds players get to place bets before the round runs.
    pub betting_secs: f64,
    /// Pause between a crash and the next betting window.
    pub intermission_secs: f64,
    /// Engine tick interval.
    pub tick_ms: u64,
    /// Rounds kept in the history ring.
    pub history_len: usize,
}

impl Default for CrashConfig {
    fn default() -> Self {
        CrashConfig {
            betting_secs: 10.0,
            intermission_secs: 5.0,
            tick_ms: 100,
            history_len: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrashPhase {
    Betting,
    Running,
    Crashed,
}

/// One finished round, most recent first in the history ring.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub multiplier: f64,
    pub time: String,
    pub players: u32,
}

/// Read-only view of the game published on every tick.
#[derive(Debug, Clone, Serialize)]
pub struct CrashSnapshot {
    pub round_id: String,
    pub phase: CrashPhase,
    pub multiplier: f64,
    /// Revealed only once the round has crashed.
    pub crash_point: Option<f64>,
    pub betting_remaining_secs: f64,
    pub players: u32,
    pub history: Vec<RoundRecord>,
}

impl Default for CrashSnapshot {
    fn default() -> Self {
        CrashSnapshot {
            round_id: String::new(),
            phase: CrashPhase::Betting,
            multiplier: 1.0,
            crash_point: None,
            betting_remaining_secs: 0.0,
            players: 0,
            history: Vec::new(),
        }
    }
}

/// Draw the crash point for a round. House edge keeps half of all
/// rounds under 3.1x and only one in twenty above 22.1x.
pub fn generate_crash_point(rng: &mut impl Rng) -> f64 {
    let bucket: f64 = rng.gen();
    let point = if bucket < 0.5 {
        rng.gen_range(1.1..3.1)
    } else if bucket < 0.8 {
        rng.gen_range(3.1..7.1)
    } else if bucket < 0.95 {
        rng.gen_range(7.1..22.1)
    } else {
        rng.gen_range(22.1..100.1)
    };
    round2(point)
}

/// Multiplier after `run_secs` seconds of a running round. Quadratic
/// growth: starts at 1.0x and accelerates with time.
pub fn multiplier_at(run_secs: f64) -> f64 {
    1.0 + (run_secs * 0.1) * (1.0 + run_secs * 0.02)
}

/// Deterministic round state machine. Time is injected so tests can
/// drive transitions without a runtime; the spawned engine task is the
/// only caller of `advance` in production.
pub struct EngineCore {
    config: CrashConfig,
    phase: CrashPhase,
    phase_started: Instant,
    round_id: String,
    crash_point: f64,
    multiplier: f64,
    players: u32,
    history: VecDeque<RoundRecord>,
}

impl EngineCore {
    pub fn new(config: CrashConfig, now: Instant, rng: &mut impl Rng) -> Self {
        let crash_point = generate_crash_point(rng);
        EngineCore {
            config,
            phase: CrashPhase::Betting,
            phase_started: now,
            round_id: Uuid::new_v4().to_string(),
            crash_point,
            multiplier: 1.0,
            players: fabricate_player_count(rng),
            history: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> CrashPhase {
        self.phase
    }

    pub fn crash_point(&self) -> f64 {
        self.crash_point
    }

    /// Step the state machine to `now`.
    pub fn advance(&mut self, now: Instant, rng: &mut impl Rng) {
        let elapsed = now.duration_since(self.phase_started).as_secs_f64();
        match self.phase {
            CrashPhase::Betting => {
                if elapsed >= self.config.betting_secs {
                    self.phase = CrashPhase::Running;
                    self.phase_started = now;
                    self.multiplier = 1.0;
                }
            }
            CrashPhase::Running => {
                let multiplier = multiplier_at(elapsed);
                if multiplier >= self.crash_point {
                    self.crash(now);
                } else {
                    self.multiplier = round2(multiplier);
                }
            }
            CrashPhase::Crashed => {
                if elapsed >= self.config.intermission_secs {
                    self.start_round(now, rng);
                }
            }
        }
    }

    fn crash(&mut self, now: Instant) {
        self.phase = CrashPhase::Crashed;
        self.phase_started = now;
        // The published multiplier lands exactly on the crash point.
        self.multiplier = self.crash_point;
        self.history.push_front(RoundRecord {
            multiplier: self.crash_point,
            time: Utc::now().format("%H:%M:%S").to_string(),
            players: self.players,
        });
        while self.history.len() > self.config.history_len {
            self.history.pop_back();
        }
    }

    fn start_round(&mut self, now: Instant, rng: &mut impl Rng) {
        self.phase = CrashPhase::Betting;
        self.phase_started = now;
        self.round_id = Uuid::new_v4().to_string();
        self.crash_point = generate_crash_point(rng);
        self.multiplier = 1.0;
        self.players = fabricate_player_count(rng);
    }

    pub fn snapshot(&self, now: Instant) -> CrashSnapshot {
        let elapsed = now.duration_since(self.phase_started).as_secs_f64();
        let betting_remaining = match self.phase {
            CrashPhase::Betting => (self.config.betting_secs - elapsed).max(0.0),
            _ => 0.0,
        };
        CrashSnapshot {
            round_id: self.round_id.clone(),
            phase: self.phase,
            multiplier: self.multiplier,
            crash_point: match self.phase {
                CrashPhase::Crashed => Some(self.crash_point),
                _ => None,
            },
            betting_remaining_secs: round2(betting_remaining),
            players: self.players,
            history: self.history.iter().cloned().collect(),
        }
    }
}

fn fabricate_player_count(rng: &mut impl Rng) -> u32 {
    rng.gen_range(12..=240)
}

/// Handle for spawning the engine task.
pub struct CrashEngine;

impl CrashEngine {
    /// Start the game loop and hand back the snapshot channel. The
    /// task stops once every receiver has been dropped.
    pub fn spawn(config: CrashConfig) -> watch::Receiver<CrashSnapshot> {
        let (tx, rx) = watch::channel(CrashSnapshot::default());
        tokio::spawn(run_loop(config, tx));
        rx
    }
}

async fn run_loop(config: CrashConfig, tx: watch::Sender<CrashSnapshot>) {
    let mut rng = StdRng::from_entropy();
    let tick = Duration::from_millis(config.tick_ms.max(10));
    let mut interval = tokio::time::interval(tick);
    let mut core = EngineCore::new(config, Instant::now(), &mut rng);
    if tx.send(core.snapshot(Instant::now())).is_err() {
        return;
    }
    loop {
        interval.tick().await;
        let now = Instant::now();
        core.advance(now, &mut rng);
        if tx.send(core.snapshot(now)).is_err() {
            log::debug!("crash engine shutting down, no receivers left");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn crash_point_stays_in_range() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let point = generate_crash_point(&mut rng);
            assert!((1.1..=100.1).contains(&point), "out of range: {point}");
        }
    }

    #[test]
    fn crash_point_distribution_is_house_shaped() {
        let mut rng = rng();
        let draws = 20_000;
        let mut low = 0usize;
        let mut extreme = 0usize;
        for _ in 0..draws {
            let point = generate_crash_point(&mut rng);
            if point < 3.1 {
                low += 1;
            }
            if point >= 22.1 {
                extreme += 1;
            }
        }
        let low_share = low as f64 / draws as f64;
        let extreme_share = extreme as f64 / draws as f64;
        assert!((0.45..0.55).contains(&low_share), "low share {low_share}");
        assert!(
            (0.03..0.08).contains(&extreme_share),
            "extreme share {extreme_share}"
        );
    }

    #[test]
    fn multiplier_formula_matches_known_points() {
        assert!((multiplier_at(0.0) - 1.0).abs() < 1e-9);
        // 1.0 + (10 * 0.1) * (1 + 10 * 0.02) = 2.2
        assert!((multiplier_at(10.0) - 2.2).abs() < 1e-9);
    }

    #[test]
    fn multiplier_is_monotonic() {
        let mut last = multiplier_at(0.0);
        for step in 1..600 {
            let next = multiplier_at(step as f64 * 0.1);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn round_walks_through_all_phases() {
        let mut rng = rng();
        let start = Instant::now();
        let config = CrashConfig::default();
        let mut core = EngineCore::new(config.clone(), start, &mut rng);
        assert_eq!(core.phase(), CrashPhase::Betting);

        // Betting window still open.
        core.advance(start + secs(5.0), &mut rng);
        assert_eq!(core.phase(), CrashPhase::Betting);

        // Window over, round runs.
        core.advance(start + secs(10.5), &mut rng);
        assert_eq!(core.phase(), CrashPhase::Running);

        // Push time far enough that any crash point is exceeded.
        let run_start = start + secs(10.5);
        let mut now = run_start;
        for _ in 0..4000 {
            now += secs(0.1);
            core.advance(now, &mut rng);
            if core.phase() == CrashPhase::Crashed {
                break;
            }
        }
        assert_eq!(core.phase(), CrashPhase::Crashed);

        let snapshot = core.snapshot(now);
        assert_eq!(snapshot.multiplier, core.crash_point());
        assert_eq!(snapshot.crash_point, Some(core.crash_point()));
        assert_eq!(snapshot.history.len(), 1);

        // Intermission passes, a fresh round opens for betting.
        core.advance(now + secs(5.1), &mut rng);
        assert_eq!(core.phase(), CrashPhase::Betting);
        let fresh = core.snapshot(now + secs(5.1));
        assert_eq!(fresh.multiplier, 1.0);
        assert_eq!(fresh.crash_point, None);
        assert_eq!(fresh.history.len(), 1);
    }

    #[test]
    fn history_ring_is_capped() {
        let mut rng = rng();
        let start = Instant::now();
        let config = CrashConfig {
            history_len: 3,
            ..Default::default()
        };
        let mut core = EngineCore::new(config, start, &mut rng);
        let mut now = start;
        for _ in 0..6 {
            // Run each round to completion.
            for _ in 0..5000 {
                now += secs(0.1);
                core.advance(now, &mut rng);
                if core.phase() == CrashPhase::Crashed {
                    break;
                }
            }
            assert_eq!(core.phase(), CrashPhase::Crashed);
            now += secs(6.0);
            core.advance(now, &mut rng);
        }
        assert_eq!(core.snapshot(now).history.len(), 3);
    }

    #[test]
    fn published_multiplier_never_exceeds_crash_point() {
        let mut rng = rng();
        let start = Instant::now();
        let mut core = EngineCore::new(CrashConfig::default(), start, &mut rng);
        let mut now = start;
        for _ in 0..5000 {
            now += secs(0.1);
            core.advance(now, &mut rng);
            let snapshot = core.snapshot(now);
            assert!(snapshot.multiplier <= core.crash_point());
            if core.phase() == CrashPhase::Crashed {
                break;
            }
        }
    }

    proptest! {
        #[test]
        fn multiplier_at_is_at_least_one(t in 0.0f64..600.0) {
            prop_assert!(multiplier_at(t) >= 1.0);
        }
    }

    #[tokio::test]
    async fn spawned_engine_publishes_snapshots() {
        let config = CrashConfig {
            tick_ms: 10,
            ..Default::default()
        };
        let mut rx = CrashEngine::spawn(config);
        rx.changed().await.expect("engine should publish");
        let snapshot = rx.borrow().clone();
        assert!(!snapshot.round_id.is_empty());
        assert!(snapshot.multiplier >= 1.0);
    }
}

//! Lottery draw schedule and fabricated results.
//!
//! The platform never held ticket state: every payload is generated on
//! request within fixed bounds. What is real is the schedule — draws
//! happen every six hours aligned to the top of an hour, and the
//! advertised draw time is always in the future.

use crate::types::{round2, Hype};
use chrono::{DateTime, Duration, DurationRound, Utc};
use rand::Rng;
use serde::Serialize;

/// Alphabet used for fabricated winner wallets. Base58 style, no
/// ambiguous characters.
const WALLET_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct LotteryConfig {
    pub draw_interval_hours: i64,
    pub ticket_price: f64,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        LotteryConfig {
            draw_interval_hours: 6,
            ticket_price: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentDraw {
    pub lottery_id: String,
    pub prize_pool: Hype,
    pub draw_time: String,
    pub ticket_price: Hype,
    pub participants: u32,
    pub tickets_sold: u32,
    pub jackpot_chance: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Winner {
    pub address: String,
    pub prize: Hype,
    pub date: String,
    pub lottery_id: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LotteryStats {
    pub total_participants: u32,
    pub tickets_sold: u32,
    pub total_prizes: Hype,
    pub draws_completed: u32,
    pub largest_win: Hype,
    pub average_participants: u32,
}

pub struct Lottery {
    config: LotteryConfig,
}

impl Lottery {
    pub fn new(config: LotteryConfig) -> Self {
        Lottery { config }
    }

    /// Next draw instant: top of the current hour stepped forward in
    /// draw-interval increments until it lies strictly in the future.
    pub fn next_draw_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let mut draw = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
        while draw <= now {
            draw += Duration::hours(self.config.draw_interval_hours);
        }
        draw
    }

    pub fn current_draw(&self, now: DateTime<Utc>, rng: &mut impl Rng) -> CurrentDraw {
        CurrentDraw {
            lottery_id: format!("HYPE_DRAW_{}", now.timestamp()),
            prize_pool: Hype(rng.gen_range(50.0..500.0)),
            draw_time: self.next_draw_after(now).to_rfc3339(),
            ticket_price: Hype(self.config.ticket_price),
            participants: rng.gen_range(150..=800),
            tickets_sold: rng.gen_range(500..=2000),
            jackpot_chance: "1 in 1000".to_string(),
            status: "active".to_string(),
        }
    }

    pub fn past_winners(&self, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Winner> {
        (0..10)
            .map(|_| {
                let days_ago = rng.gen_range(1..=30);
                Winner {
                    address: fabricate_wallet(rng),
                    prize: Hype(rng.gen_range(25.0..450.0)),
                    date: (now - Duration::days(days_ago)).format("%Y-%m-%d").to_string(),
                    lottery_id: format!("DRAW_{}", rng.gen_range(1000..=9999)),
                    verified: true,
                }
            })
            .collect()
    }

    pub fn stats(&self, rng: &mut impl Rng) -> LotteryStats {
        LotteryStats {
            total_participants: rng.gen_range(5000..=15000),
            tickets_sold: rng.gen_range(25000..=75000),
            total_prizes: Hype(round2(rng.gen_range(2500.0..8500.0))),
            draws_completed: rng.gen_range(100..=300),
            largest_win: Hype(round2(rng.gen_range(800.0..1500.0))),
            average_participants: rng.gen_range(200..=600),
        }
    }
}

/// Fabricate a base58-looking wallet string, 32 to 44 characters.
pub fn fabricate_wallet(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(32..=44);
    (0..len)
        .map(|_| WALLET_ALPHABET[rng.gen_range(0..WALLET_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn next_draw_is_future_and_hour_aligned() {
        let lottery = Lottery::new(LotteryConfig::default());
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 13, 37, 21).unwrap();
        let draw = lottery.next_draw_after(now);
        assert!(draw > now);
        assert_eq!(draw.format("%M:%S").to_string(), "00:00");
        // Top of hour plus one six-hour step.
        assert_eq!(draw, Utc.with_ymd_and_hms(2025, 3, 14, 19, 0, 0).unwrap());
    }

    #[test]
    fn next_draw_on_exact_boundary_moves_forward() {
        let lottery = Lottery::new(LotteryConfig::default());
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap();
        let draw = lottery.next_draw_after(now);
        assert!(draw > now);
    }

    #[test]
    fn current_draw_respects_bounds() {
        let lottery = Lottery::new(LotteryConfig::default());
        let mut rng = rng();
        let draw = lottery.current_draw(Utc::now(), &mut rng);
        assert!(draw.prize_pool.0 >= 50.0 && draw.prize_pool.0 < 500.0);
        assert!((150..=800).contains(&draw.participants));
        assert!((500..=2000).contains(&draw.tickets_sold));
        assert_eq!(draw.status, "active");
    }

    #[test]
    fn winners_use_base58_alphabet() {
        let lottery = Lottery::new(LotteryConfig::default());
        let mut rng = rng();
        let winners = lottery.past_winners(Utc::now(), &mut rng);
        assert_eq!(winners.len(), 10);
        for winner in &winners {
            assert!((32..=44).contains(&winner.address.len()));
            assert!(winner
                .address
                .bytes()
                .all(|b| WALLET_ALPHABET.contains(&b)));
            assert!(!winner.address.contains('0'));
            assert!(!winner.address.contains('O'));
            assert!(winner.verified);
        }
    }

    #[test]
    fn stats_stay_in_bounds() {
        let lottery = Lottery::new(LotteryConfig::default());
        let mut rng = rng();
        let stats = lottery.stats(&mut rng);
        assert!((5000..=15000).contains(&stats.total_participants));
        assert!(stats.largest_win.0 >= 800.0 && stats.largest_win.0 <= 1500.0);
    }
}

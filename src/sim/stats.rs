//! Score, lives and level tracking

/// Per-game counters plus the all-time high score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score ever seen; survives `reset_stats`
    pub high_score: u32,
    ship_limit: u32,
}

impl GameStats {
    /// Fresh counters with a high score loaded from storage
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        Self {
            ships_left: ship_limit,
            score: 0,
            level: 1,
            high_score,
            ship_limit,
        }
    }

    /// Reset everything except the high score
    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Add points and run the high-score check.
    /// Returns true if the high score moved.
    pub fn add_score(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        self.check_high_score()
    }

    /// Raise the high score to the current score if it is greater
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_keeps_loaded_high_score() {
        let stats = GameStats::new(3, 1200);
        assert_eq!(stats.ships_left, 3);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.high_score, 1200);
    }

    #[test]
    fn test_add_score_reports_new_high() {
        let mut stats = GameStats::new(3, 100);
        assert!(!stats.add_score(50));
        assert_eq!(stats.high_score, 100);
        assert!(stats.add_score(60));
        assert_eq!(stats.high_score, 110);
    }

    proptest! {
        #[test]
        fn reset_restores_initial_counters(
            ship_limit in 1u32..10,
            high in 0u32..100_000,
            points in proptest::collection::vec(0u32..1000, 0..20),
            lost in 0u32..5,
            levels in 0u32..5,
        ) {
            let mut stats = GameStats::new(ship_limit, high);
            for p in &points {
                stats.add_score(*p);
            }
            stats.ships_left = stats.ships_left.saturating_sub(lost);
            stats.level += levels;
            let high_before = stats.high_score;

            stats.reset_stats();

            prop_assert_eq!(stats.ships_left, ship_limit);
            prop_assert_eq!(stats.score, 0);
            prop_assert_eq!(stats.level, 1);
            prop_assert_eq!(stats.high_score, high_before);
        }

        #[test]
        fn high_score_tracks_maximum(
            initial in 0u32..5000,
            games in proptest::collection::vec(
                proptest::collection::vec(0u32..500, 0..10), 1..5),
        ) {
            let mut stats = GameStats::new(3, initial);
            let mut best = initial;
            for game in &games {
                stats.reset_stats();
                for p in game {
                    let before = stats.high_score;
                    stats.add_score(*p);
                    best = best.max(stats.score);
                    prop_assert!(stats.high_score >= before);
                }
            }
            prop_assert_eq!(stats.high_score, best);
        }
    }
}

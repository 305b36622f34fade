//! Simulation report generation.

use super::runner::MatchStats;
use crate::game::GameOverCause;
use serde::Serialize;

/// Game-over tallies by cause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CauseCounts {
    pub player_bit_self: u32,
    pub player_hit_hunter: u32,
    pub player_hit_obstacle: u32,
    pub hunter_ate_player: u32,
}

impl CauseCounts {
    fn record(&mut self, cause: GameOverCause) {
        match cause {
            GameOverCause::PlayerBitSelf => self.player_bit_self += 1,
            GameOverCause::PlayerHitHunter => self.player_hit_hunter += 1,
            GameOverCause::PlayerHitObstacle => self.player_hit_obstacle += 1,
            GameOverCause::HunterAtePlayer => self.hunter_ate_player += 1,
        }
    }
}

/// Aggregated results from multiple simulated matches.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_ticks: f64,
    pub avg_player_score: f64,
    pub avg_hunter_score: f64,
    pub best_player_score: u32,
    pub avg_hunter_resets: f64,
    pub avg_hunter_meals: f64,
    pub avg_player_reversals: f64,

    pub causes: CauseCounts,

    #[serde(skip)]
    pub runs: Vec<MatchStats>,
}

impl SimReport {
    /// Create a new report from finished matches.
    pub fn from_runs(runs: Vec<MatchStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));
        let average = |f: fn(&MatchStats) -> f64| runs.iter().map(f).sum::<f64>() / divisor;

        let mut causes = CauseCounts::default();
        for cause in runs.iter().filter_map(|r| r.cause) {
            causes.record(cause);
        }

        Self {
            num_runs,
            runs_timed_out: runs
                .iter()
                .filter(|r| r.cause.is_none() && r.ticks >= max_ticks)
                .count() as u32,
            avg_ticks: average(|r| r.ticks as f64),
            avg_player_score: average(|r| f64::from(r.player_score)),
            avg_hunter_score: average(|r| f64::from(r.hunter_score)),
            best_player_score: runs.iter().map(|r| r.player_score).max().unwrap_or(0),
            avg_hunter_resets: average(|r| f64::from(r.hunter_resets)),
            avg_hunter_meals: average(|r| f64::from(r.hunter_meals)),
            avg_player_reversals: average(|r| f64::from(r.player_reversals)),
            causes,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  BATTLE SNAKE SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Matches: {} total, {} timed out\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Ticks:           {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Player Score:    {:.1}\n", self.avg_player_score));
        report.push_str(&format!("  Best Player Score:   {}\n", self.best_player_score));
        report.push_str(&format!("  Avg Hunter Score:    {:.1}\n\n", self.avg_hunter_score));

        report.push_str("── HUNTER ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Resets:          {:.2}\n", self.avg_hunter_resets));
        report.push_str(&format!("  Avg Foods Eaten:     {:.2}\n", self.avg_hunter_meals));
        report.push_str(&format!(
            "  Avg Player Reversals: {:.2}\n\n",
            self.avg_player_reversals
        ));

        report.push_str("── GAME OVER CAUSES ─────────────────────────────────────────────\n");
        let rows = [
            ("Bit self", self.causes.player_bit_self),
            ("Hit hunter", self.causes.player_hit_hunter),
            ("Hit wall", self.causes.player_hit_obstacle),
            ("Eaten by hunter", self.causes.hunter_ate_player),
            ("Timed out", self.runs_timed_out),
        ];
        for (label, count) in rows {
            let pct = f64::from(count) / f64::from(self.num_runs.max(1)) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<16} {:>4} {:>5.1}% {}\n", label, count, pct, bar));
        }

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(ticks: u64, score: u32, cause: Option<GameOverCause>) -> MatchStats {
        MatchStats {
            ticks,
            player_score: score,
            hunter_score: 2,
            cause,
            ..MatchStats::default()
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(
            vec![
                stats(100, 4, Some(GameOverCause::HunterAtePlayer)),
                stats(300, 8, None),
                stats(200, 6, Some(GameOverCause::PlayerHitObstacle)),
            ],
            300,
        );
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.avg_ticks, 200.0);
        assert_eq!(report.avg_player_score, 6.0);
        assert_eq!(report.best_player_score, 8);
        assert_eq!(report.causes.hunter_ate_player, 1);
        assert_eq!(report.causes.player_hit_obstacle, 1);
        assert_eq!(report.causes.player_bit_self, 0);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 100);
        assert_eq!(report.avg_ticks, 0.0);
        assert!(report.to_text().contains("Matches: 0 total"));
    }

    #[test]
    fn test_json_has_causes() {
        let report = SimReport::from_runs(vec![stats(10, 1, Some(GameOverCause::PlayerBitSelf))], 100);
        let json = report.to_json();
        assert!(json.contains("\"player_bit_self\": 1"));
        assert!(!json.contains("\"runs\""));
    }
}

//! Shot statistics over a batch of finished games.

use crate::game::SinglePlayerGame;

/// Mean and population standard deviation of the shots needed per game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStatistics {
    pub average: f64,
    pub std_dev: f64,
}

impl GameStatistics {
    /// Statistics over raw shot counts. An empty input yields zeros.
    pub fn from_shot_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut n = 0usize;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for c in counts {
            let c = c as f64;
            n += 1;
            sum += c;
            sum_sq += c * c;
        }
        if n == 0 {
            return GameStatistics {
                average: 0.0,
                std_dev: 0.0,
            };
        }

        let average = sum / n as f64;
        let std_dev = if n > 1 {
            // clamp tiny negative rounding residue before the root
            let variance = (sum_sq / n as f64 - average * average).max(0.0);
            libm::sqrt(variance)
        } else {
            0.0
        };
        GameStatistics { average, std_dev }
    }
}

/// Analyze the number of shots each game took.
pub fn analyze(games: &[SinglePlayerGame]) -> GameStatistics {
    GameStatistics::from_shot_counts(games.iter().map(SinglePlayerGame::number_of_shots))
}

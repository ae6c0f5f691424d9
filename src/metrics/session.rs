use std::time::{Duration, Instant};

/// Stats carried across rounds within one process: best score, round
/// count, and the wall clock of the current round.
pub struct SessionStats {
    started: Instant,
    elapsed: Duration,
    pub high_score: u32,
    pub rounds: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            rounds: 0,
        }
    }

    /// Refresh the clock; called from the render timer
    pub fn tick(&mut self) {
        self.elapsed = self.started.elapsed();
    }

    /// A new round begins: restart the clock
    pub fn begin_round(&mut self) {
        self.started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn end_round(&mut self, score: u32) {
        self.rounds += 1;
        if score > self.high_score {
            self.high_score = score;
        }
    }

    /// The current round's clock as mm:ss
    pub fn clock(&self) -> String {
        let total = self.elapsed.as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        let mut stats = SessionStats::new();

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.clock(), "00:00");

        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.clock(), "02:05");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.clock(), "61:01");
    }

    #[test]
    fn high_score_only_goes_up() {
        let mut stats = SessionStats::new();

        stats.end_round(10);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.rounds, 1);

        stats.end_round(5);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.rounds, 2);

        stats.end_round(15);
        assert_eq!(stats.high_score, 15);
        assert_eq!(stats.rounds, 3);
    }

    #[test]
    fn begin_round_restarts_the_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(30));
        stats.tick();
        assert!(stats.elapsed.as_millis() >= 30);

        stats.begin_round();
        stats.tick();
        assert!(stats.elapsed.as_millis() < 30);
    }
}

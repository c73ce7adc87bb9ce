//! Clock source — a one-shot timer the session re-arms after every tick.
//!
//! Nothing is emitted unless the clock is armed, and each arm yields at most
//! one tick. `stop()` cancels a pending tick explicitly.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
pub struct Clock {
    period: Duration,
    deadline: Option<Instant>,
}

impl Clock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the next tick one period from now. An already armed clock
    /// keeps its deadline.
    pub fn arm(&mut self) {
        if self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.period);
        }
    }

    /// Cancel any pending tick.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Wait for the pending tick and disarm. Never resolves while unarmed.
    ///
    /// Cancellation safe: dropping the future leaves the deadline in place,
    /// so a later call waits for the same instant.
    pub async fn tick(&mut self) -> Instant {
        let Some(deadline) = self.deadline else {
            return std::future::pending().await;
        };
        sleep_until(deadline).await;
        self.deadline = None;
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn tick_after_period() {
        let mut clock = Clock::new(Duration::from_secs(1));
        let start = Instant::now();
        clock.arm();
        let at = clock.tick().await;
        assert!(at - start >= Duration::from_secs(1));
        assert!(!clock.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_without_rearm() {
        let mut clock = Clock::new(Duration::from_secs(1));
        clock.arm();
        clock.tick().await;
        let second = timeout(Duration::from_secs(10), clock.tick()).await;
        assert!(second.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_tick() {
        let mut clock = Clock::new(Duration::from_secs(1));
        clock.arm();
        clock.stop();
        assert!(!clock.is_armed());
        let result = timeout(Duration::from_secs(5), clock.tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn double_arm_keeps_first_deadline() {
        let mut clock = Clock::new(Duration::from_secs(2));
        let start = Instant::now();
        clock.arm();
        tokio::time::advance(Duration::from_secs(1)).await;
        clock.arm();
        let at = clock.tick().await;
        assert!(at - start < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_tick_keeps_deadline() {
        let mut clock = Clock::new(Duration::from_secs(2));
        clock.arm();
        let early = timeout(Duration::from_secs(1), clock.tick()).await;
        assert!(early.is_err());
        assert!(clock.is_armed());
        let late = timeout(Duration::from_secs(2), clock.tick()).await;
        assert!(late.is_ok());
    }
}

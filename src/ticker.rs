use std::time::{Duration, Instant};

pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
}

#[derive(Debug)]
pub struct IntervalTicker {
    interval: Duration,
    last_tick: Instant,
    running: bool,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        IntervalTicker {
            interval,
            last_tick: Instant::now(),
            running: false,
        }
    }

    pub fn due(&mut self) -> bool {
        if !self.running || self.last_tick.elapsed() < self.interval {
            return false;
        }
        self.last_tick = Instant::now();
        true
    }

    // How long input polling may block before the next tick is due.
    pub fn timeout(&self) -> Duration {
        if !self.running {
            return self.interval;
        }
        self.interval.saturating_sub(self.last_tick.elapsed())
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        self.last_tick = Instant::now();
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct ManualTicker {
        pub(crate) running: bool,
        pub(crate) starts: usize,
        pub(crate) stops: usize,
    }

    impl TickSource for ManualTicker {
        fn start(&mut self) {
            self.running = true;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.running = false;
            self.stops += 1;
        }
    }

    #[test]
    fn test_stopped_until_started() {
        let mut ticker = IntervalTicker::new(Duration::ZERO);
        assert!(!ticker.running);
        assert!(!ticker.due());

        ticker.start();
        assert!(ticker.running);
        assert!(ticker.due());
    }

    #[test]
    fn test_not_due_before_interval() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(3600));
        ticker.start();
        assert!(!ticker.due());
        assert!(ticker.timeout() <= Duration::from_secs(3600));
        assert!(ticker.timeout() > Duration::from_secs(3500));
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut ticker = IntervalTicker::new(Duration::ZERO);
        ticker.start();
        ticker.stop();
        assert!(!ticker.due());
        assert_eq!(ticker.timeout(), Duration::ZERO);
    }

    #[test]
    fn test_timeout_when_stopped_is_full_interval() {
        let ticker = IntervalTicker::new(Duration::from_millis(80));
        assert_eq!(ticker.timeout(), Duration::from_millis(80));
    }
}

use std::time::{Duration, Instant};

/// A payload that becomes available once its due time has passed.
///
/// Nothing runs on its own: the owner polls it from the event loop, so
/// dropping the owner (or calling [`Deferred::cancel`]) is enough to make
/// sure the work never happens.
#[derive(Debug)]
pub struct Deferred<T> {
    due: Instant,
    payload: Option<T>,
}

impl<T> Deferred<T> {
    pub fn schedule(now: Instant, delay: Duration, payload: T) -> Self {
        Self {
            due: now + delay,
            payload: Some(payload),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.payload.is_some()
    }

    /// Hands out the payload exactly once, on the first poll at or after the due time.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if now >= self.due {
            self.payload.take()
        } else {
            None
        }
    }

    /// Discards the payload; returns whether anything was still pending.
    pub fn cancel(&mut self) -> bool {
        self.payload.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_due() {
        let start = Instant::now();
        let mut task = Deferred::schedule(start, Duration::from_millis(300), 5);

        assert_eq!(task.poll(start), None);
        assert_eq!(task.poll(start + Duration::from_millis(299)), None);
        assert!(task.is_pending());
        assert_eq!(task.poll(start + Duration::from_millis(300)), Some(5));
        assert!(!task.is_pending());
        assert_eq!(task.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let start = Instant::now();
        let mut task = Deferred::schedule(start, Duration::ZERO, "pick");

        assert!(task.cancel());
        assert!(!task.cancel());
        assert_eq!(task.poll(start + Duration::from_secs(1)), None);
    }
}

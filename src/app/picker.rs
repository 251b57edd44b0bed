use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::color::{self, Swatch};

use super::bindings::Subscription;
use super::deferred::Deferred;

pub const DEFAULT_PICK_DELAY: Duration = Duration::from_millis(300);

/// The random colour picker widget.
///
/// Cycles between idle and picking: `pick_random` starts a cycle, and the
/// first `tick` after the delay confirms a colour and goes idle again.
pub struct ColorPicker {
    history: Vec<Swatch>,
    current: Option<Swatch>,
    pending: Option<Deferred<Vec<Swatch>>>,
    delay: Duration,
    rng: StdRng,
    _space_binding: Option<Subscription>,
}

impl ColorPicker {
    pub fn new(delay: Duration, rng: StdRng) -> Self {
        Self {
            history: Vec::new(),
            current: None,
            pending: None,
            delay,
            rng,
            _space_binding: None,
        }
    }

    /// Attaches the key binding that lives and dies with this widget.
    pub fn with_binding(mut self, subscription: Subscription) -> Self {
        self._space_binding = Some(subscription);
        self
    }

    /// Most recent first.
    pub fn history(&self) -> &[Swatch] {
        &self.history
    }

    pub fn current(&self) -> Option<Swatch> {
        self.current
    }

    pub fn is_picking(&self) -> bool {
        self.pending.as_ref().is_some_and(Deferred::is_pending)
    }

    /// Starts a pick cycle. Returns `false` (and changes nothing) if one is
    /// already running.
    pub fn pick_random(&mut self, now: Instant) -> bool {
        if self.is_picking() {
            debug!("pick ignored, already picking");
            return false;
        }

        let candidates = color::candidates(&self.history);
        debug!(candidates = candidates.len(), "pick started");
        self.current = None;
        self.pending = Some(Deferred::schedule(now, self.delay, candidates));
        true
    }

    /// Confirms the pending pick once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<Swatch> {
        let candidates = self.pending.as_mut()?.poll(now)?;
        self.pending = None;

        let Some(choice) = color::draw(&candidates, &mut self.rng) else {
            warn!("no candidate colours, pick abandoned");
            return None;
        };
        self.current = Some(choice);
        self.history.insert(0, choice);
        info!(colour = %choice, history = self.history.len(), "colour picked");
        Some(choice)
    }

    /// Empties the history. The current pick and any running cycle are untouched.
    pub fn reset_history(&mut self) {
        info!(cleared = self.history.len(), "history reset");
        self.history.clear();
    }

    /// Drops a running cycle so it can never land.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self
            .pending
            .take()
            .map(|mut task| task.cancel())
            .unwrap_or(false);
        if cancelled {
            debug!("pending pick cancelled");
        }
        cancelled
    }
}

impl Drop for ColorPicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn picker(seed: u64) -> ColorPicker {
        ColorPicker::new(DEFAULT_PICK_DELAY, StdRng::seed_from_u64(seed))
    }

    fn complete_pick(picker: &mut ColorPicker, now: Instant) -> Swatch {
        assert!(picker.pick_random(now));
        picker.tick(now + DEFAULT_PICK_DELAY).unwrap()
    }

    #[test]
    fn first_pick_goes_through_the_delay() {
        let mut picker = picker(3);
        let start = Instant::now();

        assert!(!picker.is_picking());
        assert!(picker.pick_random(start));
        assert!(picker.is_picking());
        assert_eq!(picker.current(), None);

        assert_eq!(picker.tick(start + Duration::from_millis(150)), None);
        assert!(picker.is_picking());
        assert!(picker.history().is_empty());

        let pick = picker.tick(start + DEFAULT_PICK_DELAY).unwrap();
        assert!(Swatch::ALL.contains(&pick));
        assert!(!picker.is_picking());
        assert_eq!(picker.current(), Some(pick));
        assert_eq!(picker.history(), &[pick]);
    }

    #[test]
    fn pick_while_picking_is_a_no_op() {
        let mut picker = picker(9);
        let start = Instant::now();
        complete_pick(&mut picker, start);

        let before_history = picker.history().to_vec();
        assert!(picker.pick_random(start + Duration::from_secs(1)));
        assert!(!picker.pick_random(start + Duration::from_secs(1) + Duration::from_millis(10)));

        assert!(picker.is_picking());
        assert_eq!(picker.current(), None);
        assert_eq!(picker.history(), before_history.as_slice());

        // The due time stays the one from the first request.
        let landed = picker.tick(start + Duration::from_secs(1) + DEFAULT_PICK_DELAY);
        assert!(landed.is_some());
        assert_eq!(picker.history().len(), 2);
    }

    #[test]
    fn latest_history_entry_is_current_after_every_cycle() {
        let mut picker = picker(11);
        let mut now = Instant::now();
        for _ in 0..50 {
            let pick = complete_pick(&mut picker, now);
            assert_eq!(picker.history()[0], pick);
            assert_eq!(picker.current(), Some(pick));
            now += Duration::from_secs(1);
        }
        assert_eq!(picker.history().len(), 50);
    }

    #[test]
    fn never_three_in_a_row() {
        for seed in 0..20 {
            let mut picker = picker(seed);
            let mut now = Instant::now();
            for _ in 0..100 {
                complete_pick(&mut picker, now);
                now += Duration::from_secs(1);
            }
            for run in picker.history().windows(3) {
                assert!(!(run[0] == run[1] && run[1] == run[2]), "{run:?}");
            }
        }
    }

    #[test]
    fn blue_blue_history_excludes_blue() {
        for seed in 0..100 {
            let mut picker = picker(seed);
            picker.history = vec![Swatch::Blue, Swatch::Blue];
            let pick = complete_pick(&mut picker, Instant::now());
            assert!([Swatch::Black, Swatch::Brown, Swatch::Pink].contains(&pick));
        }
    }

    #[test]
    fn reset_clears_history_only() {
        let mut picker = picker(5);
        let start = Instant::now();
        complete_pick(&mut picker, start);
        let last = complete_pick(&mut picker, start + Duration::from_secs(1));

        picker.reset_history();
        assert!(picker.history().is_empty());
        assert_eq!(picker.current(), Some(last));
        assert!(!picker.is_picking());

        picker.reset_history();
        assert!(picker.history().is_empty());
    }

    #[test]
    fn reset_during_cycle_keeps_cycle_running() {
        let mut picker = picker(5);
        let start = Instant::now();
        complete_pick(&mut picker, start);

        let later = start + Duration::from_secs(1);
        picker.pick_random(later);
        picker.reset_history();
        assert!(picker.is_picking());
        assert_eq!(picker.current(), None);

        let pick = picker.tick(later + DEFAULT_PICK_DELAY).unwrap();
        assert_eq!(picker.history(), &[pick]);
    }

    #[test]
    fn cancelled_cycle_never_lands() {
        let mut picker = picker(1);
        let start = Instant::now();
        picker.pick_random(start);

        assert!(picker.cancel());
        assert!(!picker.is_picking());
        assert_eq!(picker.tick(start + Duration::from_secs(2)), None);
        assert!(picker.history().is_empty());
        assert!(!picker.cancel());
    }
}

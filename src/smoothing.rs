//! Majority-vote smoothing over the last N frame verdicts.
//!
//! Each channel is voted independently. Undetermined frames keep their slot in
//! the window but abstain, and a channel only reads `true` with a strict
//! majority of `true` over `false` votes, so ties and empty windows fall back
//! to the non-alarming state.

use crate::classifier::RawVerdict;
use crate::constants::DEFAULT_SMOOTHING_WINDOW;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::VecDeque;

/// Majority result over the current window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SmoothedVerdict {
    pub elbow_raised: bool,
    pub angle_deviated: bool,
    pub shoulder_elevated: bool,
    /// Frames in the window that cast a vote
    pub determined_frames: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    yes: usize,
    no: usize,
}

impl Tally {
    fn vote(&mut self, value: Option<bool>) {
        match value {
            Some(true) => self.yes += 1,
            Some(false) => self.no += 1,
            None => {}
        }
    }

    fn majority(self) -> bool {
        self.yes > self.no
    }
}

/// Fixed-capacity window of recent verdicts
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    window_size: usize,
    buffer: VecDeque<RawVerdict>,
}

impl TemporalSmoother {
    /// # Panics
    ///
    /// Panics if `window_size` is 0.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size),
        }
    }

    /// Fallible constructor for sizes coming from configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `window_size` is 0.
    pub fn try_new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidInput("Smoothing window size must be greater than 0".to_string()));
        }
        Ok(Self::new(window_size))
    }

    /// Append a verdict, evicting the oldest once the window is full
    pub fn push(&mut self, verdict: RawVerdict) {
        if self.buffer.len() >= self.window_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(verdict);
    }

    /// Vote over whatever is buffered
    #[must_use]
    pub fn smoothed(&self) -> SmoothedVerdict {
        let mut raised = Tally::default();
        let mut deviated = Tally::default();
        let mut elevated = Tally::default();
        let mut determined_frames = 0;

        for facts in self.buffer.iter().filter_map(RawVerdict::facts) {
            determined_frames += 1;
            raised.vote(Some(facts.elbow_raised));
            deviated.vote(Some(facts.angle_deviated));
            elevated.vote(facts.shoulder_elevated);
        }

        SmoothedVerdict {
            elbow_raised: raised.majority(),
            angle_deviated: deviated.majority(),
            shoulder_elevated: elevated.majority(),
            determined_frames,
        }
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}

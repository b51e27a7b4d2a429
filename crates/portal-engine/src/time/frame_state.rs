/// Frame timing snapshot produced once per scheduler tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Clock reading for this frame, in seconds since the clock started.
    pub elapsed: f64,

    /// Seconds since the previous frame's reading.
    pub delta: f64,

    /// Monotonic frame counter, 0 for the first frame.
    pub frame_index: u64,
}

/// How the very first delta is derived.
///
/// `previous_time` starts at 0, so by default the first delta equals the first
/// clock reading and includes whatever setup time passed before the loop began.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FirstFrameDelta {
    /// First delta = first elapsed reading.
    #[default]
    Elapsed,
    /// First delta is forced to 0; later frames are unaffected.
    Zero,
}

/// Per-frame delta bookkeeping.
///
/// Invariant: after `advance(t)` returns, `previous_time() == t`.
#[derive(Debug, Clone)]
pub struct FrameState {
    previous_time: f64,
    frame_index: u64,
    first_frame: FirstFrameDelta,
}

impl FrameState {
    pub fn new(first_frame: FirstFrameDelta) -> Self {
        Self {
            previous_time: 0.0,
            frame_index: 0,
            first_frame,
        }
    }

    /// Elapsed time recorded at the end of the last frame (0 before the first).
    #[inline]
    pub fn previous_time(&self) -> f64 {
        self.previous_time
    }

    /// Number of frames advanced so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Records `elapsed` as this frame's reading and returns the derived timing.
    pub fn advance(&mut self, elapsed: f64) -> FrameTime {
        let first = self.frame_index == 0;

        // A backwards reading yields a zero delta rather than a negative one.
        let mut delta = (elapsed - self.previous_time).max(0.0);
        if first && self.first_frame == FirstFrameDelta::Zero {
            delta = 0.0;
        }

        self.previous_time = elapsed;

        let ft = FrameTime {
            elapsed,
            delta,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new(FirstFrameDelta::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_equals_first_reading() {
        let mut state = FrameState::default();
        let ft = state.advance(2.5);
        assert_eq!(ft.delta, 2.5);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(state.previous_time(), 2.5);
    }

    #[test]
    fn zero_policy_only_affects_first_frame() {
        let mut state = FrameState::new(FirstFrameDelta::Zero);
        assert_eq!(state.advance(2.5).delta, 0.0);
        assert_eq!(state.advance(3.0).delta, 0.5);
    }

    #[test]
    fn previous_time_tracks_each_reading() {
        let readings = [0.0, 0.016, 0.033, 0.05, 0.05, 1.0];
        let mut state = FrameState::default();
        let mut prev = 0.0;
        for (i, t) in readings.iter().copied().enumerate() {
            let ft = state.advance(t);
            assert_eq!(ft.delta, t - prev);
            assert!(ft.delta >= 0.0);
            assert_eq!(ft.frame_index, i as u64);
            assert_eq!(state.previous_time(), t);
            prev = t;
        }
        assert_eq!(state.frames(), readings.len() as u64);
    }

    #[test]
    fn backwards_reading_clamps_delta_to_zero() {
        let mut state = FrameState::default();
        state.advance(1.0);
        let ft = state.advance(0.5);
        assert_eq!(ft.delta, 0.0);
        assert_eq!(state.previous_time(), 0.5);
    }
}

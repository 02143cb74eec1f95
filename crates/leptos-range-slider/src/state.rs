//! Range Selector State
//!
//! Two-handle interval over `[min, max]` quantized to `step`. The committed
//! interval is what the owner filters by; the live interval follows the
//! pointer during a drag and becomes committed on release (or on every
//! move in `Continuous` mode). Handles never cross:
//! `min <= lo <= hi - step` and `lo + step <= hi <= max`.

/// Which handle is being moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thumb {
    Low,
    High,
}

/// When a drag becomes the committed value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommitMode {
    #[default]
    OnRelease,
    Continuous,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeSelector {
    min: u32,
    max: u32,
    step: u32,
    committed: (u32, u32),
    live: (u32, u32),
    active: Option<Thumb>,
    mode: CommitMode,
}

impl RangeSelector {
    /// Bounds are normalized: a zero step becomes 1, reversed bounds are
    /// swapped and a span shorter than one step is widened to one step.
    pub fn new(min: u32, max: u32, step: u32, mode: CommitMode) -> Self {
        let step = step.max(1);
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        let max = if max - min < step { min.saturating_add(step) } else { max };
        Self {
            min,
            max,
            step,
            committed: (min, max),
            live: (min, max),
            active: None,
            mode,
        }
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    pub fn committed(&self) -> (u32, u32) {
        self.committed
    }

    /// What the handles show right now
    pub fn live(&self) -> (u32, u32) {
        self.live
    }

    pub fn active(&self) -> Option<Thumb> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Adopt a committed value pushed down by the owner (filter cleared,
    /// restored from state). Ignored for the live interval mid-drag.
    pub fn sync_committed(&mut self, lo: u32, hi: u32) {
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
        let hi = self.snap(hi).max(self.min + self.step);
        let lo = self.snap(lo).min(hi - self.step);
        self.committed = (lo, hi);
        if self.active.is_none() {
            self.live = self.committed;
        }
    }

    pub fn begin_drag(&mut self, thumb: Thumb) {
        self.active = Some(thumb);
    }

    /// Move the active handle. Returns the newly committed interval when
    /// the commit mode is continuous and the value changed.
    pub fn drag_to(&mut self, value: u32) -> Option<(u32, u32)> {
        let thumb = self.active?;
        self.move_thumb(thumb, value);
        match self.mode {
            CommitMode::Continuous => self.commit(),
            CommitMode::OnRelease => None,
        }
    }

    /// End the gesture, committing the live interval if it moved
    pub fn release(&mut self) -> Option<(u32, u32)> {
        self.active.take()?;
        self.commit()
    }

    /// Click on the track: move whichever handle is numerically closer and
    /// commit immediately. Equal distance moves the low handle when the
    /// click is left of it, otherwise the high handle.
    pub fn click_track(&mut self, value: u32) -> Option<(u32, u32)> {
        let (lo, hi) = self.live;
        let thumb = if value.abs_diff(lo) < value.abs_diff(hi) || value < lo {
            Thumb::Low
        } else {
            Thumb::High
        };
        self.move_thumb(thumb, value);
        self.commit()
    }

    /// Position of `value` along the track, 0.0 to 100.0
    pub fn percent(&self, value: u32) -> f64 {
        let span = f64::from(self.max - self.min);
        let offset = f64::from(value.clamp(self.min, self.max) - self.min);
        offset / span * 100.0
    }

    /// Value under a track position given as a 0.0 to 1.0 ratio
    pub fn value_at_ratio(&self, ratio: f64) -> u32 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let span = f64::from(self.max - self.min);
        self.min + (span * ratio).round() as u32
    }

    fn move_thumb(&mut self, thumb: Thumb, value: u32) {
        let value = self.snap(value);
        let (lo, hi) = self.live;
        self.live = match thumb {
            Thumb::Low => (value.min(hi - self.step), hi),
            Thumb::High => (lo, value.max(lo + self.step).min(self.max)),
        };
    }

    fn commit(&mut self) -> Option<(u32, u32)> {
        if self.live == self.committed {
            return None;
        }
        self.committed = self.live;
        Some(self.committed)
    }

    /// Clamp into bounds and round to the nearest step from `min`
    fn snap(&self, value: u32) -> u32 {
        let value = value.clamp(self.min, self.max);
        let offset = value - self.min;
        let steps = (offset + self.step / 2) / self.step;
        self.min
            .saturating_add(steps.saturating_mul(self.step))
            .min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_selector(mode: CommitMode) -> RangeSelector {
        RangeSelector::new(0, 100_000, 1_000, mode)
    }

    #[test]
    fn test_low_handle_clamps_against_high() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.sync_committed(10_000, 50_000);
        s.begin_drag(Thumb::Low);
        s.drag_to(80_000);
        assert_eq!(s.live(), (49_000, 50_000));
        assert_eq!(s.release(), Some((49_000, 50_000)));
    }

    #[test]
    fn test_high_handle_clamps_against_low() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.sync_committed(10_000, 50_000);
        s.begin_drag(Thumb::High);
        s.drag_to(0);
        assert_eq!(s.live(), (10_000, 11_000));
    }

    #[test]
    fn test_on_release_defers_commit() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.begin_drag(Thumb::Low);
        assert_eq!(s.drag_to(20_400), None);
        assert_eq!(s.live(), (20_000, 100_000));
        assert_eq!(s.committed(), (0, 100_000));
        assert_eq!(s.release(), Some((20_000, 100_000)));
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_continuous_commits_each_move() {
        let mut s = make_selector(CommitMode::Continuous);
        s.begin_drag(Thumb::High);
        assert_eq!(s.drag_to(70_000), Some((0, 70_000)));
        assert_eq!(s.drag_to(70_200), None);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn test_drag_without_active_thumb_is_ignored() {
        let mut s = make_selector(CommitMode::Continuous);
        assert_eq!(s.drag_to(5_000), None);
        assert_eq!(s.live(), (0, 100_000));
        assert_eq!(s.release(), None);
    }

    #[test]
    fn test_only_an_active_drag_holds_the_pointer() {
        let mut s = make_selector(CommitMode::OnRelease);
        assert!(!s.is_dragging());
        s.click_track(40_000);
        assert!(!s.is_dragging());
        s.begin_drag(Thumb::High);
        assert!(s.is_dragging());
        s.drag_to(60_000);
        assert!(s.is_dragging());
        s.release();
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_click_track_moves_nearest_handle() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.sync_committed(20_000, 80_000);
        assert_eq!(s.click_track(30_000), Some((30_000, 80_000)));
        assert_eq!(s.click_track(75_000), Some((30_000, 75_000)));
        assert_eq!(s.click_track(5_000), Some((5_000, 75_000)));
    }

    #[test]
    fn test_sync_ignored_for_live_while_dragging() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.begin_drag(Thumb::Low);
        s.drag_to(40_000);
        s.sync_committed(0, 100_000);
        assert_eq!(s.live(), (40_000, 100_000));
        assert_eq!(s.release(), Some((40_000, 100_000)));
    }

    #[test]
    fn test_sync_normalizes_outside_values() {
        let mut s = make_selector(CommitMode::OnRelease);
        s.sync_committed(90_000, 20_000);
        assert_eq!(s.committed(), (20_000, 90_000));
        s.sync_committed(200_000, 200_000);
        assert_eq!(s.committed(), (99_000, 100_000));
    }

    #[test]
    fn test_degenerate_bounds_normalized() {
        let s = RangeSelector::new(500, 100, 0, CommitMode::OnRelease);
        assert_eq!(s.bounds(), (100, 500));
        assert_eq!(s.step(), 1);
        let s = RangeSelector::new(0, 10, 50, CommitMode::OnRelease);
        assert_eq!(s.bounds(), (0, 50));
    }

    #[test]
    fn test_percent_and_ratio() {
        let s = make_selector(CommitMode::OnRelease);
        assert_eq!(s.percent(25_000), 25.0);
        assert_eq!(s.percent(500_000), 100.0);
        assert_eq!(s.value_at_ratio(0.5), 50_000);
        assert_eq!(s.value_at_ratio(-1.0), 0);
    }
}

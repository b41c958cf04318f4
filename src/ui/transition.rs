//! Tick-driven reveal for the transition box.

pub const BOX_FRAMES: u8 = 4;

/// Moves one frame per tick toward fully shown or fully hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxTransition {
    frame: u8,
}

impl BoxTransition {
    pub fn step(&mut self, visible: bool) {
        if visible {
            self.frame = (self.frame + 1).min(BOX_FRAMES);
        } else {
            self.frame = self.frame.saturating_sub(1);
        }
    }

    pub fn frame(self) -> u8 {
        self.frame
    }

    /// Share of the box currently revealed, `0.0..=1.0`.
    pub fn ratio(self) -> f64 {
        f64::from(self.frame) / f64::from(BOX_FRAMES)
    }

    pub fn is_settled(self, visible: bool) -> bool {
        if visible {
            self.frame == BOX_FRAMES
        } else {
            self.frame == 0
        }
    }
}

//! 404 "clear the path" mini-game: a one-way timed state machine.
//!
//! `Intact -> Injecting -> Broken`. Clicking only starts the sequence; the
//! second step is never cancelled. `Broken` is terminal until the page
//! reloads.
//!
//! The 404 component arms a one-shot timer that calls
//! [`RockBreaker::complete`] and animates the bar in CSS. The clock API
//! ([`RockBreaker::advance`], [`RockBreaker::progress`]) answers the same
//! questions from explicit timestamps, which is how the timing rules are
//! tested without a browser.

#[cfg(test)]
#[path = "rock_break_test.rs"]
mod rock_break_test;

/// Time the agent takes to split the rock.
pub const BREAK_DELAY_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RockPhase {
    #[default]
    Intact,
    Injecting,
    Broken,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RockBreaker {
    pub phase: RockPhase,
    injected_at_ms: Option<f64>,
}

impl RockBreaker {
    /// Handle a click on the rock. Returns `true` when injection started and
    /// the caller should arm the break timer.
    pub fn click(&mut self, now_ms: f64) -> bool {
        if self.phase != RockPhase::Intact {
            return false;
        }
        self.phase = RockPhase::Injecting;
        self.injected_at_ms = Some(now_ms);
        true
    }

    /// Apply the clock: break once the full delay has elapsed.
    pub fn advance(&mut self, now_ms: f64) {
        if self.progress(now_ms) >= 1.0 {
            self.complete();
        }
    }

    /// Timer callback: finish the injection unconditionally.
    pub fn complete(&mut self) {
        if self.phase == RockPhase::Injecting {
            self.phase = RockPhase::Broken;
        }
    }

    /// Injection progress in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now_ms: f64) -> f64 {
        match (self.phase, self.injected_at_ms) {
            (RockPhase::Intact, _) | (RockPhase::Injecting, None) => 0.0,
            (RockPhase::Injecting, Some(start)) => ((now_ms - start) / BREAK_DELAY_MS as f64).clamp(0.0, 1.0),
            (RockPhase::Broken, _) => 1.0,
        }
    }
}

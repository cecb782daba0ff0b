/// Where a frame's draws land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// The offscreen color texture sampled by the post pass.
    Offscreen,
    /// The swap chain surface.
    Surface,
}

/// Instructions for one processed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    pub target: RenderTarget,
    pub present: bool,
}

impl FramePlan {
    /// Single-pass rendering: straight to the surface, presented every frame.
    pub fn direct() -> Self {
        Self {
            target: RenderTarget::Surface,
            present: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    FirstPass,
    SecondPass,
}

/// State machine for the two-pass greyscale path.
///
/// States alternate strictly every processed frame: `FirstPass` renders the
/// full scene into the offscreen target without presenting, `SecondPass`
/// draws the post-process quad to the surface and presents.
#[derive(Debug)]
pub struct TwoPassSequencer {
    state: PassState,
}

impl TwoPassSequencer {
    pub fn new() -> Self {
        Self {
            state: PassState::FirstPass,
        }
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// Plans the current frame and advances to the next state.
    pub fn plan(&mut self) -> FramePlan {
        match self.state {
            PassState::FirstPass => {
                self.state = PassState::SecondPass;
                FramePlan {
                    target: RenderTarget::Offscreen,
                    present: false,
                }
            }
            PassState::SecondPass => {
                self.state = PassState::FirstPass;
                FramePlan {
                    target: RenderTarget::Surface,
                    present: true,
                }
            }
        }
    }

    /// Returns to `FirstPass`, discarding any half-finished frame pair. Used
    /// when the offscreen target is recreated or the pass is re-enabled so a
    /// stale image is never presented.
    pub fn reset(&mut self) {
        self.state = PassState::FirstPass;
    }
}

impl Default for TwoPassSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_first_pass() {
        assert_eq!(TwoPassSequencer::new().state(), PassState::FirstPass);
    }

    #[test]
    fn first_iteration_renders_offscreen_without_presenting() {
        let mut sequencer = TwoPassSequencer::new();
        let plan = sequencer.plan();
        assert_eq!(plan.target, RenderTarget::Offscreen);
        assert!(!plan.present);
        assert_eq!(sequencer.state(), PassState::SecondPass);
    }

    #[test]
    fn second_iteration_presents_exactly_once() {
        let mut sequencer = TwoPassSequencer::new();
        sequencer.plan();
        let plan = sequencer.plan();
        assert_eq!(plan.target, RenderTarget::Surface);
        assert!(plan.present);
        assert_eq!(sequencer.state(), PassState::FirstPass);
    }

    #[test]
    fn presents_half_of_the_processed_frames() {
        let mut sequencer = TwoPassSequencer::new();
        let presents = (0..10).filter(|_| sequencer.plan().present).count();
        assert_eq!(presents, 5);
    }

    #[test]
    fn reset_discards_the_pending_second_pass() {
        let mut sequencer = TwoPassSequencer::new();
        sequencer.plan();
        sequencer.reset();
        assert_eq!(sequencer.state(), PassState::FirstPass);
        assert!(!sequencer.plan().present);
    }

    #[test]
    fn direct_plan_always_presents_to_the_surface() {
        let plan = FramePlan::direct();
        assert_eq!(plan.target, RenderTarget::Surface);
        assert!(plan.present);
    }
}

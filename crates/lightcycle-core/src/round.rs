/// Per-tick collision tally for the two seats. Folded into the match score
/// when any seat collided.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub collisions: [u32; 2],
}

impl RoundOutcome {
    /// Any collision on either seat ends the round.
    pub fn round_over(&self) -> bool {
        self.collisions.iter().any(|&c| c > 0)
    }

    /// Score awarded to each seat for this outcome. A crash awards the
    /// opponent one point; a simultaneous crash awards nobody anything.
    pub fn score_deltas(&self) -> [u32; 2] {
        match (self.collisions[0] > 0, self.collisions[1] > 0) {
            (true, true) | (false, false) => [0, 0],
            (true, false) => [0, 1],
            (false, true) => [1, 0],
        }
    }
}

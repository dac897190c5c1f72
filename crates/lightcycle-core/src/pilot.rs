//! Automated players. A pilot observes the pair and emits commands for its
//! own seat; the router feeds those commands into the same stream human keys
//! use, so pilots get no extra abilities.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Direction;
use crate::input::Command;
use crate::player::PlayerPair;

/// One steer attempt every this-many ticks on average.
pub const STEER_ODDS: u32 = 15;

/// Automated intent source for one seat. Called at most once per tick with a
/// shared borrow of the pair, so pilots can observe but never mutate.
pub trait Pilot {
    fn commands(&mut self, players: &PlayerPair, seat: usize) -> Vec<Command>;
}

fn random_steer(rng: &mut StdRng) -> Vec<Command> {
    if rng.random_range(0..STEER_ODDS) != 0 {
        return Vec::new();
    }
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    vec![Command::Steer(direction)]
}

/// Twitchy baseline opponent: roughly once every 15 ticks it steers in a
/// uniformly random direction, reversals included (the player rejects those).
pub struct RandomPilot {
    rng: StdRng,
}

impl RandomPilot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for RandomPilot {
    fn commands(&mut self, _players: &PlayerPair, _seat: usize) -> Vec<Command> {
        random_steer(&mut self.rng)
    }
}

/// Like [`RandomPilot`], but reports both players' positions each tick.
/// Useful when watching a match from the log stream.
pub struct ScoutPilot {
    rng: StdRng,
}

impl ScoutPilot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ScoutPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for ScoutPilot {
    fn commands(&mut self, players: &PlayerPair, seat: usize) -> Vec<Command> {
        let me = &players[seat];
        let them = &players[1 - seat];
        tracing::info!(
            seat,
            own_x = me.x,
            own_y = me.y,
            other_x = them.x,
            other_y = them.y,
            "scout report"
        );
        random_steer(&mut self.rng)
    }
}

/// Look up a bundled pilot by its configuration name.
pub fn pilot_by_name(name: &str) -> Option<Box<dyn Pilot>> {
    match name {
        "random" => Some(Box::new(RandomPilot::new())),
        "scout" => Some(Box::new(ScoutPilot::new())),
        _ => None,
    }
}

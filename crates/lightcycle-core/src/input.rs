//! Raw-event routing: key scoping per seat, pilot overrides, quit handling.

use crate::Direction;
use crate::player::PlayerPair;

/// Physical keys the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    RightShift,
    Escape,
}

/// What a frontend reports each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    Quit,
}

/// A decoded control intent for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Boost,
}

/// One item of the merged, seat-scoped control stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    Quit,
    Intent { seat: usize, command: Command },
}

/// One seat's key set: four directions plus boost. The two default sets are
/// disjoint, so every key decodes for at most one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub boost: Key,
}

impl KeyBindings {
    pub fn wasd() -> Self {
        Self {
            up: Key::W,
            down: Key::S,
            left: Key::A,
            right: Key::D,
            boost: Key::Tab,
        }
    }

    pub fn arrows() -> Self {
        Self {
            up: Key::ArrowUp,
            down: Key::ArrowDown,
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            boost: Key::RightShift,
        }
    }

    pub fn decode(&self, key: Key) -> Option<Command> {
        if key == self.up {
            Some(Command::Steer(Direction::North))
        } else if key == self.down {
            Some(Command::Steer(Direction::South))
        } else if key == self.left {
            Some(Command::Steer(Direction::West))
        } else if key == self.right {
            Some(Command::Steer(Direction::East))
        } else if key == self.boost {
            Some(Command::Boost)
        } else {
            None
        }
    }
}

/// Merges raw frontend events and pilot output into one ordered stream.
///
/// Human keys for a piloted seat are discarded; that seat's pilot is asked
/// for commands instead, appended after all human intents. Quit events pass
/// through unconditionally.
pub struct InputRouter {
    bindings: [KeyBindings; 2],
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            bindings: [KeyBindings::wasd(), KeyBindings::arrows()],
        }
    }

    pub fn with_bindings(bindings: [KeyBindings; 2]) -> Self {
        Self { bindings }
    }

    pub fn route(&mut self, raw: &[InputEvent], players: &mut PlayerPair) -> Vec<Routed> {
        let mut routed = Vec::new();

        for event in raw {
            match event {
                InputEvent::Quit => routed.push(Routed::Quit),
                InputEvent::KeyDown(key) => {
                    let mut bound = false;
                    for (seat, bindings) in self.bindings.iter().enumerate() {
                        if let Some(command) = bindings.decode(*key) {
                            bound = true;
                            if players[seat].pilot.is_none() {
                                routed.push(Routed::Intent { seat, command });
                            }
                        }
                    }
                    if !bound {
                        tracing::debug!(?key, "ignoring unbound key");
                    }
                }
            }
        }

        // Pilots read the pair immutably, so take each one out of its seat
        // for the duration of the call.
        for seat in 0..2 {
            if let Some(mut pilot) = players[seat].pilot.take() {
                for command in pilot.commands(players, seat) {
                    routed.push(Routed::Intent { seat, command });
                }
                players[seat].pilot = Some(pilot);
            }
        }

        routed
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

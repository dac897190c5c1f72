use std::fmt;

use crate::config::GameConfig;
use crate::frontend::Color;
use crate::pilot::Pilot;
use crate::{Direction, PlayerFactory, Rect};

/// Boost doubles the per-tick step while active.
pub const BOOST_MULTIPLIER: f32 = 2.0;
/// A boost expires this many game-clock seconds after activation.
pub const BOOST_DURATION_SECS: f32 = 0.5;
/// Hitbox edge length; the hitbox is centered on the player position.
pub const HITBOX_SIZE: f32 = 2.0;
/// Boost activations available per round unless overridden.
pub const DEFAULT_BOOSTS: u32 = 3;

/// The two players of a match, indexed by seat.
pub type PlayerPair = [Player; 2];

/// One trail-leaving cycle.
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Base step per tick; constant after construction.
    pub speed: f32,
    pub color: Color,
    /// 1 normally, `BOOST_MULTIPLIER` while a boost is active.
    pub boost_multiplier: f32,
    /// Decremented on each activation, never replenished within a round.
    pub boosts_left: u32,
    /// Game-clock seconds of the most recent boost activation.
    pub boost_started_at: f32,
    pub hitbox: Rect,
    /// Past hitboxes, appended once per advance; an obstacle for both players.
    pub trail: Vec<Rect>,
    /// Automated intent source; `None` means human-controlled.
    pub pilot: Option<Box<dyn Pilot>>,
}

impl Player {
    pub fn new(x: f32, y: f32, direction: Direction, speed: f32, color: Color) -> Self {
        Self {
            x,
            y,
            direction,
            speed,
            color,
            boost_multiplier: 1.0,
            boosts_left: DEFAULT_BOOSTS,
            boost_started_at: 0.0,
            hitbox: Rect::centered(x, y, HITBOX_SIZE),
            trail: Vec::new(),
            pilot: None,
        }
    }

    pub fn with_boosts(mut self, boosts: u32) -> Self {
        self.boosts_left = boosts;
        self
    }

    pub fn with_pilot(mut self, pilot: Box<dyn Pilot>) -> Self {
        self.pilot = Some(pilot);
        self
    }

    /// Purely kinematic step: append the pre-move hitbox to the trail, move
    /// by `direction * speed * boost_multiplier`, recompute the hitbox. No
    /// bounds checking happens here.
    pub fn advance(&mut self) {
        self.trail.push(self.hitbox);
        let (dx, dy) = self.direction.delta();
        let step = self.speed * self.boost_multiplier;
        self.x += dx * step;
        self.y += dy * step;
        self.hitbox = Rect::centered(self.x, self.y, HITBOX_SIZE);
    }

    /// Start a boost. Silently ignored once no activations remain.
    pub fn activate_boost(&mut self, now: f32) {
        if self.boosts_left == 0 {
            return;
        }
        self.boosts_left -= 1;
        self.boost_multiplier = BOOST_MULTIPLIER;
        self.boost_started_at = now;
    }

    /// Reset the multiplier once the boost window has elapsed. Runs once per
    /// tick for every player, independent of input.
    pub fn expire_boost_if_due(&mut self, now: f32) {
        if now - self.boost_started_at >= BOOST_DURATION_SECS {
            self.boost_multiplier = 1.0;
        }
    }

    /// Change heading. A request for the exact reverse of the current
    /// heading is silently ignored; the other three directions are accepted.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("direction", &self.direction)
            .field("speed", &self.speed)
            .field("boost_multiplier", &self.boost_multiplier)
            .field("boosts_left", &self.boosts_left)
            .field("trail_len", &self.trail.len())
            .field("piloted", &self.pilot.is_some())
            .finish()
    }
}

/// Default symmetric two-player layout: both players spawn on the horizontal
/// midline of the playfield, facing each other, cyan vs magenta.
pub fn default_players(config: &GameConfig) -> PlayerFactory {
    let width = config.arena_width;
    let offset = (config.arena_height - config.arena_width).abs();
    let mid_y = (config.arena_height + offset) / 2.0;
    let margin = config.spawn_margin;
    let speed = config.base_speed;
    let boosts = config.boosts_per_round;

    Box::new(move || {
        [
            Player::new(margin, mid_y, Direction::East, speed, Color::rgb(0, 255, 255))
                .with_boosts(boosts),
            Player::new(
                width - margin,
                mid_y,
                Direction::West,
                speed,
                Color::rgb(255, 0, 255),
            )
            .with_boosts(boosts),
        ]
    })
}

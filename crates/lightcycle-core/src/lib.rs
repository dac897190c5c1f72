pub mod arena;
pub mod collision;
pub mod config;
pub mod frontend;
pub mod input;
pub mod pilot;
pub mod player;
pub mod round;

use arena::Arena;
use config::GameConfig;
use frontend::{Color, Frontend};
use input::{Command, InputEvent, InputRouter, Routed};
use player::PlayerPair;
use round::RoundOutcome;

/// Cardinal heading on the playfield. The y axis grows downward, matching
/// screen coordinates: North points toward the score header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector for this heading.
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::North => (0.0, -1.0),
            Direction::South => (0.0, 1.0),
            Direction::East => (1.0, 0.0),
            Direction::West => (-1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Axis-aligned rectangle in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of the given edge length centered on (cx, cy).
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        Self::new(cx - size / 2.0, cy - size / 2.0, size, size)
    }

    /// Strict overlap test: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Produces a fresh player pair at match start and after every round-ending
/// collision.
pub type PlayerFactory = Box<dyn Fn() -> PlayerPair>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Stop,
}

const WALL_COLOR: Color = Color::rgb(42, 42, 42);
const SCORE_COLOR: Color = Color::rgb(255, 153, 51);

/// A light-cycle match: one arena, one player pair recreated each round, and
/// scores that persist for the lifetime of the match.
pub struct Game {
    config: GameConfig,
    arena: Arena,
    players: PlayerPair,
    spawn: PlayerFactory,
    router: InputRouter,
    scores: [u32; 2],
    clock: f32,
    state: LoopState,
}

impl Game {
    /// Build a match with the default symmetric player layout.
    pub fn new(config: GameConfig) -> Self {
        let spawn = player::default_players(&config);
        Self::with_factory(config, spawn)
    }

    pub fn with_factory(config: GameConfig, spawn: PlayerFactory) -> Self {
        let arena = Arena::new(
            config.arena_width,
            config.arena_height,
            config.wall_thickness,
        );
        let players = spawn();
        Self {
            config,
            arena,
            players,
            spawn,
            router: InputRouter::new(),
            scores: [0, 0],
            clock: 0.0,
            state: LoopState::Running,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn players(&self) -> &PlayerPair {
        &self.players
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Game-clock seconds since the match started.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Drive the match until a quit event arrives, then shut the frontend
    /// down and return control to the caller.
    pub fn run(&mut self, frontend: &mut dyn Frontend) {
        while self.state == LoopState::Running {
            self.tick(frontend);
        }
        frontend.shutdown();
    }

    /// One frame of the fixed tick sequence: resolve collisions and scoring,
    /// draw and advance, then poll and route input. Input read here takes
    /// effect on the next tick.
    pub fn tick(&mut self, frontend: &mut dyn Frontend) {
        self.clock += 1.0 / self.config.tick_rate;
        frontend.clear();
        self.resolve_collisions();
        self.draw_and_advance(frontend);
        let events = frontend.poll_events();
        if self.route_and_apply(&events) == LoopSignal::Stop {
            self.state = LoopState::Stopped;
        }
        frontend.present();
        frontend.wait_for_frame();
    }

    fn resolve_collisions(&mut self) {
        for player in &mut self.players {
            player.expire_boost_if_due(self.clock);
        }

        let mut outcome = RoundOutcome::default();
        for seat in 0..2 {
            let hitbox = self.players[seat].hitbox;
            if collision::hits_wall(&hitbox, self.arena.walls()) {
                outcome.collisions[seat] += 1;
            }
            // A player's newest trail entry is its own pre-move hitbox from
            // the previous advance; skip it so a player never collides with
            // the cell it just vacated.
            let own = collision::hits_trail(&hitbox, &self.players[seat].trail, 1);
            let other = collision::hits_trail(&hitbox, &self.players[1 - seat].trail, 0);
            if own || other {
                outcome.collisions[seat] += 1;
            }
        }

        if outcome.round_over() {
            let deltas = outcome.score_deltas();
            for seat in 0..2 {
                self.scores[seat] += deltas[seat];
            }
            tracing::info!(
                p1 = self.scores[0],
                p2 = self.scores[1],
                "round over, respawning players"
            );
            self.players = (self.spawn)();
        }
    }

    fn draw_and_advance(&mut self, frontend: &mut dyn Frontend) {
        for player in &mut self.players {
            player.advance();
            frontend.draw_rect(player.color, player.hitbox);
            for segment in &player.trail {
                frontend.draw_rect(player.color, *segment);
            }
        }

        for wall in self.arena.walls() {
            frontend.draw_rect(WALL_COLOR, *wall);
        }

        let score_text = format!("{} : {}", self.scores[0], self.scores[1]);
        let anchor = (
            self.config.arena_width / 2.0,
            self.arena.header_offset() / 2.0,
        );
        frontend.draw_text(&score_text, SCORE_COLOR, anchor);
    }

    /// Apply the merged control stream in order. Later intents for the same
    /// seat override earlier ones; a quit anywhere halts immediately.
    fn route_and_apply(&mut self, raw: &[InputEvent]) -> LoopSignal {
        for item in self.router.route(raw, &mut self.players) {
            match item {
                Routed::Quit => return LoopSignal::Stop,
                Routed::Intent { seat, command } => match command {
                    Command::Steer(direction) => self.players[seat].steer(direction),
                    Command::Boost => self.players[seat].activate_boost(self.clock),
                },
            }
        }
        LoopSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{HeadlessFrontend, RecordingFrontend};
    use crate::input::Key;
    use crate::pilot::Pilot;
    use crate::player::{HITBOX_SIZE, Player};

    fn place_player(x: f32, y: f32, direction: Direction) -> Player {
        Player::new(x, y, direction, 2.0, Color::rgb(0, 255, 255))
    }

    fn game_with_players(p1: (f32, f32, Direction), p2: (f32, f32, Direction)) -> Game {
        Game::with_factory(
            GameConfig::default(),
            Box::new(move || {
                [
                    place_player(p1.0, p1.1, p1.2),
                    place_player(p2.0, p2.1, p2.2),
                ]
            }),
        )
    }

    struct HoldNorth;

    impl Pilot for HoldNorth {
        fn commands(&mut self, _players: &PlayerPair, _seat: usize) -> Vec<Command> {
            vec![Command::Steer(Direction::North)]
        }
    }

    #[test]
    fn direction_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let touching = Rect::new(2.0, 0.0, 2.0, 2.0);
        let overlapping = Rect::new(1.5, 0.5, 2.0, 2.0);
        assert!(!a.overlaps(&touching), "shared edge must not collide");
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
    }

    #[test]
    fn reference_tick_moves_player_and_records_trail() {
        let mut game = game_with_players(
            (50.0, 330.0, Direction::East),
            (550.0, 360.0, Direction::West),
        );
        let mut frontend = RecordingFrontend::new();
        game.tick(&mut frontend);

        let p1 = &game.players[0];
        assert!((p1.x - 52.0).abs() < f32::EPSILON);
        assert!((p1.y - 330.0).abs() < f32::EPSILON);
        assert_eq!(p1.trail.len(), 1);
        assert_eq!(p1.trail[0], Rect::centered(50.0, 330.0, HITBOX_SIZE));
    }

    #[test]
    fn tick_draws_players_walls_and_score() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (400.0, 360.0, Direction::West),
        );
        let mut frontend = RecordingFrontend::new();
        game.tick(&mut frontend);

        // 2 hitboxes + 2 single-entry trails + 4 walls.
        assert_eq!(frontend.rects.len(), 8);
        assert_eq!(frontend.texts.len(), 1);
        assert_eq!(frontend.texts[0].0, "0 : 0");
        assert_eq!(frontend.presents, 1);
    }

    #[test]
    fn wall_collision_scores_opponent_and_resets() {
        let mut game = game_with_players(
            (590.0, 360.0, Direction::East),
            (300.0, 360.0, Direction::East),
        );
        game.resolve_collisions();

        assert_eq!(game.scores, [0, 1]);
        for (seat, start_x) in [(0, 590.0), (1, 300.0)] {
            assert!(game.players[seat].trail.is_empty(), "trail reset");
            assert!((game.players[seat].x - start_x).abs() < f32::EPSILON);
            assert!((game.players[seat].y - 360.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn double_collision_resets_without_scoring() {
        let mut game = game_with_players(
            (590.0, 360.0, Direction::East),
            (10.0, 360.0, Direction::West),
        );
        game.resolve_collisions();

        assert_eq!(game.scores, [0, 0]);
        assert!(game.players[0].trail.is_empty());
        assert!(game.players[1].trail.is_empty());
    }

    #[test]
    fn no_collision_leaves_round_untouched() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (400.0, 360.0, Direction::West),
        );
        game.players[0].trail.push(Rect::centered(200.0, 200.0, 2.0));
        game.resolve_collisions();

        assert_eq!(game.scores, [0, 0]);
        assert_eq!(game.players[0].trail.len(), 1, "no reset happened");
    }

    #[test]
    fn trail_collision_scores_opponent() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        game.players[1]
            .trail
            .push(Rect::centered(300.5, 360.0, HITBOX_SIZE));
        game.resolve_collisions();

        assert_eq!(game.scores, [0, 1]);
    }

    #[test]
    fn own_newest_trail_entry_is_not_a_collision() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        let overlapping = Rect::centered(300.5, 360.0, HITBOX_SIZE);
        game.players[0].trail.push(overlapping);
        game.resolve_collisions();
        assert_eq!(game.scores, [0, 0], "newest own entry must be excluded");
        assert_eq!(game.players[0].trail.len(), 1, "no reset happened");

        // The same entry one position earlier does collide.
        game.players[0].trail.push(Rect::centered(100.0, 100.0, 2.0));
        game.resolve_collisions();
        assert_eq!(game.scores, [0, 1]);
    }

    #[test]
    fn steering_applies_on_the_following_tick() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        let mut frontend = RecordingFrontend::scripted([vec![InputEvent::KeyDown(Key::W)]]);

        game.tick(&mut frontend);
        // This tick already moved east before the key was read.
        assert!((game.players[0].x - 302.0).abs() < f32::EPSILON);
        assert_eq!(game.players[0].direction, Direction::North);

        game.tick(&mut frontend);
        assert!((game.players[0].x - 302.0).abs() < f32::EPSILON);
        assert!((game.players[0].y - 358.0).abs() < f32::EPSILON);
    }

    #[test]
    fn later_intent_overrides_earlier_one() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        // W turns north; A then turns west (legal once heading north).
        let events = [
            InputEvent::KeyDown(Key::W),
            InputEvent::KeyDown(Key::A),
        ];
        assert_eq!(game.route_and_apply(&events), LoopSignal::Continue);
        assert_eq!(game.players[0].direction, Direction::West);
    }

    #[test]
    fn reversal_request_is_ignored_through_the_router() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        game.route_and_apply(&[InputEvent::KeyDown(Key::A)]);
        assert_eq!(game.players[0].direction, Direction::East);
    }

    #[test]
    fn boost_key_activates_and_expires_on_schedule() {
        let config = GameConfig {
            tick_rate: 64.0, // exact binary dt keeps the 0.5s boundary exact
            ..GameConfig::default()
        };
        let mut game = Game::with_factory(
            config,
            Box::new(|| {
                [
                    place_player(100.0, 360.0, Direction::East),
                    place_player(500.0, 360.0, Direction::West),
                ]
            }),
        );
        let mut frontend = RecordingFrontend::scripted([vec![InputEvent::KeyDown(Key::Tab)]]);

        game.tick(&mut frontend);
        assert!((game.players[0].boost_multiplier - 2.0).abs() < f32::EPSILON);
        assert_eq!(game.players[0].boosts_left, 2);

        // 0.5s at 64 Hz is 32 ticks; the boost holds strictly before that.
        for _ in 0..31 {
            game.tick(&mut frontend);
            assert!((game.players[0].boost_multiplier - 2.0).abs() < f32::EPSILON);
        }
        game.tick(&mut frontend);
        assert!((game.players[0].boost_multiplier - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn quit_stops_the_loop_and_shuts_the_frontend_down() {
        let mut game = game_with_players(
            (300.0, 360.0, Direction::East),
            (500.0, 360.0, Direction::West),
        );
        let mut frontend = RecordingFrontend::scripted([
            vec![InputEvent::KeyDown(Key::D)],
            vec![InputEvent::Quit],
        ]);
        game.run(&mut frontend);

        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(frontend.shutdowns, 1);
        // The quitting tick still presents its frame.
        assert_eq!(frontend.presents, 2);
    }

    #[test]
    fn symmetric_headless_match_never_scores() {
        let mut game = Game::new(GameConfig::default());
        let mut frontend = HeadlessFrontend::new().with_tick_budget(1000);
        game.run(&mut frontend);

        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(game.scores(), [0, 0], "mirrored crashes score no one");
        assert!(game.clock() > 0.0);
    }

    #[test]
    fn repeated_wall_rounds_accumulate_score() {
        let mut game = game_with_players(
            (580.0, 360.0, Direction::East),
            (300.0, 360.0, Direction::East),
        );
        let mut frontend = HeadlessFrontend::new().with_tick_budget(50);
        game.run(&mut frontend);

        let [p1, p2] = game.scores();
        assert_eq!(p1, 0);
        assert!(p2 >= 2, "seat two should score every short round, got {p2}");
    }

    #[test]
    fn pilot_overrides_human_keys_for_its_seat() {
        let mut game = Game::with_factory(
            GameConfig::default(),
            Box::new(|| {
                [
                    place_player(300.0, 360.0, Direction::East).with_pilot(Box::new(HoldNorth)),
                    place_player(500.0, 360.0, Direction::West),
                ]
            }),
        );
        // A human press on seat one's keys must be discarded in favor of the
        // pilot; seat two's keys still work.
        let events = [
            InputEvent::KeyDown(Key::S),
            InputEvent::KeyDown(Key::ArrowUp),
        ];
        game.route_and_apply(&events);
        assert_eq!(game.players[0].direction, Direction::North);
        assert_eq!(game.players[1].direction, Direction::North);
    }
}

//! The rendering/input seam. The game loop drives a [`Frontend`] and never
//! touches a window, a GPU, or a keyboard directly, so matches run the same
//! way under a real window, in a test, or unattended in a terminal.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::Rect;
use crate::input::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Everything the loop needs from the outside world, one call site each per
/// tick. `draw_text` anchors the string's center on the given point.
pub trait Frontend {
    fn clear(&mut self);
    fn draw_rect(&mut self, color: Color, rect: Rect);
    fn draw_text(&mut self, text: &str, color: Color, anchor: (f32, f32));
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn present(&mut self);
    fn wait_for_frame(&mut self);
    fn shutdown(&mut self) {}
}

/// Paces a loop to a fixed tick rate with a monotonic deadline. Carries the
/// deadline forward so short sleeps do not accumulate drift; a stall longer
/// than one frame re-anchors instead of bursting to catch up.
pub struct FrameLimiter {
    frame: Duration,
    next_deadline: Instant,
}

impl FrameLimiter {
    pub fn new(ticks_per_second: f32) -> Self {
        let frame = Duration::from_secs_f32(1.0 / ticks_per_second);
        Self {
            frame,
            next_deadline: Instant::now() + frame,
        }
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        match self.next_deadline.checked_duration_since(now) {
            Some(remaining) => {
                thread::sleep(remaining);
                self.next_deadline += self.frame;
            }
            None => {
                self.next_deadline = now + self.frame;
            }
        }
    }
}

/// Frontend for unattended matches: rendering is dropped, input is empty,
/// and pacing only happens if a limiter was attached. With a tick budget it
/// reports `Quit` once the budget is spent so the match terminates on its
/// own.
pub struct HeadlessFrontend {
    tick_budget: Option<u64>,
    polls: u64,
    limiter: Option<FrameLimiter>,
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self {
            tick_budget: None,
            polls: 0,
            limiter: None,
        }
    }

    pub fn with_tick_budget(mut self, ticks: u64) -> Self {
        self.tick_budget = Some(ticks);
        self
    }

    /// Pace ticks in real time instead of free-running.
    pub fn paced(mut self, ticks_per_second: f32) -> Self {
        self.limiter = Some(FrameLimiter::new(ticks_per_second));
        self
    }
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for HeadlessFrontend {
    fn clear(&mut self) {}

    fn draw_rect(&mut self, _color: Color, _rect: Rect) {}

    fn draw_text(&mut self, _text: &str, _color: Color, _anchor: (f32, f32)) {}

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        match self.tick_budget {
            Some(budget) if self.polls >= budget => vec![InputEvent::Quit],
            _ => Vec::new(),
        }
    }

    fn present(&mut self) {}

    fn wait_for_frame(&mut self) {
        if let Some(limiter) = &mut self.limiter {
            limiter.wait();
        }
    }
}

/// Test frontend: records what the current frame drew and feeds the loop a
/// scripted sequence of event batches, one batch per poll.
pub struct RecordingFrontend {
    script: VecDeque<Vec<InputEvent>>,
    pub rects: Vec<(Color, Rect)>,
    pub texts: Vec<(String, Color, (f32, f32))>,
    pub clears: u64,
    pub presents: u64,
    pub shutdowns: u64,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::scripted([])
    }

    pub fn scripted(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            script: batches.into_iter().collect(),
            rects: Vec::new(),
            texts: Vec::new(),
            clears: 0,
            presents: 0,
            shutdowns: 0,
        }
    }
}

impl Default for RecordingFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for RecordingFrontend {
    /// Starts a fresh frame, so only the most recent tick's draws remain
    /// visible to assertions.
    fn clear(&mut self) {
        self.clears += 1;
        self.rects.clear();
        self.texts.clear();
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        self.rects.push((color, rect));
    }

    fn draw_text(&mut self, text: &str, color: Color, anchor: (f32, f32)) {
        self.texts.push((text.to_owned(), color, anchor));
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script.pop_front().unwrap_or_default()
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn wait_for_frame(&mut self) {}

    fn shutdown(&mut self) {
        self.shutdowns += 1;
    }
}

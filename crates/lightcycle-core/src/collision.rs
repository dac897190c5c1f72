//! Overlap queries against walls and trails. Pure functions over the
//! current tick's hitboxes; scoring consequences live in [`crate::round`].

use crate::Rect;

/// True when the hitbox overlaps any boundary wall.
pub fn hits_wall(hitbox: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|wall| wall.overlaps(hitbox))
}

/// True when the hitbox overlaps any trail entry except the newest
/// `skip_recent`. Checking a player against its own trail passes 1 here so
/// the cell it vacated this tick never reads as a crash; checking against
/// the opponent's trail passes 0.
pub fn hits_trail(hitbox: &Rect, trail: &[Rect], skip_recent: usize) -> bool {
    let checked = trail.len().saturating_sub(skip_recent);
    trail[..checked].iter().any(|entry| entry.overlaps(hitbox))
}

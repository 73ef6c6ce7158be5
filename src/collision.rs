//! Axis-aligned box overlap, shared by wall blocking, pellet pickup and
//! ghost contact.

use crate::entities::{Rect, Wall};

/// Half-open overlap test. Boxes that only share an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Whether `rect` overlaps any wall. Wall order is irrelevant.
pub fn hits_wall(walls: &[Wall], rect: &Rect) -> bool {
    walls.iter().any(|wall| overlaps(rect, &wall.rect))
}

//! Catch detection between the player and falling entities
//!
//! The test is deliberately loose vertically: only the player's top edge is
//! checked, so anything whose bottom has reached it and is still on screen
//! counts, however far below the player it is.

use glam::Vec2;

use crate::settings::SpriteSize;

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: SpriteSize,
}

impl Aabb {
    pub fn new(pos: Vec2, size: SpriteSize) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.height
    }
}

/// Entity bottom has passed the player's top and the entity is still on screen
pub fn in_catch_band(entity: &Aabb, player: &Aabb, screen_height: f32) -> bool {
    entity.bottom() > player.top() && entity.top() < screen_height
}

/// Horizontal extents touch or overlap (edges inclusive)
pub fn overlaps_horizontally(entity: &Aabb, player: &Aabb) -> bool {
    entity.right() >= player.left() && entity.left() <= player.right()
}

/// Whether the player catches the entity this frame
pub fn is_caught(entity: &Aabb, player: &Aabb, screen_height: f32) -> bool {
    in_catch_band(entity, player, screen_height) && overlaps_horizontally(entity, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_H: f32 = 480.0;

    fn player() -> Aabb {
        Aabb::new(Vec2::new(288.0, 416.0), SpriteSize::new(64.0, 64.0))
    }

    fn coin(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), SpriteSize::new(32.0, 32.0))
    }

    #[test]
    fn test_above_player_is_skipped() {
        // Bottom exactly on the player's top edge does not count
        assert!(!is_caught(&coin(300.0, 384.0), &player(), SCREEN_H));
        assert!(is_caught(&coin(300.0, 384.5), &player(), SCREEN_H));
    }

    #[test]
    fn test_off_screen_is_skipped() {
        assert!(!is_caught(&coin(300.0, SCREEN_H), &player(), SCREEN_H));
        assert!(is_caught(&coin(300.0, SCREEN_H - 0.5), &player(), SCREEN_H));
    }

    #[test]
    fn test_edges_touching_count() {
        // Entity right edge on player left edge
        assert!(is_caught(&coin(256.0, 420.0), &player(), SCREEN_H));
        // Entity left edge on player right edge
        assert!(is_caught(&coin(352.0, 420.0), &player(), SCREEN_H));
        assert!(!is_caught(&coin(255.0, 420.0), &player(), SCREEN_H));
        assert!(!is_caught(&coin(353.0, 420.0), &player(), SCREEN_H));
    }

    #[test]
    fn test_only_top_edge_checked() {
        // Entirely below the player's bottom edge but above the screen edge
        let p = Aabb::new(Vec2::new(0.0, 100.0), SpriteSize::new(64.0, 64.0));
        assert!(is_caught(&coin(10.0, 300.0), &p, SCREEN_H));
    }
}

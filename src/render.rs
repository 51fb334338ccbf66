//! What the render adapter gets to see each frame.

use crate::entities::{GameStatus, SpriteId};
use crate::geometry::Rect;

pub const GAME_OVER_TEXT: &str = "Game Over";

/// One sprite to paint at a world-space rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawable {
    pub sprite: SpriteId,
    pub rect: Rect,
}

/// A read-only snapshot of everything visible, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub drawables: Vec<Drawable>,
    /// `"Scores : n"` while playing, `"Game Over"` afterwards.
    pub hud: String,
    pub score: u32,
    pub status: GameStatus,
}

impl Scene {
    pub fn count(&self, sprite: SpriteId) -> usize {
        self.drawables.iter().filter(|d| d.sprite == sprite).count()
    }
}

//! Rendering layer — all terminal I/O lives here.
//!
//! The world is laid out in screen units with the y axis pointing up; the
//! terminal is a grid of cells with rows counting down. Every drawable is
//! scaled onto the grid and filled with its sprite's glyph. No game logic is
//! performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use battlefield::entities::{GameStatus, SpriteId};
use battlefield::geometry::Rect;
use battlefield::render::Scene;
use battlefield::GameConfig;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

fn glyph(sprite: SpriteId) -> (&'static str, Color) {
    match sprite {
        SpriteId::Fighter => ("▲", Color::White),
        SpriteId::LeftWall | SpriteId::RightWall => ("█", Color::DarkBlue),
        SpriteId::Barrier => ("▀", Color::Grey),
        SpriteId::Missile => ("•", Color::Yellow),
        SpriteId::LauncherLeftHealthy => ("▶", Color::Red),
        SpriteId::LauncherLeftDamaged => ("▷", Color::DarkGrey),
        SpriteId::LauncherRightHealthy => ("◀", Color::Red),
        SpriteId::LauncherRightDamaged => ("◁", Color::DarkGrey),
    }
}

// ── World → grid mapping ──────────────────────────────────────────────────────

/// Terminal area the playfield is scaled into: every row except the HUD
/// (row 0) and the controls hint (last row).
struct Viewport {
    cols: u16,
    top: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    fn new(cols: u16, term_rows: u16, cfg: &GameConfig) -> Self {
        Self {
            cols,
            top: 1,
            rows: term_rows.saturating_sub(2),
            world_w: cfg.screen_width,
            world_h: cfg.screen_height,
        }
    }

    /// Cell span `(col0, row0, col1, row1)` covered by `rect`, inclusive and
    /// clipped, or `None` if nothing of it is on screen.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let sx = self.cols as f32 / self.world_w;
        let sy = self.rows as f32 / self.world_h;

        let c0 = (rect.x * sx).floor();
        let c1 = ((rect.right() * sx).ceil() - 1.0).max(c0);
        let r0 = ((self.world_h - rect.top()) * sy).floor();
        let r1 = (((self.world_h - rect.y) * sy).ceil() - 1.0).max(r0);

        let (max_c, max_r) = (self.cols as f32 - 1.0, self.rows as f32 - 1.0);
        if c1 < 0.0 || r1 < 0.0 || c0 > max_c || r0 > max_r {
            return None;
        }
        Some((
            c0.max(0.0) as u16,
            self.top + r0.max(0.0) as u16,
            c1.min(max_c) as u16,
            self.top + r1.min(max_r) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene, cfg: &GameConfig) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, cfg);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for d in &scene.drawables {
        draw_sprite(out, &view, d.sprite, &d.rect)?;
    }

    draw_hud(out, scene, cols)?;
    draw_controls_hint(out, rows)?;

    if scene.status == GameStatus::GameOver {
        draw_game_over(out, scene, cols, rows)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    sprite: SpriteId,
    rect: &Rect,
) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = view.cells(rect) else {
        return Ok(());
    };
    let (ch, color) = glyph(sprite);
    let run = ch.repeat((c1 - c0 + 1) as usize);

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, scene: &Scene, cols: u16) -> std::io::Result<()> {
    let x = (cols / 2).saturating_sub(scene.hud.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&scene.hud))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   G : End game   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    scene: &Scene,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Launchers destroyed: {}", scene.score);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", C_GAME_OVER),
        ("║     GAME  OVER     ║", C_GAME_OVER),
        ("╚════════════════════╝", C_GAME_OVER),
        (score_line.as_str(), Color::Yellow),
        ("Q - Quit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

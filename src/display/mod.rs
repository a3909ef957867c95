/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable `View`.  No
/// game logic is performed; this module only translates a session
/// snapshot into terminal commands, scaling playfield coordinates onto the
/// character grid inside the border.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{GameStatus, Position};
use crate::events::GameOverReport;
use crate::session::Snapshot;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

fn level_color(level: u32) -> Color {
    match level {
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Magenta,
        _ => Color::Red,
    }
}

/// Everything a frame needs besides the terminal size.
pub struct View<'a> {
    pub snapshot: &'a Snapshot,
    pub config: &'a GameConfig,
    pub report: Option<GameOverReport>,
    pub best_score: u32,
    pub muted: bool,
    /// Terminal size in cells.
    pub width: u16,
    pub height: u16,
}

/// Maps playfield coordinates onto terminal cells inside the border
/// (columns `1..width-1`, rows `2..height-2`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field_width: f64,
    pub field_height: f64,
}

impl Viewport {
    pub fn new(term_width: u16, term_height: u16, config: &GameConfig) -> Self {
        Viewport {
            cols: term_width.saturating_sub(2).max(1),
            rows: term_height.saturating_sub(4).max(1),
            field_width: config.playfield.width,
            field_height: config.playfield.height,
        }
    }

    /// Terminal cell for a playfield point, clamped to the play area.
    pub fn cell(&self, pos: Position) -> (u16, u16) {
        let fx = (pos.x / self.field_width).clamp(0.0, 1.0);
        let fy = (pos.y / self.field_height).clamp(0.0, 1.0);
        let col = ((fx * self.cols as f64) as u16).min(self.cols - 1);
        let row = ((fy * self.rows as f64) as u16).min(self.rows - 1);
        (col + 1, row + 2)
    }

    /// Terminal cell for the centre of a box of the given playfield size.
    pub fn centre_cell(&self, pos: Position, width: f64, height: f64) -> (u16, u16) {
        self.cell(Position {
            x: pos.x + width / 2.0,
            y: pos.y + height / 2.0,
        })
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame for the session's current status.
pub fn render<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match view.snapshot.status {
        GameStatus::Idle => draw_title(out, view)?,
        GameStatus::Running => draw_playfield(out, view)?,
        GameStatus::GameOver => {
            draw_playfield(out, view)?;
            draw_game_over(out, view)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_playfield<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let vp = Viewport::new(view.width, view.height, view.config);
    let cfg = view.config;

    draw_border(out, view)?;
    draw_hud(out, view)?;

    for (_, pos, spawn_level) in &view.snapshot.enemies {
        let cell = vp.centre_cell(*pos, cfg.enemy.width, cfg.enemy.height);
        draw_enemy(out, cell, *spawn_level)?;
    }
    for (_, pos) in &view.snapshot.bullets {
        let cell = vp.centre_cell(*pos, cfg.bullet.width, cfg.bullet.height);
        draw_bullet(out, cell)?;
    }
    if let Some(pos) = view.snapshot.player {
        let cell = vp.centre_cell(pos, cfg.player.width, cfg.player.height);
        draw_player(out, cell, view.height)?;
    }

    draw_controls_hint(out, view)?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let snap = view.snapshot;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Kills: {:>5}", snap.score)))?;

    let level_str = format!("[ LEVEL {} ]", snap.level);
    let lx = (view.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(level_color(snap.level)))?;
    out.queue(Print(&level_str))?;

    let hearts: String = "♥".repeat(snap.lives as usize);
    let sound = if view.muted { "(muted)" } else { "" };
    let lives_text = format!("Lives: {:<3} {}", hearts, sound);
    let rx = view
        .width
        .saturating_sub(lives_text.chars().count() as u16 + 2);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, (x, y): (u16, u16), term_height: u16) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip)
    //  /|\      ← row y+1    (wings + fuselage)
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(Print("▲"))?;

    let wing_y = y + 1;
    if wing_y < term_height.saturating_sub(2) {
        out.queue(cursor::MoveTo(x.saturating_sub(1).max(1), wing_y))?;
        out.queue(Print("/|\\"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, (x, y): (u16, u16), level: u32) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(level_color(level)))?;
    out.queue(cursor::MoveTo(x.saturating_sub(1).max(1), y))?;
    out.queue(Print("<▼>"))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, (x, y): (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   M : Mute   Q : Quit"))?;
    Ok(())
}

// ── Title screen ──────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let cx = view.width / 2;
    let cy = view.height / 2;

    let best = format!("Best Score: {}", view.best_score);
    let waves = format!(
        "Every {} kills the next wave moves differently.",
        view.config.kills_per_level
    );
    let mut lines: Vec<(&str, Color)> = vec![("★  ARCADE  SHOOTER  ★", Color::Cyan)];
    if view.best_score > 0 {
        lines.push((best.as_str(), Color::Yellow));
    }
    lines.extend_from_slice(&[
        ("", Color::White),
        ("Shoot the falling enemies before they reach you.", Color::White),
        (waves.as_str(), Color::DarkGrey),
        ("", Color::White),
        ("ENTER / SPACE : Start   M : Mute   Q : Quit", Color::Green),
    ]);

    let start_row = cy.saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &View) -> std::io::Result<()> {
    let final_score = view
        .report
        .map(|r| r.final_score)
        .unwrap_or(view.snapshot.score);
    let score_line = format!("You scored {} kills", final_score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

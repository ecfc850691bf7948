//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape, STANDARD_LETTERS};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, MAX_SHAPE_SIDE};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view of one game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Placement of the bordered play field, border included
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        // Boards are at most MAX_BOARD_SIDE cells a side; saturate anyway so
        // an oversized cell scale clips instead of overflowing.
        let board_w = u16::try_from(snap.board.width()).unwrap_or(u16::MAX);
        let board_h = u16::try_from(snap.board.height()).unwrap_or(u16::MAX);
        let frame = {
            let w = board_w.saturating_mul(self.cell_w).saturating_add(2);
            let h = board_h.saturating_mul(self.cell_h).saturating_add(2);
            let panel_w = 16;
            Frame {
                x: viewport.width.saturating_sub(w.saturating_add(panel_w)) / 2,
                y: match self.anchor_y {
                    AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                    AnchorY::Top => 0,
                },
                w,
                h,
            }
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            frame.w - 2,
            frame.h - 2,
            ' ',
            bg,
        );
        draw_border(fb, frame.x, frame.y, frame.w, frame.h, border);

        // Settled cells.
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as i32, y as i32, *color),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        if snap.playable() {
            let ghost_style = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
            for (x, y) in snap.ghost_cells() {
                if let Some((cx, cy)) = self.board_cell(snap, x, y) {
                    self.fill_cell_rect(fb, frame, cx, cy, '░', ghost_style);
                }
            }
        }

        if !snap.game_over {
            for (x, y, color) in snap.active_cells() {
                self.draw_block(fb, frame, x, y, color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER", Some("Enter: new game"));
        } else if snap.paused {
            self.draw_overlay(fb, frame, "PAUSED", Some("p: resume"));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn board_cell(&self, snap: &GameSnapshot, x: i32, y: i32) -> Option<(u16, u16)> {
        let in_bounds = x >= 0
            && y >= 0
            && (x as usize) < snap.board.width()
            && (y as usize) < snap.board.height();
        in_bounds.then_some((x as u16, y as u16))
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    /// Blocks above the top row are not drawn.
    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i32, y: i32, color: ColorId) {
        let cols = i32::from((frame.w - 2) / self.cell_w);
        let rows = i32::from((frame.h - 2) / self.cell_h);
        if x < 0 || y < 0 || x >= cols || y >= rows {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        let style = CellStyle::new(color_rgb(color), PLAY_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x.saturating_add(1).saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let badge = CellStyle::new(Rgb::new(255, 215, 0), PANEL_BG).bold();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        let end = fb.put_u32(panel_x, y + 1, snap.best_score, value);
        if snap.new_best {
            fb.put_str(end + 1, y + 1, "NEW!", badge);
        }
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        let end = fb.put_u32(panel_x, y + 1, snap.lines, value);
        let dim = value.dim();
        let end = fb.put_str(end + 1, y + 1, "(", dim);
        let end = fb.put_u32(end, y + 1, snap.lines_to_next_level, dim);
        fb.put_str(end, y + 1, " to go)", dim);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        put_clock(fb, panel_x, y + 1, snap.elapsed_seconds, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, Some(&snap.next), value);
        y += 2 + MAX_SHAPE_SIDE as u16;

        fb.put_str(panel_x, y, "HOLD", label);
        let held_style = if snap.hold_available { value } else { value.dim() };
        self.draw_preview(fb, panel_x, y + 1, snap.held.as_ref(), held_style);
    }

    /// Shape grid at preview scale, or a dash when absent.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        shape: Option<&Shape>,
        style: CellStyle,
    ) {
        let Some(shape) = shape else {
            fb.put_str(x, y, "-", style);
            return;
        };

        for (dx, dy, color) in shape.filled() {
            let block = CellStyle {
                fg: color_rgb(color),
                ..style
            };
            let px = x.saturating_add((dx as u16).saturating_mul(self.cell_w));
            fb.fill_rect(px, y.saturating_add(dy as u16), self.cell_w, 1, '█', block);
        }
        if let Some(letter) = shape.color().and_then(letter_for) {
            let px = x
                .saturating_add((MAX_SHAPE_SIDE as u16).saturating_mul(self.cell_w))
                .saturating_add(1);
            fb.put_char(px, y, letter, style.dim());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, title: &str, hint: Option<&str>) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str_centered(frame.x, mid_y, frame.w, title, style);
        if let Some(hint) = hint {
            let hint_style = CellStyle::new(Rgb::new(180, 180, 180), PANEL_BG);
            fb.put_str_centered(frame.x, mid_y + 1, frame.w, hint, hint_style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// `m:ss`
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, seconds: u64, style: CellStyle) {
    let minutes = (seconds / 60).min(u32::MAX as u64) as u32;
    let secs = (seconds % 60) as u32;
    let end = fb.put_u32(x, y, minutes, style);
    fb.put_char(end, y, ':', style);
    if secs < 10 {
        fb.put_char(end + 1, y, '0', style);
        fb.put_u32(end + 2, y, secs, style);
    } else {
        fb.put_u32(end + 1, y, secs, style);
    }
}

/// Standard palette by catalog order; unknown ids render grey.
fn color_rgb(color: ColorId) -> Rgb {
    match color.get() {
        1 => Rgb::new(200, 120, 220),
        2 => Rgb::new(240, 220, 80),
        3 => Rgb::new(255, 165, 0),
        4 => Rgb::new(80, 120, 220),
        5 => Rgb::new(80, 220, 220),
        6 => Rgb::new(100, 220, 120),
        7 => Rgb::new(220, 80, 80),
        _ => Rgb::new(160, 160, 160),
    }
}

fn letter_for(color: ColorId) -> Option<char> {
    STANDARD_LETTERS.get(color.get() as usize - 1).copied()
}

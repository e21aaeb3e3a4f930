//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::{KeyMapping, EMPTY, GRID_SIZE};

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

/// Extra lines for the side panel describing how the session is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView {
    pub mapping: KeyMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FRAME_BG: Rgb = Rgb::new(187, 173, 160);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for 4-digit tiles with a margin on each side.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
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

    /// Outer size of the bordered grid in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_controls(snap, None, viewport, fb);
    }

    pub fn render_into_with_controls(
        &self,
        snap: &GameSnapshot,
        controls: Option<&ControlsView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, controls, viewport, start_x, start_y, frame_w);

        if !snap.playable() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_controls(
        &self,
        snap: &GameSnapshot,
        controls: Option<&ControlsView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_controls(snap, controls, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u32) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mid_y = py + self.cell_h / 2;
        if value == EMPTY {
            fb.put_char(px + self.cell_w / 2, mid_y, '·', style.dim());
            return;
        }

        let digits = digit_count(value);
        if digits > self.cell_w {
            // Too wide for this tile size; never spill into the neighbour.
            fb.put_char(px + self.cell_w / 2, mid_y, '*', style.bold());
            return;
        }
        fb.put_u32(px + (self.cell_w - digits) / 2, mid_y, value, style.bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        controls: Option<&ControlsView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MAX", snap.max_tile()),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        if let Some(c) = controls {
            fb.put_str(panel_x, y, "KEYS", label);
            fb.put_str(panel_x, y.saturating_add(1), c.mapping.as_str(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "r restart", hint);
        fb.put_str(panel_x, y.saturating_add(1), "q quit", hint);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::new(LIGHT_TEXT, PANEL_BG).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        put_centered(fb, start_x, frame_w, mid_y, "GAME OVER", style);
        put_centered(
            fb,
            start_x,
            frame_w,
            mid_y.saturating_add(1),
            "press r",
            CellStyle { bold: false, ..style },
        );
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(tx, y, text, style);
}

/// Background/foreground for a tile value (classic 2048 palette).
pub fn tile_style(value: u32) -> CellStyle {
    let bg = match value {
        EMPTY => Rgb::new(205, 193, 180),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = match value {
        EMPTY => FRAME_BG,
        2 | 4 => DARK_TEXT,
        _ => LIGHT_TEXT,
    };
    CellStyle::new(fg, bg)
}

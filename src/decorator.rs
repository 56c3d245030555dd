//! Panel chrome for the terminal demo: paints frame, titlebar, and close
//! control into the ratatui buffer, and classifies pointer positions into
//! the hit regions the manager consumes.
//!
//! The decorator is the rendering collaborator's half of the contract: the
//! core never sees cells or styles, only [`HitRegion`]s and window-local
//! coordinates produced here.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::interaction::{EdgeSet, HitRegion};

pub trait PanelDecorator: std::fmt::Debug {
    fn render_panel(
        &self,
        frame: &mut Frame,
        rect: Rect,
        bounds: Rect,
        title: &str,
        focused: bool,
        hint: EdgeSet,
    );

    /// Map a pointer position inside `rect` to a hit region plus
    /// window-local coordinates. `None` when the point is outside the rect.
    fn classify(&self, rect: Rect, column: u16, row: u16) -> Option<(HitRegion, i32, i32)>;
}

/// Single-line box chrome: border ring is the frame body, row 1 is the
/// titlebar with a close glyph in its rightmost interior cell.
#[derive(Debug)]
pub struct BoxDecorator;

const CLOSE_GLYPH: &str = "✕";

impl PanelDecorator for BoxDecorator {
    fn render_panel(
        &self,
        frame: &mut Frame,
        rect: Rect,
        bounds: Rect,
        title: &str,
        focused: bool,
        hint: EdgeSet,
    ) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let buffer = frame.buffer_mut();

        let titlebar_style = if focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };
        let border_style = Style::default().fg(Color::DarkGray).bg(Color::Reset);
        let hint_style = Style::default().fg(Color::Yellow).bg(Color::Reset);
        let content_style = Style::default().bg(Color::Black).fg(Color::Gray);

        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(1);
        let titlebar_y = rect.y.saturating_add(1);

        let visible = |x: u16, y: u16| {
            x >= bounds.x
                && x < bounds.x + bounds.width
                && y >= bounds.y
                && y < bounds.y + bounds.height
        };

        // Content fill. Painting every interior cell is what occludes the
        // panels below; paint order is the registry's back-to-front order.
        for y in titlebar_y.saturating_add(1)..bottom {
            for x in rect.x.saturating_add(1)..right {
                if visible(x, y)
                    && let Some(cell) = buffer.cell_mut((x, y))
                {
                    cell.set_symbol(" ");
                    cell.set_style(content_style);
                }
            }
        }

        // Titlebar with close control at the right edge
        if visible(rect.x, titlebar_y) {
            for x in rect.x.saturating_add(1)..right {
                if visible(x, titlebar_y)
                    && let Some(cell) = buffer.cell_mut((x, titlebar_y))
                {
                    cell.set_symbol(" ");
                    cell.set_style(titlebar_style);
                }
            }
            let close_x = right.saturating_sub(1);
            if visible(close_x, titlebar_y)
                && let Some(cell) = buffer.cell_mut((close_x, titlebar_y))
            {
                cell.set_symbol(CLOSE_GLYPH);
                cell.set_style(titlebar_style);
            }
            let max_title = rect.width.saturating_sub(4) as usize;
            for (idx, ch) in title.chars().take(max_title).enumerate() {
                let x = rect.x.saturating_add(2).saturating_add(idx as u16);
                if visible(x, titlebar_y)
                    && let Some(cell) = buffer.cell_mut((x, titlebar_y))
                {
                    cell.set_symbol(&ch.to_string());
                    cell.set_style(titlebar_style);
                }
            }
        }

        // Border ring; edges under a hover hint light up
        for x in rect.x..=right {
            if visible(x, rect.y)
                && let Some(cell) = buffer.cell_mut((x, rect.y))
            {
                let symbol = if x == rect.x {
                    "┌"
                } else if x == right {
                    "┐"
                } else {
                    "─"
                };
                cell.set_symbol(symbol);
                cell.set_style(if hint.north { hint_style } else { border_style });
            }
            if visible(x, bottom)
                && let Some(cell) = buffer.cell_mut((x, bottom))
            {
                let symbol = if x == rect.x {
                    "└"
                } else if x == right {
                    "┘"
                } else {
                    "─"
                };
                cell.set_symbol(symbol);
                cell.set_style(if hint.south { hint_style } else { border_style });
            }
        }
        for y in rect.y.saturating_add(1)..bottom {
            if visible(rect.x, y)
                && let Some(cell) = buffer.cell_mut((rect.x, y))
            {
                cell.set_symbol("│");
                cell.set_style(if hint.west { hint_style } else { border_style });
            }
            if visible(right, y)
                && let Some(cell) = buffer.cell_mut((right, y))
            {
                cell.set_symbol("│");
                cell.set_style(if hint.east { hint_style } else { border_style });
            }
        }
    }

    fn classify(&self, rect: Rect, column: u16, row: u16) -> Option<(HitRegion, i32, i32)> {
        if column < rect.x
            || row < rect.y
            || column >= rect.x.saturating_add(rect.width)
            || row >= rect.y.saturating_add(rect.height)
        {
            return None;
        }
        let mut local_x = (column - rect.x) as i32;
        let mut local_y = (row - rect.y) as i32;
        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(1);
        let on_border =
            column == rect.x || column == right || row == rect.y || row == bottom;
        if on_border {
            // The frame line itself sits outside the strict hit-test bounds
            // (top < y < top + band); report north/west frame-line cells one
            // unit inside so a grab on the visible border classifies.
            if local_x == 0 {
                local_x = 1;
            }
            if local_y == 0 {
                local_y = 1;
            }
        }
        let region = if on_border {
            HitRegion::FrameBody
        } else if row == rect.y.saturating_add(1) {
            if column == right.saturating_sub(1) {
                HitRegion::CloseControl
            } else {
                HitRegion::Titlebar
            }
        } else {
            HitRegion::Content
        };
        Some((region, local_x, local_y))
    }
}

/// Resolve signed panel geometry to a drawable screen rect plus the amount
/// clipped off the top/left. Callers must add the clip back onto any
/// rect-local coordinates before treating them as window-local: the core's
/// hit-test works against the full frame, not the visible part.
///
/// Degenerate panels (a resize may have driven an extent non-positive) get
/// nothing to grab or paint until resized back out.
pub fn resolve_screen_rect(geometry: crate::geometry::Geometry) -> Option<(Rect, i32, i32)> {
    if geometry.is_degenerate() {
        return None;
    }
    let clip_x = (-geometry.x).max(0);
    let clip_y = (-geometry.y).max(0);
    let width = geometry.width - clip_x;
    let height = geometry.height - clip_y;
    if width <= 0 || height <= 0 {
        return None;
    }
    Some((
        Rect {
            x: geometry.x.max(0) as u16,
            y: geometry.y.max(0) as u16,
            width: width as u16,
            height: height as u16,
        },
        clip_x,
        clip_y,
    ))
}

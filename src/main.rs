use std::collections::BTreeMap;
use std::io;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use std::time::Duration;

use float_wm::constants::{
    DEMO_CASCADE_STEP, DEMO_EDGE_BAND, DEMO_PANEL_HEIGHT, DEMO_PANEL_WIDTH,
};
use float_wm::decorator::{BoxDecorator, PanelDecorator, resolve_screen_rect};
use float_wm::{EdgeSet, Geometry, HitRegion, MotionDelta, PanelManager, SessionMode};

type PanelId = usize;

#[derive(Debug, Parser)]
#[command(name = "float-wm", about = "Floating panel window manager demo")]
struct Args {
    /// Number of panels to open at startup.
    #[arg(short, long, default_value_t = 3)]
    panels: usize,

    /// Edge band thickness in cells. The band must reach past the border
    /// ring because the hit-test bounds exclude the frame line itself.
    #[arg(long, default_value_t = DEMO_EDGE_BAND)]
    edge_band: i32,

    /// Log session transitions and registry churn to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    float_wm::tracing_sub::init_default(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    });

    let mut app = App::new(&args);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()>
where
    io::Error: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        terminal.draw(|frame| app.render(frame))?;
        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        // Drain the queue so rapid mouse drags don't lag behind rendering.
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.handle_key(key.code, key.modifiers) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
            if !event::poll(Duration::from_millis(0))? {
                break;
            }
        }
    }
}

/// Demo host: plays the rendering collaborator. Owns the content lines for
/// each panel (its stand-in for visual nodes) and disposes them when the
/// manager's closed-window queue says so.
struct App {
    manager: PanelManager<PanelId>,
    decorator: BoxDecorator,
    contents: BTreeMap<PanelId, Vec<String>>,
    next_id: PanelId,
    last_pointer: Option<(u16, u16)>,
    hover: Option<(PanelId, EdgeSet)>,
    status: String,
}

impl App {
    fn new(args: &Args) -> Self {
        let mut app = Self {
            manager: PanelManager::new(),
            decorator: BoxDecorator,
            contents: BTreeMap::new(),
            next_id: 0,
            last_pointer: None,
            hover: None,
            status: String::new(),
        };
        app.manager.set_edge_band(args.edge_band);
        for _ in 0..args.panels.max(1) {
            app.spawn_panel();
        }
        app
    }

    fn spawn_panel(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let offset = DEMO_CASCADE_STEP * id as i32;
        let geometry = Geometry::new(
            4 + offset,
            2 + offset,
            DEMO_PANEL_WIDTH,
            DEMO_PANEL_HEIGHT,
        );
        if self
            .manager
            .create_window(id, geometry, format!("panel {id}"))
            .is_ok()
        {
            self.contents.insert(
                id,
                vec![
                    "drag the titlebar to move".to_string(),
                    "grab a border to resize".to_string(),
                    "✕ closes unless dirty".to_string(),
                ],
            );
        }
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('n') => self.spawn_panel(),
            KeyCode::Char('d') => {
                // toggle the dirty flag on the frontmost panel
                if let Some(id) = self.manager.windows_back_to_front().last().copied() {
                    let dirty = !self.manager.is_dirty(id).unwrap_or(false);
                    let _ = self.manager.set_dirty(id, dirty);
                    self.status = format!(
                        "panel {id} marked {}",
                        if dirty { "dirty" } else { "clean" }
                    );
                }
            }
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(_) => {
                self.last_pointer = Some((mouse.column, mouse.row));
                let Some((id, region, lx, ly)) = self.hit_test(mouse.column, mouse.row) else {
                    return;
                };
                if region == HitRegion::CloseControl {
                    // mouse-down still raises the panel, exactly like any
                    // other press on its chrome
                    self.manager.pointer_down(id, lx, ly, region);
                    match self.manager.destroy_window(id) {
                        Ok(()) => {
                            for closed in self.manager.take_closed_windows() {
                                self.contents.remove(&closed);
                            }
                            self.status = format!("panel {id} closed");
                        }
                        Err(err) => self.status = format!("panel {id}: {err}"),
                    }
                    return;
                }
                self.manager.pointer_down(id, lx, ly, region);
            }
            MouseEventKind::Drag(_) => {
                let Some((last_col, last_row)) = self.last_pointer else {
                    return;
                };
                let delta = MotionDelta::new(
                    mouse.column as i32 - last_col as i32,
                    mouse.row as i32 - last_row as i32,
                );
                self.last_pointer = Some((mouse.column, mouse.row));
                self.manager.pointer_move(delta);
            }
            MouseEventKind::Up(_) => {
                self.manager.pointer_up();
                self.last_pointer = None;
            }
            MouseEventKind::Moved => {
                self.hover = self
                    .hit_test(mouse.column, mouse.row)
                    .map(|(id, _, lx, ly)| (id, self.manager.cursor_hint(id, lx, ly)));
            }
            _ => {}
        }
    }

    /// Topmost panel under the pointer, with its hit region and
    /// window-local coordinates. Locals are relative to the full frame:
    /// whatever the screen clipped off the top/left is added back.
    fn hit_test(&self, column: u16, row: u16) -> Option<(PanelId, HitRegion, i32, i32)> {
        for id in self.manager.windows_back_to_front().into_iter().rev() {
            let (rect, clip_x, clip_y) = resolve_screen_rect(self.manager.geometry(id)?)?;
            if let Some((region, lx, ly)) = self.decorator.classify(rect, column, row) {
                return Some((id, region, lx + clip_x, ly + clip_y));
            }
        }
        None
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let bounds = frame.area();
        let focused = self.manager.windows_back_to_front().last().copied();
        for id in self.manager.windows_back_to_front() {
            let Some(geometry) = self.manager.geometry(id) else {
                continue;
            };
            let Some((rect, _, _)) = resolve_screen_rect(geometry) else {
                continue;
            };
            let hint = match self.hover {
                Some((hover_id, hint)) if hover_id == id => hint,
                _ => EdgeSet::EMPTY,
            };
            let title = self.manager.title(id).unwrap_or("").to_string();
            let dirty = self.manager.is_dirty(id).unwrap_or(false);
            let title = if dirty { format!("{title} *") } else { title };
            self.decorator
                .render_panel(frame, rect, bounds, &title, focused == Some(id), hint);
            if let Some(lines) = self.contents.get(&id) {
                render_content(frame, rect, bounds, lines);
            }
        }
        self.render_status_bar(frame, bounds);
    }

    fn render_status_bar(&self, frame: &mut ratatui::Frame, bounds: Rect) {
        if bounds.height == 0 {
            return;
        }
        let cursor = self
            .hover
            .and_then(|(_, hint)| hint.cursor_name())
            .unwrap_or("default");
        let session = match self.manager.session_mode() {
            SessionMode::Idle => "idle".to_string(),
            SessionMode::Dragging => "dragging".to_string(),
            SessionMode::Resizing(edges) => {
                format!("resizing ({})", edges.cursor_name().unwrap_or("?"))
            }
        };
        let line = format!(
            " q quit · n new panel · d toggle dirty │ cursor: {cursor} │ {session} │ {}",
            self.status
        );
        let area = Rect {
            x: bounds.x,
            y: bounds.y + bounds.height - 1,
            width: bounds.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(line))
                .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
            area,
        );
    }
}

fn render_content(frame: &mut ratatui::Frame, rect: Rect, bounds: Rect, lines: &[String]) {
    // interior starts below the titlebar row
    let inner = Rect {
        x: rect.x.saturating_add(2),
        y: rect.y.saturating_add(2),
        width: rect.width.saturating_sub(4),
        height: rect.height.saturating_sub(3),
    };
    let inner = inner.intersection(bounds);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::Black).fg(Color::Gray)),
        inner,
    );
}

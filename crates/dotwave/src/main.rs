use chrono::{Local, Timelike};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dotwave_config::{Config, Links};
use dotwave_core::{
    ClockSample, ColorTheme, RenderConfig, RenderMode, Scheduler, Surface, TimeSource,
};
use dotwave_render::{CellPainter, render_frame};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// Wall-clock time source backed by chrono.
#[derive(Debug, Default)]
struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn sample(&self) -> ClockSample {
        let now = Local::now();
        ClockSample::new(
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis(),
            now.timestamp_millis().max(0) as u64,
        )
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Active draw strategy.
    mode: RenderMode,
    /// Render parameters, fixed for this mount.
    render_config: RenderConfig,
    /// Current color theme.
    theme: ColorTheme,
    /// External link targets from the config file.
    links: Links,
    /// Repaint schedule for the active mode.
    scheduler: Scheduler,
    /// Wall-clock source.
    time_source: SystemTimeSource,
    /// Last link action result, shown in the status line.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`] from loaded configuration.
    pub fn new(config: &Config) -> Self {
        let mode = config.render.mode();
        Self {
            running: false,
            mode,
            render_config: config.render.render_config(),
            theme: config.render.theme(),
            links: config.links.clone(),
            scheduler: Scheduler::new(mode.cadence()),
            time_source: SystemTimeSource,
            status: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            if self.scheduler.is_due(self.now_ms()) {
                terminal.draw(|frame| self.render(frame))?;
                self.scheduler.mark_rendered(self.now_ms());
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.time_source.sample().epoch_millis
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let spacing = self.render_config.spacing();

        // One grid cell per terminal cell; a zero-sized terminal falls back
        // to the default logical surface and the painter clips.
        let surface = Surface::from_container(
            f64::from(area.width) * spacing,
            f64::from(area.height) * spacing,
            1.0,
        );

        let sample = self.time_source.sample();
        let mut painter = CellPainter::new(
            area.width,
            area.height,
            spacing,
            self.render_config.dot_size,
            self.theme,
        );
        render_frame(
            self.mode,
            &mut painter,
            &surface,
            &self.render_config,
            &sample,
        );
        frame.render_widget(Paragraph::new(painter.into_lines()), area);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Dot matrix
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let accent = self.theme.color();

        if let Some(status) = &self.status {
            let line = Line::from(status.clone())
                .style(Style::new().fg(accent))
                .centered();
            frame.render_widget(Paragraph::new(line), chunks[1]);
        }

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "m".bold().fg(accent),
            " mode  ".dark_gray(),
            "c".bold().fg(accent),
            " theme  ".dark_gray(),
            "g/i/b/p".bold().fg(accent),
            " links".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout is the scheduler's pending deadline, so the loop
    /// sleeps until the next frame is due or an event arrives.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.scheduler.time_until_due(self.now_ms());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                // Layout is recomputed from the new size on the repaint; the
                // cadence itself is untouched.
                Event::Resize(_, _) => self.request_repaint(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.toggle_mode(),
            (_, KeyCode::Char('c')) => self.cycle_theme(),
            (_, KeyCode::Char('g')) => self.show_link("repository", self.links.repository.clone()),
            (_, KeyCode::Char('i')) => self.show_link("install", self.links.install.clone()),
            (_, KeyCode::Char('b')) => self.show_link("blog", self.links.blog.clone()),
            (_, KeyCode::Char('p')) => self.show_link("purchase", self.links.payment.clone()),
            _ => {}
        }
    }

    /// Switch between the wave field and the clock face. The scheduler is
    /// rebuilt for the new cadence and is immediately due.
    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.scheduler = Scheduler::new(self.mode.cadence());
    }

    /// Cycle through available color themes.
    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.request_repaint();
    }

    /// Surface a configured link in the status line. An absent optional
    /// link leaves the binding a no-op.
    fn show_link(&mut self, label: &str, url: Option<String>) {
        let Some(url) = url else { return };
        self.status = Some(format!("{label}: {url}"));
        self.request_repaint();
    }

    fn request_repaint(&mut self) {
        self.scheduler.request_immediate(self.now_ms());
    }

    /// Stop the loop and cancel the pending deadline; nothing draws after
    /// this, even a tick that was already due.
    fn quit(&mut self) {
        self.running = false;
        self.scheduler.shutdown();
    }
}

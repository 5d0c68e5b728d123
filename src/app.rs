// App state and main event loop.
// Manages the active view, sidebar, settings form, and keyboard input handling.

use std::fmt;
use std::io;
use std::str::FromStr;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::DashError;
use crate::fleet::{Bus, Dataset, DemandSample, Driver, HeatPoint, Route, Stat};
use crate::state::{ActivityLog, ConsoleMessage, SelectableTable, SettingsForm};
use crate::ui;

/// Sidebar width in columns when expanded.
pub const SIDEBAR_OPEN_WIDTH: u16 = 26;
/// Sidebar width in columns when collapsed to glyphs.
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;

/// Dashboard panel. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum View {
    #[default]
    Overview,
    Demand,
    Fleet,
    Routes,
    Drivers,
    Settings,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 6] = [
        View::Overview,
        View::Demand,
        View::Fleet,
        View::Routes,
        View::Drivers,
        View::Settings,
    ];

    /// Identifier used on the command line and in config.
    pub fn name(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Demand => "demand",
            View::Fleet => "fleet",
            View::Routes => "routes",
            View::Drivers => "drivers",
            View::Settings => "settings",
        }
    }

    /// Sidebar label.
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Demand => "Demand Analysis",
            View::Fleet => "Fleet Management",
            View::Routes => "Route Management",
            View::Drivers => "Driver Management",
            View::Settings => "Settings",
        }
    }

    /// Glyph shown when the sidebar is collapsed.
    pub fn glyph(&self) -> &'static str {
        match self {
            View::Overview => "◉",
            View::Demand => "▤",
            View::Fleet => "■",
            View::Routes => "⇄",
            View::Drivers => "☺",
            View::Settings => "⚙",
        }
    }

    fn index(&self) -> usize {
        View::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }

    /// View bound to a digit key (1-6).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        View::ALL.get(n.checked_sub(1)?).copied()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        View::ALL
            .iter()
            .copied()
            .find(|v| v.name() == needle)
            .ok_or_else(|| DashError::UnknownView(s.to_string()))
    }
}

impl TryFrom<String> for View {
    type Error = DashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Main application state.
pub struct App {
    /// Currently shown panel.
    pub active_view: View,
    /// Whether the sidebar shows full labels.
    pub sidebar_open: bool,
    /// Live fleet table.
    pub fleet: SelectableTable<Bus>,
    /// Route management table.
    pub routes: SelectableTable<Route>,
    /// Driver management table.
    pub drivers: SelectableTable<Driver>,
    /// Hourly demand series for the bar chart.
    pub demand: Vec<DemandSample>,
    /// Heatmap points on the overview map.
    pub heat_points: Vec<HeatPoint>,
    /// Overview KPI cards.
    pub stats: Vec<Stat>,
    /// Demand prediction lines.
    pub predictions: Vec<&'static str>,
    /// System settings form.
    pub settings_form: SettingsForm,
    /// Activity log; the latest entry is shown in the status bar.
    pub activity: ActivityLog,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config, data: Dataset) -> Self {
        let Dataset {
            buses,
            routes,
            drivers,
            demand,
            heat_points,
            stats,
            predictions,
            renumbered,
        } = data;

        let mut activity = ActivityLog::default();
        for r in &renumbered {
            activity.push(ConsoleMessage::warn(format!(
                "Bus at {} had duplicate id {}; shown as id {}",
                r.location, r.old_id, r.new_id
            )));
        }

        Self {
            active_view: config.initial_view,
            sidebar_open: config.sidebar_open,
            fleet: SelectableTable::new(buses),
            routes: SelectableTable::new(routes),
            drivers: SelectableTable::new(drivers),
            demand,
            heat_points,
            stats,
            predictions,
            settings_form: SettingsForm::new(config.settings.clone()),
            activity,
            show_help: false,
            should_quit: false,
            tick_rate: config.tick_rate(),
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll for one terminal event and dispatch key presses.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Show a panel. Nothing else changes.
    pub fn select_view(&mut self, view: View) {
        if self.active_view != view {
            tracing::debug!(from = %self.active_view, to = %view, "view selected");
        }
        self.active_view = view;
    }

    /// Expand or collapse the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        tracing::debug!(open = self.sidebar_open, "sidebar toggled");
    }

    /// Current sidebar width in columns.
    pub fn sidebar_width(&self) -> u16 {
        if self.sidebar_open {
            SIDEBAR_OPEN_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }

    /// Handle a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.active_view == View::Settings && self.settings_form.is_editing() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.toggle_sidebar(),
            KeyCode::Tab => self.select_view(self.active_view.next()),
            KeyCode::BackTab => self.select_view(self.active_view.prev()),
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(view) = View::from_digit(c) {
                    self.select_view(view);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_setting(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_setting(true),
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('a') => self.add_new(),
            KeyCode::Char('s') if self.active_view == View::Settings => self.save_settings(),
            _ => {}
        }
    }

    /// Keys while the settings edit buffer is open.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => match self.settings_form.commit_edit() {
                Ok(Some(field)) => {
                    let key = field.key();
                    let value = self.settings_form.settings.display(key);
                    self.activity.info(format!("{} set to {}", key.label(), value));
                }
                Ok(None) => {}
                Err(e) => self.activity.warn(e.to_string()),
            },
            KeyCode::Esc => self.settings_form.cancel_edit(),
            KeyCode::Backspace => self.settings_form.pop_char(),
            KeyCode::Char(c)
                if !c.is_control() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.settings_form.push_char(c)
            }
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        match self.active_view {
            View::Fleet => self.fleet.select_prev(),
            View::Routes => self.routes.select_prev(),
            View::Drivers => self.drivers.select_prev(),
            View::Settings => self.settings_form.select_prev(),
            View::Overview | View::Demand => {}
        }
    }

    fn select_next(&mut self) {
        match self.active_view {
            View::Fleet => self.fleet.select_next(),
            View::Routes => self.routes.select_next(),
            View::Drivers => self.drivers.select_next(),
            View::Settings => self.settings_form.select_next(),
            View::Overview | View::Demand => {}
        }
    }

    fn cycle_setting(&mut self, forward: bool) {
        if self.active_view != View::Settings {
            return;
        }
        if let Some(field) = self.settings_form.cycle_choice(forward) {
            let key = field.key();
            let value = self.settings_form.settings.display(key);
            self.activity.info(format!("{} set to {}", key.label(), value));
        }
    }

    /// Enter on a row. Row actions are placeholders that only log.
    fn activate_selected(&mut self) {
        match self.active_view {
            View::Fleet => {
                if let Some(bus) = self.fleet.selected_item() {
                    let msg = format!(
                        "Reassign bus {} at {}: dispatch is not available",
                        bus.number, bus.location
                    );
                    self.activity.info(msg);
                }
            }
            View::Routes => {
                if let Some(route) = self.routes.selected_item() {
                    let msg = format!("Edit route {}: route editing is not available", route.number);
                    self.activity.info(msg);
                }
            }
            View::Drivers => {
                if let Some(driver) = self.drivers.selected_item() {
                    let msg = format!(
                        "Reassign driver {}: dispatch is not available",
                        driver.name
                    );
                    self.activity.info(msg);
                }
            }
            View::Settings => {
                if self.settings_form.selected_key().is_numeric() {
                    self.settings_form.begin_edit();
                } else {
                    self.cycle_setting(true);
                }
            }
            View::Overview | View::Demand => {}
        }
    }

    fn add_new(&mut self) {
        match self.active_view {
            View::Routes => self.activity.info("Add New Route is not available"),
            View::Drivers => self.activity.info("Add New Driver is not available"),
            _ => {}
        }
    }

    /// Save is a placeholder: values live for this session only.
    pub fn save_settings(&mut self) {
        tracing::info!(settings = ?self.settings_form.settings, "save settings requested");
        self.activity.push(ConsoleMessage::info(
            "Settings kept for this session (not persisted)",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{SettingKey, Settings};
    use crate::state::ConsoleLevel;

    fn app() -> App {
        App::new(&Config::default(), Dataset::sample())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_view_cycle() {
        let mut view = View::Overview;
        for _ in 0..View::ALL.len() {
            view = view.next();
        }
        assert_eq!(view, View::Overview);
        assert_eq!(View::Overview.prev(), View::Settings);
        assert_eq!(View::Fleet.next(), View::Routes);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("fleet".parse::<View>().unwrap(), View::Fleet);
        assert_eq!(" Drivers ".parse::<View>().unwrap(), View::Drivers);
        assert!(matches!(
            "dispatch".parse::<View>(),
            Err(DashError::UnknownView(_))
        ));
    }

    #[test]
    fn test_view_from_digit() {
        assert_eq!(View::from_digit('1'), Some(View::Overview));
        assert_eq!(View::from_digit('6'), Some(View::Settings));
        assert_eq!(View::from_digit('0'), None);
        assert_eq!(View::from_digit('7'), None);
    }

    #[test]
    fn test_select_view_only_changes_view() {
        let mut app = app();
        let settings_before = app.settings_form.settings.clone();
        let sidebar_before = app.sidebar_open;

        for view in View::ALL {
            app.select_view(view);
            assert_eq!(app.active_view, view);
            assert_eq!(app.sidebar_open, sidebar_before);
            assert_eq!(app.settings_form.settings, settings_before);
        }
    }

    #[test]
    fn test_toggle_sidebar_round_trip() {
        let mut app = app();
        let width = app.sidebar_width();
        assert_eq!(width, SIDEBAR_OPEN_WIDTH);

        app.toggle_sidebar();
        assert_eq!(app.sidebar_width(), SIDEBAR_COLLAPSED_WIDTH);
        assert_eq!(app.active_view, View::Overview);

        app.toggle_sidebar();
        assert_eq!(app.sidebar_width(), width);
    }

    #[test]
    fn test_keys_switch_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, View::Fleet);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, View::Routes);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_view, View::Demand);
    }

    #[test]
    fn test_initial_settings_are_defaults() {
        let app = app();
        assert_eq!(app.settings_form.settings, Settings::default());
    }

    #[test]
    fn test_config_seeds_state() {
        let config = Config {
            initial_view: View::Drivers,
            sidebar_open: false,
            ..Config::default()
        };
        let app = App::new(&config, Dataset::sample());
        assert_eq!(app.active_view, View::Drivers);
        assert_eq!(app.sidebar_width(), SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_settings_edit_via_keys() {
        let mut app = app();
        app.select_view(View::Settings);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(
            app.settings_form.selected_key(),
            SettingKey::DemandPredictionInterval
        );

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);

        let mut expected = Settings::default();
        expected.demand_prediction_interval = 45;
        assert_eq!(app.settings_form.settings, expected);
        assert_eq!(app.activity.latest().unwrap().level, ConsoleLevel::Info);
    }

    #[test]
    fn test_invalid_edit_logs_warning() {
        let mut app = app();
        app.select_view(View::Settings);

        press(&mut app, KeyCode::Enter);
        // 'q' is input while the edit buffer is open
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.settings_form.settings, Settings::default());
        assert_eq!(app.activity.latest().unwrap().level, ConsoleLevel::Warn);
    }

    #[test]
    fn test_modified_chars_not_typed_into_edit_buffer() {
        let mut app = app();
        app.select_view(View::Settings);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.settings_form.editing.as_deref(), Some("80"));

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert_eq!(app.settings_form.editing.as_deref(), Some("80"));

        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::SHIFT));
        assert_eq!(app.settings_form.editing.as_deref(), Some("805"));
    }

    #[test]
    fn test_placeholder_actions_change_no_data() {
        let mut app = app();
        let buses = app.fleet.items.clone();
        let routes = app.routes.items.clone();

        app.select_view(View::Fleet);
        press(&mut app, KeyCode::Enter);
        app.select_view(View::Routes);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        app.select_view(View::Settings);
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.fleet.items, buses);
        assert_eq!(app.routes.items, routes);
        assert_eq!(app.settings_form.settings, Settings::default());
        assert!(
            app.activity
                .latest()
                .unwrap()
                .message
                .contains("not persisted")
        );
    }

    #[test]
    fn test_renumbered_bus_reported() {
        let app = app();
        let first = app.activity.iter().next().unwrap();
        assert_eq!(first.level, ConsoleLevel::Warn);
        assert!(first.message.contains("20 January"));
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, View::Overview);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

// UI module for rendering the TUI.
// Lays out the header, sidebar, active panel, status bar, and help overlay.

mod demand;
mod overview;
mod settings;
mod sidebar;
mod tables;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};
use crate::state::ConsoleLevel;

const DASHBOARD_TITLE: &str = "Advanced Dynamic Bus Routing Operations Dashboard";

/// Title of the main block on each panel.
pub fn panel_title(view: View) -> &'static str {
    match view {
        View::Overview => "Demand Heatmap",
        View::Demand => "Hourly Demand Trend",
        View::Fleet => "Live Fleet Status",
        View::Routes => "Route Management",
        View::Drivers => "Driver Management",
        View::Settings => "System Settings",
    }
}

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Sidebar + content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.sidebar_width()),
            Constraint::Min(1),
        ])
        .split(chunks[0]);

    sidebar::draw_sidebar(frame, app, body[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(1),    // Active panel
        ])
        .split(body[1]);

    draw_heading(frame, main[0]);
    draw_content(frame, app, main[1]);
    draw_status_bar(frame, app, chunks[1]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        format!(" {}", DASHBOARD_TITLE),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(heading, area);
}

/// Draw the panel for the active view. Only one panel is drawn.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_view {
        View::Overview => overview::draw_overview(frame, app, area),
        View::Demand => demand::draw_demand(frame, app, area),
        View::Fleet => tables::render_fleet_table(frame, &mut app.fleet, area),
        View::Routes => tables::render_routes_table(frame, &mut app.routes, area),
        View::Drivers => tables::render_drivers_table(frame, &mut app.drivers, area),
        View::Settings => settings::draw_settings(frame, &app.settings_form, area),
    }
}

/// Draw the status bar with keybinding hints and the latest activity.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Select", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab/1-6 "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  m "),
        Span::styled("Sidebar", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(msg) = app.activity.latest() {
        let (icon, color) = match msg.level {
            ConsoleLevel::Warn => ("⚠", Color::Yellow),
            ConsoleLevel::Info => ("ℹ", Color::Cyan),
        };
        let time = msg
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string();

        hints.push(Span::raw("   "));
        hints.push(Span::styled(time, Style::default().fg(Color::DarkGray)));
        hints.push(Span::styled(
            format!(" {} {}", icon, msg.message),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 52.min(area.width);
    let popup_height = 19.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("Tab/Shift-Tab", "Next / previous view"),
        key("1-6", "Jump to view"),
        key("m", "Expand / collapse sidebar"),
        key("↑/↓ or j/k", "Move selection"),
        key("Enter", "Row action / edit setting"),
        key("←/→ or h/l", "Change notification method"),
        key("a", "Add new route / driver"),
        key("s", "Save settings"),
        key("Esc", "Cancel edit / close help"),
        key("?", "Show/hide this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

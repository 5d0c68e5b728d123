// Table panels for fleet, routes, and drivers.
// Each row ends with a placeholder action button.

use ratatui::{prelude::*, widgets::*};

use crate::app::View;
use crate::fleet::{Bus, BusStatus, DemandLevel, Driver, DutyStatus, Route};
use crate::state::SelectableTable;

fn header(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().copied())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1)
}

fn action_cell(label: &str) -> Cell<'static> {
    Cell::from(format!("[{}]", label)).style(Style::default().fg(Color::Blue))
}

fn table_block(view: View, description: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", super::panel_title(view)))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", description),
            Style::default().fg(Color::DarkGray),
        )))
}

fn render_table(
    frame: &mut Frame,
    rows: Vec<Row>,
    widths: &[Constraint],
    header_row: Row,
    block: Block,
    state: &mut TableState,
    area: Rect,
) {
    let table = Table::new(rows, widths.iter().copied())
        .header(header_row)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, state);
}

/// Split off a one-line footer for the "Add New" hint.
fn with_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_add_hint(frame: &mut Frame, label: &str, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" a", Style::default().fg(Color::Yellow)),
        Span::styled(format!(" = {}", label), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(hint, area);
}

fn bus_status_color(status: BusStatus) -> Color {
    match status {
        BusStatus::OnRoute => Color::Cyan,
        BusStatus::Available => Color::Green,
        BusStatus::Crowded => Color::Red,
    }
}

fn demand_color(level: DemandLevel) -> Color {
    match level {
        DemandLevel::High => Color::Red,
        DemandLevel::Medium => Color::Yellow,
        DemandLevel::Low => Color::Green,
    }
}

fn duty_color(status: DutyStatus) -> Color {
    match status {
        DutyStatus::OnDuty => Color::Green,
        DutyStatus::Break => Color::Yellow,
        DutyStatus::OffDuty => Color::Gray,
    }
}

/// Render the Live Fleet Status table.
pub fn render_fleet_table(frame: &mut Frame, table: &mut SelectableTable<Bus>, area: Rect) {
    let rows: Vec<Row> = table
        .items
        .iter()
        .map(|bus| {
            Row::new(vec![
                Cell::from(bus.number.clone()),
                Cell::from(bus.location.clone()),
                Cell::from(format!("{}%", bus.occupancy)),
                Cell::from(bus.status.label())
                    .style(Style::default().fg(bus_status_color(bus.status))),
                action_cell("Reassign"),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(22),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    render_table(
        frame,
        rows,
        &widths,
        header(&["Bus Number", "Location", "Occupancy", "Status", "Action"]),
        table_block(
            View::Fleet,
            "Real-time view of all buses, their current status, and occupancy",
        ),
        &mut table.table_state,
        area,
    );
}

/// Render the Route Management table.
pub fn render_routes_table(frame: &mut Frame, table: &mut SelectableTable<Route>, area: Rect) {
    let (table_area, footer) = with_footer(area);

    let rows: Vec<Row> = table
        .items
        .iter()
        .map(|route| {
            Row::new(vec![
                Cell::from(route.number.clone()),
                Cell::from(route.start_point.clone()),
                Cell::from(route.end_point.clone()),
                Cell::from(route.avg_demand.label())
                    .style(Style::default().fg(demand_color(route.avg_demand))),
                action_cell("Edit"),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(13),
        Constraint::Min(18),
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    render_table(
        frame,
        rows,
        &widths,
        header(&[
            "Route Number",
            "Start Point",
            "End Point",
            "Avg. Demand",
            "Action",
        ]),
        table_block(View::Routes, "Manage and optimize bus routes"),
        &mut table.table_state,
        table_area,
    );
    draw_add_hint(frame, "Add New Route", footer);
}

/// Render the Driver Management table.
pub fn render_drivers_table(frame: &mut Frame, table: &mut SelectableTable<Driver>, area: Rect) {
    let (table_area, footer) = with_footer(area);

    let rows: Vec<Row> = table
        .items
        .iter()
        .map(|driver| {
            Row::new(vec![
                Cell::from(driver.name.clone()),
                Cell::from(driver.bus_number.clone()),
                Cell::from(driver.status.label())
                    .style(Style::default().fg(duty_color(driver.status))),
                Cell::from(format!("{:.1}", driver.rating)),
                action_cell("Reassign"),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    render_table(
        frame,
        rows,
        &widths,
        header(&["Driver Name", "Bus Number", "Status", "Rating", "Action"]),
        table_block(View::Drivers, "Manage driver assignments and performance"),
        &mut table.table_state,
        table_area,
    );
    draw_add_hint(frame, "Add New Driver", footer);
}

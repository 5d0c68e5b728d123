// Overview panel.
// KPI cards above a canvas map with heat circles and bus markers.

use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Points},
        *,
    },
};

use crate::app::{App, View};
use crate::fleet::{Bus, BusStatus, HeatPoint, Stat, mock::MAP_CENTER};

/// Circle radius in degrees for a point of intensity 1.0.
const HEAT_RADIUS_DEG: f64 = 0.006;
/// Fraction of the data extent added around the map edges.
const MAP_PADDING: f64 = 0.15;

pub fn draw_overview(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // KPI cards
            Constraint::Min(8),    // Map
        ])
        .split(area);

    draw_stats(frame, &app.stats, chunks[0]);
    draw_heatmap(frame, &app.heat_points, &app.fleet.items, chunks[1]);
}

fn draw_stats(frame: &mut Frame, stats: &[Stat], area: Rect) {
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len().max(1) as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let text = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.note, Style::default().fg(Color::DarkGray))),
        ];
        let card = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", stat.title)),
        );
        frame.render_widget(card, *cell);
    }
}

/// One circle per heat point, radius scaled by intensity.
pub fn heat_circles(points: &[HeatPoint]) -> Vec<Circle> {
    points
        .iter()
        .map(|p| Circle {
            x: p.lng,
            y: p.lat,
            radius: HEAT_RADIUS_DEG * p.intensity,
            color: Color::Red,
        })
        .collect()
}

/// Canvas bounds `([min_lng, max_lng], [min_lat, max_lat])` covering all
/// points plus padding. Falls back to a box around the map center.
pub fn map_bounds(points: &[HeatPoint], buses: &[Bus]) -> ([f64; 2], [f64; 2]) {
    let coords = points
        .iter()
        .map(|p| (p.lng, p.lat))
        .chain(buses.iter().map(|b| (b.lng, b.lat)));

    let (min_x, max_x, min_y, max_y) = coords.fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), (x, y)| {
            (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
        },
    );

    if min_x > max_x {
        let (lat, lng) = MAP_CENTER;
        return ([lng - 0.05, lng + 0.05], [lat - 0.05, lat + 0.05]);
    }

    let x_range = (max_x - min_x).max(0.01);
    let y_range = (max_y - min_y).max(0.01);
    (
        [min_x - MAP_PADDING * x_range, max_x + MAP_PADDING * x_range],
        [min_y - MAP_PADDING * y_range, max_y + MAP_PADDING * y_range],
    )
}

fn bus_color(status: BusStatus) -> Color {
    match status {
        BusStatus::OnRoute => Color::Cyan,
        BusStatus::Available => Color::Green,
        BusStatus::Crowded => Color::LightRed,
    }
}

fn draw_heatmap(frame: &mut Frame, points: &[HeatPoint], buses: &[Bus], area: Rect) {
    let (x_bounds, y_bounds) = map_bounds(points, buses);
    let circles = heat_circles(points);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", super::panel_title(View::Overview)))
                .title_bottom(Line::from(Span::styled(
                    " Live view of high-demand areas and crowded routes ",
                    Style::default().fg(Color::DarkGray),
                ))),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for circle in &circles {
                ctx.draw(circle);
            }
            ctx.layer();

            for bus in buses {
                ctx.draw(&Points {
                    coords: &[(bus.lng, bus.lat)],
                    color: bus_color(bus.status),
                });
                ctx.print(
                    bus.lng,
                    bus.lat,
                    Span::styled(
                        format!(
                            " Bus {} · {} · {}%",
                            bus.number,
                            bus.status.label(),
                            bus.occupancy
                        ),
                        Style::default()
                            .fg(bus_color(bus.status))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Dataset;

    #[test]
    fn test_one_circle_per_heat_point() {
        let data = Dataset::sample();
        let circles = heat_circles(&data.heat_points);
        assert_eq!(circles.len(), 5);

        // Radius follows intensity: 0.9 is the largest, 0.5 the smallest
        let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
        let max = radii.iter().cloned().fold(f64::MIN, f64::max);
        let min = radii.iter().cloned().fold(f64::MAX, f64::min);
        assert!((max - HEAT_RADIUS_DEG * 0.9).abs() < 1e-12);
        assert!((min - HEAT_RADIUS_DEG * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_map_bounds_cover_all_points() {
        let data = Dataset::sample();
        let ([x0, x1], [y0, y1]) = map_bounds(&data.heat_points, &data.buses);
        for bus in &data.buses {
            assert!(bus.lng > x0 && bus.lng < x1);
            assert!(bus.lat > y0 && bus.lat < y1);
        }
    }

    #[test]
    fn test_map_bounds_empty_uses_center() {
        let ([x0, x1], [y0, y1]) = map_bounds(&[], &[]);
        let (lat, lng) = MAP_CENTER;
        assert!(x0 < lng && lng < x1);
        assert!(y0 < lat && lat < y1);
    }
}

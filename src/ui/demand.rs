// Demand Analysis panel.
// Hourly demand bar chart and the static prediction notes.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};
use crate::fleet::DemandSample;

const BAR_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

pub fn draw_demand(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),                                     // Chart
            Constraint::Length(app.predictions.len() as u16 + 2), // Predictions
        ])
        .split(area);

    draw_chart(frame, &app.demand, chunks[0]);
    draw_predictions(frame, &app.predictions, chunks[1]);
}

/// One bar per sample, labelled with its time.
pub fn demand_bars(samples: &[DemandSample]) -> Vec<Bar<'_>> {
    samples
        .iter()
        .map(|s| {
            Bar::default()
                .value(s.passengers)
                .label(Line::from(s.time.as_str()))
                .style(Style::default().fg(BAR_COLOR))
                .value_style(Style::default().fg(Color::Black).bg(BAR_COLOR))
        })
        .collect()
}

fn draw_chart(frame: &mut Frame, samples: &[DemandSample], area: Rect) {
    let bars = demand_bars(samples);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", super::panel_title(View::Demand)))
                .title_bottom(Line::from(Span::styled(
                    " Passenger count over the last 24 hours ",
                    Style::default().fg(Color::DarkGray),
                ))),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(3);

    frame.render_widget(chart, area);
}

fn draw_predictions(frame: &mut Frame, predictions: &[&str], area: Rect) {
    let items: Vec<ListItem> = predictions
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Yellow)),
                Span::raw(*p),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Demand Prediction ")
            .title_bottom(Line::from(Span::styled(
                " Forecasted peak hours and recommended preemptive bus assignments ",
                Style::default().fg(Color::DarkGray),
            ))),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Dataset;

    #[test]
    fn test_one_bar_per_sample() {
        let data = Dataset::sample();
        assert_eq!(demand_bars(&data.demand).len(), 6);
        assert!(demand_bars(&[]).is_empty());
    }
}

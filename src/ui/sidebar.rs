// Sidebar navigation.
// Lists the six views, highlights the active one, and collapses to glyphs.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};

/// Draw the navigation sidebar.
pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = if app.sidebar_open {
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Dashboard ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
    } else {
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" ☰ ")
    };

    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == app.active_view {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = if app.sidebar_open {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{} ", view.glyph()), style),
                    Span::styled(view.title(), style),
                ])
            } else {
                Line::from(Span::styled(view.glyph(), style)).alignment(Alignment::Center)
            };

            ListItem::new(line)
        })
        .collect();

    let selected = View::ALL
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);
    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    frame.render_stateful_widget(list, area, &mut list_state);
}

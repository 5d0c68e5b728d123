// System Settings panel.
// One row per setting; the selected row shows the edit buffer while editing.

use ratatui::{prelude::*, widgets::*};

use crate::app::View;
use crate::fleet::SettingKey;
use crate::state::SettingsForm;

const LABEL_WIDTH: usize = 50;

pub fn draw_settings(frame: &mut Frame, form: &SettingsForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(SettingKey::ALL.len() as u16 + 2), // Form rows
            Constraint::Length(1),                             // Instructions
        ])
        .split(area);

    let items: Vec<ListItem> = SettingKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let label = format!("{:<width$}", key.label(), width = LABEL_WIDTH);
            let value = match (&form.editing, i == form.selected) {
                (Some(buffer), true) => vec![
                    Span::raw(buffer.clone()),
                    Span::styled("█", Style::default().fg(Color::Yellow)),
                ],
                _ if !key.is_numeric() => vec![
                    Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        form.settings.display(*key),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
                ],
                _ => vec![Span::styled(
                    form.settings.display(*key),
                    Style::default().fg(Color::White),
                )],
            };

            let mut spans = vec![Span::styled(label, Style::default().fg(Color::Gray))];
            spans.extend(value);
            ListItem::new(Line::from(spans))
        })
        .collect();

    let border_color = if form.is_editing() {
        Color::Yellow
    } else {
        Color::White
    };

    let mut list_state = ListState::default();
    list_state.select(Some(form.selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", super::panel_title(View::Settings)))
                .title_bottom(Line::from(Span::styled(
                    " Configure system parameters and thresholds ",
                    Style::default().fg(Color::DarkGray),
                ))),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let instructions = if form.is_editing() {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Apply  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Edit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::styled(" = Change  ", Style::default().fg(Color::DarkGray)),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::styled(" = Save Settings ", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(instructions), chunks[1]);
}

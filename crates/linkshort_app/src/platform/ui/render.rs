use linkshort_core::{AppViewModel, CopyButtonState, CopyButtonView, PanelView, RequestKind, StatsView};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::ScreenAreas;

pub fn draw(frame: &mut Frame, view: &AppViewModel) {
    let areas = ScreenAreas::split(frame.area());

    draw_title(frame, areas.title, view);
    draw_input(frame, areas.input, view);
    draw_notice(frame, areas.notice, view);
    draw_panel(frame, areas.panel, view);

    let hint = match view.panel {
        PanelView::Idle { .. } => HINT_IDLE,
        PanelView::Loading { .. } => HINT_LOADING,
        PanelView::Result { .. } => HINT_RESULT,
        PanelView::Stats(_) => HINT_STATS,
        PanelView::Error { .. } => HINT_ERROR,
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(colors::MUTED)),
        areas.footer,
    );
}

fn draw_title(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = vec![Span::styled(
        APP_TITLE,
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(
        format!("  {}", view.backend),
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let editing = matches!(view.panel, PanelView::Idle { .. });
    let border = if editing { colors::ACCENT } else { colors::MUTED };
    let block = Block::default()
        .title(INPUT_TITLE)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let text = if view.input.is_empty() && editing {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(colors::MUTED))
    } else {
        Span::raw(view.input.as_str())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if editing {
        let inner_width = area.width.saturating_sub(2);
        let offset = (view.input.chars().count() as u16).min(inner_width.saturating_sub(1));
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if let PanelView::Idle {
        validation: Some(message),
    } = &view.panel
    {
        frame.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(colors::WARNING)),
            area,
        );
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    match &view.panel {
        PanelView::Idle { .. } => {
            frame.render_widget(Paragraph::new(IDLE_PROMPT).wrap(Wrap { trim: false }), area);
        }
        PanelView::Loading { kind } => {
            let text = match kind {
                RequestKind::Create => LOADING_CREATE,
                RequestKind::Stats => LOADING_STATS,
            };
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(colors::ACCENT)),
                area,
            );
        }
        PanelView::Result {
            short_url,
            long_url,
        } => {
            let highlight = Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD);
            let lines = vec![
                Line::from(vec![
                    Span::raw("Short URL:    "),
                    Span::styled(short_url.as_str(), highlight),
                ]),
                copy_line('c', &view.short_url_button),
                Line::default(),
                Line::from(vec![Span::raw("Original URL: "), Span::raw(long_url.as_str())]),
                copy_line('o', &view.long_url_button),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .block(panel_block(RESULT_TITLE, colors::SUCCESS))
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
        PanelView::Stats(stats) => {
            let mut lines = stats_lines(stats);
            lines.push(Line::default());
            lines.push(copy_line('c', &view.short_url_button));
            frame.render_widget(
                Paragraph::new(lines)
                    .block(panel_block(STATS_TITLE, colors::ACCENT))
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
        PanelView::Error { message } => {
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(colors::ERROR))
                    .block(panel_block(ERROR_TITLE, colors::ERROR))
                    .wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}

fn panel_block(title: &str, color: ratatui::style::Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn stats_lines(stats: &StatsView) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(format!("Short code:   {}", stats.short_code)),
        Line::from(format!("Clicks:       {}", stats.click_count)),
        Line::from(format!("Created:      {}", stats.created)),
    ];
    if let Some(long_url) = &stats.long_url {
        lines.push(Line::from(format!("Original URL: {}", long_url)));
    }
    lines
}

fn copy_line(key: char, button: &CopyButtonView) -> Line<'static> {
    let style = match button.state {
        CopyButtonState::Default => Style::default().fg(colors::ACCENT),
        CopyButtonState::Copied => Style::default().fg(colors::SUCCESS),
        CopyButtonState::Failed => Style::default().fg(colors::ERROR),
    };
    let mut spans = vec![Span::styled(format!("[{}] {}", key, button.label), style)];
    if let Some(detail) = &button.detail {
        spans.push(Span::styled(format!(" ({})", detail), style));
    }
    Line::from(spans)
}

use crate::app::App;
use crate::models::TARGET;
use crate::ui::layout::calculate_finished_chunks;
use crate::ui::quiz::TITLE;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_finished(f: &mut Frame, app: &App) {
    let layout = calculate_finished_chunks(f.area());

    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let history = app.session.history();
    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(Span::styled(
        "That's all the questions. Well done!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(""));

    let first_try = history.iter().filter(|r| r.misses == 0).count();
    summary_text.push_line(Line::from(format!(
        "Right on the first try: {} / {}",
        first_try,
        history.len()
    )));
    summary_text.push_line(Line::from(""));

    for record in history {
        let misses = match record.misses {
            0 => String::new(),
            1 => "  (1 miss)".to_string(),
            n => format!("  ({} misses)", n),
        };
        summary_text.push_line(Line::from(format!(
            "{} + {} = {}{}",
            record.question,
            record.question.complement(),
            TARGET,
            misses
        )));
    }

    let summary = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("r", key),
        Span::from(" Start over  "),
        Span::styled("Esc", key),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

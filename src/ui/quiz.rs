use crate::app::App;
use crate::models::{Digit, Phase};
use crate::ui::layout::{calculate_button_cells, calculate_quiz_chunks};
use crate::utils::{layout_marks, marks_for, Mark, MARK_GAP};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TITLE: &str = "How many more to make 10?";

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let layout = calculate_quiz_chunks(f.area());
    let session = &app.session;

    let progress = format!(
        "{} - Question {} / {}",
        TITLE,
        session.used().len(),
        Digit::ALL.len()
    );
    let header = Paragraph::new(progress)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    draw_question(f, app, layout.question_area);

    if session.phase() == Phase::Solved {
        draw_correct(f, layout.answer_area);
    } else {
        draw_buttons(f, app, layout.answer_area);
    }

    let help_text = match session.phase() {
        Phase::Solved => Line::from(vec![
            Span::styled("Enter", key_style()),
            Span::from(" Next question  "),
            Span::styled("Esc", key_style()),
            Span::from(" Quit"),
        ]),
        _ => Line::from(vec![
            Span::styled("1-9", key_style()),
            Span::from(" Answer  "),
            Span::styled("←/→", key_style()),
            Span::from(" Choose  "),
            Span::styled("Enter", key_style()),
            Span::from(" Press  "),
            Span::styled("Esc", key_style()),
            Span::from(" Quit"),
        ]),
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_question(f: &mut Frame, app: &App, area: Rect) {
    let mut text = Text::default();
    if let Some(question) = app.session.current() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            question.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));

        let marks = marks_for(question, app.session.is_solved());
        let inner_width = area.width.saturating_sub(2) as usize;
        for row in layout_marks(&marks, &app.glyphs, inner_width) {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, mark) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::from(MARK_GAP));
                }
                let color = match mark {
                    Mark::Question => Color::Yellow,
                    Mark::Complement => Color::Green,
                };
                spans.push(Span::styled(
                    app.glyphs.for_mark(*mark),
                    Style::default().fg(color),
                ));
            }
            text.push_line(Line::from(spans));
        }
    }

    let question = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, area);
}

fn draw_buttons(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Your Answer");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let session = &app.session;
    for (digit, cell) in Digit::ALL.iter().zip(calculate_button_cells(inner)) {
        let wrong = session.wrong_guesses().contains(digit);
        let label = if wrong {
            format!("{} {}", digit, app.glyphs.wrong)
        } else {
            digit.to_string()
        };

        let style = if wrong {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        } else if session.is_disabled(*digit) {
            Style::default().fg(Color::DarkGray)
        } else if *digit == app.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(button, cell);
    }
}

fn draw_correct(f: &mut Frame, area: Rect) {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Correct!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::from("Press "),
        Span::styled("Enter", key_style()),
        Span::from(" for the next question"),
    ]));

    let correct = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(correct, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    for chunk in chunks.iter() {
        f.render_widget(Clear, *chunk);
    }

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Stop practising now?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep playing)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

//! TUI rendering with ratatui
//!
//! One screen per game page: landing, difficulty, the guess grid, and the
//! game-over summary.

use super::app::{App, AppPage, MessageStyle};
use crate::core::{LetterResult, LetterStatus};
use crate::game::{Difficulty, MAX_ATTEMPTS, SessionStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.page {
        AppPage::Landing => render_landing(f, app, chunks[1]),
        AppPage::Difficulty => render_difficulty(f, chunks[1]),
        AppPage::Game | AppPage::GameOver => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌍 COUNTRYLE - Guess the Country")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_landing(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("Enter your name to begin:"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(
                format!("{}_", app.name_input),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: continue    Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Welcome ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_difficulty(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let line = Line::from(vec![
                Span::styled(
                    format!("  {}. ", i + 1),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<13}", difficulty.to_string()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", difficulty.bounds_label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose Difficulty (press 1, 2, or 3) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guess grid
            Constraint::Percentage(40), // Hint / result / messages
        ])
        .split(area);

    render_grid(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    if app.page == AppPage::GameOver {
        render_result(f, app, side_chunks[0]);
    } else {
        render_hint(f, app, side_chunks[0]);
    }
    render_messages(f, app, side_chunks[1]);
}

fn letter_span(result: &LetterResult) -> Span<'static> {
    let cell = format!(" {} ", result.letter.to_ascii_uppercase());
    let style = match result.status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    Span::styled(cell, style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let word_len = session.secret().len();
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_ATTEMPTS {
        let mut spans = vec![Span::raw("  ")];

        if let Some(attempt) = session.history().get(row) {
            for result in attempt.feedback.results() {
                spans.push(letter_span(result));
                spans.push(Span::raw(" "));
            }
        } else if row == session.attempts_used() && !session.is_over() {
            // The row being typed
            let typed: Vec<char> = app.guess_input.chars().collect();
            for i in 0..word_len {
                let span = typed.get(i).map_or_else(
                    || Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    |c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                spans.push(span);
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..word_len {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(
        " {} | {} | {} attempts left ",
        session.player(),
        session.difficulty(),
        session.attempts_left()
    );
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = app.hint.as_ref().map_or_else(
        || {
            Line::from(Span::styled(
                "Press Tab to reveal a hint (once per game)",
                Style::default().fg(Color::DarkGray),
            ))
        },
        |hint| Line::from(Span::styled(hint.clone(), Style::default().fg(Color::Cyan))),
    );

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let (lines, color) = match session.status() {
        SessionStatus::Won => (
            vec![
                Line::from(Span::styled(
                    "🎉 You guessed it!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "You guessed the country: {}",
                    session.record().name()
                )),
            ],
            Color::Green,
        ),
        _ => (
            vec![
                Line::from(Span::styled(
                    "Game Over!",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("The country was: {}", session.record().name())),
            ],
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let page_text = match app.page {
        AppPage::Landing => "Page: Landing",
        AppPage::Difficulty => "Page: Difficulty",
        AppPage::Game => "Page: Game",
        AppPage::GameOver => "Page: Game Over",
    };
    let page = Paragraph::new(page_text).alignment(Alignment::Center);
    f.render_widget(page, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.page {
        AppPage::Landing => "Enter: continue | Esc: quit",
        AppPage::Difficulty => "1/2/3: pick level | Esc: back",
        AppPage::Game => "Enter: guess | Tab: hint | Esc: home",
        AppPage::GameOver => "r: play again | q: quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

//! TUI rendering with ratatui
//!
//! Digit slots, guess history, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::Digit;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
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

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Input and messages
            Constraint::Percentage(45), // History
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_history(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS 🐄")
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

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Digit slots
            Constraint::Length(4), // Keys help
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_slots(f, app, chunks[0]);
    render_keys(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let input = app.session.input();
    let won = app.session.is_won();
    let focused = input.focused();

    let mut spans = Vec::with_capacity(input.len() * 2);
    for (i, slot) in input.slots().iter().enumerate() {
        let text = format!(" {} ", slot.map_or('_', Digit::to_char));
        let style = if won {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if i == focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }

    let content = vec![Line::from(""), Line::from(spans), Line::from("")];

    let title = if won {
        " 🎉 Solved! ".to_string()
    } else {
        format!(" Your Guess ({} digits) ", input.len())
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(if won { Color::Green } else { Color::Yellow })),
        );

    f.render_widget(paragraph, area);
}

fn render_keys(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.session.is_won() {
        vec![Line::from("n: New game | e/h: Easy/Hard | q: Quit")]
    } else {
        vec![
            Line::from("0-9: Enter digit | Backspace: Delete | ←/→: Move"),
            Line::from("Enter: Submit | n: New game | e/h: Easy/Hard | q: Quit"),
        ]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Keys "));

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.round().attempts();

    // Newest first
    let history_items: Vec<ListItem> = attempts
        .iter()
        .enumerate()
        .rev()
        .map(|(i, attempt)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<6}", attempt.guess.to_string()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("Bulls-{}", attempt.score.bulls()),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("Cows-{}", attempt.score.cows()),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
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

    let difficulty = app.session.difficulty();
    let mode = Paragraph::new(format!("Mode: {}", difficulty.name().to_uppercase()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(mode, chunks[0]);

    let round = Paragraph::new(format!("Round: {}", app.session.round().attempt_count()))
        .alignment(Alignment::Center);
    f.render_widget(round, chunks[1]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);
}

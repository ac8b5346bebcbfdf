//! UI rendering for the generator.

use crate::app::{App, Focus, GenerationState};
use crate::clipboard::{CopyTarget, hashtags_text};
use crate::progress::{CAPTIONS, ProgressCaptions};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::time::Instant;
use tuberank_core::{GenerationResult, VideoCategory};

const CATEGORY_COLUMNS: usize = 2;

/// Draw the whole screen.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    draw_at(f, app, Instant::now());
}

/// Draw the whole screen as of `now`.
#[tracing::instrument(skip_all)]
pub fn draw_at(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form and panels
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    draw_form(f, app, body[0]);

    match app.state() {
        GenerationState::Loading => draw_progress(f, app, now, body[1]),
        GenerationState::Success => draw_results(f, app, now, body[1]),
        GenerationState::Idle | GenerationState::Failed => draw_welcome(f, body[1]),
    }

    draw_status_bar(f, app, chunks[2]);
}

#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("TubeRank AI - YouTube SEO & Idea Generator")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

#[tracing::instrument(skip_all)]
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let banner_height = if app.error_message().is_some() { 3 } else { 0 };
    let category_rows = VideoCategory::all().count().div_ceil(CATEGORY_COLUMNS) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                 // Topic
            Constraint::Length(3),                 // Audience
            Constraint::Length(category_rows + 2), // Categories
            Constraint::Length(banner_height),     // Error banner
            Constraint::Length(3),                 // Submit
            Constraint::Min(0),
        ])
        .split(area);

    let topic = Paragraph::new(app.topic.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Video idea *")
                .border_style(focus_style(app, Focus::Topic)),
        );
    f.render_widget(topic, chunks[0]);

    let audience = Paragraph::new(app.audience.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Target audience (optional)")
            .border_style(focus_style(app, Focus::Audience)),
    );
    f.render_widget(audience, chunks[1]);

    draw_categories(f, app, chunks[2]);

    if let Some(message) = app.error_message() {
        let banner = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Error"));
        f.render_widget(banner, chunks[3]);
    }

    let (label, style) = if app.is_loading() {
        ("Generating...", Style::default().fg(Color::DarkGray))
    } else {
        (
            "Enter: Generate SEO package",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    };
    let submit = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(submit, chunks[4]);
}

#[tracing::instrument(skip_all)]
fn draw_categories(f: &mut Frame, app: &App, area: Rect) {
    let categories: Vec<VideoCategory> = VideoCategory::all().collect();
    let lines: Vec<Line> = categories
        .chunks(CATEGORY_COLUMNS)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|category| {
                    let selected = *category == app.category;
                    let marker = if selected { "● " } else { "○ " };
                    let style = if selected {
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!("{marker}{:<22}", category.to_string()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Category (←/→)")
            .border_style(focus_style(app, Focus::Category)),
    );
    f.render_widget(grid, area);
}

#[tracing::instrument(skip_all)]
fn draw_welcome(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Ready to go viral?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Describe your video idea and pick a category."),
        Line::from("You will get titles, a description, keywords,"),
        Line::from("hashtags and thumbnail ideas tuned for YouTube search."),
    ];
    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(welcome, area);
}

#[tracing::instrument(skip_all)]
fn draw_progress(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let step = app.progress_step(now).unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Analyzing and generating");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .percent(ProgressCaptions::percent_for_step(step));
    f.render_widget(gauge, chunks[0]);

    let lines: Vec<Line> = CAPTIONS
        .iter()
        .enumerate()
        .map(|(i, caption)| {
            let (marker, style) = if i < step {
                ("✓ ", Style::default().fg(Color::Green))
            } else if i == step {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("○ ", Style::default().fg(Color::DarkGray))
            };
            Line::from(Span::styled(format!("{marker}{caption}"), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

#[tracing::instrument(skip_all)]
fn draw_results(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let Some(result) = app.result() else {
        return;
    };
    let selected = if app.focus == Focus::Results {
        app.selected_target()
    } else {
        None
    };
    let lines = result_lines(result, selected, app.copied_target(now));

    let panels = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Results (↑↓ select, Enter copy, PgUp/PgDn scroll)")
                .border_style(focus_style(app, Focus::Results)),
        );
    f.render_widget(panels, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn copyable(
    target: CopyTarget,
    text: String,
    selected: Option<CopyTarget>,
    copied: Option<CopyTarget>,
) -> Line<'static> {
    let style = if selected == Some(target) {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(text, style)];
    if copied == Some(target) {
        spans.push(Span::styled(
            "  ✓ copied",
            Style::default().fg(Color::Green),
        ));
    }
    Line::from(spans)
}

/// Lines of the result panels, with copy markers applied.
fn result_lines(
    result: &GenerationResult,
    selected: Option<CopyTarget>,
    copied: Option<CopyTarget>,
) -> Vec<Line<'static>> {
    let mut lines = vec![section("Algorithm strategy")];
    lines.push(Line::from(result.algorithm_strategy.clone()));
    lines.push(Line::from(Span::styled(
        format!("Suggested category: {}", result.category),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines.push(section("Thumbnail ideas"));
    for (i, idea) in result.thumbnail_ideas.iter().enumerate() {
        lines.push(copyable(
            CopyTarget::ThumbnailText(i),
            format!("{}. \"{}\"", i + 1, idea.text),
            selected,
            copied,
        ));
        lines.push(Line::from(Span::styled(
            format!("   {}", idea.description),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(section("Suggested titles"));
    for (i, title) in result.titles.iter().enumerate() {
        lines.push(copyable(
            CopyTarget::Title(i),
            format!("{}. {}", i + 1, title),
            selected,
            copied,
        ));
    }
    lines.push(Line::from(""));

    lines.push(copyable(
        CopyTarget::Description,
        "Description [copy]".to_string(),
        selected,
        copied,
    ));
    lines.extend(
        result
            .description
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    lines.push(Line::from(""));

    lines.push(copyable(
        CopyTarget::Keywords,
        "Keywords [copy all]".to_string(),
        selected,
        copied,
    ));
    lines.push(Line::from(result.keywords.join(" · ")));
    lines.push(Line::from(""));

    lines.push(copyable(
        CopyTarget::Hashtags,
        "Hashtags [copy all]".to_string(),
        selected,
        copied,
    ));
    lines.push(Line::from(Span::styled(
        hashtags_text(&result.hashtags),
        Style::default().fg(Color::Blue),
    )));

    lines
}

#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Topic | Focus::Audience => "Type | Tab: Next field | Enter: Generate | Esc: Quit",
        Focus::Category => "←/→: Category | Tab: Next | Enter: Generate | Esc: Quit",
        Focus::Results => "↑↓: Select | Enter/c: Copy | PgUp/PgDn: Scroll | Tab: Form | Esc: Quit",
    };

    let text = if app.status_message.is_empty() {
        help_text.to_string()
    } else {
        format!("{} | {}", app.status_message, help_text)
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

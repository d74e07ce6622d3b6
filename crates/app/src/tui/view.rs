use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use repodeck_core::app::PaneStatus;

use super::model::TuiModel;

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(size);

        Self::render_title_bar(model, frame, chunks[0]);
        Self::render_panes(model, frame, chunks[1]);
        Self::render_status_bar(model, frame, chunks[2]);
    }

    fn render_title_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let loading_indicator = if model.projection.repo_list_loading {
            " [LOADING REPOSITORIES...]"
        } else if model.projection.article_loading {
            " [FETCHING...]"
        } else {
            ""
        };

        let title = match &model.projection.selected {
            Some(repo) => format!("RepoDeck - {}{}", repo.name, loading_indicator),
            None => format!("RepoDeck{loading_indicator}"),
        };

        let title_paragraph = Paragraph::new(title)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .alignment(Alignment::Center);

        frame.render_widget(title_paragraph, area);
    }

    /// The three panes: repository list, articles + chart, metadata
    fn render_panes(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Repository list
                Constraint::Min(40),    // Articles + chart
                Constraint::Length(32), // Metadata
            ])
            .split(area);

        Self::render_repo_list(model, frame, panes[0]);
        Self::render_center(model, frame, panes[1]);
        Self::render_metadata(model, frame, panes[2]);
    }

    fn render_repo_list(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Repositories");

        if model.projection.repositories.is_empty() {
            let empty_msg = if model.projection.repo_list_loading {
                "Loading repositories..."
            } else {
                "No repositories."
            };
            let paragraph = Paragraph::new(empty_msg)
                .block(block)
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        let selected_id = model.projection.selected.as_ref().map(|r| r.id);
        let items: Vec<ListItem> = model
            .projection
            .repositories
            .iter()
            .enumerate()
            .map(|(idx, repo)| {
                let is_selected = selected_id == Some(repo.id);
                let glyph = if is_selected { "▶" } else { " " };

                let mut style = Style::default();
                if is_selected {
                    style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                }
                if idx == model.cursor {
                    style = style.bg(Color::DarkGray);
                }

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{glyph} ")),
                    Span::styled(repo.name.clone(), style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_center(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let dataset = model.chart_dataset();
        let show_chart = model.ui.show_chart && dataset.is_some();

        let chunks = if show_chart {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(12)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6)])
                .split(area)
        };

        Self::render_articles(model, frame, chunks[0]);

        if show_chart {
            if let Some(dataset) = dataset {
                Self::render_chart(model, &dataset, frame, chunks[1]);
            }
        }
    }

    fn render_articles(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Articles");

        let body: Vec<Line> = match model.projection.pane_status() {
            PaneStatus::Idle => vec![Line::from("Select a repository.")],
            PaneStatus::Loading => vec![Line::from("Loading articles...")],
            _ if model.projection.articles.is_empty() => vec![Line::from("No articles yet.")],
            _ => model
                .projection
                .articles
                .iter()
                .enumerate()
                .map(|(idx, article)| {
                    let title = article
                        .title
                        .clone()
                        .unwrap_or_else(|| format!("Post {}", idx + 1));
                    let writer = article.writer.as_deref().unwrap_or("anonymous");
                    let date = format_date(&article.reg_date, model.ui.format_dates);
                    Line::from(vec![
                        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(format!("  by {writer}  {date}")),
                    ])
                })
                .collect(),
        };

        let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_chart(model: &TuiModel, dataset: &repodeck_core::app::ChartDataset, frame: &mut Frame, area: Rect) {
        let title = match &model.projection.selected {
            Some(repo) => format!("Quality metrics - {}", repo.name),
            None => "Quality metrics".to_string(),
        };

        let bars: Vec<Bar> = dataset
            .entries()
            .map(|(label, value)| {
                Bar::default()
                    .label(Line::from(label))
                    .value(value.max(0.0).round() as u64)
                    .text_value(format!("{value:.1}"))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .data(BarGroup::default().bars(&bars))
            .bar_width(10)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

        frame.render_widget(chart, area);
    }

    fn render_metadata(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Metadata");

        let body: Vec<Line> = match &model.projection.selected {
            Some(repo) => vec![
                Line::from(vec![
                    Span::styled("Created: ", Style::default().fg(Color::Gray)),
                    Span::raw(format_date(&repo.reg_date, model.ui.format_dates)),
                ]),
                Line::from(vec![
                    Span::styled("Commit:  ", Style::default().fg(Color::Gray)),
                    Span::raw(repo.last_rq_commit.clone().unwrap_or_else(|| "none".to_string())),
                ]),
                Line::from(vec![
                    Span::styled("Language: ", Style::default().fg(Color::Gray)),
                    Span::raw(repo.language.clone().unwrap_or_else(|| "N/A".to_string())),
                ]),
            ],
            None => vec![Line::from("Select a repository.")],
        };

        let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_status_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let line = if let Some(error) = model.errors.last() {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("↑↓/j,k", Style::default().fg(Color::Yellow)),
                Span::raw(" to move, "),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" to select, "),
                Span::styled("r", Style::default().fg(Color::Yellow)),
                Span::raw(" to refresh, "),
                Span::styled("q", Style::default().fg(Color::Yellow)),
                Span::raw(" to quit"),
            ])
        };

        let footer = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, area);
    }
}

/// Format a backend timestamp for display ("Mar 1, 2025"). Falls back to
/// the raw string when parsing fails or formatting is disabled.
pub fn format_date(raw: &str, enabled: bool) -> String {
    if !enabled {
        return raw.to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

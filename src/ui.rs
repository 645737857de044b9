//! UI rendering helpers for the terminal user interface.
//!
//! This module binds a `view::View` description to `ratatui` widgets. It reads
//! nothing from the app state directly.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};

use crate::view::{
    Content, FullPlayer, MiniPlayer, PlaylistCard, SettingsGroup, SettingsRow, View,
};

const CONTROLS: [(&str, &str); 8] = [
    ("1-4/tab", "switch tab"),
    ("j/k", "up/down"),
    ("enter", "select"),
    ("space/p", "play/pause"),
    ("f", "full player"),
    ("/", "search"),
    ("esc", "close"),
    ("q", "quit"),
];

const LEFT_PAD: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn toggle_mark(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Render the whole screen for `view`.
pub fn draw(frame: &mut Frame, view: &View) {
    let search_height = if view.search_bar.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(search_height),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(view.header.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let selected = view.nav.iter().position(|n| n.active).unwrap_or(0);
    let tabs = Tabs::new(view.nav.iter().map(|n| n.label))
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(tabs, chunks[1]);

    if let Some(placeholder) = view.search_bar {
        let search = Paragraph::new(placeholder)
            .dim()
            .block(Block::bordered().padding(LEFT_PAD).title(" search "));
        frame.render_widget(search, chunks[2]);
    }

    draw_content(frame, chunks[3], view.title, &view.content);
    draw_mini_player(frame, chunks[4], &view.mini_player);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(LEFT_PAD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    // Overlay on top of everything else.
    if let Some(full) = &view.full_player {
        let area = frame.area();
        draw_full_player(frame, area, full);
    }
}

fn draw_content(frame: &mut Frame, area: Rect, title: &str, content: &Content) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title.to_lowercase()));

    match content {
        Content::Library(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|r| {
                    ListItem::new(vec![
                        Line::from(r.title.bold()),
                        Line::from(vec![
                            Span::from(r.artist.to_uppercase()).dim(),
                            Span::from(format!("  ·  {}", r.cover)).dim(),
                        ]),
                    ])
                })
                .collect();
            let cursor = rows.iter().position(|r| r.under_cursor);
            render_list(frame, area, block, items, cursor);
        }
        Content::Queue { header, rows } => {
            let mut items: Vec<ListItem> = Vec::with_capacity(rows.len() + 1);
            items.push(ListItem::new(Line::from(header.to_uppercase().bold().dim())));
            for r in rows {
                let title = if r.current {
                    Span::from(r.title).bold().blue()
                } else {
                    Span::from(r.title).bold()
                };
                let line = Line::from(vec![
                    Span::from(format!("{:>2}  ", r.id)).dim(),
                    title,
                    Span::from(format!("  {}", r.duration)).dim(),
                ]);
                let item = ListItem::new(line);
                items.push(if r.current {
                    item.style(Style::default().bg(Color::DarkGray))
                } else {
                    item
                });
            }
            // Offset by one for the header line.
            let cursor = rows.iter().position(|r| r.under_cursor).map(|p| p + 1);
            render_list(frame, area, block, items, cursor);
        }
        Content::Playlists(cards) => {
            let lines: Vec<Line> = cards
                .iter()
                .flat_map(|card| match card {
                    PlaylistCard::New { label } => vec![Line::from(label.dim()), Line::default()],
                    PlaylistCard::Playlist {
                        icon,
                        name,
                        song_count,
                    } => vec![
                        Line::from(format!("{} {}", icon, name).bold()),
                        Line::from(format!("{} songs", song_count).red()),
                        Line::default(),
                    ],
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block.padding(LEFT_PAD)), area);
        }
        Content::Settings(groups) => {
            let items: Vec<ListItem> = groups.iter().flat_map(settings_items).collect();
            let cursor = groups
                .iter()
                .flat_map(|g| std::iter::once(None).chain(g.rows.iter().map(Some)))
                .position(|row| {
                    matches!(
                        row,
                        Some(SettingsRow::Toggle {
                            under_cursor: true,
                            ..
                        })
                    )
                });
            render_list(frame, area, block, items, cursor);
        }
    }
}

fn settings_items(group: &SettingsGroup) -> Vec<ListItem<'_>> {
    let mut items = vec![ListItem::new(Line::from(group.title.to_uppercase().bold().dim()))];
    for row in &group.rows {
        let line = match row {
            SettingsRow::Toggle { label, on, .. } => {
                Line::from(format!("{}  {}", toggle_mark(*on), label))
            }
            SettingsRow::Value { label, value } => Line::from(vec![
                Span::from(format!("     {}  ", label)),
                Span::from(format!("{} ❯", value)).blue(),
            ]),
        };
        items.push(ListItem::new(line));
    }
    items
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: Vec<ListItem>,
    cursor: Option<usize>,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(cursor);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_mini_player(frame: &mut Frame, area: Rect, mini: &MiniPlayer) {
    let text = vec![
        Line::from(vec![
            Span::from(format!("{}  ", mini.glyph.symbol())).bold(),
            Span::from(mini.label.as_str()).bold(),
        ]),
        Line::from(format!("art: {}", mini.cover).dim()),
    ];
    let par = Paragraph::new(text)
        .block(Block::bordered().padding(LEFT_PAD).title(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(par, area);
}

fn draw_full_player(frame: &mut Frame, area: Rect, full: &FullPlayer) {
    let popup = centered_rect_sized(60, 14, area);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::default(),
        Line::from(format!("[ {} ]", full.cover).dim()),
        Line::default(),
        Line::from(full.title.bold()),
        Line::from(full.artist.dim()),
        Line::default(),
        Line::from(format!("⏮    {}    ⏭", full.glyph.symbol()).bold()),
    ];
    let par = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" player (esc closes) ")
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(par, popup);
}

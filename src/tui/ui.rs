use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::flows::Notice;
use crate::store::Task;

use super::input::LineInput;
use super::menu::Menu;
use super::theme::Theme;

const MENU_WIDTH: u16 = 50;
const NOTICE_MIN_WIDTH: u16 = 30;
const NOTICE_MAX_WIDTH: u16 = 60;

pub fn draw_menu(frame: &mut Frame, menu: &Menu, theme: &Theme, hints: &[(&str, &str)]) {
    let [body, footer] = split_footer(frame.area());

    let height = (menu.rows().len() as u16 + 2).min(body.height);
    let area = Rect::new(body.x, body.y, MENU_WIDTH.min(body.width), height);

    let items: Vec<ListItem> = menu
        .rows()
        .iter()
        .map(|row| ListItem::new(Line::from(row.as_str())))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", menu.title()), theme.title_style()))
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        )
        .style(Style::default().fg(theme.text_primary))
        .highlight_style(theme.highlight_style())
        .highlight_symbol("► ");

    let mut state = ListState::default().with_selected(Some(menu.selected()));
    frame.render_stateful_widget(list, area, &mut state);

    render_hints(frame, footer, hints, theme);
}

/// A form-like screen: the answers given so far, then the live input line.
pub fn draw_prompt(
    frame: &mut Frame,
    theme: &Theme,
    answered: &[(String, String)],
    label: &str,
    input: &LineInput,
) {
    let [body, footer] = split_footer(frame.area());

    let secondary = Style::default().fg(theme.text_secondary);
    let mut lines: Vec<Line> = answered
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), secondary),
                Span::styled(value.as_str(), secondary),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(theme.prompt_label),
        ),
        Span::styled(input.with_cursor(), Style::default().fg(theme.text_primary)),
    ]));

    let block = Block::default()
        .title(Span::styled(" To-Do List Manager ", theme.title_style()))
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        body,
    );

    render_hints(
        frame,
        footer,
        &[(" Enter", " confirm "), (" Ctrl+C", " quit")],
        theme,
    );
}

/// The task listing: a header, then one block of detail lines per task.
pub fn task_list_lines(tasks: &[Task], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("To-Do List:", theme.title_style()),
        Line::styled("-".repeat(usize::from(MENU_WIDTH)), theme.border_style()),
    ];
    if tasks.is_empty() {
        lines.push(Line::styled(
            "No tasks yet.",
            Style::default().fg(theme.text_secondary),
        ));
    }
    for task in tasks {
        let [id, description, deadline, priority, category, status] = task.detail_lines();
        let plain = Style::default().fg(theme.text_primary);
        lines.extend([id, description, deadline, priority, category].map(|l| Line::styled(l, plain)));
        lines.push(Line::styled(status, theme.status_style(task.completed)));
        lines.push(Line::default());
    }
    lines
}

pub fn draw_tasks(frame: &mut Frame, theme: &Theme, lines: &[Line<'static>], scroll: u16) {
    let [body, footer] = split_footer(frame.area());

    frame.render_widget(Paragraph::new(lines.to_vec()).scroll((scroll, 0)), body);
    render_hints(
        frame,
        footer,
        &[
            (" Enter", " return to the menu "),
            (" ↑/↓", " scroll "),
            (" Ctrl+C", " quit"),
        ],
        theme,
    );
}

/// A centred message box, as tall as the wrapped text needs.
pub fn draw_notice(frame: &mut Frame, theme: &Theme, notice: &Notice) {
    let style = theme.notice_style(notice.kind);
    let chars = u16::try_from(notice.text.chars().count()).unwrap_or(u16::MAX);
    let width = chars
        .saturating_add(4)
        .clamp(NOTICE_MIN_WIDTH, NOTICE_MAX_WIDTH)
        .min(frame.area().width);

    let text = Paragraph::new(Line::styled(notice.text.as_str(), style)).wrap(Wrap { trim: true });
    let height = wrapped_height(&text, width.saturating_sub(2)).saturating_add(2);
    let inner = render_modal(frame, style, width, height);
    frame.render_widget(text, inner);
}

// ── Helpers ───────────────────────────────────────────────────────────

/// Visual lines `paragraph` occupies at `width`, at least 1.
fn wrapped_height(paragraph: &Paragraph, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    u16::try_from(paragraph.line_count(width).max(1)).unwrap_or(u16::MAX)
}

fn split_footer(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area)
}

/// Clear a centred panel, draw its border, return the inner area.
fn render_modal(frame: &mut Frame, border: Style, width: u16, height: u16) -> Rect {
    let area = frame.area();
    let w = width.min(area.width);
    let h = height.min(area.height);
    let panel = Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    );

    frame.render_widget(Clear, panel);
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    inner
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(key.to_string(), theme.hint_key_style()),
                Span::styled(desc.to_string(), theme.hint_desc_style()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

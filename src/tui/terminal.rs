use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::DefaultTerminal;

use crate::flows::{Notice, Prompter};
use crate::store::Task;

use super::app::Frontend;
use super::event::{self, TermEvent};
use super::input::LineInput;
use super::keymap::{KeyMap, MenuEvent, is_interrupt};
use super::menu::Menu;
use super::theme::Theme;
use super::ui;

const PAGE: u16 = 10;

/// The real terminal: ratatui for drawing, crossterm for blocking key reads.
pub struct TerminalFrontend {
    terminal: DefaultTerminal,
    theme: Theme,
    keymap: KeyMap,
    notice_for: Duration,
    /// Prompts answered in the current flow; cleared when the menu is drawn.
    answered: Vec<(String, String)>,
}

impl TerminalFrontend {
    pub fn new(terminal: DefaultTerminal, theme: Theme, keymap: KeyMap, notice_for: Duration) -> Self {
        Self {
            terminal,
            theme,
            keymap,
            notice_for,
            answered: Vec::new(),
        }
    }
}

fn next_key() -> Result<Option<KeyEvent>> {
    match event::next()? {
        TermEvent::Key(key) => Ok(Some(key)),
        TermEvent::Redraw => Ok(None),
    }
}

impl Prompter for TerminalFrontend {
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        let mut input = LineInput::default();
        loop {
            self.terminal
                .draw(|f| ui::draw_prompt(f, &self.theme, &self.answered, label, &input))?;
            let Some(key) = next_key()? else {
                continue;
            };
            if is_interrupt(key.code, key.modifiers) {
                return Ok(None);
            }
            if key.code == KeyCode::Enter {
                let value = input.value().to_string();
                self.answered.push((label.to_string(), value.clone()));
                return Ok(Some(value));
            }
            input.handle_key(key.code, key.modifiers);
        }
    }

    fn show_tasks(&mut self, tasks: &[Task]) -> Result<Option<()>> {
        let lines = ui::task_list_lines(tasks, &self.theme);
        let last = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let mut scroll: u16 = 0;
        loop {
            self.terminal
                .draw(|f| ui::draw_tasks(f, &self.theme, &lines, scroll))?;
            let Some(key) = next_key()? else {
                continue;
            };
            if is_interrupt(key.code, key.modifiers) {
                return Ok(None);
            }
            match key.code {
                KeyCode::Enter | KeyCode::Esc => return Ok(Some(())),
                KeyCode::Up | KeyCode::Char('k') => scroll = scroll.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => scroll = scroll.saturating_add(1).min(last),
                KeyCode::PageUp => scroll = scroll.saturating_sub(PAGE),
                KeyCode::PageDown => scroll = scroll.saturating_add(PAGE).min(last),
                _ => {}
            }
        }
    }

    /// Show the message until `notice_for` elapses or a key is pressed.
    fn notice(&mut self, notice: Notice) -> Result<Option<()>> {
        self.terminal
            .draw(|f| ui::draw_notice(f, &self.theme, &notice))?;
        match event::key_within(self.notice_for)? {
            Some(key) if is_interrupt(key.code, key.modifiers) => Ok(None),
            _ => Ok(Some(())),
        }
    }
}

impl Frontend for TerminalFrontend {
    fn render_menu(&mut self, menu: &Menu) -> Result<()> {
        self.answered.clear();
        let hints = self.keymap.hints();
        self.terminal
            .draw(|f| ui::draw_menu(f, menu, &self.theme, &hints))?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<MenuEvent>> {
        Ok(next_key()?.and_then(|key| self.keymap.lookup(key.code, key.modifiers)))
    }
}

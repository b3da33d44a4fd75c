//! Scripted terminal used by the flow and controller tests.

use std::collections::VecDeque;

use anyhow::Result;

use crate::flows::{Notice, Prompter};
use crate::store::Task;
use crate::tui::{Frontend, Menu, MenuEvent};

#[derive(Debug, Default)]
pub struct ScriptedIo {
    /// Answers for `read_line`; running out behaves like Ctrl+C.
    pub lines: VecDeque<String>,
    /// Answers for `show_tasks`; `false` interrupts, empty acknowledges.
    pub acks: VecDeque<bool>,
    /// Answers for `notice`; `false` interrupts, empty dismisses.
    pub notice_acks: VecDeque<bool>,
    /// Menu events; running out behaves like pressing `q`.
    pub events: VecDeque<Option<MenuEvent>>,

    pub prompts: Vec<String>,
    pub shown: Vec<Vec<i64>>,
    pub notices: Vec<Notice>,
    /// Selected row at every menu render.
    pub renders: Vec<usize>,
}

impl ScriptedIo {
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = MenuEvent>,
    {
        Self {
            events: events.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedIo {
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        self.prompts.push(label.to_string());
        Ok(self.lines.pop_front())
    }

    fn show_tasks(&mut self, tasks: &[Task]) -> Result<Option<()>> {
        self.shown.push(tasks.iter().map(|t| t.id).collect());
        Ok(self.acks.pop_front().unwrap_or(true).then_some(()))
    }

    fn notice(&mut self, notice: Notice) -> Result<Option<()>> {
        self.notices.push(notice);
        Ok(self.notice_acks.pop_front().unwrap_or(true).then_some(()))
    }
}

impl Frontend for ScriptedIo {
    fn render_menu(&mut self, menu: &Menu) -> Result<()> {
        self.renders.push(menu.selected());
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<MenuEvent>> {
        Ok(self.events.pop_front().unwrap_or(Some(MenuEvent::Quit)))
    }
}

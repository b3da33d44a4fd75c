use anyhow::Result;

use crate::context::Context;
use crate::flows::{self, FlowOutcome, Prompter};

use super::keymap::MenuEvent;
use super::menu::{Menu, MenuAction};

/// Everything the controller needs from the terminal: the flow prompts plus
/// drawing the menu and reading menu input.
pub trait Frontend: Prompter {
    fn render_menu(&mut self, menu: &Menu) -> Result<()>;

    /// Block for the next input. `None` means the screen only needs a redraw
    /// (unbound key, resize).
    fn next_event(&mut self) -> Result<Option<MenuEvent>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MenuVisible,
    InFlow(MenuAction),
    Terminated,
}

pub struct App {
    pub ctx: Context,
    pub menu: Menu,
    state: State,
}

impl App {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            menu: Menu::main(),
            state: State::MenuVisible,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Hand back the context so the caller can close the store.
    pub fn into_context(self) -> Context {
        self.ctx
    }

    /// Draw, wait, dispatch, until the menu is terminated.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> Result<()> {
        while self.state != State::Terminated {
            frontend.render_menu(&self.menu)?;
            if let Some(event) = frontend.next_event()? {
                self.handle_event(event, frontend)?;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: MenuEvent, frontend: &mut impl Frontend) -> Result<()> {
        tracing::debug!(?event, selected = self.menu.selected(), "menu event");
        match event {
            MenuEvent::NavigateUp => self.menu.move_up(),
            MenuEvent::NavigateDown => self.menu.move_down(),
            MenuEvent::Quit => self.terminate(),
            MenuEvent::Activate => match self.menu.selected_action() {
                Some(MenuAction::Exit) => self.terminate(),
                Some(action) => self.run_flow(action, frontend)?,
                None => {}
            },
        }
        Ok(())
    }

    fn run_flow(&mut self, action: MenuAction, frontend: &mut impl Frontend) -> Result<()> {
        self.state = State::InFlow(action);
        tracing::debug!(?action, "starting flow");

        let outcome = match action {
            MenuAction::AddTask => flows::add(&mut self.ctx, frontend)?,
            MenuAction::DisplayTasks => flows::list(&self.ctx, frontend)?,
            MenuAction::RemoveTask => flows::remove(&mut self.ctx, frontend)?,
            MenuAction::CompleteTask => flows::complete(&mut self.ctx, frontend)?,
            MenuAction::Exit => FlowOutcome::Completed,
        };

        match outcome {
            FlowOutcome::Interrupted => {
                tracing::info!(?action, "interrupted during flow");
                self.terminate();
            }
            FlowOutcome::Aborted(e) => {
                tracing::info!(?action, "flow aborted: {e}");
                self.state = State::MenuVisible;
            }
            FlowOutcome::Failed(e) => {
                tracing::warn!(?action, "flow failed: {e}");
                self.state = State::MenuVisible;
            }
            FlowOutcome::Completed => self.state = State::MenuVisible,
        }
        Ok(())
    }

    fn terminate(&mut self) {
        tracing::info!("leaving menu");
        self.state = State::Terminated;
    }
}

//! Blocking, one-shot scripts behind each menu entry.
//!
//! A flow borrows the terminal through [`Prompter`], talks to the store, and
//! refreshes the cache after a successful mutation. Storage and input failures
//! are reported to the user here and come back as a [`FlowOutcome`]; only
//! terminal I/O errors escape as `Err`.

use anyhow::Result;

use crate::context::Context;
use crate::error::{InputError, StoreError};
use crate::store::{NewTask, Store, Task, parse_deadline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message shown to the user before control returns to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Terminal side of a flow.
///
/// `read_line` and `show_tasks` return `None` when the user interrupts
/// (Ctrl+C), which ends the whole program.
pub trait Prompter {
    fn read_line(&mut self, label: &str) -> Result<Option<String>>;

    /// Show the tasks and block until the user acknowledges them.
    fn show_tasks(&mut self, tasks: &[Task]) -> Result<Option<()>>;

    /// Show a closing message. `None` if the user interrupted while it was up.
    fn notice(&mut self, notice: Notice) -> Result<Option<()>>;
}

#[derive(Debug)]
pub enum FlowOutcome {
    Completed,
    /// Input was rejected; nothing was written.
    Aborted(InputError),
    /// The store call failed; the side effect did not happen.
    Failed(StoreError),
    Interrupted,
}

macro_rules! prompt {
    ($io:expr, $label:expr) => {
        match $io.read_line($label)? {
            Some(line) => line,
            None => return Ok(FlowOutcome::Interrupted),
        }
    };
}

pub fn add(ctx: &mut Context, io: &mut impl Prompter) -> Result<FlowOutcome> {
    let description = prompt!(io, "Description");
    let deadline_text = prompt!(io, "Deadline (YYYY-MM-DD)");
    let deadline = match parse_deadline(&deadline_text) {
        Ok(date) => date,
        Err(e) => {
            tracing::info!(input = %deadline_text, "add aborted on deadline");
            return finish(
                io,
                Notice::error("Invalid date format. Returning to menu."),
                FlowOutcome::Aborted(e),
            );
        }
    };
    let priority = prompt!(io, "Priority (Low, Medium, High)");
    let category = prompt!(io, "Category");

    let task = NewTask {
        description: description.trim().to_string(),
        deadline,
        priority: priority.trim().to_string(),
        category: category.trim().to_string(),
    };
    if let Err(e) = ctx.store.insert_task(&task) {
        tracing::warn!("insert failed: {e}");
        let notice = Notice::error(format!("Error adding task: {e}"));
        return finish(io, notice, FlowOutcome::Failed(e));
    }
    if let Err(e) = ctx.refresh() {
        return report_refresh_failure(io, e);
    }

    finish(
        io,
        Notice::success("Task added successfully! Returning to menu..."),
        FlowOutcome::Completed,
    )
}

/// Show the cached snapshot; the store is not re-read.
pub fn list(ctx: &Context, io: &mut impl Prompter) -> Result<FlowOutcome> {
    match io.show_tasks(ctx.cache.snapshot())? {
        Some(()) => Ok(FlowOutcome::Completed),
        None => Ok(FlowOutcome::Interrupted),
    }
}

pub fn remove(ctx: &mut Context, io: &mut impl Prompter) -> Result<FlowOutcome> {
    apply_to_picked(
        ctx,
        io,
        &PickedAction {
            prompt: "Enter the task ID to remove",
            success: "Task removed successfully! Returning to menu...",
            failure: "Error removing task",
            apply: Store::delete_task,
        },
    )
}

pub fn complete(ctx: &mut Context, io: &mut impl Prompter) -> Result<FlowOutcome> {
    apply_to_picked(
        ctx,
        io,
        &PickedAction {
            prompt: "Enter the task ID to mark as completed",
            success: "Task marked as completed! Returning to menu...",
            failure: "Error marking task as completed",
            apply: |store, id| store.set_completed(id, true),
        },
    )
}

struct PickedAction {
    prompt: &'static str,
    success: &'static str,
    failure: &'static str,
    apply: fn(&Store, i64) -> Result<(), StoreError>,
}

/// List, ask for an id, run one store call against it. The id is not checked
/// for existence: a missing row is a silent no-op in the store.
fn apply_to_picked(
    ctx: &mut Context,
    io: &mut impl Prompter,
    action: &PickedAction,
) -> Result<FlowOutcome> {
    if let FlowOutcome::Interrupted = list(ctx, io)? {
        return Ok(FlowOutcome::Interrupted);
    }

    let text = prompt!(io, action.prompt);
    let id = match parse_task_id(&text) {
        Ok(id) => id,
        Err(e) => {
            return finish(
                io,
                Notice::error("Invalid task ID. Returning to menu."),
                FlowOutcome::Aborted(e),
            );
        }
    };

    if let Err(e) = (action.apply)(&ctx.store, id) {
        tracing::warn!(id, "{}: {e}", action.failure);
        let notice = Notice::error(format!("{}: {e}", action.failure));
        return finish(io, notice, FlowOutcome::Failed(e));
    }
    if let Err(e) = ctx.refresh() {
        return report_refresh_failure(io, e);
    }

    finish(io, Notice::success(action.success), FlowOutcome::Completed)
}

fn parse_task_id(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::TaskId(trimmed.to_string()))
}

fn report_refresh_failure(io: &mut impl Prompter, e: StoreError) -> Result<FlowOutcome> {
    tracing::warn!("reloading tasks failed: {e}");
    let notice = Notice::error(format!("Error reloading tasks: {e}"));
    finish(io, notice, FlowOutcome::Failed(e))
}

/// Show the closing message, then hand back `outcome`. An interrupt while the
/// message is up overrides it.
fn finish(io: &mut impl Prompter, notice: Notice, outcome: FlowOutcome) -> Result<FlowOutcome> {
    match io.notice(notice)? {
        Some(()) => Ok(outcome),
        None => Ok(FlowOutcome::Interrupted),
    }
}

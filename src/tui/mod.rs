mod app;
mod event;
mod input;
mod keymap;
mod menu;
mod terminal;
mod theme;
mod ui;

pub use app::{App, Frontend, State};
pub use keymap::{KeyMap, MenuEvent};
pub use menu::{Menu, MenuAction};
pub use theme::{Theme, ThemeConfig};

use anyhow::Result;

use crate::config::Config;
use crate::context::Context;

use terminal::TerminalFrontend;

/// Run the menu until the user exits, then close the store.
pub fn run(ctx: Context, config: &Config) -> Result<()> {
    let terminal = ratatui::init();
    let mut frontend = TerminalFrontend::new(
        terminal,
        config.theme.build(),
        KeyMap::default_keymap(),
        config.notice_duration(),
    );
    let mut app = App::new(ctx);
    let result = app.run(&mut frontend);
    drop(frontend);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("menu loop failed: {e:#}");
    }
    let closed = app.into_context().close();
    result?;
    closed?;
    Ok(())
}

use crossterm::event::{KeyCode, KeyModifiers};

// ── Events ───────────────────────────────────────────────────────────

/// Discrete input the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    NavigateUp,
    NavigateDown,
    Activate,
    Quit,
}

// ── Keybinding ───────────────────────────────────────────────────────

/// A single key → event mapping with the text shown in the hint bar.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub event: MenuEvent,
    /// Key label in the hint bar (e.g. `"↑/k"`). Empty for aliases.
    pub label: &'static str,
    pub description: &'static str,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Every key the main menu understands.
pub struct KeyMap {
    pub menu: Vec<KeyBinding>,
}

impl KeyMap {
    pub fn default_keymap() -> Self {
        Self {
            menu: default_menu_bindings(),
        }
    }

    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<MenuEvent> {
        self.menu
            .iter()
            .find(|kb| kb.code == code && kb.modifiers == modifiers)
            .map(|kb| kb.event)
    }

    /// `(label, description)` pairs for the hint bar, aliases skipped.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        self.menu
            .iter()
            .filter(|kb| !kb.label.is_empty())
            .map(|kb| (kb.label, kb.description))
            .collect()
    }
}

/// True for the interrupt chord, which ends the program from any screen.
pub fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

#[allow(clippy::enum_glob_use)]
fn default_menu_bindings() -> Vec<KeyBinding> {
    use MenuEvent::*;

    vec![
        KeyBinding {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            event: NavigateUp,
            label: " ↑/k",
            description: " up ",
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            event: NavigateUp,
            label: "",
            description: "",
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            event: NavigateDown,
            label: " ↓/j",
            description: " down ",
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            event: NavigateDown,
            label: "",
            description: "",
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            event: Activate,
            label: " Enter",
            description: " select ",
        },
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            event: Quit,
            label: " q",
            description: " quit",
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            event: Quit,
            label: "",
            description: "",
        },
    ]
}

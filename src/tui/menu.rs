/// What a menu row does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddTask,
    DisplayTasks,
    RemoveTask,
    CompleteTask,
    Exit,
}

impl MenuAction {
    /// Row order of the main menu.
    pub const ALL: [Self; 5] = [
        Self::AddTask,
        Self::DisplayTasks,
        Self::RemoveTask,
        Self::CompleteTask,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddTask => "Add Task",
            Self::DisplayTasks => "Display Tasks",
            Self::RemoveTask => "Remove Task",
            Self::CompleteTask => "Mark Task as Completed",
            Self::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A titled list of rows with one selected row. Movement clamps at both ends.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    rows: Vec<String>,
    selected: usize,
}

impl Menu {
    /// An empty menu; rows are supplied with [`Menu::set_rows`].
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            selected: 0,
        }
    }

    /// The numbered main menu.
    pub fn main() -> Self {
        let mut menu = Self::new("To-Do List Manager");
        menu.set_rows(
            MenuAction::ALL
                .iter()
                .enumerate()
                .map(|(i, action)| format!("{}. {}", i + 1, action.label()))
                .collect(),
        );
        menu
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_rows(&mut self, rows: Vec<String>) {
        self.rows = rows;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// The action under the cursor; `None` while the menu has no rows.
    pub fn selected_action(&self) -> Option<MenuAction> {
        if self.selected >= self.rows.len() {
            return None;
        }
        MenuAction::from_index(self.selected)
    }
}

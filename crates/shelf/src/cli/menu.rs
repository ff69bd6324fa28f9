/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Remove,
    Search,
    List,
    UpdateStatus,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Add,
        MenuAction::Remove,
        MenuAction::Search,
        MenuAction::List,
        MenuAction::UpdateStatus,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Add => "Add a book",
            MenuAction::Remove => "Remove a book",
            MenuAction::Search => "Search for books",
            MenuAction::List => "Show all books",
            MenuAction::UpdateStatus => "Change book status",
            MenuAction::Exit => "Exit",
        }
    }

    /// Action for a 1-based menu number.
    pub fn from_choice(choice: usize) -> Option<Self> {
        Self::ALL.get(choice.checked_sub(1)?).copied()
    }
}

//! Sidebar menu destinations.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuDestination {
    Home,
    AddBook,
    RemoveBook,
    SearchBooks,
    ListBooks,
    Statistics,
    Exit,
}

impl MenuDestination {
    /// Menu order as shown in the sidebar.
    pub const ALL: [MenuDestination; 7] = [
        MenuDestination::Home,
        MenuDestination::AddBook,
        MenuDestination::RemoveBook,
        MenuDestination::SearchBooks,
        MenuDestination::ListBooks,
        MenuDestination::Statistics,
        MenuDestination::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AddBook => "Add a Book",
            Self::RemoveBook => "Remove a Book",
            Self::SearchBooks => "Search for a Book",
            Self::ListBooks => "Display All Books",
            Self::Statistics => "Display Statistics",
            Self::Exit => "Exit",
        }
    }

    /// Page heading rendered when the destination is selected.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Welcome to Your Personal Library Manager!",
            Self::AddBook => "Add a New Book",
            Self::RemoveBook => "Remove a Book",
            Self::SearchBooks => "Search for a Book",
            Self::ListBooks => "Your Library",
            Self::Statistics => "Library Statistics",
            Self::Exit => "Exiting Program",
        }
    }
}

impl Display for MenuDestination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::MenuDestination;
    use std::collections::HashSet;

    #[test]
    fn labels_and_headings_are_unique() {
        let labels: HashSet<_> = MenuDestination::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels.len(), MenuDestination::ALL.len());

        let headings: HashSet<_> = MenuDestination::ALL.iter().map(|d| d.heading()).collect();
        assert_eq!(headings.len(), MenuDestination::ALL.len());
    }

    #[test]
    fn home_is_first_and_exit_is_last() {
        assert_eq!(MenuDestination::ALL.first(), Some(&MenuDestination::Home));
        assert_eq!(MenuDestination::ALL.last(), Some(&MenuDestination::Exit));
    }
}

//! Frontend Models
//!
//! Task, filter and theme types shared by the components.

/// A task in the list. Lives only as long as the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Page-local render key, never shown
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Build a task from user input. Blank input yields `None`.
    pub fn new(id: u32, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }
}

/// Status filter for the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Button order in the footer
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Value of the `data-filter` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Colour scheme of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored value in local storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle icon: offer the sun in dark mode, the moon in light mode
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-regular fa-sun",
            Theme::Light => "fa-regular fa-moon",
        }
    }
}

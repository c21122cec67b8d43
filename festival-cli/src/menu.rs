//! Main menu choices.

use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;

pub const PROMPT: &str = "Enter your choice (1-5)";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Add,
    Delete,
    CheckReminders,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ViewAll,
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::CheckReminders,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuChoice::ViewAll => '1',
            MenuChoice::Add => '2',
            MenuChoice::Delete => '3',
            MenuChoice::CheckReminders => '4',
            MenuChoice::Exit => '5',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewAll => "View all festivals",
            MenuChoice::Add => "Add a new festival",
            MenuChoice::Delete => "Delete a festival",
            MenuChoice::CheckReminders => "Check reminders",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Input that isn't one of the menu keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu choice '{}'", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => MenuChoice::ALL
                .into_iter()
                .find(|choice| choice.key() == c)
                .ok_or_else(|| InvalidChoice(s.to_string())),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

/// The banner and numbered options shown before each prompt.
pub fn render_menu() -> String {
    let mut lines = vec!["========== FESTIVAL REMINDER BOT ==========".bold().to_string()];
    for choice in MenuChoice::ALL {
        lines.push(format!("{}. {}", choice.key(), choice.label()));
    }
    lines.push("===========================================".bold().to_string());
    lines.join("\n")
}

//! Terminal renderer: heading, error banner, draft form, then either the
//! loading line or one card per user.

use colored::Colorize;

use crate::models::FormField;
use crate::output::PageRenderer;
use crate::page::ViewState;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl PageRenderer for TerminalRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "Users".bold()));

        if let Some(ref error) = state.error {
            output.push_str(&format!(" {} {}\n\n", "✖".red().bold(), error.red()));
        }

        output.push_str(&format!(" {}\n", "New user".bold()));
        for field in [FormField::Name, FormField::Age] {
            let value = state.draft.get(field);
            let shown = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value.to_string()
            };
            let label = format!("{:<5}", format!("{field}:"));
            output.push_str(&format!("   {} {}\n", label.cyan(), shown));
        }
        output.push('\n');

        if state.loading {
            output.push_str(&format!(" {}\n", "Loading...".dimmed()));
            return output;
        }

        if state.users.is_empty() {
            output.push_str(&format!(" {}\n", "No users.".dimmed()));
            return output;
        }

        for user in &state.users {
            output.push_str(&format!(" {} {}\n", "▸".cyan().bold(), user.name.bold()));
            output.push_str(&format!("   {} {}\n", "ID:".dimmed(), user.id));
            output.push_str(&format!("   {} {}\n", "age:".dimmed(), user.age));
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            state.users.len().to_string().bold(),
            if state.users.len() == 1 { "user" } else { "users" },
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewUserForm, User};

    fn plain(state: &ViewState) -> String {
        colored::control::set_override(false);
        TerminalRenderer.render(state)
    }

    fn users() -> Vec<User> {
        vec![
            User {
                id: "7".into(),
                name: "Grace".into(),
                age: 85,
            },
            User {
                id: "3".into(),
                name: "Ada".into(),
                age: 36,
            },
        ]
    }

    #[test]
    fn render_loading_hides_list() {
        let state = ViewState {
            users: users(),
            loading: true,
            ..ViewState::default()
        };
        let output = plain(&state);
        assert!(output.contains("Loading..."));
        assert!(!output.contains("Grace"));
        assert!(!output.contains("ID:"));
    }

    #[test]
    fn render_cards_in_collection_order() {
        let state = ViewState {
            users: users(),
            ..ViewState::default()
        };
        let output = plain(&state);
        let grace = output.find("Grace").unwrap();
        let ada = output.find("Ada").unwrap();
        assert!(grace < ada);
        assert!(output.contains("ID: 7"));
        assert!(output.contains("age: 36"));
        assert!(output.contains("2 users"));
        assert!(!output.contains("Loading"));
    }

    #[test]
    fn render_error_banner() {
        let state = ViewState {
            error: Some("Failed to fetch users".into()),
            ..ViewState::default()
        };
        let output = plain(&state);
        assert!(output.contains("✖ Failed to fetch users"));
        assert!(output.contains("No users."));
    }

    #[test]
    fn render_no_banner_without_error() {
        let output = plain(&ViewState::default());
        assert!(!output.contains("✖"));
    }

    #[test]
    fn render_draft_values() {
        let state = ViewState {
            draft: NewUserForm {
                name: "Ada".into(),
                age: String::new(),
            },
            ..ViewState::default()
        };
        let output = plain(&state);
        assert!(output.contains("Ada"));
        assert!(output.contains("(empty)"));
    }
}

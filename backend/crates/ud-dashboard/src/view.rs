//! Plain-text rendering of the dashboard

use crate::DashboardState;

use ud_core::User;

use std::fmt::Write;

use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Sel")]
    selected: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Action")]
    action: &'static str,
}

impl UserRow {
    fn new(user: &User, state: &DashboardState) -> Self {
        Self {
            selected: if state.is_selected(&user.id) { "[x]" } else { "[ ]" },
            name: user.name.clone(),
            email: user.email.clone(),
            id: user.id.clone(),
            action: if state.is_deleting_user(&user.id) {
                "Deleting..."
            } else {
                "Delete"
            },
        }
    }
}

pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = write_view(&mut out, state);

    out
}

fn write_view(out: &mut String, state: &DashboardState) -> std::fmt::Result {
    writeln!(out, "User Dashboard")?;
    writeln!(out)?;

    let draft = state.draft();
    writeln!(out, "Add New User")?;
    writeln!(out, "  Name:  {}", draft.name)?;
    writeln!(out, "  Email: {}", draft.email)?;
    writeln!(
        out,
        "  [{}]",
        if state.is_saving() { "Adding..." } else { "Add User" }
    )?;
    writeln!(out)?;

    writeln!(out, "Users List")?;
    writeln!(
        out,
        "  [{}]",
        if state.is_bulk_deleting() {
            "Deleting Selected..."
        } else {
            "Delete Users"
        }
    )?;

    if state.users().is_empty() {
        writeln!(out, "No users available.")?;
    } else {
        let rows: Vec<UserRow> = state
            .users()
            .iter()
            .map(|user| UserRow::new(user, state))
            .collect();
        writeln!(out, "{}", Table::new(rows).with(Style::rounded()))?;
    }

    if let Some(editing) = state.editing() {
        writeln!(out)?;
        writeln!(out, "Edit User ({})", editing.id)?;
        writeln!(out, "  Name:  {}", editing.name)?;
        writeln!(out, "  Email: {}", editing.email)?;
        writeln!(
            out,
            "  [{}]",
            if state.is_saving() {
                "Updating..."
            } else {
                "Update User"
            }
        )?;
    }

    Ok(())
}

//! Dashboard view state
//!
//! `DashboardState` is only changed through the transition methods below.
//! Network-backed operations are split into a `begin_*` step, which decides
//! whether a request is issued, and a `finish_*` step applied once the
//! request has completed. Local state is never updated ahead of the server.

use ud_core::{NewUser, User};

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    users: Vec<User>,
    draft: NewUser,
    editing: Option<User>,
    selected: Vec<String>,
    saving: bool,
    deleting: BTreeSet<String>,
    bulk_deleting: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn draft(&self) -> &NewUser {
        &self.draft
    }

    pub fn editing(&self) -> Option<&User> {
        self.editing.as_ref()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    /// Add or update in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_deleting_user(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    pub fn is_bulk_deleting(&self) -> bool {
        self.bulk_deleting
    }

    /// Any delete in flight, single or bulk
    pub fn is_deleting(&self) -> bool {
        self.bulk_deleting || !self.deleting.is_empty()
    }

    // =========================================================================
    // Mount
    // =========================================================================

    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    // =========================================================================
    // Add
    // =========================================================================

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Returns the draft to submit, or `None` when `name` or `email` is empty.
    pub fn begin_add(&mut self) -> Option<NewUser> {
        if !self.draft.is_complete() {
            return None;
        }

        self.saving = true;
        Some(self.draft.clone())
    }

    /// `id` is the server-assigned id, or `None` if the request failed.
    pub fn finish_add(&mut self, id: Option<String>) {
        if let Some(id) = id {
            let draft = std::mem::take(&mut self.draft);
            self.users.push(draft.into_user(id));
        }

        self.saving = false;
    }

    // =========================================================================
    // Edit
    // =========================================================================

    /// Copy the matching record into the editing slot. Unknown ids are ignored.
    pub fn edit(&mut self, id: &str) {
        if let Some(user) = self.users.iter().find(|user| user.id == id) {
            self.editing = Some(user.clone());
        }
    }

    pub fn set_editing_name(&mut self, name: impl Into<String>) {
        if let Some(editing) = self.editing.as_mut() {
            editing.name = name.into();
        }
    }

    pub fn set_editing_email(&mut self, email: impl Into<String>) {
        if let Some(editing) = self.editing.as_mut() {
            editing.email = email.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Returns the record to submit, or `None` when nothing is being edited
    /// or `name`/`email` is empty.
    pub fn begin_update(&mut self) -> Option<User> {
        let editing = self
            .editing
            .as_ref()
            .filter(|editing| editing.has_required_fields())?
            .clone();

        self.saving = true;
        Some(editing)
    }

    /// On failure the editing slot stays open.
    pub fn finish_update(&mut self, id: &str, ok: bool) {
        self.saving = false;

        if !ok {
            return;
        }

        if let Some(edited) = self.editing.take_if(|editing| editing.id == id)
            && let Some(user) = self.users.iter_mut().find(|user| user.id == id)
        {
            user.merge(&edited);
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    pub fn begin_delete(&mut self, id: &str) {
        self.deleting.insert(id.to_string());
    }

    /// The record is removed only once the server confirmed the delete.
    pub fn finish_delete(&mut self, id: &str, ok: bool) {
        self.deleting.remove(id);

        if ok {
            self.users.retain(|user| user.id != id);
            self.selected.retain(|selected| selected != id);
        }
    }

    /// Returns the ids to delete, or `None` when nothing is selected.
    pub fn begin_bulk_delete(&mut self) -> Option<Vec<String>> {
        if self.selected.is_empty() {
            return None;
        }

        self.bulk_deleting = true;
        Some(self.selected.clone())
    }

    pub fn finish_bulk_delete(&mut self, ids: &[String], ok: bool) {
        self.bulk_deleting = false;

        if ok {
            self.users.retain(|user| !ids.contains(&user.id));
            self.selected.clear();
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn toggle_selection(&mut self, id: &str) {
        if let Some(position) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(position);
        } else {
            self.selected.push(id.to_string());
        }
    }
}

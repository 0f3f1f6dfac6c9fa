use crate::{CliClientResult, Client, DashboardState};

use ud_core::User;

use log::{error, info, warn};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct CreatedUser {
    id: String,
}

/// The dashboard view: a client and the state it renders
///
/// Every operation awaits its request before applying the matching
/// state transition. Failures are logged and leave no trace in the view.
pub struct Dashboard {
    client: Client,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Local-only edits (draft, editing slot, selection)
    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Load the user list once
    pub async fn mount(&mut self) {
        match self.client.list_users().await.and_then(parse_users) {
            Ok(users) => {
                info!("Loaded {} users", users.len());
                self.state.replace_users(users);
            }
            Err(e) => error!("Error fetching users: {}", e),
        }
    }

    pub async fn add_user(&mut self) {
        let Some(draft) = self.state.begin_add() else {
            return;
        };

        let id = match self.client.create_user(&draft).await.and_then(parse_id) {
            Ok(id) => {
                info!("Added user {}", id);
                Some(id)
            }
            Err(e) => {
                error!("Error adding user: {}", e);
                None
            }
        };

        self.state.finish_add(id);
    }

    pub async fn update_user(&mut self) {
        let Some(edited) = self.state.begin_update() else {
            return;
        };

        let result = self
            .client
            .update_user(&edited.id, Some(&edited.name), Some(&edited.email))
            .await;
        if let Err(ref e) = result {
            error!("Error updating user: {}", e);
        }

        self.state.finish_update(&edited.id, result.is_ok());
    }

    pub async fn delete_user(&mut self, id: &str) {
        self.state.begin_delete(id);

        let result = self.client.delete_user(id).await;
        if let Err(ref e) = result {
            error!("Error deleting user: {}", e);
        }

        self.state.finish_delete(id, result.is_ok());
    }

    pub async fn delete_selected(&mut self) {
        let Some(ids) = self.state.begin_bulk_delete() else {
            return;
        };

        let result = self.client.delete_users(&ids).await;
        if let Err(ref e) = result {
            error!("Error deleting selected users: {}", e);
        }

        self.state.finish_bulk_delete(&ids, result.is_ok());
    }
}

/// Records that cannot be read as a user are skipped, not fatal.
fn parse_users(value: Value) -> CliClientResult<Vec<User>> {
    let records: Vec<Value> = serde_json::from_value(value)?;

    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<User>(record) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Skipping unreadable user record: {}", e);
                None
            }
        })
        .collect())
}

fn parse_id(value: Value) -> CliClientResult<String> {
    let created: CreatedUser = serde_json::from_value(value)?;
    Ok(created.id)
}

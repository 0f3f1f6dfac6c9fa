use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard (default)
    Dashboard,
    /// List all users
    List,
    /// Add a user
    Add {
        /// User name
        #[arg(long)]
        name: String,
        /// User email
        #[arg(long)]
        email: String,
    },
    /// Update a user's fields
    Update {
        /// User ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
    /// Delete several users at once
    DeleteMany {
        /// User IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

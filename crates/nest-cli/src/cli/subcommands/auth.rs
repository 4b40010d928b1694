use clap::Subcommand;

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Record the active session identity.
    Login {
        user_id: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the active session.
    Logout,
    /// Show the active session identity.
    Whoami,
}

use clap::Subcommand;

/// Profile record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the stored profile record.
    Show,
    /// Record the profile picture URL (upserts the profile row).
    SetPicture { url: String },
    /// Clear the stored picture URL.
    ClearPicture,
}

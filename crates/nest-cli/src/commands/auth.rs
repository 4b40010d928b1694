//! Handlers for `nst auth`.

use crate::cli::subcommands::AuthCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::print_json;
use crate::session;

/// Handle `nst auth`.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login { user_id, email } => {
            session::store(user_id, email.as_deref())?;
            if !flags.quiet {
                println!("logged in as {user_id}");
            }
            Ok(())
        }
        AuthCommands::Logout => {
            session::delete()?;
            if !flags.quiet {
                println!("logged out");
            }
            Ok(())
        }
        AuthCommands::Whoami => {
            let user = session::current()?;
            match flags.format {
                OutputFormat::Json => print_json(&user),
                OutputFormat::Table => {
                    match &user.email {
                        Some(email) => println!("{} <{email}>", user.user_id),
                        None => println!("{}", user.user_id),
                    }
                    Ok(())
                }
            }
        }
    }
}

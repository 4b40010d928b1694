//! Handlers for `nst profile`.

use nest_core::entities::Profile;

use crate::cli::subcommands::ProfileCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::format_timestamp;
use crate::context::AppContext;
use crate::output::print_json;

/// Handle `nst profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = ctx.user.user_id.clone();
    match action {
        ProfileCommands::Show => {
            let profile = ctx.manager.store().get_profile(&user_id).await?;
            match flags.format {
                OutputFormat::Json => print_json(&profile),
                OutputFormat::Table => {
                    match profile {
                        Some(profile) => print_profile(&ctx.user.email, &profile),
                        None => println!("no profile on record"),
                    }
                    Ok(())
                }
            }
        }
        ProfileCommands::SetPicture { url } => {
            let profile = ctx.manager.store().set_profile_picture(&user_id, url).await?;
            match flags.format {
                OutputFormat::Json => print_json(&profile),
                OutputFormat::Table => {
                    print_profile(&ctx.user.email, &profile);
                    Ok(())
                }
            }
        }
        ProfileCommands::ClearPicture => {
            ctx.manager.store().clear_profile_picture(&user_id).await?;
            if !flags.quiet {
                println!("picture cleared");
            }
            Ok(())
        }
    }
}

fn print_profile(email: &Option<String>, profile: &Profile) {
    println!("user:    {}", profile.user_id);
    if let Some(email) = email {
        println!("email:   {email}");
    }
    println!(
        "picture: {}",
        profile.profile_picture_url.as_deref().unwrap_or("(none)")
    );
    println!("updated: {}", format_timestamp(profile.updated_at));
}

//! Handler for `nst suggest`.

use nest_core::responses::SuggestionsResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::print_json;

/// Handle `nst suggest <task-id>`.
pub async fn handle(
    task_id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let suggestions = ctx
        .manager
        .generate_suggestions(&ctx.user, task_id)
        .await?
        .to_vec();

    match flags.format {
        OutputFormat::Json => print_json(&SuggestionsResponse {
            task_id: task_id.to_string(),
            suggestions,
        }),
        OutputFormat::Table => {
            if suggestions.is_empty() {
                println!("no suggestions");
            } else {
                for (index, title) in suggestions.iter().enumerate() {
                    println!("{}. {title}", index + 1);
                }
            }
            Ok(())
        }
    }
}

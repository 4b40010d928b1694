//! Handlers for `nst subtask`.

use nest_core::entities::Subtask;
use nest_core::responses::SubtaskListResponse;

use crate::cli::subcommands::SubtaskCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{format_timestamp, parse_status};
use crate::context::AppContext;
use crate::output::{print_json, table::render_table};

/// Handle `nst subtask`.
pub async fn handle(
    action: &SubtaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubtaskCommands::List { task_id } => {
            let subtasks = ctx.manager.list_subtasks(&ctx.user, task_id).await?.to_vec();
            match flags.format {
                OutputFormat::Json => print_json(&SubtaskListResponse {
                    task_id: task_id.clone(),
                    subtasks,
                }),
                OutputFormat::Table => {
                    println!("{}", subtask_table(&subtasks));
                    Ok(())
                }
            }
        }
        SubtaskCommands::Add { task_id, title } => {
            let subtask = ctx.manager.save_subtask(&ctx.user, task_id, title).await?;
            print_subtask(&subtask, flags)
        }
        SubtaskCommands::Status {
            task_id,
            subtask_id,
            status,
        } => {
            let status = parse_status(status)?;
            let subtask = ctx
                .manager
                .update_subtask_status(&ctx.user, task_id, subtask_id, status)
                .await?;
            print_subtask(&subtask, flags)
        }
        SubtaskCommands::Delete {
            task_id,
            subtask_id,
        } => {
            ctx.manager
                .delete_subtask(&ctx.user, task_id, subtask_id)
                .await?;
            if !flags.quiet {
                println!("deleted {subtask_id}");
            }
            Ok(())
        }
    }
}

fn print_subtask(subtask: &Subtask, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Json => print_json(subtask),
        OutputFormat::Table => {
            println!("{}", subtask_table(std::slice::from_ref(subtask)));
            Ok(())
        }
    }
}

fn subtask_table(subtasks: &[Subtask]) -> String {
    let rows: Vec<Vec<String>> = subtasks
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.title.clone(),
                s.status.to_string(),
                format_timestamp(s.created_at),
            ]
        })
        .collect();
    render_table(&["ID", "TITLE", "STATUS", "CREATED"], &rows)
}

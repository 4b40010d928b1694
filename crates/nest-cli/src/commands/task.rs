//! Handlers for `nst task`.

use nest_core::entities::Task;
use nest_core::responses::{TaskCreateResponse, TaskListResponse};

use crate::cli::subcommands::TaskCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{format_timestamp, parse_priority, parse_status};
use crate::context::AppContext;
use crate::output::{print_json, table::render_table};

/// Handle `nst task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add { title, priority } => {
            let priority = parse_priority(priority)?;
            let task = ctx.manager.create_task(&ctx.user, title, priority).await?;
            print_task(&task, flags)
        }
        TaskCommands::List => {
            let tasks = ctx.manager.list_tasks(&ctx.user).await?.to_vec();
            match flags.format {
                OutputFormat::Json => print_json(&TaskListResponse { tasks }),
                OutputFormat::Table => {
                    println!("{}", task_table(&tasks));
                    Ok(())
                }
            }
        }
        TaskCommands::Status { id, status } => {
            let status = parse_status(status)?;
            let task = ctx.manager.update_status(&ctx.user, id, status).await?;
            print_task(&task, flags)
        }
        TaskCommands::Priority { id, priority } => {
            let priority = parse_priority(priority)?;
            let task = ctx.manager.update_priority(&ctx.user, id, priority).await?;
            print_task(&task, flags)
        }
        TaskCommands::Duplicate { id } => {
            let task = ctx.manager.duplicate_task(&ctx.user, id).await?;
            print_task(&task, flags)
        }
        TaskCommands::Delete { id } => {
            ctx.manager.delete_task(&ctx.user, id).await?;
            if !flags.quiet {
                println!("deleted {id}");
            }
            Ok(())
        }
    }
}

fn print_task(task: &Task, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Json => print_json(&TaskCreateResponse { task: task.clone() }),
        OutputFormat::Table => {
            println!("{}", task_table(std::slice::from_ref(task)));
            Ok(())
        }
    }
}

fn task_table(tasks: &[Task]) -> String {
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.title.clone(),
                t.priority.to_string(),
                t.status.to_string(),
                format_timestamp(t.created_at),
            ]
        })
        .collect();
    render_table(&["ID", "TITLE", "PRIORITY", "STATUS", "CREATED"], &rows)
}

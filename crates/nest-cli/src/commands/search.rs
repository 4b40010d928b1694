//! Handler for `nst search`.

use nest_core::responses::SearchResultsResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{print_json, table::render_table};

/// Handle `nst search <query>`.
pub async fn handle(query: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = ctx.search.search(query).await?;

    match flags.format {
        OutputFormat::Json => print_json(&SearchResultsResponse {
            query: query.to_string(),
            results,
        }),
        OutputFormat::Table => {
            if results.is_empty() {
                println!("no matching tasks");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = results
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.title.clone(),
                        r.priority.to_string(),
                        r.status.to_string(),
                        format!("{:.2}", r.similarity),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(&["ID", "TITLE", "PRIORITY", "STATUS", "SIMILARITY"], &rows)
            );
            Ok(())
        }
    }
}

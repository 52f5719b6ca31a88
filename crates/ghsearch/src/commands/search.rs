use async_trait::async_trait;
use clap::Parser;
use ghsearch_ghapi_interface::types::GhRepository;

use super::ignore_cancelled;
use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Search repositories
#[derive(Parser)]
pub(crate) struct SearchCommand {
    /// Search query (e.g. `AI`, `language:rust`)
    query: String,
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let Some(response) =
            ignore_cancelled(ctx.api_service.search_repositories(&self.query).await)?
        else {
            return Ok(());
        };

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "{} repositories found.", response.total_count)?;
        if response.incomplete_results {
            writeln!(writer, "Warning: results are incomplete.")?;
        }

        for repo in &response.items {
            writeln!(writer, "{}", format_repository(repo))?;
        }

        Ok(())
    }
}

fn format_repository(repo: &GhRepository) -> String {
    let mut line = format!(
        "- {} ({} stars, {})",
        repo.full_name,
        repo.stargazers_count,
        repo.language.as_deref().unwrap_or("unknown language")
    );

    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(": ");
        line.push_str(description);
    }

    line
}

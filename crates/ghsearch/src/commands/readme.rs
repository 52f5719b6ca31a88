use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show a repository README
#[derive(Parser)]
pub(crate) struct ReadmeCommand {
    /// Repository owner
    owner: String,
    /// Repository name
    name: String,
}

#[async_trait]
impl Command for ReadmeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let readme = ctx.api_service.fetch_readme(&self.owner, &self.name).await?;
        let content = readme.decoded_content()?;

        let mut writer = ctx.writer.write().await;
        write!(writer, "{}", content)?;
        if !content.ends_with('\n') {
            writeln!(writer)?;
        }

        Ok(())
    }
}

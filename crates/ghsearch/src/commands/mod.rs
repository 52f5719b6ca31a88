//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ghsearch_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{avatar::AvatarCommand, readme::ReadmeCommand, search::SearchCommand};
use crate::Result;

mod avatar;
mod readme;
mod search;

pub(crate) struct CommandContext {
    pub api_service: Box<dyn ApiService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Search(SearchCommand),
    Readme(ReadmeCommand),
    Avatar(AvatarCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Search(sub) => sub.execute(ctx).await,
            Self::Readme(sub) => sub.execute(ctx).await,
            Self::Avatar(sub) => sub.execute(ctx).await,
        }
    }
}

/// Turns a cancelled call into `None`, keeping other errors.
pub(crate) fn ignore_cancelled<T>(result: ghsearch_ghapi_interface::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_cancelled() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

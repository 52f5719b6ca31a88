use std::sync::Arc;

use clap::Parser;
use ghsearch_config::{ApiDriver, Config};
use ghsearch_core::GitHubApiService;
use ghsearch_ghapi_github::ReqwestTransport;
use ghsearch_ghapi_interface::{ApiService, Transport};
use ghsearch_ghapi_null::NullTransport;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = "Search GitHub repositories", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let run = |config: Config, args: Args| async move {
            let ctx = CommandContext {
                api_service: Self::build_api_service(&config)?,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }

    fn build_api_service(config: &Config) -> Result<Box<dyn ApiService>> {
        let transport: Arc<dyn Transport> = {
            if config.api.driver == ApiDriver::GitHub {
                info!(root_url = %config.api.github.root_url, "Using ReqwestTransport API driver");
                Arc::new(ReqwestTransport::new(config)?)
            } else {
                info!("Using NullTransport API driver");
                Arc::new(NullTransport::new())
            }
        };

        Ok(Box::new(GitHubApiService::new(config, transport)?))
    }
}

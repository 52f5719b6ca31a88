use std::{io::Write, sync::Arc};

use clap::Parser;
use ghsearch_ghapi_interface::{
    types::{GhReadme, GhSearchResponse},
    MockApiService,
};
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub api_service: MockApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            api_service: MockApiService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

fn parse_args(command_args: &[&str]) -> Args {
    let command_args = {
        let mut tmp_args = vec!["ghsearch"];
        tmp_args.extend(command_args);
        tmp_args
    };

    match Args::try_parse_from(command_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    CommandExecutor::parse_args_async(parse_args(command_args), ctx.into_context(buf.clone()))
        .await
        .unwrap();

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}

pub(crate) async fn test_command_error(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    CommandExecutor::parse_args_async(parse_args(command_args), ctx.into_context(buf.clone()))
        .await
        .unwrap_err()
        .to_string()
}

pub(crate) fn arrange_search_response() -> GhSearchResponse {
    serde_json::from_str(include_str!("testutils/search_response.json")).unwrap()
}

pub(crate) fn arrange_readme() -> GhReadme {
    serde_json::from_str(include_str!("testutils/readme.json")).unwrap()
}

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Download an image (e.g. an owner avatar)
#[derive(Parser)]
pub(crate) struct AvatarCommand {
    /// Image URL
    url: String,
    /// Output file, or directory to save `avatar.<ext>` into
    #[arg(short, long)]
    output: PathBuf,
}

#[async_trait]
impl Command for AvatarCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let image = ctx.api_service.fetch_image(&self.url).await?;
        let output = if tokio::fs::metadata(&self.output)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            self.output.join(format!("avatar.{}", image.format.extension()))
        } else {
            self.output
        };
        tokio::fs::write(&output, &image.bytes).await?;

        writeln!(
            ctx.writer.write().await,
            "Saved {} image ({} bytes) to {}.",
            image.format.mime_type(),
            image.bytes.len(),
            output.display()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghsearch_ghapi_interface::types::{GhImage, GhImageFormat};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/14985020?v=4";

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let output = std::env::temp_dir().join(format!("ghsearch-avatar-{}.gif", std::process::id()));
        let output_arg = output.to_string_lossy().to_string();

        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_fetch_image()
            .withf(|url| url == AVATAR_URL)
            .times(1)
            .returning(|_| {
                Ok(GhImage {
                    format: GhImageFormat::Gif,
                    bytes: b"GIF89a".to_vec(),
                })
            });

        assert_eq!(
            test_command(ctx, &["avatar", AVATAR_URL, "--output", &output_arg]).await,
            format!("Saved image/gif image (6 bytes) to {}.\n", output.display())
        );
        assert_eq!(std::fs::read(&output)?, b"GIF89a".to_vec());

        std::fs::remove_file(&output)?;
        Ok(())
    }

    #[tokio::test]
    async fn run_into_directory() -> Result<(), Box<dyn Error>> {
        let directory =
            std::env::temp_dir().join(format!("ghsearch-avatar-dir-{}", std::process::id()));
        std::fs::create_dir_all(&directory)?;
        let directory_arg = directory.to_string_lossy().to_string();
        let expected = directory.join("avatar.png");

        let mut ctx = CommandContextTest::new();
        ctx.api_service.expect_fetch_image().returning(|_| {
            Ok(GhImage {
                format: GhImageFormat::Png,
                bytes: b"\x89PNG\r\n\x1a\n".to_vec(),
            })
        });

        assert_eq!(
            test_command(ctx, &["avatar", AVATAR_URL, "-o", &directory_arg]).await,
            format!("Saved image/png image (8 bytes) to {}.\n", expected.display())
        );
        assert_eq!(std::fs::read(&expected)?, b"\x89PNG\r\n\x1a\n".to_vec());

        std::fs::remove_dir_all(&directory)?;
        Ok(())
    }
}

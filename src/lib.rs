//! Person-site provisioning for the GRÜNE/VERTS multisite network.

pub mod cli;
pub mod config;
pub mod error;
pub mod messages;
pub mod onboard;
pub mod prompt;
pub mod request;
pub mod slug;
pub mod wp;

use std::sync::Arc;

use crate::cli::{Cli, Command};
use crate::config::OnboardConfig;
use crate::onboard::Onboarder;
use crate::prompt::{AssumeYes, Confirmer, StdinConfirmer};
use crate::request::OnboardingRequest;
use crate::wp::WpCliRunner;

/// Dispatch one parsed invocation.
pub async fn run(cli: Cli) -> error::Result<()> {
    let config = OnboardConfig::from_env();
    match cli.command {
        Command::Person(args) => {
            let request = OnboardingRequest::from_args(&args)?;
            let runner = Arc::new(WpCliRunner::new(config.wp_bin.clone()));
            let confirmer: Arc<dyn Confirmer> = if args.yes {
                Arc::new(AssumeYes)
            } else {
                Arc::new(StdinConfirmer)
            };
            let report = Onboarder::new(config, runner, confirmer)
                .onboard_person(&request)
                .await?;
            report.print();
        }
        Command::Party => onboard::onboard_party()?,
    }
    Ok(())
}

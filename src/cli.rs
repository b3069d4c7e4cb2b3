//! Command line surface.
//!
//! Options arrive as raw strings on purpose. The request validator turns
//! them into typed values and owns every error message, so a typo'd plan
//! and a missing option read the same way to the operator.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "site-onboard",
    version,
    about = "Onboard new sites on the GRÜNE/VERTS multisite network"
)]
pub struct Cli {
    /// Echo every wp-cli invocation.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Onboard the site of a person, e.g. a candidate.
    Person(PersonArgs),
    /// Onboard the site of a party chapter (not available yet).
    Party,
}

#[derive(Debug, Args)]
pub struct PersonArgs {
    /// Service plan: full-service or minimal.
    #[arg(long, value_name = "PLAN")]
    pub plan: Option<String>,

    /// Site language: de or fr.
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// The person's own address; becomes their login contact.
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Address receiving WordPress admin notifications for the site.
    #[arg(long, value_name = "EMAIL")]
    pub admin_email: Option<String>,

    /// Where the person lives; shown in the footer (full-service).
    #[arg(long, value_name = "CITY")]
    pub city: Option<String>,

    /// Site tagline, e.g. "Petra Muster in den Nationalrat" (full-service).
    #[arg(long, value_name = "TEXT")]
    pub tagline: Option<String>,

    /// Name of the person's home party chapter (full-service).
    #[arg(long, value_name = "NAME")]
    pub party_name: Option<String>,

    /// Website of the home party chapter (full-service).
    #[arg(long, value_name = "URL")]
    pub party_url: Option<String>,

    /// Facebook profile URL (full-service, optional).
    #[arg(long, value_name = "URL")]
    pub facebook_url: Option<String>,

    /// Twitter/X handle or profile URL (full-service, optional).
    #[arg(long, value_name = "HANDLE")]
    pub twitter: Option<String>,

    /// Instagram profile URL (full-service, optional).
    #[arg(long, value_name = "URL")]
    pub instagram_url: Option<String>,

    /// Answer yes to the duplication prompt instead of waiting for input.
    #[arg(long)]
    pub yes: bool,
}

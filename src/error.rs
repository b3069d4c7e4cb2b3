//! Error types for site-onboard.

/// Top-level error type for the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Onboarding error: {0}")]
    Onboard(#[from] OnboardError),
}

/// Input validation errors. All are detected before any external command runs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing argument: --{option}")]
    MissingOption { option: String },

    #[error("Argument --{option} must not be blank")]
    BlankOption { option: String },

    #[error("Invalid plan: {value} (allowed: full-service, minimal)")]
    InvalidPlan { value: String },

    #[error("Invalid language key: {value} (allowed: de, fr)")]
    InvalidLanguage { value: String },

    #[error("Invalid {option}: {value}")]
    InvalidEmail { option: String, value: String },

    #[error("Invalid url for --{option}: {value}")]
    InvalidUrl { option: String, value: String },

    #[error("Argument --{option} is only valid with --plan full-service")]
    NotAllowedForPlan { option: String },
}

/// Failures spawning or talking to the external site-management tool.
///
/// A non-zero exit of the tool is NOT an error here; callers inspect the
/// captured output text instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to capture output of `{command}`: {source}")]
    Capture {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while driving the onboarding sequence.
#[derive(Debug, thiserror::Error)]
pub enum OnboardError {
    #[error("Command runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("Site {expected_url} not found; duplicate the template site first")]
    SiteNotFound { expected_url: String },

    #[error("Aborted: site duplication was not confirmed")]
    DuplicationDeclined,

    #[error("Unable to parse site list output: {output}")]
    SiteListUnparsable { output: String },

    #[error("Unable to create user: {output}")]
    PasswordNotFound { output: String },

    #[error("Failed to read operator confirmation: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Party onboarding is not implemented yet")]
    PartyNotImplemented,
}

/// Result type alias for the orchestrator.
pub type Result<T> = std::result::Result<T, Error>;

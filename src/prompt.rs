//! Operator confirmation behind a trait, stdin-backed in production.

use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Ask a yes/no question. `Ok(false)` on a negative answer or EOF.
    async fn confirm(&self, question: &str) -> io::Result<bool>;
}

/// Reads the answer from standard input.
pub struct StdinConfirmer;

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, question: &str) -> io::Result<bool> {
        print!("{question} [y/N] ");
        io::stdout().flush()?;

        let mut lines = BufReader::new(stdin()).lines();
        Ok(lines
            .next_line()
            .await?
            .is_some_and(|line| is_affirmative(&line)))
    }
}

/// Answers yes without asking, for `--yes` runs on a non-interactive
/// terminal. Everything around the question (instructions, the re-check
/// afterwards) still happens.
pub struct AssumeYes;

#[async_trait]
impl Confirmer for AssumeYes {
    async fn confirm(&self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// German, French and English forms of yes are all accepted.
fn is_affirmative(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "y" | "yes" | "j" | "ja" | "o" | "oui"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_forms() {
        for line in ["y", "Y", "yes", "ja", " J ", "oui", "O"] {
            assert!(is_affirmative(line), "{line:?}");
        }
    }

    #[test]
    fn negative_and_empty_forms() {
        for line in ["", "n", "no", "nein", "non", "yess"] {
            assert!(!is_affirmative(line), "{line:?}");
        }
    }

    #[tokio::test]
    async fn assume_yes_confirms() {
        assert!(AssumeYes.confirm("continue?").await.unwrap());
    }
}

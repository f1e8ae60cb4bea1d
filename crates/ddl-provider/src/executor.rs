//! Executor seam between generated commands and a database.
//!
//! The crate never talks to a database itself. Callers implement
//! [`CommandExecutor`] for their connection type and hand command sequences
//! to [`execute_all`].

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::core::command::Command;
use crate::error::{ProviderError, Result};

/// Executes one command at a time, verbatim.
#[async_trait]
pub trait CommandExecutor: Send {
    /// Execute a single command.
    async fn execute(&mut self, command: &Command) -> Result<()>;
}

/// Execute commands in order, stopping at the first failure.
///
/// Returns the number of commands executed. A failure is reported as
/// [`ProviderError::Execution`] carrying the 0-based index of the failing
/// command; commands after it are not executed. An I/O failure of the
/// executor itself is returned unchanged as [`ProviderError::Io`]. There are
/// no retries and no transaction around the batch.
pub async fn execute_all<E, I>(executor: &mut E, commands: I) -> Result<usize>
where
    E: CommandExecutor + ?Sized,
    I: IntoIterator<Item = Command>,
    I::IntoIter: Send,
{
    let mut executed = 0;
    for (index, command) in commands.into_iter().enumerate() {
        debug!("Executing command {}", index);
        match executor.execute(&command).await {
            Ok(()) => {}
            Err(e @ ProviderError::Io(_)) => {
                error!("Command {} could not be written: {}", index, e);
                return Err(e);
            }
            Err(e) => {
                error!("Command {} failed: {}", index, e);
                return Err(ProviderError::execution(index, e.to_string()));
            }
        }
        executed += 1;
    }
    info!("Executed {} command(s)", executed);
    Ok(executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::CommandSequence;

    /// Records commands and fails on the configured position.
    #[derive(Default)]
    struct RecordingExecutor {
        seen: Vec<String>,
        fail_at: Option<usize>,
    }

    #[async_trait]
    impl CommandExecutor for RecordingExecutor {
        async fn execute(&mut self, command: &Command) -> Result<()> {
            if self.fail_at == Some(self.seen.len()) {
                return Err(ProviderError::Config("connection reset".into()));
            }
            self.seen.push(command.to_string());
            Ok(())
        }
    }

    fn sequence() -> CommandSequence {
        CommandSequence::new(vec![
            Command::new("A"),
            Command::new("B"),
            Command::new("C"),
        ])
    }

    #[tokio::test]
    async fn test_execute_all_in_order() {
        let mut executor = RecordingExecutor::default();
        let executed = execute_all(&mut executor, sequence()).await.unwrap();
        assert_eq!(executed, 3);
        assert_eq!(executor.seen, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_execute_all_stops_on_first_failure() {
        let mut executor = RecordingExecutor {
            fail_at: Some(1),
            ..Default::default()
        };
        let err = execute_all(&mut executor, sequence()).await.unwrap_err();

        match err {
            ProviderError::Execution { index, ref message } => {
                assert_eq!(index, 1);
                assert!(message.contains("connection reset"));
            }
            ref other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(err.exit_code(), 8);
        assert_eq!(executor.seen, vec!["A"]);
    }

    struct BrokenPipeExecutor;

    #[async_trait]
    impl CommandExecutor for BrokenPipeExecutor {
        async fn execute(&mut self, _command: &Command) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[tokio::test]
    async fn test_execute_all_keeps_io_errors() {
        let err = execute_all(&mut BrokenPipeExecutor, sequence())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
        assert_eq!(err.exit_code(), 7);
    }

    #[tokio::test]
    async fn test_execute_all_empty() {
        let mut executor = RecordingExecutor::default();
        let executed = execute_all(&mut executor, Vec::new()).await.unwrap();
        assert_eq!(executed, 0);
    }

    #[tokio::test]
    async fn test_execute_all_through_trait_object() {
        let mut executor: Box<dyn CommandExecutor> = Box::new(RecordingExecutor::default());
        let executed = execute_all(executor.as_mut(), sequence()).await.unwrap();
        assert_eq!(executed, 3);
    }
}

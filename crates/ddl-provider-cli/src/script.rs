//! Script output: an executor that writes commands instead of running them.

use std::io::Write;

use async_trait::async_trait;
use ddl_provider::{render_script, Command, CommandExecutor, Result};

/// Writes each command followed by the batch separator.
pub struct ScriptWriter<W: Write + Send> {
    out: W,
    separator: String,
    newline: String,
}

impl<W: Write + Send> ScriptWriter<W> {
    pub fn new(out: W, separator: impl Into<String>, newline: impl Into<String>) -> Self {
        Self {
            out,
            separator: separator.into(),
            newline: newline.into(),
        }
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[async_trait]
impl<W: Write + Send> CommandExecutor for ScriptWriter<W> {
    async fn execute(&mut self, command: &Command) -> Result<()> {
        let text = render_script(std::slice::from_ref(command), &self.separator, &self.newline);
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddl_provider::{execute_all, ProviderError};

    /// Writer whose sink is already closed.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_script_writer_go_batches() {
        let mut writer = ScriptWriter::new(Vec::new(), "GO", "\n");
        let commands = vec![Command::new("DROP TABLE [a]"), Command::new("DROP TABLE [b]")];
        let executed = execute_all(&mut writer, commands).await.unwrap();
        assert_eq!(executed, 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "DROP TABLE [a]\nGO\nDROP TABLE [b]\nGO\n");
    }

    #[tokio::test]
    async fn test_script_writer_semicolons() {
        let mut writer = ScriptWriter::new(Vec::new(), ";", "\n");
        execute_all(&mut writer, vec![Command::new("DROP TABLE \"a\"")])
            .await
            .unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "DROP TABLE \"a\";\n");
    }

    #[tokio::test]
    async fn test_script_writer_io_failure_is_io_error() {
        let mut writer = ScriptWriter::new(ClosedPipe, "GO", "\n");
        let err = execute_all(&mut writer, vec![Command::new("DROP TABLE [a]")])
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
        assert_eq!(err.exit_code(), 7);
    }
}

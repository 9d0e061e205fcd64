//! Interactive loop: prompt for two lines, print the verdict, repeat.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use anagram_core::config::Config;
use anagram_core::{check, Verdict};

/// Conditions that end a session. All of them are fatal for the process.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not read input: stream closed")]
    InputClosed,
    #[error("could not read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("could not write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Prompts and per-session counters.
pub struct App {
    pub first_prompt: String,
    pub second_prompt: String,
    pub checks: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            first_prompt: config.first_prompt.clone(),
            second_prompt: config.second_prompt.clone(),
            checks: 0,
        }
    }

    /// Run check cycles until the input ends or fails.
    pub async fn run<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            self.check_once(reader, writer).await?;
        }
    }

    /// One cycle: two prompts, two lines, one verdict line.
    pub async fn check_once<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<Verdict, SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_flush(writer, &self.first_prompt).await?;
        let first = read_line(reader).await?;

        write_flush(writer, &self.second_prompt).await?;
        let second = read_line(reader).await?;

        let verdict = check(&first, &second);
        self.checks += 1;
        debug!(cycle = self.checks, %verdict, "check finished");

        write_flush(writer, &format!("{verdict}\n")).await?;
        Ok(verdict)
    }
}

async fn write_flush<W>(writer: &mut W, text: &str) -> Result<(), SessionError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(SessionError::Write)?;
    writer.flush().await.map_err(SessionError::Write)
}

/// Read one line without its terminator (`\n` or `\r\n`, or a lone `\r` at EOF).
/// A last line lacking a newline still counts.
async fn read_line<R>(reader: &mut R) -> Result<String, SessionError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader
        .read_until(b'\n', &mut buf)
        .await
        .map_err(SessionError::Read)?;
    if n == 0 {
        return Err(SessionError::InputClosed);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

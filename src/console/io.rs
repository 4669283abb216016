//! Line input and text output of the console.
//!
//! Both ends can be swapped for in-memory buffers, which is how the console
//! is driven in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

type Reader = Box<dyn AsyncBufRead + Send + Unpin>;

/// Shared line reader. The REPL and confirmation prompts read from the
/// same source, one line at a time.
#[derive(Clone)]
pub struct LineSource {
    reader: Arc<tokio::sync::Mutex<Reader>>,
}

impl LineSource {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        Self {
            reader: Arc::new(tokio::sync::Mutex::new(Box::new(reader))),
        }
    }

    /// Source yielding the lines of `text`, then end of input.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Source yielding raw bytes, which need not be valid UTF-8.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_reader(io::Cursor::new(bytes.into()))
    }

    /// Next line without its terminator, `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than reported, so a stray byte
    /// yields an unknown command instead of ending the session.
    pub async fn next_line(&self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.reader.lock().await.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Where console text goes.
#[derive(Debug, Clone)]
pub enum ConsoleOutput {
    Stdout,
    Buffer(Arc<Mutex<String>>),
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        ConsoleOutput::Stdout
    }

    pub fn buffer() -> Self {
        ConsoleOutput::Buffer(Arc::new(Mutex::new(String::new())))
    }

    pub fn line(&self, text: &str) {
        match self {
            ConsoleOutput::Stdout => println!("{}", text),
            ConsoleOutput::Buffer(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(|p| p.into_inner());
                buffer.push_str(text);
                buffer.push('\n');
            }
        }
    }

    /// Text without a newline, flushed so it shows before input is read.
    pub fn prompt(&self, text: &str) {
        match self {
            ConsoleOutput::Stdout => {
                print!("{}", text);
                io::stdout().flush().ok();
            }
            ConsoleOutput::Buffer(buffer) => buffer
                .lock()
                .unwrap_or_else(|p| p.into_inner())
                .push_str(text),
        }
    }

    /// Everything written so far; empty for stdout.
    pub fn contents(&self) -> String {
        match self {
            ConsoleOutput::Stdout => String::new(),
            ConsoleOutput::Buffer(buffer) => {
                buffer.lock().unwrap_or_else(|p| p.into_inner()).clone()
            }
        }
    }
}

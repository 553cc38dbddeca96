//! Comment sources and reply sinks.
//!
//! Comments arrive as newline-delimited JSON (`{"body": "...", "url": "..."}`)
//! from a file or stdin. Replies go to a [`ReplySink`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tracing::warn;

/// An incoming comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Raw comment text.
    pub body: String,
    /// Permalink, used for logging only.
    #[serde(default)]
    pub url: String,
}

impl Comment {
    /// Build a comment from its text and permalink.
    pub fn new(body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            url: url.into(),
        }
    }
}

/// Newline-delimited JSON comment reader.
pub struct CommentFeed {
    reader: BufReader<Box<dyn AsyncRead + Unpin + Send>>,
    buf: Vec<u8>,
    line_no: usize,
}

impl CommentFeed {
    /// Read comments from any async reader.
    pub fn new<R: AsyncRead + Unpin + Send + 'static>(reader: R) -> Self {
        let reader: Box<dyn AsyncRead + Unpin + Send> = Box::new(reader);
        Self {
            reader: BufReader::new(reader),
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// Open a file, or stdin when `path` is `-`.
    pub async fn open(path: &str) -> std::io::Result<Self> {
        if path == "-" {
            Ok(Self::new(tokio::io::stdin()))
        } else {
            let file = tokio::fs::File::open(Path::new(path)).await?;
            Ok(Self::new(file))
        }
    }

    /// Next well-formed comment, or `None` at end of input.
    ///
    /// Blank lines are skipped. Lines that are not UTF-8 or not valid JSON
    /// are logged and skipped.
    pub async fn next_comment(&mut self) -> std::io::Result<Option<Comment>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    warn!(line = self.line_no, error = %e, "Skipping non-UTF-8 comment");
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<Comment>(line) {
                Ok(comment) => return Ok(Some(comment)),
                Err(e) => warn!(line = self.line_no, error = %e, "Skipping malformed comment"),
            }
        }
    }
}

/// Destination for replies.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Post `text` as a reply to `comment`.
    async fn post(&self, comment: &Comment, text: &str) -> std::io::Result<()>;
}

/// Writes each reply to stdout followed by a blank line.
pub struct StdoutSink;

#[async_trait]
impl ReplySink for StdoutSink {
    async fn post(&self, _comment: &Comment, text: &str) -> std::io::Result<()> {
        let mut out = tokio::io::stdout();
        out.write_all(text.as_bytes()).await?;
        out.write_all(b"\n\n").await?;
        out.flush().await
    }
}

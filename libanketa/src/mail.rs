//! Hand-off to the system mail client
//!
//! The questionnaire is never sent by Anketa itself. A [`MailComposer`] takes
//! the composed [`MailMessage`] and presents it in whatever mail client the
//! system has; delivery is that client's job.

use std::cell::RefCell;
use std::process::{Command, Stdio};

use crate::error::{MailError, Result};
use crate::message::MailMessage;

/// How a compose session ended, as far as the form is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeResult {
    /// The mail client was opened with the message
    Launched,
    /// The visitor backed out before the hand-off
    Cancelled,
    /// The hand-off did not happen
    Failed,
}

/// A mail-compose facility
pub trait MailComposer {
    /// Whether the facility can be used at all
    fn can_send(&self) -> bool;

    /// Present `message` to the visitor for sending
    fn compose(&self, message: &MailMessage) -> Result<ComposeResult>;
}

/// Build an RFC 6068 `mailto:` URI for `message`
pub fn mailto_uri(message: &MailMessage) -> String {
    let to: Vec<String> = message
        .recipients
        .iter()
        .map(|r| urlencoding::encode(r).replace("%40", "@"))
        .collect();
    let body = message.body.replace("\r\n", "\n").replace('\n', "\r\n");
    format!(
        "mailto:{}?subject={}&body={}",
        to.join(","),
        urlencoding::encode(&message.subject),
        urlencoding::encode(&body)
    )
}

/// Platform URL handler and the arguments that go before the URI
///
/// Not `explorer` on Windows: it exits non-zero even when the launch works.
fn default_opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("rundll32", &["url.dll,FileProtocolHandler"])
    } else {
        ("xdg-open", &[])
    }
}

/// Opens a `mailto:` link with the system URL handler
#[derive(Debug, Clone)]
pub struct MailtoComposer {
    opener: String,
    args: Vec<String>,
}

impl MailtoComposer {
    /// Use `opener`, or the platform's URL handler when `None`
    pub fn new(opener: Option<String>) -> Self {
        match opener {
            Some(opener) => Self {
                opener,
                args: Vec::new(),
            },
            None => {
                let (opener, args) = default_opener();
                Self {
                    opener: opener.to_string(),
                    args: args.iter().map(|a| a.to_string()).collect(),
                }
            }
        }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }
}

impl MailComposer for MailtoComposer {
    fn can_send(&self) -> bool {
        which::which(&self.opener).is_ok()
    }

    fn compose(&self, message: &MailMessage) -> Result<ComposeResult> {
        let uri = mailto_uri(message);
        tracing::debug!(opener = %self.opener, uri_len = uri.len(), "Opening mail client");

        let output = Command::new(&self.opener)
            .args(&self.args)
            .arg(&uri)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => MailError::Unavailable(self.opener.clone()),
                _ => MailError::Launch(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MailError::Failed(format!("{}: {}", output.status, stderr.trim())).into());
        }

        tracing::info!(recipients = message.recipients.len(), "Mail client opened");
        Ok(ComposeResult::Launched)
    }
}

/// Keeps composed messages in memory instead of opening a mail client
///
/// Used for `--dry-run` and in tests.
#[derive(Debug)]
pub struct RecordingComposer {
    available: bool,
    sent: RefCell<Vec<MailMessage>>,
}

impl RecordingComposer {
    pub fn new() -> Self {
        Self {
            available: true,
            sent: RefCell::new(Vec::new()),
        }
    }

    /// A composer whose facility reports itself unavailable
    pub fn unavailable() -> Self {
        Self {
            available: false,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<MailMessage> {
        self.sent.borrow().clone()
    }

    pub fn into_messages(self) -> Vec<MailMessage> {
        self.sent.into_inner()
    }
}

impl Default for RecordingComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl MailComposer for RecordingComposer {
    fn can_send(&self) -> bool {
        self.available
    }

    fn compose(&self, message: &MailMessage) -> Result<ComposeResult> {
        if !self.available {
            return Err(MailError::Unavailable("recording composer".to_string()).into());
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(ComposeResult::Launched)
    }
}

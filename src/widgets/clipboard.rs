use std::fmt;
use std::time::Duration;

/// A clipboard copy mechanism failed or was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The mechanism does not exist in this environment.
    Unavailable,
    /// The mechanism exists but the copy did not complete.
    Denied(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard mechanism unavailable"),
            ClipboardError::Denied(msg) => write!(f, "clipboard copy denied: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// One copy mechanism (the primary facility or its fallback).
pub trait Clipboard {
    /// Whether the mechanism exists at all in this environment.
    fn is_available(&self) -> bool {
        true
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Outcome of a copy attempt across both mechanisms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// How long a transient notice stays up before the surface reverts it.
pub const NOTICE_REVERT: Duration = Duration::from_secs(2);

pub const COPY_SUCCESS_NOTICE: &str = "Account number copied!";
pub const COPY_FAILURE_NOTICE: &str = "Copy failed. Please select the account number manually.";

/// A transient on-page notification. The surface owns the clock; the notice
/// carries how long it should stay before reverting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub revert_after: Duration,
}

impl Notice {
    pub fn transient(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            revert_after: NOTICE_REVERT,
        }
    }
}

/// Shows transient notices; implemented by the embedding shell.
pub trait NoticeSurface {
    fn show(&mut self, notice: &Notice);
}

/// A bank account as displayed on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountCard {
    pub bank: String,
    pub number: String,
}

impl AccountCard {
    pub fn new(bank: impl Into<String>, number: impl Into<String>) -> Self {
        AccountCard {
            bank: bank.into(),
            number: number.into(),
        }
    }
}

/// Copy the account number: primary mechanism first (when available), then
/// the fallback. The outcome is reported as a transient notice when a
/// surface is present.
pub fn copy_account(
    card: &AccountCard,
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    notices: Option<&mut dyn NoticeSurface>,
) -> CopyOutcome {
    let copied = if primary.is_available() {
        primary.copy(&card.number).is_ok() || fallback.copy(&card.number).is_ok()
    } else {
        fallback.copy(&card.number).is_ok()
    };

    let outcome = if copied {
        CopyOutcome::Copied
    } else {
        CopyOutcome::Failed
    };

    if let Some(surface) = notices {
        let text = match outcome {
            CopyOutcome::Copied => COPY_SUCCESS_NOTICE,
            CopyOutcome::Failed => COPY_FAILURE_NOTICE,
        };
        surface.show(&Notice::transient(text));
    }

    outcome
}

use std::fmt;

/// What the footer reports about the last thing that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Editing(&'static str),
    Choosing,
    ValueUpdated,
    Submitted,
    IssuesRemaining(usize),
    PendingExit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => {
                f.write_str("Ready. Fill in the form and press Ctrl+S to create the group.")
            }
            Status::Editing(label) => write!(f, "Editing {label}"),
            Status::Choosing => f.write_str("Use ↑/↓ and Enter to choose"),
            Status::ValueUpdated => f.write_str("Value updated"),
            Status::Submitted => {
                f.write_str("Group submitted. Keep editing or press Ctrl+Q to exit.")
            }
            Status::IssuesRemaining(count) => write!(f, "{count} issue(s) remaining"),
            Status::PendingExit => {
                f.write_str("Unsubmitted changes. Press Ctrl+Q again to quit.")
            }
        }
    }
}

/// Current status plus its rendered text, so the view can borrow a `&str`.
#[derive(Debug, Clone)]
pub struct StatusLine {
    status: Status,
    text: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::from_status(Status::Ready)
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_status(status: Status) -> Self {
        let text = status.to_string();
        Self { status, text }
    }

    pub fn set(&mut self, status: Status) {
        if self.status != status {
            *self = Self::from_status(status);
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn message(&self) -> &str {
        &self.text
    }
}

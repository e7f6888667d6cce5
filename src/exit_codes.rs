//! Process exit statuses of the `cmtnorm` binary.
//!
//! CI jobs tell "blocks need normalizing" (1) apart from "cmtnorm could not
//! run" (2) by the exit code alone.

use std::process;

/// Outcome of a `check`, `fmt` or `init` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing to report, or `fmt` wrote its result
    Clean,
    /// At least one comment block would be rewritten
    Unnormalized,
    /// Input, configuration or I/O failure
    Failure,
}

impl ExitStatus {
    /// `Unnormalized` when a run found blocks to rewrite, `Clean` otherwise
    pub fn from_findings(found: bool) -> Self {
        if found { Self::Unnormalized } else { Self::Clean }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::Unnormalized => 1,
            Self::Failure => 2,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.code())
    }
}

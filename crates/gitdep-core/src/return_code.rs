use std::fmt;

/// Outcome of a run, a visitor step, or a collaborator call.
///
/// Each variant has a stable integer value, which the CLI uses as its exit
/// status. [`ReturnCode::BuildFailed`] carries a build script's own non-zero
/// exit code verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Success,
    GitRepositoryNotFound,
    FailedToRunBuildScript,
    FailedToRunGitCommand,
    FailedToRunNugetCommand,
    InvalidArguments,
    BuildFailed(i32),
}

impl ReturnCode {
    /// Map a child process exit code: zero is success, anything else is a failed build.
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            0 => Self::Success,
            other => Self::BuildFailed(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::GitRepositoryNotFound => 1,
            Self::FailedToRunBuildScript => 2,
            Self::FailedToRunGitCommand => 3,
            Self::FailedToRunNugetCommand => 4,
            Self::InvalidArguments => 5,
            Self::BuildFailed(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::GitRepositoryNotFound => f.write_str("git repository not found"),
            Self::FailedToRunBuildScript => f.write_str("failed to run build script"),
            Self::FailedToRunGitCommand => f.write_str("failed to run git command"),
            Self::FailedToRunNugetCommand => f.write_str("failed to run nuget command"),
            Self::InvalidArguments => f.write_str("invalid arguments"),
            Self::BuildFailed(code) => write!(f, "build script exited with code {code}"),
        }
    }
}

use gitdep_core::return_code::ReturnCode;

#[test]
fn test_stable_codes() {
    assert_eq!(ReturnCode::Success.code(), 0);
    assert_eq!(ReturnCode::GitRepositoryNotFound.code(), 1);
    assert_eq!(ReturnCode::FailedToRunBuildScript.code(), 2);
    assert_eq!(ReturnCode::FailedToRunGitCommand.code(), 3);
    assert_eq!(ReturnCode::FailedToRunNugetCommand.code(), 4);
    assert_eq!(ReturnCode::InvalidArguments.code(), 5);
}

#[test]
fn test_from_exit_code() {
    assert_eq!(ReturnCode::from_exit_code(0), ReturnCode::Success);
    assert_eq!(ReturnCode::from_exit_code(42), ReturnCode::BuildFailed(42));
    assert_eq!(ReturnCode::from_exit_code(42).code(), 42);
}

#[test]
fn test_is_success() {
    assert!(ReturnCode::Success.is_success());
    assert!(!ReturnCode::BuildFailed(1).is_success());
    assert!(!ReturnCode::GitRepositoryNotFound.is_success());
}

#[test]
fn test_display() {
    assert_eq!(
        ReturnCode::BuildFailed(3).to_string(),
        "build script exited with code 3"
    );
    assert_eq!(
        ReturnCode::GitRepositoryNotFound.to_string(),
        "git repository not found"
    );
}

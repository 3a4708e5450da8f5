use std::path::Path;

use gitdep_core::artifact::{extract_version, ArtifactDescriptor};

#[test]
fn test_extract_three_part_version() {
    assert_eq!(extract_version("MyLib.1.2.3"), Some(("MyLib", "1.2.3")));
}

#[test]
fn test_extract_prerelease_version() {
    assert_eq!(
        extract_version("MyLib.1.2.3-beta1"),
        Some(("MyLib", "1.2.3-beta1"))
    );
}

#[test]
fn test_extract_no_version_is_none() {
    assert_eq!(extract_version("MyLib"), None);
}

#[test]
fn test_extract_dotted_id() {
    assert_eq!(
        extract_version("Company.Product.Core.2.0.1"),
        Some(("Company.Product.Core", "2.0.1"))
    );
}

#[test]
fn test_extract_multi_digit_groups() {
    assert_eq!(
        extract_version("MyLib.10.20.300"),
        Some(("MyLib", "10.20.300"))
    );
}

#[test]
fn test_extract_two_and_four_part_versions() {
    assert_eq!(extract_version("MyLib.1.0"), Some(("MyLib", "1.0")));
    assert_eq!(extract_version("MyLib.1.2.3.4"), Some(("MyLib", "1.2.3.4")));
}

#[test]
fn test_extract_prefers_longest_trailing_version() {
    // Five groups is too many, so the first group joins the id.
    assert_eq!(
        extract_version("MyLib.1.2.3.4.5"),
        Some(("MyLib.1", "2.3.4.5"))
    );
}

#[test]
fn test_extract_prerelease_with_dots_and_dashes() {
    assert_eq!(
        extract_version("My-Lib.1.2.3-rc.1-build"),
        Some(("My-Lib", "1.2.3-rc.1-build"))
    );
}

#[test]
fn test_extract_rejects_single_group_and_bad_suffix() {
    assert_eq!(extract_version("MyLib.1"), None);
    assert_eq!(extract_version("MyLib.1.2.x"), None);
    assert_eq!(extract_version("MyLib.1.2.3-"), None);
    assert_eq!(extract_version(".1.2.3"), None);
}

#[test]
fn test_descriptor_from_path_strips_extension() {
    let descriptor = ArtifactDescriptor::from_path(Path::new("out/MyLib.1.2.3-beta1.nupkg")).unwrap();
    assert_eq!(descriptor.id, "MyLib");
    assert_eq!(descriptor.version, "1.2.3-beta1");
    assert_eq!(descriptor.path, Path::new("out/MyLib.1.2.3-beta1.nupkg"));
}

#[test]
fn test_descriptor_from_unversioned_path_is_none() {
    assert!(ArtifactDescriptor::from_path(Path::new("out/MyLib.nupkg")).is_none());
}

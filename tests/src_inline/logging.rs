use super::*;

#[test]
fn test_default_level_by_verbosity() {
    assert_eq!(default_level(0), "info");
    assert_eq!(default_level(1), "debug");
    assert_eq!(default_level(2), "trace");
    assert_eq!(default_level(9), "trace");
}

//! Unit tests for the error taxonomy

use tenv_domain::error::Error;

#[test]
fn test_duplicate_registration_display() {
    let error = Error::duplicate("BlockType: a::B, Mark: <null>");
    assert_eq!(
        error.to_string(),
        "Block already exists: BlockType: a::B, Mark: <null>"
    );
}

#[test]
fn test_not_found_display() {
    let error = Error::not_found("BlockType: a::B, Mark: m");
    assert!(error.to_string().starts_with("Unable to find:"));
    assert!(error.to_string().contains("Mark: m"));
}

#[test]
fn test_resolution_error_names_target_and_parameter() {
    let error = Error::resolution("my::Block", "data", "alloc::string::String");
    let message = error.to_string();

    assert!(message.contains("my::Block"));
    assert!(message.contains("`data`"));
    assert!(message.contains("alloc::string::String"));
}

#[test]
fn test_build_state_errors() {
    assert!(Error::AlreadyBuilt.to_string().contains("already built"));
    assert!(Error::NotBuilt.to_string().contains("build must be called first"));
}

#[test]
fn test_aggregate_keeps_every_inner_error() {
    let error = Error::WrapperAggregate {
        errors: vec![Error::execution("first"), Error::execution("second")],
    };

    assert_eq!(error.inner_errors().len(), 2);
    let message = error.to_string();
    assert!(message.contains("first"));
    assert!(message.contains("second"));
}

#[test]
fn test_inner_errors_empty_for_plain_errors() {
    assert!(Error::execution("boom").inner_errors().is_empty());
    assert!(Error::AlreadyBuilt.inner_errors().is_empty());
}

#[test]
fn test_execution_with_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::execution_with_source("block failed", io);

    assert!(error.to_string().contains("block failed"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_block_definition_display() {
    let error = Error::block_definition("my::Block", "setup type mismatch");
    let message = error.to_string();
    assert!(message.contains("my::Block"));
    assert!(message.contains("setup type mismatch"));
}

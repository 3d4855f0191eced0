//! Unit tests for block execution results

use tenv_domain::{ActionAfterExecution, BlockExecutionResult, Instance};

#[test]
fn test_default_action_is_continue() {
    assert_eq!(ActionAfterExecution::default(), ActionAfterExecution::Continue);
    assert_eq!(
        BlockExecutionResult::default().action(),
        ActionAfterExecution::Continue
    );
}

#[test]
fn test_empty_results() {
    let cont = BlockExecutionResult::empty_continue();
    let brk = BlockExecutionResult::empty_break();

    assert_eq!(cont.action(), ActionAfterExecution::Continue);
    assert_eq!(brk.action(), ActionAfterExecution::Break);
    assert!(cont.published().is_empty());
    assert!(brk.published().is_empty());
}

#[test]
fn test_publish_appends_in_order() {
    let result = BlockExecutionResult::new_break(vec![Instance::from_value(1_u32)])
        .publish(Instance::from_value("two".to_owned()));

    let (action, published) = result.into_parts();
    assert_eq!(action, ActionAfterExecution::Break);
    assert_eq!(published.len(), 2);
    assert!(published[0].is::<u32>());
    assert!(published[1].is::<String>());
}

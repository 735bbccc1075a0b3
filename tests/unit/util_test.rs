//! Tests for utility functions

use unschedulable_pool::util::{init_tracing, init_tracing_with_default};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with_default("unschedulable_pool=debug");
    assert!(tracing::dispatcher::has_been_set());
}

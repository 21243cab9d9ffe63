//! Tests for Decorator Chains
//!
//! Ordering, override visibility and repeatability of `ChainedProxyBuilder`.

use std::sync::Arc;
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

use super::mock_plugins::*;
use crate::model::{DownloadOperation, DownloadState, Downloadable, ModelKind};
use crate::plugin::chain::ChainedProxyBuilder;
use crate::testing::MemoryModel;

fn downloadable(id: &str) -> Arc<dyn Downloadable> {
    Arc::new(MemoryModel::new(ModelKind::Track, id))
}

#[test]
fn test_empty_chain_returns_passthrough() {
    let chain = ChainedProxyBuilder::<dyn Downloadable>::new();
    let original = downloadable("t1");

    let result = chain.execute(original.clone());

    assert!(chain.is_empty());
    assert!(!Arc::ptr_eq(&result, &original));
    assert_eq!(result.identity(), original.identity());
    assert_eq!(result.download_info(), original.download_info());
}

#[tokio::test]
async fn test_first_added_is_outermost() {
    let trace = new_trace();
    let mut chain = ChainedProxyBuilder::<dyn Downloadable>::new();
    chain
        .add(recording_download("a", None, &trace))
        .add(recording_download("b", None, &trace))
        .add(recording_download("c", None, &trace));

    let result = chain.execute(downloadable("t1"));
    result
        .start_download_operation(DownloadOperation::Start, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(recorded(&trace), vec!["a", "b", "c"]);
}

#[test]
fn test_outer_override_hides_inner_override() {
    let trace = new_trace();
    let mut chain = ChainedProxyBuilder::<dyn Downloadable>::new();
    chain
        .add(recording_download("a", None, &trace))
        .add(recording_download("b", Some(DownloadState::Downloaded), &trace))
        .add(recording_download("c", Some(DownloadState::Failed), &trace));

    let result = chain.execute(downloadable("t1"));

    // "a" forwards, so the first pinned layer below it decides
    assert_eq!(result.download_info().state, DownloadState::Downloaded);
}

#[tokio::test]
async fn test_add_range_appends_in_order() {
    let trace = new_trace();
    let mut first = ChainedProxyBuilder::<dyn Downloadable>::new();
    first.add(recording_download("a", None, &trace));

    let mut second = ChainedProxyBuilder::<dyn Downloadable>::new();
    second
        .add(recording_download("b", None, &trace))
        .add(recording_download("c", None, &trace));

    first.add_range(&second);
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);

    let result = first.execute(downloadable("t1"));
    result
        .start_download_operation(DownloadOperation::Start, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(recorded(&trace), vec!["a", "b", "c"]);
}

#[test]
fn test_execute_builds_fresh_decorators() {
    let trace = new_trace();
    let mut chain = ChainedProxyBuilder::<dyn Downloadable>::new();
    chain.add(recording_download("a", Some(DownloadState::Queued), &trace));

    let original = downloadable("t1");
    let first = chain.execute(original.clone());
    let second = chain.execute(original);

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.download_info(), second.download_info());
    assert!(first.equals(&*second));
}

#[test]
fn test_clone_shares_factories_not_list() {
    let trace = new_trace();
    let mut chain = ChainedProxyBuilder::<dyn Downloadable>::new();
    chain.add(recording_download("a", None, &trace));

    let mut copy = chain.clone();
    copy.add(recording_download("b", None, &trace));

    assert_eq!(chain.len(), 1);
    assert_eq!(copy.len(), 2);
}

proptest! {
    #[test]
    fn prop_execution_order_matches_registration(labels in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let trace = new_trace();
        let mut chain = ChainedProxyBuilder::<dyn Downloadable>::new();
        for label in &labels {
            chain.add(recording_download(label, None, &trace));
        }

        let result = chain.execute(downloadable("t1"));
        futures::executor::block_on(
            result.start_download_operation(DownloadOperation::Start, &CancellationToken::new()),
        )
        .unwrap();

        prop_assert_eq!(recorded(&trace), labels);
    }
}

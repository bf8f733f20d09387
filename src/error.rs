use quickpick_api::ProviderError;
use thiserror::Error;

/// Errors surfaced to whoever drives a [`PickerSession`](crate::PickerSession).
///
/// Cancellation is not represented here: superseded work is dropped silently.
#[derive(Debug, Error)]
pub enum PickerError {
	/// The provider, its deferred picks, or a trigger callback failed.
	#[error(transparent)]
	Provider(#[from] ProviderError),

	/// The task driving a deferred cycle panicked or was aborted.
	#[error("update cycle task failed: {0}")]
	Join(#[from] tokio::task::JoinError),

	/// Deferred picks were returned outside of a tokio runtime.
	#[error("deferred picks require a running tokio runtime")]
	NoRuntime,
}

use thiserror::Error;

/// Faults raised by a provider or by one of its pick callbacks.
///
/// These are treated as bugs in the provider: the picker never retries or
/// recovers from them, it hands them back to whoever drove the cycle.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The provider could not produce picks for the given filter.
	#[error("provider failed to produce picks for '{filter}': {message}")]
	Picks { filter: String, message: String },

	/// A pick's trigger callback failed while resolving its action.
	#[error("trigger for '{label}' failed: {message}")]
	Trigger { label: String, message: String },

	/// Any other provider failure.
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
	/// Convenience constructor for [`ProviderError::Picks`].
	pub fn picks(filter: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Picks {
			filter: filter.into(),
			message: message.into(),
		}
	}

	/// Convenience constructor for [`ProviderError::Trigger`].
	pub fn trigger(label: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Trigger {
			label: label.into(),
			message: message.into(),
		}
	}
}

use quickpick_api::Pick;

/// Per-session behaviour of a [`PickerSession`](crate::PickerSession).
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
	/// Text stripped from the start of the surface value before filtering.
	pub prefix: String,
	/// Accepting an item may keep the picker open when the surface asks for it.
	pub can_accept_in_background: bool,
	/// Shown in place of an empty result list.
	pub no_results_pick: Option<Pick>,
}

impl PickerOptions {
	#[must_use]
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	#[must_use]
	pub fn accept_in_background(mut self, enabled: bool) -> Self {
		self.can_accept_in_background = enabled;
		self
	}

	#[must_use]
	pub fn with_no_results_pick(mut self, pick: Pick) -> Self {
		self.no_results_pick = Some(pick);
		self
	}

	/// Strip the prefix and surrounding whitespace from a surface value.
	pub(crate) fn filter_for<'a>(&self, value: &'a str) -> &'a str {
		value
			.strip_prefix(self.prefix.as_str())
			.unwrap_or(value)
			.trim()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_strips_prefix_and_whitespace() {
		let options = PickerOptions::default().with_prefix(">");
		assert_eq!(options.filter_for(">  open file "), "open file");
		assert_eq!(options.filter_for(">"), "");
	}

	#[test]
	fn filter_keeps_values_without_prefix() {
		let options = PickerOptions::default().with_prefix("@");
		assert_eq!(options.filter_for(" symbol"), "symbol");
		assert_eq!(PickerOptions::default().filter_for("\tplain\n"), "plain");
	}
}

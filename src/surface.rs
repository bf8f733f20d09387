use quickpick_api::{KeyModifiers, PickItem};

/// Built-in behaviour of the surface that the session switches off or on.
///
/// Providers rank their own results, so a session always disables the
/// surface's filtering, sorting and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
	pub filter: bool,
	pub sort_by_label: bool,
	pub match_on_label: bool,
	pub match_on_description: bool,
	pub match_on_detail: bool,
	pub can_accept_in_background: bool,
}

impl SurfaceConfig {
	/// Configuration for a surface whose items are ranked by the provider.
	#[must_use]
	pub fn provider_ranked(can_accept_in_background: bool) -> Self {
		Self {
			filter: false,
			sort_by_label: false,
			match_on_label: false,
			match_on_description: false,
			match_on_detail: false,
			can_accept_in_background,
		}
	}
}

/// The list widget a session drives.
///
/// Methods take `&self`; implementations keep their own interior state so
/// that the surface can be shared with in-flight cycles.
pub trait PickerSurface: Send + Sync + 'static {
	/// Replace the displayed list.
	fn set_items(&self, items: Vec<PickItem>);

	/// Focus the item at `index` of the list last passed to `set_items`.
	fn set_active(&self, _index: usize) {}

	/// Show or hide the progress indicator.
	fn set_busy(&self, busy: bool);

	/// Current text of the query input.
	fn value(&self) -> String;

	/// Items the user currently has selected.
	fn selected_items(&self) -> Vec<PickItem>;

	/// Modifier keys held during the latest interaction.
	fn key_modifiers(&self) -> KeyModifiers {
		KeyModifiers::NONE
	}

	/// Dismiss the picker.
	fn hide(&self);

	/// Apply built-in behaviour flags.
	fn configure(&self, config: SurfaceConfig);
}

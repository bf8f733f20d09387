use serde::{Deserialize, Serialize};

use crate::pick::{Pick, PickButton};

/// Modifier keys held while the user interacted with the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModifiers {
	/// Control on Linux and Windows, Command on macOS.
	pub ctrl_cmd: bool,
	pub alt: bool,
}

impl KeyModifiers {
	pub const NONE: Self = Self {
		ctrl_cmd: false,
		alt: false,
	};
}

/// Raised by the surface when the user accepts the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptEvent {
	/// The picker should stay open while the accepted item runs.
	pub in_background: bool,
}

impl AcceptEvent {
	#[must_use]
	pub fn foreground() -> Self {
		Self {
			in_background: false,
		}
	}

	#[must_use]
	pub fn background() -> Self {
		Self {
			in_background: true,
		}
	}
}

/// Raised by the surface when one of an item's buttons is clicked.
#[derive(Debug, Clone)]
pub struct ButtonTriggerEvent {
	pub item: Pick,
	pub button: PickButton,
}

impl ButtonTriggerEvent {
	#[must_use]
	pub fn new(item: Pick, button: PickButton) -> Self {
		Self { item, button }
	}
}

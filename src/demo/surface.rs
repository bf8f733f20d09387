use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use quickpick::{KeyModifiers, Pick, PickItem, PickerSurface, SurfaceConfig};
use tokio::sync::mpsc::UnboundedSender;

use crate::cli::SurfaceEvent;

/// Surface that keeps the list in memory and reports every change as a
/// [`SurfaceEvent`].
pub(crate) struct ConsoleSurface {
	value: Mutex<String>,
	items: Mutex<Vec<PickItem>>,
	selected: Mutex<Vec<PickItem>>,
	config: Mutex<Option<SurfaceConfig>>,
	hidden: AtomicBool,
	events: UnboundedSender<SurfaceEvent>,
}

impl ConsoleSurface {
	pub(crate) fn new(events: UnboundedSender<SurfaceEvent>) -> Arc<Self> {
		Arc::new(Self {
			value: Mutex::new(String::new()),
			items: Mutex::new(Vec::new()),
			selected: Mutex::new(Vec::new()),
			config: Mutex::new(None),
			hidden: AtomicBool::new(false),
			events,
		})
	}

	pub(crate) fn set_value(&self, value: &str) {
		*self.value.lock() = value.to_owned();
	}

	/// The pick displayed at `index`; separators yield `None`.
	pub(crate) fn pick_at(&self, index: usize) -> Option<Pick> {
		self.items.lock().get(index).and_then(PickItem::as_pick).cloned()
	}

	/// Make the pick at `index` the current selection.
	pub(crate) fn select(&self, index: usize) -> Option<Pick> {
		let pick = self.pick_at(index)?;
		*self.selected.lock() = vec![pick.clone().into()];
		Some(pick)
	}

	pub(crate) fn is_hidden(&self) -> bool {
		self.hidden.load(Ordering::Acquire)
	}

	/// Whether the session allowed background acceptance.
	pub(crate) fn accepts_in_background(&self) -> bool {
		self.config
			.lock()
			.as_ref()
			.is_some_and(|config| config.can_accept_in_background)
	}

	fn emit(&self, event: SurfaceEvent) {
		let _ = self.events.send(event);
	}
}

impl PickerSurface for ConsoleSurface {
	fn set_items(&self, items: Vec<PickItem>) {
		let labels = items
			.iter()
			.map(|item| match item {
				PickItem::Pick(pick) => pick.label().to_owned(),
				PickItem::Separator(separator) => match &separator.label {
					Some(label) => format!("--- {label} ---"),
					None => "---".to_owned(),
				},
			})
			.collect();
		*self.items.lock() = items;
		self.emit(SurfaceEvent::Items { labels });
	}

	fn set_active(&self, index: usize) {
		self.emit(SurfaceEvent::Active { index });
	}

	fn set_busy(&self, busy: bool) {
		self.emit(SurfaceEvent::Busy { busy });
	}

	fn value(&self) -> String {
		self.value.lock().clone()
	}

	fn selected_items(&self) -> Vec<PickItem> {
		self.selected.lock().clone()
	}

	fn key_modifiers(&self) -> KeyModifiers {
		KeyModifiers::NONE
	}

	fn hide(&self) {
		if !self.hidden.swap(true, Ordering::AcqRel) {
			self.emit(SurfaceEvent::Hidden);
		}
	}

	fn configure(&self, config: SurfaceConfig) {
		*self.config.lock() = Some(config);
	}
}

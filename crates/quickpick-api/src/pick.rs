use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::events::{AcceptEvent, KeyModifiers};

/// What the picker should do once a button trigger has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
	/// Leave the picker as it is.
	NoAction,
	/// Hide the picker.
	ClosePicker,
	/// Keep the picker open and run a fresh update cycle.
	RefreshPicker,
}

type PendingAction = Pin<Box<dyn Future<Output = Result<TriggerAction, ProviderError>> + Send>>;

/// Result of a trigger callback, either known right away or still pending.
pub enum TriggerOutcome {
	Ready(TriggerAction),
	Pending(PendingAction),
}

impl TriggerOutcome {
	/// Wrap a future that resolves to the action later.
	pub fn pending<F>(future: F) -> Self
	where
		F: Future<Output = Result<TriggerAction, ProviderError>> + Send + 'static,
	{
		Self::Pending(Box::pin(future))
	}

	/// Wait for the action, suspending only when it is still pending.
	pub async fn resolve(self) -> Result<TriggerAction, ProviderError> {
		match self {
			Self::Ready(action) => Ok(action),
			Self::Pending(future) => future.await,
		}
	}
}

impl From<TriggerAction> for TriggerOutcome {
	fn from(action: TriggerAction) -> Self {
		Self::Ready(action)
	}
}

impl fmt::Debug for TriggerOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ready(action) => f.debug_tuple("Ready").field(action).finish(),
			Self::Pending(_) => f.write_str("Pending(..)"),
		}
	}
}

/// Runs when a pick is accepted.
pub trait AcceptHandler: Send + Sync {
	fn accept(&self, modifiers: KeyModifiers, event: AcceptEvent);
}

impl<F> AcceptHandler for F
where
	F: Fn(KeyModifiers, AcceptEvent) + Send + Sync,
{
	fn accept(&self, modifiers: KeyModifiers, event: AcceptEvent) {
		self(modifiers, event);
	}
}

/// Runs when one of a pick's buttons is clicked.
pub trait TriggerHandler: Send + Sync {
	fn trigger(&self, button_index: usize, modifiers: KeyModifiers) -> TriggerOutcome;
}

impl<F> TriggerHandler for F
where
	F: Fn(usize, KeyModifiers) -> TriggerOutcome + Send + Sync,
{
	fn trigger(&self, button_index: usize, modifiers: KeyModifiers) -> TriggerOutcome {
		self(button_index, modifiers)
	}
}

/// An inline button rendered next to a pick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickButton {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tooltip: Option<String>,
}

impl PickButton {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			tooltip: None,
		}
	}

	#[must_use]
	pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
		self.tooltip = Some(tooltip.into());
		self
	}
}

/// A selectable entry produced by a provider.
///
/// Picks are shared read-only with the picker; the optional accept and
/// trigger handlers are reference counted so cloning a pick is cheap.
#[derive(Clone)]
pub struct Pick {
	label: String,
	description: Option<String>,
	detail: Option<String>,
	meta: Option<String>,
	buttons: Vec<PickButton>,
	preferred: bool,
	accept: Option<Arc<dyn AcceptHandler>>,
	trigger: Option<Arc<dyn TriggerHandler>>,
}

impl Pick {
	#[must_use]
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			description: None,
			detail: None,
			meta: None,
			buttons: Vec::new(),
			preferred: false,
			accept: None,
			trigger: None,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail = Some(detail.into());
		self
	}

	#[must_use]
	pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
		self.meta = Some(meta.into());
		self
	}

	#[must_use]
	pub fn with_button(mut self, button: PickButton) -> Self {
		self.buttons.push(button);
		self
	}

	/// Ask the picker to focus this pick when the list is applied.
	#[must_use]
	pub fn preferred(mut self) -> Self {
		self.preferred = true;
		self
	}

	#[must_use]
	pub fn on_accept<H>(mut self, handler: H) -> Self
	where
		H: AcceptHandler + 'static,
	{
		self.accept = Some(Arc::new(handler));
		self
	}

	#[must_use]
	pub fn on_trigger<H>(mut self, handler: H) -> Self
	where
		H: TriggerHandler + 'static,
	{
		self.trigger = Some(Arc::new(handler));
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn detail(&self) -> Option<&str> {
		self.detail.as_deref()
	}

	pub fn meta(&self) -> Option<&str> {
		self.meta.as_deref()
	}

	pub fn buttons(&self) -> &[PickButton] {
		&self.buttons
	}

	pub fn is_preferred(&self) -> bool {
		self.preferred
	}

	pub fn accept_handler(&self) -> Option<&Arc<dyn AcceptHandler>> {
		self.accept.as_ref()
	}

	pub fn trigger_handler(&self) -> Option<&Arc<dyn TriggerHandler>> {
		self.trigger.as_ref()
	}

	/// Position of `button` among this pick's buttons.
	pub fn button_index(&self, button: &PickButton) -> Option<usize> {
		self.buttons.iter().position(|candidate| candidate == button)
	}
}

impl fmt::Debug for Pick {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Pick")
			.field("label", &self.label)
			.field("description", &self.description)
			.field("detail", &self.detail)
			.field("meta", &self.meta)
			.field("buttons", &self.buttons)
			.field("preferred", &self.preferred)
			.field("accept", &self.accept.is_some())
			.field("trigger", &self.trigger.is_some())
			.finish()
	}
}

/// A non-selectable divider between groups of picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

impl Separator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn labeled(label: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
		}
	}
}

/// One entry of the ordered list shown by the picker.
#[derive(Debug, Clone)]
pub enum PickItem {
	Pick(Pick),
	Separator(Separator),
}

impl PickItem {
	pub fn label(&self) -> Option<&str> {
		match self {
			Self::Pick(pick) => Some(pick.label()),
			Self::Separator(separator) => separator.label.as_deref(),
		}
	}

	pub fn as_pick(&self) -> Option<&Pick> {
		match self {
			Self::Pick(pick) => Some(pick),
			Self::Separator(_) => None,
		}
	}

	pub fn is_separator(&self) -> bool {
		matches!(self, Self::Separator(_))
	}
}

impl From<Pick> for PickItem {
	fn from(pick: Pick) -> Self {
		Self::Pick(pick)
	}
}

impl From<Separator> for PickItem {
	fn from(separator: Separator) -> Self {
		Self::Separator(separator)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[test]
	fn button_index_matches_by_value() {
		let pick = Pick::new("readme")
			.with_button(PickButton::new("open"))
			.with_button(PickButton::new("remove").with_tooltip("Remove from history"));

		assert_eq!(pick.button_index(&PickButton::new("open")), Some(0));
		assert_eq!(
			pick.button_index(&PickButton::new("remove").with_tooltip("Remove from history")),
			Some(1)
		);
		assert_eq!(pick.button_index(&PickButton::new("remove")), None);
	}

	#[test]
	fn closures_act_as_handlers() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let pick = Pick::new("a").on_accept(move |_mods: KeyModifiers, _event: AcceptEvent| {
			counter.fetch_add(1, Ordering::SeqCst);
		});

		let handler = pick.accept_handler().expect("accept handler");
		handler.accept(KeyModifiers::NONE, AcceptEvent::foreground());
		pick.clone()
			.accept_handler()
			.expect("shared handler")
			.accept(KeyModifiers::NONE, AcceptEvent::background());

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert!(pick.trigger_handler().is_none());
	}

	#[tokio::test]
	async fn trigger_outcome_resolves_ready_and_pending() {
		let ready = TriggerOutcome::from(TriggerAction::ClosePicker);
		assert_eq!(ready.resolve().await.unwrap(), TriggerAction::ClosePicker);

		let pending = TriggerOutcome::pending(async { Ok(TriggerAction::RefreshPicker) });
		assert_eq!(pending.resolve().await.unwrap(), TriggerAction::RefreshPicker);
	}

	#[test]
	fn separators_carry_no_pick() {
		let item = PickItem::from(Separator::labeled("recent"));
		assert!(item.is_separator());
		assert!(item.as_pick().is_none());
		assert_eq!(item.label(), Some("recent"));
	}

	#[test]
	fn trigger_action_serializes_snake_case() {
		let json = serde_json::to_string(&TriggerAction::RefreshPicker).unwrap();
		assert_eq!(json, "\"refresh_picker\"");
	}
}

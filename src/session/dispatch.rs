use std::future::Future;
use std::sync::Arc;

use quickpick_api::{AcceptEvent, ButtonTriggerEvent, PickItem, TriggerAction};

use super::{Cycle, PickerSession, SessionInner};
use crate::error::PickerError;

/// What the session did in response to a button trigger.
#[derive(Debug)]
pub enum Dispatch {
	/// The item has no trigger handler or does not own the clicked button.
	Ignored,
	/// The handler asked for no action; the picker stays as it is.
	Kept,
	/// The picker was hidden.
	Closed,
	/// A fresh update cycle was started.
	Refreshed(Cycle),
	/// The session ended while the handler was resolving; its action was dropped.
	Dropped,
}

impl PickerSession {
	/// Handle the surface's accept event for the current selection.
	///
	/// Returns `true` when the selected pick had an accept handler and it ran.
	/// The picker is hidden before the handler runs unless the event asks for
	/// background acceptance.
	pub fn accept(&self, event: AcceptEvent) -> bool {
		let surface = &self.inner.surface;
		let Some(PickItem::Pick(pick)) = surface.selected_items().into_iter().next() else {
			return false;
		};
		let Some(handler) = pick.accept_handler() else {
			tracing::trace!(label = pick.label(), "selected pick has no accept handler");
			return false;
		};

		let modifiers = surface.key_modifiers();
		if !event.in_background {
			surface.hide();
		}
		tracing::debug!(
			label = pick.label(),
			in_background = event.in_background,
			"accepting pick"
		);
		handler.accept(modifiers, event);
		true
	}

	/// Handle a click on one of an item's buttons.
	///
	/// The returned future owns everything it needs, so the surface may spawn
	/// it. The trigger handler's action is applied only if the session is
	/// still alive once the action resolves.
	pub fn trigger_button(
		&self,
		event: ButtonTriggerEvent,
	) -> impl Future<Output = Result<Dispatch, PickerError>> + Send + 'static {
		let inner = Arc::clone(&self.inner);
		async move { SessionInner::trigger_button(&inner, event).await }
	}
}

impl SessionInner {
	async fn trigger_button(
		this: &Arc<Self>,
		event: ButtonTriggerEvent,
	) -> Result<Dispatch, PickerError> {
		let ButtonTriggerEvent { item, button } = event;
		let Some(handler) = item.trigger_handler() else {
			return Ok(Dispatch::Ignored);
		};
		let Some(index) = item.button_index(&button) else {
			tracing::debug!(
				label = item.label(),
				button = %button.id,
				"button does not belong to the triggering pick"
			);
			return Ok(Dispatch::Ignored);
		};

		let modifiers = this.surface.key_modifiers();
		let action = handler.trigger(index, modifiers).resolve().await?;
		if this.token.is_cancelled() {
			tracing::trace!(label = item.label(), ?action, "session ended, dropping trigger action");
			return Ok(Dispatch::Dropped);
		}

		tracing::debug!(label = item.label(), index, ?action, "trigger resolved");
		match action {
			TriggerAction::NoAction => Ok(Dispatch::Kept),
			TriggerAction::ClosePicker => {
				this.surface.hide();
				Ok(Dispatch::Closed)
			}
			TriggerAction::RefreshPicker => Ok(Dispatch::Refreshed(Self::update(this)?)),
		}
	}
}

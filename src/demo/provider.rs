use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use quickpick::{
	AcceptEvent, CancellationToken, DisposableStore, KeyModifiers, Pick, PickButton, PickItem,
	PickProvider, Picks, ProviderError, Separator, TriggerAction, TriggerOutcome,
};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time;

use crate::cli::SurfaceEvent;

/// Provider over a word list.
///
/// Words starting with the filter are fast picks. Words containing it
/// elsewhere are slow picks that resolve after `slow_delay`, or resolve
/// empty as soon as the cycle is cancelled.
pub(crate) struct DemoProvider {
	words: Arc<Mutex<Vec<String>>>,
	slow_delay: Duration,
	events: UnboundedSender<SurfaceEvent>,
}

impl DemoProvider {
	pub(crate) fn new(
		words: Vec<String>,
		slow_delay: Duration,
		events: UnboundedSender<SurfaceEvent>,
	) -> Arc<Self> {
		Arc::new(Self {
			words: Arc::new(Mutex::new(words)),
			slow_delay,
			events,
		})
	}

	fn pick(&self, word: &str) -> Pick {
		let events = self.events.clone();
		let label = word.to_owned();
		let words = Arc::clone(&self.words);
		let removed = word.to_owned();

		Pick::new(word)
			.with_button(PickButton::new("remove").with_tooltip("Remove from the list"))
			.with_button(PickButton::new("close").with_tooltip("Close the picker"))
			.on_accept(move |_modifiers: KeyModifiers, event: AcceptEvent| {
				let _ = events.send(SurfaceEvent::Accepted {
					label: label.clone(),
					in_background: event.in_background,
				});
			})
			.on_trigger(move |index: usize, _modifiers: KeyModifiers| match index {
				0 => {
					words.lock().retain(|word| *word != removed);
					TriggerOutcome::Ready(TriggerAction::RefreshPicker)
				}
				1 => TriggerOutcome::Ready(TriggerAction::ClosePicker),
				_ => TriggerOutcome::Ready(TriggerAction::NoAction),
			})
	}
}

impl PickProvider for DemoProvider {
	fn get_picks(
		&self,
		filter: &str,
		disposables: &DisposableStore,
		token: CancellationToken,
	) -> Result<Picks, ProviderError> {
		let words = self.words.lock().clone();
		if filter.is_empty() {
			return Ok(Picks::immediate(words.iter().map(|word| self.pick(word))));
		}

		let needle = filter.to_lowercase();
		let (prefixed, contained): (Vec<&String>, Vec<&String>) = words
			.iter()
			.filter(|word| word.to_lowercase().contains(&needle))
			.partition(|word| word.to_lowercase().starts_with(&needle));

		let fast: Vec<PickItem> = prefixed.into_iter().map(|word| self.pick(word).into()).collect();
		let mut slow: Vec<PickItem> = Vec::with_capacity(contained.len() + 1);
		if !contained.is_empty() {
			slow.push(Separator::new().into());
			slow.extend(contained.into_iter().map(|word| PickItem::from(self.pick(word))));
		}

		let released = filter.to_owned();
		disposables.add(move || tracing::trace!(filter = %released, "demo picks released"));

		let delay = self.slow_delay;
		Ok(Picks::combined(fast, async move {
			tokio::select! {
				() = token.cancelled() => Ok(Vec::new()),
				() = time::sleep(delay) => Ok(slow),
			}
		}))
	}
}

#[cfg(test)]
mod tests {
	use tokio::sync::mpsc;

	use super::*;

	fn provider(delay_ms: u64) -> Arc<DemoProvider> {
		let (tx, _rx) = mpsc::unbounded_channel();
		DemoProvider::new(
			vec!["alpha".into(), "alphabet".into(), "bravo".into(), "mali".into()],
			Duration::from_millis(delay_ms),
			tx,
		)
	}

	fn labels(items: &[PickItem]) -> Vec<Option<&str>> {
		items.iter().map(PickItem::label).collect()
	}

	#[test]
	fn empty_filter_lists_every_word() {
		let picks = provider(10)
			.get_picks("", &DisposableStore::new(), CancellationToken::new())
			.unwrap();
		let Picks::Immediate(items) = picks else {
			panic!("expected immediate picks");
		};
		assert_eq!(items.len(), 4);
	}

	#[tokio::test(start_paused = true)]
	async fn prefix_matches_are_fast_and_infix_matches_slow() {
		let picks = provider(10)
			.get_picks("al", &DisposableStore::new(), CancellationToken::new())
			.unwrap();
		let Picks::Combined { fast, slow } = picks else {
			panic!("expected combined picks");
		};

		assert_eq!(labels(&fast), vec![Some("alpha"), Some("alphabet")]);
		let slow = slow.await.unwrap();
		assert_eq!(labels(&slow), vec![None, Some("mali")]);
	}

	#[tokio::test(start_paused = true)]
	async fn cancellation_resolves_slow_picks_early() {
		let token = CancellationToken::new();
		let picks = provider(10_000)
			.get_picks("al", &DisposableStore::new(), token.clone())
			.unwrap();
		let Picks::Combined { slow, .. } = picks else {
			panic!("expected combined picks");
		};

		token.cancel();
		let started = time::Instant::now();
		assert!(slow.await.unwrap().is_empty());
		assert!(started.elapsed() < Duration::from_millis(10_000));
	}

	#[test]
	fn remove_button_drops_the_word() {
		let provider = provider(10);
		let pick = provider.pick("bravo");

		let outcome = pick
			.trigger_handler()
			.expect("trigger")
			.trigger(0, KeyModifiers::NONE);

		assert!(matches!(
			outcome,
			TriggerOutcome::Ready(TriggerAction::RefreshPicker)
		));
		assert!(!provider.words.lock().iter().any(|word| word == "bravo"));
	}

	#[test]
	fn registers_a_release_per_filtered_cycle() {
		let store = DisposableStore::new();
		let _ = provider(10)
			.get_picks("br", &store, CancellationToken::new())
			.unwrap();
		assert_eq!(store.len(), 1);
	}
}

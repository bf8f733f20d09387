use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use quickpick_api::{CancellationToken, Pick, PickItem, Picks, PicksFuture};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time;

use super::{PickerSession, SessionInner};
use crate::error::PickerError;
use crate::surface::PickerSurface;

/// How long fast picks wait for slow picks before being painted alone.
///
/// Slow picks that arrive within this window are painted together with the
/// fast ones in a single update, which keeps the list from flickering.
pub const FAST_PICKS_RACE_WINDOW: Duration = Duration::from_millis(200);

/// Handle to one update cycle.
///
/// Cycles that resolve synchronously are finished on creation. Deferred ones
/// run on the tokio runtime; dropping the handle detaches them.
#[derive(Debug)]
pub struct Cycle {
	generation: u64,
	task: Option<JoinHandle<Result<(), PickerError>>>,
}

impl Cycle {
	fn finished(generation: u64) -> Self {
		Self {
			generation,
			task: None,
		}
	}

	/// Sequence number of this cycle within its session, starting at 1.
	/// Zero means the session was already disposed and nothing ran.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether the cycle still has work in flight.
	pub fn is_pending(&self) -> bool {
		self.task.as_ref().is_some_and(|task| !task.is_finished())
	}

	/// Wait for the cycle and surface any provider fault.
	///
	/// A superseded cycle completes with `Ok(())` once its awaited picks
	/// resolve, without having touched the surface.
	pub async fn join(self) -> Result<(), PickerError> {
		match self.task {
			Some(task) => task.await?,
			None => Ok(()),
		}
	}
}

/// Clears the busy indicator on drop unless the owning cycle was superseded,
/// in which case the newer cycle owns the indicator.
struct BusyRelease {
	surface: Arc<dyn PickerSurface>,
	token: CancellationToken,
}

impl BusyRelease {
	fn acquire(surface: &Arc<dyn PickerSurface>, token: &CancellationToken) -> Self {
		surface.set_busy(true);
		Self {
			surface: Arc::clone(surface),
			token: token.clone(),
		}
	}
}

impl Drop for BusyRelease {
	fn drop(&mut self) {
		if !self.token.is_cancelled() {
			self.surface.set_busy(false);
		}
	}
}

#[derive(Default)]
struct Race {
	fast_done: AtomicBool,
	slow_done: AtomicBool,
}

impl PickerSession {
	/// Start a new update cycle, superseding the current one.
	///
	/// The provider is called synchronously and its error, if any, is
	/// returned here. Deferred picks need a tokio runtime to run on.
	pub fn update(&self) -> Result<Cycle, PickerError> {
		SessionInner::update(&self.inner)
	}
}

impl SessionInner {
	pub(super) fn update(this: &Arc<Self>) -> Result<Cycle, PickerError> {
		if this.token.is_cancelled() {
			tracing::debug!("session ended, skipping update");
			return Ok(Cycle::finished(0));
		}

		let (generation, token, disposables) = this.begin_cycle();
		let filter = this.filter();
		let picks = this.provider.get_picks(&filter, &disposables, token.clone())?;
		tracing::debug!(generation, filter = %filter, kind = picks.kind(), "update cycle started");

		match picks {
			Picks::None => Ok(Cycle::finished(generation)),
			Picks::Immediate(items) => {
				this.apply(items);
				Ok(Cycle::finished(generation))
			}
			Picks::Deferred(future) => {
				let runtime = Handle::try_current().map_err(|_| PickerError::NoRuntime)?;
				let busy = BusyRelease::acquire(&this.surface, &token);
				let inner = Arc::clone(this);
				let task = runtime.spawn(async move {
					inner.run_deferred(future, &token, busy).await
				});
				Ok(Cycle {
					generation,
					task: Some(task),
				})
			}
			Picks::Combined { fast, slow } => {
				let runtime = Handle::try_current().map_err(|_| PickerError::NoRuntime)?;
				let busy = BusyRelease::acquire(&this.surface, &token);
				let inner = Arc::clone(this);
				let task = runtime.spawn(async move {
					inner.run_combined(fast, slow, &token, busy).await
				});
				Ok(Cycle {
					generation,
					task: Some(task),
				})
			}
		}
	}

	async fn run_deferred(
		&self,
		future: PicksFuture,
		token: &CancellationToken,
		_busy: BusyRelease,
	) -> Result<(), PickerError> {
		let items = future.await?;
		if token.is_cancelled() {
			tracing::trace!("deferred picks superseded");
			return Ok(());
		}
		self.apply(items);
		Ok(())
	}

	async fn run_combined(
		&self,
		fast: Vec<PickItem>,
		slow: PicksFuture,
		token: &CancellationToken,
		busy: BusyRelease,
	) -> Result<(), PickerError> {
		let race = Race::default();
		let ((), slow_result) = tokio::join!(
			self.fast_branch(&fast, token, &race),
			self.slow_branch(&fast, slow, token, &race, busy),
		);
		slow_result
	}

	async fn fast_branch(&self, fast: &[PickItem], token: &CancellationToken, race: &Race) {
		time::sleep(FAST_PICKS_RACE_WINDOW).await;
		if !token.is_cancelled() && !race.slow_done.load(Ordering::Acquire) {
			tracing::trace!(count = fast.len(), "race window elapsed, painting fast picks");
			self.apply(fast.to_vec());
		}
		race.fast_done.store(true, Ordering::Release);
	}

	async fn slow_branch(
		&self,
		fast: &[PickItem],
		slow: PicksFuture,
		token: &CancellationToken,
		race: &Race,
		_busy: BusyRelease,
	) -> Result<(), PickerError> {
		let result = slow.await;
		race.slow_done.store(true, Ordering::Release);
		let slow_items = result?;
		if token.is_cancelled() {
			tracing::trace!("slow picks superseded");
			return Ok(());
		}

		// An empty late result would only repaint what the fast branch showed.
		let fast_painted = race.fast_done.load(Ordering::Acquire);
		if !slow_items.is_empty() || !fast_painted {
			tracing::trace!(
				fast = fast.len(),
				slow = slow_items.len(),
				late = fast_painted,
				"painting fast and slow picks"
			);
			let mut items = Vec::with_capacity(fast.len() + slow_items.len());
			items.extend_from_slice(fast);
			items.extend(slow_items);
			self.apply(items);
		}
		Ok(())
	}

	/// Write a list to the surface, substituting the no-results pick for an
	/// empty list and focusing the first preferred pick.
	fn apply(&self, mut items: Vec<PickItem>) {
		if items.is_empty()
			&& let Some(placeholder) = &self.options.no_results_pick
		{
			items.push(placeholder.clone().into());
		}
		let active = items
			.iter()
			.position(|item| item.as_pick().is_some_and(Pick::is_preferred));
		self.surface.set_items(items);
		if let Some(index) = active {
			self.surface.set_active(index);
		}
	}
}

//! Update cycles and action dispatch for a single picker session.
//!
//! A session owns one cancellation token for its whole lifetime and mints a
//! child token for every update cycle. Starting a cycle cancels the previous
//! one, and every continuation checks its own token before touching the
//! surface, so a superseded cycle can never overwrite newer results.

mod cycle;
mod dispatch;

use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use quickpick_api::{CancellationToken, DisposableStore, PickProvider};

pub use cycle::{Cycle, FAST_PICKS_RACE_WINDOW};
pub use dispatch::Dispatch;

use crate::error::PickerError;
use crate::options::PickerOptions;
use crate::surface::{PickerSurface, SurfaceConfig};

/// Token and resources of the cycle that currently owns the surface.
#[derive(Default)]
struct CycleSlot {
	generation: u64,
	token: Option<CancellationToken>,
	disposables: DisposableStore,
}

pub(crate) struct SessionInner {
	surface: Arc<dyn PickerSurface>,
	provider: Arc<dyn PickProvider>,
	options: PickerOptions,
	token: CancellationToken,
	disposables: DisposableStore,
	cycle: Mutex<CycleSlot>,
	disposed: AtomicBool,
}

/// Connects a picker surface to a provider for as long as the picker is open.
///
/// Dropping the session disposes it.
pub struct PickerSession {
	inner: Arc<SessionInner>,
}

impl PickerSession {
	/// Create a session that ends on [`dispose`](Self::dispose) or drop.
	pub fn new(
		surface: Arc<dyn PickerSurface>,
		provider: Arc<dyn PickProvider>,
		options: PickerOptions,
	) -> Self {
		Self::with_parent(surface, provider, options, &CancellationToken::new())
	}

	/// Create a session that also ends when `parent` is cancelled.
	pub fn with_parent(
		surface: Arc<dyn PickerSurface>,
		provider: Arc<dyn PickProvider>,
		options: PickerOptions,
		parent: &CancellationToken,
	) -> Self {
		surface.configure(SurfaceConfig::provider_ranked(
			options.can_accept_in_background,
		));
		Self {
			inner: Arc::new(SessionInner {
				surface,
				provider,
				options,
				token: parent.child_token(),
				disposables: DisposableStore::new(),
				cycle: Mutex::new(CycleSlot::default()),
				disposed: AtomicBool::new(false),
			}),
		}
	}

	/// Create a session and run its first update cycle right away.
	pub fn open(
		surface: Arc<dyn PickerSurface>,
		provider: Arc<dyn PickProvider>,
		options: PickerOptions,
	) -> Result<(Self, Cycle), PickerError> {
		let session = Self::new(surface, provider, options);
		let cycle = session.update()?;
		Ok((session, cycle))
	}

	/// Handle a change of the surface's query text.
	pub fn on_value_changed(&self) -> Result<Cycle, PickerError> {
		self.update()
	}

	/// Session-wide resources, released when the session is disposed.
	pub fn disposables(&self) -> &DisposableStore {
		&self.inner.disposables
	}

	/// Token cancelled when the session ends.
	pub fn token(&self) -> &CancellationToken {
		&self.inner.token
	}

	pub fn is_disposed(&self) -> bool {
		self.inner.disposed.load(Ordering::Acquire)
	}

	/// Cancel every outstanding cycle and trigger continuation and release
	/// all session and cycle resources. Safe to call more than once.
	pub fn dispose(&self) {
		self.inner.dispose();
	}
}

impl Drop for PickerSession {
	fn drop(&mut self) {
		self.inner.dispose();
	}
}

impl SessionInner {
	/// Supersede the current cycle and hand out the next cycle's token and
	/// resource store.
	fn begin_cycle(&self) -> (u64, CancellationToken, DisposableStore) {
		let (generation, token, disposables, previous) = {
			let mut slot = self.cycle.lock();
			if let Some(previous) = slot.token.take() {
				previous.cancel();
			}
			let previous = mem::take(&mut slot.disposables);
			slot.generation += 1;
			let token = self.token.child_token();
			slot.token = Some(token.clone());
			(
				slot.generation,
				token,
				slot.disposables.clone(),
				previous,
			)
		};
		previous.dispose();
		self.surface.set_busy(false);
		(generation, token, disposables)
	}

	/// Query text for the provider, derived from the surface value.
	fn filter(&self) -> String {
		let value = self.surface.value();
		self.options.filter_for(&value).to_owned()
	}

	fn dispose(&self) {
		if self.disposed.swap(true, Ordering::AcqRel) {
			return;
		}
		tracing::debug!("disposing picker session");
		self.token.cancel();
		let disposables = {
			let mut slot = self.cycle.lock();
			slot.token = None;
			mem::take(&mut slot.disposables)
		};
		disposables.dispose();
		self.disposables.dispose();
	}
}

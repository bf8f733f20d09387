//! Registry of cleanup callbacks released together.

use std::fmt;
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;

type Release = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct StoreState {
	disposed: bool,
	releases: Vec<Release>,
}

impl Drop for StoreState {
	fn drop(&mut self) {
		for release in self.releases.drain(..) {
			release();
		}
	}
}

/// Shared list of release callbacks.
///
/// Handles are cheap to clone and all refer to the same registry, so a
/// provider can move one into a deferred computation and keep registering
/// resources after `get_picks` returned. Each release runs exactly once:
/// on [`dispose`](Self::dispose), when the last handle is dropped, or right
/// away if it is added after the store was disposed.
#[derive(Clone, Default)]
pub struct DisposableStore {
	state: Arc<Mutex<StoreState>>,
}

impl DisposableStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `release` to run when the store is disposed.
	pub fn add<F>(&self, release: F)
	where
		F: FnOnce() + Send + 'static,
	{
		let mut state = self.state.lock();
		if state.disposed {
			drop(state);
			tracing::trace!("store already disposed, releasing immediately");
			release();
			return;
		}
		state.releases.push(Box::new(release));
	}

	/// Run every registered release. Later calls do nothing.
	pub fn dispose(&self) {
		let releases = {
			let mut state = self.state.lock();
			if state.disposed {
				return;
			}
			state.disposed = true;
			mem::take(&mut state.releases)
		};
		// Run outside the lock so a release may touch the store again.
		for release in releases {
			release();
		}
	}

	pub fn is_disposed(&self) -> bool {
		self.state.lock().disposed
	}

	/// Number of releases still pending.
	pub fn len(&self) -> usize {
		self.state.lock().releases.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Debug for DisposableStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.lock();
		f.debug_struct("DisposableStore")
			.field("disposed", &state.disposed)
			.field("pending", &state.releases.len())
			.finish()
	}
}

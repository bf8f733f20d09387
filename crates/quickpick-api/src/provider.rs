use tokio_util::sync::CancellationToken;

use crate::dispose::DisposableStore;
use crate::error::ProviderError;
use crate::picks::Picks;

/// Source of picks for a picker session.
///
/// `get_picks` runs once per update cycle with the trimmed filter text. Any
/// resources tied to the answer belong in `disposables`, which is released
/// when the cycle is superseded or the session ends. Long-running work should
/// watch `token` and stop early once it is cancelled; results produced after
/// cancellation are discarded either way.
pub trait PickProvider: Send + Sync + 'static {
	fn get_picks(
		&self,
		filter: &str,
		disposables: &DisposableStore,
		token: CancellationToken,
	) -> Result<Picks, ProviderError>;
}

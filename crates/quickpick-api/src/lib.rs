//! Provider-facing protocol for `quickpick`.
//!
//! Providers receive the current filter text together with a per-cycle
//! [`DisposableStore`] and a [`CancellationToken`], and answer with one of the
//! [`Picks`] shapes. The picker session in the `quickpick` crate decides how
//! to race, apply and discard those results.

pub mod dispose;
pub mod error;
pub mod events;
pub mod pick;
pub mod picks;
pub mod provider;

pub use dispose::DisposableStore;
pub use error::ProviderError;
pub use events::{AcceptEvent, ButtonTriggerEvent, KeyModifiers};
pub use pick::{
	AcceptHandler, Pick, PickButton, PickItem, Separator, TriggerAction, TriggerHandler,
	TriggerOutcome,
};
pub use picks::{Picks, PicksFuture};
pub use provider::PickProvider;
pub use tokio_util::sync::CancellationToken;

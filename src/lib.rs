//! Result racing and cancellation controller for incremental pickers.
//!
//! A [`PickerSession`] sits between a picker surface (the list widget the user
//! types into) and a [`PickProvider`]. Every query change starts a new update
//! cycle that supersedes the previous one, races fast picks against slow picks
//! to avoid painting the list twice, and routes accept and button events back
//! to the picks that produced them.

pub mod app_dirs;
mod error;
pub mod logging;
mod options;
mod session;
mod surface;

pub use error::PickerError;
pub use options::PickerOptions;
pub use session::{Cycle, Dispatch, FAST_PICKS_RACE_WINDOW, PickerSession};
pub use surface::{PickerSurface, SurfaceConfig};

pub use quickpick_api::{
	AcceptEvent, ButtonTriggerEvent, CancellationToken, DisposableStore, KeyModifiers, Pick,
	PickButton, PickItem, PickProvider, Picks, PicksFuture, ProviderError, Separator,
	TriggerAction, TriggerOutcome,
};

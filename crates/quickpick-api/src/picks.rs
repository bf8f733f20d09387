use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::ProviderError;
use crate::pick::PickItem;

/// Deferred list of picks.
pub type PicksFuture = Pin<Box<dyn Future<Output = Result<Vec<PickItem>, ProviderError>> + Send>>;

/// Everything a provider may answer for one filter.
pub enum Picks {
	/// Nothing changed; the current list stays as it is.
	None,
	/// A list that is ready right away.
	Immediate(Vec<PickItem>),
	/// A list that is still being computed.
	Deferred(PicksFuture),
	/// Fast picks available now plus slow picks appended once they resolve.
	Combined { fast: Vec<PickItem>, slow: PicksFuture },
}

impl Picks {
	pub fn immediate<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<PickItem>,
	{
		Self::Immediate(items.into_iter().map(Into::into).collect())
	}

	pub fn deferred<F>(future: F) -> Self
	where
		F: Future<Output = Result<Vec<PickItem>, ProviderError>> + Send + 'static,
	{
		Self::Deferred(Box::pin(future))
	}

	pub fn combined<I, F>(fast: I, slow: F) -> Self
	where
		I: IntoIterator,
		I::Item: Into<PickItem>,
		F: Future<Output = Result<Vec<PickItem>, ProviderError>> + Send + 'static,
	{
		Self::Combined {
			fast: fast.into_iter().map(Into::into).collect(),
			slow: Box::pin(slow),
		}
	}

	/// Short name of the active variant, used in logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Immediate(_) => "immediate",
			Self::Deferred(_) => "deferred",
			Self::Combined { .. } => "combined",
		}
	}
}

impl fmt::Debug for Picks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => f.write_str("None"),
			Self::Immediate(items) => f.debug_tuple("Immediate").field(items).finish(),
			Self::Deferred(_) => f.write_str("Deferred(..)"),
			Self::Combined { fast, .. } => f
				.debug_struct("Combined")
				.field("fast", fast)
				.field("slow", &"..")
				.finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pick::{Pick, Separator};

	#[test]
	fn immediate_accepts_mixed_items() {
		let picks = Picks::immediate([
			PickItem::from(Pick::new("a")),
			PickItem::from(Separator::new()),
			PickItem::from(Pick::new("b")),
		]);
		let Picks::Immediate(items) = picks else {
			panic!("expected immediate picks");
		};
		let labels: Vec<_> = items.iter().map(PickItem::label).collect();
		assert_eq!(labels, vec![Some("a"), None, Some("b")]);
	}

	#[tokio::test]
	async fn combined_keeps_fast_and_defers_slow() {
		let picks = Picks::combined([Pick::new("fast")], async {
			Ok(vec![Pick::new("slow").into()])
		});
		assert_eq!(picks.kind(), "combined");
		let Picks::Combined { fast, slow } = picks else {
			panic!("expected combined picks");
		};
		assert_eq!(fast.len(), 1);
		let slow = slow.await.unwrap();
		assert_eq!(slow[0].label(), Some("slow"));
	}
}

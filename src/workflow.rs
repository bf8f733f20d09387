use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use quickpick::{
	AcceptEvent, ButtonTriggerEvent, Cycle, Dispatch, Pick, PickProvider, PickerOptions,
	PickerSession, PickerSurface, TriggerAction,
};
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::cli::{OutputFormat, SurfaceEvent, format_event};
use crate::demo::{Command, ConsoleSurface, DemoProvider};
use crate::settings::ResolvedConfig;

/// Runs a picker session fed by input lines and prints every surface event.
pub(crate) struct DemoWorkflow {
	config: ResolvedConfig,
}

impl DemoWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Read commands until the input ends or the picker is hidden, then wait
	/// for outstanding cycles and flush the remaining events.
	pub(crate) async fn run<R, W>(self, input: R, output: &mut W) -> Result<()>
	where
		R: AsyncBufRead + Unpin,
		W: Write,
	{
		let format = self.config.output;
		let (tx, mut rx) = mpsc::unbounded_channel();
		let mut run = DemoRun::open(self.config, tx)?;

		let mut lines = input.lines();
		while !run.surface.is_hidden() {
			tokio::select! {
				biased;
				Some(event) = rx.recv() => write_event(output, &event, format)?,
				line = lines.next_line() => {
					let Some(line) = line? else {
						break;
					};
					run.handle(Command::parse(&line)).await?;
				}
			}
		}

		run.finish().await?;
		drain(&mut rx, output, format)
	}
}

/// State of one demo session.
struct DemoRun {
	session: PickerSession,
	surface: Arc<ConsoleSurface>,
	cycles: Vec<Cycle>,
	events: UnboundedSender<SurfaceEvent>,
}

impl DemoRun {
	fn open(config: ResolvedConfig, events: UnboundedSender<SurfaceEvent>) -> Result<Self> {
		let surface = ConsoleSurface::new(events.clone());
		let provider = DemoProvider::new(config.words, config.slow_delay, events.clone());

		let mut options = PickerOptions::default()
			.with_prefix(config.prefix)
			.accept_in_background(config.accept_in_background);
		if let Some(label) = config.no_results {
			options = options.with_no_results_pick(Pick::new(label));
		}

		let (session, first) = PickerSession::open(
			Arc::clone(&surface) as Arc<dyn PickerSurface>,
			provider as Arc<dyn PickProvider>,
			options,
		)?;

		Ok(Self {
			session,
			surface,
			cycles: vec![first],
			events,
		})
	}

	async fn handle(&mut self, command: Command) -> Result<()> {
		match command {
			Command::Query(query) => {
				self.surface.set_value(&query);
				self.cycles.push(self.session.on_value_changed()?);
			}
			Command::Accept {
				index,
				in_background,
			} => {
				if self.surface.select(index).is_none() {
					tracing::warn!(index, "no pick to accept at this index");
					return Ok(());
				}
				let in_background = in_background && self.surface.accepts_in_background();
				self.session.accept(AcceptEvent { in_background });
			}
			Command::Button { index, button } => {
				let Some(pick) = self.surface.pick_at(index) else {
					tracing::warn!(index, "no pick at this index");
					return Ok(());
				};
				let Some(clicked) = pick.buttons().get(button).cloned() else {
					tracing::warn!(index, button, "pick has no such button");
					return Ok(());
				};
				let label = pick.label().to_owned();
				let dispatch = self
					.session
					.trigger_button(ButtonTriggerEvent::new(pick, clicked))
					.await?;
				self.record_dispatch(label, dispatch);
			}
			Command::Invalid(line) => {
				tracing::warn!(line = %line, "ignoring malformed command");
			}
		}
		Ok(())
	}

	fn record_dispatch(&mut self, label: String, dispatch: Dispatch) {
		let action = match dispatch {
			Dispatch::Ignored | Dispatch::Dropped => return,
			Dispatch::Kept => TriggerAction::NoAction,
			Dispatch::Closed => TriggerAction::ClosePicker,
			Dispatch::Refreshed(cycle) => {
				self.cycles.push(cycle);
				TriggerAction::RefreshPicker
			}
		};
		let _ = self.events.send(SurfaceEvent::Triggered { label, action });
	}

	/// Let every cycle settle, then end the session. A hidden picker ends the
	/// session first so nothing repaints after it closed.
	async fn finish(self) -> Result<()> {
		if self.surface.is_hidden() {
			self.session.dispose();
		}
		for cycle in self.cycles {
			cycle.join().await?;
		}
		self.session.dispose();
		Ok(())
	}
}

fn write_event<W: Write>(output: &mut W, event: &SurfaceEvent, format: OutputFormat) -> Result<()> {
	writeln!(output, "{}", format_event(event, format)?)?;
	Ok(())
}

fn drain<W: Write>(
	rx: &mut UnboundedReceiver<SurfaceEvent>,
	output: &mut W,
	format: OutputFormat,
) -> Result<()> {
	while let Ok(event) = rx.try_recv() {
		write_event(output, &event, format)?;
	}
	output.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	fn config(output: OutputFormat) -> ResolvedConfig {
		ResolvedConfig {
			prefix: String::new(),
			accept_in_background: false,
			no_results: None,
			output,
			slow_delay: Duration::from_millis(50),
			words: vec!["alpha".into(), "alphabet".into(), "bravo".into(), "mali".into()],
		}
	}

	async fn run_lines(config: ResolvedConfig, input: &str) -> Vec<String> {
		let mut output = Vec::new();
		DemoWorkflow::from_config(config)
			.run(input.as_bytes(), &mut output)
			.await
			.expect("demo run");
		String::from_utf8(output)
			.expect("utf8")
			.lines()
			.map(str::to_owned)
			.collect()
	}

	#[tokio::test(start_paused = true)]
	async fn slow_matches_within_window_paint_once() {
		let lines = run_lines(config(OutputFormat::Plain), "al\n").await;

		assert_eq!(
			lines,
			vec![
				"idle",
				"items: alpha | alphabet | bravo | mali",
				"idle",
				"busy",
				"items: alpha | alphabet | --- | mali",
				"idle",
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn late_slow_matches_paint_after_fast() {
		let mut config = config(OutputFormat::Plain);
		config.slow_delay = Duration::from_millis(400);

		let lines = run_lines(config, "al\n").await;

		assert_eq!(
			&lines[2..],
			&[
				"idle",
				"busy",
				"items: alpha | alphabet",
				"items: alpha | alphabet | --- | mali",
				"idle",
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn accept_hides_and_stops_reading() {
		let lines = run_lines(config(OutputFormat::Plain), ":accept 1\nbravo\n").await;

		assert_eq!(
			lines,
			vec![
				"idle",
				"items: alpha | alphabet | bravo | mali",
				"hidden",
				"accepted: alphabet",
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn remove_button_refreshes_the_list() {
		let lines = run_lines(config(OutputFormat::Plain), ":button 1 0\n").await;

		assert_eq!(
			lines,
			vec![
				"idle",
				"items: alpha | alphabet | bravo | mali",
				"idle",
				"items: alpha | bravo | mali",
				"triggered: alphabet -> refresh",
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn no_results_label_replaces_empty_list() {
		let mut config = config(OutputFormat::Plain);
		config.no_results = Some("nothing found".into());

		let lines = run_lines(config, "zzz\n").await;

		assert_eq!(
			&lines[2..],
			&["idle", "busy", "items: nothing found", "idle"]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn json_output_emits_one_object_per_line() {
		let lines = run_lines(config(OutputFormat::Json), "").await;

		assert_eq!(lines.len(), 2);
		let items: serde_json::Value = serde_json::from_str(&lines[1]).expect("json");
		assert_eq!(items["event"], "items");
		assert_eq!(items["labels"].as_array().map(Vec::len), Some(4));
	}
}

use anyhow::Result;
use quickpick::TriggerAction;
use serde::Serialize;

use super::OutputFormat;

/// Something the demo surface showed or did, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum SurfaceEvent {
	Items { labels: Vec<String> },
	Active { index: usize },
	Busy { busy: bool },
	Hidden,
	Accepted { label: String, in_background: bool },
	Triggered { label: String, action: TriggerAction },
}

/// Render one event as a single output line.
pub(crate) fn format_event(event: &SurfaceEvent, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(format_plain(event)),
		OutputFormat::Json => Ok(serde_json::to_string(event)?),
	}
}

fn format_plain(event: &SurfaceEvent) -> String {
	match event {
		SurfaceEvent::Items { labels } if labels.is_empty() => "items: (empty)".to_owned(),
		SurfaceEvent::Items { labels } => format!("items: {}", labels.join(" | ")),
		SurfaceEvent::Active { index } => format!("active: {index}"),
		SurfaceEvent::Busy { busy: true } => "busy".to_owned(),
		SurfaceEvent::Busy { busy: false } => "idle".to_owned(),
		SurfaceEvent::Hidden => "hidden".to_owned(),
		SurfaceEvent::Accepted {
			label,
			in_background,
		} => {
			let suffix = if *in_background { " (background)" } else { "" };
			format!("accepted: {label}{suffix}")
		}
		SurfaceEvent::Triggered { label, action } => {
			let action = match action {
				TriggerAction::NoAction => "no action",
				TriggerAction::ClosePicker => "close",
				TriggerAction::RefreshPicker => "refresh",
			};
			format!("triggered: {label} -> {action}")
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn items(labels: &[&str]) -> SurfaceEvent {
		SurfaceEvent::Items {
			labels: labels.iter().map(|label| (*label).to_owned()).collect(),
		}
	}

	#[test]
	fn plain_lines_are_compact() {
		let plain = |event: &SurfaceEvent| format_event(event, OutputFormat::Plain).unwrap();

		insta::assert_snapshot!(plain(&items(&["alpha", "---", "beta"])), @"items: alpha | --- | beta");
		insta::assert_snapshot!(plain(&items(&[])), @"items: (empty)");
		insta::assert_snapshot!(plain(&SurfaceEvent::Busy { busy: true }), @"busy");
		insta::assert_snapshot!(
			plain(&SurfaceEvent::Accepted {
				label: "alpha".into(),
				in_background: true,
			}),
			@"accepted: alpha (background)"
		);
		insta::assert_snapshot!(
			plain(&SurfaceEvent::Triggered {
				label: "beta".into(),
				action: TriggerAction::RefreshPicker,
			}),
			@"triggered: beta -> refresh"
		);
	}

	#[test]
	fn json_lines_are_tagged() {
		let json = format_event(&items(&["alpha"]), OutputFormat::Json).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["event"], "items");
		assert_eq!(value["labels"][0], "alpha");

		let json = format_event(
			&SurfaceEvent::Triggered {
				label: "beta".into(),
				action: TriggerAction::ClosePicker,
			},
			OutputFormat::Json,
		)
		.expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["event"], "triggered");
		assert_eq!(value["action"], "close_picker");
	}
}

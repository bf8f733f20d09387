/// One line of demo input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Replace the query text.
	Query(String),
	/// Accept the item at `index`.
	Accept { index: usize, in_background: bool },
	/// Click button `button` of the item at `index`.
	Button { index: usize, button: usize },
	/// A `:` command that could not be parsed.
	Invalid(String),
}

impl Command {
	pub(crate) fn parse(line: &str) -> Self {
		let Some(rest) = line.strip_prefix(':') else {
			return Self::Query(line.to_owned());
		};

		let mut parts = rest.split_whitespace();
		let name = parts.next().unwrap_or_default();
		let mut numbers = parts.map(str::parse::<usize>);
		let command = match name {
			"accept" | "accept-bg" => match numbers.next() {
				Some(Ok(index)) => Self::Accept {
					index,
					in_background: name == "accept-bg",
				},
				_ => Self::Invalid(line.to_owned()),
			},
			"button" => match (numbers.next(), numbers.next()) {
				(Some(Ok(index)), None) => Self::Button { index, button: 0 },
				(Some(Ok(index)), Some(Ok(button))) => Self::Button { index, button },
				_ => Self::Invalid(line.to_owned()),
			},
			_ => Self::Invalid(line.to_owned()),
		};

		if numbers.next().is_some() {
			return Self::Invalid(line.to_owned());
		}
		command
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_lines_are_queries() {
		assert_eq!(Command::parse("alpha"), Command::Query("alpha".into()));
		assert_eq!(Command::parse(""), Command::Query(String::new()));
	}

	#[test]
	fn colon_commands_parse_indices() {
		assert_eq!(
			Command::parse(":accept 2"),
			Command::Accept {
				index: 2,
				in_background: false
			}
		);
		assert_eq!(
			Command::parse(":accept-bg 0"),
			Command::Accept {
				index: 0,
				in_background: true
			}
		);
		assert_eq!(
			Command::parse(":button 3"),
			Command::Button {
				index: 3,
				button: 0
			}
		);
		assert_eq!(
			Command::parse(":button 3 1"),
			Command::Button {
				index: 3,
				button: 1
			}
		);
	}

	#[test]
	fn malformed_commands_are_invalid() {
		for line in [":accept", ":accept x", ":button", ":button 1 2 3", ":frobnicate 1"] {
			assert_eq!(Command::parse(line), Command::Invalid(line.into()), "{line}");
		}
	}
}

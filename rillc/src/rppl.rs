use std::io::Write;

use rill_core::parser::prelude::parse_module;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			"exit" => return Ok(()),
			_ => {
				match parse_module(&input) {
					Ok(parsed) => {
						println!("{}", parsed.program);
					},
					Err(err) => {
						let (message, messages) = err.details();

						println!("Parse error: {}.\n\t{}", message, messages.join(";\n\t"))
					}
				}
			}
		}
	}
}

use std::io::Write;
use std::path::PathBuf;

use rill_core::environment::prelude::Environment;
use rill_core::eval::prelude::interpret_src;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let path = PathBuf::from("<repl>");

	// Bindings survive between lines.
	let mut env = Environment::with_globals();

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
				match interpret_src(path.clone(), &input, &mut env) {
					Ok(value) => println!("{value}"),
					Err(err) => {
						let buf_writer = crate::cli::stderr_buffer_writer();
						let mut buf = buf_writer.buffer();

						err.pretty(&mut buf);
						buf_writer
							.print(&buf)
							.expect("Writing error to stderr");
					}
				}
			}
		}
	}
}

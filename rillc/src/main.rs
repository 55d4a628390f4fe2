mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_evaluated, print_running};
use rill_core::{environment::prelude::Environment, eval::prelude::interpret_from_stream};

#[derive(Parser)]
enum Command {
    /// Evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Do not print the resulting value
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl,
}

fn main() {
    match Command::parse() {
        Command::Run { path, no_output } => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_running(&path.to_string_lossy());
            let start = std::time::Instant::now();

            let mut env = Environment::with_globals();

            match interpret_from_stream(path, &mut env) {
                Ok(value) => {
                    print_evaluated(std::time::Instant::now() - start);

                    if !no_output {
                        println!("{value}");
                    }
                }
                Err(err) => {
                    err.pretty(&mut buf);
                    buf_writer.print(&buf).expect("Writing error to stderr");

                    std::process::exit(1);
                }
            }
        }
        Command::Repl => {
            let _ = repl::start();
        }
        Command::Rlpl => {
            let _ = rlpl::start();
        }
        Command::Rppl => {
            let _ = rppl::start();
        }
    }
}

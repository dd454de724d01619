//! Keyboard Session
//!
//! This example drives a calculator from key names typed on stdin.
//!
//! Key concepts:
//! - Keys map to tokens; unmapped keys are ignored
//! - A `DisplaySink` receives the display after every processed key
//! - Phase transitions are kept in a bounded history
//!
//! Each input line holds whitespace-separated key names, for example:
//!
//! ```text
//! 1 2 + 5 Enter
//! 5 / 0 Enter 3
//! ```
//!
//! Run with: RUST_LOG=keycalc=trace cargo run --example keyboard_session

use keycalc::core::State;
use keycalc::machine::{Calculator, DisplaySink, Session};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

/// Prints every frame the way a single-line display would show it.
struct Terminal;

impl DisplaySink for Terminal {
    fn show(&mut self, text: &str) {
        println!("[{text:>24}]");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== Keyboard Session ===\n");
    let mut session = Session::new(Calculator::new(), Terminal);

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            session.press_key(key);
        }
    }

    println!("\nPhase path:");
    for phase in session.history().get_path() {
        println!("  {}", phase.name());
    }
    if let Some(elapsed) = session.history().duration() {
        println!("Session length: {elapsed:?}");
    }

    println!("\n=== Session Complete ===");
    Ok(())
}

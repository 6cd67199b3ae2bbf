//! Date picker CLI application.
//!
//! # Usage
//! ```ignore
//! calnav                               // Current month
//! calnav 6 2025                        // June 2025
//! calnav -s -o 6 2025                  // Sunday first, outside days shown
//! calnav --focus 2025-06-30 -k right   // Move focus into July
//! ```

use calnav::args::Args;
use calnav::error::ConfigError;
use calnav::formatter::{format_event, format_selection};
use calnav::picker::DatePicker;
use calnav::types::PickerContext;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("calnav: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "calnav=debug",
        _ => "calnav=trace",
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new(fallback),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let ctx = PickerContext::new(args)?;
    let commands = args.commands()?;
    let focus = args.focus_date()?;
    let selected = args.selected_dates()?;

    let mut picker = DatePicker::new(ctx).with_selected(&selected);
    let mut events = Vec::new();

    // Key presses need somewhere to start from
    if let Some(date) = focus {
        events.extend(picker.focus(date));
    } else if !commands.is_empty() {
        events.extend(picker.open());
    }

    for command in commands {
        events.extend(picker.dispatch(command));
    }

    for line in picker.render() {
        println!("{}", line);
    }

    if args.events {
        println!();
        for event in &events {
            println!("{}", format_event(event));
        }
    }
    if args.events || !picker.selection().is_empty() {
        println!("{}", format_selection(picker.selection()));
    }

    Ok(())
}

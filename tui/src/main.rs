mod app;
mod args;
mod event;
mod tui;
mod ui;

use crate::{app::App, args::Cli, tui::Tui};
use color_eyre::Result;
use crossterm::tty::IsTty;
use std::io::stdout;

/// Run the program without the TUI interface.
fn run_no_tui(app: &App, rule_table: bool) -> Result<()> {
    app.write_evolution()?;

    if rule_table {
        app.print_rule_table();
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Cli::parse_and_validate();

    let app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => Cli::exit_with_error(e),
    };

    if args.tui && stdout().is_tty() {
        let mut tui = Tui::new(app)?;
        tui.run()?;
    } else {
        if args.tui {
            log::warn!("The standard output is not a terminal; printing the evolution instead.");
        }
        run_no_tui(&app, args.rule_table)?;
    }

    Ok(())
}

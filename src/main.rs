//! Arcade hub shell (default binary).
//!
//! Reads one command per line from stdin. Persisted preferences live in the
//! JSON file named by `ARCADE_STATE_PATH`.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use tui_arcade::config::HubConfig;
use tui_arcade::prefs::FileStore;
use tui_arcade::router::RouteTable;
use tui_arcade::shell::{Outcome, Shell};

fn main() -> Result<()> {
    let config = HubConfig::from_env();
    eprintln!("[Hub] Starting: {}", config.describe());

    let routes = RouteTable::new(&config.base_url);
    let store = FileStore::new(&config.state_path);
    let mut shell = Shell::new(routes, store, &config.color_scheme)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", shell.banner())?;

    let mut line = String::new();
    loop {
        write!(stdout, "{}", shell.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        match shell.handle(&line) {
            Outcome::Continue(text) => {
                if !text.is_empty() {
                    writeln!(stdout, "{}", text)?;
                }
            }
            Outcome::Quit => break,
        }
    }

    eprintln!("[Hub] Theme on exit: {}", shell.theme());
    Ok(())
}

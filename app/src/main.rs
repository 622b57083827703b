use std::process::ExitCode;

use anyhow::Context as _;
use lueften::advisor::{self, Outcome};
use lueften::settings::{Settings, parse_overrides};

const USAGE: &str = "\
Usage: lueften [key=value ...]

  interior.temperature=<°C>   -20 to 60
  interior.humidity=<%RH>     above 0, below 100
  exterior.temperature=<°C>
  exterior.humidity=<%RH>
  language=<de|en>            remembered for later runs
  output=<text|json>

Values can also come from lueften.toml or LUEFTEN_* environment variables,
e.g. LUEFTEN_READINGS__INTERIOR__TEMPERATURE=21.5";

fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let overrides = parse_overrides(args)?;
    let settings = Settings::new(&overrides).context("Error reading configuration")?;

    settings.monitoring.init().context("Error initializing monitoring")?;

    let store = settings.preferences.new_store();
    let outcome = advisor::run(
        &settings,
        store,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    if outcome == Outcome::Incomplete {
        eprintln!("{USAGE}");
    }

    Ok(ExitCode::from(outcome.exit_code()))
}

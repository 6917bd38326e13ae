use crate::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::logging::init_logging;
use crate::report::{render_json, render_plain};
use anyhow::Result;
use is_terminal::IsTerminal;
use linkgap_engine::{FileSource, analyze};
use std::io::Write;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    tracing::debug!(?config.analysis, log_file = %cli.log_file.display(), "starting analysis");

    // The whole log is analyzed before anything is printed, so a read
    // failure never leaves a partial report on stdout
    let report = analyze(FileSource::new(&cli.log_file), &config.analysis)?;

    let output = match cli.format {
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            render_plain(&report, &config.analysis.success_marker, color)
        }
        OutputFormat::Json => {
            let mut json = render_json(&report)?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

mod app;
mod calendar;
mod config;
mod help;
mod jumpto;
mod locale;
mod logging;
mod nav;
mod print;
mod schedule;
mod status;
mod theme;
mod window;
use crate::app::App;
use crate::calendar::MonthPager;
use crate::config::{Config, YMD_FMT};
use crate::locale::PtBr;
use crate::schedule::Roster;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use std::num::NonZeroU16;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    config: Option<PathBuf>,
    anchor: Option<Date>,
    months: Option<NonZeroU16>,
    log_file: Option<PathBuf>,
    print: bool,
    date: Option<Date>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('p') | Arg::Long("print") => opts.print = true,
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("anchor") => {
                    opts.anchor = Some(parser.value()?.parse_with(parse_ymd)?);
                }
                Arg::Long("months") => opts.months = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if opts.date.is_none() => {
                    opts.date = Some(value.parse_with(parse_ymd)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => opts.run(),
            Command::Help => {
                println!("Usage: escala [<options>] [YYYY-MM-DD]");
                println!();
                println!("Scrollable terminal calendar of an alternating work/off roster");
                println!();
                println!("Options:");
                println!("  -c, --config <FILE>     Read configuration from the given file");
                println!("      --anchor <DATE>     A date known to be a workday (YYYY-MM-DD)");
                println!("      --months <N>        Number of months to load at a time");
                println!("      --log-file <FILE>   Write log messages to the given file");
                println!("  -p, --print             Print today's status and month, then exit");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl RunOptions {
    fn run(self) -> anyhow::Result<()> {
        let _logger = logging::init(self.log_file.as_deref(), !self.print)
            .context("failed to start logger")?;
        let mut config =
            Config::load(self.config.as_deref()).context("failed to load configuration")?;
        if let Some(anchor) = self.anchor {
            config.anchor = anchor;
        }
        if let Some(months) = self.months {
            config.window_size = months;
        }
        log::debug!("Using configuration {config:?}");
        let now = OffsetDateTime::now_local().context("failed to determine local date")?;
        let roster = Roster::new(config.anchor);
        if self.print {
            print::write_report(
                &mut io::stdout().lock(),
                roster,
                now,
                config.name.as_deref(),
                PtBr,
            )
            .context("failed to write to stdout")?;
            return Ok(());
        }
        let mut pager = MonthPager::new(now.date(), roster, config.window_size);
        if let Some(date) = self.date {
            pager = pager.start_date(date);
        }
        with_terminal(|mut terminal| {
            terminal.hide_cursor().context("failed to hide cursor")?;
            App::new(pager, config.name).run(&mut terminal)?;
            Ok(())
        })
    }
}

fn parse_ymd(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YMD_FMT)
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(RunOptions::default()));
    }

    #[test]
    fn test_all_options() {
        let cmd = parse(&[
            "-p",
            "--config",
            "escala.toml",
            "--anchor",
            "2024-01-01",
            "--months=12",
            "--log-file",
            "escala.log",
            "2030-07-04",
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Command::Run(RunOptions {
                config: Some(PathBuf::from("escala.toml")),
                anchor: Some(date!(2024 - 01 - 01)),
                months: NonZeroU16::new(12),
                log_file: Some(PathBuf::from("escala.log")),
                print: true,
                date: Some(date!(2030 - 07 - 04)),
            })
        );
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["2025-01-01", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["--months", "0"]).is_err());
        assert!(parse(&["--anchor", "17/05/2025"]).is_err());
        assert!(parse(&["2025-02-30"]).is_err());
        assert!(parse(&["2025-01-01", "2025-01-02"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_toast demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --config <DIR>    Directory holding settings.toml
  --limit <N>       Maximum number of toasts shown at once
  -v, --verbose     Log engine activity (repeat for more detail)
  -h, --help        Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<(Flags, u8), pico_args::Error> {
    let mut verbosity = 0u8;
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config")?,
        limit: args.opt_value_from_str("--limit")?,
    };
    Ok((flags, verbosity))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, verbosity) = match parse_flags(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_module("iced_toast", log_level)
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    app::run(flags)
}

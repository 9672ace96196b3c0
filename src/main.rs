// SPDX-License-Identifier: MPL-2.0
use toast_shelf::app::{self, paths, Flags};
use toast_shelf::ui::theming::ThemeMode;

const HELP: &str = "\
Toast Shelf

USAGE:
  toast_shelf [OPTIONS]

OPTIONS:
  -h, --help               Print help information
  --config-dir <PATH>      Directory holding settings.toml
  --theme <MODE>           light, dark or system
  --log-level <LEVEL>      error, warn, info, debug or trace (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level = args
        .opt_value_from_str::<_, log::LevelFilter>("--log-level")
        .unwrap_or_else(|err| {
            eprintln!("{err}, falling back to info");
            None
        })
        .unwrap_or(log::LevelFilter::Info);

    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log_level)
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("{err}");
            None
        });

    let theme = args
        .opt_value_from_str::<_, ThemeMode>("--theme")
        .unwrap_or_else(|err| {
            log::warn!("{err}");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(config_dir.clone());

    app::run(Flags { config_dir, theme })
}

// SPDX-License-Identifier: MPL-2.0
use contact_page::app::{self, Flags};
use contact_page::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Contact Us page

USAGE:
  contact_page [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
                       (overrides CONTACT_PAGE_CONFIG_DIR)
  --theme <MODE>       light, dark or system (this run only)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contact_page=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let theme: Option<ThemeMode> = match args.opt_value_from_str("--theme") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(Flags { config_dir, theme })
}

//! Notification daemon.
//!
//! Listens for notification datagrams and shows them as a popup bar.

use std::path::PathBuf;

const HELP: &str = "\
twmnd - notification popup daemon

USAGE:
  twmnd [OPTIONS]

OPTIONS:
  --config <PATH>   Config file (default: $TWMND_CONFIG or <config dir>/twmn/twmnd.toml)
  --print-config    Print the resolved configuration and exit
  --list-settings   List every setting key with its value and description
  -h, --help        Print this help
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let print_config = args.contains("--print-config");
    let list_settings = args.contains("--list-settings");
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {rest:?}");
    }

    twmnd_lib::init_tracing();
    let (settings, config) = twmnd_lib::init_foundation(config_path)?;

    if list_settings {
        for setting in settings.all_settings() {
            let origin = if setting.is_default { "default" } else { "set" };
            println!(
                "{} = {:?}  # {} ({origin})",
                setting.key, setting.value, setting.description
            );
        }
        return Ok(());
    }

    if print_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    tracing::info!("Starting twmnd");
    twmnd_lib::run(settings, config).await
}

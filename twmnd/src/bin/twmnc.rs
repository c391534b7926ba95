//! Command-line client: sends one notification to a running twmnd.

use std::path::PathBuf;

use twmn_protocol::Fields;

const HELP: &str = "\
twmnc - send a notification to twmnd

USAGE:
  twmnc [OPTIONS] [CONTENT]

OPTIONS:
  -t, --title <TEXT>        Title (shown bold)
  -c, --content <TEXT>      Content
  -i, --icon <PATH|NAME>    Icon file, or a name from the [icons] section
      --field <NAME=VALUE>  Extra field, may be repeated
      --host <HOST>         Daemon host (default: main/host)
      --port <PORT>         Daemon port (default: main/port)
      --config <PATH>       Read host and port defaults from this file
  -h, --help                Print this help
";

struct Args {
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
    fields: Fields,
}

fn parse_args() -> Result<Option<Args>, anyhow::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let host: Option<String> = args.opt_value_from_str("--host")?;
    let port: Option<u16> = args.opt_value_from_str("--port")?;
    let config: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let title: Option<String> = args.opt_value_from_str(["-t", "--title"])?;
    let mut content: Option<String> = args.opt_value_from_str(["-c", "--content"])?;
    let icon: Option<String> = args.opt_value_from_str(["-i", "--icon"])?;
    let extra: Vec<String> = args.values_from_str("--field")?;

    let rest = args.finish();
    if content.is_none() && !rest.is_empty() {
        let words: Vec<String> = rest
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        content = Some(words.join(" "));
    } else if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {rest:?}");
    }

    let mut fields = Fields::new();
    for pair in &extra {
        let Some((name, value)) = pair.split_once('=') else {
            anyhow::bail!("--field expects NAME=VALUE, got {pair:?}");
        };
        fields.insert(name.trim(), value);
    }
    if let Some(title) = title {
        fields.insert("title", title);
    }
    if let Some(content) = content {
        fields.insert("content", content);
    }
    if let Some(icon) = icon {
        fields.insert("icon", icon);
    }

    Ok(Some(Args {
        host,
        port,
        config,
        fields,
    }))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    twmnd_lib::init_tracing();
    let (_, config) = twmnd_lib::init_foundation(args.config)?;
    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);

    twmnd_lib::client::send(&host, port, &args.fields).await?;
    Ok(())
}

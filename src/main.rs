// SPDX-License-Identifier: MPL-2.0
use iced_pano::app::{self, paths, Flags};
use iced_pano::{config, logging};

const HELP: &str = "\
IcedPano - panorama gallery

USAGE:
  iced_pano [OPTIONS] [IMAGE_REF]

OPTIONS:
  --lang <ID>          UI language (en-US, fr, zh-CN)
  --config-dir <DIR>   Directory holding settings.toml
  --asset-root <DIR>   Directory /photo/... references resolve against
  -h, --help           Print this help

ARGS:
  IMAGE_REF            Picture to open at startup, e.g. /photo/earth.jpg
";

/// Parses the command line; `None` means help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        asset_root: args.opt_value_from_str("--asset-root")?,
        initial_image: args.opt_free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();

    if let Err(error) = logging::init(config.log_level()) {
        eprintln!("{error}");
    }
    if let Some(key) = config_warning {
        tracing::warn!(warning = %key, "settings file could not be read, using defaults");
    }

    app::run(flags, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn parses_all_options() {
        let flags = parse(&[
            "--lang",
            "fr",
            "--config-dir",
            "/tmp/cfg",
            "--asset-root",
            "/srv/public",
            "/photo/earth.jpg",
        ])
        .expect("valid args")
        .expect("not help");

        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
        assert_eq!(flags.asset_root.as_deref(), Some("/srv/public"));
        assert_eq!(flags.initial_image.as_deref(), Some("/photo/earth.jpg"));
    }

    #[test]
    fn no_arguments_gives_empty_flags() {
        let flags = parse(&[]).expect("valid args").expect("not help");
        assert!(flags.lang.is_none());
        assert!(flags.initial_image.is_none());
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).expect("valid args").is_none());
        assert!(parse(&["-h", "--lang", "fr"]).expect("valid args").is_none());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(parse(&["/photo/earth.jpg", "/photo/desert.jpg"]).is_err());
    }
}

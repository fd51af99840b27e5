// SPDX-License-Identifier: MPL-2.0
use loc_lens::app::{persistence, Flags, ScreenViewModel};
use loc_lens::config::{self, paths};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: loc_lens [OPTIONS] [KEY...]

Options:
  --lang TAG          Culture to start with (e.g. de-DE)
  --context NAME      Resource bundle to open (e.g. LocLens.Resources.Login.Strings)
  --resources DIR     Load bundles from DIR instead of the embedded resources
  --config-dir DIR    Directory holding settings.toml
  --switch-to TAG     Switch culture after the first render and render again
  --remember          Save the final culture and context to settings.toml
  -h, --help          Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        context: args.opt_value_from_str("--context")?,
        resources_dir: args.opt_value_from_str("--resources")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        switch_to: args.opt_value_from_str("--switch-to")?,
        remember: args.contains("--remember"),
        keys: Vec::new(),
    };
    flags.keys = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();
    if flags.keys.is_empty() {
        flags.keys.push("Title".to_string());
    }
    Ok(Some(flags))
}

fn print_screen(view_model: &ScreenViewModel, keys: &[String]) {
    let loc = view_model.loc();
    println!("[{} @ {}]", loc.context_name(), loc.culture());
    for (key, value) in view_model.render(keys) {
        println!("  {key} = {value}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load config, using defaults");
        config::Config::default()
    });

    let mut view_model = match ScreenViewModel::from_settings(&flags, &config) {
        Ok(view_model) => view_model,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    print_screen(&view_model, &flags.keys);

    if let Some(tag) = &flags.switch_to {
        if let Err(err) = view_model.switch_language(tag) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        if view_model.take_refresh() {
            print_screen(&view_model, &flags.keys);
        }
    }

    if flags.remember {
        persistence::persist_selection(&view_model);
    }

    ExitCode::SUCCESS
}

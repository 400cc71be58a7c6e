use std::sync::Arc;

use clap::Parser;
use log::{debug, warn};

use trackset::instructions::{ensure_instructions, prepare_root};
use trackset::{Catalog, Defaults, Selector};

mod cli;
mod commands;
#[cfg(feature = "playback")]
mod playback;
mod settings;

use cli::{Cli, Command};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (settings, config_problem) = settings::load_settings(cli.config.as_deref());
    settings::init_logging(settings::log_filter(settings.log.level, cli.verbose));
    if let Some(problem) = config_problem {
        // Config is optional; a broken one should not stop the tool.
        warn!("{problem}; using defaults");
    }

    let catalog_settings = &settings.catalog;
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| catalog_settings.root_or_default());

    if prepare_root(&root, catalog_settings.create_root)? {
        debug!("music root {} was created", root.display());
    }
    if catalog_settings.write_instructions {
        // The instructions are a convenience; a read-only root is still usable.
        if let Err(e) = ensure_instructions(&root, catalog_settings) {
            warn!("could not write instructions: {e}");
        }
    }

    let defaults = match cli.defaults.as_ref().or(catalog_settings.defaults_dir.as_ref()) {
        Some(dir) => Defaults::load_dir(dir, catalog_settings)?,
        None => Defaults::default(),
    };

    let catalog = Catalog::load(&root, Arc::new(defaults), catalog_settings)?;
    let mut selector = Selector::from_seed_option(cli.seed.or(settings.selection.seed));

    let mut stdout = std::io::stdout().lock();
    match cli.command.unwrap_or(Command::Pick { count: 1 }) {
        Command::List => commands::list(&mut stdout, &catalog)?,
        Command::Pick { count } => commands::pick(&mut stdout, &catalog, &mut selector, count)?,
        #[cfg(feature = "playback")]
        Command::Play { loops } => {
            if let Some(set) = selector.pick(&catalog) {
                playback::play_round(set, loops)?;
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use docfolio::{Config, FsStore};
use log::{LevelFilter, info, warn};
use std::io::Write;

/// Sets up logging for the selected level.
///
/// `RUST_LOG`, when set, overrides the level chosen on the command line.
fn setup_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    setup_logging(config.log_level());
    config.validate().context("Invalid configuration")?;

    let store = FsStore::new(&config.docs);

    if let Some(slug) = &config.render {
        let html = docfolio::pages::doc::render_fragment(&store, slug)
            .with_context(|| format!("Failed to render document: {}", slug))?;
        print!("{}", html);
        return Ok(());
    }

    let site_title = config
        .site_title()
        .context("Failed to determine site title")?;

    info!(
        "Generating {} from {}",
        config.output.display(),
        config.docs.display()
    );

    let summary = docfolio::generate_site(&store, &config.output, &site_title)
        .context("Failed to generate site")?;

    println!(
        "Generated {} document pages in {}",
        summary.document_count(),
        config.output.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&summary.index_path)
    {
        warn!(
            "Failed to open {} in browser: {}",
            summary.index_path.display(),
            e
        );
    }

    Ok(())
}

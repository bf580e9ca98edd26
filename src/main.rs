use box_office_guide::app::demo::{report_failure, run_demo, wait_for_enter, DemoOptions};
use box_office_guide::utils::{logger, validation::Validate};
use box_office_guide::{BuiltinCatalog, CatalogConfig, CliConfig, GuideError, MovieRegistry};
use clap::Parser;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting box-office-guide");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let mut registry = match load_registry(&config) {
        Ok(registry) => registry,
        Err(e) => {
            exit_with(&e);
        }
    };
    tracing::info!("📚 Guide holds {} movies", registry.len());

    let options = DemoOptions {
        find_title: config.find.clone(),
        remove_title: config.remove.clone(),
        format: config.format,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_demo(&mut registry, &options, &mut out) {
        out.flush()?;
        exit_with(&e);
    }

    if !config.no_wait {
        wait_for_enter(&mut io::stdin().lock(), &mut out)?;
    }

    Ok(())
}

fn load_registry(config: &CliConfig) -> box_office_guide::Result<MovieRegistry> {
    match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            let catalog = CatalogConfig::from_file(path)?;
            MovieRegistry::from_source(&catalog)
        }
        None => MovieRegistry::from_source(&BuiltinCatalog),
    }
}

fn exit_with(e: &GuideError) -> ! {
    let code = report_failure(e, &mut io::stderr());
    std::process::exit(code);
}

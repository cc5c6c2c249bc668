use anyhow::Context;
use clap::Parser;

use esmapping_generator::cli::Cli;
use esmapping_generator::config::AppConfig;
use esmapping_generator::es::template::JinjaTemplateBuilder;
use esmapping_generator::renderer;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the rendered template
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("esmapping_generator=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration (CLI flags override env vars, which override TOML)
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config.mapping);
    tracing::info!(
        "Rendering {} for engine version {}",
        cli.mapping,
        config.mapping.es_version
    );

    let rendered =
        renderer::mapping_as_string(JinjaTemplateBuilder::new(), &cli.mapping, &config.mapping)
            .with_context(|| format!("Failed to render mapping {}", cli.mapping))?;
    print!("{rendered}");

    Ok(())
}

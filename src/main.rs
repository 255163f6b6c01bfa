use clap::Parser;
use compose_normalizer::adapters::output::{render_project, write_output};
use compose_normalizer::utils::logger;
use compose_normalizer::{CliConfig, ComposeFile, NormalizeError, Normalizer};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    let source = ComposeFile::new(&settings.file);
    let normalized = match Normalizer::new().run(&source) {
        Ok(normalized) => normalized,
        Err(e) => {
            tracing::error!("❌ Normalization failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e {
                NormalizeError::CollaboratorFailure { .. } => 3,
                _ => 2,
            };
            std::process::exit(exit_code);
        }
    };

    if !normalized.warnings.is_empty() {
        tracing::info!("{} unsupported feature(s) ignored", normalized.warnings.len());
    }

    let rendered = render_project(&normalized.project, settings.output_format)?;
    match &settings.output_path {
        Some(path) => {
            write_output(path, &rendered)?;
            tracing::info!("✅ Wrote {} service(s) to {}", normalized.project.len(), path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

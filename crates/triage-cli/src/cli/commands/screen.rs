use crate::cli::args::{OnErrorArg, OutputFormat, ScreenArgs};
use crate::exit_codes;
use crate::output::{default_progress_sink, print_partition};
use std::io::Read;
use std::sync::Arc;
use triage_core::catalog::Catalog;
use triage_core::config::EngineConfig;
use triage_core::engine::Engine;
use triage_core::errors::EngineError;
use triage_core::on_error::ErrorPolicy;
use triage_core::providers::oracle::gemini::GeminiOracle;
use triage_core::providers::oracle::tracing::TracingOracle;
use triage_core::providers::oracle::Oracle;
use triage_core::report::summary::partition;
use triage_core::throttle::FixedIntervalGate;

pub async fn run(args: ScreenArgs) -> anyhow::Result<i32> {
    let text = read_text(&args)?;
    let config = effective_config(&args)?;
    let catalog = Catalog::builtin();

    let Some(api_key) = args.api_key.clone() else {
        eprintln!("error: no oracle API key; set GEMINI_API_KEY or pass --api-key");
        return Ok(exit_codes::CONFIG_ERROR);
    };

    let gemini = GeminiOracle::new(
        config.provider.model.clone(),
        api_key,
        config.provider.temperature,
    );
    let oracle: Arc<dyn Oracle> = Arc::new(TracingOracle::new(Arc::new(gemini)));
    let gate = Arc::new(FixedIntervalGate::new(config.min_interval()));
    let engine = Engine::new(oracle, gate, config);

    let progress = match args.format {
        OutputFormat::Text => default_progress_sink(catalog.len()),
        OutputFormat::Json => None,
    };

    match engine.evaluate(&text, &catalog, progress, None).await {
        Ok(result) => {
            match args.format {
                OutputFormat::Text => print_partition(&partition(&result)),
                OutputFormat::Json => {
                    let payload = serde_json::json!({
                        "verdicts": result,
                        "partition": partition(&result),
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(e @ EngineError::InvalidInput(_)) => {
            eprintln!("error: {e}");
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::from(e));
            Ok(exit_codes::BATCH_FAILED)
        }
    }
}

/// Config file if present, defaults otherwise, CLI overrides on top.
fn effective_config(args: &ScreenArgs) -> anyhow::Result<EngineConfig> {
    let mut config = if args.config.exists() {
        EngineConfig::load(&args.config)?
    } else {
        EngineConfig::default()
    };
    if let Some(policy) = args.on_error {
        config.on_error = match policy {
            OnErrorArg::FailFast => ErrorPolicy::FailFast,
            OnErrorArg::SubstituteIndeterminate => ErrorPolicy::SubstituteIndeterminate,
        };
    }
    if let Some(n) = args.parallel {
        config.parallel = Some(n);
    }
    Ok(config)
}

fn read_text(args: &ScreenArgs) -> anyhow::Result<String> {
    if let Some(t) = &args.text {
        return Ok(t.clone());
    }
    let mut text = if let Some(path) = &args.file {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    // Shells and editors append a final newline; the subject text keeps
    // everything else verbatim.
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}

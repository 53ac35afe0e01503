use clap::Parser;
use sheet_gateway::api::{self, AppState};
use sheet_gateway::utils::{logger, validation::Validate};
use sheet_gateway::{
    AppsScriptEndpoint, CsvSheetSource, GatewayConfig, OpenAiModel, QueryRouter,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = GatewayConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting sheet-gateway");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let writer = AppsScriptEndpoint::new(&config.script_url);

    tracing::info!("CSV URL: {}", config.sheet_url);
    tracing::info!("Apps Script URL: {}", writer.exec_url());

    let state = Arc::new(AppState {
        sheet: CsvSheetSource::new(config.sheet_url.clone()),
        writer,
        model: OpenAiModel::new(config.openai_api_key.clone(), config.openai_base_url.clone()),
        router: QueryRouter::new(),
    });

    let app = api::build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

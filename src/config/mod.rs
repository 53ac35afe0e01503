use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bind_addr, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;

/// 所有設定啟動時一次解析;必要值缺一個就直接失敗,不開伺服器
#[derive(Debug, Clone, Parser)]
#[command(name = "sheet-gateway")]
#[command(about = "HTTP gateway exposing a spreadsheet-backed dataset")]
pub struct GatewayConfig {
    /// CSV export URL of the backing sheet
    #[arg(long, env = "SHEET_CSV_URL")]
    pub sheet_url: String,

    /// Apps Script write endpoint (normalized to end with /exec)
    #[arg(long, env = "APPS_SCRIPT_URL")]
    pub script_url: String,

    /// Credential for the chat-completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind_addr: String,

    /// Directory holding the static entry page
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sheet_url", &self.sheet_url)?;
        validate_url("script_url", &self.script_url)?;
        validate_url("openai_base_url", &self.openai_base_url)?;
        validate_non_empty_string("openai_api_key", &self.openai_api_key)?;
        validate_bind_addr("bind_addr", &self.bind_addr)?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Application configuration (`config.toml`)
// ---------------------------------------------------------------------------

/// Top-level dashboard configuration. Every field has a default so a
/// partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL including the `/api` prefix, without trailing slash.
    pub base_url: String,
    /// Block explorer used for transaction and wallet links.
    pub explorer_url: String,
    /// Per-request timeout on native targets.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001/api".to_string(),
            explorer_url: "https://sepolia.etherscan.io".to_string(),
            timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    /// Explorer link for a transaction hash.
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }

    /// Explorer link for a wallet address.
    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
    /// Placeholder rows rendered while a list loads.
    pub skeleton_rows: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            skeleton_rows: 5,
        }
    }
}

impl AppConfig {
    /// Normalize values a hand-edited file can get wrong.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.api.base_url = if trimmed.is_empty() {
            ApiConfig::default().base_url
        } else {
            trimmed
        };
        if self.table.page_size == 0 {
            self.table.page_size = TableConfig::default().page_size;
        }
        self
    }
}

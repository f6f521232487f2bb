use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Maximum number of candidate chunks accepted per request
    pub max_chunks: usize,
    /// Sections boosted when a rerank request does not name its own
    pub default_important_sections: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9100".to_string(),
            max_chunks: 1000,
            default_important_sections: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("CHUNK_RERANK_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("CHUNK_RERANK_MAX_CHUNKS") {
            if let Ok(v) = val.parse() {
                config.max_chunks = v;
            }
        }
        if let Ok(val) = std::env::var("CHUNK_RERANK_IMPORTANT_SECTIONS") {
            config.default_important_sections = parse_section_list(&val);
        }

        config
    }
}

/// Split a comma-separated list, dropping blank entries.
fn parse_section_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: String,
}

/// Output of tools whose result is a single block of text.
#[derive(Debug, Serialize)]
pub struct TextOutput {
    pub tool: String,
    pub output: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_json_indent() -> usize {
    2
}

fn default_csv_delimiter() -> char {
    ','
}

fn default_hash_algorithm() -> String {
    "sha256".to_string()
}

fn default_password_length() -> usize {
    16
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: char,
    #[serde(default = "default_hash_algorithm")]
    pub hash_algorithm: String,
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
            csv_delimiter: default_csv_delimiter(),
            hash_algorithm: default_hash_algorithm(),
            password_length: default_password_length(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Serialize)]
pub struct CategorySummary {
    pub category: crate::domain::catalog::Category,
    pub label: String,
    pub tool_count: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct JsonValidation {
    pub valid: bool,
    pub error: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

#[derive(Debug, Serialize, Clone)]
pub struct HashReport {
    pub algorithm: String,
    pub digest: String,
}

#[derive(Debug, Serialize)]
pub struct BaseReport {
    pub input: String,
    pub from: u32,
    pub to: u32,
    pub output: String,
    pub decimal: i64,
}

#[derive(Debug, Serialize)]
pub struct AllBasesReport {
    pub decimal: i64,
    pub binary: String,
    pub octal: String,
    pub hexadecimal: String,
}

#[derive(Debug, Serialize)]
pub struct RomanReport {
    pub arabic: i64,
    pub roman: String,
}

#[derive(Debug, Serialize)]
pub struct UnitReport {
    pub quantity: String,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

#[derive(Debug, Serialize)]
pub struct UnitListing {
    pub quantity: String,
    pub units: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct PercentReport {
    pub mode: String,
    pub result: f64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct LoanReport {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AgeReport {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
}

#[derive(Debug, Serialize)]
pub struct DateDiffReport {
    pub from: String,
    pub to: String,
    pub days: i64,
    pub weeks: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_whitespace: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub bytes: usize,
    pub reading_minutes: f64,
}

#[derive(Debug, Serialize)]
pub struct RegexMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub groups: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct TimestampReport {
    pub seconds: i64,
    pub milliseconds: i64,
    pub utc: String,
    pub rfc3339: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Serialize)]
pub struct JwtReport {
    pub header: serde_json::Value,
    pub payload: serde_json::Value,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct UrlParts {
    pub scheme: String,
    pub username: String,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub query_pairs: Vec<(String, String)>,
    pub fragment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UrlStatus {
    pub url: String,
    pub final_url: String,
    pub status: u16,
    pub reason: String,
    pub ok: bool,
    pub elapsed_ms: u128,
}

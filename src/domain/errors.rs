#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    #[error("input is empty")]
    EmptyInput,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid XML: {0}")]
    Xml(String),
    #[error("CSV row {row} has {found} fields but the header has {expected}")]
    CsvShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("duplicate CSV header: {0}")]
    CsvDuplicateHeader(String),
    #[error("unterminated quoted field starting on CSV row {0}")]
    CsvQuote(usize),
    #[error("expected a JSON array of objects")]
    NotRecordArray,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("decoded bytes are not valid UTF-8")]
    NotUtf8,
    #[error("invalid digit '{digit}' for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("radix must be between 2 and 36, got {0}")]
    InvalidRadix(u32),
    #[error("value is outside the safe integer range")]
    OutOfSafeRange,
    #[error("roman numerals cover 1 to 3999, got {0}")]
    RomanRange(i64),
    #[error("not a canonical roman numeral: {0}")]
    InvalidRoman(String),
    #[error("unknown {quantity} unit '{unit}' (expected one of: {valid})")]
    UnknownUnit {
        quantity: String,
        unit: String,
        valid: String,
    },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("invalid date or time: {0}")]
    InvalidDate(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid JWT: {0}")]
    InvalidJwt(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

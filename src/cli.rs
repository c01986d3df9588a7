use crate::domain::catalog::Category;
use crate::services::calculators::PercentMode;
use crate::services::text::{Case, LoremUnit};
use crate::services::units::Quantity;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wtk",
    version,
    about = "WebToolKit: converters, encoders, calculators and text utilities"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/webtoolkit/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Tool input: inline text, a file, or stdin when neither is given.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(help = "Input text (reads stdin when omitted)")]
    pub input: Option<String>,
    #[arg(long, short = 'f', help = "Read input from a file")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the tool catalog
    Tools {
        #[command(subcommand)]
        command: ToolsCommands,
    },
    /// Convert between data formats
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },
    /// Format, minify or validate JSON
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },
    /// Format or minify XML
    Xml {
        #[command(subcommand)]
        command: XmlCommands,
    },
    /// Encode or decode text
    Encode {
        #[command(subcommand)]
        command: EncodeCommands,
    },
    /// Hash text with MD5 or SHA-2
    Hash {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'a', help = "md5, sha224, sha256, sha384, sha512 or all")]
        algorithm: Option<String>,
    },
    /// Toy ciphers
    Cipher {
        #[command(subcommand)]
        command: CipherCommands,
    },
    /// Number systems
    Number {
        #[command(subcommand)]
        command: NumberCommands,
    },
    /// Convert between units
    Unit {
        #[command(subcommand)]
        command: UnitCommands,
    },
    /// Calculators
    Calc {
        #[command(subcommand)]
        command: CalcCommands,
    },
    /// Text utilities
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },
    /// Random generators
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
    /// Unix timestamps and dates
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },
    /// Convert a color between HEX, RGB and HSL
    Color { value: String },
    /// JSON Web Tokens
    Jwt {
        #[command(subcommand)]
        command: JwtCommands,
    },
    /// URL parsing and status checks
    Url {
        #[command(subcommand)]
        command: UrlCommands,
    },
    /// Run the HTTP backend (GET /api/health, GET /api/tools)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ToolsCommands {
    List {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    Search {
        query: String,
    },
    Show {
        id: String,
    },
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum ConvertCommands {
    CsvToJson {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        delimiter: Option<char>,
        #[arg(long)]
        indent: Option<usize>,
    },
    JsonToCsv {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        delimiter: Option<char>,
    },
    JsonToYaml {
        #[command(flatten)]
        input: InputArgs,
    },
    YamlToJson {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        indent: Option<usize>,
    },
    MarkdownToHtml {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum JsonCommands {
    Format {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        indent: Option<usize>,
    },
    Minify {
        #[command(flatten)]
        input: InputArgs,
    },
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum XmlCommands {
    Format {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    Minify {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum EncodeCommands {
    Base64 {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        decode: bool,
        #[arg(long, help = "Use the URL-safe alphabet without padding")]
        url_safe: bool,
    },
    Url {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        decode: bool,
    },
    Html {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        decode: bool,
    },
    Hex {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'd')]
        decode: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CipherCommands {
    Caesar {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 's', default_value_t = 3, allow_hyphen_values = true)]
        shift: i64,
        #[arg(long, short = 'd')]
        decode: bool,
    },
    Rot13 {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum NumberCommands {
    Base {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value_t = 10)]
        from: u32,
        #[arg(long, help = "Target radix (omit to show binary/octal/decimal/hex)")]
        to: Option<u32>,
    },
    Roman {
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UnitCommands {
    Convert {
        #[arg(value_enum)]
        quantity: Quantity,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    List {
        #[arg(value_enum)]
        quantity: Option<Quantity>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    Bmi {
        #[arg(long, help = "Weight in kilograms")]
        weight: f64,
        #[arg(long, help = "Height in centimetres")]
        height: f64,
    },
    Percent {
        #[arg(value_enum)]
        mode: PercentMode,
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    Loan {
        #[arg(long)]
        principal: f64,
        #[arg(long, help = "Annual interest rate in percent")]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    Age {
        #[arg(help = "Birth date, YYYY-MM-DD")]
        birth: String,
        #[arg(long, help = "Reference date, YYYY-MM-DD (default: today)")]
        on: Option<String>,
    },
    DateDiff {
        from: String,
        to: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TextCommands {
    Case {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum)]
        to: Case,
    },
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
    Reverse {
        #[command(flatten)]
        input: InputArgs,
    },
    Slug {
        #[command(flatten)]
        input: InputArgs,
    },
    Lines {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        trim: bool,
        #[arg(long)]
        remove_empty: bool,
        #[arg(long)]
        unique: bool,
        #[arg(long)]
        sort: bool,
        #[arg(long)]
        reverse: bool,
        #[arg(long)]
        ignore_case: bool,
    },
    Lorem {
        #[arg(long, value_enum, default_value_t = LoremUnit::Paragraphs)]
        unit: LoremUnit,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    Regex {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'p')]
        pattern: String,
        #[arg(long, short = 'i')]
        ignore_case: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    Uuid {
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
    Password {
        #[arg(long, short = 'l')]
        length: Option<usize>,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_digits: bool,
        #[arg(long)]
        no_symbols: bool,
        #[arg(long)]
        exclude_ambiguous: bool,
    },
    Number {
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum TimeCommands {
    FromUnix {
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,
    },
    ToUnix {
        datetime: String,
    },
    Now,
}

#[derive(Subcommand, Debug)]
pub enum JwtCommands {
    Decode { token: String },
}

#[derive(Subcommand, Debug)]
pub enum UrlCommands {
    Parse {
        url: String,
    },
    Check {
        url: String,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Path,
}

//! Tool registry used for navigation (`wtk tools ...` and `GET /api/tools`).
//!
//! Categories are display labels only; they never change how a tool runs.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Converters,
    Developer,
    Encoding,
    Security,
    Calculators,
    Units,
    Text,
    Generators,
    Datetime,
    Design,
    Network,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Converters,
        Category::Developer,
        Category::Encoding,
        Category::Security,
        Category::Calculators,
        Category::Units,
        Category::Text,
        Category::Generators,
        Category::Datetime,
        Category::Design,
        Category::Network,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Converters => "Converters",
            Category::Developer => "Developer",
            Category::Encoding => "Encoding",
            Category::Security => "Security",
            Category::Calculators => "Calculators",
            Category::Units => "Unit Converters",
            Category::Text => "Text",
            Category::Generators => "Generators",
            Category::Datetime => "Date & Time",
            Category::Design => "Design",
            Category::Network => "Network",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// CLI invocation that runs the tool.
    pub command: &'static str,
}

const fn tool(
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
    command: &'static str,
) -> ToolInfo {
    ToolInfo {
        id,
        name,
        category,
        description,
        command,
    }
}

static TOOLS: &[ToolInfo] = &[
    tool(
        "csv-to-json",
        "CSV to JSON",
        Category::Converters,
        "Convert CSV with a header row into a JSON array of objects",
        "wtk convert csv-to-json",
    ),
    tool(
        "json-to-csv",
        "JSON to CSV",
        Category::Converters,
        "Convert a JSON array of objects into CSV",
        "wtk convert json-to-csv",
    ),
    tool(
        "json-to-yaml",
        "JSON to YAML",
        Category::Converters,
        "Convert JSON documents into YAML",
        "wtk convert json-to-yaml",
    ),
    tool(
        "yaml-to-json",
        "YAML to JSON",
        Category::Converters,
        "Convert YAML documents into JSON",
        "wtk convert yaml-to-json",
    ),
    tool(
        "markdown-to-html",
        "Markdown to HTML",
        Category::Converters,
        "Render Markdown (CommonMark with tables) as HTML",
        "wtk convert markdown-to-html",
    ),
    tool(
        "json-formatter",
        "JSON Formatter",
        Category::Developer,
        "Pretty-print JSON with a configurable indent",
        "wtk json format",
    ),
    tool(
        "json-minifier",
        "JSON Minifier",
        Category::Developer,
        "Strip insignificant whitespace from JSON",
        "wtk json minify",
    ),
    tool(
        "json-validator",
        "JSON Validator",
        Category::Developer,
        "Check JSON syntax and report the error position",
        "wtk json validate",
    ),
    tool(
        "xml-formatter",
        "XML Formatter",
        Category::Developer,
        "Indent XML documents",
        "wtk xml format",
    ),
    tool(
        "xml-minifier",
        "XML Minifier",
        Category::Developer,
        "Remove whitespace between XML elements",
        "wtk xml minify",
    ),
    tool(
        "jwt-decoder",
        "JWT Decoder",
        Category::Developer,
        "Decode the header and payload of a JSON Web Token",
        "wtk jwt decode",
    ),
    tool(
        "url-parser",
        "URL Parser",
        Category::Developer,
        "Split a URL into scheme, host, path, query and fragment",
        "wtk url parse",
    ),
    tool(
        "regex-tester",
        "Regex Tester",
        Category::Developer,
        "List regex matches and capture groups in a text",
        "wtk text regex",
    ),
    tool(
        "base64",
        "Base64 Encoder/Decoder",
        Category::Encoding,
        "Encode text to Base64 or decode it back",
        "wtk encode base64",
    ),
    tool(
        "url-encoder",
        "URL Encoder/Decoder",
        Category::Encoding,
        "Percent-encode text for URLs or decode it",
        "wtk encode url",
    ),
    tool(
        "html-entities",
        "HTML Entity Encoder",
        Category::Encoding,
        "Escape or unescape HTML special characters",
        "wtk encode html",
    ),
    tool(
        "hex-encoder",
        "Hex Encoder/Decoder",
        Category::Encoding,
        "Convert text to hexadecimal bytes and back",
        "wtk encode hex",
    ),
    tool(
        "hash-generator",
        "Hash Generator",
        Category::Security,
        "MD5 and SHA-2 digests of text",
        "wtk hash",
    ),
    tool(
        "caesar-cipher",
        "Caesar Cipher",
        Category::Security,
        "Shift letters by a fixed amount",
        "wtk cipher caesar",
    ),
    tool("rot13", "ROT13", Category::Security, "Rotate letters by 13 places", "wtk cipher rot13"),
    tool(
        "password-generator",
        "Password Generator",
        Category::Security,
        "Random passwords with selectable character classes",
        "wtk generate password",
    ),
    tool(
        "bmi-calculator",
        "BMI Calculator",
        Category::Calculators,
        "Body mass index from weight and height",
        "wtk calc bmi",
    ),
    tool(
        "percentage-calculator",
        "Percentage Calculator",
        Category::Calculators,
        "Percent of, ratio as percent and percent change",
        "wtk calc percent",
    ),
    tool(
        "loan-calculator",
        "Loan Calculator",
        Category::Calculators,
        "Monthly payment and total interest of an amortized loan",
        "wtk calc loan",
    ),
    tool(
        "age-calculator",
        "Age Calculator",
        Category::Calculators,
        "Age in years, months and days from a birth date",
        "wtk calc age",
    ),
    tool(
        "date-difference",
        "Date Difference",
        Category::Calculators,
        "Days between two dates",
        "wtk calc date-diff",
    ),
    tool(
        "number-base-converter",
        "Number Base Converter",
        Category::Calculators,
        "Convert integers between radix 2 and 36",
        "wtk number base",
    ),
    tool(
        "roman-numerals",
        "Roman Numeral Converter",
        Category::Calculators,
        "Convert between integers and roman numerals",
        "wtk number roman",
    ),
    tool(
        "length-converter",
        "Length Converter",
        Category::Units,
        "Metres, feet, miles and more",
        "wtk unit convert length",
    ),
    tool(
        "mass-converter",
        "Weight Converter",
        Category::Units,
        "Kilograms, pounds, ounces and more",
        "wtk unit convert mass",
    ),
    tool(
        "temperature-converter",
        "Temperature Converter",
        Category::Units,
        "Celsius, Fahrenheit and Kelvin",
        "wtk unit convert temperature",
    ),
    tool(
        "data-size-converter",
        "Data Size Converter",
        Category::Units,
        "Bytes, kilobytes, kibibytes and more",
        "wtk unit convert data",
    ),
    tool(
        "time-converter",
        "Time Unit Converter",
        Category::Units,
        "Seconds, minutes, hours, days and weeks",
        "wtk unit convert time",
    ),
    tool(
        "area-converter",
        "Area Converter",
        Category::Units,
        "Square metres, acres, hectares and more",
        "wtk unit convert area",
    ),
    tool(
        "volume-converter",
        "Volume Converter",
        Category::Units,
        "Litres, gallons, cups and more",
        "wtk unit convert volume",
    ),
    tool(
        "speed-converter",
        "Speed Converter",
        Category::Units,
        "km/h, mph, m/s and knots",
        "wtk unit convert speed",
    ),
    tool(
        "case-converter",
        "Case Converter",
        Category::Text,
        "upper, lower, title, camel, snake, kebab and more",
        "wtk text case",
    ),
    tool(
        "word-counter",
        "Word Counter",
        Category::Text,
        "Characters, words, lines, sentences and reading time",
        "wtk text stats",
    ),
    tool(
        "text-reverser",
        "Text Reverser",
        Category::Text,
        "Reverse the characters of a text",
        "wtk text reverse",
    ),
    tool(
        "slug-generator",
        "Slug Generator",
        Category::Text,
        "Turn a title into a URL slug",
        "wtk text slug",
    ),
    tool(
        "line-tools",
        "Line Tools",
        Category::Text,
        "Sort, dedupe, trim or reverse lines",
        "wtk text lines",
    ),
    tool(
        "lorem-ipsum",
        "Lorem Ipsum Generator",
        Category::Text,
        "Placeholder words, sentences or paragraphs",
        "wtk text lorem",
    ),
    tool(
        "uuid-generator",
        "UUID Generator",
        Category::Generators,
        "Random version 4 UUIDs",
        "wtk generate uuid",
    ),
    tool(
        "random-number",
        "Random Number Generator",
        Category::Generators,
        "Random integers in an inclusive range",
        "wtk generate number",
    ),
    tool(
        "timestamp-converter",
        "Unix Timestamp Converter",
        Category::Datetime,
        "Convert between unix timestamps and dates",
        "wtk time from-unix",
    ),
    tool(
        "date-to-timestamp",
        "Date to Timestamp",
        Category::Datetime,
        "Convert a date or datetime into a unix timestamp",
        "wtk time to-unix",
    ),
    tool(
        "current-time",
        "Current Time",
        Category::Datetime,
        "Current time as unix seconds, millis and RFC 3339",
        "wtk time now",
    ),
    tool(
        "color-converter",
        "Color Converter",
        Category::Design,
        "Convert between HEX, RGB and HSL",
        "wtk color",
    ),
    tool(
        "url-status-checker",
        "URL Status Checker",
        Category::Network,
        "Fetch a URL and report its HTTP status",
        "wtk url check",
    ),
];

pub fn all_tools() -> &'static [ToolInfo] {
    TOOLS
}

pub fn by_category(category: Category) -> Vec<&'static ToolInfo> {
    TOOLS.iter().filter(|t| t.category == category).collect()
}

pub fn search(query: &str) -> Vec<&'static ToolInfo> {
    let q = query.trim().to_ascii_lowercase();
    if q.is_empty() {
        return TOOLS.iter().collect();
    }
    TOOLS
        .iter()
        .filter(|t| {
            t.id.contains(&q)
                || t.name.to_ascii_lowercase().contains(&q)
                || t.description.to_ascii_lowercase().contains(&q)
        })
        .collect()
}

pub fn find(id: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|t| t.id == id)
}

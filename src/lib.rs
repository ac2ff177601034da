/// Connection settings for one kintone instance, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub app_id: String,
    pub api_token: String,
}

/// The two form fields this tool inspects, printed in this order.
pub const INSPECTED_FIELDS: [&str; 2] = ["対応者", "新規営業件名"];

#[derive(Debug, serde::Deserialize)]
pub struct SchemaResponse {
    pub properties: std::collections::HashMap<String, serde_json::Value>,
}

impl SchemaResponse {
    /// Exact-match lookup in the properties mapping. Absence is a normal
    /// outcome, not an error.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Parse,
}

#[derive(Debug)]
pub struct FetchError {
    pub kind: ErrorKind,
    pub message: String,
    pub body: Option<String>,
}

impl FetchError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: e.to_string(),
            body: None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

pub async fn fetch_schema(
    client: &reqwest::Client,
    config: &Config,
) -> Result<SchemaResponse, FetchError> {
    let url = format!("{}/k/v1/app/form/fields.json", config.base_url);
    log::info!("GET {} app={}", url, config.app_id);
    let response = client
        .get(&url)
        .header("X-Cybozu-API-Token", &config.api_token)
        .query(&[("app", config.app_id.as_str())])
        .send()
        .await
        .map_err(FetchError::network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError {
            kind: ErrorKind::HttpStatus,
            message: format!("server returned {}", status),
            body: response.text().await.ok(),
        });
    }

    let body = response.text().await.map_err(FetchError::network)?;
    serde_json::from_str(&body).map_err(|e| FetchError {
        kind: ErrorKind::Parse,
        message: format!("invalid JSON in response: {}", e),
        body: None,
    })
}

/// One `[Field: ...]` section per inspected field, a missing field rendered
/// as `null`. Pretty-printing is 2-space indented and keeps non-ASCII
/// characters literal.
pub fn render_fields(schema: &SchemaResponse) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    let absent = serde_json::Value::Null;
    for name in &INSPECTED_FIELDS {
        let definition = schema.field(name).unwrap_or(&absent);
        out.push_str(&format!(
            "\n[Field: {}]\n{}\n",
            name,
            serde_json::to_string_pretty(definition)?
        ));
    }
    Ok(out)
}

pub fn render_failure(error: &FetchError) -> String {
    let mut out = format!("Error: {}\n", error);
    if let Some(body) = &error.body {
        out.push_str(body);
        out.push('\n');
    }
    out
}

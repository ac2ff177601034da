#[derive(structopt::StructOpt)]
struct Opt {
    /// Base URL of the kintone instance, e.g. https://example.cybozu.com
    #[structopt(long, env = "KINTONE_BASE_URL")]
    base_url: String,
    /// Numeric identifier of the app whose form fields are inspected
    #[structopt(long, env = "KINTONE_APP_ID")]
    app_id: String,
    /// API token with permission to read the app's form settings
    #[structopt(long, env = "KINTONE_API_TOKEN", hide_env_values = true)]
    api_token: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use structopt::StructOpt as _;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();
    let config = dump_kintone_schema::Config {
        base_url: opt.base_url,
        app_id: opt.app_id,
        api_token: opt.api_token,
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    println!("Fetching schema for App {}...", config.app_id);
    // Fetch failures are reported on stdout and do not fail the process.
    match dump_kintone_schema::fetch_schema(&client, &config).await {
        Ok(schema) => print!("{}", dump_kintone_schema::render_fields(&schema)?),
        Err(e) => print!("{}", dump_kintone_schema::render_failure(&e)),
    }
    Ok(())
}

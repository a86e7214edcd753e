//! Run one screen against a live backend and print what it rendered.
//!
//! Usage: preview <screen> [--base-url=http://host:port] [field=value ...]
//!
//! Examples:
//!   preview home
//!   preview results q=ai kind=patent sort=rel
//!   preview portrait item_id=7 sy=2020 ey=2024

use anyhow::{bail, Context, Result};
use client::{ApiClient, ClientConfig};
use render::MemorySink;
use views::{Bootstrap, FormState, Screen};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(screen_name) = args.next() else {
        bail!("usage: preview <screen> [--base-url=URL] [field=value ...]");
    };
    let screen = Screen::parse(&screen_name)
        .with_context(|| format!("unknown screen: {screen_name}"))?;

    let mut base_url = "http://localhost:8000".to_string();
    let mut form = FormState::new();
    for arg in args {
        if let Some(url) = arg.strip_prefix("--base-url=") {
            base_url = url.to_string();
        } else if let Some((key, value)) = arg.split_once('=') {
            form.set(key, value);
        } else {
            bail!("unrecognized argument: {arg}");
        }
    }

    let client = ApiClient::new(&ClientConfig::with_base_url(base_url))?;
    let mut sink = MemorySink::with_targets(screen.targets().iter().copied());

    Bootstrap::new(client).init(screen, &form, &mut sink).await?;

    for target in screen.targets() {
        if let Some(html) = sink.html(target) {
            println!("#{target}:\n{html}\n");
        }
        if let Some(option) = sink.chart(target) {
            println!("#{target} (chart option):\n{}\n", serde_json::to_string_pretty(option)?);
        }
        if let Some(error) = sink.error(target) {
            println!("#{target} error: {error}");
        }
    }

    Ok(())
}

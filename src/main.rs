use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use promdoc::prom;
use promdoc::render::{self, RenderOptions};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::logging::app_config;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(cli.log_file.as_deref(), cli.loglevel)?)?;
    log::info!("Starting promdoc");

    if let Err(err) = run(&cli).await {
        log::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = match cli.endpoint() {
        Some(endpoint) => scrape(&endpoint).await?,
        None => read_input(&cli.input).await?,
    };

    let metrics = prom::parse(&text);
    log::info!("Found {} metric families", metrics.len());
    let options = RenderOptions {
        raw_source: !cli.no_raw,
    };
    let markdown = render::render_with(&metrics, &options);

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, markdown)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote markdown to {}", path.display());
        }
        None => write_document(tokio::io::stdout(), &markdown)
            .await
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

/// Write the document to a sink; a closed pipe is reported, not a panic.
async fn write_document<W: AsyncWrite + Unpin>(
    mut sink: W,
    markdown: &str,
) -> std::io::Result<()> {
    sink.write_all(markdown.as_bytes()).await?;
    sink.flush().await
}

async fn scrape(endpoint: &str) -> anyhow::Result<String> {
    log::info!("Reading metrics from endpoint: {}", endpoint);
    let response = reqwest::get(endpoint)
        .await
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("Failed to scrape {endpoint}"))?;
    response
        .text()
        .await
        .with_context(|| format!("Failed to read the response from {endpoint}"))
}

async fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        log::info!("Reading metrics from stdin");
        return read_document(tokio::io::stdin())
            .await
            .context("Failed to read stdin");
    }
    log::info!("Reading metrics from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn read_document<R: AsyncRead + Unpin>(mut source: R) -> std::io::Result<String> {
    let mut text = String::new();
    source.read_to_string(&mut text).await?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn document_round_trips_through_a_pipe() {
        let (writer, reader) = tokio::io::duplex(64);
        let markdown = promdoc::parse_and_render("# HELP up Up\n# TYPE up gauge\nup 1");
        let expected = markdown.clone();

        let reading = tokio::spawn(read_document(reader));
        write_document(writer, &markdown).await.unwrap();
        assert_eq!(reading.await.unwrap().unwrap(), expected);
    }

    #[tokio::test]
    async fn closed_output_is_an_error() {
        let (writer, reader) = tokio::io::duplex(64);
        drop(reader);
        let markdown = promdoc::parse_and_render("# HELP up Up\n# TYPE up gauge\nup 1");
        let err = write_document(writer, &markdown).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::analysis::{AnalysisService, ReportSynthesizer, SectionFlags};
use crate::fetch::{ContentFetcher, FetchConfig};

/// Fetch options shared by the analyze and fetch commands
#[derive(Args, Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout in seconds
    #[arg(long, env = "CLARITY_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Maximum characters of page text kept
    #[arg(long, env = "CLARITY_FETCH_MAX_CHARS", default_value_t = 5000)]
    pub max_chars: usize,
}

impl FetchOptions {
    pub fn to_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_secs: self.timeout_secs,
            max_chars: self.max_chars,
            ..FetchConfig::from_env()
        }
    }
}

/// Arguments for analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Page to analyze (http:// or https://)
    pub url: String,

    /// Skip the consensus section
    #[arg(long)]
    pub no_consensus: bool,

    /// Skip the bias section
    #[arg(long)]
    pub no_bias: bool,

    /// Skip the summary and terms section
    #[arg(long)]
    pub no_terms: bool,

    /// Skip the advice section
    #[arg(long)]
    pub no_advice: bool,

    /// Print the full outcome as JSON instead of the Markdown report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub fetch: FetchOptions,
}

impl AnalyzeArgs {
    pub fn flags(&self) -> SectionFlags {
        SectionFlags {
            consensus: !self.no_consensus,
            bias: !self.no_bias,
            terms: !self.no_terms,
            advice: !self.no_advice,
        }
    }
}

/// Arguments for fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Page to fetch (http:// or https://)
    pub url: String,

    #[command(flatten)]
    pub fetch: FetchOptions,
}

/// Require an absolute http(s) URL
pub fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!(
            "请输入完整的URL，包括 http:// 或 https:// (got {})",
            url
        ))
    }
}

fn build_fetcher(options: &FetchOptions) -> Result<ContentFetcher> {
    let config = options.to_config();
    config.validate().map_err(|e| anyhow!(e))?;
    Ok(ContentFetcher::new(config)?)
}

/// Analyze a page and print the report
pub async fn analyze(args: AnalyzeArgs) -> Result<()> {
    validate_url(&args.url)?;

    let fetcher = build_fetcher(&args.fetch)?;
    let service = AnalysisService::new(Arc::new(fetcher), ReportSynthesizer::new());

    info!("Analyzing {}", args.url);
    let outcome = service.analyze(&args.url, args.flags()).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match (outcome.success, outcome.report, outcome.record_id) {
        (true, Some(report), Some(record_id)) => {
            println!("✅ 分析完成！记录ID: {}", record_id);
            println!("{}", report);
            Ok(())
        }
        _ => Err(anyhow!(
            "分析失败: {}",
            outcome.error.unwrap_or_else(|| "unknown error".to_string())
        )),
    }
}

/// Fetch a page and print its extracted content as JSON
pub async fn fetch(args: FetchArgs) -> Result<()> {
    validate_url(&args.url)?;

    let fetcher = build_fetcher(&args.fetch)?;
    let content = fetcher.fetch(&args.url).await;

    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}

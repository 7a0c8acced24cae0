// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report synthesis
//!
//! Turns fetched page content into the Markdown analysis report:
//! preamble, one section per enabled category (always in category order),
//! epilogue. Predicates are evaluated one by one and a failing predicate only
//! blanks its own line.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use super::keywords::{category_spec, detect_main_topic, CategorySpec, CATEGORIES, FALLBACK_TOPIC};
use super::template::render_template;
use super::types::{Category, SectionFlags, SynthesisError};
use crate::fetch::PageContent;

/// Timestamp format used in the preamble and footer
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Confidence reported in the epilogue
pub const CONFIDENCE: &str = "85%";
/// Importance reported in the epilogue
pub const IMPORTANCE: &str = "高";
/// Timeliness reported in the epilogue
pub const TIMELINESS: &str = "高";
/// Practicality reported in the epilogue
pub const PRACTICALITY: &str = "高";

/// Prefix of a predicate line whose evaluation failed
pub const PREDICATE_FAILED: &str = "⚠️ 分析失败";

const PREAMBLE_TEMPLATE: &str = "## 📊 ClarityAI 智能分析报告

### 🌐 网页信息
- **URL**: {url}
- **标题**: {title}
- **分析时间**: {timestamp}
- **分析状态**: ✅ 完成

### 🤖 智能体分析结果

";

const EPILOGUE_TEMPLATE: &str = "### 📈 综合评估
- **可信度**: {confidence}
- **重要性**: {importance}
- **时效性**: {timeliness}
- **实用性**: {practicality}

### 🎯 总结
此网页内容主要围绕「{topic}」展开，以上结果基于关键词检测得出。建议将此分析作为决策参考，同时结合其他信息源进行综合判断。

---
*报告生成时间: {timestamp}*
*ClarityAI 智能分析系统*
";

/// Assembles analysis reports from the category tables
#[derive(Debug, Clone, Copy)]
pub struct ReportSynthesizer {
    categories: &'static [CategorySpec],
}

impl ReportSynthesizer {
    /// Synthesizer over the shipped keyword tables
    pub fn new() -> Self {
        Self::with_categories(CATEGORIES)
    }

    /// Synthesizer over custom category tables
    pub fn with_categories(categories: &'static [CategorySpec]) -> Self {
        Self { categories }
    }

    /// Build the report, stamped with the current local time
    pub fn synthesize(
        &self,
        content: &PageContent,
        flags: SectionFlags,
    ) -> Result<String, SynthesisError> {
        self.synthesize_at(content, flags, Local::now().naive_local())
    }

    /// Build the report with an explicit timestamp
    pub fn synthesize_at(
        &self,
        content: &PageContent,
        flags: SectionFlags,
        at: NaiveDateTime,
    ) -> Result<String, SynthesisError> {
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();

        let mut report = render_template(
            "preamble",
            PREAMBLE_TEMPLATE,
            &[
                ("url", content.source_url.clone()),
                ("title", content.title.clone()),
                ("timestamp", timestamp.clone()),
            ],
        )?;

        for category in flags.enabled() {
            let spec = category_spec(self.categories, category)
                .ok_or(SynthesisError::MissingCategory(category))?;
            report.push_str(&self.render_section(spec, &content.body)?);
            report.push('\n');
        }

        let topic = detect_main_topic(&content.body).unwrap_or(FALLBACK_TOPIC);
        report.push_str(&render_template(
            "epilogue",
            EPILOGUE_TEMPLATE,
            &[
                ("confidence", CONFIDENCE.to_string()),
                ("importance", IMPORTANCE.to_string()),
                ("timeliness", TIMELINESS.to_string()),
                ("practicality", PRACTICALITY.to_string()),
                ("topic", topic.to_string()),
                ("timestamp", timestamp),
            ],
        )?);

        debug!(
            "Synthesized report for {} ({} sections, {} chars)",
            content.source_url,
            flags.enabled().len(),
            report.chars().count()
        );

        Ok(report)
    }

    /// Render one category section
    ///
    /// A predicate error is logged and rendered in place of its finding.
    pub fn render_section(
        &self,
        spec: &CategorySpec,
        body: &str,
    ) -> Result<String, SynthesisError> {
        let values: Vec<(&str, String)> = spec
            .predicates
            .iter()
            .map(|predicate| {
                let finding = predicate.evaluate(body).unwrap_or_else(|e| {
                    warn!(
                        "Predicate {} in {} section failed: {}",
                        predicate.name, spec.category, e
                    );
                    format!("{}: {}", PREDICATE_FAILED, e)
                });
                (predicate.name, finding)
            })
            .collect();

        render_template(spec.category.as_str(), spec.template, &values)
    }

    /// Categories this synthesizer knows how to render
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|spec| spec.category)
    }
}

impl Default for ReportSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

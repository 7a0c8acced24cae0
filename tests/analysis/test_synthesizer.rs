// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report layout, section gating and failure containment

use chrono::{NaiveDate, NaiveDateTime};
use clarity_ai::analysis::predicate::{LengthBucket, Threshold};
use clarity_ai::analysis::{
    Category, CategorySpec, PredicateKind, PredicateSpec, ReportSynthesizer, SectionFlags,
    SynthesisError,
};
use clarity_ai::fetch::PageContent;

const HEADINGS: [(Category, &str); 4] = [
    (Category::Summary, "#### 📚 内容摘要与术语"),
    (Category::Consensus, "#### 🎯 共识分析"),
    (Category::Bias, "#### 🔍 偏见识别"),
    (Category::Advice, "#### 💡 决策建议"),
];

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 53)
        .unwrap()
}

fn article() -> PageContent {
    PageContent {
        title: "大模型产业观察".to_string(),
        body: "专家表示，大模型正在改变行业。市场规模增长了15%，投入超过2.5亿。\
               但是也有人提出质疑，担忧隐私与就业问题。建议企业制定策略，关注风险。"
            .to_string(),
        source_url: "https://example.com/ai".to_string(),
    }
}

fn flags_from_bits(bits: u8) -> SectionFlags {
    SectionFlags {
        terms: bits & 0b0001 != 0,
        consensus: bits & 0b0010 != 0,
        bias: bits & 0b0100 != 0,
        advice: bits & 0b1000 != 0,
    }
}

fn strip_timestamps(report: &str) -> String {
    report
        .lines()
        .filter(|line| !line.contains("分析时间") && !line.contains("报告生成时间"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_sections_follow_fixed_order_for_every_flag_combination() {
    let synthesizer = ReportSynthesizer::new();
    let content = article();

    for bits in 0..16u8 {
        let flags = flags_from_bits(bits);
        let report = synthesizer
            .synthesize_at(&content, flags, fixed_time())
            .unwrap();

        let mut last_position = 0;
        for (category, heading) in HEADINGS {
            match report.find(heading) {
                Some(position) => {
                    assert!(flags.includes(category), "{} rendered for {:?}", heading, flags);
                    assert!(position > last_position, "{} out of order", heading);
                    last_position = position;
                }
                None => assert!(!flags.includes(category), "{} missing for {:?}", heading, flags),
            }
        }

        let epilogue = report.find("### 📈 综合评估").unwrap();
        assert!(epilogue > last_position);
    }
}

#[test]
fn test_no_sections_still_yields_preamble_and_epilogue() {
    let report = ReportSynthesizer::new()
        .synthesize_at(&article(), SectionFlags::none(), fixed_time())
        .unwrap();

    assert!(report.starts_with("## 📊 ClarityAI 智能分析报告"));
    assert!(report.contains("- **标题**: 大模型产业观察"));
    assert!(report.contains("### 📈 综合评估"));
    assert!(!report.contains("####"));
}

#[test]
fn test_epilogue_constants_and_topic() {
    let report = ReportSynthesizer::new()
        .synthesize_at(&article(), SectionFlags::all(), fixed_time())
        .unwrap();

    assert!(report.contains("- **可信度**: 85%"));
    assert!(report.contains("- **重要性**: 高"));
    assert!(report.contains("- **时效性**: 高"));
    assert!(report.contains("- **实用性**: 高"));
    assert!(report.contains("此网页内容主要围绕「大模型」展开"));
    assert!(report.contains("*报告生成时间: 2025-03-14 09:26:53*"));
}

#[test]
fn test_topic_falls_back_when_no_keyword() {
    let content = PageContent {
        title: "散步".to_string(),
        body: "今天天气很好，我们去公园散步。".to_string(),
        source_url: "https://example.com/walk".to_string(),
    };
    let report = ReportSynthesizer::new()
        .synthesize_at(&content, SectionFlags::none(), fixed_time())
        .unwrap();

    assert!(report.contains("此网页内容主要围绕「综合」展开"));
}

#[test]
fn test_findings_are_rendered_into_sections() {
    let report = ReportSynthesizer::new()
        .synthesize_at(&article(), SectionFlags::all(), fixed_time())
        .unwrap();

    assert!(report.contains("- 主要话题: 大模型"));
    assert!(report.contains("- 关键数据: 15%、2.5亿"));
    assert!(report.contains("- 争议点: 存在质疑、担忧"));
    assert!(report.contains("- 影响领域: 涉及就业、隐私"));
    assert!(report.contains("- 潜在风险: 警惕风险"));
}

#[test]
fn test_synthesis_is_idempotent() {
    let synthesizer = ReportSynthesizer::new();
    let content = article();

    let first = synthesizer
        .synthesize_at(&content, SectionFlags::all(), fixed_time())
        .unwrap();
    let second = synthesizer
        .synthesize_at(&content, SectionFlags::all(), fixed_time())
        .unwrap();
    assert_eq!(first, second);

    let now_a = synthesizer.synthesize(&content, SectionFlags::all()).unwrap();
    let now_b = synthesizer.synthesize(&content, SectionFlags::all()).unwrap();
    assert_eq!(strip_timestamps(&now_a), strip_timestamps(&now_b));
}

#[test]
fn test_failure_placeholder_content_is_still_analyzed() {
    let content = PageContent::failed(
        "https://unreachable.invalid/",
        &clarity_ai::fetch::FetchError::Timeout("https://unreachable.invalid/".to_string()),
    );
    let report = ReportSynthesizer::new()
        .synthesize_at(&content, SectionFlags::all(), fixed_time())
        .unwrap();

    assert!(report.contains("- **标题**: 抓取失败"));
    assert!(report.contains("- 主要话题: 未识别出明确主题"));
}

static BROKEN_SUMMARY_PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "depth",
        kind: PredicateKind::LengthThreshold {
            buckets: &[
                LengthBucket {
                    below: 500,
                    message: "长",
                },
                LengthBucket {
                    below: 100,
                    message: "短",
                },
            ],
            overflow: "很长",
        },
    },
    PredicateSpec {
        name: "numbers",
        kind: PredicateKind::KeyData,
    },
];

static BROKEN_CONSENSUS_PREDICATES: &[PredicateSpec] = &[PredicateSpec {
    name: "agreement",
    kind: PredicateKind::CountThreshold {
        keywords: &["共识"],
        high: Threshold {
            min: 1,
            message: "高",
        },
        medium: Threshold {
            min: 2,
            message: "中",
        },
        low: "低",
    },
}];

static BROKEN_TABLES: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Summary,
        template: "#### 摘要\n- 篇幅: {depth}\n- 数据: {numbers}\n",
        predicates: BROKEN_SUMMARY_PREDICATES,
    },
    CategorySpec {
        category: Category::Consensus,
        template: "#### 共识\n- 共识度: {agreement}\n",
        predicates: BROKEN_CONSENSUS_PREDICATES,
    },
];

#[test]
fn test_predicate_failure_is_contained_to_its_line() {
    let flags = SectionFlags {
        consensus: true,
        bias: false,
        terms: true,
        advice: false,
    };
    let report = ReportSynthesizer::with_categories(BROKEN_TABLES)
        .synthesize_at(&article(), flags, fixed_time())
        .unwrap();

    assert!(report.contains("- 篇幅: ⚠️ 分析失败"));
    assert!(report.contains("- 数据: 15%、2.5亿"));
    assert!(report.contains("- 共识度: ⚠️ 分析失败"));
    assert!(report.contains("### 📈 综合评估"));
}

#[test]
fn test_missing_category_table_is_an_error() {
    let result = ReportSynthesizer::with_categories(BROKEN_TABLES).synthesize_at(
        &article(),
        SectionFlags::all(),
        fixed_time(),
    );

    assert!(matches!(
        result,
        Err(SynthesisError::MissingCategory(Category::Bias))
    ));
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Predicate behavior over the shipped keyword tables

use clarity_ai::analysis::{extract_key_data, PredicateSpec, CATEGORIES};

const NEUTRAL_TEXT: &str = "今天天气很好，我们去公园散步。";

fn predicate(name: &str) -> &'static PredicateSpec {
    CATEGORIES
        .iter()
        .flat_map(|spec| spec.predicates.iter())
        .find(|predicate| predicate.name == name)
        .unwrap_or_else(|| panic!("no predicate named {}", name))
}

#[test]
fn test_neutral_text_yields_not_found_messages() {
    let expected = [
        ("main_topic", "未识别出明确主题"),
        ("key_terms", "未发现专业术语"),
        ("key_data", "未发现关键数据"),
        ("mainstream", "较低，未发现明显的共识性表述"),
        ("controversy", "未发现明显争议"),
        ("social_impact", "未识别出社会影响相关内容"),
        ("stance", "表述较为中立"),
        ("sources", "未标注明确的信息来源"),
        ("balance", "较弱，观点较为单一"),
        ("opportunities", "未识别出明确机遇"),
        ("risks", "未识别出明显风险"),
        ("actionability", "较弱，建议先试点评估再做决策"),
    ];

    for (name, message) in expected {
        assert_eq!(
            predicate(name).evaluate(NEUTRAL_TEXT).unwrap(),
            message,
            "predicate {}",
            name
        );
    }
}

#[test]
fn test_every_predicate_is_deterministic() {
    let text = "专家表示，人工智能带来机遇，但是也存在风险。增长了15%，投入2.5亿。";
    for spec in CATEGORIES {
        for predicate in spec.predicates {
            let first = predicate.evaluate(text).unwrap();
            let second = predicate.evaluate(text).unwrap();
            assert_eq!(first, second, "predicate {}", predicate.name);
        }
    }
}

#[test]
fn test_membership_reports_at_most_three_in_list_order() {
    // Every social impact keyword, in reverse list order
    let text = "环境公平民生效率安全隐私就业";
    assert_eq!(
        predicate("social_impact").evaluate(text).unwrap(),
        "涉及就业、隐私、安全"
    );
}

#[test]
fn test_membership_single_match() {
    assert_eq!(
        predicate("controversy").evaluate("该方案引发了争议").unwrap(),
        "存在争议"
    );
    assert_eq!(
        predicate("main_topic").evaluate("关于芯片产业的报道").unwrap(),
        "芯片"
    );
}

#[test]
fn test_count_threshold_boundaries() {
    let mainstream = predicate("mainstream");

    assert_eq!(
        mainstream.evaluate("业内普遍认为").unwrap(),
        "中等，包含部分共识性表述"
    );
    assert_eq!(
        mainstream.evaluate("业内普遍认为这是共识").unwrap(),
        "中等，包含部分共识性表述"
    );
    assert_eq!(
        mainstream
            .evaluate("业内普遍认为这是共识，大多数人赞同")
            .unwrap(),
        "较高，文中多处体现主流共识"
    );
}

#[test]
fn test_count_threshold_counts_distinct_keywords() {
    // The same keyword repeated counts once
    assert_eq!(
        predicate("balance").evaluate("但是但是但是但是").unwrap(),
        "中等，包含部分不同观点"
    );
}

#[test]
fn test_content_depth_buckets() {
    let depth = predicate("content_depth");

    assert_eq!(depth.evaluate("").unwrap(), "内容较短，信息量有限");
    assert_eq!(
        depth.evaluate(&"字".repeat(199)).unwrap(),
        "内容较短，信息量有限"
    );
    assert_eq!(
        depth.evaluate(&"字".repeat(200)).unwrap(),
        "篇幅适中，涵盖主要信息"
    );
    assert_eq!(depth.evaluate(&"字".repeat(1000)).unwrap(), "内容较为充实");
    assert_eq!(
        depth.evaluate(&"字".repeat(3000)).unwrap(),
        "内容详实，信息量丰富"
    );
}

#[test]
fn test_key_data_extraction() {
    assert_eq!(
        extract_key_data("增长了15%，总计2.5亿元").unwrap(),
        vec!["15%".to_string(), "2.5亿".to_string()]
    );
    assert!(extract_key_data("没有任何数字").unwrap().is_empty());
    assert!(extract_key_data("2025年").unwrap().is_empty());
}

#[test]
fn test_key_data_finding_joins_figures() {
    assert_eq!(
        predicate("key_data").evaluate("用户达到300万，同比增长12.5%").unwrap(),
        "300万、12.5%"
    );
}

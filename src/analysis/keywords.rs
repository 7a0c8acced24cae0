// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword tables and section templates
//!
//! Everything the report says is decided here: the keyword lists each
//! predicate scans for, the messages it can return and the Markdown template
//! each section is rendered with. Templates reference predicates by name
//! (`{main_topic}`), see [`super::template::render_template`].

use super::predicate::{LengthBucket, PredicateKind, PredicateSpec, Threshold};
use super::types::Category;

/// One report section: its template and the predicates feeding it
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub category: Category,
    pub template: &'static str,
    pub predicates: &'static [PredicateSpec],
}

/// Topic used by the closing summary when no topic keyword occurs
pub const FALLBACK_TOPIC: &str = "综合";

// Summary

pub const TOPIC_KEYWORDS: &[&str] = &[
    "人工智能",
    "大模型",
    "机器学习",
    "深度学习",
    "芯片",
    "半导体",
    "区块链",
    "新能源",
    "电动汽车",
    "互联网",
    "经济",
    "金融",
    "股市",
    "房地产",
    "医疗",
    "健康",
    "教育",
    "科技",
    "政策",
    "环境",
    "气候",
    "就业",
    "国际",
];

pub const TERM_KEYWORDS: &[&str] = &[
    "生成式AI",
    "大语言模型",
    "神经网络",
    "算法",
    "算力",
    "数据",
    "模型",
    "云计算",
    "物联网",
    "数字化转型",
    "自动驾驶",
    "碳中和",
    "供应链",
    "GDP",
    "通货膨胀",
    "利率",
];

const CONTENT_DEPTH_BUCKETS: &[LengthBucket] = &[
    LengthBucket {
        below: 200,
        message: "内容较短，信息量有限",
    },
    LengthBucket {
        below: 1000,
        message: "篇幅适中，涵盖主要信息",
    },
    LengthBucket {
        below: 3000,
        message: "内容较为充实",
    },
];

const SUMMARY_PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "main_topic",
        kind: PredicateKind::Membership {
            keywords: TOPIC_KEYWORDS,
            found_prefix: "",
            not_found: "未识别出明确主题",
        },
    },
    PredicateSpec {
        name: "content_depth",
        kind: PredicateKind::LengthThreshold {
            buckets: CONTENT_DEPTH_BUCKETS,
            overflow: "内容详实，信息量丰富",
        },
    },
    PredicateSpec {
        name: "key_terms",
        kind: PredicateKind::Membership {
            keywords: TERM_KEYWORDS,
            found_prefix: "",
            not_found: "未发现专业术语",
        },
    },
    PredicateSpec {
        name: "key_data",
        kind: PredicateKind::KeyData,
    },
];

const SUMMARY_TEMPLATE: &str = "#### 📚 内容摘要与术语
**主题识别:**
- 主要话题: {main_topic}
- 内容篇幅: {content_depth}

**关键概念解析:**
- 关键术语: {key_terms}
- 关键数据: {key_data}
";

// Consensus

pub const CONSENSUS_KEYWORDS: &[&str] = &[
    "普遍认为",
    "共识",
    "大多数",
    "主流",
    "广泛认可",
    "一致认为",
    "专家表示",
    "研究表明",
];

pub const CONTROVERSY_KEYWORDS: &[&str] = &["争议", "分歧", "质疑", "反对", "批评", "担忧"];

pub const SOCIAL_IMPACT_KEYWORDS: &[&str] = &[
    "就业",
    "隐私",
    "安全",
    "效率",
    "民生",
    "生活质量",
    "公平",
    "环境",
];

const CONSENSUS_PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "mainstream",
        kind: PredicateKind::CountThreshold {
            keywords: CONSENSUS_KEYWORDS,
            high: Threshold {
                min: 3,
                message: "较高，文中多处体现主流共识",
            },
            medium: Threshold {
                min: 1,
                message: "中等，包含部分共识性表述",
            },
            low: "较低，未发现明显的共识性表述",
        },
    },
    PredicateSpec {
        name: "controversy",
        kind: PredicateKind::Membership {
            keywords: CONTROVERSY_KEYWORDS,
            found_prefix: "存在",
            not_found: "未发现明显争议",
        },
    },
    PredicateSpec {
        name: "social_impact",
        kind: PredicateKind::Membership {
            keywords: SOCIAL_IMPACT_KEYWORDS,
            found_prefix: "涉及",
            not_found: "未识别出社会影响相关内容",
        },
    },
];

const CONSENSUS_TEMPLATE: &str = "#### 🎯 共识分析
**主流观点识别:**
- 社会共识度: {mainstream}
- 争议点: {controversy}

**社会影响评估:**
- 影响领域: {social_impact}
";

// Bias

pub const STANCE_KEYWORDS: &[&str] = &[
    "必然",
    "绝对",
    "毫无疑问",
    "完全",
    "彻底",
    "最好",
    "最差",
    "震惊",
    "史上",
    "唯一",
];

pub const SOURCE_KEYWORDS: &[&str] = &[
    "据报道",
    "数据显示",
    "研究",
    "调查",
    "专家",
    "官方",
    "统计",
    "报告",
];

pub const BALANCE_KEYWORDS: &[&str] = &["但是", "然而", "另一方面", "不过", "相反", "尽管"];

const BIAS_PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "stance",
        kind: PredicateKind::CountThreshold {
            keywords: STANCE_KEYWORDS,
            high: Threshold {
                min: 3,
                message: "倾向明显，绝对化表述较多",
            },
            medium: Threshold {
                min: 1,
                message: "存在轻微倾向",
            },
            low: "表述较为中立",
        },
    },
    PredicateSpec {
        name: "sources",
        kind: PredicateKind::Membership {
            keywords: SOURCE_KEYWORDS,
            found_prefix: "引用了",
            not_found: "未标注明确的信息来源",
        },
    },
    PredicateSpec {
        name: "balance",
        kind: PredicateKind::CountThreshold {
            keywords: BALANCE_KEYWORDS,
            high: Threshold {
                min: 3,
                message: "良好，包含多方观点",
            },
            medium: Threshold {
                min: 1,
                message: "中等，包含部分不同观点",
            },
            low: "较弱，观点较为单一",
        },
    },
];

const BIAS_TEMPLATE: &str = "#### 🔍 偏见识别
**潜在偏见检测:**
- 立场倾向: {stance}
- 信息来源: {sources}

**客观性评估:**
- 平衡性: {balance}
";

// Advice

pub const OPPORTUNITY_KEYWORDS: &[&str] = &["机遇", "增长", "创新", "发展", "突破", "前景", "提升"];

pub const RISK_KEYWORDS: &[&str] = &["风险", "挑战", "下降", "危机", "监管", "不确定", "亏损"];

pub const ACTION_KEYWORDS: &[&str] = &["建议", "应该", "需要", "措施", "计划", "策略", "方案"];

const ADVICE_PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "opportunities",
        kind: PredicateKind::Membership {
            keywords: OPPORTUNITY_KEYWORDS,
            found_prefix: "关注",
            not_found: "未识别出明确机遇",
        },
    },
    PredicateSpec {
        name: "risks",
        kind: PredicateKind::Membership {
            keywords: RISK_KEYWORDS,
            found_prefix: "警惕",
            not_found: "未识别出明显风险",
        },
    },
    PredicateSpec {
        name: "actionability",
        kind: PredicateKind::CountThreshold {
            keywords: ACTION_KEYWORDS,
            high: Threshold {
                min: 3,
                message: "较强，文中给出了具体措施，可直接参考",
            },
            medium: Threshold {
                min: 1,
                message: "一般，建议结合实际情况细化方案",
            },
            low: "较弱，建议先试点评估再做决策",
        },
    },
];

const ADVICE_TEMPLATE: &str = "#### 💡 决策建议
**机遇与风险:**
- 发展机遇: {opportunities}
- 潜在风险: {risks}

**行动建议:**
- 可操作性: {actionability}
";

/// The shipped report sections, in rendering order
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Summary,
        template: SUMMARY_TEMPLATE,
        predicates: SUMMARY_PREDICATES,
    },
    CategorySpec {
        category: Category::Consensus,
        template: CONSENSUS_TEMPLATE,
        predicates: CONSENSUS_PREDICATES,
    },
    CategorySpec {
        category: Category::Bias,
        template: BIAS_TEMPLATE,
        predicates: BIAS_PREDICATES,
    },
    CategorySpec {
        category: Category::Advice,
        template: ADVICE_TEMPLATE,
        predicates: ADVICE_PREDICATES,
    },
];

/// First topic keyword occurring in `body`
pub fn detect_main_topic(body: &str) -> Option<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| body.contains(keyword))
}

/// Look up the section definition for `category`
pub fn category_spec(
    categories: &'static [CategorySpec],
    category: Category,
) -> Option<&'static CategorySpec> {
    categories.iter().find(|spec| spec.category == category)
}

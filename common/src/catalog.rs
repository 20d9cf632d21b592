//! データセットカタログモジュール
//!
//! 各データセットのフィールド名契約（レコードは開いた文字列マップなので、
//! カテゴリごとの期待フィールドをここで列挙して固定する）と、
//! アイテム識別・検索フィルタの共通処理。

use crate::record::Record;

/// データセットごとの期待フィールド名
pub mod fields {
    /// styles.csv
    pub mod style {
        pub const CATEGORY: &str = "Style Category";
        pub const TYPE: &str = "Type";
        pub const ERA: &str = "Era/Origin";
        pub const KEYWORDS: &str = "Keywords";
        pub const PRIMARY_COLORS: &str = "Primary Colors";
        pub const CSS_VARS: &str = "Design System Variables";
        pub const CHECKLIST: &str = "Implementation Checklist";
        pub const TECH_KEYWORDS: &str = "CSS/Technical Keywords";
    }

    /// colors.csv
    pub mod color {
        pub const NAME: &str = "Name";
        pub const CATEGORY: &str = "Category";
        pub const PRODUCT_TYPE: &str = "Product Type";
        pub const PRIMARY: &str = "Primary (Hex)";
        pub const SECONDARY: &str = "Secondary (Hex)";
        pub const CTA: &str = "CTA (Hex)";
        pub const BACKGROUND: &str = "Background (Hex)";
        pub const TEXT: &str = "Text (Hex)";
        pub const NOTES: &str = "Notes";
        pub const REFERENCE: &str = "Reference";
        pub const KEYWORDS: &str = "Keywords";
    }

    /// typography.csv
    pub mod typography {
        pub const PAIRING_NAME: &str = "Pairing Name";
        pub const CATEGORY: &str = "Category";
        pub const HEADER_FONT: &str = "Header Font";
        pub const BODY_FONT: &str = "Body Font";
    }

    /// charts.csv
    pub mod chart {
        pub const DATA_TYPE: &str = "Data Type";
        pub const BEST_CHART: &str = "Best Chart Type";
        pub const INTERACTIVE: &str = "Interactive Level";
    }

    /// prompts.csv（推薦機能用のテンプレート）
    pub mod prompt {
        pub const CATEGORY: &str = "Style Category";
        pub const KEYWORDS: &str = "AI Prompt Keywords (Copy-Paste Ready)";
        pub const CSS_VARS: &str = "Design System Variables";
        pub const CHECKLIST: &str = "Implementation Checklist";
        pub const TECH_KEYWORDS: &str = "CSS/Technical Keywords";
    }

    /// ux-guidelines.csv
    pub mod guideline {
        pub const CATEGORY: &str = "Category";
        pub const ISSUE: &str = "Issue";
        pub const SEVERITY: &str = "Severity";
        pub const PLATFORM: &str = "Platform";
        pub const DESCRIPTION: &str = "Description";
        pub const DO: &str = "Do";
        pub const DONT: &str = "Don't";
    }

    /// cases.csv（ダークパターン注釈付き事例）
    pub mod case {
        pub const PATTERN_TYPE: &str = "PatternType";
        pub const SUBTYPE: &str = "Subtype";
        pub const SEVERITY: &str = "Severity";
        pub const CATEGORY: &str = "Category";
        pub const PLATFORM: &str = "Platform";
        pub const COMPONENT: &str = "ComponentType";
        pub const PSYCHOLOGY: &str = "Psychology";
        pub const OBSERVATION: &str = "ObservationCOT";
        pub const REASONING: &str = "ReasoningCOT";
        pub const REMEDIATION: &str = "RemediationCOT";
        pub const CITATION: &str = "Citation";
        pub const URL: &str = "URL";
    }
}

/// アイテムの安定ID
///
/// 自然キー（カテゴリ名など）が空の場合は位置ベースのIDにフォールバック。
pub fn item_id(record: &Record, natural_key: &str, prefix: &str, index: usize) -> String {
    match record.get(natural_key) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => format!("{}-{}", prefix, index),
    }
}

/// アイテムの表示名（自然キーが空なら "Prefix N" 形式）
pub fn item_name(record: &Record, natural_key: &str, label: &str, index: usize) -> String {
    match record.get(natural_key) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => format!("{} {}", label, index),
    }
}

/// 全フィールド値に対する部分一致検索（大文字小文字を無視）
///
/// 空の検索語は常に一致。
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record
        .field_names()
        .any(|name| record.get_or_empty(name).to_lowercase().contains(&term))
}

/// 指定フィールドの完全一致フィルタ
///
/// `expected` がNoneの場合はフィルタなし（常に一致）。
pub fn matches_field(record: &Record, field: &str, expected: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(v) => record.get_or_empty(field) == v,
    }
}

/// 指定フィールドのユニーク値一覧（空値を除きソート済み）
///
/// フィルタ候補の列挙に使用。
pub fn unique_values(records: &[Record], field: &str) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|r| r.get(field))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect();
    values.sort();
    values.dedup();
    values
}

//! 一覧表示モジュール
//!
//! データセットごとのフィルタ適用と整形出力。
//! フィルタ判定は純粋関数に分離してテスト対象にする。

use crate::loader::Library;
use design_ref_common::catalog::{fields, item_id, matches_field, matches_search, unique_values};
use design_ref_common::color::{extract_hex_colors, matches_harmony, wcag_rating, Harmony};
use design_ref_common::record::Record;
use design_ref_common::selection::{SelectionSet, Status};

/// 一覧表示の絞り込み条件
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    /// 全フィールド部分一致検索
    pub search: String,
    /// Type完全一致（styles用）
    pub style_type: Option<String>,
    /// Era/Origin完全一致（styles用）
    pub era: Option<String>,
    /// Category完全一致（colors/cases用）
    pub category: Option<String>,
    /// Severity完全一致（guidelines/cases用）
    pub severity: Option<String>,
    /// Platform完全一致（guidelines/cases用）
    pub platform: Option<String>,
    /// 基準色相（colors用、harmonyとセットで使う）
    pub hue: Option<f64>,
    /// 色相ハーモニー（colors用）
    pub harmony: Option<Harmony>,
}

/// 選択状態マーク（✓採用 ★検討 ✕却下）
fn status_mark(set: &SelectionSet, id: &str) -> &'static str {
    match set.get_status(id) {
        Some(Status::Selected) => "✓",
        Some(Status::Considered) => "★",
        Some(Status::Rejected) => "✕",
        None => " ",
    }
}

/// stylesレコードのフィルタ判定
pub fn style_passes(record: &Record, filter: &ListFilter) -> bool {
    matches_search(record, &filter.search)
        && matches_field(record, fields::style::TYPE, filter.style_type.as_deref())
        && matches_field(record, fields::style::ERA, filter.era.as_deref())
}

/// colorsレコードのフィルタ判定
///
/// ハーモニー指定時はPrimary (Hex)の色相で判定。
pub fn color_passes(record: &Record, filter: &ListFilter) -> bool {
    if !matches_search(record, &filter.search)
        || !matches_field(record, fields::color::CATEGORY, filter.category.as_deref())
    {
        return false;
    }
    match (filter.harmony, filter.hue) {
        (Some(harmony), Some(hue)) => {
            matches_harmony(record.get_or_empty(fields::color::PRIMARY), harmony, hue)
        }
        _ => true,
    }
}

/// guidelinesレコードのフィルタ判定
pub fn guideline_passes(record: &Record, filter: &ListFilter) -> bool {
    matches_search(record, &filter.search)
        && matches_field(record, fields::guideline::SEVERITY, filter.severity.as_deref())
        && matches_field(record, fields::guideline::PLATFORM, filter.platform.as_deref())
}

/// casesレコードのフィルタ判定
pub fn case_passes(record: &Record, filter: &ListFilter) -> bool {
    matches_search(record, &filter.search)
        && matches_field(record, fields::case::SEVERITY, filter.severity.as_deref())
        && matches_field(record, fields::case::PLATFORM, filter.platform.as_deref())
        && matches_field(record, fields::case::CATEGORY, filter.category.as_deref())
}

/// スタイル一覧を表示
pub fn render_styles(records: &[Record], filter: &ListFilter, set: &SelectionSet) {
    let mut shown = 0;
    for (i, record) in records.iter().enumerate() {
        if !style_passes(record, filter) {
            continue;
        }
        let id = item_id(record, fields::style::CATEGORY, "style", i);
        println!(
            "{} {} [{} / {}]",
            status_mark(set, &id),
            record.get_or_empty(fields::style::CATEGORY),
            record.get_or_empty(fields::style::TYPE),
            record.get_or_empty(fields::style::ERA),
        );
        let keywords = record.get_or_empty(fields::style::KEYWORDS);
        if !keywords.is_empty() {
            println!("    {}", keywords);
        }
        let hexes = extract_hex_colors(record.get_or_empty(fields::style::PRIMARY_COLORS));
        if !hexes.is_empty() {
            println!("    配色: {}", hexes.join(" "));
        }
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// 配色パレット一覧を表示（WCAG評価付き）
pub fn render_colors(records: &[Record], filter: &ListFilter, set: &SelectionSet) {
    let mut shown = 0;
    for (i, record) in records.iter().enumerate() {
        if !color_passes(record, filter) {
            continue;
        }
        let id = item_id(record, fields::color::NAME, "color", i);
        let text = record.get_or_empty(fields::color::TEXT);
        let bg = record.get_or_empty(fields::color::BACKGROUND);
        let rating = wcag_rating(text, bg);
        println!(
            "{} {} [{}] {} {} コントラスト: {} ({})",
            status_mark(set, &id),
            record.get_or_empty(fields::color::NAME),
            record.get_or_empty(fields::color::CATEGORY),
            record.get_or_empty(fields::color::PRIMARY),
            record.get_or_empty(fields::color::SECONDARY),
            rating,
            "⭐".repeat(rating.stars() as usize),
        );
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// タイポグラフィ一覧を表示
pub fn render_typography(records: &[Record], filter: &ListFilter, set: &SelectionSet) {
    let mut shown = 0;
    for (i, record) in records.iter().enumerate() {
        if !matches_search(record, &filter.search) {
            continue;
        }
        let id = item_id(record, fields::typography::PAIRING_NAME, "typography", i);
        println!(
            "{} {} [{}] 見出し: {} / 本文: {}",
            status_mark(set, &id),
            record.get_or_empty(fields::typography::PAIRING_NAME),
            record.get_or_empty(fields::typography::CATEGORY),
            record.get_or_empty(fields::typography::HEADER_FONT),
            record.get_or_empty(fields::typography::BODY_FONT),
        );
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// チャート選択ガイド一覧を表示
pub fn render_charts(records: &[Record], filter: &ListFilter) {
    let mut shown = 0;
    for record in records {
        if !matches_search(record, &filter.search) {
            continue;
        }
        println!(
            "  {} → {} (操作性: {})",
            record.get_or_empty(fields::chart::DATA_TYPE),
            record.get_or_empty(fields::chart::BEST_CHART),
            record.get_or_empty(fields::chart::INTERACTIVE),
        );
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// UXガイドライン一覧を表示
pub fn render_guidelines(records: &[Record], filter: &ListFilter) {
    let mut shown = 0;
    for record in records {
        if !guideline_passes(record, filter) {
            continue;
        }
        println!(
            "  [{}/{}] {} — {}",
            record.get_or_empty(fields::guideline::SEVERITY),
            record.get_or_empty(fields::guideline::PLATFORM),
            record.get_or_empty(fields::guideline::ISSUE),
            record.get_or_empty(fields::guideline::DESCRIPTION),
        );
        let do_text = record.get_or_empty(fields::guideline::DO);
        if !do_text.is_empty() {
            println!("    Do: {}", do_text);
        }
        let dont_text = record.get_or_empty(fields::guideline::DONT);
        if !dont_text.is_empty() {
            println!("    Don't: {}", dont_text);
        }
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// ダークパターン事例一覧を表示
pub fn render_cases(records: &[Record], filter: &ListFilter) {
    let mut shown = 0;
    for record in records {
        if !case_passes(record, filter) {
            continue;
        }
        println!(
            "  [{}] {} / {} ({} / {})",
            record.get_or_empty(fields::case::SEVERITY),
            record.get_or_empty(fields::case::PATTERN_TYPE),
            record.get_or_empty(fields::case::SUBTYPE),
            record.get_or_empty(fields::case::PLATFORM),
            record.get_or_empty(fields::case::COMPONENT),
        );
        let observation = record.get_or_empty(fields::case::OBSERVATION);
        if !observation.is_empty() {
            println!("    観察: {}", observation);
        }
        let remediation = record.get_or_empty(fields::case::REMEDIATION);
        if !remediation.is_empty() {
            println!("    改善: {}", remediation);
        }
        shown += 1;
    }
    println!("\n{}件 / 全{}件", shown, records.len());
}

/// 技術スタック一覧を表示
pub fn render_stacks(library: &Library, filter: &ListFilter, set: &SelectionSet) {
    for stack in &library.stacks {
        let id = &stack.name;
        println!(
            "{} {} ({}件)",
            status_mark(set, id),
            stack.name,
            stack.records.len()
        );
        for record in &stack.records {
            if !matches_search(record, &filter.search) {
                continue;
            }
            // スタックCSVは見出し列が先頭とは限らないので先頭フィールドを使う
            if let Some(first) = record.field_names().next() {
                println!("    {}", record.get_or_empty(first));
            }
        }
    }
    println!("\n全{}スタック", library.stacks.len());
}

/// データセット統計を表示
pub fn render_stats(library: &Library, set: &SelectionSet) {
    println!("📊 データセット統計\n");
    println!("  スタイル:       {}件", library.styles.len());
    println!("  配色パレット:   {}件", library.colors.len());
    println!("  タイポグラフィ: {}件", library.typography.len());
    println!("  チャート:       {}件", library.charts.len());
    println!("  プロンプト:     {}件", library.prompts.len());
    println!("  ガイドライン:   {}件", library.guidelines.len());
    if !library.cases.is_empty() {
        println!("  事例:           {}件", library.cases.len());
    }
    println!("  スタック:       {}種", library.stacks.len());
    println!("\n  記録済み選択:   {}件", set.len());

    // 絞り込みに使える値の一覧
    println!("\n🔎 フィルタ候補");
    println!(
        "  styles --style-type: {}",
        unique_values(&library.styles, fields::style::TYPE).join(", ")
    );
    println!(
        "  styles --era: {}",
        unique_values(&library.styles, fields::style::ERA).join(", ")
    );
    println!(
        "  colors --category: {}",
        unique_values(&library.colors, fields::color::CATEGORY).join(", ")
    );
    println!(
        "  guidelines --severity: {}",
        unique_values(&library.guidelines, fields::guideline::SEVERITY).join(", ")
    );
    println!(
        "  guidelines --platform: {}",
        unique_values(&library.guidelines, fields::guideline::PLATFORM).join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_ref_common::record::parse_table;

    fn styles() -> Vec<Record> {
        parse_table(
            "Style Category,Type,Era/Origin,Keywords\n\
             Minimalism,Layout,1950s,\"clean, simple\"\n\
             Brutalism,Visual,1970s,\"raw, bold\"\n",
        )
    }

    fn colors() -> Vec<Record> {
        parse_table(
            "Name,Category,Primary (Hex),Background (Hex),Text (Hex)\n\
             Neon Night,Dark,#FF0000,#000000,#FFFFFF\n\
             Soft Cloud,Light,#00FFFF,#FFFFFF,#333333\n",
        )
    }

    #[test]
    fn test_style_filter_by_type() {
        let records = styles();
        let filter = ListFilter {
            style_type: Some("Layout".into()),
            ..Default::default()
        };
        assert!(style_passes(&records[0], &filter));
        assert!(!style_passes(&records[1], &filter));
    }

    #[test]
    fn test_style_filter_combines_search_and_era() {
        let records = styles();
        let filter = ListFilter {
            search: "raw".into(),
            era: Some("1970s".into()),
            ..Default::default()
        };
        assert!(!style_passes(&records[0], &filter));
        assert!(style_passes(&records[1], &filter));
    }

    #[test]
    fn test_color_filter_by_harmony() {
        let records = colors();
        // 基準色相0度の補色は180度（シアン）
        let filter = ListFilter {
            harmony: Some(Harmony::Complementary),
            hue: Some(0.0),
            ..Default::default()
        };
        assert!(!color_passes(&records[0], &filter));
        assert!(color_passes(&records[1], &filter));
    }

    #[test]
    fn test_color_filter_harmony_ignored_without_hue() {
        let records = colors();
        let filter = ListFilter {
            harmony: Some(Harmony::Primary),
            ..Default::default()
        };
        assert!(color_passes(&records[0], &filter));
        assert!(color_passes(&records[1], &filter));
    }

    #[test]
    fn test_guideline_filter_by_severity_and_platform() {
        let records = parse_table(
            "Category,Issue,Severity,Platform,Description,Do,Don't\n\
             Forms,Label missing,High,Web,Inputs need labels,Add labels,Rely on placeholder\n\
             Nav,Deep nesting,Low,Mobile,Too many levels,Flatten,Nest deeply\n",
        );
        let filter = ListFilter {
            severity: Some("High".into()),
            platform: Some("Web".into()),
            ..Default::default()
        };
        assert!(guideline_passes(&records[0], &filter));
        assert!(!guideline_passes(&records[1], &filter));
    }

    #[test]
    fn test_case_filter_by_category() {
        let records = parse_table(
            "PatternType,Subtype,Severity,Category,Platform\n\
             Sneaking,Hidden Costs,High,Ecommerce,Web\n\
             Urgency,Countdown,Medium,Travel,Mobile\n",
        );
        let filter = ListFilter {
            category: Some("Travel".into()),
            ..Default::default()
        };
        assert!(!case_passes(&records[0], &filter));
        assert!(case_passes(&records[1], &filter));
    }
}

//! レシピ生成モジュール
//!
//! 採用済みの選択エントリからMarkdown形式のレシピ文書を生成する。
//! 毎回選択状態全体から再計算する純粋な射影であり、差分更新はしない。

use crate::selection::SelectionSet;

/// 選択が空の場合のプレースホルダ
const WAITING_TEXT: &str = "// AI Agent Skill Recipe\n// Status: Waiting for inputs...";

/// レシピ文書を生成
///
/// `date` は YYYY-MM-DD 形式の生成日。
/// 採用済みエントリが1件もない場合は待機プレースホルダを返す。
pub fn recipe_text(set: &SelectionSet, date: &str) -> String {
    let selected = set.selected_by_rank();

    if selected.is_empty() {
        return WAITING_TEXT.to_string();
    }

    let mut md = format!("# AI Agent Skill Recipe\n# Date: {}\n\n", date);

    md.push_str("## 1. Visual System Definition\n");
    md.push_str("> The visual language tokens derived from selected components.\n\n");
    for entry in &selected {
        md.push_str(&format!(
            "- **{}**: {}\n",
            entry.category.label(),
            entry.name
        ));
    }

    md.push_str("\n## 2. Screen Architecture\n");
    md.push_str("- **Layout**: Not specified\n");

    md.push_str("\n## 3. Behavior & Guidelines\n");
    md.push_str("- **Compliance**: WCAG 2.1 AA (Auto-selected)\n");

    md
}

/// エクスポートファイル名（ミリ秒タイムスタンプ入り）
pub fn export_file_name(timestamp_ms: i64) -> String {
    format!("skill_recipe_{}.md", timestamp_ms)
}

/// レシピがエクスポート可能か（採用済みが1件以上あるか）
pub fn is_exportable(set: &SelectionSet) -> bool {
    !set.selected_by_rank().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Category, SelectionSet, Status};

    #[test]
    fn test_recipe_empty_returns_waiting_text() {
        let set = SelectionSet::new();
        let text = recipe_text(&set, "2026-08-27");
        assert!(text.starts_with("// AI Agent Skill Recipe"));
        assert!(!is_exportable(&set));
    }

    #[test]
    fn test_recipe_lists_names_in_rank_order() {
        let mut set = SelectionSet::new();
        set.set(Category::Color, "c1", "Ocean Blue", Some(Status::Selected));
        set.set(Category::Style, "s1", "Minimalism", Some(Status::Selected));

        let text = recipe_text(&set, "2026-08-27");
        assert!(text.contains("# Date: 2026-08-27"));

        let style_pos = text.find("**STYLE**: Minimalism").unwrap();
        let color_pos = text.find("**COLOR**: Ocean Blue").unwrap();
        assert!(style_pos < color_pos);
        assert!(is_exportable(&set));
    }

    #[test]
    fn test_recipe_ignores_rejected() {
        let mut set = SelectionSet::new();
        set.set(Category::Style, "s1", "Swiss", Some(Status::Selected));
        set.set(Category::Stack, "vue", "Vue", Some(Status::Rejected));

        let text = recipe_text(&set, "2026-08-27");
        assert!(text.contains("Swiss"));
        assert!(!text.contains("Vue"));
    }

    #[test]
    fn test_recipe_has_section_headers() {
        let mut set = SelectionSet::new();
        set.set(Category::Style, "s1", "Swiss", Some(Status::Selected));
        let text = recipe_text(&set, "2026-08-27");
        assert!(text.contains("## 1. Visual System Definition"));
        assert!(text.contains("## 2. Screen Architecture"));
        assert!(text.contains("## 3. Behavior & Guidelines"));
    }

    #[test]
    fn test_export_file_name_embeds_timestamp() {
        assert_eq!(export_file_name(1700000000000), "skill_recipe_1700000000000.md");
    }
}

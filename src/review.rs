//! 対話式レビューモジュール
//!
//! データセットの項目を1件ずつ提示し、採用・検討・却下を対話的に記録する。

use design_ref_common::catalog::{item_id, item_name};
use design_ref_common::error::{Error, Result};
use design_ref_common::record::Record;
use design_ref_common::selection::{Category, SelectionSet, Status};
use dialoguer::Input;

/// 対話アクション
pub enum ReviewAction {
    /// 採用として記録
    Select,
    /// 検討中として記録
    Consider,
    /// 却下として記録
    Reject,
    /// 記録を解除
    Remove,
    /// この項目をスキップ
    Skip,
    /// 保存して終了
    Quit,
}

/// カテゴリの項目を1件ずつレビュー
///
/// 変更はSelectionSetに反映して件数を返す。保存は呼び出し元が行う。
pub fn run_interactive_review(
    set: &mut SelectionSet,
    category: Category,
    records: &[Record],
    id_prefix: &str,
    label: &str,
    name_field: &str,
) -> Result<usize> {
    if records.is_empty() {
        println!("✓ レビュー対象の項目がありません");
        return Ok(0);
    }

    println!("📋 {} のレビュー: {}件", category.label(), records.len());
    println!("---");
    println!("操作: [s]採用 [c]検討 [r]却下 [x]解除 [Enter]スキップ [q]終了");
    println!("---\n");

    let mut changed = 0;

    for (count, record) in records.iter().enumerate() {
        let id = item_id(record, name_field, id_prefix, count);
        let name = item_name(record, name_field, label, count);
        let current = set
            .get_status(&id)
            .map(|s| format!(" [現在: {}]", s))
            .unwrap_or_default();

        println!("[{}/{}] {}{}", count + 1, records.len(), name, current);

        match prompt_review_action()? {
            ReviewAction::Select => {
                set.set(category, &id, &name, Some(Status::Selected));
                changed += 1;
                println!("  → 採用\n");
            }
            ReviewAction::Consider => {
                set.set(category, &id, &name, Some(Status::Considered));
                changed += 1;
                println!("  → 検討中\n");
            }
            ReviewAction::Reject => {
                set.set(category, &id, &name, Some(Status::Rejected));
                changed += 1;
                println!("  → 却下\n");
            }
            ReviewAction::Remove => {
                set.set(category, &id, &name, None);
                changed += 1;
                println!("  → 解除\n");
            }
            ReviewAction::Skip => {
                println!("  → スキップ\n");
            }
            ReviewAction::Quit => {
                println!("保存して終了します...");
                break;
            }
        }
    }

    Ok(changed)
}

/// レビュー操作プロンプト
fn prompt_review_action() -> Result<ReviewAction> {
    let input: String = Input::new()
        .with_prompt("操作 (s:採用 c:検討 r:却下 x:解除 q:終了)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    match input.trim() {
        "s" | "S" => Ok(ReviewAction::Select),
        "c" | "C" => Ok(ReviewAction::Consider),
        "r" | "R" => Ok(ReviewAction::Reject),
        "x" | "X" => Ok(ReviewAction::Remove),
        "q" | "Q" => Ok(ReviewAction::Quit),
        _ => Ok(ReviewAction::Skip),
    }
}

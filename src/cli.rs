use clap::{Parser, Subcommand};
use design_ref_common::error::{Error, Result};
use design_ref_common::selection::Status;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "design-ref")]
#[command(about = "デザインリファレンス閲覧・レシピ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データディレクトリ（設定ファイルより優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// データセットを一覧表示
    List {
        /// 対象データセット (styles/colors/typography/charts/prompts/guidelines/cases/stacks)
        #[arg(required = true)]
        dataset: Dataset,

        /// 全フィールド部分一致検索
        #[arg(short, long, default_value = "")]
        search: String,

        /// Typeで絞り込み（styles用）
        #[arg(long)]
        style_type: Option<String>,

        /// Era/Originで絞り込み（styles用）
        #[arg(long)]
        era: Option<String>,

        /// Categoryで絞り込み（colors/cases用）
        #[arg(long)]
        category: Option<String>,

        /// Severityで絞り込み（guidelines/cases用）
        #[arg(long)]
        severity: Option<String>,

        /// Platformで絞り込み（guidelines/cases用）
        #[arg(long)]
        platform: Option<String>,

        /// 基準色相（0-360度、colors用）
        #[arg(long)]
        hue: Option<f64>,

        /// 色相ハーモニー (primary/complementary/triadic/analogous)
        #[arg(long)]
        harmony: Option<String>,
    },

    /// データセット統計を表示
    Stats,

    /// 項目の選択状態を記録
    Select {
        /// カテゴリ (style/color/typography/stack)
        #[arg(required = true)]
        category: String,

        /// 項目ID
        #[arg(required = true)]
        id: String,

        /// 表示名（省略時はIDを使用）
        #[arg(short, long)]
        name: Option<String>,

        /// 状態 (selected/considered/rejected/none)
        #[arg(short, long, default_value = "selected")]
        status: String,
    },

    /// データセットを対話的にレビュー
    Review {
        /// 対象カテゴリ (style/color/typography/stack)
        #[arg(required = true)]
        category: String,
    },

    /// 現在の選択からレシピを表示
    Recipe,

    /// レシピをMarkdownファイルに書き出し
    Export {
        /// 出力先ディレクトリ（省略時はカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 要望文からスタイルと配色を推薦
    Recommend {
        /// 作りたいUIの説明文
        #[arg(required = true)]
        prompt: String,
    },

    /// 選択状態を全消去
    Clear,

    /// 設定を表示/編集
    Config {
        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 一覧表示の対象データセット
#[derive(Clone, Copy, Debug)]
pub enum Dataset {
    Styles,
    Colors,
    Typography,
    Charts,
    Prompts,
    Guidelines,
    Cases,
    Stacks,
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "styles" | "style" => Ok(Dataset::Styles),
            "colors" | "color" => Ok(Dataset::Colors),
            "typography" | "typo" => Ok(Dataset::Typography),
            "charts" | "chart" => Ok(Dataset::Charts),
            "prompts" | "prompt" => Ok(Dataset::Prompts),
            "guidelines" | "guideline" | "ux" => Ok(Dataset::Guidelines),
            "cases" | "case" => Ok(Dataset::Cases),
            "stacks" | "stack" => Ok(Dataset::Stacks),
            _ => Err(format!(
                "不明なデータセット: {}（styles/colors/typography/charts/prompts/guidelines/cases/stacks）",
                s
            )),
        }
    }
}

/// 状態文字列をパース（noneは記録解除）
pub fn parse_status(s: &str) -> Result<Option<Status>> {
    match s.to_lowercase().as_str() {
        "none" | "clear" => Ok(None),
        other => other
            .parse::<Status>()
            .map(Some)
            .map_err(Error::Config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_str() {
        assert!(matches!("styles".parse::<Dataset>(), Ok(Dataset::Styles)));
        assert!(matches!("UX".parse::<Dataset>(), Ok(Dataset::Guidelines)));
        assert!("unknown".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("selected").unwrap(), Some(Status::Selected));
        assert_eq!(parse_status("none").unwrap(), None);
        assert!(parse_status("maybe").is_err());
    }
}

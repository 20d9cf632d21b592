//! データセット読み込みモジュール
//!
//! データディレクトリからカテゴリ別CSVと技術スタック別CSVを読み込む。
//! 必須カテゴリの欠落は致命的エラー（部分表示のフォールバックはしない）。

use design_ref_common::error::{Error, Result};
use design_ref_common::record::{parse_table, Record};
use indicatif::{ProgressBar, ProgressStyle};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

lazy_static! {
    /// スタックファイル名 → 表示名
    static ref STACK_NAME_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("html-tailwind", "HTML + Tailwind");
        m.insert("react", "React");
        m.insert("nextjs", "Next.js");
        m.insert("vue", "Vue");
        m.insert("svelte", "Svelte");
        m.insert("swiftui", "SwiftUI");
        m.insert("react-native", "React Native");
        m.insert("flutter", "Flutter");
        m
    };
}

/// 技術スタック1件分のデータ
#[derive(Debug, Clone)]
pub struct StackData {
    /// 表示名（React、Vueなど）
    pub name: String,
    pub records: Vec<Record>,
}

/// 読み込み済みリファレンスデータ全体
#[derive(Debug, Default)]
pub struct Library {
    pub styles: Vec<Record>,
    pub colors: Vec<Record>,
    pub typography: Vec<Record>,
    pub charts: Vec<Record>,
    pub prompts: Vec<Record>,
    pub guidelines: Vec<Record>,
    /// ダークパターン事例（cases.csvは任意）
    pub cases: Vec<Record>,
    pub stacks: Vec<StackData>,
}

/// 必須カテゴリファイル
const REQUIRED_FILES: &[&str] = &[
    "styles.csv",
    "colors.csv",
    "typography.csv",
    "charts.csv",
    "prompts.csv",
    "ux-guidelines.csv",
];

/// スタックファイル名から表示名を決定
pub fn stack_display_name(basename: &str) -> String {
    if let Some(name) = STACK_NAME_MAP.get(basename) {
        return (*name).to_string();
    }
    // マップ外は単語頭を大文字化
    basename
        .split('-')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_table(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::DataLoad(format!("{}: {}", path.display(), e)))?;
    Ok(parse_table(&content))
}

/// データディレクトリから全データセットを読み込み
pub fn load_library(data_dir: &Path) -> Result<Library> {
    if !data_dir.exists() {
        return Err(Error::DataLoad(format!(
            "データディレクトリがありません: {}",
            data_dir.display()
        )));
    }

    let stack_paths = scan_stack_files(data_dir);

    let pb = ProgressBar::new((REQUIRED_FILES.len() + stack_paths.len()) as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut tables = Vec::new();
    for file in REQUIRED_FILES {
        pb.set_message(file.to_string());
        tables.push(read_table(&data_dir.join(file))?);
        pb.inc(1);
    }

    let mut library = Library::default();
    // REQUIRED_FILESと同順
    library.guidelines = tables.pop().unwrap_or_default();
    library.prompts = tables.pop().unwrap_or_default();
    library.charts = tables.pop().unwrap_or_default();
    library.typography = tables.pop().unwrap_or_default();
    library.colors = tables.pop().unwrap_or_default();
    library.styles = tables.pop().unwrap_or_default();

    // cases.csv は後付けデータセットのため任意
    let cases_path = data_dir.join("cases.csv");
    if cases_path.exists() {
        library.cases = read_table(&cases_path)?;
    }

    for (basename, path) in stack_paths {
        pb.set_message(format!("stacks/{}.csv", basename));
        library.stacks.push(StackData {
            name: stack_display_name(&basename),
            records: read_table(&path)?,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(library)
}

/// stacks/ 直下のCSVを列挙（ファイル名順）
fn scan_stack_files(data_dir: &Path) -> Vec<(String, std::path::PathBuf)> {
    let stacks_dir = data_dir.join("stacks");
    if !stacks_dir.exists() {
        return Vec::new();
    }

    let mut files: Vec<(String, std::path::PathBuf)> = WalkDir::new(&stacks_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "csv")
                .unwrap_or(false)
        })
        .filter_map(|e| {
            e.path()
                .file_stem()
                .map(|s| (s.to_string_lossy().to_string(), e.path().to_path_buf()))
        })
        .collect();

    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_stack_display_name_known() {
        assert_eq!(stack_display_name("html-tailwind"), "HTML + Tailwind");
        assert_eq!(stack_display_name("react-native"), "React Native");
        assert_eq!(stack_display_name("nextjs"), "Next.js");
    }

    #[test]
    fn test_stack_display_name_fallback_title_case() {
        assert_eq!(stack_display_name("solid-js"), "Solid Js");
        assert_eq!(stack_display_name("qwik"), "Qwik");
    }

    #[test]
    fn test_load_library_missing_dir() {
        let result = load_library(Path::new("/nonexistent/data"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_library_missing_required_file() {
        let temp = tempfile::TempDir::new().unwrap();
        // styles.csvのみでは他の必須ファイルが欠けるのでエラー
        fs::write(temp.path().join("styles.csv"), "Style Category\nSwiss\n").unwrap();

        let result = load_library(temp.path());
        assert!(result.is_err());
    }
}

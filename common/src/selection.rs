//! 選択状態管理モジュール
//!
//! ユーザーの選択（採用/検討/却下）をID単位で保持する。
//! 同一IDの再設定は位置を保ったまま置き換え、
//! ステータスなし（none）は該当エントリの削除を意味する。

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// 選択対象のカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Style,
    Color,
    Typography,
    Stack,
}

impl Category {
    /// レシピ表示の固定順位（スタイル→配色→タイポグラフィ→スタック）
    pub fn rank(&self) -> u8 {
        match self {
            Category::Style => 1,
            Category::Color => 2,
            Category::Typography => 3,
            Category::Stack => 4,
        }
    }

    /// レシピ見出し用の表記
    pub fn label(&self) -> &'static str {
        match self {
            Category::Style => "STYLE",
            Category::Color => "COLOR",
            Category::Typography => "TYPOGRAPHY",
            Category::Stack => "STACK",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "style" | "styles" => Ok(Category::Style),
            "color" | "colors" => Ok(Category::Color),
            "typography" | "typo" => Ok(Category::Typography),
            "stack" | "stacks" => Ok(Category::Stack),
            _ => Err(format!(
                "不明なカテゴリ: {}（style/color/typography/stack）",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Style => write!(f, "style"),
            Category::Color => write!(f, "color"),
            Category::Typography => write!(f, "typography"),
            Category::Stack => write!(f, "stack"),
        }
    }
}

/// 選択ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// 採用
    Selected,
    /// 検討中
    Considered,
    /// 却下
    Rejected,
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selected" => Ok(Status::Selected),
            "considered" => Ok(Status::Considered),
            "rejected" => Ok(Status::Rejected),
            _ => Err(format!(
                "不明なステータス: {}（selected/considered/rejected/none）",
                s
            )),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Selected => write!(f, "selected"),
            Status::Considered => write!(f, "considered"),
            Status::Rejected => write!(f, "rejected"),
        }
    }
}

/// 1件の選択エントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionEntry {
    #[serde(rename = "type")]
    pub category: Category,
    pub id: String,
    pub name: String,
    pub status: Status,
    /// 作成/更新時刻（UNIXミリ秒）。表示順には使わない
    pub timestamp: i64,
}

/// 選択エントリの集合（ID単位、挿入順を保持）
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<SelectionEntry>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化済みエントリ列から復元
    pub fn from_entries(entries: Vec<SelectionEntry>) -> Self {
        Self { entries }
    }

    /// 全エントリ（挿入順）
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// 指定IDの現在ステータス
    pub fn get_status(&self, id: &str) -> Option<Status> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.status)
    }

    /// 選択を設定
    ///
    /// - `status` がNoneなら該当エントリを削除（なければ何もしない）
    /// - 既存IDは位置を保ったまま置き換え、新規IDは末尾に追加
    pub fn set(&mut self, category: Category, id: &str, name: &str, status: Option<Status>) {
        let existing = self.entries.iter().position(|e| e.id == id);

        match status {
            None => {
                if let Some(i) = existing {
                    self.entries.remove(i);
                }
            }
            Some(status) => {
                let entry = SelectionEntry {
                    category,
                    id: id.to_string(),
                    name: name.to_string(),
                    status,
                    timestamp: now_millis(),
                };
                match existing {
                    Some(i) => self.entries[i] = entry,
                    None => self.entries.push(entry),
                }
            }
        }
    }

    /// 全エントリを削除
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 採用済みエントリをカテゴリ順位で並べて返す（純粋な射影）
    ///
    /// 同順位は挿入順を保つ（安定ソート）。
    pub fn selected_by_rank(&self) -> Vec<&SelectionEntry> {
        let mut selected: Vec<&SelectionEntry> = self
            .entries
            .iter()
            .filter(|e| e.status == Status::Selected)
            .collect();
        selected.sort_by_key(|e| e.category.rank());
        selected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

//! 選択状態の永続化モジュール
//!
//! 選択エントリ全体を1つのJSONファイルに保存する。
//! スキーマバージョンはファイル名に埋め込む（selections_v1.json）。
//! 読み込み失敗は「選択なし」として扱い、書き込み失敗はエラーで返す。

use design_ref_common::error::{Error, Result};
use design_ref_common::selection::{SelectionEntry, SelectionSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "selections_v1.json";

/// 選択状態ストア
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// 指定ディレクトリ配下にストアを作成
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE_NAME),
        }
    }

    /// 既定の保存先（~/.config/design-ref/）
    pub fn default_store() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(Self::in_dir(&home.join(".config").join("design-ref")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 選択状態を読み込み
    ///
    /// ファイルなし・破損JSONは空の選択として扱う（エラーにしない）。
    pub fn load(&self) -> SelectionSet {
        if !self.path.exists() {
            return SelectionSet::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return SelectionSet::new(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, Vec<SelectionEntry>>(reader) {
            Ok(entries) => SelectionSet::from_entries(entries),
            Err(_) => SelectionSet::new(),
        }
    }

    /// 選択状態全体を保存（1回の書き込み）
    ///
    /// 書き込み失敗は呼び出し元にエラーで返す。
    pub fn save(&self, set: &SelectionSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, set.entries())?;
        Ok(())
    }
}

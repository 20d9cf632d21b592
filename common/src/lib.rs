//! Design Reference Common Library
//!
//! CLIで使用する共有型とユーティリティ:
//! - record: 区切りテキストパーサー
//! - selection: 選択状態管理
//! - recipe: レシピ文書生成
//! - recommend: キーワード推薦
//! - catalog: データセットのフィールド契約とフィルタ
//! - color: 配色ユーティリティ

pub mod catalog;
pub mod color;
pub mod error;
pub mod recipe;
pub mod recommend;
pub mod record;
pub mod selection;

pub use error::{Error, Result};
pub use record::{parse_table, split_line, Record};
pub use selection::{Category, SelectionEntry, SelectionSet, Status};

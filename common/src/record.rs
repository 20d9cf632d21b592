//! 区切りテキストレコードパーサー
//!
//! リファレンスデータ（CSV風の区切りテキスト）を
//! フィールド名→値のレコード列に変換する。
//! 1行目がヘッダー、以降がデータ行。

/// パース済みの1行（フィールド名→値のマッピング、ヘッダー順を保持）
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// フィールド名と値のペアからレコードを構築
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { fields: pairs }
    }

    /// フィールド値を名前で取得（未定義の場合はNone）
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// フィールド値を取得、なければ空文字
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// フィールド名一覧（ヘッダー順）
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// フィールド数
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// テキスト全体をレコード列にパース
///
/// - 空行・空白のみの行は無視
/// - 最初の非空行をヘッダーとして扱う
/// - データ行のフィールド数がヘッダーより少ない場合は
///   末尾フィールドを未定義として許容（エラーにしない）
/// - ヘッダーより多い余剰フィールドは無視
///
/// 不正な入力でも失敗しない（意図的な寛容仕様）。
pub fn parse_table(text: &str) -> Vec<Record> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => split_line(line),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let values = split_line(line);
            let fields = headers
                .iter()
                .zip(values)
                .map(|(h, v)| (h.clone(), v))
                .collect();
            Record { fields }
        })
        .collect()
}

/// 1行をフィールドに分割（ダブルクォート対応）
///
/// クォート内のカンマは区切りとして扱わない。
/// クォート文字自体は出力に含めず、前後の空白を除去する。
/// クォート内クォートのエスケープは対象外。
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_simple() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_quoted_comma() {
        assert_eq!(split_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_line_trims_whitespace() {
        assert_eq!(split_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_empty_fields() {
        assert_eq!(split_line("a,,c"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_parse_table_basic() {
        let text = "x,y,z\n1,2,3\n4,5,6";
        let records = parse_table(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("x"), Some("1"));
        assert_eq!(records[0].get("y"), Some("2"));
        assert_eq!(records[1].get("z"), Some("6"));
    }

    #[test]
    fn test_parse_table_quoted_comma_not_split() {
        let text = "x,y,z\na,\"b,c\",d";
        let records = parse_table(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("x"), Some("a"));
        assert_eq!(records[0].get("y"), Some("b,c"));
        assert_eq!(records[0].get("z"), Some("d"));
    }

    #[test]
    fn test_parse_table_blank_lines_ignored() {
        let with_blanks = "x,y\n\n1,2\n   \n3,4\n";
        let without_blanks = "x,y\n1,2\n3,4";
        let a = parse_table(with_blanks);
        let b = parse_table(without_blanks);
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.get("x"), rb.get("x"));
            assert_eq!(ra.get("y"), rb.get("y"));
        }
    }

    #[test]
    fn test_parse_table_ragged_row_tolerated() {
        let text = "x,y,z\n1,2";
        let records = parse_table(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("x"), Some("1"));
        assert_eq!(records[0].get("y"), Some("2"));
        assert_eq!(records[0].get("z"), None);
    }

    #[test]
    fn test_parse_table_extra_fields_ignored() {
        let text = "x,y\n1,2,3,4";
        let records = parse_table(text);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("y"), Some("2"));
    }

    #[test]
    fn test_parse_table_empty_input() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("\n  \n\n").is_empty());
    }

    #[test]
    fn test_parse_table_header_only() {
        let records = parse_table("x,y,z\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_table_stray_quote_degrades_gracefully() {
        // 閉じられていないクォートでもパニックしない
        let text = "x,y\na,\"bc";
        let records = parse_table(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("x"), Some("a"));
        assert_eq!(records[0].get("y"), Some("bc"));
    }

    #[test]
    fn test_record_from_pairs() {
        let record = Record::from_pairs(vec![("Name".to_string(), "React".to_string())]);
        assert_eq!(record.get("Name"), Some("React"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_field_names_in_header_order() {
        let records = parse_table("c,a,b\n1,2,3");
        let names: Vec<_> = records[0].field_names().collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}

//! キーワードマッチング推薦モジュール
//!
//! ユーザーの要望文とプロンプトテンプレートのキーワードを照合し、
//! 最もスコアの高いスタイルと配色パレットを推薦する。

use crate::catalog::fields;
use crate::record::Record;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// スコア加点の対象となるキーワードの最小文字数（これ以下は無視）
const MIN_KEYWORD_LEN: usize = 3;

/// スタイルカテゴリ完全一致のボーナス
const CATEGORY_BONUS: u32 = 5;

/// 推薦結果
#[derive(Debug)]
pub struct Recommendation<'a> {
    /// 最良一致のプロンプトテンプレート
    pub template: &'a Record,
    /// 一致スコア（0はフォールバック既定）
    pub score: u32,
    /// 推奨パレット（colorsが空ならNone）
    pub palette: Option<&'a Record>,
}

/// テンプレート1件のスコアを計算
///
/// - キーワード欄の各単語（4文字以上）が要望文に含まれていれば+1
/// - スタイルカテゴリ名がそのまま含まれていれば+5
fn score_template(template: &Record, user_prompt: &str) -> u32 {
    let keywords = template.get_or_empty(fields::prompt::KEYWORDS).to_lowercase();

    let mut score = 0;
    for m in WORD_RE.find_iter(&keywords) {
        let word = m.as_str();
        if word.len() > MIN_KEYWORD_LEN && user_prompt.contains(word) {
            score += 1;
        }
    }

    let category = template.get_or_empty(fields::prompt::CATEGORY);
    if !category.is_empty() && user_prompt.contains(&category.to_lowercase()) {
        score += CATEGORY_BONUS;
    }

    score
}

/// フォールバック既定のスタイルカテゴリ
const FALLBACK_CATEGORY: &str = "Minimalism & Swiss Style";

/// 要望文から推薦を生成
///
/// 一致がない場合は既定テンプレート（Minimalism & Swiss Style、
/// なければ先頭）にフォールバック。テンプレートが空ならNone。
pub fn recommend<'a>(
    user_prompt: &str,
    templates: &'a [Record],
    palettes: &'a [Record],
) -> Option<Recommendation<'a>> {
    let prompt = user_prompt.to_lowercase();

    let mut best: Option<&Record> = None;
    let mut max_score = 0;
    for template in templates {
        let score = score_template(template, &prompt);
        if score > max_score {
            max_score = score;
            best = Some(template);
        }
    }

    let template = match best {
        Some(t) => t,
        None => templates
            .iter()
            .find(|t| t.get_or_empty(fields::prompt::CATEGORY) == FALLBACK_CATEGORY)
            .or_else(|| templates.first())?,
    };

    Some(Recommendation {
        template,
        score: max_score,
        palette: match_palette(&prompt, palettes),
    })
}

/// 要望文に合うパレットを選ぶ
///
/// Keywords欄のカンマ区切りトークンが要望文に含まれる最初のパレット、
/// なければ先頭を返す。
fn match_palette<'a>(prompt: &str, palettes: &'a [Record]) -> Option<&'a Record> {
    palettes
        .iter()
        .find(|p| {
            p.get_or_empty(fields::color::KEYWORDS)
                .to_lowercase()
                .split(',')
                .map(str::trim)
                .any(|k| !k.is_empty() && prompt.contains(k))
        })
        .or_else(|| palettes.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_table;

    fn templates() -> Vec<Record> {
        parse_table(
            "Style Category,AI Prompt Keywords (Copy-Paste Ready)\n\
             Minimalism & Swiss Style,\"clean layout, whitespace, grid system\"\n\
             Cyberpunk,\"neon glow, dark terminal, glitch effects\"\n\
             Glassmorphism,\"frosted glass, blur, translucent cards\"\n",
        )
    }

    fn palettes() -> Vec<Record> {
        parse_table(
            "Name,Keywords,Primary (Hex)\n\
             Neon Night,\"neon, dark, cyber\",#0D0D0D\n\
             Soft Cloud,\"calm, pastel, light\",#F5F5F5\n",
        )
    }

    #[test]
    fn test_recommend_matches_keywords() {
        let t = templates();
        let p = palettes();
        let rec = recommend("a dark neon terminal dashboard with glitch", &t, &p).unwrap();
        assert_eq!(
            rec.template.get_or_empty("Style Category"),
            "Cyberpunk"
        );
        assert!(rec.score > 0);
    }

    #[test]
    fn test_recommend_category_bonus_wins() {
        let t = templates();
        let p = palettes();
        // キーワード一致は少ないがカテゴリ名そのものを含む
        let rec = recommend("something in glassmorphism please", &t, &p).unwrap();
        assert_eq!(
            rec.template.get_or_empty("Style Category"),
            "Glassmorphism"
        );
        assert!(rec.score >= 5);
    }

    #[test]
    fn test_recommend_fallback_to_default() {
        let t = templates();
        let p = palettes();
        let rec = recommend("zzz qqq", &t, &p).unwrap();
        assert_eq!(
            rec.template.get_or_empty("Style Category"),
            "Minimalism & Swiss Style"
        );
        assert_eq!(rec.score, 0);
    }

    #[test]
    fn test_recommend_empty_templates() {
        let p = palettes();
        assert!(recommend("anything", &[], &p).is_none());
    }

    #[test]
    fn test_palette_keyword_match() {
        let t = templates();
        let p = palettes();
        let rec = recommend("calm pastel landing page", &t, &p).unwrap();
        let palette = rec.palette.unwrap();
        assert_eq!(palette.get_or_empty("Name"), "Soft Cloud");
    }

    #[test]
    fn test_palette_falls_back_to_first() {
        let t = templates();
        let p = palettes();
        let rec = recommend("zzz", &t, &p).unwrap();
        assert_eq!(rec.palette.unwrap().get_or_empty("Name"), "Neon Night");
    }

    #[test]
    fn test_short_keywords_do_not_score() {
        let t = parse_table(
            "Style Category,AI Prompt Keywords (Copy-Paste Ready)\n\
             Flat Design,\"red, ui, app\"\n",
        );
        let p = palettes();
        // 3文字以下のキーワードのみではスコア0のままフォールバック扱い
        let rec = recommend("red ui app", &t, &p).unwrap();
        assert_eq!(rec.score, 0);
    }
}

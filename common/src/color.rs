//! 配色ユーティリティモジュール
//!
//! HEXカラー抽出、HSL変換、WCAGコントラスト評価、
//! 色相ハーモニー（補色・三色・類似色）によるフィルタ判定。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"#[0-9A-Fa-f]{6}").unwrap();
}

/// 文字列から #RRGGBB 形式のHEXカラーを全て抽出
pub fn extract_hex_colors(text: &str) -> Vec<String> {
    HEX_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// HSL色空間の値（h: 0-360度, s/l: 0-100%）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

fn parse_hex(hex: &str) -> Option<(f64, f64, f64)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f64 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f64 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f64 / 255.0;
    Some((r, g, b))
}

/// HEXカラーをHSLに変換（不正な形式はNone）
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let (r, g, b) = parse_hex(hex)?;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Some(Hsl { h: 0.0, s: 0.0, l: l * 100.0 });
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if (max - g).abs() < f64::EPSILON {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Some(Hsl {
        h: h * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    })
}

/// 相対輝度（WCAG定義）
fn relative_luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    let lin = |c: f64| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b))
}

/// コントラスト比（不正なHEXはNone）
pub fn contrast_ratio(fg: &str, bg: &str) -> Option<f64> {
    let l1 = relative_luminance(fg)?;
    let l2 = relative_luminance(bg)?;
    let (hi, lo) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    Some((hi + 0.05) / (lo + 0.05))
}

/// WCAGコントラスト評価
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagRating {
    /// 7:1以上
    Aaa,
    /// 4.5:1以上
    Aa,
    /// 基準未満
    Fail,
}

impl WcagRating {
    /// 評価の星の数（表示用、1-3）
    pub fn stars(&self) -> u8 {
        match self {
            WcagRating::Aaa => 3,
            WcagRating::Aa => 2,
            WcagRating::Fail => 1,
        }
    }
}

impl std::fmt::Display for WcagRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagRating::Aaa => write!(f, "AAA"),
            WcagRating::Aa => write!(f, "AA"),
            WcagRating::Fail => write!(f, "Fail"),
        }
    }
}

/// テキスト色と背景色のWCAG評価
///
/// どちらかのHEXが不正な場合はAA扱い（元実装の既定値に合わせる）。
pub fn wcag_rating(text_hex: &str, bg_hex: &str) -> WcagRating {
    match contrast_ratio(text_hex, bg_hex) {
        Some(ratio) if ratio >= 7.0 => WcagRating::Aaa,
        Some(ratio) if ratio >= 4.5 => WcagRating::Aa,
        Some(_) => WcagRating::Fail,
        None => WcagRating::Aa,
    }
}

/// 色相ハーモニーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    /// 指定色相そのもの
    Primary,
    /// 補色（+180度）
    Complementary,
    /// 三色配色（±120度）
    Triadic,
    /// 類似色（±30度）
    Analogous,
}

impl std::str::FromStr for Harmony {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Harmony::Primary),
            "complementary" => Ok(Harmony::Complementary),
            "triadic" => Ok(Harmony::Triadic),
            "analogous" => Ok(Harmony::Analogous),
            _ => Err(format!(
                "不明なハーモニー: {}（primary/complementary/triadic/analogous）",
                s
            )),
        }
    }
}

/// 許容色相差（度）
const HUE_TOLERANCE: f64 = 30.0;

fn hue_diff(h: f64, angle: f64) -> f64 {
    let d = (h - angle).abs() % 360.0;
    d.min(360.0 - d)
}

/// 色相ハーモニーフィルタ判定
///
/// `hex` の色相が `target_hue` に対する指定ハーモニー位置の
/// ±30度以内にあるかを返す。不正なHEXは不一致扱い。
pub fn matches_harmony(hex: &str, harmony: Harmony, target_hue: f64) -> bool {
    let hsl = match hex_to_hsl(hex) {
        Some(hsl) => hsl,
        None => return false,
    };
    let within = |angle: f64| hue_diff(hsl.h, angle.rem_euclid(360.0)) <= HUE_TOLERANCE;

    match harmony {
        Harmony::Primary => within(target_hue),
        Harmony::Complementary => within(target_hue + 180.0),
        Harmony::Triadic => {
            within(target_hue) || within(target_hue + 120.0) || within(target_hue + 240.0)
        }
        Harmony::Analogous => {
            within(target_hue) || within(target_hue + 30.0) || within(target_hue - 30.0)
        }
    }
}

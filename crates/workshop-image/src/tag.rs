//! ビルド日付タグの算出

use chrono::{Datelike, Local, NaiveDate};

/// 月と日を2桁ゼロ詰めで連結した4文字のタグを返す
///
/// # Examples
/// - 3月7日 -> `"0307"`
/// - 11月23日 -> `"1123"`
pub fn date_tag(date: NaiveDate) -> String {
    format!("{:02}{:02}", date.month(), date.day())
}

/// 今日の日付からビルドタグを算出
pub fn today_tag() -> String {
    date_tag(Local::now().date_naive())
}

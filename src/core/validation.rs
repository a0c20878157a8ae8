use crate::domain::model::GenerationRequest;
use crate::utils::error::ValidationError;

const MAX_TARGET_SCORE: i64 = 100;

/// 將表單原始輸入轉成請求
///
/// 檢查順序固定，第一個失敗即回傳：缺欄位、準備天數、目標分數。
pub fn validate(
    subject: &str,
    preparation_days_raw: &str,
    target_score_raw: &str,
) -> Result<GenerationRequest, ValidationError> {
    let preparation_days = parse_integer(preparation_days_raw);
    let target_score = parse_integer(target_score_raw);

    let (Some(days), Some(score)) = (preparation_days, target_score) else {
        return Err(ValidationError::MissingField);
    };
    if subject.is_empty() {
        return Err(ValidationError::MissingField);
    }

    if days <= 0 {
        return Err(ValidationError::InvalidDays);
    }
    // 超過 u32 的天數無法送出，視同無效天數
    let preparation_days = u32::try_from(days).map_err(|_| ValidationError::InvalidDays)?;

    if score <= 0 || score > MAX_TARGET_SCORE {
        return Err(ValidationError::InvalidScore);
    }
    let target_score = u8::try_from(score).map_err(|_| ValidationError::InvalidScore)?;

    Ok(GenerationRequest {
        subject: subject.to_string(),
        preparation_days,
        target_score,
    })
}

/// 只接受可帶正負號的純數字；超出 i64 範圍的整數依正負號飽和
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

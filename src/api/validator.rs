// ==========================================
// 机场资费管理系统 - 界面输入校验器
// ==========================================
// 职责: 校验界面提交的原始文本，再交给 Tariff 构造
// 说明: 目的地字符格式只在这里检查，持久化数据加载时不检查
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};

/// 目的地最短字符数
pub const DESTINATION_MIN_CHARS: usize = 2;

/// 目的地最长字符数
pub const DESTINATION_MAX_CHARS: usize = 50;

/// 数值输入的绝对值上限（更严格的业务上限由 Tariff 构造检查）
pub const NUMBER_INPUT_LIMIT: f64 = 1e9;

/// 基础价格字段名
pub const FIELD_BASE_PRICE: &str = "基础价格";

/// 折扣字段名
pub const FIELD_DISCOUNT: &str = "折扣";

/// 校验目的地文本
///
/// # 规则（按顺序）
/// 1. 去除首尾空白后不能为空
/// 2. 不能只由数字和标点组成
/// 3. 长度 2..=50 个字符
/// 4. 只允许字母、空白、连字符、撇号（' 或 ’），且至少一个字母
///
/// # 返回
/// 去除首尾空白后的目的地
pub fn validate_destination(input: &str) -> ValidationResult<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyDestination);
    }
    if value
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_punctuation())
    {
        return Err(ValidationError::DestinationWithoutLetters);
    }

    let len = value.chars().count();
    if len < DESTINATION_MIN_CHARS {
        return Err(ValidationError::DestinationTooShort {
            min: DESTINATION_MIN_CHARS,
        });
    }
    if len > DESTINATION_MAX_CHARS {
        return Err(ValidationError::DestinationTooLong {
            max: DESTINATION_MAX_CHARS,
        });
    }

    if !value.chars().all(is_destination_char) {
        return Err(ValidationError::DestinationInvalidChars);
    }
    if !value.chars().any(char::is_alphabetic) {
        return Err(ValidationError::DestinationWithoutLetters);
    }

    Ok(value.to_string())
}

fn is_destination_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_whitespace() || matches!(c, '-' | '\'' | '’')
}

/// 校验数值文本
///
/// 非空、可解析为有限数、绝对值不超过 1e9、非负。
pub fn validate_number(input: &str, field: &str) -> ValidationResult<f64> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: text.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: text.to_string(),
        });
    }
    if value.abs() > NUMBER_INPUT_LIMIT {
        return Err(ValidationError::NumberOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeField {
            field: field.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_destinations() {
        assert_eq!(validate_destination("  Paris ").unwrap(), "Paris");
        assert_eq!(validate_destination("Saint-Étienne").unwrap(), "Saint-Étienne");
        assert_eq!(validate_destination("L'Aquila").unwrap(), "L'Aquila");
        assert_eq!(validate_destination("Москва").unwrap(), "Москва");
        assert_eq!(validate_destination("Côte d’Ivoire").unwrap(), "Côte d’Ivoire");
    }

    #[test]
    fn test_invalid_destinations() {
        assert_eq!(
            validate_destination("   "),
            Err(ValidationError::EmptyDestination)
        );
        assert_eq!(
            validate_destination("123!"),
            Err(ValidationError::DestinationWithoutLetters)
        );
        assert_eq!(
            validate_destination("A"),
            Err(ValidationError::DestinationTooShort { min: 2 })
        );
        assert_eq!(
            validate_destination(&"a".repeat(51)),
            Err(ValidationError::DestinationTooLong { max: 50 })
        );
        assert_eq!(
            validate_destination("Paris 2"),
            Err(ValidationError::DestinationInvalidChars)
        );
        assert_eq!(
            validate_destination("' -"),
            Err(ValidationError::DestinationWithoutLetters)
        );
    }

    #[test]
    fn test_destination_whitespace_is_ascii_only() {
        assert_eq!(validate_destination("Le\tHavre").unwrap(), "Le\tHavre");
        assert_eq!(
            validate_destination("Paris\u{00A0}Nord"),
            Err(ValidationError::DestinationInvalidChars)
        );
        assert_eq!(
            validate_destination("Tokyo\u{3000}Narita"),
            Err(ValidationError::DestinationInvalidChars)
        );
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number(" 12.5 ", FIELD_BASE_PRICE).unwrap(), 12.5);
        assert_eq!(validate_number("0", FIELD_DISCOUNT).unwrap(), 0.0);
        assert!(matches!(
            validate_number("", FIELD_BASE_PRICE),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            validate_number("abc", FIELD_BASE_PRICE),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_number("NaN", FIELD_BASE_PRICE),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            validate_number("2e9", FIELD_BASE_PRICE),
            Err(ValidationError::NumberOutOfRange { .. })
        ));
        assert!(matches!(
            validate_number("-1", FIELD_DISCOUNT),
            Err(ValidationError::NegativeField { .. })
        ));
    }
}

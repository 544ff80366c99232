// ==========================================
// 机场资费管理系统 - 交换格式编解码
// ==========================================
// 格式: 每行一条 destination|basePrice|discountAmount
// - 金额保留 2 位小数
// - 字段内的 | 不转义（含 | 的目的地不在约定范围内）
// - 读取时忽略空行，数字允许 , 作为小数点
// 红线: 先完整解码，再写库（decode-then-apply）
// ==========================================

use crate::domain::tariff::Tariff;
use crate::importer::error::{FormatError, ImportResult};
use crate::repository::tariff_repo::TariffRepository;
use csv::StringRecord;

/// 字段分隔符
pub const FIELD_SEPARATOR: char = '|';

/// 每行字段数
pub const FIELD_COUNT: usize = 3;

/// 编码为交换格式文本
///
/// 按调用方给定顺序输出，不排序；每行以换行符结尾。
pub fn encode(tariffs: &[Tariff]) -> String {
    let mut text = String::new();
    for tariff in tariffs {
        text.push_str(&format_line(tariff));
        text.push('\n');
    }
    text
}

/// 单条资费的交换格式（不含换行）
pub fn format_line(tariff: &Tariff) -> String {
    format!(
        "{}|{:.2}|{:.2}",
        tariff.destination(),
        tariff.base_price(),
        tariff.discount_amount()
    )
}

/// 解码交换格式文本
///
/// 任意一行出错即整体失败，不返回部分结果。
/// 错误中的行号为原文的物理行号（从 1 开始，空行也计数）。
pub fn decode(text: &str) -> Result<Vec<Tariff>, FormatError> {
    let mut tariffs = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = index as u64 + 1;
        // 字段内的 | 不转义，按分隔符直接切分
        let record: StringRecord = line.split(FIELD_SEPARATOR).collect();
        tariffs.push(decode_record(&record, line_no, line)?);
    }

    tracing::debug!(count = tariffs.len(), "交换文本解码完成");
    Ok(tariffs)
}

fn decode_record(record: &StringRecord, line_no: u64, line: &str) -> Result<Tariff, FormatError> {
    if record.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount {
            line_no,
            field_count: record.len(),
            line: line.to_string(),
        });
    }

    let destination = &record[0];
    let base_price = parse_amount(&record[1], line_no, "basePrice")?;
    let discount_amount = parse_amount(&record[2], line_no, "discountAmount")?;

    Tariff::from_stored(destination, base_price, discount_amount).map_err(|source| {
        FormatError::InvalidRecord {
            line_no,
            line: line.to_string(),
            source,
        }
    })
}

/// 解析金额，, 视为小数点；NaN 与无穷大视为非数字
fn parse_amount(value: &str, line_no: u64, field: &'static str) -> Result<f64, FormatError> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| FormatError::InvalidNumber {
            line_no,
            field,
            value: value.to_string(),
        })
}

/// 以交换文本整体替换资费表
///
/// 先完整解码；解码失败时直接返回，资费表不做任何修改。
///
/// # 返回
/// 导入的资费条数
pub fn replace_store_from(text: &str, repo: &TariffRepository) -> ImportResult<usize> {
    let tariffs = decode(text)?;
    repo.replace_all(&tariffs)?;
    Ok(tariffs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discount::DiscountPolicy;

    fn triples(tariffs: &[Tariff]) -> Vec<(String, f64, f64)> {
        tariffs
            .iter()
            .map(|t| (t.destination().to_string(), t.base_price(), t.final_price()))
            .collect()
    }

    #[test]
    fn test_encode_lines() {
        let tariffs = vec![
            Tariff::new("Paris", 100.0, None).unwrap(),
            Tariff::new("Berlin", 150.0, Some(DiscountPolicy::fixed(60.0).unwrap())).unwrap(),
        ];
        assert_eq!(encode(&tariffs), "Paris|100.00|0.00\nBerlin|150.00|60.00\n");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_writes_effective_discount() {
        let tariff =
            Tariff::new("Oslo", 80.0, Some(DiscountPolicy::fixed(100.0).unwrap())).unwrap();
        assert_eq!(format_line(&tariff), "Oslo|80.00|80.00");
    }

    #[test]
    fn test_decode_roundtrip_preserves_order() {
        let tariffs = vec![
            Tariff::new("Zurich", 300.5, None).unwrap(),
            Tariff::new("Amsterdam", 99.99, Some(DiscountPolicy::fixed(9.99).unwrap())).unwrap(),
            Tariff::new("Lyon", 20.0, Some(DiscountPolicy::fixed(50.0).unwrap())).unwrap(),
        ];
        let decoded = decode(&encode(&tariffs)).unwrap();
        assert_eq!(triples(&decoded), triples(&tariffs));
    }

    #[test]
    fn test_decode_skips_blank_lines_and_accepts_comma() {
        let text = "\nParis|100,50|0,50\n   \n\nRome|10.00|0.00\n";
        let decoded = decode(text).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].base_price(), 100.5);
        assert_eq!(decoded[0].final_price(), 100.0);
        assert_eq!(decoded[1].discount(), DiscountPolicy::NoDiscount);
    }

    #[test]
    fn test_decode_handles_crlf() {
        let decoded = decode("Paris|100.00|10.00\r\nRome|5.00|0.00\r\n").unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].destination(), "Rome");
    }

    #[test]
    fn test_decode_wrong_field_count_names_line() {
        let err = decode("Rome|10.00|0.00\nParis|100.00\n").unwrap_err();
        match &err {
            FormatError::FieldCount {
                line_no,
                field_count,
                line,
            } => {
                assert_eq!(*line_no, 2);
                assert_eq!(*field_count, 2);
                assert_eq!(line, "Paris|100.00");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.line(), Some("Paris|100.00"));
        assert!(err.to_string().contains("Paris|100.00"));
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        let err = decode("Paris|abc|0.00\n").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidNumber {
                field: "basePrice",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_out_of_bounds_record() {
        let err = decode("Paris|20000000.00|0.00\n").unwrap_err();
        assert!(matches!(err, FormatError::InvalidRecord { .. }));

        let err = decode("  |100.00|0.00\n").unwrap_err();
        assert!(matches!(err, FormatError::InvalidRecord { .. }));
    }

    #[test]
    fn test_decode_line_no_counts_blank_lines() {
        let err = decode("\n\nParis|100.00\n").unwrap_err();
        assert!(matches!(err, FormatError::FieldCount { line_no: 3, .. }));

        let err = decode("Rome|10.00|0.00\n   \n\r\nNice|x|0.00\n").unwrap_err();
        assert!(matches!(err, FormatError::InvalidNumber { line_no: 4, .. }));
    }

    #[test]
    fn test_decode_rejects_non_finite_amounts() {
        for text in ["Paris|100.00|NaN\n", "Paris|inf|0.00\n", "Paris|100.00|-infinity\n"] {
            let err = decode(text).unwrap_err();
            assert!(
                matches!(err, FormatError::InvalidNumber { line_no: 1, .. }),
                "{text:?} -> {err:?}"
            );
        }
    }
}

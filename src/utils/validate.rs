use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// 审批备注与学生评语的最大长度（按字符计）
pub const MAX_REMARKS_CHARS: usize = 500;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

/// 校验成绩分数：[0, 100] 闭区间
pub fn validate_score(score: f64) -> Result<(), &'static str> {
    if !score.is_finite() {
        return Err("Score must be a finite number");
    }
    if !(0.0..=100.0).contains(&score) {
        return Err("Score must be between 0 and 100");
    }
    Ok(())
}

/// 校验审批备注/学生评语：非空且不超过 500 字符
pub fn validate_remarks(remarks: &str) -> Result<(), &'static str> {
    if remarks.trim().is_empty() {
        return Err("Remarks must not be empty");
    }
    if remarks.chars().count() > MAX_REMARKS_CHARS {
        return Err("Remarks must not exceed 500 characters");
    }
    Ok(())
}

/// 解析客户端传来的日期（YYYY-MM-DD）
///
/// 先用正则卡格式，再交给 chrono 校验是否是合法日历日。
pub fn parse_client_date(input: &str) -> Result<NaiveDate, &'static str> {
    if !DATE_RE.is_match(input) {
        return Err("Date must be in YYYY-MM-DD format");
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| "Date is not a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_score() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(73.5).is_ok());
        assert!(validate_score(100.0).is_ok());
    }

    #[test]
    fn test_score_out_of_range() {
        assert!(validate_score(-0.5).is_err());
        assert!(validate_score(100.1).is_err());
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_score(f64::INFINITY).is_err());
    }

    #[test]
    fn test_remarks_must_not_be_empty() {
        assert!(validate_remarks("").is_err());
        assert!(validate_remarks("   ").is_err());
        assert!(validate_remarks("请补录第3组的考试成绩").is_ok());
    }

    #[test]
    fn test_remarks_length_limit() {
        let at_limit: String = "字".repeat(MAX_REMARKS_CHARS);
        assert!(validate_remarks(&at_limit).is_ok());

        let over_limit: String = "字".repeat(MAX_REMARKS_CHARS + 1);
        assert!(validate_remarks(&over_limit).is_err());
    }

    #[test]
    fn test_parse_client_date() {
        assert_eq!(
            parse_client_date("2026-03-15"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date"))
        );
        assert!(parse_client_date("2026/03/15").is_err());
        assert!(parse_client_date("2026-3-15").is_err());
        assert!(parse_client_date("2026-02-30").is_err());
        assert!(parse_client_date("not-a-date").is_err());
    }
}

//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 审批工作流的错误分类（校验、非法流转、越权、锁定、并发冲突等）也定义在这里，
//! HTTP 层只做一次映射。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_srsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SRSystemError {
            $($variant(String),)*
        }

        impl SRSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SRSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SRSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SRSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SRSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SRSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_srsystem_errors! {
    Validation("E001", "Validation Error"),
    InvalidTransition("E002", "Invalid Transition Error"),
    Authorization("E003", "Authorization Error"),
    PackageLocked("E004", "Package Locked Error"),
    ConcurrentModification("E005", "Concurrent Modification Error"),
    FutureDate("E006", "Future Date Error"),
    RosterMismatch("E007", "Roster Mismatch Error"),
    NotFound("E008", "Resource Not Found"),
    DatabaseConfig("E009", "Database Configuration Error"),
    DatabaseConnection("E010", "Database Connection Error"),
    DatabaseOperation("E011", "Database Operation Error"),
    CacheConnection("E012", "Cache Connection Error"),
    CachePluginNotFound("E013", "Cache Plugin Not Found"),
    Serialization("E014", "Serialization Error"),
    DateParse("E015", "Date Parse Error"),
    Authentication("E016", "Authentication Error"),
}

impl SRSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SRSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SRSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SRSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        SRSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SRSystemError {
    fn from(err: std::io::Error) -> Self {
        SRSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SRSystemError {
    fn from(err: serde_json::Error) -> Self {
        SRSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SRSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SRSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SRSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SRSystemError::validation("test").code(), "E001");
        assert_eq!(SRSystemError::invalid_transition("test").code(), "E002");
        assert_eq!(SRSystemError::package_locked("test").code(), "E004");
        assert_eq!(SRSystemError::concurrent_modification("test").code(), "E005");
        assert_eq!(SRSystemError::future_date("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SRSystemError::invalid_transition("test").error_type(),
            "Invalid Transition Error"
        );
        assert_eq!(
            SRSystemError::roster_mismatch("test").error_type(),
            "Roster Mismatch Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SRSystemError::validation("Score out of range");
        assert_eq!(err.message(), "Score out of range");
    }

    #[test]
    fn test_format_simple() {
        let err = SRSystemError::package_locked("package 3 is submitted");
        let formatted = err.format_simple();
        assert!(formatted.contains("Package Locked Error"));
        assert!(formatted.contains("package 3"));
    }
}

//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod feedback;
mod grades;
mod history;
mod notifications;
mod packages;
mod roster;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SRSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SRSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SRSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SRSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SRSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use chrono::NaiveDate;

use crate::models::{
    attendance::{entities::AttendanceRecord, requests::AttendanceEntry},
    feedback::{entities::StudentFeedback, requests::RecordFeedbackRequest},
    grades::{
        entities::GradeComponent,
        requests::{GradeListQuery, RecordGradeRequest},
        responses::GradeListResponse,
    },
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    packages::entities::{
        ApprovalAction, ApprovalHistoryEntry, GradingPeriod, PackageStatus, QuarterPackage,
    },
    sections::entities::{Section, Student},
    users::entities::{ActorContext, User},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_actor_context(&self, user_id: i64) -> Result<Option<ActorContext>> {
        self.get_actor_context_impl(user_id).await
    }

    // 名册模块
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(section_id).await
    }

    async fn list_active_students(&self, section_id: i64) -> Result<Vec<Student>> {
        self.list_active_students_impl(section_id).await
    }

    // 成绩包模块
    async fn get_package_by_id(&self, package_id: i64) -> Result<Option<QuarterPackage>> {
        self.get_package_by_id_impl(package_id).await
    }

    async fn get_package_by_scope(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
    ) -> Result<Option<QuarterPackage>> {
        self.get_package_by_scope_impl(section_id, subject_id, period)
            .await
    }

    async fn find_or_create_package(
        &self,
        section_id: i64,
        subject_id: Option<i64>,
        period: GradingPeriod,
        owner_id: i64,
    ) -> Result<QuarterPackage> {
        self.find_or_create_package_impl(section_id, subject_id, period, owner_id)
            .await
    }

    async fn submit_package(
        &self,
        package_id: i64,
        actor: &ActorContext,
    ) -> Result<QuarterPackage> {
        self.submit_package_impl(package_id, actor).await
    }

    async fn transition_package(
        &self,
        package_id: i64,
        expected: PackageStatus,
        target: PackageStatus,
        action: ApprovalAction,
        actor: &ActorContext,
        remarks: Option<String>,
        clear_submitted_at: bool,
    ) -> Result<QuarterPackage> {
        self.transition_package_impl(
            package_id,
            expected,
            target,
            action,
            actor,
            remarks,
            clear_submitted_at,
        )
        .await
    }

    // 成绩模块
    async fn upsert_grade_component(
        &self,
        recorded_by: i64,
        req: RecordGradeRequest,
    ) -> Result<GradeComponent> {
        self.upsert_grade_component_impl(recorded_by, req).await
    }

    async fn list_grade_components(&self, query: GradeListQuery) -> Result<GradeListResponse> {
        self.list_grade_components_impl(query).await
    }

    // 评语模块
    async fn upsert_feedback(
        &self,
        recorded_by: i64,
        req: RecordFeedbackRequest,
    ) -> Result<StudentFeedback> {
        self.upsert_feedback_impl(recorded_by, req).await
    }

    // 考勤模块
    async fn record_attendance_day(
        &self,
        recorded_by: i64,
        section_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<Vec<AttendanceRecord>> {
        self.record_attendance_day_impl(recorded_by, section_id, date, entries)
            .await
    }

    async fn list_attendance_for_day(
        &self,
        section_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_for_day_impl(section_id, date).await
    }

    // 审批历史模块
    async fn list_approval_history(&self, package_id: i64) -> Result<Vec<ApprovalHistoryEntry>> {
        self.list_approval_history_impl(package_id).await
    }

    // 通知模块
    async fn create_notifications_batch(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<Vec<Notification>> {
        self.create_notifications_batch_impl(reqs).await
    }
}

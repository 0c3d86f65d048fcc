//! 考勤台账存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{Result, SRSystemError};
use crate::models::attendance::{entities::AttendanceRecord, requests::AttendanceEntry};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 整班单日考勤写入
    ///
    /// 逐行 upsert：(学生, 班级, 日期) 已有记录则覆盖状态，没有则插入。
    /// 整批在一个事务里完成，要么全部落库要么全部回滚。
    pub async fn record_attendance_day_impl(
        &self,
        recorded_by: i64,
        section_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<Vec<AttendanceRecord>> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SRSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let outcome =
            Self::upsert_day_in_txn(&txn, recorded_by, section_id, &date_str, entries).await;

        match outcome {
            Ok(()) => {
                txn.commit()
                    .await
                    .map_err(|e| SRSystemError::database_operation(format!("提交事务失败: {e}")))?;
                self.list_attendance_for_day_impl(section_id, date).await
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn upsert_day_in_txn<C: ConnectionTrait>(
        txn: &C,
        recorded_by: i64,
        section_id: i64,
        date_str: &str,
        entries: &[AttendanceEntry],
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        for entry in entries {
            let existing = AttendanceRecords::find()
                .filter(Column::StudentId.eq(entry.student_id))
                .filter(Column::SectionId.eq(section_id))
                .filter(Column::Date.eq(date_str))
                .one(txn)
                .await
                .map_err(|e| SRSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

            match existing {
                Some(row) => {
                    let model = ActiveModel {
                        id: Set(row.id),
                        status: Set(entry.status.to_string()),
                        recorded_by: Set(recorded_by),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.update(txn).await.map_err(|e| {
                        SRSystemError::database_operation(format!("更新考勤记录失败: {e}"))
                    })?;
                }
                None => {
                    let model = ActiveModel {
                        student_id: Set(entry.student_id),
                        section_id: Set(section_id),
                        date: Set(date_str.to_string()),
                        status: Set(entry.status.to_string()),
                        recorded_by: Set(recorded_by),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(txn).await.map_err(|e| {
                        SRSystemError::database_operation(format!("写入考勤记录失败: {e}"))
                    })?;
                }
            }
        }

        Ok(())
    }

    /// 查询某班某日考勤（按学生ID升序）
    pub async fn list_attendance_for_day_impl(
        &self,
        section_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let rows = AttendanceRecords::find()
            .filter(Column::SectionId.eq(section_id))
            .filter(Column::Date.eq(date_str))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_attendance_record()).collect())
    }
}

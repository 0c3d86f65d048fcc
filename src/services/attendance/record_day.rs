use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::RecordAttendanceDayRequest;
use crate::models::attendance::responses::AttendanceDayResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::parse_client_date;

/// 整班单日考勤录入
/// POST /attendance/days
///
/// 条目必须恰好覆盖该班当前在读学生——缺人、多人、重复都拒绝；
/// 未来日期拒绝；同键重写是幂等覆盖。锁定看班级整体包
/// （subject_id 为空的那一个）。
pub async fn record_day(
    service: &AttendanceService,
    request: &HttpRequest,
    data: RecordAttendanceDayRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    // 日期格式
    let date = match parse_client_date(&data.date) {
        Ok(date) => date,
        Err(reason) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                reason,
            )));
        }
    };

    // 未来日期拒绝，不写任何记录
    let today = chrono::Utc::now().date_naive();
    if date > today {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FutureDate,
            format!("不能为未来日期 {date} 录入考勤"),
        )));
    }

    // 班级必须存在
    match storage.get_section_by_id(data.section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                format!("班级 {} 不存在", data.section_id),
            )));
        }
        Err(e) => {
            error!("Failed to query section: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    }

    // 覆盖校验：条目集合必须与在读名册完全一致
    let roster = match storage.list_active_students(data.section_id).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to load roster: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询名册失败: {e}"),
                )),
            );
        }
    };

    let roster_ids: HashSet<i64> = roster.iter().map(|s| s.id).collect();
    let mut entry_ids: HashSet<i64> = HashSet::new();
    for entry in &data.entries {
        if !entry_ids.insert(entry.student_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RosterMismatch,
                format!("学生 {} 在条目中出现了多次", entry.student_id),
            )));
        }
    }

    if let Some(missing) = roster_ids.iter().find(|id| !entry_ids.contains(*id)) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RosterMismatch,
            format!("缺少在读学生 {missing} 的考勤条目"),
        )));
    }
    if let Some(extra) = entry_ids.iter().find(|id| !roster_ids.contains(*id)) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RosterMismatch,
            format!("学生 {extra} 不在该班级的在读名册中"),
        )));
    }

    // 编辑锁：看班级整体包（考勤不挂科目）
    match storage
        .get_package_by_scope(data.section_id, None, data.grading_period)
        .await
    {
        Ok(Some(pkg)) if !pkg.status.is_editable() => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::PackageLocked,
                format!("成绩包当前状态为 {}，不允许修改考勤", pkg.status),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to check package lock: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩包失败: {e}"),
                )),
            );
        }
    }

    match storage
        .record_attendance_day(user_id, data.section_id, date, &data.entries)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceDayResponse { items },
            "考勤已保存",
        ))),
        Err(e) => {
            error!("Failed to record attendance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存考勤失败: {e}"),
                )),
            )
        }
    }
}

//! 审批状态机
//!
//! 成绩包的全部状态流转集中在这一张表里，服务层和前端都只消费
//! 它的结果，不在别处做状态判断。班主任审批的自动转交也在这里
//! 以纯函数表达，而不是由调用方传开关。

use crate::errors::{Result, SRSystemError};
use crate::models::packages::entities::{ApprovalAction, PackageStatus};
use crate::models::users::entities::{ActorContext, UserRole};

/// 流转所需的执行者上下文
pub struct TransitionContext<'a> {
    pub actor: &'a ActorContext,
    pub package_section_id: i64,
}

/// 审批落点路由
///
/// 班主任审批自己班级（行政班）的成绩包时自动转交教务复核；
/// 审批其他班级（仅任课）的包、或教务直接审批时，落点为 Approved。
/// 这是路由规则而不是独立的审批动作，历史里记录的动作仍是 Approve。
pub fn approve_target(
    actor_role: &UserRole,
    actor_advisory_section_id: Option<i64>,
    package_section_id: i64,
) -> PackageStatus {
    if *actor_role == UserRole::Teacher && actor_advisory_section_id == Some(package_section_id) {
        PackageStatus::ForwardedToAdmin
    } else {
        PackageStatus::Approved
    }
}

/// 流转表：(当前状态, 动作) -> 目标状态
///
/// 不在表里的组合一律 InvalidTransition，Published 是终态。
pub fn next_state(
    current: PackageStatus,
    action: ApprovalAction,
    ctx: &TransitionContext<'_>,
) -> Result<PackageStatus> {
    use ApprovalAction::*;
    use PackageStatus::*;

    match (current, action) {
        (Draft, Submit) | (Returned, Submit) => Ok(Submitted),
        (Submitted, Approve) => Ok(approve_target(
            &ctx.actor.role,
            ctx.actor.advisory_section_id,
            ctx.package_section_id,
        )),
        (ForwardedToAdmin, Approve) => Ok(Approved),
        (Submitted, Return) => Ok(Returned),
        (Approved, Publish) => Ok(Published),
        (current, action) => Err(SRSystemError::invalid_transition(format!(
            "状态 {current} 不允许执行 {action}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(advisory: Option<i64>) -> ActorContext {
        ActorContext {
            id: 11,
            role: UserRole::Teacher,
            advisory_section_id: advisory,
        }
    }

    fn admin() -> ActorContext {
        ActorContext {
            id: 99,
            role: UserRole::Admin,
            advisory_section_id: None,
        }
    }

    fn ctx<'a>(actor: &'a ActorContext, section_id: i64) -> TransitionContext<'a> {
        TransitionContext {
            actor,
            package_section_id: section_id,
        }
    }

    #[test]
    fn test_submit_from_draft_and_returned() {
        let actor = teacher(None);
        let c = ctx(&actor, 1);
        assert_eq!(
            next_state(PackageStatus::Draft, ApprovalAction::Submit, &c).unwrap(),
            PackageStatus::Submitted
        );
        assert_eq!(
            next_state(PackageStatus::Returned, ApprovalAction::Submit, &c).unwrap(),
            PackageStatus::Submitted
        );
    }

    #[test]
    fn test_approve_routes_to_admin_for_advisory_section() {
        // 班主任审批自己行政班的包 -> 自动转交教务
        let adviser = teacher(Some(7));
        let c = ctx(&adviser, 7);
        assert_eq!(
            next_state(PackageStatus::Submitted, ApprovalAction::Approve, &c).unwrap(),
            PackageStatus::ForwardedToAdmin
        );
    }

    #[test]
    fn test_approve_direct_for_non_advisory_section() {
        // 同一个班主任审批仅任课班级的包 -> 直接通过
        let adviser = teacher(Some(7));
        let c = ctx(&adviser, 8);
        assert_eq!(
            next_state(PackageStatus::Submitted, ApprovalAction::Approve, &c).unwrap(),
            PackageStatus::Approved
        );
    }

    #[test]
    fn test_admin_approve_never_forwards() {
        let a = admin();
        let c = ctx(&a, 7);
        assert_eq!(
            next_state(PackageStatus::Submitted, ApprovalAction::Approve, &c).unwrap(),
            PackageStatus::Approved
        );
        assert_eq!(
            next_state(PackageStatus::ForwardedToAdmin, ApprovalAction::Approve, &c).unwrap(),
            PackageStatus::Approved
        );
    }

    #[test]
    fn test_return_only_from_submitted() {
        let a = admin();
        let c = ctx(&a, 1);
        assert_eq!(
            next_state(PackageStatus::Submitted, ApprovalAction::Return, &c).unwrap(),
            PackageStatus::Returned
        );
        for state in [
            PackageStatus::Draft,
            PackageStatus::Returned,
            PackageStatus::Approved,
            PackageStatus::ForwardedToAdmin,
            PackageStatus::Published,
        ] {
            assert!(next_state(state, ApprovalAction::Return, &c).is_err());
        }
    }

    #[test]
    fn test_publish_only_from_approved() {
        let a = admin();
        let c = ctx(&a, 1);
        assert_eq!(
            next_state(PackageStatus::Approved, ApprovalAction::Publish, &c).unwrap(),
            PackageStatus::Published
        );
        for state in [
            PackageStatus::Draft,
            PackageStatus::Submitted,
            PackageStatus::Returned,
            PackageStatus::ForwardedToAdmin,
            PackageStatus::Published,
        ] {
            assert!(next_state(state, ApprovalAction::Publish, &c).is_err());
        }
    }

    #[test]
    fn test_published_is_terminal() {
        let a = admin();
        let c = ctx(&a, 1);
        for action in [
            ApprovalAction::Submit,
            ApprovalAction::Approve,
            ApprovalAction::Return,
            ApprovalAction::Forward,
            ApprovalAction::Publish,
        ] {
            assert!(next_state(PackageStatus::Published, action, &c).is_err());
        }
    }

    #[test]
    fn test_transition_table_is_exhaustive() {
        // 穷举全部 (状态, 动作) 组合，合法集合必须恰好是表里列出的那几条
        let actor = teacher(None);
        let c = ctx(&actor, 1);
        let states = [
            PackageStatus::Draft,
            PackageStatus::Submitted,
            PackageStatus::Returned,
            PackageStatus::Approved,
            PackageStatus::ForwardedToAdmin,
            PackageStatus::Published,
        ];
        let actions = [
            ApprovalAction::Submit,
            ApprovalAction::Approve,
            ApprovalAction::Return,
            ApprovalAction::Forward,
            ApprovalAction::Publish,
        ];

        let allowed = [
            (PackageStatus::Draft, ApprovalAction::Submit),
            (PackageStatus::Returned, ApprovalAction::Submit),
            (PackageStatus::Submitted, ApprovalAction::Approve),
            (PackageStatus::ForwardedToAdmin, ApprovalAction::Approve),
            (PackageStatus::Submitted, ApprovalAction::Return),
            (PackageStatus::Approved, ApprovalAction::Publish),
        ];

        for state in states {
            for action in actions {
                let result = next_state(state, action, &c);
                if allowed.contains(&(state, action)) {
                    assert!(result.is_ok(), "{state}/{action} 应当合法");
                } else {
                    assert!(result.is_err(), "{state}/{action} 应当非法");
                }
            }
        }
    }

    #[test]
    fn test_routing_is_pure_function_of_inputs() {
        // 没有行政班的教师不触发转交
        assert_eq!(
            approve_target(&UserRole::Teacher, None, 3),
            PackageStatus::Approved
        );
        // 行政班不同也不触发
        assert_eq!(
            approve_target(&UserRole::Teacher, Some(2), 3),
            PackageStatus::Approved
        );
        // 行政班一致才转交
        assert_eq!(
            approve_target(&UserRole::Teacher, Some(3), 3),
            PackageStatus::ForwardedToAdmin
        );
        // 教务永不转交
        assert_eq!(
            approve_target(&UserRole::Admin, None, 3),
            PackageStatus::Approved
        );
    }
}

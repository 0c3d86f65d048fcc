//! 成绩聚合
//!
//! 最终成绩 = 书面×0.30 + 课堂表现×0.50 + 考试×0.20，四舍五入取整。
//! 权重是评分政策，集中定义在这里，调整政策只改这一处。

/// 书面作业权重
pub const WRITTEN_WEIGHT: f64 = 0.30;
/// 课堂表现权重
pub const PERFORMANCE_WEIGHT: f64 = 0.50;
/// 考试权重
pub const EXAM_WEIGHT: f64 = 0.20;

/// 计算最终成绩
///
/// 调用前提：三个分项都已录入且都在 [0, 100] 内（录入时已校验）。
/// 半分向上取整（round-half-up），结果仍落在 [0, 100]。
pub fn compute_final(written: f64, performance: f64, exam: f64) -> f64 {
    let weighted = written * WRITTEN_WEIGHT + performance * PERFORMANCE_WEIGHT + exam * EXAM_WEIGHT;
    (weighted + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = WRITTEN_WEIGHT + PERFORMANCE_WEIGHT + EXAM_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_example() {
        // 80*0.3 + 90*0.5 + 70*0.2 = 24 + 45 + 14 = 83
        assert_eq!(compute_final(80.0, 90.0, 70.0), 83.0);
    }

    #[test]
    fn test_round_half_up() {
        // 85*0.3 + 84*0.5 + 85*0.2 = 25.5 + 42 + 17 = 84.5 -> 85
        assert_eq!(compute_final(85.0, 84.0, 85.0), 85.0);
        // 84*0.3 + 84*0.5 + 84*0.2 = 84.0 -> 84
        assert_eq!(compute_final(84.0, 84.0, 84.0), 84.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(compute_final(0.0, 0.0, 0.0), 0.0);
        assert_eq!(compute_final(100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn test_monotonic_in_each_component() {
        // 每个分项单调不减：提高任一分项不会降低最终成绩
        let samples = [0.0, 10.0, 33.0, 50.0, 66.5, 75.0, 99.0, 100.0];
        for &w in &samples {
            for &p in &samples {
                for &e in &samples {
                    let base = compute_final(w, p, e);
                    if w < 100.0 {
                        assert!(compute_final(w + 0.5, p, e) >= base);
                    }
                    if p < 100.0 {
                        assert!(compute_final(w, p + 0.5, e) >= base);
                    }
                    if e < 100.0 {
                        assert!(compute_final(w, p, e + 0.5) >= base);
                    }
                }
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let first = compute_final(77.0, 81.0, 64.0);
        let second = compute_final(77.0, 81.0, 64.0);
        assert_eq!(first, second);
    }
}

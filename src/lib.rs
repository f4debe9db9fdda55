//! # danci-progress - 学习进度核心引擎
//!
//! 本 crate 提供纯 Rust 实现的学习进度算法:
//!
//! - **Accuracy / Mastery Scoring** - 正确率与综合掌握度评分
//! - **Status Transitions** - 学习状态的有序判定规则
//! - **Spaced Repetition** - 间隔复习调度与优先级排序
//! - **Typing Similarity** - 拼写输入的位置匹配判定
//!
//! ## 设计理念
//!
//! 本 crate 的设计目标:
//! - **纯函数** - 无 I/O、无共享状态，输入相同则输出相同
//! - **可复用** - 持久化与会话控制由调用方负责
//! - **充分测试** - 所有规则都有完整的单元测试与属性测试
//! - **全函数** - 核心评分函数对合法输入永不 panic
//!
//! ## 模块结构
//!
//! - [`metrics`] - 正确率与掌握度评分
//! - [`status`] - 学习状态判定 (有序规则表)
//! - [`schedule`] - 间隔复习调度 (到期判断、优先级)
//! - [`typing`] - 拼写相似度判定
//! - [`session`] - 单次练习的进度折叠
//! - [`stats`] - 批量聚合统计
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use danci_progress::{apply_attempt, AttemptRecord, TypingOptions, WordProgress};
//!
//! let progress = WordProgress::new();
//! let attempt = AttemptRecord {
//!     user_input: "apple".to_string(),
//!     target_word: "apple".to_string(),
//!     response_time_ms: 1800,
//!     at: chrono::Utc::now(),
//! };
//!
//! let (updated, feedback) = apply_attempt(&progress, &attempt, &TypingOptions::default());
//! assert!(feedback.is_correct);
//! assert_eq!(updated.total_attempts, 1);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod metrics;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod status;
pub mod types;
pub mod typing;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::{AttemptRecord, LearningStatus, ProgressError, WordProgress};

/// 重新导出评分函数
pub use metrics::{calculate_accuracy, calculate_mastery_score};

/// 重新导出状态判定
pub use status::determine_learning_status;

/// 重新导出复习调度
pub use schedule::{calculate_next_review_date, is_due, rank_due, review_priority};

/// 重新导出拼写判定
pub use typing::{check_typing, TypingJudgment, TypingOptions};

/// 重新导出进度折叠
pub use session::apply_attempt;

/// 重新导出批量统计
pub use stats::{aggregate, ProgressStats};

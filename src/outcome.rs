use std::time::Duration;

use thiserror::Error;

/// 模拟耗时操作的固定延迟，所有交付风格共用同一个时长
pub const DELAY: Duration = Duration::from_secs(1);

/// 成功标记：不携带任何字段的透明成功值
///
/// 它唯一的作用是表明"操作成功了"。每次成功完成都新建一个，
/// 除了存在本身没有任何身份。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker;

/// 失败值：不携带任何诊断信息的透明错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("delayed operation failed")]
pub struct Failure;

/// 一次操作的结果：`Marker` 与 `Failure` 严格二选一
///
/// 注意对比：
/// - `Outcome`（即 `Result`）在类型层面就排除了"两者都有"和"两者都无"，
///   流风格和 Result 风格用的是它；
/// - 回调风格和可选对风格用的是 `(Option<Marker>, Option<Failure>)`，
///   二选一只靠约定维持，类型本身允许全部四种组合。
///
/// 这个差异正是四种交付风格要展示的核心对比。
pub type Outcome = Result<Marker, Failure>;

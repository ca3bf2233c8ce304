use tracing::debug;

use crate::outcome::{Failure, Marker};
use crate::styles::delayed_step;

/// 可选对风格：async fn 直接把 `(Option<Marker>, Option<Failure>)` 当返回值
///
/// - 单一返回路径，容易拆出辅助函数
/// - 内部故障在本地捕获并转成 `(None, Some(Failure))`，绝不向调用方抛出
/// - 二选一只是语义约定：类型允许"都有"和"都无"，实现必须自己守住
pub async fn deliver_as_optional_pair() -> (Option<Marker>, Option<Failure>) {
    deliver_as_optional_pair_with(None).await
}

pub(crate) async fn deliver_as_optional_pair_with(
    fault: Option<Failure>,
) -> (Option<Marker>, Option<Failure>) {
    match delayed_step(fault).await {
        Ok(marker) => (Some(marker), None),
        Err(failure) => {
            // 故障就地兜住，重新映射到第二个槽位
            debug!("内部故障被就地捕获");
            (None, Some(failure))
        }
    }
}

use crate::outcome::{Failure, Outcome};
use crate::styles::delayed_step;

/// Result 风格：async fn 返回 `Result<Marker, Failure>`
///
/// - 最简洁，调用顺序符合直觉
/// - 单一返回路径，容易拆出辅助函数
/// - 类型层面保证了值与错误严格二选一
/// - 内部故障用 `?` 原样上抛，调用方要么捕获要么显式忽略
pub async fn deliver_as_result() -> Outcome {
    deliver_as_result_with(None).await
}

pub(crate) async fn deliver_as_result_with(fault: Option<Failure>) -> Outcome {
    let marker = delayed_step(fault).await?;
    Ok(marker)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use tokio::time::timeout;

    use super::*;
    use crate::outcome::{DELAY, Marker};

    #[tokio::test]
    async fn success_returns_marker_after_the_delay() {
        let start = Instant::now();
        let outcome = timeout(DELAY * 2, deliver_as_result())
            .await
            .expect("did not complete within the window");

        assert!(start.elapsed() >= DELAY);
        assert_eq!(outcome, Ok(Marker));
    }

    #[tokio::test]
    async fn fault_propagates_to_the_caller() {
        match deliver_as_result_with(Some(Failure)).await {
            Ok(marker) => panic!("unexpected success: {marker:?}"),
            Err(failure) => assert_eq!(failure, Failure),
        }
    }
}

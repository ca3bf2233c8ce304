use tracing::{debug, error};

use crate::outcome::{Failure, Marker};
use crate::styles::delayed_step;

/// 一次性完成令牌：把"每条退出路径都必须调用回调，且只能调用一次"
/// 从人工约定提升为结构保证
///
/// - 只能调用一次：[`succeed`](Completion::succeed) / [`fail`](Completion::fail)
///   按值消费令牌，第二次调用根本无法编译
/// - 不许忘记调用：令牌被丢弃而没有完成时，Drop 守卫把它当作编程错误
///   上报（error 级日志，debug 构建下直接断言失败），而不是无声无息
struct Completion<F>
where
    F: FnOnce(Option<Marker>, Option<Failure>),
{
    on_complete: Option<F>,
}

impl<F> Completion<F>
where
    F: FnOnce(Option<Marker>, Option<Failure>),
{
    fn new(on_complete: F) -> Self {
        Self {
            on_complete: Some(on_complete),
        }
    }

    fn succeed(mut self, marker: Marker) {
        self.invoke(Some(marker), None);
    }

    fn fail(mut self, failure: Failure) {
        self.invoke(None, Some(failure));
    }

    fn invoke(&mut self, marker: Option<Marker>, failure: Option<Failure>) {
        // take() 之后 Drop 守卫不再报警
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(marker, failure);
        }
    }
}

impl<F> Drop for Completion<F>
where
    F: FnOnce(Option<Marker>, Option<Failure>),
{
    fn drop(&mut self) {
        if self.on_complete.is_some() && !std::thread::panicking() {
            error!("完成令牌被丢弃，回调从未被调用");
            debug_assert!(false, "Completion dropped without being invoked");
        }
    }
}

/// 回调风格：注册一个双槽位回调，延迟结束后恰好调用一次
///
/// - 冗长，结果埋在回调参数里
/// - 类型不阻止"两个槽位都有值"或"两个槽位都空"，
///   二选一全靠实现自律（内部用 [`Completion`] 令牌兜底）
/// - 没有返回值，调用方拿不到任何可以 await 的句柄
/// - 回调必须 `Send + 'static`：捕获的状态只能整体 move 进去，
///   不能借用调用方的栈帧，调用方的生命周期因此不会被挂起的操作拉长
pub fn deliver_via_callback<F>(on_complete: F)
where
    F: FnOnce(Option<Marker>, Option<Failure>) + Send + 'static,
{
    deliver_via_callback_with(None, on_complete);
}

/// 与 [`deliver_via_callback`] 相同，但允许注入一个故障走失败分支
pub(crate) fn deliver_via_callback_with<F>(fault: Option<Failure>, on_complete: F)
where
    F: FnOnce(Option<Marker>, Option<Failure>) + Send + 'static,
{
    let completion = Completion::new(on_complete);
    tokio::spawn(async move {
        match delayed_step(fault).await {
            Ok(marker) => completion.succeed(marker),
            Err(failure) => completion.fail(failure),
        }
        debug!("回调风格交付完成");
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use tokio::sync::oneshot;
    use tokio::time::{sleep, timeout};

    use super::*;
    use crate::outcome::DELAY;

    #[tokio::test]
    async fn invokes_callback_exactly_once_with_marker() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (done_tx, done_rx) = oneshot::channel();

        let counted = Arc::clone(&calls);
        let start = Instant::now();
        deliver_via_callback(move |marker, failure| {
            counted.fetch_add(1, Ordering::SeqCst);
            let _ = done_tx.send((marker, failure));
        });

        let (marker, failure) = timeout(DELAY * 2, done_rx)
            .await
            .expect("callback did not fire within the window")
            .expect("completion signal dropped");

        assert!(start.elapsed() >= DELAY);
        assert!(marker.is_some());
        assert!(failure.is_none());

        // 留出余量，确认不会出现第二次调用
        sleep(DELAY / 2).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn injected_fault_fills_only_the_failure_slot() {
        let (done_tx, done_rx) = oneshot::channel();

        deliver_via_callback_with(Some(Failure), move |marker, failure| {
            let _ = done_tx.send((marker, failure));
        });

        let (marker, failure) = timeout(DELAY * 2, done_rx)
            .await
            .expect("callback did not fire within the window")
            .expect("completion signal dropped");

        assert!(marker.is_none());
        assert!(failure.is_some());
    }
}

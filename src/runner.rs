//! 演示入口：四种交付风格各调用一次，观察并打印结果
//!
//! 这里不承载任何业务逻辑，唯一的义务是：每种风格调用一次、
//! 成功失败两个分支都处理、任何分支都不崩溃。

use futures::{StreamExt, pin_mut};
use tokio::sync::oneshot;
use tracing::debug;

use crate::styles::callback::deliver_via_callback;
use crate::styles::optional_pair::deliver_as_optional_pair;
use crate::styles::result::deliver_as_result;
use crate::styles::stream::deliver_as_stream;

/// 回调风格：结果埋在回调参数里，两个槽位都得检查
pub async fn run_callback_demo() {
    println!("\n=== 回调风格 ===");

    // 回调风格没有可 await 的句柄，这里用 oneshot 把完成信号桥接回
    // async 世界，否则调用方无从得知回调何时发生。
    // 这个桥接本身就是该风格的使用成本之一。
    let (done_tx, done_rx) = oneshot::channel();

    deliver_via_callback(move |marker, failure| {
        match (marker, failure) {
            (Some(marker), None) => println!("收到成功值: {marker:?}"),
            (None, Some(failure)) => println!("收到失败: {failure}"),
            // 类型允许走到这里，靠实现自律保证走不到
            _ => println!("不应该发生：两个槽位同时有值或同时为空"),
        }
        let _ = done_tx.send(());
    });

    if done_rx.await.is_err() {
        println!("完成信号丢失");
    }
}

/// 流风格：订阅前先挂一个组合算子，展示相对回调的增值
pub async fn run_stream_demo() {
    println!("\n=== 流风格 ===");

    // 消费之前可以随意组合，这里把两种结果先映射成展示文本
    let described = deliver_as_stream().map(|outcome| match outcome {
        Ok(marker) => format!("收到成功值: {marker:?}"),
        Err(failure) => format!("收到失败: {failure}"),
    });
    pin_mut!(described);

    while let Some(line) = described.next().await {
        println!("{line}");
    }
    debug!("流已结束");
}

/// 可选对风格：拿到结果后两个槽位都要检查，类型不替你把关
pub async fn run_optional_pair_demo() {
    println!("\n=== 可选对风格 ===");

    let (marker, failure) = deliver_as_optional_pair().await;
    if let Some(failure) = failure {
        println!("收到失败: {failure}");
    } else if let Some(marker) = marker {
        println!("收到成功值: {marker:?}");
    } else {
        println!("不应该发生：两个槽位都为空");
    }
}

/// Result 风格：类型层面二选一，match 两个分支就是全部
pub async fn run_result_demo() {
    println!("\n=== Result 风格 ===");

    match deliver_as_result().await {
        Ok(marker) => println!("收到成功值: {marker:?}"),
        Err(failure) => println!("收到失败: {failure}"),
    }
}

//! 四种异步单值交付风格
//!
//! 同一个底层行为（延迟固定时长后产出一个成功标记），用四种不同的
//! 交付契约暴露给调用方：
//!
//! - [`callback`]：完成回调，结果埋在回调参数里
//! - [`stream`]：可订阅的单次发射流，订阅前可以组合算子
//! - [`optional_pair`]：async fn 直接返回 `(Option, Option)` 对
//! - [`result`]：async fn 返回 `Result`，失败用 `?` 原样上抛

pub mod callback;
pub mod optional_pair;
pub mod result;
pub mod stream;

use tokio::time::sleep;

use crate::outcome::{DELAY, Failure, Marker, Outcome};

/// 所有风格共用的底层一步：睡一个固定时长，然后产出结果
///
/// 参考行为永远成功。`fault` 参数把"内部故障"显式摆在签名上，
/// 测试借此走到各风格的失败分支；公开入口一律传 `None`。
pub(crate) async fn delayed_step(fault: Option<Failure>) -> Outcome {
    sleep(DELAY).await;
    match fault {
        None => Ok(Marker),
        Some(failure) => Err(failure),
    }
}

use futures::stream::{self, Stream};

use crate::outcome::{Failure, Outcome};
use crate::styles::delayed_step;

/// 流风格：返回一个冷的单次发射流
///
/// - 冷流：延迟从第一次 poll（真正开始消费）才起算
/// - 每次消费恰好出现两种情形之一：发射一个 `Ok(Marker)` 然后结束，
///   或发射一个终止性的 `Err(Failure)`；消费方不处理 `Err` 分支，
///   失败就被悄悄丢掉了
/// - 不缓存：每次调用本函数都得到独立计时的新流，重新"订阅"即重新调用
/// - 相比回调风格的增值：消费之前可以随意串接 map / filter 等组合算子
pub fn deliver_as_stream() -> impl Stream<Item = Outcome> {
    deliver_as_stream_with(None)
}

/// 与 [`deliver_as_stream`] 相同，但允许注入一个故障走失败分支
pub(crate) fn deliver_as_stream_with(fault: Option<Failure>) -> impl Stream<Item = Outcome> {
    stream::once(delayed_step(fault))
}

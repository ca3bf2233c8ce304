mod outcome;
mod runner;
mod styles;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== 异步单值交付：四种风格 ===");

    runner::run_callback_demo().await;
    runner::run_stream_demo().await;
    runner::run_optional_pair_demo().await;
    runner::run_result_demo().await;

    println!("\n全部演示完成");
}

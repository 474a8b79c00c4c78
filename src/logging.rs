//! 로깅 초기화 모듈

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`가 없을 때 사용하는 기본 필터
pub const DEFAULT_FILTER: &str = "rithmic_config=warn";

/// stderr 로거 초기화
///
/// 표준 출력은 확인 메시지 한 줄만 사용하므로 로그는 모두 stderr로 보냅니다.
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

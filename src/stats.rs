//! 통계 및 유틸리티 모듈
//!
//! 실행 통계 수집을 담당합니다.

use std::time::{Duration, Instant};
use tracing::debug;

/// 실행 통계 구조체
#[derive(Debug, Default)]
pub struct ScanReport {
    /// 탐색한 파일 수
    pub files_visited: usize,
    /// 이름 규칙과 일치한 파일 수
    pub files_matched: usize,
    /// 추출한 파라미터 키 수 (파일별, 강제 설정 키 제외)
    pub params_read: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 출력에 기록한 시스템 수
    pub systems_written: usize,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl ScanReport {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 일치하지 않은(건너뛴) 파일 수
    pub fn files_skipped(&self) -> usize {
        self.files_visited.saturating_sub(self.files_matched)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 통계 요약을 debug 로그로 기록
    pub fn log_summary(&self) {
        debug!(
            visited = self.files_visited,
            matched = self.files_matched,
            skipped = self.files_skipped(),
            params = self.params_read,
            "파일 탐색 완료"
        );
        debug!(
            bytes_read = self.bytes_read,
            bytes_written = self.bytes_written,
            systems = self.systems_written,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "출력 저장 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_skipped() {
        let mut report = ScanReport::new();
        report.files_visited = 5;
        report.files_matched = 2;
        assert_eq!(report.files_skipped(), 3);
    }
}

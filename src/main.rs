//! rithmic-config - RITHMIC CONNECTION PARAMS TO BASE64 JSON
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use rithmic_config::{cli::Args, generator::generate, logging::init_logger};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger();

    let report = generate(&args.folder, &args.output)
        .with_context(|| format!("설정 생성 실패: {:?}", args.folder))?;

    println!(
        "{} {}개 시스템 파싱 완료, Base64 인코딩된 JSON 저장: {}",
        "✅".bright_green(),
        report.systems_written,
        args.output.display()
    );

    Ok(())
}

// ==========================================
// OEE KPI 计算工具 - 命令行主入口
// ==========================================
// 两种输入方式: 人工录入 (manual) / 文件上传 (upload)
// 输出: 文本报告或 JSON 报告；可选 CSV 导出
// ==========================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use oee_kpi::api::{KpiApi, KpiReport};
use oee_kpi::config::ConfigManager;
use oee_kpi::engine::Dashboard;
use oee_kpi::i18n::{t_in, t_in_with_args};
use oee_kpi::{logging, ProductionRecord, ValidationMode};

#[derive(Parser)]
#[command(name = "oee-kpi", version)]
#[command(about = "OEE & manufacturing KPI calculator")]
struct Cli {
    /// 配置文件路径（JSON）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 告警文本语言（zh-CN / en），覆盖配置文件
    #[arg(long, global = true)]
    locale: Option<String>,

    /// 宽松模式: 数据质量违规仅告警，不中止计算
    #[arg(long, global = true)]
    lenient: bool,

    /// 以 JSON 输出完整报告
    #[arg(long, global = true)]
    json: bool,

    /// 导出 CSV（输入数据 + 结果表）到该目录
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 人工录入单条生产记录
    Manual {
        /// 描述（机组/工序）
        #[arg(long)]
        description: Option<String>,

        /// 计划生产时间（分钟）
        #[arg(long)]
        planned_production_time: f64,

        /// 非计划停机时间（分钟）
        #[arg(long, default_value = "0")]
        downtime: f64,

        /// 总产量（件）
        #[arg(long)]
        total_count: i64,

        /// 良品数（件）
        #[arg(long)]
        good_count: i64,

        /// 理想节拍（分钟/件）
        #[arg(long)]
        ideal_cycle_time: f64,
    },

    /// 上传 CSV / Excel 文件批量计算
    Upload {
        /// 文件路径（.csv / .xlsx / .xls）
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 加载配置并应用命令行覆写
    let mut config = ConfigManager::load(cli.config.as_deref()).context("配置加载失败")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if cli.lenient {
        config.validation_mode = ValidationMode::Lenient;
    }
    config.validate().context("配置校验失败")?;

    // 2. 初始化日志系统
    logging::init(config.log_format);
    tracing::info!("OEE KPI 计算工具 v{}", oee_kpi::VERSION);

    // 3. 计算
    let api = KpiApi::new(config)?;
    let report = match cli.command {
        Commands::Manual {
            description,
            planned_production_time,
            downtime,
            total_count,
            good_count,
            ideal_cycle_time,
        } => {
            let mut record = ProductionRecord::new(
                planned_production_time,
                downtime,
                total_count,
                good_count,
                ideal_cycle_time,
            );
            if let Some(description) = description {
                record = record.with_description(description);
            }
            api.calculate_manual(record)?
        }
        Commands::Upload { file } => api.calculate_upload(&file)?,
    };

    // 4. 输出
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &api.config().locale);
    }

    // 5. 导出
    if let Some(dir) = cli.export_dir {
        let files = api.export_report(&report, &dir)?;
        for path in [files.input_path, files.result_path] {
            let path = path.display().to_string();
            eprintln!("{}", t_in_with_args(&api.config().locale, "report.exported", &[("path", &path)]));
        }
    }

    Ok(())
}

fn print_report(report: &KpiReport, locale: &str) {
    match &report.dashboard {
        Dashboard::Single { gauges, alerts } => {
            println!("{}", t_in(locale, "report.calculated_single"));
            for gauge in gauges {
                println!(
                    "  {:<28} {:>8.2}{} [{}]",
                    gauge.title, gauge.value, gauge.suffix, gauge.band
                );
            }
            for alert in alerts {
                println!("{}", alert.message);
            }
        }
        Dashboard::Batch { charts } => {
            println!("{}", t_in(locale, "report.calculated_batch"));

            let table = report.summary_table();
            println!("{}", table.headers.join(" | "));
            for row in &table.rows {
                println!("{}", row.join(" | "));
            }

            for chart in charts {
                let points = chart
                    .values
                    .x
                    .iter()
                    .zip(&chart.values.y)
                    .map(|(label, value)| format!("{}={:.2}", label, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  {} ({}): {}", chart.title, chart.benchmark, points);
            }
        }
    }

    if !report.dq_violations.is_empty() {
        let count = report.dq_violations.len().to_string();
        println!(
            "{}",
            t_in_with_args(locale, "report.data_quality_warnings", &[("count", &count)])
        );
        for v in &report.dq_violations {
            println!("  #{} {}: {}", v.row_number, v.field, v.message);
        }
    }
}

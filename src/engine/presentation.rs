// ==========================================
// OEE KPI 计算工具 - 展示映射器
// ==========================================
// 职责: KPI 结果 → 渲染描述（仪表盘 / 基准对比图）+ 告警文本
// 输入: KpiResult 列表（已校验、已计算）
// 输出: Dashboard（可序列化，交由任意绘图库渲染）
// ==========================================
// 模式选择: 1 条结果 → 单记录仪表盘；多条结果 → 批量基准对比图
// 阈值/色带: 统一读取 config::metric_thresholds，两种模式共用
// ==========================================

use crate::config::metric_thresholds::{threshold_for, MetricThreshold};
use crate::domain::production::KpiResult;
use crate::domain::types::{BandLevel, KpiMetric};
use crate::i18n::{t_in, t_in_with_args};
use serde::Serialize;

/// 告警柱颜色
pub const ALERT_BAR_COLOR: &str = "crimson";
/// 正常柱颜色
pub const NEUTRAL_BAR_COLOR: &str = "darkblue";
/// 数值后缀
pub const PERCENT_SUFFIX: &str = "%";
/// 仪表盘坐标轴范围
pub const GAUGE_AXIS_RANGE: [f64; 2] = [0.0, 100.0];

// ==========================================
// 渲染描述
// ==========================================

/// 仪表盘色带
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: &'static str,
    pub level: BandLevel,
}

/// 单指标仪表盘
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub metric: KpiMetric,
    pub title: String,
    pub value: f64,
    pub suffix: &'static str,
    pub axis_range: [f64; 2],
    pub steps: Vec<GaugeStep>,
    pub band: BandLevel,
    pub threshold: f64,
    pub alert: bool,
    pub bar_color: &'static str,
}

/// 告警消息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertMessage {
    pub metric: KpiMetric,
    pub value: f64,
    pub threshold: f64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineDash {
    Solid,
    Dash,
}

/// 图表数据序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub name: String,
    pub kind: SeriesKind,
    pub dash: LineDash,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// 批量模式: 单指标基准对比图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkChart {
    pub metric: KpiMetric,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub benchmark: f64,
    pub values: SeriesView,
    pub benchmark_line: SeriesView,
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dashboard {
    Single {
        gauges: Vec<GaugeView>,
        alerts: Vec<AlertMessage>,
    },
    Batch {
        charts: Vec<BenchmarkChart>,
    },
}

impl Dashboard {
    /// 告警文本（批量模式无逐条告警）
    pub fn alert_messages(&self) -> Vec<&str> {
        match self {
            Dashboard::Single { alerts, .. } => alerts.iter().map(|a| a.message.as_str()).collect(),
            Dashboard::Batch { .. } => Vec::new(),
        }
    }
}

// ==========================================
// PresentationMapper - 展示映射器
// ==========================================
#[derive(Debug, Clone)]
pub struct PresentationMapper {
    locale: String,
}

impl PresentationMapper {
    /// # 参数
    /// - locale: 标题/告警文本语言（"zh-CN" 或 "en"）
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// 渲染入口（按批量大小选择模式）
    pub fn render(&self, results: &[KpiResult]) -> Dashboard {
        match results {
            [single] => self.render_single(single),
            _ => self.render_batch(results),
        }
    }

    /// 单记录模式: 六个仪表盘 + 告警文本
    pub fn render_single(&self, result: &KpiResult) -> Dashboard {
        let mut gauges = Vec::with_capacity(KpiMetric::ALL.len());
        let mut alerts = Vec::new();

        for metric in KpiMetric::ALL {
            let cfg = threshold_for(metric);
            let value = result.metric_value(metric);
            let gauge = self.build_gauge(cfg, value);

            if gauge.alert {
                alerts.push(AlertMessage {
                    metric,
                    value,
                    threshold: cfg.threshold,
                    message: self.alert_text(cfg),
                });
            }
            gauges.push(gauge);
        }

        Dashboard::Single { gauges, alerts }
    }

    /// 批量模式: 每个指标一张柱状图 + 虚线基准线
    pub fn render_batch(&self, results: &[KpiResult]) -> Dashboard {
        let labels = record_labels(results);
        let has_description = results.iter().any(|r| r.record.description.is_some());
        let x_axis_title = if has_description {
            t_in(&self.locale, "chart.axis_description")
        } else {
            t_in(&self.locale, "chart.axis_record")
        };

        let charts = KpiMetric::ALL
            .iter()
            .map(|&metric| {
                let cfg = threshold_for(metric);
                let title = self.chart_title(metric);
                let values = SeriesView {
                    name: title.clone(),
                    kind: SeriesKind::Bar,
                    dash: LineDash::Solid,
                    x: labels.clone(),
                    y: results.iter().map(|r| r.metric_value(metric)).collect(),
                };
                let benchmark_line = SeriesView {
                    name: t_in(&self.locale, "chart.benchmark"),
                    kind: SeriesKind::Line,
                    dash: LineDash::Dash,
                    x: labels.clone(),
                    y: vec![cfg.threshold; results.len()],
                };

                BenchmarkChart {
                    metric,
                    title: title.clone(),
                    x_axis_title: x_axis_title.clone(),
                    y_axis_title: title,
                    benchmark: cfg.threshold,
                    values,
                    benchmark_line,
                }
            })
            .collect();

        Dashboard::Batch { charts }
    }

    fn build_gauge(&self, cfg: &MetricThreshold, value: f64) -> GaugeView {
        let alert = cfg.is_breached(value);
        GaugeView {
            metric: cfg.metric,
            title: self.metric_title(cfg.metric),
            value,
            suffix: PERCENT_SUFFIX,
            axis_range: GAUGE_AXIS_RANGE,
            steps: cfg
                .bands
                .iter()
                .map(|b| GaugeStep {
                    range: [b.from, b.to],
                    color: b.level.color(),
                    level: b.level,
                })
                .collect(),
            band: cfg.classify(value),
            threshold: cfg.threshold,
            alert,
            bar_color: if alert { ALERT_BAR_COLOR } else { NEUTRAL_BAR_COLOR },
        }
    }

    fn metric_title(&self, metric: KpiMetric) -> String {
        t_in(&self.locale, &format!("metric.{}", metric.key()))
    }

    fn chart_title(&self, metric: KpiMetric) -> String {
        let key = if metric.is_fraction() {
            "chart.over_time"
        } else {
            "chart.over_time_pct"
        };
        t_in_with_args(&self.locale, key, &[("metric", &self.metric_title(metric))])
    }

    fn alert_text(&self, cfg: &MetricThreshold) -> String {
        let threshold = cfg.threshold.to_string();
        t_in_with_args(
            &self.locale,
            &format!("alert.{}", cfg.metric.key()),
            &[("threshold", &threshold)],
        )
    }
}

/// X 轴标签: 描述优先，缺省时用 1 起始序号
pub fn record_labels(results: &[KpiResult]) -> Vec<String> {
    results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            r.record
                .description
                .clone()
                .unwrap_or_else(|| (idx + 1).to_string())
        })
        .collect()
}

// ==========================================
// ResultTable - 结果汇总表
// ==========================================
/// 上传路径的屏显汇总表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub const HEADERS: [&'static str; 11] = [
        "Description",
        "Planned Production Time",
        "Downtime",
        "Total Count",
        "Good Count",
        "Availability",
        "Performance",
        "Quality",
        "OEE",
        "Scrap Rate (%)",
        "Yield vs. Planned Output (%)",
    ];

    pub fn from_results(results: &[KpiResult]) -> Self {
        let rows = results
            .iter()
            .map(|r| {
                let mut row = vec![
                    r.record.description.clone().unwrap_or_default(),
                    r.record.planned_production_time.to_string(),
                    r.record.downtime.to_string(),
                    r.record.total_count.to_string(),
                    r.record.good_count.to_string(),
                ];
                row.extend(
                    KpiMetric::ALL
                        .iter()
                        .map(|&m| format!("{:.4}", r.metric_raw_value(m))),
                );
                row
            })
            .collect();

        Self {
            headers: Self::HEADERS.to_vec(),
            rows,
        }
    }
}

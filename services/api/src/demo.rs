use crate::infra::{default_period, load_source, sample_source, SAMPLE_MONTHS};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use supplier_scorecard::config::{AppConfig, ScorecardConfig};
use supplier_scorecard::error::AppError;
use supplier_scorecard::workflows::scorecard::report::views::SupplierScoreView;
use supplier_scorecard::workflows::scorecard::{
    EnrichedSupplierRecord, EvaluationConfig, LedgerSupplierSource, PerformanceReport,
    SupplierComparison, SupplierId, SupplierScorecardService, SupplierTrend,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Period start (YYYY-MM-DD). Defaults to the first day of the month six months back.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end: Option<NaiveDate>,
    /// Order ledger CSV. Falls back to SCORECARD_LEDGER_CSV, then the sample portfolio.
    #[arg(long)]
    pub(crate) ledger: Option<PathBuf>,
    /// Print the JSON payload served by the HTTP endpoint instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Supplier identifiers to compare, comma separated
    #[arg(long = "suppliers", value_delimiter = ',', required = true)]
    pub(crate) supplier_ids: Vec<String>,
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start: Option<NaiveDate>,
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) ledger: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct TrendArgs {
    /// Supplier identifier
    pub(crate) supplier_id: String,
    /// Last day of the trend window (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Months in the trailing window (overrides SCORECARD_TREND_MONTHS)
    #[arg(long)]
    pub(crate) months: Option<u32>,
    #[arg(long)]
    pub(crate) ledger: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Anchor date for the synthetic portfolio (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

type LedgerService = SupplierScorecardService<LedgerSupplierSource>;

fn build_service(ledger: Option<PathBuf>) -> Result<LedgerService, AppError> {
    let settings = scorecard_settings(ledger)?;
    let source = load_source(settings.ledger_path.as_deref())?;
    Ok(
        SupplierScorecardService::new(Arc::new(source), EvaluationConfig::default())
            .with_trend_window(settings.trend_window_months),
    )
}

fn scorecard_settings(ledger: Option<PathBuf>) -> Result<ScorecardConfig, AppError> {
    let mut settings = AppConfig::load()?.scorecard;
    if ledger.is_some() {
        settings.ledger_path = ledger;
    }
    Ok(settings)
}

fn resolve_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    let (default_start, default_end) = default_period(today);
    (start.unwrap_or(default_start), end.unwrap_or(default_end))
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        start,
        end,
        ledger,
        json,
    } = args;

    let service = build_service(ledger)?;
    let (start, end) = resolve_period(start, end);
    let report = service.performance_report(start, end)?;

    if json {
        match serde_json::to_string_pretty(&report.summary_view()) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        supplier_ids,
        start,
        end,
        ledger,
    } = args;

    let service = build_service(ledger)?;
    let (start, end) = resolve_period(start, end);
    let ids: Vec<SupplierId> = supplier_ids.into_iter().map(SupplierId::new).collect();
    let comparison = service.compare(&ids, start, end)?;

    render_comparison(&comparison);
    Ok(())
}

pub(crate) fn run_trend(args: TrendArgs) -> Result<(), AppError> {
    let TrendArgs {
        supplier_id,
        as_of,
        months,
        ledger,
    } = args;

    let mut service = build_service(ledger)?;
    if let Some(months) = months {
        service = service.with_trend_window(months);
    }
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let trend = service.trend(&SupplierId::new(supplier_id), as_of)?;

    render_trend(&trend, service.trend_window_months());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let (start, end) = default_period(today);

    println!("Supplier scorecard demo");
    println!(
        "Sample portfolio: {} months of synthetic orders ending {}",
        SAMPLE_MONTHS, today
    );

    let source = sample_source(today)?;
    let service = SupplierScorecardService::new(Arc::new(source), EvaluationConfig::default());

    let report = service.performance_report(start, end)?;
    render_report(&report);

    let contenders: Vec<SupplierId> = report
        .suppliers
        .iter()
        .take(3)
        .map(|record| record.supplier_id().clone())
        .collect();
    println!();
    let comparison = service.compare(&contenders, start, end)?;
    render_comparison(&comparison);

    for record in &report.suppliers {
        println!();
        let trend = service.trend(record.supplier_id(), today)?;
        render_trend(&trend, service.trend_window_months());
    }

    Ok(())
}

pub(crate) fn render_report(report: &PerformanceReport) {
    let summary = &report.summary;
    println!("Supplier performance report ({})", report.period);
    println!(
        "Suppliers: {} | Orders: {} | Spend: {:.2} | Avg order: {:.2}",
        summary.total_suppliers, summary.total_orders, summary.total_value, summary.avg_order_value
    );
    println!(
        "Portfolio on-time: {:.1}% | Portfolio quality: {:.1}%",
        summary.on_time_rate, summary.quality_score
    );

    if report.suppliers.is_empty() {
        println!("\nNo supplier activity in this period");
        return;
    }

    println!("\nRanking");
    for (rank, record) in report.suppliers.iter().enumerate() {
        println!(
            "{:>3}. {}",
            rank + 1,
            supplier_line(&SupplierScoreView::from(record))
        );
    }

    print_group("Top performers", &report.top_performers);
    print_group("Underperformers", &report.underperformers);

    println!("\nCategories");
    for group in &report.categories {
        let aggregate = &group.aggregate;
        println!(
            "- {}: {} suppliers, spend {:.2}, on-time {:.1}%, quality {:.1}%, mean score {:.2}",
            group.category,
            aggregate.supplier_count,
            aggregate.total_value,
            aggregate.on_time_rate,
            aggregate.quality_score,
            aggregate.average_overall_score
        );
    }

    let grades: Vec<String> = report
        .grade_distribution()
        .into_iter()
        .map(|entry| format!("{}={}", entry.label, entry.count))
        .collect();
    let risks: Vec<String> = report
        .risk_distribution()
        .into_iter()
        .map(|entry| format!("{}={}", entry.label, entry.count))
        .collect();
    println!("\nGrades: {}", grades.join(" "));
    println!("Risk: {}", risks.join(" "));
}

fn print_group(title: &str, records: &[EnrichedSupplierRecord]) {
    if records.is_empty() {
        println!("\n{title}: none");
        return;
    }
    println!("\n{title}");
    for record in records {
        println!("- {}", supplier_line(&SupplierScoreView::from(record)));
    }
}

pub(crate) fn render_comparison(comparison: &SupplierComparison) {
    let view = comparison.view();
    println!("Supplier comparison");
    if view.suppliers.is_empty() {
        println!("No requested supplier had activity in the period");
        return;
    }

    for supplier in &view.suppliers {
        println!("- {}", supplier_line(supplier));
    }
    if let Some(winner) = &view.winner {
        println!("Winner: {winner}");
    }
    if let Some(metrics) = &view.metrics {
        println!(
            "Best on-time {:.1}% | Best quality {:.1}% | Highest spend {:.2}",
            metrics.best_on_time_rate, metrics.best_quality_score, metrics.highest_total_value
        );
        match metrics.shortest_lead_time_days {
            Some(days) => println!("Shortest lead time: {days:.1} days"),
            None => println!("Shortest lead time: not recorded"),
        }
    }
}

pub(crate) fn render_trend(trend: &SupplierTrend, window_months: u32) {
    println!(
        "Trend for {} over {} months: {}",
        trend.supplier_id, window_months, trend.direction_label
    );
    if let Some(change) = trend.value_change_pct {
        println!("Order value change across the last three months: {change:+.1}%");
    }
    for point in &trend.points {
        let lead = point
            .avg_lead_time_days
            .map(|days| format!("{days:.1}d lead"))
            .unwrap_or_else(|| "no deliveries".to_string());
        println!(
            "  {} | {} orders | {:.2} | {}",
            point.month, point.order_count, point.total_value, lead
        );
    }
}

fn supplier_line(view: &SupplierScoreView) -> String {
    let mut line = format!(
        "{} ({}) score {:.2} grade {} | on-time {:.1}% ({}) | quality {:.1}% | risk {}",
        view.name,
        view.supplier_id,
        view.overall_score,
        view.grade_label,
        view.on_time_rate,
        view.delivery_rating_label,
        view.quality_score,
        view.risk_level_label
    );
    if !view.risk_factors.is_empty() {
        line.push_str(&format!(" [{}]", view.risk_factors.join(", ")));
    }
    line
}

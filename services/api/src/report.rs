use crate::infra::{parse_date, parse_variant, InMemoryCreditHistoryStore};
use chrono::NaiveDate;
use clap::Args;
use pyme360::config::AppConfig;
use pyme360::error::AppError;
use pyme360::scoring::{
    load_history_from_path, CompositeResult, NewCreditVariant, ScoreRequest, ScoringService,
    TrustComponents, TrustScoreCard,
};
use std::path::PathBuf;
use std::sync::Arc;

type ReportService = ScoringService<InMemoryCreditHistoryStore>;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Credit-history JSON document (camelCase or backend field names)
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Reference date for account ages and application recency (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Fifth-factor strategy: incidents or new_applications (defaults to configuration)
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<NewCreditVariant>,
    /// Print the full result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TrustArgs {
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) sustainability: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) tax_compliance: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) labor_practices: u8,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) financial_stability: u8,
    /// Defaults to the payment-history factor of `--history`, or 85 without one
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) payment_punctuality: Option<u8>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) innovation: u8,
    /// Credit-history JSON document used to derive payment punctuality
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
    /// Print the card as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let result = credit_report(&report_service(&config), &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in credit_report_lines(&result) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_trust_report(args: TrustArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let card = trust_card(&report_service(&config), &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        for line in trust_report_lines(&card) {
            println!("{line}");
        }
    }
    Ok(())
}

fn report_service(config: &AppConfig) -> ReportService {
    ScoringService::new(
        Arc::new(InMemoryCreditHistoryStore::default()),
        config.scoring.default_variant,
    )
}

pub(crate) fn credit_report(
    service: &ReportService,
    args: &ScoreArgs,
) -> Result<CompositeResult, AppError> {
    let history = load_history_from_path(&args.history)?;
    let request = ScoreRequest {
        variant: args.variant,
        as_of: args.as_of,
    };
    Ok(service.score_history(&history, request))
}

pub(crate) fn trust_card(
    service: &ReportService,
    args: &TrustArgs,
) -> Result<TrustScoreCard, AppError> {
    let history = match (&args.history, args.payment_punctuality) {
        (Some(path), None) => Some(load_history_from_path(path)?),
        _ => None,
    };

    let components = TrustComponents {
        sustainability: args.sustainability,
        tax_compliance: args.tax_compliance,
        labor_practices: args.labor_practices,
        financial_stability: args.financial_stability,
        payment_punctuality: args.payment_punctuality,
        innovation: args.innovation,
    };
    Ok(service.trust_score_with_history(&components, history.as_ref()))
}

pub(crate) fn credit_report_lines(result: &CompositeResult) -> Vec<String> {
    let mut lines = vec![
        "PyME360 credit score".to_string(),
        format!(
            "Score: {} ({}) | composite {:.1}/100",
            result.rescaled_score,
            result.credit_level.label(),
            result.composite_score
        ),
        result.credit_level.description().to_string(),
        format!(
            "Reference date {} | fifth factor: {}",
            result.reference_date, result.variant
        ),
        String::new(),
        "Factors".to_string(),
    ];

    for contribution in &result.contributions {
        lines.push(format!(
            "- {}: {}/100 x {:.0}% = {:.2} ({})",
            contribution.factor.label(),
            contribution.score,
            contribution.weight * 100.0,
            contribution.weighted,
            contribution.notes
        ));
    }

    let utilization = &result.factor_scores.credit_utilization.supporting_metrics;
    if !utilization.by_account.is_empty() {
        lines.push(String::new());
        lines.push("Utilization by account".to_string());
        for account in &utilization.by_account {
            lines.push(format!(
                "- {}: {:.1}% ({:.0} of {:.0})",
                account.name, account.utilization, account.balance, account.limit
            ));
        }
    }

    lines
}

pub(crate) fn trust_report_lines(card: &TrustScoreCard) -> Vec<String> {
    let mut lines = vec![
        "PyME360 trust score".to_string(),
        format!("Score: {}/100 ({})", card.score, card.tier.label()),
        String::new(),
        "Components".to_string(),
    ];

    for contribution in &card.contributions {
        lines.push(format!(
            "- {}: {}/100 x {:.0}% = {:.2}",
            contribution.component.label(),
            contribution.score,
            contribution.weight * 100.0,
            contribution.weighted
        ));
    }

    lines.push(String::new());
    if card.benefits.is_empty() {
        lines.push("Benefits: none".to_string());
    } else {
        lines.push("Benefits".to_string());
        for benefit in &card.benefits {
            lines.push(format!(
                "- {} ({}): {}",
                benefit.name, benefit.provider, benefit.detail
            ));
        }
    }

    lines
}

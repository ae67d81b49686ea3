use splitledger::models::AuditAction;
use splitledger::{Config, InMemoryAuditLogger, demo};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        "Settling the concert event with the {} strategy",
        config.settlement_strategy
    );

    let mut audit_logger = InMemoryAuditLogger::new();
    let mut service = demo::concert(&mut audit_logger)?;
    let outcome = service.reconcile_with(config.settlement_strategy);

    if !service.ledger().is_settled() {
        warn!("Event '{}' still has open balances", service.ledger().name());
    }
    drop(service);

    println!("{}", outcome.report.render_text(&config.currency_symbol));

    info!(
        "{} audit entries, {} rejected transactions",
        audit_logger.get_logs().len(),
        audit_logger.count(AuditAction::RejectTransaction)
    );
    Ok(())
}

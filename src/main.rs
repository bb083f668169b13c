use listener_core::{products, AppConfig, CommunityOutcome};
use scanner::Scanner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reddit_listener=info,scanner=info,feed_client=info,notifier=info")
        .init();

    tracing::info!("Starting Reddit keyword listener");

    let config = AppConfig::from_env()?;
    let products = products();

    let scanner = Scanner::new(&config);
    let summary = scanner.run(&config, &products).await?;

    for product in &summary.per_product {
        tracing::info!("{}: {} matches", product.name, product.matches);
    }
    for report in &summary.communities {
        if let CommunityOutcome::Failed { reason } = &report.outcome {
            tracing::warn!("r/{} was skipped: {}", report.community, reason);
        }
    }
    tracing::info!(
        "Scan complete: {} total matches, {} notification(s) sent",
        summary.total_matches(),
        summary.notifications_sent
    );
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}

//! Basic SDK usage example.
//!
//! This example demonstrates the full query pipeline against a local pmwebd:
//! negotiate a context, discover the metric catalog, fetch values, resolve
//! instance names, and aggregate repeated fetches.
//!
//! Run with: cargo run --example basic_usage

use pcp_sdk::{
    Context, MetricQuery, MetricValueQuery, PcpClient, PcpResult, ResponseList,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> PcpResult<()> {
    // Initialize tracing for debug output; RUST_LOG controls the level
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Build the client against the default pmwebd port
    let client = PcpClient::builder()
        .base_url("http://localhost:44323")
        .timeout(Duration::from_secs(30))
        .build()?;

    // Negotiate a session for the local host
    let mut context = Context::host("local").with_poll_timeout(30);
    client.refresh_context(&mut context).await?;
    println!("Context established: session {}", context.context_id);

    // Discover the metric catalog
    let catalog = client.metrics(&context, &MetricQuery::all()).await?;
    println!("Retrieved {} unique metrics from context", catalog.len());

    // Fetch values for the first few metrics by name
    let names: Vec<String> = catalog.names().into_iter().take(50).collect();
    let query = MetricValueQuery::by_names(names);
    let mut response = client.metric_values(&context, &query).await?;
    println!(
        "Fetched {} metric values at {:?}",
        response.values.len(),
        response.timestamp.to_datetime()
    );

    // Resolve instance names for every fetched metric
    for value in &mut response.values {
        let Some(metric) = catalog.find_by_name(&value.name) else {
            continue;
        };
        let domain = client.indom_for_metric(&context, metric).await?;
        let misses = domain.resolve_names(value);
        if misses > 0 {
            println!("  {}: {} instances without a domain entry", value.name, misses);
        }
    }

    // Aggregate the response and print the derived views
    let mut list = ResponseList::new();
    list.push(response);

    println!("\nDistinct metric names: {}", list.metric_names().len());
    println!("Distinct instance names: {}", list.instance_names().len());

    let table = list.values_by_instance();
    for (instance, row) in table.iter().take(5) {
        println!("\nInstance {instance}:");
        for (metric, value) in row.iter().take(5) {
            println!("  {metric} = {value:?}");
        }
    }

    println!("\nBasic usage example completed successfully!");
    Ok(())
}

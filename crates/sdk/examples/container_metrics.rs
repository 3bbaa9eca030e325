//! Container-scoped metrics example.
//!
//! Discovers the containers running on a host through the `containers.name`
//! metric, then opens a second, container-scoped context via a hostspec of
//! the form `local:?container=<name>` and fetches its cgroup counters.
//!
//! Run with: cargo run --example container_metrics

use pcp_sdk::{Context, MetricValueQuery, PcpClient, PcpResult};

#[tokio::main]
async fn main() -> PcpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = PcpClient::builder()
        .base_url("http://localhost:44323")
        .build()?;

    // Host-wide context to enumerate containers
    let mut context = Context::host("local");
    client.refresh_context(&mut context).await?;

    let query = MetricValueQuery::by_names(["containers.name"]);
    let containers = client.metric_values(&context, &query).await?;

    let Some(first) = containers
        .values
        .first()
        .and_then(|value| value.instances.first())
        .and_then(|inst| inst.value.as_str())
    else {
        println!("No containers reported on this host");
        return Ok(());
    };
    println!("Inspecting container {first}");

    // Second context scoped to the container's cgroup
    let hostspec = format!("local:?container={first}");
    let mut container_context = Context::host_spec(hostspec);
    client.refresh_context(&mut container_context).await?;

    let names = [
        "cgroup.cpuacct.stat.user",
        "cgroup.cpuacct.stat.system",
        "cgroup.memory.usage",
    ];
    for name in names {
        let query = MetricValueQuery::by_names([name]);
        match client.metric_values(&container_context, &query).await {
            Ok(response) => {
                for value in &response.values {
                    for inst in &value.instances {
                        println!("  {} = {:?}", value.name, inst.value);
                    }
                }
            }
            Err(err) => println!("  {name}: query failed: {err}"),
        }
    }

    Ok(())
}

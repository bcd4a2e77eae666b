//! Four-step demonstration run: discover the agent, build a task, submit
//! it, and display the agent's reply.

use anyhow::Context;
use url::Url;

use a2a_task_client::prelude::*;

// Configuration - update these to match your agent
const AGENT_URL: &str = "http://127.0.0.1:5000";
const QUERY: &str = "What time is it?";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let base_url: Url = AGENT_URL.parse().context("invalid agent URL")?;
    let client = AgentClient::http(base_url);

    // Step 1: Discover the agent
    println!("--- Step 1: Discovering the Agent ---");
    println!(
        "Fetching agent descriptor from: {}/.well-known/agent.json",
        AGENT_URL
    );

    let descriptor = client.discover().await.context("agent discovery failed")?;

    println!(
        "Connected to: {} - {}",
        descriptor.display_name(),
        descriptor.display_description()
    );
    println!("Agent URL: {:?}", descriptor.url);
    println!("Agent Capabilities: {:?}\n", descriptor.capabilities);

    // Step 2: Prepare a task
    println!("--- Step 2: Preparing a Task ---");
    let payload = TaskPayload::new(QUERY);
    println!("Generated Task ID: {}", payload.id);
    println!("Task Payload: {}\n", serde_json::to_string(&payload)?);

    // Step 3: Send the task to the agent
    println!("--- Step 3: Sending the Task to the Agent ---");
    println!("Sending POST request to: {}/tasks/send", AGENT_URL);

    let response = client
        .send_task(&payload)
        .await
        .context("sending task failed")?;

    println!(
        "Received Response Data: {}\n",
        serde_json::to_string(&response)?
    );

    // Step 4: Display the agent's response
    println!("--- Step 4: Displaying Agent's Response ---");
    println!("Agent says: \"{}\"", response.reply_text());

    Ok(())
}

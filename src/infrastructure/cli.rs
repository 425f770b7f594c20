use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use serde::Serialize;

use crate::{infrastructure::api::ApiClient, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 4.0)]
    pub tick_rate: f64,

    #[arg(short, long, value_name = "FLOAT", help = "Frame rate, i.e. number of frames per second", default_value_t = 30.0)]
    pub frame_rate: f64,

    /// Backend base URL, overriding the config file and HEDGEUI_API_URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Read-only queries that print JSON instead of starting the TUI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all scenarios
    Scenarios,
    /// Show one scenario
    Scenario { id: String },
    /// List all tracked plays
    Tracking,
    /// Show one tracked play
    Tracked { scenario_id: String, play_id: String },
    /// Check the backend health
    Health,
}

impl Command {
    /// Performs the request and returns pretty-printed JSON
    pub async fn run(&self, client: &ApiClient) -> Result<String> {
        match self {
            Command::Scenarios => pretty(&client.list_scenarios().await?),
            Command::Scenario { id } => pretty(&client.get_scenario(id).await?),
            Command::Tracking => pretty(&client.list_tracking().await?),
            Command::Tracked {
                scenario_id,
                play_id,
            } => pretty(&client.get_tracking(scenario_id, play_id).await?),
            Command::Health => pretty(&client.health().await?),
        }
    }
}

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

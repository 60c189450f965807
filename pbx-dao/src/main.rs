use dotenv::dotenv;
use serde_json::json;

use pbx_dao::config::Config;
use pbx_dao::{DaoResult, Database};

/// Dump the legacy and feature extensions of the configured database as JSON
fn run(config: &Config) -> DaoResult<()> {
    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url)?;

    let services = db.find_all_service_extensions()?;
    let forwards = db.find_all_forward_extensions()?;
    let agent_actions = db.find_all_agent_action_extensions()?;
    log::info!(
        "Found {} service, {} forward and {} agent action extensions",
        services.len(),
        forwards.len(),
        agent_actions.len()
    );

    let feature_services = db.find_all_service_feature_extensions()?;
    let feature_forwards = db.find_all_forward_feature_extensions()?;
    let feature_agent_actions = db.find_all_agent_action_feature_extensions()?;

    let output = json!({
        "extensions": {
            "services": services,
            "forwards": forwards,
            "agent_actions": agent_actions,
        },
        "feature_extensions": {
            "services": feature_services,
            "forwards": feature_forwards,
            "agent_actions": feature_agent_actions,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

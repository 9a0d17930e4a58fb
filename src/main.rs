use anyhow::{bail, Context, Result};
use shopping_list::config::ConsolidationConfig;
use shopping_list::logging::{init_logging, LogFormat};
use shopping_list::shopping_list::{load_request, ShoppingListGenerator};
use std::env;
use tracing::info;

const REQUEST_VAR: &str = "SHOPPING_LIST_REQUEST";

/// Request path from the first argument, falling back to `SHOPPING_LIST_REQUEST`
fn request_path(argument: Option<String>, from_env: Option<String>) -> Result<String> {
    match argument.or(from_env) {
        Some(path) if !path.trim().is_empty() => Ok(path),
        _ => bail!("Usage: shopping-list <request.json> (or set {REQUEST_VAR})"),
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(LogFormat::from_env())?;

    let request_path = request_path(env::args().nth(1), env::var(REQUEST_VAR).ok())?;
    info!(request = %request_path, "Generating shopping list");

    let config = ConsolidationConfig::from_env().context("Failed to load configuration")?;
    let request = load_request(&request_path)?;

    let list = ShoppingListGenerator::with_config(config)
        .handle(&request)
        .context("Shopping list request rejected")?;

    let output = serde_json::to_string_pretty(&list).context("Failed to serialize shopping list")?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_prefers_argument() {
        let path = request_path(Some("plan.json".to_string()), Some("env.json".to_string())).unwrap();
        assert_eq!(path, "plan.json");
    }

    #[test]
    fn test_request_path_falls_back_to_env() {
        let path = request_path(None, Some("env.json".to_string())).unwrap();
        assert_eq!(path, "env.json");
    }

    #[test]
    fn test_request_path_missing_names_both_sources() {
        let err = request_path(None, None).unwrap_err().to_string();
        assert!(err.contains("shopping-list <request.json>"));
        assert!(err.contains(REQUEST_VAR));

        assert!(request_path(Some("  ".to_string()), None).is_err());
    }
}

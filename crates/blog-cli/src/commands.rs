use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use blog_server::{BlogServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args),
        Command::Config(_) => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(min) = args.min_content_len {
        config.rules.min_content_len = min;
    }
    config
}

fn cmd_serve(config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args);
    println!(
        "{} blog server on {} (min content length: {})",
        "▶".green().bold(),
        config.bind_addr.to_string().bold(),
        config.rules.min_content_len,
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(BlogServer::new(config).serve())?;
    println!("{} Server stopped.", "✓".green());
    Ok(())
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn overrides_replace_file_values() {
        let args = ServeArgs {
            bind: Some("0.0.0.0:9000".parse().unwrap()),
            min_content_len: Some(8),
        };
        let config = apply_overrides(ServerConfig::default(), &args);
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.rules.min_content_len, 8);
    }

    #[test]
    fn no_overrides_keeps_config() {
        let args = ServeArgs { bind: None, min_content_len: None };
        assert_eq!(apply_overrides(ServerConfig::default(), &args), ServerConfig::default());
    }

    #[test]
    fn missing_config_file_is_error() {
        let err = load_config(Some(Path::new("/no/such/blog.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), ServerConfig::default());
    }
}

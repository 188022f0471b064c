//! Startup settings for the `todo-server` binary.
//!
//! Every flag can also be set through the environment. `--database-url memory`
//! selects the in-process store; anything else is treated as SQLite, and a
//! bare file path is normalized to a `sqlite://` URL whose parent directory is
//! created before the store opens.

use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::store::StoreBackend;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/todos.db";

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the todo list API over HTTP")]
pub struct Settings {
    /// Address to listen on.
    #[arg(long, env = "TODO_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// SQLite URL or file path, or `memory` for a non-persistent store.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = "TODO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

impl Settings {
    /// Resolve the configured store, creating the SQLite parent directory if
    /// needed.
    pub fn store_backend(&self) -> anyhow::Result<StoreBackend> {
        let raw = self.database_url.trim();
        if raw.eq_ignore_ascii_case("memory") {
            return Ok(StoreBackend::Memory);
        }
        let database_url = normalize_database_url(raw);
        ensure_parent_dir_exists(&database_url)?;
        Ok(StoreBackend::Sqlite(database_url))
    }
}

fn normalize_database_url(raw: &str) -> String {
    if raw.is_empty() {
        return DEFAULT_DATABASE_URL.to_string();
    }
    if raw.starts_with("sqlite:") {
        return raw.to_string();
    }
    format!("sqlite://{}", raw.replace('\\', "/"))
}

fn ensure_parent_dir_exists(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.contains(":memory:") {
        return None;
    }
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();
    if path.is_empty() {
        return None;
    }
    Some(Path::new(path).to_path_buf())
}

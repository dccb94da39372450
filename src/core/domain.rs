use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// ServerRuntime selects how the router is served
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum ServerRuntime {
    Http,
    Lambda,
}

impl FromStr for ServerRuntime {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(ServerRuntime::Http),
            "lambda" => Ok(ServerRuntime::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown server runtime {}", other).as_str(), Some("BOOKS_RUNTIME".to_string()))),
        }
    }
}

impl Display for ServerRuntime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServerRuntime::Http => write!(f, "http"),
            ServerRuntime::Lambda => write!(f, "lambda"),
        }
    }
}

pub(crate) const STORE_VAR: &str = "BOOKS_STORE";
pub(crate) const TABLE_VAR: &str = "BOOKS_TABLE";
pub(crate) const DYNAMODB_ENDPOINT_VAR: &str = "BOOKS_DYNAMODB_ENDPOINT";
pub(crate) const RUNTIME_VAR: &str = "BOOKS_RUNTIME";
pub(crate) const BIND_ADDR_VAR: &str = "BOOKS_BIND_ADDR";

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub store: RepositoryStore,
    pub table_name: String,
    pub dynamodb_endpoint: String,
    pub runtime: ServerRuntime,
    pub bind_addr: SocketAddr,
}

impl Configuration {
    pub fn new(store: RepositoryStore) -> Self {
        Configuration {
            store,
            table_name: "books".to_string(),
            dynamodb_endpoint: "http://localhost:8000".to_string(),
            runtime: ServerRuntime::Http,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    // unset or blank variables keep their defaults
    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let lookup = |name: &str| lookup(name).filter(|val| !val.trim().is_empty());

        let store = match lookup(STORE_VAR) {
            Some(val) => val.parse()?,
            None => RepositoryStore::Memory,
        };
        let mut config = Configuration::new(store);
        if let Some(table_name) = lookup(TABLE_VAR) {
            config.table_name = table_name.trim().to_string();
        }
        if let Some(endpoint) = lookup(DYNAMODB_ENDPOINT_VAR) {
            config.dynamodb_endpoint = endpoint.trim().to_string();
        }
        if let Some(runtime) = lookup(RUNTIME_VAR) {
            config.runtime = runtime.parse()?;
        }
        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr.trim().parse().map_err(|err| LibraryError::validation(
                format!("invalid bind address {} due to {}", addr, err).as_str(), Some(BIND_ADDR_VAR.to_string())))?;
        }
        Ok(config)
    }
}

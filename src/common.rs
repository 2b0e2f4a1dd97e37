pub use std::collections::BTreeMap;
pub use std::fmt::Display;
pub use std::sync::Arc;

pub use tokio::time::Duration;

pub use log::{debug, error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

pub use elasticsearch::http::response::Response;
pub use elasticsearch::auth::Credentials as EsCredentials;
pub use elasticsearch::http::transport::{
    MultiNodeConnectionPool, Transport as EsTransport, TransportBuilder,
};
pub use elasticsearch::http::{StatusCode, Url};
pub use elasticsearch::{Elasticsearch, SearchParts};

pub use reqwest::Client;

pub use futures::stream::{FuturesUnordered, StreamExt};

pub use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub use anyhow::{anyhow, Context, Result};

pub use getset::Getters;
pub use derive_new::new;

pub use once_cell::sync::Lazy as once_lazy;

pub use async_trait::async_trait;
pub use dotenv::dotenv;

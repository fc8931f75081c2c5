//! # Hostinfo Core
//!
//! Crate compartilhada que define o modelo de dados, a formatação das
//! métricas, a configuração TOML e o leitor de métricas do host.
//!
//! ## Módulos
//! - [`types`] – Snapshots efêmeros (CPU, memória, disco, host, bateria…)
//! - [`format`] – Conversão de unidades e strings de exibição
//! - [`error`] – Erros tipados das consultas e da configuração
//! - [`config`] – Configuração unificada via TOML
//! - [`source`] – Traits das fontes externas (host, ambiente, sensores)
//! - [`metric`] – Catálogo de métricas e política de fallback
//! - [`reader`] – O leitor: uma consulta por métrica

pub mod types;
pub mod format;
pub mod error;
pub mod config;
pub mod source;
pub mod metric;
pub mod reader;

// Re-exports convenientes
pub use config::{AppConfig, DisplayConfig, ReaderConfig};
pub use error::{ConfigError, InfoError};
pub use metric::{Fallback, Metric};
pub use reader::HostMetricsReader;
pub use source::{EnvLookup, FsSensor, HostProbe, ProcessEnv, SensorSource};

//! Configuração unificada via TOML.
//!
//! Um único `config.toml` com a seção `[reader]` (de onde ler) e a seção
//! `[display]` (o que mostrar). Campos ausentes usam o valor padrão.

use crate::error::ConfigError;
use crate::metric::Metric;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Caminho padrão do sensor térmico.
pub const DEFAULT_THERMAL_SENSOR: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Diretório padrão das fontes de energia (baterias).
pub const DEFAULT_POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// Fontes consultadas pelo leitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Arquivo com a temperatura em milésimos de °C
    pub thermal_sensor_path: PathBuf,
    /// Ponto de montagem usado na métrica de disco
    pub disk_mount: PathBuf,
    /// Variável de ambiente com o caminho do shell
    pub shell_var: String,
    /// Diretório sysfs das baterias
    pub power_supply_dir: PathBuf,
    /// Falha do sensor térmico encerra o processo (senão: "N/A")
    pub fatal_temperature: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            thermal_sensor_path: PathBuf::from(DEFAULT_THERMAL_SENSOR),
            disk_mount: PathBuf::from("/"),
            shell_var: "SHELL".into(),
            power_supply_dir: PathBuf::from(DEFAULT_POWER_SUPPLY_DIR),
            fatal_temperature: true,
        }
    }
}

/// O que é exibido.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Métricas na ordem de exibição
    pub metrics: Vec<Metric>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
        }
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reader: ReaderConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    ///
    /// Arquivo ausente ou inválido resulta na configuração padrão.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match Self::try_load(path) {
                Ok(config) => {
                    info!("Configuração carregada de {}", path.display());
                    return config;
                }
                Err(e) => warn!("{e}"),
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Carrega e parseia, propagando o erro.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml (ao lado do executável).
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.reader.thermal_sensor_path.as_os_str().is_empty() {
            errors.push("Caminho do sensor térmico não pode ser vazio".into());
        }
        if !self.reader.disk_mount.is_absolute() {
            errors.push(format!(
                "Ponto de montagem deve ser absoluto: {}",
                self.reader.disk_mount.display()
            ));
        }
        if self.reader.shell_var.trim().is_empty() {
            errors.push("Variável do shell não pode ser vazia".into());
        }
        if self.display.metrics.is_empty() {
            errors.push("Nenhuma métrica selecionada para exibição".into());
        }

        let mut seen = HashSet::new();
        for metric in &self.display.metrics {
            if !seen.insert(*metric) {
                errors.push(format!("Métrica duplicada: {metric}"));
            }
        }

        errors
    }
}

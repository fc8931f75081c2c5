//! Host Metrics Reader – uma consulta por métrica.
//!
//! Cada consulta é independente: lê uma fonte, formata e devolve
//! `Result<String, InfoError>`. Nenhuma consulta chama outra e o leitor não
//! guarda estado mutável, então pode ser compartilhado entre threads.
//!
//! [`HostMetricsReader::render`] aplica a [`Fallback`] da métrica:
//! - temperatura → erro propagado (fatal para o chamador)
//! - disco, bateria → `"N/A"`
//! - CPU, shell → `"Unknown"`
//! - OS, host, kernel, uptime, memória → snapshot zerado
//!
//! Agregação usa apenas o primeiro elemento: primeira CPU (modelo e clock)
//! e primeira bateria.

use crate::config::ReaderConfig;
use crate::error::InfoError;
use crate::format;
use crate::metric::{Fallback, Metric};
use crate::source::{EnvLookup, FsSensor, HostProbe, ProcessEnv, SensorSource};
use crate::types::{CpuDescriptor, HostIdentity, MemorySnapshot, TemperatureReading};
use tracing::debug;

/// Leitor de métricas do host.
pub struct HostMetricsReader<P, E = ProcessEnv, S = FsSensor> {
    probe: P,
    env: E,
    sensor: S,
    config: ReaderConfig,
}

impl<P: HostProbe> HostMetricsReader<P> {
    /// Leitor com ambiente e sistema de arquivos reais.
    pub fn new(probe: P, config: ReaderConfig) -> Self {
        Self::with_sources(probe, ProcessEnv, FsSensor, config)
    }
}

impl<P, E, S> HostMetricsReader<P, E, S>
where
    P: HostProbe,
    E: EnvLookup,
    S: SensorSource,
{
    /// Leitor com todas as fontes injetadas.
    pub fn with_sources(probe: P, env: E, sensor: S, config: ReaderConfig) -> Self {
        Self {
            probe,
            env,
            sensor,
            config,
        }
    }

    // ──────────────────────────────────────────
    // Despacho
    // ──────────────────────────────────────────

    /// Executa a consulta da métrica, sem fallback.
    pub fn query(&self, metric: Metric) -> Result<String, InfoError> {
        match metric {
            Metric::Os => self.os_info(),
            Metric::Machine => self.machine_info(),
            Metric::Kernel => self.kernel_info(),
            Metric::Uptime => self.uptime(),
            Metric::Shell => self.shell(),
            Metric::Cpu => self.cpu_info(),
            Metric::CpuTemp => self.cpu_temperature(),
            Metric::Memory => self.memory_info(),
            Metric::Disk => self.disk_info(),
            Metric::Battery => self.battery_info(),
        }
    }

    /// Política efetiva da métrica, considerando a config.
    pub fn fallback(&self, metric: Metric) -> Fallback {
        match metric.fallback() {
            Fallback::Fatal if !self.config.fatal_temperature => {
                Fallback::Sentinel(format::NOT_AVAILABLE)
            }
            policy => policy,
        }
    }

    /// Executa a consulta e aplica a fallback. Só falha em métricas fatais.
    pub fn render(&self, metric: Metric) -> Result<String, InfoError> {
        let err = match self.query(metric) {
            Ok(line) => return Ok(line),
            Err(e) => e,
        };

        match self.fallback(metric) {
            Fallback::Fatal => Err(err),
            Fallback::Sentinel(sentinel) => {
                debug!("{metric}: {err} → {sentinel:?}");
                Ok(sentinel.to_string())
            }
            Fallback::ZeroValue => {
                debug!("{metric}: {err} → valor zero");
                Ok(self.zero_value(metric))
            }
        }
    }

    /// Linha formatada a partir dos snapshots `Default`.
    fn zero_value(&self, metric: Metric) -> String {
        let host = HostIdentity::default();
        match metric {
            Metric::Os => format::os(&host, std::env::consts::ARCH),
            Metric::Machine => host.hostname,
            Metric::Kernel => host.kernel_version,
            Metric::Uptime => format::uptime(host.uptime_secs),
            Metric::Memory => format::memory(&MemorySnapshot::default()),
            Metric::Shell | Metric::Cpu => format::UNKNOWN.to_string(),
            Metric::CpuTemp | Metric::Disk | Metric::Battery => {
                format::NOT_AVAILABLE.to_string()
            }
        }
    }

    // ──────────────────────────────────────────
    // Consultas
    // ──────────────────────────────────────────

    /// Temperatura do sensor térmico: `" 45.0°C\n"`.
    pub fn cpu_temperature(&self) -> Result<String, InfoError> {
        let path = &self.config.thermal_sensor_path;
        let raw = self
            .sensor
            .read_to_string(path)
            .map_err(|source| InfoError::Sensor {
                path: path.clone(),
                source,
            })?;

        let trimmed = raw.trim();
        let millidegrees = trimmed
            .parse::<i64>()
            .map_err(|_| InfoError::InvalidReading {
                path: path.clone(),
                raw: trimmed.to_string(),
            })?;

        Ok(format::cpu_temperature(TemperatureReading { millidegrees }))
    }

    pub fn disk_info(&self) -> Result<String, InfoError> {
        let usage = self.probe.disk_usage(&self.config.disk_mount)?;
        Ok(format::disk(&usage))
    }

    pub fn os_info(&self) -> Result<String, InfoError> {
        let host = self.probe.host_identity()?;
        Ok(format::os(&host, std::env::consts::ARCH))
    }

    pub fn machine_info(&self) -> Result<String, InfoError> {
        Ok(self.probe.host_identity()?.hostname)
    }

    pub fn kernel_info(&self) -> Result<String, InfoError> {
        Ok(self.probe.host_identity()?.kernel_version)
    }

    pub fn uptime(&self) -> Result<String, InfoError> {
        let host = self.probe.host_identity()?;
        Ok(format::uptime(host.uptime_secs))
    }

    /// Nome do executável do shell. Variável ausente ou vazia é erro.
    pub fn shell(&self) -> Result<String, InfoError> {
        let var = &self.config.shell_var;
        match self.env.var(var) {
            Some(path) if !path.is_empty() => Ok(format::shell_name(&path)),
            _ => Err(InfoError::EnvNotSet(var.clone())),
        }
    }

    /// Modelo e clock da primeira CPU, com o total de CPUs lógicas.
    pub fn cpu_info(&self) -> Result<String, InfoError> {
        let cpus = self.probe.cpus()?;
        let first = cpus.first().ok_or(InfoError::NoCpu)?;
        let descriptor = CpuDescriptor::from_unit(first, self.probe.logical_cores());
        Ok(format::cpu(&descriptor))
    }

    pub fn memory_info(&self) -> Result<String, InfoError> {
        let mem = self.probe.memory()?;
        Ok(format::memory(&mem))
    }

    /// Percentual da primeira bateria.
    pub fn battery_info(&self) -> Result<String, InfoError> {
        let batteries = self.probe.batteries()?;
        let first = batteries.first().ok_or(InfoError::NoBattery)?;
        format::battery(first).ok_or(InfoError::InvalidBattery { full: first.full })
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

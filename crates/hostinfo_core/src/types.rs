//! Definição dos snapshots de métricas do host.
//!
//! Todos os valores são efêmeros: existem apenas durante a consulta e a
//! formatação. `Default` representa o "valor zero" usado quando uma fonte
//! falha silenciosamente.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bytes por GiB (1024³).
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Calcula `used / total * 100`, ou 0 quando o total é zero.
pub fn used_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

// ──────────────────────────────────────────────
// CPU
// ──────────────────────────────────────────────

/// Uma unidade de CPU como reportada pelo provedor (geralmente por core lógico).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CpuUnit {
    /// Nome do modelo (ex: "AMD Ryzen 7 5800X 8-Core Processor")
    pub model_name: String,
    /// Clock atual (MHz)
    pub mhz: f64,
}

/// Descritor de CPU pronto para exibição.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CpuDescriptor {
    pub model_name: String,
    /// Número de CPUs lógicas
    pub logical_cores: usize,
    /// Clock (GHz)
    pub clock_ghz: f64,
}

impl CpuDescriptor {
    /// Monta o descritor a partir da primeira unidade reportada.
    pub fn from_unit(unit: &CpuUnit, logical_cores: usize) -> Self {
        Self {
            model_name: unit.model_name.clone(),
            logical_cores,
            clock_ghz: unit.mhz / 1000.0,
        }
    }
}

// ──────────────────────────────────────────────
// Memória
// ──────────────────────────────────────────────

/// Uso de memória virtual.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl MemorySnapshot {
    pub fn used_gib(&self) -> f64 {
        self.used_bytes as f64 / BYTES_PER_GIB
    }

    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_GIB
    }

    pub fn used_percent(&self) -> f64 {
        used_percent(self.used_bytes, self.total_bytes)
    }
}

// ──────────────────────────────────────────────
// Disco
// ──────────────────────────────────────────────

/// Uso de um sistema de arquivos montado.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiskSnapshot {
    pub mount_point: PathBuf,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl DiskSnapshot {
    /// Uso a partir dos contadores de blocos do `statvfs`.
    ///
    /// Usado = blocos totais - blocos livres (inclui os reservados ao root,
    /// como a coluna "Used" do `df`).
    pub fn from_blocks(
        mount_point: PathBuf,
        blocks: u64,
        blocks_free: u64,
        fragment_size: u64,
    ) -> Self {
        Self {
            mount_point,
            used_bytes: blocks.saturating_sub(blocks_free).saturating_mul(fragment_size),
            total_bytes: blocks.saturating_mul(fragment_size),
        }
    }

    pub fn used_gib(&self) -> f64 {
        self.used_bytes as f64 / BYTES_PER_GIB
    }

    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_GIB
    }

    pub fn used_percent(&self) -> f64 {
        used_percent(self.used_bytes, self.total_bytes)
    }
}

// ──────────────────────────────────────────────
// Host
// ──────────────────────────────────────────────

/// Identidade do host consultada no sistema operacional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostIdentity {
    /// Plataforma/distribuição (ex: "ubuntu")
    pub platform: String,
    /// Versão da plataforma (ex: "24.04")
    pub platform_version: String,
    pub hostname: String,
    pub kernel_version: String,
    pub uptime_secs: u64,
}

// ──────────────────────────────────────────────
// Bateria
// ──────────────────────────────────────────────

/// Carga de uma bateria (mesma unidade em `current` e `full`: µWh ou µAh).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BatteryState {
    pub current: f64,
    pub full: f64,
}

impl BatteryState {
    /// Percentual de carga. `None` se a carga máxima não for positiva.
    pub fn percent(&self) -> Option<f64> {
        if self.full > 0.0 {
            Some(self.current / self.full * 100.0)
        } else {
            None
        }
    }
}

// ──────────────────────────────────────────────
// Temperatura
// ──────────────────────────────────────────────

/// Leitura bruta de um sensor térmico (milésimos de °C).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureReading {
    pub millidegrees: i64,
}

impl TemperatureReading {
    pub fn celsius(&self) -> f64 {
        self.millidegrees as f64 / 1000.0
    }
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

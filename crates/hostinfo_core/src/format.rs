//! Formatação das métricas em strings de exibição.
//!
//! Funções puras: recebem snapshots e devolvem a linha pronta. Nenhuma
//! consulta ao sistema acontece aqui.

use crate::types::{
    BatteryState, CpuDescriptor, DiskSnapshot, HostIdentity, MemorySnapshot, TemperatureReading,
};
use std::path::MAIN_SEPARATOR;

/// Sentinela para métricas sem leitura (disco, bateria).
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinela para métricas sem descritor (CPU, shell).
pub const UNKNOWN: &str = "Unknown";

/// `" 45.5°C\n"`: espaço inicial e quebra de linha fazem parte do formato.
pub fn cpu_temperature(reading: TemperatureReading) -> String {
    format!(" {:.1}°C\n", reading.celsius())
}

pub fn disk(snapshot: &DiskSnapshot) -> String {
    format!(
        "{:.2} GiB used / {:.2} GiB total ({:.0}% used)",
        snapshot.used_gib(),
        snapshot.total_gib(),
        snapshot.used_percent()
    )
}

pub fn memory(snapshot: &MemorySnapshot) -> String {
    format!(
        "{:.2} GiB / {:.2} GiB ({:.0}%)",
        snapshot.used_gib(),
        snapshot.total_gib(),
        snapshot.used_percent()
    )
}

/// `"<plataforma> <versão> <arquitetura>"`.
pub fn os(identity: &HostIdentity, arch: &str) -> String {
    format!("{} {} {}", identity.platform, identity.platform_version, arch)
}

pub fn cpu(descriptor: &CpuDescriptor) -> String {
    format!(
        "{} ({}) @ {:.2} GHz",
        descriptor.model_name, descriptor.logical_cores, descriptor.clock_ghz
    )
}

/// Percentual da bateria, ou `None` se a carga máxima for inválida.
pub fn battery(state: &BatteryState) -> Option<String> {
    state.percent().map(|p| format!("{p:.0}%"))
}

/// Último componente do caminho do shell (`/bin/zsh` → `zsh`).
///
/// Separadores finais são ignorados; `.` e `..` são componentes comuns
/// (`/bin/..` → `..`). Só separadores (ex: `/`) resultam em `"/"`.
pub fn shell_name(shell_path: &str) -> String {
    let trimmed = shell_path.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() {
        return if shell_path.is_empty() {
            ".".to_string()
        } else {
            MAIN_SEPARATOR.to_string()
        };
    }

    match trimmed.rfind(MAIN_SEPARATOR) {
        Some(i) => trimmed[i + MAIN_SEPARATOR.len_utf8()..].to_string(),
        None => trimmed.to_string(),
    }
}

// ──────────────────────────────────────────────
// Uptime
// ──────────────────────────────────────────────

/// Arredonda segundos para o minuto mais próximo (empate arredonda para cima).
pub fn round_to_minute(secs: u64) -> u64 {
    secs.saturating_add(30) / 60 * 60
}

/// Forma textual padrão de duração: `"0s"`, `"2m0s"`, `"2h15m0s"`.
///
/// Horas não são agrupadas em dias (`"49h0m0s"`).
pub fn duration_text(secs: u64) -> String {
    if secs == 0 {
        return "0s".into();
    }

    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn uptime(secs: u64) -> String {
    duration_text(round_to_minute(secs))
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

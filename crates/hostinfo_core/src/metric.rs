//! Catálogo de métricas e política de fallback por métrica.

use crate::error::InfoError;
use crate::format::{NOT_AVAILABLE, UNKNOWN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uma métrica exibível.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Os,
    Machine,
    Kernel,
    Uptime,
    Shell,
    Cpu,
    CpuTemp,
    Memory,
    Disk,
    Battery,
}

/// O que fazer quando a consulta de uma métrica falha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Propaga o erro: o chamador encerra o processo.
    Fatal,
    /// Substitui a leitura por uma string fixa.
    Sentinel(&'static str),
    /// Formata o snapshot `Default` (campos vazios/zero).
    ZeroValue,
}

impl Metric {
    /// Todas as métricas, na ordem de exibição padrão.
    pub const ALL: [Metric; 10] = [
        Metric::Os,
        Metric::Machine,
        Metric::Kernel,
        Metric::Uptime,
        Metric::Shell,
        Metric::Cpu,
        Metric::CpuTemp,
        Metric::Memory,
        Metric::Disk,
        Metric::Battery,
    ];

    /// Nome usado na config, na CLI e no JSON.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Os => "os",
            Metric::Machine => "machine",
            Metric::Kernel => "kernel",
            Metric::Uptime => "uptime",
            Metric::Shell => "shell",
            Metric::Cpu => "cpu",
            Metric::CpuTemp => "cpu_temp",
            Metric::Memory => "memory",
            Metric::Disk => "disk",
            Metric::Battery => "battery",
        }
    }

    /// Rótulo para a saída em texto.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Os => "OS",
            Metric::Machine => "Host",
            Metric::Kernel => "Kernel",
            Metric::Uptime => "Uptime",
            Metric::Shell => "Shell",
            Metric::Cpu => "CPU",
            Metric::CpuTemp => "CPU Temp",
            Metric::Memory => "Memory",
            Metric::Disk => "Disk",
            Metric::Battery => "Battery",
        }
    }

    /// Política histórica de cada métrica.
    ///
    /// A temperatura é fatal por padrão; `ReaderConfig::fatal_temperature`
    /// permite rebaixá-la para sentinela.
    pub fn fallback(self) -> Fallback {
        match self {
            Metric::CpuTemp => Fallback::Fatal,
            Metric::Disk | Metric::Battery => Fallback::Sentinel(NOT_AVAILABLE),
            Metric::Cpu | Metric::Shell => Fallback::Sentinel(UNKNOWN),
            Metric::Os | Metric::Machine | Metric::Kernel | Metric::Uptime | Metric::Memory => {
                Fallback::ZeroValue
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = InfoError;

    /// Aceita `cpu_temp`, `cpu-temp` e variações de caixa.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| InfoError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dash_and_case() {
        assert_eq!("cpu-temp".parse::<Metric>().unwrap(), Metric::CpuTemp);
        assert_eq!("CPU_TEMP".parse::<Metric>().unwrap(), Metric::CpuTemp);
        assert_eq!(" disk ".parse::<Metric>().unwrap(), Metric::Disk);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "gpu".parse::<Metric>(),
            Err(InfoError::UnknownMetric(name)) if name == "gpu"
        ));
    }

    #[test]
    fn display_matches_name() {
        for m in Metric::ALL {
            assert_eq!(m.to_string().parse::<Metric>().unwrap(), m);
        }
    }

    #[test]
    fn historic_fallbacks() {
        assert_eq!(Metric::CpuTemp.fallback(), Fallback::Fatal);
        assert_eq!(Metric::Disk.fallback(), Fallback::Sentinel("N/A"));
        assert_eq!(Metric::Battery.fallback(), Fallback::Sentinel("N/A"));
        assert_eq!(Metric::Cpu.fallback(), Fallback::Sentinel("Unknown"));
        assert_eq!(Metric::Shell.fallback(), Fallback::Sentinel("Unknown"));
        assert_eq!(Metric::Memory.fallback(), Fallback::ZeroValue);
        assert_eq!(Metric::Uptime.fallback(), Fallback::ZeroValue);
    }

    #[test]
    fn serde_uses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            metrics: Vec<Metric>,
        }
        let w: Wrapper = toml::from_str(r#"metrics = ["cpu_temp", "os"]"#).unwrap();
        assert_eq!(w.metrics, vec![Metric::CpuTemp, Metric::Os]);
    }
}

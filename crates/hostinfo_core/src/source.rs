//! Fontes externas consumidas pelo leitor.
//!
//! Cada fonte é uma trait para que os testes substituam o host real por
//! valores fixos. As implementações reais do ambiente e do sistema de
//! arquivos ficam aqui; o provedor de hardware (`sysinfo`) fica no binário.

use crate::error::InfoError;
use crate::types::{BatteryState, CpuUnit, DiskSnapshot, HostIdentity, MemorySnapshot};
use std::path::Path;

/// Provedor de informações do host e do hardware.
pub trait HostProbe {
    /// Unidades de CPU detectadas, na ordem do sistema.
    fn cpus(&self) -> Result<Vec<CpuUnit>, InfoError>;

    /// Número de CPUs lógicas utilizáveis pelo processo.
    fn logical_cores(&self) -> usize;

    fn memory(&self) -> Result<MemorySnapshot, InfoError>;

    /// Uso do sistema de arquivos montado exatamente em `mount`.
    fn disk_usage(&self, mount: &Path) -> Result<DiskSnapshot, InfoError>;

    fn host_identity(&self) -> Result<HostIdentity, InfoError>;

    /// Todas as baterias, na ordem de enumeração.
    fn batteries(&self) -> Result<Vec<BatteryState>, InfoError>;
}

/// Consulta a variáveis de ambiente.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Option<String>;
}

/// Leitura de arquivos de sensor como texto.
pub trait SensorSource {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Ambiente real do processo.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Sistema de arquivos real.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSensor;

impl SensorSource for FsSensor {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_env() {
        let env = |key: &str| (key == "SHELL").then(|| "/bin/zsh".to_string());
        assert_eq!(env.var("SHELL").as_deref(), Some("/bin/zsh"));
        assert_eq!(env.var("HOME"), None);
    }

    #[test]
    fn fs_sensor_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp");
        std::fs::write(&path, "42000\n").unwrap();
        assert_eq!(FsSensor.read_to_string(&path).unwrap(), "42000\n");
    }

    #[test]
    fn fs_sensor_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsSensor.read_to_string(&dir.path().join("nope")).is_err());
    }
}

//! Provedor de hardware via `sysinfo`.
//!
//! Cada consulta cria seu próprio `System`/`Disks` e faz apenas o refresh
//! necessário; nada é reaproveitado entre consultas.
//!
//! - `sysinfo`: CPUs, memória, ponto de montagem, identidade do host
//! - sysfs `cpufreq`: frequência máxima de cada CPU, quando exposta
//! - `statvfs` (via `nix`): blocos totais e livres do disco
//! - sysfs `power_supply`: baterias (ver [`crate::power_supply`])

use crate::power_supply::PowerSupply;
use hostinfo_core::error::InfoError;
use hostinfo_core::source::HostProbe;
use hostinfo_core::types::{BatteryState, CpuUnit, DiskSnapshot, HostIdentity, MemorySnapshot};
use std::path::{Path, PathBuf};
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

/// Diretório sysfs com `cpu<N>/cpufreq`.
const DEFAULT_CPU_SYSFS_DIR: &str = "/sys/devices/system/cpu";

/// Provedor real do host.
pub struct SysinfoProbe {
    power: PowerSupply,
    cpu_dir: PathBuf,
}

impl SysinfoProbe {
    pub fn new(power: PowerSupply) -> Self {
        Self {
            power,
            cpu_dir: PathBuf::from(DEFAULT_CPU_SYSFS_DIR),
        }
    }
}

/// `cpuinfo_max_freq` da CPU `index` em MHz (o arquivo está em kHz).
///
/// `None` se o arquivo não existir ou não for numérico.
fn max_freq_mhz(cpu_dir: &Path, index: usize) -> Option<f64> {
    let path = cpu_dir
        .join(format!("cpu{index}"))
        .join("cpufreq")
        .join("cpuinfo_max_freq");
    let raw = std::fs::read_to_string(&path).ok()?;
    let khz: u64 = raw.trim().parse().ok()?;
    Some(khz as f64 / 1000.0)
}

impl HostProbe for SysinfoProbe {
    fn cpus(&self) -> Result<Vec<CpuUnit>, InfoError> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
        );

        let units: Vec<CpuUnit> = sys
            .cpus()
            .iter()
            .enumerate()
            .map(|(index, cpu)| CpuUnit {
                model_name: cpu.brand().trim().to_string(),
                // cpufreq primeiro; sysinfo dá a frequência atual
                mhz: max_freq_mhz(&self.cpu_dir, index).unwrap_or(cpu.frequency() as f64),
            })
            .collect();

        debug!("sysinfo: {} CPUs", units.len());
        Ok(units)
    }

    fn logical_cores(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or_else(|_| {
                let sys = System::new_with_specifics(
                    RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()),
                );
                sys.cpus().len()
            })
    }

    fn memory(&self) -> Result<MemorySnapshot, InfoError> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        let total = sys.total_memory();
        if total == 0 {
            return Err(InfoError::Probe("memória total indisponível".into()));
        }

        Ok(MemorySnapshot {
            used_bytes: sys.used_memory(),
            total_bytes: total,
        })
    }

    fn disk_usage(&self, mount: &Path) -> Result<DiskSnapshot, InfoError> {
        let disks = Disks::new_with_refreshed_list();

        let disk = disks
            .iter()
            .find(|d| d.mount_point() == mount)
            .ok_or_else(|| InfoError::DiskNotFound(mount.to_path_buf()))?;

        let snapshot = block_usage(mount)?;
        debug!(
            "statvfs: {} em {} ({} / {} bytes usados)",
            disk.name().to_string_lossy(),
            mount.display(),
            snapshot.used_bytes,
            snapshot.total_bytes
        );

        Ok(snapshot)
    }

    /// Campos não reportados pelo sistema ficam vazios.
    fn host_identity(&self) -> Result<HostIdentity, InfoError> {
        Ok(HostIdentity {
            platform: System::distribution_id(),
            platform_version: System::os_version().unwrap_or_default(),
            hostname: System::host_name().unwrap_or_default(),
            kernel_version: System::kernel_version().unwrap_or_default(),
            uptime_secs: System::uptime(),
        })
    }

    fn batteries(&self) -> Result<Vec<BatteryState>, InfoError> {
        self.power.batteries()
    }
}

/// Contadores de blocos do sistema de arquivos montado em `mount`.
#[cfg(unix)]
fn block_usage(mount: &Path) -> Result<DiskSnapshot, InfoError> {
    use nix::sys::statvfs::statvfs;

    let stats = statvfs(mount)
        .map_err(|e| InfoError::Probe(format!("statvfs {}: {e}", mount.display())))?;

    Ok(DiskSnapshot::from_blocks(
        mount.to_path_buf(),
        stats.blocks() as u64,
        stats.blocks_free() as u64,
        stats.fragment_size() as u64,
    ))
}

#[cfg(not(unix))]
fn block_usage(mount: &Path) -> Result<DiskSnapshot, InfoError> {
    Err(InfoError::Probe(format!(
        "contadores de blocos indisponíveis para {}",
        mount.display()
    )))
}

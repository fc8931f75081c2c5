//! Baterias via sysfs (`/sys/class/power_supply`).
//!
//! Cada subdiretório com `type` = `Battery` vira um [`BatteryState`].
//! A carga vem de `energy_now`/`energy_full` (µWh) ou, na falta deles, de
//! `charge_now`/`charge_full` (µAh). Diretórios são lidos em ordem alfabética
//! (`BAT0` antes de `BAT1`).

use hostinfo_core::config::DEFAULT_POWER_SUPPLY_DIR;
use hostinfo_core::error::InfoError;
use hostinfo_core::types::BatteryState;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pares (atual, máximo) aceitos, em ordem de preferência.
const CHARGE_FILES: [(&str, &str); 2] = [("energy_now", "energy_full"), ("charge_now", "charge_full")];

/// Enumerador de baterias.
#[derive(Debug, Clone)]
pub struct PowerSupply {
    dir: PathBuf,
}

impl Default for PowerSupply {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_SUPPLY_DIR)
    }
}

impl PowerSupply {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Todas as baterias legíveis. Diretório inexistente é erro.
    pub fn batteries(&self) -> Result<Vec<BatteryState>, InfoError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            InfoError::Probe(format!("{}: {e}", self.dir.display()))
        })?;

        let mut supplies: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        supplies.sort();

        let mut batteries = Vec::new();
        for supply in supplies {
            if read_trimmed(&supply.join("type")).as_deref() != Some("Battery") {
                continue;
            }
            match read_charge(&supply) {
                Some(state) => batteries.push(state),
                None => debug!("{}: sem leitura de carga", supply.display()),
            }
        }

        Ok(batteries)
    }
}

fn read_charge(supply: &Path) -> Option<BatteryState> {
    CHARGE_FILES.iter().find_map(|(now, full)| {
        Some(BatteryState {
            current: read_f64(&supply.join(now))?,
            full: read_f64(&supply.join(full))?,
        })
    })
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

fn read_f64(path: &Path) -> Option<f64> {
    read_trimmed(path)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn supply(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), format!("{content}\n")).unwrap();
        }
    }

    #[test]
    fn reads_energy_files() {
        let root = tempfile::tempdir().unwrap();
        supply(
            root.path(),
            "BAT0",
            &[("type", "Battery"), ("energy_now", "25000000"), ("energy_full", "50000000")],
        );

        let batteries = PowerSupply::new(root.path()).batteries().unwrap();
        assert_eq!(
            batteries,
            vec![BatteryState {
                current: 25_000_000.0,
                full: 50_000_000.0
            }]
        );
        assert_eq!(batteries[0].percent(), Some(50.0));
    }

    #[test]
    fn falls_back_to_charge_files() {
        let root = tempfile::tempdir().unwrap();
        supply(
            root.path(),
            "BAT0",
            &[("type", "Battery"), ("charge_now", "3000000"), ("charge_full", "4000000")],
        );

        let batteries = PowerSupply::new(root.path()).batteries().unwrap();
        assert_eq!(batteries[0].percent(), Some(75.0));
    }

    #[test]
    fn skips_mains_and_unreadable_batteries() {
        let root = tempfile::tempdir().unwrap();
        supply(root.path(), "AC", &[("type", "Mains"), ("online", "1")]);
        supply(root.path(), "BAT0", &[("type", "Battery"), ("energy_now", "garbage")]);
        supply(
            root.path(),
            "BAT1",
            &[("type", "Battery"), ("energy_now", "10"), ("energy_full", "40")],
        );

        let batteries = PowerSupply::new(root.path()).batteries().unwrap();
        assert_eq!(batteries.len(), 1);
        assert_eq!(batteries[0].percent(), Some(25.0));
    }

    #[test]
    fn batteries_are_sorted_by_name() {
        let root = tempfile::tempdir().unwrap();
        supply(
            root.path(),
            "BAT1",
            &[("type", "Battery"), ("energy_now", "1"), ("energy_full", "4")],
        );
        supply(
            root.path(),
            "BAT0",
            &[("type", "Battery"), ("energy_now", "3"), ("energy_full", "4")],
        );

        let batteries = PowerSupply::new(root.path()).batteries().unwrap();
        assert_eq!(batteries[0].current, 3.0);
        assert_eq!(batteries[1].current, 1.0);
    }

    #[test]
    fn empty_dir_has_no_batteries() {
        let root = tempfile::tempdir().unwrap();
        assert!(PowerSupply::new(root.path()).batteries().unwrap().is_empty());
    }

    #[test]
    fn missing_dir_is_error() {
        let root = tempfile::tempdir().unwrap();
        let ps = PowerSupply::new(root.path().join("power_supply"));
        assert!(matches!(ps.batteries(), Err(InfoError::Probe(_))));
    }
}

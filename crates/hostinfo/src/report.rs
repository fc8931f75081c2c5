//! Relatório: as linhas renderizadas, em texto ou JSON.

use hostinfo_core::error::InfoError;
use hostinfo_core::metric::Metric;
use hostinfo_core::reader::HostMetricsReader;
use hostinfo_core::source::{EnvLookup, HostProbe, SensorSource};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Falha de uma métrica com política fatal.
#[derive(Debug, thiserror::Error)]
#[error("{metric}: {source}")]
pub struct FatalMetric {
    pub metric: Metric,
    #[source]
    pub source: InfoError,
}

/// Métricas renderizadas, na ordem pedida.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(Metric, String)>,
}

impl Report {
    /// Renderiza cada métrica; a primeira falha fatal interrompe a coleta.
    pub fn collect<P, E, S>(
        reader: &HostMetricsReader<P, E, S>,
        metrics: &[Metric],
    ) -> Result<Self, FatalMetric>
    where
        P: HostProbe,
        E: EnvLookup,
        S: SensorSource,
    {
        let entries = metrics
            .iter()
            .map(|&metric| {
                reader
                    .render(metric)
                    .map(|line| (metric, line))
                    .map_err(|source| FatalMetric { metric, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(Metric, String)] {
        &self.entries
    }

    /// `"<rótulo>: <valor>"` por linha, rótulos alinhados à direita.
    ///
    /// Espaços nas bordas do valor (ex: `" 45.0°C\n"`) são removidos.
    pub fn to_text(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(m, _)| m.label().len())
            .max()
            .unwrap_or(0);

        self.entries
            .iter()
            .map(|(metric, value)| format!("{:>width$}: {}\n", metric.label(), value.trim()))
            .collect()
    }

    /// Objeto JSON `{métrica: valor}` preservando a ordem; valores sem ajuste.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, value) in self.entries() {
            map.serialize_entry(metric.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostinfo_core::config::ReaderConfig;
    use hostinfo_core::types::{BatteryState, CpuUnit, DiskSnapshot, HostIdentity, MemorySnapshot};
    use std::path::Path;

    /// Host mínimo: só hostname e uptime; sem CPU, memória, disco ou bateria.
    struct EmptyProbe;

    impl HostProbe for EmptyProbe {
        fn cpus(&self) -> Result<Vec<CpuUnit>, InfoError> {
            Ok(Vec::new())
        }
        fn logical_cores(&self) -> usize {
            1
        }
        fn memory(&self) -> Result<MemorySnapshot, InfoError> {
            Err(InfoError::Probe("memory".into()))
        }
        fn disk_usage(&self, mount: &Path) -> Result<DiskSnapshot, InfoError> {
            Err(InfoError::DiskNotFound(mount.to_path_buf()))
        }
        fn host_identity(&self) -> Result<HostIdentity, InfoError> {
            Ok(HostIdentity {
                hostname: "box".into(),
                uptime_secs: 90,
                ..Default::default()
            })
        }
        fn batteries(&self) -> Result<Vec<BatteryState>, InfoError> {
            Ok(Vec::new())
        }
    }

    struct Sensor(&'static str);

    impl SensorSource for Sensor {
        fn read_to_string(&self, _path: &Path) -> std::io::Result<String> {
            Ok(self.0.to_string())
        }
    }

    type EnvFn = fn(&str) -> Option<String>;

    fn fish_env(key: &str) -> Option<String> {
        (key == "SHELL").then(|| "/usr/bin/fish".to_string())
    }

    fn reader(sensor: &'static str) -> HostMetricsReader<EmptyProbe, EnvFn, Sensor> {
        HostMetricsReader::with_sources(
            EmptyProbe,
            fish_env as EnvFn,
            Sensor(sensor),
            ReaderConfig::default(),
        )
    }

    #[test]
    fn text_aligns_labels_and_trims_values() {
        let r = reader("45000\n");
        let report = Report::collect(&r, &[Metric::Shell, Metric::CpuTemp, Metric::Battery]).unwrap();
        assert_eq!(
            report.to_text(),
            "   Shell: fish\nCPU Temp: 45.0°C\n Battery: N/A\n"
        );
    }

    #[test]
    fn json_keeps_order_and_raw_values() {
        let r = reader("45000");
        let report = Report::collect(&r, &[Metric::Uptime, Metric::Machine, Metric::CpuTemp]).unwrap();
        let json = report.to_json().unwrap();

        let uptime = json.find("\"uptime\"").unwrap();
        let machine = json.find("\"machine\"").unwrap();
        assert!(uptime < machine);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["uptime"], "2m0s");
        assert_eq!(value["machine"], "box");
        assert_eq!(value["cpu_temp"], " 45.0°C\n");
    }

    #[test]
    fn fatal_metric_stops_collection() {
        let r = reader("not-a-number");
        let err = Report::collect(&r, &[Metric::Shell, Metric::CpuTemp, Metric::Disk]).unwrap_err();
        assert_eq!(err.metric, Metric::CpuTemp);
        assert!(err.to_string().starts_with("cpu_temp: "));
    }

    #[test]
    fn failed_non_fatal_metrics_use_sentinels() {
        let r = reader("45000");
        let report = Report::collect(&r, &[Metric::Cpu, Metric::Disk, Metric::Memory]).unwrap();
        let values: Vec<&str> = report.entries().iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, vec!["Unknown", "N/A", "0.00 GiB / 0.00 GiB (0%)"]);
    }
}

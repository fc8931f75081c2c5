//! # Hostinfo
//!
//! Lê métricas do host (CPU, temperatura, memória, disco, OS, kernel,
//! uptime, shell, bateria) e imprime uma linha por métrica, para barras de
//! status e greeters.
//!
//! ## Uso
//! ```bash
//! hostinfo                      # Métricas da config, em texto
//! hostinfo cpu memory disk      # Só as métricas pedidas
//! hostinfo --json               # Objeto JSON {métrica: valor}
//! hostinfo -c ~/.config/hostinfo.toml
//! hostinfo --write-default-config  # Cria o config.toml padrão e sai
//! ```
//!
//! Fora de `--write-default-config`, nenhum arquivo é escrito.
//!
//! Falha de uma métrica fatal (por padrão, a temperatura da CPU) encerra o
//! processo com status 1 sem imprimir o relatório.

mod power_supply;
mod probe;
mod report;

use clap::Parser;
use hostinfo_core::config::AppConfig;
use hostinfo_core::metric::Metric;
use hostinfo_core::reader::HostMetricsReader;
use power_supply::PowerSupply;
use probe::SysinfoProbe;
use report::Report;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(name = "hostinfo", version, about = "Métricas do host como linhas de exibição")]
struct Args {
    /// Arquivo de configuração (padrão: config.toml ao lado do executável)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Imprime um objeto JSON em vez de texto
    #[arg(long)]
    json: bool,

    /// Escreve a configuração padrão no caminho da config e sai
    #[arg(long)]
    write_default_config: bool,

    /// Métricas a exibir (os, machine, kernel, uptime, shell, cpu, cpu_temp,
    /// memory, disk, battery). Padrão: `display.metrics` da config
    metrics: Vec<Metric>,
}

fn main() -> ExitCode {
    // ── Logging (stderr: stdout fica só com o relatório) ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(AppConfig::default_path);

    if args.write_default_config {
        return match AppConfig::default().save(&config_path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                eprintln!("hostinfo: {e}");
                ExitCode::FAILURE
            }
        };
    }

    // ── Carregar config (só leitura; sem arquivo, usa o padrão) ──
    let config = AppConfig::load(&config_path);
    for problem in config.validate() {
        warn!("Config: {problem}");
    }

    let metrics = if args.metrics.is_empty() {
        config.display.metrics.clone()
    } else {
        args.metrics
    };

    // ── Leitor ──
    let power = PowerSupply::new(&config.reader.power_supply_dir);
    let reader = HostMetricsReader::new(SysinfoProbe::new(power), config.reader);

    let report = match Report::collect(&reader, &metrics) {
        Ok(report) => report,
        Err(e) => {
            error!("Métrica fatal falhou: {e}");
            eprintln!("hostinfo: {e}");
            return ExitCode::FAILURE;
        }
    };

    // ── Saída ──
    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Erro ao serializar relatório: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report.to_text());
    }

    ExitCode::SUCCESS
}

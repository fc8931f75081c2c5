//! Erros das consultas de métricas e da configuração.

use std::path::PathBuf;

/// Falha de uma consulta individual.
///
/// O leitor sempre devolve o erro; quem decide entre abortar, sentinela ou
/// valor zero é a [`Fallback`](crate::metric::Fallback) da métrica.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("Falha ao ler sensor {}: {source}", .path.display())]
    Sensor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Leitura inválida em {}: {raw:?}", .path.display())]
    InvalidReading { path: PathBuf, raw: String },

    #[error("Nenhum descritor de CPU disponível")]
    NoCpu,

    #[error("Nenhuma bateria encontrada")]
    NoBattery,

    #[error("Bateria com carga máxima inválida ({full})")]
    InvalidBattery { full: f64 },

    #[error("Nenhum sistema de arquivos montado em {}", .0.display())]
    DiskNotFound(PathBuf),

    #[error("Falha do provedor: {0}")]
    Probe(String),

    #[error("Variável de ambiente {0} não definida")]
    EnvNotSet(String),

    #[error("Métrica desconhecida: {0:?}")]
    UnknownMetric(String),
}

/// Erros de leitura/escrita do `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Erro ao ler {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro ao parsear {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Erro ao serializar configuração: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Erro ao salvar {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

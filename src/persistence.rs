//! # Persistência — Salvamento e Carregamento da Configuração em Disco
//!
//! Serializa/desserializa o [`TruthConfig`] como JSON, por padrão em
//! `data/truth_config.json`. Serve para reproduzir experimentos com os
//! mesmos parâmetros do cálculo.
//!
//! ## Formato
//!
//! ```json
//! {
//!   "evidential_horizon": 1.0,
//!   "projection_decay": 0.8
//! }
//! ```
//!
//! Campos ausentes assumem o valor padrão; valores fora do domínio fazem a
//! desserialização falhar.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::TruthConfig;

/// Caminho padrão do arquivo de configuração (relativo à raiz do projeto).
pub const CONFIG_PATH: &str = "data/truth_config.json";

/// Salva a configuração em disco como JSON pretty-printed.
///
/// Cria o diretório pai se não existir.
///
/// # Erros
///
/// Retorna erro se não conseguir criar o diretório, serializar,
/// ou escrever no arquivo.
pub fn save_config(config: &TruthConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config).context("Falha ao serializar TruthConfig")?;
    std::fs::write(path, json)
        .with_context(|| format!("Falha ao escrever {}", path.display()))?;
    Ok(())
}

/// Carrega a configuração do disco, ou retorna a padrão se o arquivo não existir.
///
/// # Erros
///
/// Retorna erro se o arquivo existir mas estiver corrompido
/// ou com parâmetros fora do domínio.
pub fn load_config(path: &Path) -> Result<TruthConfig> {
    if !path.exists() {
        tracing::info!("Nenhum {} encontrado, usando configuração padrão", path.display());
        return Ok(TruthConfig::default());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let config: TruthConfig = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    tracing::info!(
        horizon = config.evidential_horizon(),
        decay = config.projection_decay(),
        "Configuração carregada de {}",
        path.display()
    );
    Ok(config)
}

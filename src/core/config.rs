//! # TruthConfig — Parâmetros Ajustáveis do Cálculo
//!
//! Dois parâmetros mudam o significado de todas as conversões futuras:
//!
//! | Parâmetro | Padrão | Domínio | Efeito |
//! |-----------|--------|---------|--------|
//! | `evidential_horizon` (`k`) | 1.0 | `(0, 1e100]` | Velocidade de saturação da confiança |
//! | `projection_decay` | 0.8 | `(0, 1]` | Retenção de confiança por unidade de tempo |
//!
//! ## Contexto Explícito vs. Global
//!
//! O caminho preferido é passar um [`TruthConfig`] explicitamente: todos os
//! combinadores que dependem do horizonte ou do decaimento são métodos dele
//! (veja [`crate::inference`]). Threads de raciocínio concorrentes ficam
//! seguras por construção.
//!
//! Para quem precisa do comportamento de "configuração de processo", existe
//! uma instância global protegida por [`RwLock`], lida e alterada pelas
//! funções [`global_config`], [`set_global_config`], [`set_evidential_horizon`],
//! [`set_projection_decay`] e [`reset_global_config`]. Cada chamada do
//! cálculo lê um *snapshot* copiado, nunca uma configuração pela metade.
//!
//! Alterar a configuração **não** revisa valores já calculados.

use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::{Result, TruthError};

/// Horizonte evidencial inicial.
pub const DEFAULT_EVIDENTIAL_HORIZON: f64 = 1.0;

/// Fator de decaimento inicial da projeção temporal.
pub const DEFAULT_PROJECTION_DECAY: f64 = 0.8;

/// Maior horizonte evidencial aceito.
///
/// Com `k ≤ 1e100`, `c2w` de qualquer confiança em `[0, 1)` fica abaixo de
/// `~1e117`, e somas de pesos como `n₁ + n₂` e `w + k` continuam finitas.
pub const MAX_EVIDENTIAL_HORIZON: f64 = 1e100;

/// Parâmetros do cálculo de verdade, sempre válidos.
///
/// Construído via [`TruthConfig::new`], [`Default`] ou desserialização (que
/// também valida). Campos ausentes no JSON assumem o valor padrão.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct TruthConfig {
    evidential_horizon: f64,
    projection_decay: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    evidential_horizon: f64,
    projection_decay: f64,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            evidential_horizon: DEFAULT_EVIDENTIAL_HORIZON,
            projection_decay: DEFAULT_PROJECTION_DECAY,
        }
    }
}

impl TryFrom<RawConfig> for TruthConfig {
    type Error = TruthError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        TruthConfig::new(raw.evidential_horizon, raw.projection_decay)
    }
}

impl Default for TruthConfig {
    fn default() -> Self {
        Self {
            evidential_horizon: DEFAULT_EVIDENTIAL_HORIZON,
            projection_decay: DEFAULT_PROJECTION_DECAY,
        }
    }
}

impl TruthConfig {
    /// Cria uma configuração validada.
    ///
    /// # Erros
    ///
    /// - [`TruthError::InvalidHorizon`] se o horizonte não estiver em `(0, MAX_EVIDENTIAL_HORIZON]`
    /// - [`TruthError::InvalidDecay`] se o decaimento não estiver em `(0, 1]`
    pub fn new(evidential_horizon: f64, projection_decay: f64) -> Result<Self> {
        Ok(Self {
            evidential_horizon: validate_horizon(evidential_horizon)?,
            projection_decay: validate_decay(projection_decay)?,
        })
    }

    /// Horizonte evidencial `k`.
    pub fn evidential_horizon(&self) -> f64 {
        self.evidential_horizon
    }

    /// Fator de retenção de confiança por unidade de tempo.
    pub fn projection_decay(&self) -> f64 {
        self.projection_decay
    }

    /// Cópia com outro horizonte evidencial.
    pub fn with_evidential_horizon(self, evidential_horizon: f64) -> Result<Self> {
        Ok(Self {
            evidential_horizon: validate_horizon(evidential_horizon)?,
            ..self
        })
    }

    /// Cópia com outro fator de decaimento.
    pub fn with_projection_decay(self, projection_decay: f64) -> Result<Self> {
        Ok(Self {
            projection_decay: validate_decay(projection_decay)?,
            ..self
        })
    }
}

fn validate_horizon(value: f64) -> Result<f64> {
    if value > 0.0 && value <= MAX_EVIDENTIAL_HORIZON {
        Ok(value)
    } else {
        Err(TruthError::InvalidHorizon { value })
    }
}

fn validate_decay(value: f64) -> Result<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(TruthError::InvalidDecay { value })
    }
}

// ─── Configuração global do processo ─────────────────────────────

/// Instância global, inicializada com os valores padrão no primeiro acesso.
static GLOBAL_CONFIG: OnceLock<RwLock<TruthConfig>> = OnceLock::new();

fn global() -> &'static RwLock<TruthConfig> {
    GLOBAL_CONFIG.get_or_init(|| RwLock::new(TruthConfig::default()))
}

/// Snapshot da configuração global atual.
pub fn global_config() -> TruthConfig {
    *global().read()
}

/// Substitui a configuração global inteira.
pub fn set_global_config(config: TruthConfig) {
    *global().write() = config;
    tracing::info!(
        horizon = config.evidential_horizon,
        decay = config.projection_decay,
        "Configuração global do cálculo substituída"
    );
}

/// Restaura a configuração global para os valores padrão.
pub fn reset_global_config() {
    set_global_config(TruthConfig::default());
}

/// Horizonte evidencial global atual.
pub fn evidential_horizon() -> f64 {
    global().read().evidential_horizon
}

/// Fator de decaimento global atual.
pub fn projection_decay() -> f64 {
    global().read().projection_decay
}

/// Altera o horizonte evidencial global.
///
/// # Erros
///
/// [`TruthError::InvalidHorizon`] — a configuração global não é alterada.
pub fn set_evidential_horizon(value: f64) -> Result<()> {
    let value = validate_horizon(value)?;
    global().write().evidential_horizon = value;
    tracing::info!(horizon = value, "Horizonte evidencial global atualizado");
    Ok(())
}

/// Altera o fator de decaimento global.
///
/// # Erros
///
/// [`TruthError::InvalidDecay`] — a configuração global não é alterada.
pub fn set_projection_decay(value: f64) -> Result<()> {
    let value = validate_decay(value)?;
    global().write().projection_decay = value;
    tracing::info!(decay = value, "Decaimento de projeção global atualizado");
    Ok(())
}

/// Serializa testes que mexem na configuração global.
#[cfg(test)]
pub(crate) static GLOBAL_TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

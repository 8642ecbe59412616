//! # Erros do Cálculo de Verdade
//!
//! O cálculo é formado por funções puras, então quase nada pode falhar.
//! Existem só três armadilhas numéricas reais, e todas são **rejeitadas na
//! fronteira** em vez de deixar `NaN`/`inf` vazar para inferências futuras:
//!
//! | Armadilha | Onde | Variante |
//! |-----------|------|----------|
//! | `c ≥ 1` em `c2w` (divisão por `1 − c`) | [`TruthConfig::c2w`](crate::core::TruthConfig::c2w) | [`TruthError::DegenerateConfidence`] |
//! | Peso total zero na revisão | [`TruthConfig::revision`](crate::core::TruthConfig::revision) | [`TruthError::ZeroEvidence`] |
//! | Peso que transborda para `inf` | `c2w`, revisão | [`TruthError::WeightOverflow`] |
//!
//! As demais variantes são erros de validação de entrada: valores fora do
//! domínio ao construir um [`TruthValue`](crate::core::TruthValue) ou um
//! [`TruthConfig`](crate::core::TruthConfig).

use thiserror::Error;

/// Erro do cálculo de verdade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TruthError {
    #[error("Frequency {value} is out of range [0.0, 1.0]")]
    FrequencyOutOfRange { value: f64 },

    #[error("Confidence {value} is out of range [0.0, {max}]")]
    ConfidenceOutOfRange { value: f64, max: f64 },

    /// `c2w` chamado com confiança fora de `[0, 1)`.
    #[error("Confidence {value} cannot be converted to evidential weight (requires 0 <= c < 1)")]
    DegenerateConfidence { value: f64 },

    /// Revisão com peso evidencial total zero.
    #[error("Revision requires non-zero total evidential weight")]
    ZeroEvidence,

    #[error("Invalid evidence: positive={positive}, total={total} (requires 0 <= positive <= total, total > 0)")]
    InvalidEvidence { positive: f64, total: f64 },

    /// Peso evidencial não finito no meio de um combinador.
    #[error("Evidential weight {weight} is not finite")]
    WeightOverflow { weight: f64 },

    #[error("Evidential horizon {value} must be in (0.0, 1e100]")]
    InvalidHorizon { value: f64 },

    #[error("Projection decay {value} must be in (0.0, 1.0]")]
    InvalidDecay { value: f64 },
}

/// Alias de `Result` usado em todo o cálculo.
pub type Result<T> = std::result::Result<T, TruthError>;

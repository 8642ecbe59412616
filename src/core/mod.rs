//! # Módulo Core — Tipos Fundamentais do Cálculo de Verdade
//!
//! Este módulo agrupa os **tipos fundamentais** sobre os quais todo o cálculo
//! é construído:
//!
//! - [`TruthValue`] — Grau de verdade NARS `(frequency, confidence)`
//! - [`TruthConfig`] — Horizonte evidencial e decaimento de projeção
//! - [`TruthError`] — As falhas que o cálculo rejeita na fronteira
//!
//! ## Analogia com o Mundo Real
//!
//! Pense num [`TruthValue`] como uma **medição**: a frequência é o valor lido,
//! a confiança é o tamanho da amostra normalizado. O [`TruthConfig`] é a
//! **calibração do instrumento** — muda como leituras futuras são
//! interpretadas, mas não reescreve as antigas.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use truth_calculus::core::{TruthConfig, TruthValue};
//!
//! let cfg = TruthConfig::default();
//! let obs = cfg.from_evidence(8.0, 10.0)?; // 8 de 10 observações positivas
//! assert_eq!(obs.frequency(), 0.8);
//! # Ok::<(), truth_calculus::TruthError>(())
//! ```

/// Sub-módulo com a implementação de [`TruthValue`] e das constantes do cálculo.
pub mod truth_value;

/// Sub-módulo com [`TruthConfig`] e a configuração global do processo.
pub mod config;

/// Sub-módulo com [`TruthError`].
pub mod error;

// Re-exports para conveniência — permite usar `crate::core::TruthValue` diretamente.
pub use config::{
    evidential_horizon, global_config, projection_decay, reset_global_config,
    set_evidential_horizon, set_global_config, set_projection_decay, TruthConfig,
    DEFAULT_EVIDENTIAL_HORIZON, DEFAULT_PROJECTION_DECAY, MAX_EVIDENTIAL_HORIZON,
};
pub use error::{Result, TruthError};
pub use truth_value::{TruthValue, MAX_CONFIDENCE, RELIANCE, STRUCTURAL_TRUTH};

//! # Truth Calculus — Cálculo de Valores de Verdade NARS
//!
//! Álgebra sobre pares `(frequency, confidence)` usada por um sistema de
//! raciocínio não-axiomático para combinar, projetar e comparar crenças
//! incertas. Toda regra de inferência do motor (dedução, indução, revisão,
//! projeção temporal) delega a contabilidade de incerteza para cá.
//!
//! ## Organização
//!
//! ```text
//! core
//!   ├── TruthValue   — o par (f, c); expectation, deduction, intersection,
//!   │                  structural_deduction, negation, igualdade exata
//!   ├── TruthConfig  — horizonte evidencial k, decaimento de projeção
//!   │                  (contexto explícito + global protegido por RwLock)
//!   └── TruthError   — falhas rejeitadas na fronteira
//! inference            (métodos de TruthConfig + funções sobre o global)
//!   ├── evidence     — w2c, c2w, from_evidence
//!   ├── rules        — revision, induction, abduction, conversion
//!   └── temporal     — eternalize, projection, OCCURRENCE_ETERNAL
//! persistence          — TruthConfig ↔ JSON em disco
//! ```
//!
//! ## Exemplo
//!
//! ```rust
//! use truth_calculus::{TruthConfig, TruthValue};
//!
//! let cfg = TruthConfig::default();
//! let a = TruthValue::new(0.8, 0.9)?;
//!
//! // Mais evidência ⇒ mais confiança, mesma frequência
//! let revised = cfg.revision(a, a)?;
//! assert_eq!(revised.frequency(), 0.8);
//! assert!(revised.confidence() > a.confidence());
//!
//! // Crenças datadas perdem confiança com a distância temporal
//! let later = cfg.projection(a, 10, 15);
//! assert!(later.confidence() < a.confidence());
//! # Ok::<(), truth_calculus::TruthError>(())
//! ```

/// Módulo `core` — tipos fundamentais: TruthValue, TruthConfig, TruthError.
pub mod core;

/// Módulo `inference` — combinadores que dependem do horizonte e do decaimento.
pub mod inference;

/// Módulo `persistence` — serialização da configuração em JSON.
pub mod persistence;

pub use crate::core::{
    evidential_horizon, global_config, projection_decay, reset_global_config,
    set_evidential_horizon, set_global_config, set_projection_decay, Result, TruthConfig,
    TruthError, TruthValue, DEFAULT_EVIDENTIAL_HORIZON, DEFAULT_PROJECTION_DECAY,
    MAX_CONFIDENCE, MAX_EVIDENTIAL_HORIZON, RELIANCE, STRUCTURAL_TRUTH,
};
pub use crate::inference::OCCURRENCE_ETERNAL;

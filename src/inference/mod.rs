//! # Módulo Inference — Combinadores Dependentes de Configuração
//!
//! Os combinadores que precisam do horizonte evidencial ou do decaimento
//! de projeção são métodos de [`TruthConfig`](crate::core::TruthConfig), espalhados por três
//! sub-módulos:
//!
//! | Sub-módulo | Operações |
//! |------------|-----------|
//! | [`evidence`] | `w2c`, `c2w`, `from_evidence`, `evidence` |
//! | [`rules`] | `revision`, `induction`, `abduction`, `conversion` |
//! | [`temporal`] | `eternalize`, `projection` |
//!
//! ## Contexto Explícito ou Global
//!
//! ```rust
//! use truth_calculus::{inference, TruthConfig, TruthValue};
//!
//! let v = TruthValue::new(0.8, 0.9)?;
//!
//! // Contexto explícito — seguro entre threads por construção
//! let cfg = TruthConfig::new(1.0, 0.8)?;
//! let a = cfg.revision(v, v)?;
//!
//! // Configuração global do processo — lê um snapshot a cada chamada
//! let b = inference::revision(v, v)?;
//! # let _ = (a, b);
//! # Ok::<(), truth_calculus::TruthError>(())
//! ```
//!
//! As funções livres deste módulo fazem exatamente isso: copiam a
//! configuração global e delegam ao método correspondente.

/// Conversão peso ↔ confiança e construção a partir de evidência.
pub mod evidence;

/// Revisão, indução, abdução e conversão.
pub mod rules;

/// Eternização e projeção temporal.
pub mod temporal;

pub use temporal::OCCURRENCE_ETERNAL;

use crate::core::{global_config, Result, TruthValue};

/// [`TruthConfig::w2c`](crate::core::TruthConfig::w2c) com a configuração global.
pub fn w2c(w: f64) -> f64 {
    global_config().w2c(w)
}

/// [`TruthConfig::c2w`](crate::core::TruthConfig::c2w) com a configuração global.
pub fn c2w(c: f64) -> Result<f64> {
    global_config().c2w(c)
}

/// [`TruthConfig::from_evidence`](crate::core::TruthConfig::from_evidence) com a configuração global.
pub fn from_evidence(positive: f64, total: f64) -> Result<TruthValue> {
    global_config().from_evidence(positive, total)
}

/// [`TruthConfig::revision`](crate::core::TruthConfig::revision) com a configuração global.
pub fn revision(v1: TruthValue, v2: TruthValue) -> Result<TruthValue> {
    global_config().revision(v1, v2)
}

/// [`TruthConfig::induction`](crate::core::TruthConfig::induction) com a configuração global.
pub fn induction(v_b: TruthValue, v_a: TruthValue) -> TruthValue {
    global_config().induction(v_b, v_a)
}

/// [`TruthConfig::abduction`](crate::core::TruthConfig::abduction) com a configuração global.
pub fn abduction(v1: TruthValue, v2: TruthValue) -> TruthValue {
    global_config().abduction(v1, v2)
}

/// [`TruthConfig::conversion`](crate::core::TruthConfig::conversion) com a configuração global.
pub fn conversion(v: TruthValue) -> TruthValue {
    global_config().conversion(v)
}

/// [`TruthConfig::eternalize`](crate::core::TruthConfig::eternalize) com a configuração global.
pub fn eternalize(v: TruthValue) -> TruthValue {
    global_config().eternalize(v)
}

/// [`TruthConfig::projection`](crate::core::TruthConfig::projection) com a configuração global.
pub fn projection(v: TruthValue, original_time: i64, target_time: i64) -> TruthValue {
    global_config().projection(v, original_time, target_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GLOBAL_TEST_LOCK;
    use crate::core::{reset_global_config, set_evidential_horizon, set_projection_decay};

    #[test]
    fn test_free_functions_follow_global_config() {
        let _guard = GLOBAL_TEST_LOCK.lock();
        reset_global_config();
        let v = TruthValue::new(0.7, 0.9).unwrap();

        assert_eq!(w2c(1.0), 0.5);
        set_evidential_horizon(3.0).unwrap();
        assert_eq!(w2c(1.0), 0.25);
        assert_eq!(eternalize(v).confidence(), 0.9 / (0.9 + 3.0));

        set_projection_decay(0.5).unwrap();
        assert_eq!(projection(v, 0, 2).confidence(), 0.9 * 0.25);
        assert_eq!(projection(v, OCCURRENCE_ETERNAL, 2), v);

        reset_global_config();
        assert_eq!(w2c(1.0), 0.5);
        assert!(revision(v, v).unwrap().confidence() > 0.9);
        assert!(c2w(1.0).is_err());
    }
}

//! # Peso Evidencial ↔ Confiança
//!
//! Peso evidencial e confiança são duas representações da mesma quantidade
//! de evidência, relacionadas pelo horizonte evidencial `k`:
//!
//! ```text
//! w2c(w) = w / (w + k)          [0, ∞) → [0, 1)
//! c2w(c) = k · c / (1 − c)      [0, 1) → [0, ∞)
//! ```
//!
//! São inversas exatas uma da outra. Todos os combinadores que dependem
//! da configuração são construídos sobre este par.

use crate::core::{Result, TruthConfig, TruthError, TruthValue, MAX_CONFIDENCE};

impl TruthConfig {
    /// Converte peso evidencial em confiança: `w / (w + k)`.
    ///
    /// Monotônica, `w2c(0) = 0`, assintótica a 1. Pesos negativos ou NaN
    /// são tratados como ausência de evidência (`0`); peso infinito dá `1`.
    pub fn w2c(&self, w: f64) -> f64 {
        let w = w.max(0.0);
        if w.is_infinite() {
            return 1.0;
        }
        w / (w + self.evidential_horizon())
    }

    /// Converte confiança em peso evidencial: `k · c / (1 − c)`.
    ///
    /// # Erros
    ///
    /// - [`TruthError::DegenerateConfidence`] se `c ∉ [0, 1)` ou NaN — o
    ///   resultado seria infinito ou negativo.
    /// - [`TruthError::WeightOverflow`] se o peso não couber num `f64` finito.
    pub fn c2w(&self, c: f64) -> Result<f64> {
        if !(0.0..1.0).contains(&c) {
            return Err(TruthError::DegenerateConfidence { value: c });
        }
        let weight = self.c2w_unchecked(c);
        if !weight.is_finite() {
            return Err(TruthError::WeightOverflow { weight });
        }
        Ok(weight)
    }

    /// `w2c` limitada a [`MAX_CONFIDENCE`] — para confianças de resultados.
    ///
    /// Com horizontes muito pequenos `w2c` passaria do limite.
    pub(crate) fn w2c_confidence(&self, w: f64) -> f64 {
        self.w2c(w).min(MAX_CONFIDENCE)
    }

    /// `c2w` sem verificação, para confianças de um [`TruthValue`] (sempre `≤ MAX_CONFIDENCE < 1`).
    pub(crate) fn c2w_unchecked(&self, c: f64) -> f64 {
        self.evidential_horizon() * c / (1.0 - c)
    }

    /// Constrói um TruthValue a partir de contagens de evidência.
    ///
    /// `f = positive / total`, `c = w2c(total)` (limitada a [`MAX_CONFIDENCE`]).
    ///
    /// # Erros
    ///
    /// [`TruthError::InvalidEvidence`] a menos que `0 ≤ positive ≤ total` e `total > 0` finitos.
    pub fn from_evidence(&self, positive: f64, total: f64) -> Result<TruthValue> {
        let valid = total.is_finite() && total > 0.0 && positive >= 0.0 && positive <= total;
        if !valid {
            return Err(TruthError::InvalidEvidence { positive, total });
        }
        Ok(TruthValue::from_parts(
            positive / total,
            self.w2c_confidence(total),
        ))
    }

    /// Decompõe um TruthValue em `(positivo, total)` de evidência.
    pub fn evidence(&self, truth: TruthValue) -> (f64, f64) {
        let total = self.c2w_unchecked(truth.confidence());
        (truth.frequency() * total, total)
    }
}

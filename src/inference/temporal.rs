//! # Eternização e Projeção Temporal
//!
//! Crenças podem estar ancoradas num instante (eventos) ou ser atemporais
//! (eternas). Duas operações movem uma crença entre essas representações:
//!
//! ```text
//! eternalize:  ⟨f, c⟩@t        →  ⟨f, w2c(c)⟩            (eterna)
//! projection:  ⟨f, c⟩@t₀       →  ⟨f, c · decay^|t₁−t₀|⟩@t₁
//! ```
//!
//! O tempo é medido em ciclos de raciocínio (`i64`). Crenças eternas usam
//! o marcador [`OCCURRENCE_ETERNAL`] como instante de ocorrência.

use crate::core::{TruthConfig, TruthValue};

/// Instante de ocorrência das crenças eternas.
pub const OCCURRENCE_ETERNAL: i64 = -1;

impl TruthConfig {
    /// **Eternização** — trata a confiança como peso e a passa por `w2c`.
    ///
    /// Uma única observação datada é evidência mais fraca para uma afirmação
    /// eterna do que para o instante observado, então a confiança diminui.
    pub fn eternalize(&self, v: TruthValue) -> TruthValue {
        TruthValue::from_parts(v.frequency(), self.w2c_confidence(v.confidence()))
    }

    /// **Projeção temporal** de `original_time` para `target_time`.
    ///
    /// - Se `original_time == OCCURRENCE_ETERNAL`, retorna `v` inalterado
    /// - Senão `c' = c · decay^|target − original|`, frequência inalterada
    ///
    /// Simétrica na direção do tempo e monotonicamente decrescente com a distância.
    pub fn projection(&self, v: TruthValue, original_time: i64, target_time: i64) -> TruthValue {
        if original_time == OCCURRENCE_ETERNAL {
            return v;
        }
        // abs_diff não transborda nem com i64::MIN / i64::MAX
        let difference = target_time.abs_diff(original_time) as f64;
        let retention = self.projection_decay().powf(difference);
        TruthValue::from_parts(v.frequency(), v.confidence() * retention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(f: f64, c: f64) -> TruthValue {
        TruthValue::new(f, c).unwrap()
    }

    #[test]
    fn test_eternalize_reduces_confidence() {
        let cfg = TruthConfig::default();
        let e = cfg.eternalize(tv(0.7, 0.9));
        assert_eq!(e.frequency(), 0.7);
        assert!(e.confidence() < 0.9);
        assert!((e.confidence() - 0.9 / 1.9).abs() < 1e-12);
        assert_eq!(cfg.eternalize(tv(0.7, 0.0)).confidence(), 0.0);
    }

    #[test]
    fn test_projection_of_eternal_is_identity() {
        let cfg = TruthConfig::default();
        let v = tv(0.6, 0.8);
        for target in [i64::MIN, -1, 0, 5, 1_000_000] {
            assert_eq!(cfg.projection(v, OCCURRENCE_ETERNAL, target), v);
        }
    }

    #[test]
    fn test_projection_zero_distance() {
        let cfg = TruthConfig::default();
        let v = tv(0.6, 0.8);
        assert_eq!(cfg.projection(v, 42, 42), v);
    }

    #[test]
    fn test_projection_is_symmetric_and_decays() {
        let cfg = TruthConfig::default();
        let v = tv(0.6, 0.8);
        let forward = cfg.projection(v, 10, 13);
        let backward = cfg.projection(v, 10, 7);
        assert_eq!(forward, backward);
        assert_eq!(forward.frequency(), 0.6);
        assert!((forward.confidence() - 0.8 * 0.8_f64.powi(3)).abs() < 1e-12);

        let mut prev = v.confidence();
        for t in 1..50 {
            let c = cfg.projection(v, 0, t).confidence();
            assert!(c <= prev);
            assert!(c >= 0.0);
            prev = c;
        }
    }

    #[test]
    fn test_projection_with_unit_decay_is_identity() {
        let cfg = TruthConfig::default().with_projection_decay(1.0).unwrap();
        let v = tv(0.6, 0.8);
        assert_eq!(cfg.projection(v, 0, 1_000), v);
    }

    #[test]
    fn test_projection_extreme_distance() {
        let cfg = TruthConfig::default();
        let p = cfg.projection(tv(0.6, 0.8), i64::MAX, i64::MIN);
        assert_eq!(p.confidence(), 0.0);
    }
}

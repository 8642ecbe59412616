//! # Regras de Inferência que Passam pelo Domínio do Peso
//!
//! Combinadores cujo resultado depende do horizonte evidencial `k`:
//!
//! | Regra | Padrão | Frequência | Confiança |
//! |-------|--------|-----------|-----------|
//! | **Revisão** | mesma afirmação, fontes independentes | média ponderada pelo peso | `max(w2c(n₁+n₂), c₁, c₂)` |
//! | **Indução** | `M→P + M→S ⊢ S→P` | `f_B` | `w2c(min(c_A, c_B))` |
//! | **Abdução** | `P→M + S→M ⊢ S→P` | `f₁` | `w2c(f₂·c₁·c₂)` |
//! | **Conversão** | `S→P ⊢ P→S` | `1.0` | `w2c(f·c)` |
//!
//! Dedução, interseção e negação não dependem de `k` e vivem em
//! [`TruthValue`].

use crate::core::{Result, TruthConfig, TruthError, TruthValue, MAX_CONFIDENCE};

impl TruthConfig {
    /// **Revisão** — combina duas evidências independentes sobre a mesma afirmação.
    ///
    /// ```text
    /// n₁ = c2w(c₁), n₂ = c2w(c₂), n = n₁ + n₂
    /// f  = min(1, n₁/n · f₁ + n₂/n · f₂)
    /// c  = min(MAX_CONFIDENCE, max(w2c(n), c₁, c₂))
    /// ```
    ///
    /// O `max` com as confianças de entrada impede que o arredondamento na
    /// fronteira do peso reduza a confiança abaixo de qualquer entrada.
    ///
    /// # Erros
    ///
    /// - [`TruthError::ZeroEvidence`] se o peso evidencial total for zero
    ///   (confianças nulas, ou tão pequenas que `c2w` sofre underflow com
    ///   `k < 1`) — não há peso para ponderar as frequências.
    /// - [`TruthError::WeightOverflow`] se o peso total não for finito.
    pub fn revision(&self, v1: TruthValue, v2: TruthValue) -> Result<TruthValue> {
        let (f1, c1) = (v1.frequency(), v1.confidence());
        let (f2, c2) = (v2.frequency(), v2.confidence());
        let n1 = self.c2w_unchecked(c1);
        let n2 = self.c2w_unchecked(c2);
        let n = n1 + n2;
        if n == 0.0 {
            tracing::warn!("Revisão recusada: peso evidencial total é zero");
            return Err(TruthError::ZeroEvidence);
        }
        if !n.is_finite() {
            tracing::warn!(weight = n, "Revisão recusada: peso evidencial total não é finito");
            return Err(TruthError::WeightOverflow { weight: n });
        }
        let frequency = (n1 / n * f1 + n2 / n * f2).min(1.0);
        let confidence = self.w2c(n).max(c1).max(c2).min(MAX_CONFIDENCE);
        Ok(TruthValue::from_parts(frequency, confidence))
    }

    /// **Indução** — estima `P(B|A)` a partir de duas afirmações com termo comum.
    ///
    /// Com independência, `P(B ∩ A) / P(A) = (f_A · f_B) / f_A`, que se reduz a
    /// `f_B`. A simplificação é o contrato: a frequência é sempre a de `v_b`.
    /// A confiança passa pelo domínio do peso (`w2c`) porque indução é
    /// evidencialmente mais fraca que uma proporção observada.
    pub fn induction(&self, v_b: TruthValue, v_a: TruthValue) -> TruthValue {
        let confidence = self.w2c_confidence(v_a.confidence().min(v_b.confidence()));
        TruthValue::from_parts(v_b.frequency(), confidence)
    }

    /// **Abdução** — `P→M + S→M ⊢ S→P`, a forma mais fraca de inferência.
    ///
    /// - `f = f₁`
    /// - `c = w2c(f₂ · c₁ · c₂)`
    pub fn abduction(&self, v1: TruthValue, v2: TruthValue) -> TruthValue {
        let w = v2.frequency() * v1.confidence() * v2.confidence();
        TruthValue::from_parts(v1.frequency(), self.w2c_confidence(w))
    }

    /// **Conversão** — `S→P ⊢ P→S`: só a evidência positiva é transferida.
    pub fn conversion(&self, v: TruthValue) -> TruthValue {
        let w = v.frequency() * v.confidence();
        TruthValue::from_parts(1.0, self.w2c_confidence(w))
    }
}

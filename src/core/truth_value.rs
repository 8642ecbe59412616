//! # TruthValue — Grau de Verdade NARS
//!
//! Implementação do **grau de verdade** da lógica **NARS** (Non-Axiomatic
//! Reasoning System). Todo passo de inferência do motor de raciocínio delega a
//! contabilidade de incerteza para as funções deste cálculo.
//!
//! ## As Duas Dimensões
//!
//! - **Frequency (f)**: "Qual proporção da evidência é positiva?"
//!   - varia de 0.0 a 1.0
//!   - Exemplo: se 8 de 10 observações são positivas, `f = 0.8`
//!
//! - **Confidence (c)**: "Quanta evidência sustenta essa estimativa?"
//!   - varia de 0.0 a [`MAX_CONFIDENCE`] (sempre < 1.0)
//!   - `c = w / (w + k)`, onde `w` é o peso evidencial e `k` o horizonte evidencial
//!
//! ## Representação Interna
//!
//! O [`TruthValue`] armazena diretamente o par `(f, c)`. O peso evidencial é
//! uma grandeza **derivada**: só existe transitoriamente dentro dos
//! combinadores que dependem do horizonte (veja
//! [`TruthConfig`](super::TruthConfig)). Assim, os operadores aqui são os que
//! **não** dependem de configuração:
//!
//! | Operador | Fórmula |
//! |----------|---------|
//! | **Expectation** | `e = c × (f − 0.5) + 0.5` |
//! | **Dedução** | `f = f₁f₂ / min(f₁+f₂, 1)`, `c = min(c₁, c₂)` |
//! | **Interseção** | `f = min(f₁, f₂)`, `c = min(c₁, c₂)` |
//! | **Dedução estrutural** | dedução com [`STRUCTURAL_TRUTH`] |
//! | **Negação** | `f = 1 − f`, `c` inalterado |
//!
//! ## Exemplo
//!
//! ```rust
//! use truth_calculus::TruthValue;
//!
//! let ab = TruthValue::new(1.0, 0.9)?;
//! let bc = TruthValue::new(1.0, 0.9)?;
//!
//! // Uma cadeia é tão forte quanto seu elo mais fraco
//! let ac = ab.deduction(bc);
//! assert_eq!(ac.frequency(), 1.0);
//! assert_eq!(ac.confidence(), 0.9);
//! # Ok::<(), truth_calculus::TruthError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Result, TruthError};

/// Limite superior da confiança — estritamente abaixo de 1.0.
///
/// Garante que `c2w(c) = k·c / (1 − c)` nunca divide por zero.
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Confiança atribuída a conhecimento estrutural e a observações diretas.
pub const RELIANCE: f64 = 0.9;

/// Premissa fixa usada pela [dedução estrutural](TruthValue::structural_deduction).
pub const STRUCTURAL_TRUTH: TruthValue = TruthValue::from_parts(1.0, RELIANCE);

/// Grau de verdade NARS — par imutável `(frequency, confidence)`.
///
/// É um tipo de valor (`Copy`): todo operador consome valores e produz um
/// valor novo, nunca altera a entrada. Dois `TruthValue` com os mesmos campos
/// são intercambiáveis.
///
/// ## Invariantes
///
/// - `0.0 ≤ frequency ≤ 1.0`
/// - `0.0 ≤ confidence ≤ MAX_CONFIDENCE`
///
/// A revisão satura em exatamente [`MAX_CONFIDENCE`], por isso o limite
/// superior é inclusivo.
///
/// ## Igualdade
///
/// `==` compara os dois campos **exatamente**, sem tolerância. É usada pelo
/// motor para detecção de duplicatas, não para "quase igual".
///
/// ## Display
///
/// - `{}` → `Truth: frequency=0.800000, confidence=0.900000` (dump diagnóstico)
/// - `{:#}` → `⟨0.80, 0.90⟩` (forma compacta para explicações)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTruth")]
pub struct TruthValue {
    /// Proporção de evidência positiva.
    frequency: f64,
    /// Quantidade normalizada de evidência.
    confidence: f64,
}

/// Forma não validada usada só na desserialização.
#[derive(Deserialize)]
struct RawTruth {
    frequency: f64,
    confidence: f64,
}

impl TryFrom<RawTruth> for TruthValue {
    type Error = TruthError;

    fn try_from(raw: RawTruth) -> Result<Self> {
        TruthValue::new(raw.frequency, raw.confidence)
    }
}

impl TruthValue {
    /// Cria um TruthValue **validado** a partir de frequency e confidence.
    ///
    /// # Erros
    ///
    /// - [`TruthError::FrequencyOutOfRange`] se `frequency ∉ [0, 1]` (ou NaN)
    /// - [`TruthError::ConfidenceOutOfRange`] se `confidence ∉ [0, MAX_CONFIDENCE]` (ou NaN)
    pub fn new(frequency: f64, confidence: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&frequency) {
            return Err(TruthError::FrequencyOutOfRange { value: frequency });
        }
        if !(0.0..=MAX_CONFIDENCE).contains(&confidence) {
            return Err(TruthError::ConfidenceOutOfRange {
                value: confidence,
                max: MAX_CONFIDENCE,
            });
        }
        Ok(Self::from_parts(frequency, confidence))
    }

    /// Cria um TruthValue **limitando** (clamp) os valores ao domínio válido.
    ///
    /// Para chamadores que preferem saturar a rejeitar. `NaN` vira `0.0`.
    pub fn clamped(frequency: f64, confidence: f64) -> Self {
        let frequency = if frequency.is_nan() { 0.0 } else { frequency.clamp(0.0, 1.0) };
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, MAX_CONFIDENCE)
        };
        Self::from_parts(frequency, confidence)
    }

    /// Construtor sem validação — só para valores que já respeitam os invariantes.
    pub(crate) const fn from_parts(frequency: f64, confidence: f64) -> Self {
        Self {
            frequency,
            confidence,
        }
    }

    /// Observação direta: `⟨1.0, 0.9⟩` se positiva, `⟨0.0, 0.9⟩` se negativa.
    pub fn observed(positive: bool) -> Self {
        if positive {
            Self::from_parts(1.0, RELIANCE)
        } else {
            Self::from_parts(0.0, RELIANCE)
        }
    }

    /// Ignorância total: `⟨0.5, 0.0⟩` — nenhuma evidência.
    pub fn ignorance() -> Self {
        Self::from_parts(0.5, 0.0)
    }

    /// Retorna a **frequency** — proporção de evidência positiva.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Retorna a **confidence** — quantidade normalizada de evidência.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Retorna a **expectation** — escalar em `[0, 1]` para ranquear decisões.
    ///
    /// Fórmula: `e = c × (f − 0.5) + 0.5`
    ///
    /// - Com `c = 0`, é exatamente 0.5 (incerteza máxima), qualquer que seja `f`
    /// - Com `c → MAX_CONFIDENCE`, aproxima-se de `f`
    pub fn expectation(&self) -> f64 {
        self.confidence * (self.frequency - 0.5) + 0.5
    }

    /// **Dedução** — `A⇒B`, `B⇒C` ⊢ `A⇒C`.
    ///
    /// Composição geométrica, estável quando ambas as premissas são quase certas:
    ///
    /// - `f = (f₁ × f₂) / min(f₁ + f₂, 1.0)`
    /// - `c = min(c₁, c₂)` — a cadeia é tão forte quanto o elo mais fraco
    ///
    /// Se `f₁ + f₂ = 0` a frequência resultante é `0.0` (o limite da expressão).
    pub fn deduction(self, other: TruthValue) -> TruthValue {
        let (f1, c1) = (self.frequency, self.confidence);
        let (f2, c2) = (other.frequency, other.confidence);
        let sum = f1 + f2;
        let frequency = if sum == 0.0 { 0.0 } else { (f1 * f2) / sum.min(1.0) };
        TruthValue::from_parts(frequency, c1.min(c2))
    }

    /// **Interseção** (conjunção) — pessimista nos dois campos.
    ///
    /// `f = min(f₁, f₂)`, `c = min(c₁, c₂)`
    pub fn intersection(self, other: TruthValue) -> TruthValue {
        TruthValue::from_parts(
            self.frequency.min(other.frequency),
            self.confidence.min(other.confidence),
        )
    }

    /// **Dedução estrutural** — dedução com a premissa fixa [`STRUCTURAL_TRUTH`].
    ///
    /// O segundo argumento é aceito e **ignorado**: chamadores contam com a
    /// substituição pela constante estrutural.
    pub fn structural_deduction(self, _other: TruthValue) -> TruthValue {
        self.deduction(STRUCTURAL_TRUTH)
    }

    /// **Negação** — `f = 1 − f`, confiança inalterada.
    pub fn negation(self) -> TruthValue {
        TruthValue::from_parts(1.0 - self.frequency, self.confidence)
    }

    /// Emite o dump diagnóstico do valor como evento `tracing` em nível debug.
    pub fn log_diagnostic(&self) {
        tracing::debug!(truth = %self, "Truth diagnostic");
    }
}

impl Default for TruthValue {
    fn default() -> Self {
        Self::ignorance()
    }
}

/// `{}` → `Truth: frequency=<f>, confidence=<c>` com 6 casas decimais.
/// `{:#}` → `⟨f, c⟩` com 2 casas.
impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "⟨{:.2}, {:.2}⟩", self.frequency, self.confidence)
        } else {
            write!(
                f,
                "Truth: frequency={:.6}, confidence={:.6}",
                self.frequency, self.confidence
            )
        }
    }
}

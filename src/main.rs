//! # truth-calc — Diagnóstico do Cálculo de Verdade
//!
//! Avalia **um** combinador sobre valores de verdade passados na linha de
//! comando e imprime o dump diagnóstico do resultado. Útil para conferir
//! números de logs do motor de raciocínio.
//!
//! ## Uso
//!
//! ```bash
//! truth-calc revision     0.8 0.9  0.8 0.9     # f1 c1 f2 c2
//! truth-calc deduction    1.0 0.9  1.0 0.9
//! truth-calc induction    0.3 0.9  0.7 0.6     # v_b v_a
//! truth-calc abduction    0.9 0.8  0.5 0.5
//! truth-calc intersection 0.9 0.8  0.3 0.95
//! truth-calc structural   0.8 0.7
//! truth-calc eternalize   0.7 0.9
//! truth-calc project      0.6 0.8  10 13       # f c t_original t_alvo
//! truth-calc expectation  0.8 0.9
//! truth-calc negation     0.8 0.9
//! truth-calc conversion   0.8 0.9
//! truth-calc evidence     8 10                 # positivos total
//! truth-calc config
//!
//! # Logs detalhados
//! RUST_LOG=debug truth-calc revision 0.8 0.9 0.8 0.9
//! ```
//!
//! ## Configuração
//!
//! Lida de `$TRUTH_CONFIG` ou de `data/truth_config.json`; se o arquivo não
//! existir, usa os valores padrão. A configuração carregada é instalada como
//! configuração global do processo.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use truth_calculus::inference::{self, OCCURRENCE_ETERNAL};
use truth_calculus::persistence::{load_config, CONFIG_PATH};
use truth_calculus::{global_config, set_global_config, TruthValue, STRUCTURAL_TRUTH};

const USAGE: &str = "usage: truth-calc <revision|deduction|induction|abduction|intersection|\
structural|eternalize|project|expectation|negation|conversion|evidence|config> <numbers...>";

fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug truth-calc ...
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::var_os("TRUTH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
    set_global_config(load_config(&path)?);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((op, rest)) = args.split_first() else {
        bail!("{USAGE}");
    };
    let numbers = parse_numbers(rest)?;

    let outcome = run(op, &numbers)?;
    if let Outcome::Truth(truth) = &outcome {
        truth.log_diagnostic();
    }
    println!("{outcome}");
    Ok(())
}

/// Resultado de uma operação: um valor de verdade ou um texto já formatado.
#[derive(Debug)]
enum Outcome {
    Truth(TruthValue),
    Text(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Truth(truth) => write!(f, "{truth}"),
            Outcome::Text(text) => f.write_str(text),
        }
    }
}

/// Executa a operação pedida.
fn run(op: &str, n: &[f64]) -> Result<Outcome> {
    let result = match op {
        "revision" => {
            let (a, b) = pair(n)?;
            inference::revision(a, b)?
        }
        "deduction" => {
            let (a, b) = pair(n)?;
            a.deduction(b)
        }
        "induction" => {
            let (b, a) = pair(n)?;
            inference::induction(b, a)
        }
        "abduction" => {
            let (a, b) = pair(n)?;
            inference::abduction(a, b)
        }
        "intersection" => {
            let (a, b) = pair(n)?;
            a.intersection(b)
        }
        "structural" => single(n)?.structural_deduction(STRUCTURAL_TRUTH),
        "eternalize" => inference::eternalize(single(n)?),
        "project" => {
            expect_len(n, 4)?;
            let v = truth(n[0], n[1])?;
            let (from, to) = (time(n[2])?, time(n[3])?);
            if from == OCCURRENCE_ETERNAL {
                tracing::debug!("Tempo original eterno — projeção é a identidade");
            }
            inference::projection(v, from, to)
        }
        "expectation" => {
            let e = single(n)?.expectation();
            return Ok(Outcome::Text(format!("Expectation: {e:.6}")));
        }
        "negation" => single(n)?.negation(),
        "conversion" => inference::conversion(single(n)?),
        "evidence" => {
            expect_len(n, 2)?;
            inference::from_evidence(n[0], n[1])?
        }
        "config" => {
            expect_len(n, 0)?;
            return Ok(Outcome::Text(serde_json::to_string_pretty(&global_config())?));
        }
        other => bail!("unknown operation '{other}'\n{USAGE}"),
    };
    Ok(Outcome::Truth(result))
}

fn parse_numbers(raw: &[String]) -> Result<Vec<f64>> {
    raw.iter()
        .map(|s| s.parse::<f64>().with_context(|| format!("'{s}' is not a number")))
        .collect()
}

fn expect_len(n: &[f64], len: usize) -> Result<()> {
    if n.len() != len {
        bail!("expected {len} numbers, got {}", n.len());
    }
    Ok(())
}

fn truth(f: f64, c: f64) -> Result<TruthValue> {
    Ok(TruthValue::new(f, c)?)
}

fn single(n: &[f64]) -> Result<TruthValue> {
    expect_len(n, 2)?;
    truth(n[0], n[1])
}

fn pair(n: &[f64]) -> Result<(TruthValue, TruthValue)> {
    expect_len(n, 4)?;
    Ok((truth(n[0], n[1])?, truth(n[2], n[3])?))
}

fn time(x: f64) -> Result<i64> {
    if x.fract() != 0.0 || x < i64::MIN as f64 || x >= i64::MAX as f64 {
        bail!("'{x}' is not an integer time");
    }
    Ok(x as i64)
}

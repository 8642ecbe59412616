use proptest::prelude::*;
use truth_calculus::{
    TruthConfig, TruthError, TruthValue, MAX_CONFIDENCE, MAX_EVIDENTIAL_HORIZON,
    OCCURRENCE_ETERNAL,
};

fn arb_truth() -> impl Strategy<Value = TruthValue> {
    (0.0f64..=1.0, 0.0f64..=MAX_CONFIDENCE)
        .prop_map(|(f, c)| TruthValue::new(f, c).unwrap())
}

/// Horizonte log-uniforme sobre quase todo o domínio aceito.
fn arb_horizon() -> impl Strategy<Value = f64> {
    (-300.0f64..100.0).prop_map(|e| 10f64.powf(e).min(MAX_EVIDENTIAL_HORIZON))
}

fn arb_config() -> impl Strategy<Value = TruthConfig> {
    (arb_horizon(), 0.05f64..=1.0).prop_map(|(k, d)| TruthConfig::new(k, d).unwrap())
}

/// Horizontes onde `w2c` ainda tem resolução para crescer estritamente.
fn arb_moderate_config() -> impl Strategy<Value = TruthConfig> {
    (1e-3f64..10.0, 0.05f64..=1.0).prop_map(|(k, d)| TruthConfig::new(k, d).unwrap())
}

/// Extremos do domínio: menor subnormal, menor normal e o teto.
fn arb_edge_config() -> impl Strategy<Value = TruthConfig> {
    let horizon = prop_oneof![
        Just(5e-324),
        Just(f64::MIN_POSITIVE),
        Just(MAX_EVIDENTIAL_HORIZON),
        arb_horizon(),
    ];
    (horizon, 0.05f64..=1.0).prop_map(|(k, d)| TruthConfig::new(k, d).unwrap())
}

fn assert_valid(v: TruthValue) -> Result<(), TestCaseError> {
    prop_assert!(v.frequency().is_finite(), "frequency {}", v.frequency());
    prop_assert!(v.confidence().is_finite(), "confidence {}", v.confidence());
    prop_assert!((0.0..=1.0).contains(&v.frequency()), "frequency {}", v.frequency());
    prop_assert!(
        (0.0..=MAX_CONFIDENCE).contains(&v.confidence()),
        "confidence {}",
        v.confidence()
    );
    Ok(())
}

// ── Conversão peso ↔ confiança ───────────────────────────────────────────

proptest! {
    #[test]
    fn w2c_c2w_are_inverses(c in 1e-6f64..=0.999, cfg in arb_config()) {
        let back = cfg.w2c(cfg.c2w(c).unwrap());
        prop_assert!((back - c).abs() < 1e-9, "c={} back={}", c, back);
    }

    #[test]
    fn w2c_is_monotonic(w in 0.0f64..1e4, dw in 1e-3f64..1e3, cfg in arb_moderate_config()) {
        prop_assert!(cfg.w2c(w) < cfg.w2c(w + dw));
        prop_assert!(cfg.w2c(w + dw) < 1.0);
    }
}

// ── Revisão ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn revision_is_commutative(a in arb_truth(), b in arb_truth(), cfg in arb_config()) {
        let ab = match cfg.revision(a, b) {
            Err(TruthError::ZeroEvidence) => return Ok(()),
            other => other.unwrap(),
        };
        let ba = cfg.revision(b, a).unwrap();
        prop_assert!((ab.frequency() - ba.frequency()).abs() < 1e-12);
        prop_assert!((ab.confidence() - ba.confidence()).abs() < 1e-12);
    }

    #[test]
    fn revision_never_lowers_confidence(a in arb_truth(), b in arb_truth(), cfg in arb_config()) {
        let r = match cfg.revision(a, b) {
            Err(TruthError::ZeroEvidence) => return Ok(()),
            other => other.unwrap(),
        };
        assert_valid(r)?;
        prop_assert!(r.confidence() >= a.confidence());
        prop_assert!(r.confidence() >= b.confidence());
    }

    #[test]
    fn self_revision_keeps_frequency(f in 0.0f64..=1.0, c in 0.01f64..0.9) {
        let cfg = TruthConfig::default();
        let v = TruthValue::new(f, c).unwrap();
        let r = cfg.revision(v, v).unwrap();
        prop_assert!((r.frequency() - f).abs() < 1e-12);
        prop_assert!(r.confidence() > c);
        prop_assert!(r.confidence() < MAX_CONFIDENCE);
    }
}

// ── Dedução, indução, interseção ─────────────────────────────────────────

proptest! {
    #[test]
    fn deduction_bounded_by_weakest_link(a in arb_truth(), b in arb_truth()) {
        let d = a.deduction(b);
        assert_valid(d)?;
        prop_assert_eq!(d.confidence(), a.confidence().min(b.confidence()));
    }

    #[test]
    fn induction_uses_target_frequency(b in arb_truth(), a in arb_truth(), cfg in arb_config()) {
        let r = cfg.induction(b, a);
        assert_valid(r)?;
        prop_assert_eq!(r.frequency(), b.frequency());
        if cfg.evidential_horizon() >= 1.0 {
            prop_assert!(r.confidence() <= a.confidence().min(b.confidence()));
        }
    }

    #[test]
    fn intersection_is_pessimistic(a in arb_truth(), b in arb_truth()) {
        let r = a.intersection(b);
        prop_assert_eq!(r.frequency(), a.frequency().min(b.frequency()));
        prop_assert_eq!(r.confidence(), a.confidence().min(b.confidence()));
    }

    #[test]
    fn outputs_stay_in_domain(a in arb_truth(), b in arb_truth(), cfg in arb_config()) {
        assert_valid(cfg.abduction(a, b))?;
        assert_valid(cfg.conversion(a))?;
        assert_valid(cfg.eternalize(a))?;
        assert_valid(a.structural_deduction(b))?;
        assert_valid(a.negation())?;
        let e = a.expectation();
        prop_assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn combinators_stay_finite_at_extreme_horizons(
        a in arb_truth(),
        b in arb_truth(),
        origin in 0i64..1_000,
        target in 0i64..1_000,
        cfg in arb_edge_config(),
    ) {
        match cfg.revision(a, b) {
            Ok(r) => assert_valid(r)?,
            Err(TruthError::ZeroEvidence) => {}
            Err(e) => prop_assert!(false, "revision failed: {}", e),
        }
        assert_valid(cfg.induction(a, b))?;
        assert_valid(cfg.abduction(a, b))?;
        assert_valid(cfg.conversion(a))?;
        assert_valid(cfg.eternalize(a))?;
        assert_valid(cfg.projection(a, origin, target))?;

        let w = cfg.c2w(a.confidence()).unwrap();
        prop_assert!(w.is_finite() && w >= 0.0, "c2w({}) = {}", a.confidence(), w);
        let c = cfg.w2c(w);
        prop_assert!(c.is_finite() && (0.0..=1.0).contains(&c), "w2c({}) = {}", w, c);
    }
}

// ── Tempo ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_from_eternal_is_identity(v in arb_truth(), target in any::<i64>(), cfg in arb_config()) {
        prop_assert_eq!(cfg.projection(v, OCCURRENCE_ETERNAL, target), v);
    }

    #[test]
    fn projection_decays_monotonically(
        v in arb_truth(),
        origin in -1_000i64..1_000,
        step in 0i64..500,
        cfg in arb_config(),
    ) {
        prop_assume!(origin != OCCURRENCE_ETERNAL);
        let near = cfg.projection(v, origin, origin + step);
        let far = cfg.projection(v, origin, origin + step + 1);
        prop_assert_eq!(near.frequency(), v.frequency());
        prop_assert!(far.confidence() <= near.confidence());
        prop_assert!(far.confidence() >= 0.0);
        prop_assert!(near.confidence() <= v.confidence());
    }

    #[test]
    fn eternalize_lowers_confidence_with_unit_horizon(v in arb_truth()) {
        prop_assume!(v.confidence() > 0.0);
        let cfg = TruthConfig::default();
        prop_assert!(cfg.eternalize(v).confidence() < v.confidence());
    }
}

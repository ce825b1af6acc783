#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::test;

    use crate::config::FlowcheckConfig;
    use crate::errors::{FlowcheckError, FlowcheckResult};
    use crate::implementations::{BoundedReachabilityVerifier, SyntaxVerifier};
    use crate::models::petri::{PetriArc, PetriNet};
    use crate::models::report::FailureKind;
    use crate::pipeline;
    use crate::registry::VerifierRegistry;
    use crate::runner::VerificationRunner;
    use crate::tests::COLLABORATION_XML;
    use crate::traits::Verifier;

    /// Verifier stub with a fixed verdict, counting its invocations.
    struct StaticVerifier {
        name: &'static str,
        verdict: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StaticVerifier {
        fn new(name: &'static str, verdict: bool) -> (Arc<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let verifier = Arc::new(StaticVerifier {
                name,
                verdict,
                calls: calls.clone(),
            });
            (verifier, calls)
        }
    }

    #[async_trait]
    impl Verifier for StaticVerifier {
        fn name(&self) -> &str {
            self.name
        }

        async fn verify(&self, _formula: &str, _net: &PetriNet) -> FlowcheckResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.verdict)
        }
    }

    /// Errors on one specific formula, passes everything else.
    struct ErringVerifier {
        poison: &'static str,
    }

    #[async_trait]
    impl Verifier for ErringVerifier {
        fn name(&self) -> &str {
            "erring"
        }

        async fn verify(&self, formula: &str, _net: &PetriNet) -> FlowcheckResult<bool> {
            if formula == self.poison {
                Err(FlowcheckError::Verifier("cannot evaluate".to_string()))
            } else {
                Ok(true)
            }
        }
    }

    struct SlowVerifier;

    #[async_trait]
    impl Verifier for SlowVerifier {
        fn name(&self) -> &str {
            "slow"
        }

        async fn verify(&self, _formula: &str, _net: &PetriNet) -> FlowcheckResult<bool> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(true)
        }
    }

    fn runner_with(verifiers: Vec<Arc<dyn Verifier>>) -> VerificationRunner {
        VerificationRunner::new(
            VerifierRegistry::with_verifiers(verifiers),
            Duration::from_secs(5),
        )
    }

    /// Minimal net: one token on p_a, one transition moving it to p_b.
    fn two_place_net() -> PetriNet {
        let mut net = PetriNet::new();
        net.places = vec!["p_a".to_string(), "p_b".to_string()];
        net.transitions = vec!["t_ab".to_string()];
        net.arcs = vec![PetriArc::new("p_a", "t_ab"), PetriArc::new("t_ab", "p_b")];
        net.initial_marking.insert("p_a".to_string(), 1);
        net
    }

    fn formulas(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    async fn empty_formula_list_yields_empty_report() {
        let (ok, _) = StaticVerifier::new("ok", true);
        let runner = runner_with(vec![ok]);
        let report = runner.run(&[], &two_place_net()).await;
        assert!(report.all_passed());
        assert_eq!(report.total_formulas, 0);
    }

    #[test]
    async fn formula_passes_when_all_verifiers_agree() {
        let (first, _) = StaticVerifier::new("first", true);
        let (second, _) = StaticVerifier::new("second", true);
        let runner = runner_with(vec![first, second]);
        let report = runner.run(&formulas(&["EF p_b"]), &two_place_net()).await;
        assert!(report.all_passed());
    }

    #[test]
    async fn single_refutation_vetoes_the_formula() {
        let (agree, _) = StaticVerifier::new("agree", true);
        let (refute, _) = StaticVerifier::new("refute", false);
        let (unreached, unreached_calls) = StaticVerifier::new("unreached", true);
        let runner = runner_with(vec![agree, refute, unreached]);

        let report = runner.run(&formulas(&["EF p_b"]), &two_place_net()).await;
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].kind,
            FailureKind::Refuted {
                verifier: "refute".to_string()
            }
        );
        // The veto short-circuits the remaining verifiers for that formula.
        assert_eq!(unreached_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    async fn verifier_error_fails_the_formula_but_not_the_run() {
        let erring = Arc::new(ErringVerifier { poison: "EF p_a" });
        let runner = runner_with(vec![erring]);

        let report = runner
            .run(&formulas(&["EF p_a", "EF p_b"]), &two_place_net())
            .await;
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].formula, "EF p_a");
        assert!(matches!(
            report.failures[0].kind,
            FailureKind::VerifierError { ref verifier, .. } if verifier == "erring"
        ));
    }

    #[test]
    async fn timeout_is_its_own_failure_kind() {
        let runner = VerificationRunner::new(
            VerifierRegistry::with_verifiers(vec![Arc::new(SlowVerifier)]),
            Duration::from_millis(50),
        );
        let report = runner.run(&formulas(&["EF p_b"]), &two_place_net()).await;
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].kind,
            FailureKind::VerifierTimeout {
                verifier: "slow".to_string()
            }
        );
    }

    #[test]
    async fn duplicate_formulas_fail_in_input_order() {
        let (refute, _) = StaticVerifier::new("refute", false);
        let runner = runner_with(vec![refute]);
        let report = runner
            .run(&formulas(&["EF p_a", "EF p_a", "EF p_b"]), &two_place_net())
            .await;

        assert_eq!(report.failed_formulas(), ["EF p_a", "EF p_a", "EF p_b"]);
        let indices: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    async fn registry_rejects_unknown_verifier_names() {
        let config = FlowcheckConfig {
            verifiers: vec!["syntax".to_string(), "prophecy".to_string()],
            ..FlowcheckConfig::default()
        };
        match VerifierRegistry::from_config(&config) {
            Err(FlowcheckError::UnknownVerifier(name)) => assert_eq!(name, "prophecy"),
            other => panic!("expected UnknownVerifier, got {other:?}", other = other.err()),
        }
    }

    #[test]
    async fn registry_builds_default_engine_set() {
        let registry = VerifierRegistry::from_config(&FlowcheckConfig::default()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.verifiers()[0].name(), "syntax");
        assert_eq!(registry.verifiers()[1].name(), "reachability");
    }

    #[test]
    async fn syntax_verifier_accepts_well_formed_ctl() {
        let verifier = SyntaxVerifier::new();
        let net = two_place_net();
        for formula in [
            "EF p_b",
            "AG (p_a -> AF t_ab)",
            "E[p_a U p_b]",
            "A[!p_a U done]",
            "AG !deadlock",
        ] {
            assert!(
                verifier.verify(formula, &net).await.unwrap(),
                "{formula} should be accepted"
            );
        }
    }

    #[test]
    async fn syntax_verifier_refutes_malformed_or_dangling_formulas() {
        let verifier = SyntaxVerifier::new();
        let net = two_place_net();
        for formula in [
            "",
            "AG (p_a",
            "E[p_a U p_b U t_ab]",
            "E[p_a p_b]",
            "A p_a",
            "EF p_ghost",
            "EF t_ghost",
            "EF ?",
        ] {
            assert!(
                !verifier.verify(formula, &net).await.unwrap(),
                "{formula:?} should be refuted"
            );
        }
    }

    #[test]
    async fn reachability_verifier_decides_its_fragment() {
        let verifier = BoundedReachabilityVerifier::new();
        let net = two_place_net();

        assert!(verifier.verify("EF p_b", &net).await.unwrap());
        assert!(verifier.verify("EF t_ab", &net).await.unwrap());
        assert!(!verifier.verify("AG !p_b", &net).await.unwrap());
        // p_a is consumed by t_ab but marked initially.
        assert!(verifier.verify("EF p_a", &net).await.unwrap());
        // Unknown atoms never hold.
        assert!(!verifier.verify("EF p_nowhere", &net).await.unwrap());
        assert!(verifier.verify("AG !p_nowhere", &net).await.unwrap());
        // Outside the EF/AG! fragment nothing is refuted.
        assert!(verifier.verify("AG (p_a -> AF p_b)", &net).await.unwrap());
        // A bare atom that merely starts with the operator letters is not
        // claimed by the fragment.
        assert!(verifier.verify("EFfoo", &net).await.unwrap());
        assert!(verifier.verify("AGgressive", &net).await.unwrap());
    }

    #[test]
    async fn end_to_end_verification_of_the_collaboration_net() {
        let outcome =
            pipeline::convert_str(COLLABORATION_XML, &FlowcheckConfig::default()).unwrap();
        let config = FlowcheckConfig::default();
        let registry = VerifierRegistry::from_config(&config).unwrap();
        let runner = VerificationRunner::new(registry, config.verifier_timeout());

        let formulas = formulas(&[
            "EF p_end_Customer",
            "EF p_msg_m1",
            "EF t_recv",
            "EF p_ghost",
            "AG !p_end_Shop",
        ]);
        let report = runner.run(&formulas, &outcome.net).await;

        // The customer lane terminates, the message is produced and consumed;
        // p_ghost names no node and the shop lane does reach its end place.
        assert_eq!(report.failed_formulas(), ["EF p_ghost", "AG !p_end_Shop"]);
        assert_eq!(
            report.failures[0].kind,
            FailureKind::Refuted {
                verifier: "syntax".to_string()
            }
        );
        assert_eq!(
            report.failures[1].kind,
            FailureKind::Refuted {
                verifier: "reachability".to_string()
            }
        );
    }
}

use intake_gate::state_machine::{allowed_transitions, validate_transition};
use intake_gate::{AcceptanceGate, Acknowledgement, GateEffect, GateEvent, GateState};
use intake_test_utils::init_tracing;
use proptest::prelude::*;

#[test]
fn test_first_acknowledgement_alone_keeps_accept_disabled() {
    init_tracing();
    let mut gate = AcceptanceGate::default();

    gate.handle(GateEvent::Toggle(Acknowledgement::First)).unwrap();
    assert!(!gate.can_accept());
    assert!(gate.handle(GateEvent::Accept).is_err());
    assert_eq!(gate.state(), GateState::Pending);

    gate.handle(GateEvent::Toggle(Acknowledgement::Second)).unwrap();
    assert!(gate.can_accept());
}

#[test]
fn test_decline_before_acceptance() {
    let mut gate = AcceptanceGate::default();
    for event in [
        GateEvent::Decline,
        GateEvent::Toggle(Acknowledgement::First),
        GateEvent::Decline,
        GateEvent::Toggle(Acknowledgement::Second),
        GateEvent::Decline,
    ] {
        let effect = gate.handle(event).unwrap();
        if event == GateEvent::Decline {
            assert_eq!(
                effect,
                GateEffect::NavigateAway {
                    route: "/".to_string()
                }
            );
        }
        assert_eq!(gate.state(), GateState::Pending);
    }
}

fn arb_state() -> impl Strategy<Value = GateState> {
    prop_oneof![Just(GateState::Pending), Just(GateState::Accepted)]
}

fn arb_event() -> impl Strategy<Value = GateEvent> {
    prop_oneof![
        Just(GateEvent::Toggle(Acknowledgement::First)),
        Just(GateEvent::Toggle(Acknowledgement::Second)),
        Just(GateEvent::Accept),
        Just(GateEvent::Decline),
        Just(GateEvent::DimmerClick),
        Just(GateEvent::EscapeKey),
    ]
}

proptest! {
    #[test]
    fn prop_all_transitions_are_subset_of_allowed(from in arb_state(), to in arb_state()) {
        let res = validate_transition(from, to);
        let allowed = allowed_transitions(from);

        if res.is_ok() {
            prop_assert!(allowed.contains(&to));
        } else {
            prop_assert!(!allowed.contains(&to));
        }
    }

    #[test]
    fn prop_accepted_only_via_accept_with_both_flags(
        events in prop::collection::vec(arb_event(), 0..32)
    ) {
        let mut gate = AcceptanceGate::default();

        for event in events {
            let before = gate.state();
            let ready = gate.can_accept();
            let result = gate.handle(event);

            if before == GateState::Pending && gate.state() == GateState::Accepted {
                prop_assert_eq!(event, GateEvent::Accept);
                prop_assert!(ready);
                prop_assert_eq!(&result, &Ok(GateEffect::Accepted));
            }
            if before == GateState::Accepted {
                prop_assert_eq!(gate.state(), GateState::Accepted);
            }
            if event == GateEvent::Decline && before == GateState::Pending {
                prop_assert_eq!(gate.state(), GateState::Pending);
                let navigated = matches!(result, Ok(GateEffect::NavigateAway { .. }));
                prop_assert!(navigated);
            }
        }
    }
}

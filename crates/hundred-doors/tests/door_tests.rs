//! Door state tests

use hundred_doors::*;

#[test]
fn test_toggling_twice_is_identity() {
    for state in [DoorState::Open, DoorState::Closed] {
        assert_eq!(state.toggled().toggled(), state);
    }
}

#[test]
fn test_parse_round_trips_through_display() {
    for state in [DoorState::Open, DoorState::Closed] {
        assert_eq!(state.to_string().parse::<DoorState>(), Ok(state));
    }
}

#[test]
fn test_parse_error_reports_the_input() {
    let err: ParseDoorStateError = "half-open".parse::<DoorState>().unwrap_err();
    assert_eq!(err.input, "half-open");
    assert!(err.to_string().contains("half-open"));
}

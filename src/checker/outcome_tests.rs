use super::*;

#[test]
fn constructors_match_contract_shape() {
    assert_eq!(
        CheckOutcome::not_checked(),
        CheckOutcome {
            errors: 0,
            failed: false,
            checked: false,
            ignored: false
        }
    );
    assert_eq!(
        CheckOutcome::failure(),
        CheckOutcome {
            errors: 1,
            failed: true,
            checked: true,
            ignored: false
        }
    );
}

#[test]
fn only_clean_checked_outcomes_feed_cross_checks() {
    assert!(CheckOutcome::passed().is_valid_value());
    assert!(!CheckOutcome::not_checked().is_valid_value());
    assert!(!CheckOutcome::skipped().is_valid_value());
    assert!(!CheckOutcome::failure().is_valid_value());
}

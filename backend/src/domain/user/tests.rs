//! Validation and serialisation coverage for user records.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn draft() -> UserDraft {
    UserDraft {
        firstname: Some("Asha".into()),
        lastname: Some("Patil".into()),
        gender: Some("F".into()),
        phone: Some("9876543210".into()),
        address_line1: Some("12 MG Road".into()),
        address_line2: Some("Near the station".into()),
        pin: Some("411001".into()),
        district: Some("Pune".into()),
        state: Some("Maharashtra".into()),
    }
}

#[rstest]
fn valid_draft_converts(draft: UserDraft) {
    let details = UserDetails::try_from(draft).expect("valid draft");
    assert_eq!(details.firstname(), "Asha");
    assert_eq!(details.address_line2(), Some("Near the station"));
}

#[rstest]
fn missing_first_required_field_is_reported(mut draft: UserDraft) {
    draft.lastname = None;
    draft.pin = None;
    let err = UserDetails::try_from(draft).expect_err("missing lastname");
    assert_eq!(err, FieldError::Missing { field: "lastname" });
}

#[rstest]
#[case("gender", 11)]
#[case("phone", 16)]
#[case("pin", 7)]
#[case("state", 51)]
fn over_wide_fields_are_rejected(mut draft: UserDraft, #[case] field: &str, #[case] len: usize) {
    let value = Some("9".repeat(len));
    match field {
        "gender" => draft.gender = value,
        "phone" => draft.phone = value,
        "pin" => draft.pin = value,
        _ => draft.state = value,
    }
    let err = UserDetails::try_from(draft).expect_err("too wide");
    assert_eq!(err.field(), field);
    assert_eq!(err.code(), "too_long");
}

#[rstest]
fn blank_second_address_line_is_absent(mut draft: UserDraft) {
    draft.address_line2 = Some("   ".into());
    let details = UserDetails::try_from(draft).expect("valid draft");
    assert_eq!(details.address_line2(), None);
}

#[rstest]
fn user_serialises_flat_with_null_optional(mut draft: UserDraft) {
    draft.address_line2 = None;
    let user = User::new(UserId::new(3), UserDetails::try_from(draft).expect("valid"));
    let value = serde_json::to_value(&user).expect("serialise");

    assert_eq!(
        value,
        json!({
            "id": 3,
            "firstname": "Asha",
            "lastname": "Patil",
            "gender": "F",
            "phone": "9876543210",
            "address_line1": "12 MG Road",
            "address_line2": null,
            "pin": "411001",
            "district": "Pune",
            "state": "Maharashtra",
        })
    );
}

#[rstest]
fn replace_details_keeps_identifier(draft: UserDraft) {
    let mut user = User::new(UserId::new(9), UserDetails::try_from(draft.clone()).expect("valid"));
    let replacement = UserDraft {
        firstname: Some("Ravi".into()),
        address_line2: None,
        ..draft
    };
    let replacement = UserDetails::try_from(replacement).expect("valid");

    user.replace_details(replacement.clone());

    assert_eq!(user.id(), UserId::new(9));
    assert_eq!(user.details(), &replacement);
}

#[rstest]
fn details_convert_back_to_draft(draft: UserDraft) {
    let details = UserDetails::try_from(draft.clone()).expect("valid");
    assert_eq!(UserDraft::from(details), draft);
}

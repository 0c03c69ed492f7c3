//! Tests for employee API handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{call_json, test_app};

fn body(name: &str, employee_id: &str, department: &str) -> Value {
    json!({
        "employee_name": name,
        "employee_id": employee_id,
        "department": department,
        "profile": "Analyst",
    })
}

fn post(payload: &Value) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/employees/")
        .set_json(payload)
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn duplicate_employee_id_is_rejected_as_server_error() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let (status, _) = call_json(&app, post(&body("Asha", "E100", "Finance"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = call_json(&app, post(&body("Ravi", "E100", "Sales"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "internal_error");
    assert_eq!(error["message"], "Internal server error");

    let req = actix_test::TestRequest::get().uri("/employees").to_request();
    let (_, page) = call_json(&app, req).await;
    assert_eq!(page["total"], 1);
}

#[rstest]
#[actix_web::test]
async fn list_defaults_to_ten_per_page() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    for n in 0..12 {
        call_json(&app, post(&body("Asha", &format!("E{n}"), "Finance"))).await;
    }

    let req = actix_test::TestRequest::get().uri("/employees/").to_request();
    let (status, page) = call_json(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 12);
    assert_eq!(page["employees"].as_array().map(Vec::len), Some(10));
}

#[rstest]
#[case("/employees?department=Finance", 2)]
#[case("/employees?department=finance", 0)]
#[case("/employees?employee_id=E10", 2)]
#[case("/employees?search=ASHA", 1)]
#[case("/employees?department=Finance&search=ravi", 1)]
#[case("/employees?department=&profile=", 3)]
#[actix_web::test]
async fn filters_combine_with_and(#[case] uri: &str, #[case] expected: u64) {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    call_json(&app, post(&body("Asha Rao", "E100", "Finance"))).await;
    call_json(&app, post(&body("Ravi Iyer", "E101", "Finance"))).await;
    call_json(&app, post(&body("Meera Nair", "E200", "Sales"))).await;

    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let (status, page) = call_json(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], expected);
}

#[rstest]
#[actix_web::test]
async fn update_and_delete_round_trip() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let (_, created) = call_json(&app, post(&body("Asha", "E100", "Finance"))).await;
    let uri = format!("/employees/{}", created["id"]);

    let req = actix_test::TestRequest::put()
        .uri(&uri)
        .set_json(body("Asha", "E100", "Sales"))
        .to_request();
    let (status, updated) = call_json(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department"], "Sales");

    let req = actix_test::TestRequest::delete().uri(&uri).to_request();
    let (status, value) = call_json(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "message": "Employee deleted successfully" }));

    let req = actix_test::TestRequest::get().uri(&uri).to_request();
    let (status, error) = call_json(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Employee not found!");
}

#[rstest]
#[actix_web::test]
async fn employee_id_wider_than_column_is_rejected() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let (status, error) = call_json(&app, post(&body("Asha", "E1234567890", "Finance"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], json!({ "field": "employee_id", "code": "too_long" }));
}

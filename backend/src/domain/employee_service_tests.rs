//! Tests for the employee service.

use std::sync::Arc;

use pagination::PageRequest;
use rstest::rstest;

use super::*;
use crate::domain::fixtures::employee_details;
use crate::domain::ports::MockEmployeeRepository;
use crate::domain::{EmployeeFilters, ErrorCode};

fn make_service(repo: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
    EmployeeService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn duplicate_employee_id_is_a_server_error() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(EmployeePersistenceError::duplicate("E100")));

    let error = make_service(repo)
        .create(employee_details("Kiran Rao", "E100", "Finance"))
        .await
        .expect_err("duplicate");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("E100"), "{}", error.message());
}

#[rstest]
#[tokio::test]
async fn get_maps_missing_row_to_not_found() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = make_service(repo)
        .get(EmployeeId::new(3))
        .await
        .expect_err("missing employee");

    assert_eq!(error.message(), EMPLOYEE_NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn update_returns_replacement() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_replace()
        .times(1)
        .returning(|id, details| Ok(Some(Employee::new(id, details.clone()))));

    let employee = make_service(repo)
        .update(EmployeeId::new(2), employee_details("Kiran Rao", "E100", "Sales"))
        .await
        .expect("update succeeds");

    assert_eq!(employee.id(), EmployeeId::new(2));
    assert_eq!(employee.details().department(), "Sales");
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_employee_is_not_found() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete().times(1).return_once(|_| Ok(false));

    let error = make_service(repo)
        .delete(EmployeeId::new(77))
        .await
        .expect_err("missing employee");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn connection_failure_is_service_unavailable() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|_, _| Err(EmployeePersistenceError::connection("refused")));
    let query = EmployeeListQuery {
        filters: EmployeeFilters::default(),
        page: PageRequest::new(10, 0).expect("valid page"),
    };

    let error = make_service(repo).list(query).await.expect_err("failure");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

use assert_cmd::Command;
use httptest::{matchers::*, responders::*, Expectation, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn logged_in_session() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let session_file = temp_dir.path().join("session.json");
    fs::write(&session_file, r#"{ "token": "cli-token" }"#).unwrap();
    (temp_dir, session_file.to_string_lossy().to_string())
}

fn adminctl(server: &Server, session_file: &str) -> Command {
    let mut cmd = Command::cargo_bin("adminctl").unwrap();
    cmd.env_remove("ADMIN_TOKEN")
        .env("NO_COLOR", "1")
        .args(["--api-url", &format!("http://{}", server.addr())])
        .arg("--session-file")
        .arg(session_file);
    cmd
}

#[test]
fn given_pending_profiles_when_list_then_vendor_id_column_shown() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/pendingApprovals"))
            .respond_with(json_encoded(json!({
                "success": true,
                "data": [{
                    "_id": "P1",
                    "vandorId": "VEND-1",
                    "firstName": "Kiran",
                    "lastName": "Desai",
                    "email": "kiran@example.com",
                    "contactNumber": "9700000000",
                    "role": "vendor"
                }]
            }))),
    );
    let (_temp_dir, session_file) = logged_in_session();

    adminctl(&server, &session_file)
        .args(["pending", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("VENDOR ID")
                .and(predicate::str::contains("VEND-1"))
                .and(predicate::str::contains("Kiran Desai")),
        );
}

#[test]
fn given_no_pending_profiles_when_list_then_empty_message() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/pendingApprovals"))
            .respond_with(json_encoded(json!({ "success": true, "data": [] }))),
    );
    let (_temp_dir, session_file) = logged_in_session();

    adminctl(&server, &session_file)
        .args(["pending", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vendor profile found for approval"));
}

#[test]
fn given_pending_profile_when_approve_then_posts_and_reloads() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/pendingApprovals"))
            .times(2)
            .respond_with(json_encoded(json!({
                "success": true,
                "data": [{ "_id": "P1", "vandorId": "VEND-1", "firstName": "Kiran" }]
            }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/admin/approveVendor/VEND-1"),
            request::headers(contains(("authorization", "Bearer cli-token"))),
            request::body(json_decoded(eq(json!({ "profileActivation": "1" })))),
        ])
        .respond_with(json_encoded(json!({ "success": true }))),
    );
    let (_temp_dir, session_file) = logged_in_session();

    adminctl(&server, &session_file)
        .args(["pending", "approve", "P1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vendor Approved Successfully")
                .and(predicate::str::contains("1 profile(s) awaiting approval.")),
        );
}

#[test]
fn given_list_failure_when_reject_then_nothing_posted() {
    // only the failing list is expected; a POST would fail the test on drop
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/pendingApprovals"))
            .respond_with(json_encoded(json!({ "success": false }))),
    );
    let (_temp_dir, session_file) = logged_in_session();

    adminctl(&server, &session_file)
        .args(["pending", "reject", "P1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Failed to fetch ApproveVendorProfile.",
        ));
}

#[test]
fn given_reload_fails_after_approve_when_resolving_then_error_and_exit_code() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/admin/pendingApprovals"))
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({
                    "success": true,
                    "data": [{ "_id": "P1", "vandorId": "VEND-1", "firstName": "Kiran" }]
                })),
                json_encoded(json!({ "success": false, "message": "Session expired" })),
            ]),
    );
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/admin/approveVendor/VEND-1"))
            .respond_with(json_encoded(json!({ "success": true }))),
    );
    let (_temp_dir, session_file) = logged_in_session();

    adminctl(&server, &session_file)
        .args(["pending", "approve", "P1"])
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Vendor Approved Successfully")
                .and(predicate::str::contains("awaiting approval").not()),
        )
        .stderr(predicate::str::contains("Error: Session expired"));
}

mod common;

// self
use common::*;
use edgegrid_dns::{
	reconcile::{
		PROPAGATION_WARNING, ReconcileAction, ReconcileMode, ReconcileStatus, ResponseDetail,
	},
	record::DesiredRecord,
};

const FOUND_BODY: &str =
	r#"{"name":"www.example.com","type":"A","ttl":300,"rdata":["192.0.2.10"]}"#;
const GET: &str = "GET /config-dns/v2/zones/example.com/names/www.example.com/types/A";
const POST: &str = "POST /config-dns/v2/zones/example.com/names/www.example.com/types/A";
const PUT: &str = "PUT /config-dns/v2/zones/example.com/names/www.example.com/types/A";
const DELETE: &str = "DELETE /config-dns/v2/zones/example.com/names/www.example.com/types/A";

#[tokio::test]
async fn ensure_present_leaves_existing_record_alone() {
	let http = ScriptedHttpClient::new([Reply::Status(200, FOUND_BODY)]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::EnsurePresent).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::AlreadyPresent));
	assert_eq!(outcome.message, "DNS record already exists");
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn ensure_present_does_not_compare_fields() {
	let http = ScriptedHttpClient::new([Reply::Status(
		200,
		r#"{"name":"www.example.com","type":"A","ttl":60,"rdata":["198.51.100.1"]}"#,
	)]);
	let outcome = reconciler(&http).ensure_present(&desired()).await;

	assert!(outcome.is_success());
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn missing_record_is_created_once_with_desired_body() {
	let http = ScriptedHttpClient::new([
		Reply::Status(404, r#"{"title":"Not Found"}"#),
		Reply::Status(201, RECORD_BODY),
	]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::EnsurePresent).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::Created));
	assert_eq!(outcome.message, "DNS record created successfully");
	assert_eq!(
		outcome.detail,
		Some(ResponseDetail { http_status: 201, response_body: RECORD_BODY.into() })
	);
	assert_eq!(http.calls(), [GET, POST]);

	let create = &http.requests()[1];

	assert_eq!(create.body, RECORD_BODY);
	assert_eq!(create.header("Content-Type"), Some("application/json"));
	assert!(
		create
			.header("Authorization")
			.is_some_and(|v| v.ends_with("signature=Nl0y+GKRv00oYq5NE1tKuHgFGbwj972djS9pwGgh74k="))
	);
}

#[tokio::test]
async fn full_reconcile_creates_when_missing() {
	let http =
		ScriptedHttpClient::new([Reply::Status(404, ""), Reply::Status(200, RECORD_BODY)]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::FullReconcile).await;

	assert_eq!(outcome.action, Some(ReconcileAction::Created));
	assert_eq!(http.calls(), [GET, POST]);
}

#[tokio::test]
async fn full_reconcile_is_a_noop_when_values_match() {
	let http = ScriptedHttpClient::new([Reply::Status(200, FOUND_BODY)]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::FullReconcile).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::AlreadyCorrect));
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn full_reconcile_ignores_extra_remote_addresses_in_any_order() {
	let desired = DesiredRecord::builder("example.com", "www.example.com")
		.addresses(["192.0.2.11", "192.0.2.10"])
		.build()
		.expect("Two-address record should build.");
	let http = ScriptedHttpClient::new([Reply::Status(
		200,
		r#"{"name":"www.example.com","type":"A","ttl":300,"rdata":["192.0.2.10","192.0.2.99","192.0.2.11"]}"#,
	)]);
	let outcome = reconciler(&http).full_reconcile(&desired).await;

	assert_eq!(outcome.action, Some(ReconcileAction::AlreadyCorrect));
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn full_reconcile_updates_a_divergent_ttl() {
	let http = ScriptedHttpClient::new([
		Reply::Status(200, r#"{"name":"www.example.com","type":"A","ttl":60,"rdata":["192.0.2.10"]}"#),
		Reply::Status(200, RECORD_BODY),
	]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::FullReconcile).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::Updated));
	assert_eq!(outcome.message, "DNS record updated successfully");
	assert_eq!(http.calls(), [GET, PUT]);

	let update = &http.requests()[1];

	assert_eq!(update.body, RECORD_BODY);
	// The default policy leaves PUT undigested.
	assert!(
		update
			.header("Authorization")
			.is_some_and(|v| v.ends_with("signature=B/jjQ8BN3wzCF2/UlmwtIs9VRg0Td1GLV+juk38xGrI="))
	);
}

#[tokio::test]
async fn full_reconcile_updates_when_a_desired_address_is_missing() {
	let http = ScriptedHttpClient::new([
		Reply::Status(200, r#"{"name":"www.example.com","type":"A","ttl":300,"rdata":["192.0.2.77"]}"#),
		Reply::Status(201, RECORD_BODY),
	]);
	let outcome = reconciler(&http).full_reconcile(&desired()).await;

	assert_eq!(outcome.action, Some(ReconcileAction::Updated));
	assert_eq!(http.calls(), [GET, PUT]);
}

#[tokio::test]
async fn full_reconcile_fails_on_malformed_read_body() {
	let http = ScriptedHttpClient::new([Reply::Status(200, r#"{"ttl":"three hundred"}"#)]);
	let outcome = reconciler(&http).full_reconcile(&desired()).await;

	assert_eq!(outcome.status, ReconcileStatus::Failed);
	assert!(outcome.message.starts_with("Exception occurred: The read call returned a malformed record set."));
	assert!(outcome.message.contains("ttl"));
	assert_eq!(outcome.detail.map(|d| d.http_status), Some(200));
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn ensure_absent_is_a_noop_when_missing() {
	let http = ScriptedHttpClient::new([Reply::Status(404, "")]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::EnsureAbsent).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::AlreadyAbsent));
	assert_eq!(outcome.message, "DNS record does not exist, nothing to delete");
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn delete_then_verify_without_warning() {
	let http = ScriptedHttpClient::new([
		Reply::Status(200, FOUND_BODY),
		Reply::Status(204, ""),
		Reply::Status(404, ""),
	]);
	let outcome = reconciler(&http).ensure_absent(&desired().key).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.action, Some(ReconcileAction::Deleted));
	assert_eq!(outcome.warning, None);
	assert_eq!(http.calls(), [GET, DELETE, GET]);
	assert_eq!(http.requests()[1].body, "");
}

#[tokio::test]
async fn delete_then_verify_warns_while_record_lingers() {
	let http = ScriptedHttpClient::new([
		Reply::Status(200, FOUND_BODY),
		Reply::Status(200, "{}"),
		Reply::Status(200, FOUND_BODY),
	]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::EnsureAbsent).await;

	assert_eq!(outcome.status, ReconcileStatus::Success);
	assert_eq!(outcome.warning.as_deref(), Some(PROPAGATION_WARNING));
}

#[tokio::test]
async fn verification_transport_failure_is_only_a_warning() {
	let http = ScriptedHttpClient::new([
		Reply::Status(200, FOUND_BODY),
		Reply::Status(204, ""),
		Reply::NetworkFailure,
	]);
	let outcome = reconciler(&http).ensure_absent(&desired().key).await;

	assert!(outcome.is_success());
	assert_eq!(outcome.warning.as_deref(), Some(PROPAGATION_WARNING));
}

#[tokio::test]
async fn verification_can_be_disabled() {
	let http = ScriptedHttpClient::new([Reply::Status(200, FOUND_BODY), Reply::Status(204, "")]);
	let outcome =
		reconciler(&http).with_verify_deletion(false).ensure_absent(&desired().key).await;

	assert!(outcome.is_success());
	assert_eq!(http.calls(), [GET, DELETE]);
}

#[tokio::test]
async fn unexpected_read_status_fails_and_halts() {
	for mode in [ReconcileMode::EnsurePresent, ReconcileMode::FullReconcile, ReconcileMode::EnsureAbsent]
	{
		let http = ScriptedHttpClient::new([Reply::Status(500, r#"{"title":"Internal"}"#)]);
		let outcome = reconciler(&http).reconcile(&desired(), mode).await;

		assert_eq!(outcome.status, ReconcileStatus::Failed, "{mode} should fail on a 500 read.");
		assert_eq!(outcome.message, r#"Unexpected status code: 500. Response: {"title":"Internal"}"#);
		assert_eq!(
			outcome.detail,
			Some(ResponseDetail { http_status: 500, response_body: r#"{"title":"Internal"}"#.into() })
		);
		assert_eq!(http.calls(), [GET], "{mode} should stop after the failed read.");
	}
}

#[tokio::test]
async fn rejected_writes_fail_with_status_and_body() {
	let cases = [
		(ReconcileMode::EnsurePresent, 404, "Failed to create DNS record. Status: 500. Error: boom"),
		(ReconcileMode::FullReconcile, 200, "Failed to update DNS record. Status: 500. Error: boom"),
		(ReconcileMode::EnsureAbsent, 200, "Failed to delete DNS record. Status: 500. Error: boom"),
	];

	for (mode, read_status, message) in cases {
		let read_body = if read_status == 200 {
			r#"{"name":"www.example.com","type":"A","ttl":1,"rdata":[]}"#
		} else {
			""
		};
		let http = ScriptedHttpClient::new([
			Reply::Status(read_status, read_body),
			Reply::Status(500, "boom"),
		]);
		let outcome = reconciler(&http).reconcile(&desired(), mode).await;

		assert_eq!(outcome.status, ReconcileStatus::Failed);
		assert_eq!(outcome.message, message);
		assert_eq!(outcome.detail.map(|d| d.http_status), Some(500));
		assert_eq!(http.calls().len(), 2, "{mode} should not issue a verification read.");
		assert_eq!(http.remaining(), 0);
	}
}

#[tokio::test]
async fn transport_failure_on_read_is_terminal() {
	let http = ScriptedHttpClient::new([Reply::NetworkFailure]);
	let outcome = reconciler(&http).reconcile(&desired(), ReconcileMode::FullReconcile).await;

	assert_eq!(outcome.status, ReconcileStatus::Failed);
	assert_eq!(
		outcome.message,
		"Exception occurred: Network error occurred while calling the DNS API.: connection reset by peer"
	);
	assert_eq!(outcome.detail, None);
	assert_eq!(http.calls(), [GET]);
}

#[tokio::test]
async fn transport_failure_on_write_is_terminal() {
	let cases = [
		(ReconcileMode::EnsurePresent, Reply::Status(404, "")),
		(
			ReconcileMode::FullReconcile,
			Reply::Status(200, r#"{"name":"www.example.com","type":"A","ttl":60,"rdata":["192.0.2.10"]}"#),
		),
		(ReconcileMode::EnsureAbsent, Reply::Status(200, FOUND_BODY)),
	];

	for (mode, read) in cases {
		let http = ScriptedHttpClient::new([read, Reply::NetworkFailure]);
		let outcome = reconciler(&http).reconcile(&desired(), mode).await;

		assert_eq!(outcome.status, ReconcileStatus::Failed, "{mode} should fail.");
		assert_eq!(outcome.action, None);
		assert_eq!(
			outcome.message,
			"Exception occurred: Network error occurred while calling the DNS API.: connection reset by peer"
		);
		assert_eq!(outcome.detail, None);
		assert_eq!(http.calls().len(), 2, "{mode} should stop after the failed write.");
		assert_eq!(http.remaining(), 0);
	}
}

#[tokio::test]
async fn hand_built_invalid_records_fail_before_any_request() {
	let cases = [
		(
			DesiredRecord { key: desired().key, addresses: Vec::new(), ttl: 0 },
			"Exception occurred: Desired record is invalid.: Desired record must list at least one address.",
		),
		(
			DesiredRecord { ttl: 0, ..desired() },
			"Exception occurred: Desired record is invalid.: Desired record TTL must be positive.",
		),
		(
			DesiredRecord { addresses: vec!["192.0.2.10".into(), "  ".into()], ..desired() },
			"Exception occurred: Desired record is invalid.: Desired record address #1 is blank.",
		),
	];

	for (record, message) in cases {
		for mode in [ReconcileMode::EnsurePresent, ReconcileMode::FullReconcile] {
			let http = ScriptedHttpClient::new(Vec::<Reply>::new());
			let outcome = reconciler(&http).reconcile(&record, mode).await;

			assert_eq!(outcome.status, ReconcileStatus::Failed, "{mode} should reject the record.");
			assert_eq!(outcome.message, message);
			assert!(http.calls().is_empty(), "{mode} should not touch the API.");
		}
	}
}

use actix_web::test;

use crate::common::{assert_error_envelope, question_ids, read_success};
use crate::support::factory::{seed_many, HISTORY};
use crate::support::{create_test_app, db_state};

#[actix_web::test]
async fn delete_removes_question_and_decrements_total() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let ids = seed_many(&db, 3, HISTORY).await;
    let victim = ids[1];

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/questions/{victim}"))
            .to_request(),
    )
    .await;
    let json = read_success(resp).await;
    assert_eq!(json["deleted"], victim);
    assert_eq!(json["total_questions"], 2);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
    let listing = read_success(resp).await;
    assert_eq!(listing["total_questions"], 2);
    assert!(!question_ids(&listing).contains(&(victim as i64)));
}

#[actix_web::test]
async fn deleting_twice_is_not_found_the_second_time() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let ids = seed_many(&db, 2, HISTORY).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let uri = format!("/questions/{}", ids[0]);
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    read_success(resp).await;

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_error_envelope(resp, 404).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
    assert_eq!(read_success(resp).await["total_questions"], 1);
}

#[actix_web::test]
async fn unknown_or_malformed_ids_are_not_found() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    seed_many(&db, 1, HISTORY).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    for uri in ["/questions/4242", "/questions/abc"] {
        let resp = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
        assert_error_envelope(resp, 404).await;
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request()).await;
    assert_eq!(read_success(resp).await["total_questions"], 1);
}

#[actix_web::test]
async fn get_on_a_question_id_is_method_not_allowed() {
    let state = db_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/questions/1").to_request()).await;
    assert_error_envelope(resp, 405).await;
}

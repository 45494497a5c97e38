use std::collections::BTreeSet;

use actix_web::test;
use serde_json::json;

use crate::common::{assert_error_envelope, read_success};
use crate::support::factory::{seed_many, ART, HISTORY, SCIENCE};
use crate::support::{create_test_app, db_state};

#[actix_web::test]
async fn quiz_returns_an_unseen_question_from_the_category() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let science = seed_many(&db, 3, SCIENCE).await;
    seed_many(&db, 3, ART).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let body = json!({
        "previous_questions": [science[0], science[1]],
        "quiz_category": {"id": SCIENCE, "type": "Science"}
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/quizzes").set_json(body).to_request(),
    )
    .await;
    let json = read_success(resp).await;

    assert_eq!(json["question"]["id"], science[2]);
    assert_eq!(json["question"]["category"], SCIENCE);
}

#[actix_web::test]
async fn playing_through_a_category_visits_each_question_once() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let history: BTreeSet<i64> = seed_many(&db, 5, HISTORY)
        .await
        .into_iter()
        .map(i64::from)
        .collect();
    seed_many(&db, 4, ART).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let body = json!({
            "previous_questions": previous,
            "quiz_category": {"id": HISTORY.to_string()}
        });
        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/quizzes").set_json(body).to_request(),
        )
        .await;

        if resp.status().as_u16() == 404 {
            assert_error_envelope(resp, 404).await;
            break;
        }

        let json = read_success(resp).await;
        let id = json["question"]["id"].as_i64().expect("question id");
        assert!(!previous.contains(&id), "question {id} repeated");
        previous.push(id);
        assert!(previous.len() <= history.len(), "quiz never ran dry");
    }

    assert_eq!(previous.into_iter().collect::<BTreeSet<_>>(), history);
}

#[actix_web::test]
async fn category_zero_and_absent_category_mean_all() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    let science = seed_many(&db, 1, SCIENCE).await;
    let art = seed_many(&db, 1, ART).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let body = json!({
        "previous_questions": [science[0]],
        "quiz_category": {"id": 0, "type": "click"}
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/quizzes").set_json(body).to_request(),
    )
    .await;
    assert_eq!(read_success(resp).await["question"]["id"], art[0]);

    let body = json!({ "previous_questions": [art[0]] });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/quizzes").set_json(body).to_request(),
    )
    .await;
    assert_eq!(read_success(resp).await["question"]["id"], science[0]);
}

#[actix_web::test]
async fn exhausted_or_empty_pool_is_not_found() {
    let state = db_state().await;
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let body = json!({
        "previous_questions": [],
        "quiz_category": {"id": SCIENCE}
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/quizzes").set_json(body).to_request(),
    )
    .await;
    assert_error_envelope(resp, 404).await;
}

#[actix_web::test]
async fn missing_history_or_bad_category_id_is_unprocessable() {
    let state = db_state().await;
    let db = state.db().expect("db").clone();
    seed_many(&db, 2, SCIENCE).await;

    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .expect("create test app");

    let bodies = [
        json!({"quiz_category": {"id": SCIENCE}}),
        json!({"previous_questions": null, "quiz_category": {"id": SCIENCE}}),
        json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
        json!({"previous_questions": "1,2", "quiz_category": {"id": SCIENCE}}),
    ];
    for body in bodies {
        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/quizzes").set_json(&body).to_request(),
        )
        .await;
        assert_error_envelope(resp, 422).await;
    }
}

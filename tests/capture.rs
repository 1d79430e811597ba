use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{extract::Request, middleware::{self, Next}};
use placeregistry::{
    client::{ApiClient, CaptureSession, FixedLocation, Notice, PlaceForm, StaticCamera},
    store, AppState, Coordinates, MissingField,
};

/// Spawns the service and counts every request that reaches it.
async fn spawn_counted_app() -> (SocketAddr, Arc<AtomicUsize>) {
    let db_pool = store::connect_in_memory().await.expect("open sqlite");
    store::migrate(&db_pool).await.expect("migrate");

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = placeregistry::app(AppState { db_pool }).layer(middleware::from_fn(
        move |request: Request, next: Next| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                next.run(request).await
            }
        },
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    (addr, hits)
}

const LAB: Coordinates = Coordinates { latitude: -23.55, longitude: -46.63 };

#[tokio::test]
async fn submit_prepends_without_refetch() {
    let (addr, hits) = spawn_counted_app().await;
    let api = ApiClient::new(format!("http://{addr}"));
    let existing = api
        .create_place(&placeregistry::client::NewPlace {
            title: "Old".into(),
            description: "seen before".into(),
            latitude: 0.0,
            longitude: 0.0,
            photo: None,
        })
        .await
        .expect("seed");

    let mut session = CaptureSession::new(api, FixedLocation::granted(LAB), StaticCamera::Unavailable);
    assert!(session.load().await);
    assert_eq!(session.places().items(), &[existing.clone()]);

    session.form_mut().title = "Lab A".into();
    session.form_mut().description = "Main lab".into();
    session.request_location().await;
    let before = hits.load(Ordering::SeqCst);

    let created = session.submit().await.expect("saved");
    assert_eq!(hits.load(Ordering::SeqCst), before + 1, "exactly one create call");
    assert_eq!(created.title, "Lab A");
    assert_eq!(created.location, LAB);

    let titles: Vec<_> = session.places().items().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Lab A", "Old"]);
    assert_eq!(session.form(), &PlaceForm::default());
    assert_eq!(session.drain_notices(), vec![Notice::Saved]);
}

#[tokio::test]
async fn incomplete_form_never_calls_the_service() {
    let (addr, hits) = spawn_counted_app().await;
    let api = ApiClient::new(format!("http://{addr}"));

    let mut session = CaptureSession::new(api, FixedLocation::denied(), StaticCamera::Unavailable);
    assert!(session.load().await);
    let after_load = hits.load(Ordering::SeqCst);

    // empty title
    session.form_mut().description = "Main lab".into();
    session.form_mut().location = Some(LAB);
    assert_eq!(session.submit().await, None);

    // no location
    session.form_mut().title = "Lab A".into();
    session.form_mut().location = None;
    assert_eq!(session.request_location().await, None);
    assert_eq!(session.submit().await, None);

    assert_eq!(hits.load(Ordering::SeqCst), after_load);
    assert_eq!(
        session.drain_notices(),
        vec![
            Notice::MissingField(MissingField("title")),
            Notice::PermissionDenied(placeregistry::client::Capability::Location),
            Notice::MissingField(MissingField("location")),
        ]
    );
    assert!(session.places().is_empty());
}

#[tokio::test]
async fn photo_is_sent_inline() {
    let (addr, _) = spawn_counted_app().await;
    let api = ApiClient::new(format!("http://{addr}"));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.jpg");
    std::fs::write(&path, [0xff, 0xd8, 0xff]).expect("write photo");

    let mut session = CaptureSession::new(
        api.clone(),
        FixedLocation::granted(LAB),
        StaticCamera::File(path),
    );
    session.form_mut().title = "Lab A".into();
    session.form_mut().description = "Main lab".into();
    session.request_location().await;
    assert!(session.take_photo().await);

    let created = session.submit().await.expect("saved");
    assert_eq!(created.photo.as_deref(), Some("data:image/jpeg;base64,/9j/"));

    let fetched = api.get_place(&created.id.to_string()).await.expect("get");
    assert_eq!(fetched.photo, created.photo);
}

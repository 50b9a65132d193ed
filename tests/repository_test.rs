mod common;

use std::collections::HashSet;

use common::{object_draft, register_admin, setup_app, test_config};
use sce_portal_data::types::{
    NewNews, NewPosition, NewReport, NewsPatch, PositionPatch, ReportPatch, ReportStatus,
    SceObjectPatch,
};
use sce_portal_data::AppData;

#[test]
fn created_ids_are_unique_and_listed_exactly_once() {
    let (_kv, mut app) = setup_app();
    let author = register_admin(&mut app);

    let mut ids = HashSet::new();
    for _ in 0..10 {
        let object = app.create_object(object_draft(&author)).unwrap();
        assert!(ids.insert(object.id.clone()), "id repeated: {}", object.id);
        assert_eq!(
            app.objects().iter().filter(|o| o.id == object.id).count(),
            1
        );
        assert_eq!(app.object(&object.id), Some(&object));
    }
    assert_eq!(app.objects().len(), 10);
}

#[test]
fn update_preserves_untouched_fields_and_refreshes_updated_at() {
    let (_kv, mut app) = setup_app();
    let author = register_admin(&mut app);
    let object = app.create_object(object_draft(&author)).unwrap();

    let updated = app
        .update_object(
            &object.id,
            SceObjectPatch {
                description: Some("Revised description.".to_string()),
                ..SceObjectPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.description, "Revised description.");
    assert_eq!(updated.number, object.number);
    assert_eq!(updated.name, object.name);
    assert_eq!(updated.author, object.author);
    assert_eq!(updated.created_at, object.created_at);
    assert!(updated.updated_at >= object.updated_at);
}

#[test]
fn update_of_an_unknown_id_is_not_found() {
    let (_kv, mut app) = setup_app();
    register_admin(&mut app);

    let err = app
        .update_news("no-such-id", NewsPatch::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "news item not found: no-such-id");
}

#[test]
fn delete_is_idempotent() {
    let (_kv, mut app) = setup_app();
    let author = register_admin(&mut app);
    let object = app.create_object(object_draft(&author)).unwrap();

    app.delete_object(&object.id).unwrap();
    assert!(app.objects().iter().all(|o| o.id != object.id));
    // Second delete of the same id must not fail.
    app.delete_object(&object.id).unwrap();
}

#[test]
fn report_status_moves_through_the_moderation_states() {
    let (_kv, mut app) = setup_app();
    let author = register_admin(&mut app);

    let report = app
        .create_report(NewReport {
            title: "Containment breach at Site-12".to_string(),
            content: "Full incident timeline.".to_string(),
            author: author.clone(),
            status: ReportStatus::Draft,
        })
        .unwrap();
    assert_eq!(report.status, ReportStatus::Draft);

    let submitted = app
        .update_report(
            &report.id,
            ReportPatch {
                status: Some(ReportStatus::Submitted),
                ..ReportPatch::default()
            },
        )
        .unwrap();
    assert_eq!(submitted.status, ReportStatus::Submitted);
    assert_eq!(submitted.title, report.title);

    let approved = app
        .update_report(
            &report.id,
            ReportPatch {
                status: Some(ReportStatus::Approved),
                ..ReportPatch::default()
            },
        )
        .unwrap();
    assert_eq!(approved.status, ReportStatus::Approved);
}

#[test]
fn collections_round_trip_across_restart() {
    let (kv, mut app) = setup_app();
    let author = register_admin(&mut app);

    app.create_object(object_draft(&author)).unwrap();
    app.create_news(NewNews {
        title: "Site-19 reopened".to_string(),
        content: "After scheduled maintenance.".to_string(),
        author: author.clone(),
    })
    .unwrap();
    app.create_report(NewReport {
        title: "Weekly survey".to_string(),
        content: "Nothing anomalous.".to_string(),
        author: author.clone(),
        status: ReportStatus::Submitted,
    })
    .unwrap();
    app.create_position(NewPosition {
        name: "Containment Specialist".to_string(),
        description: "Maintains containment procedures.".to_string(),
        clearance_level: 3,
    })
    .unwrap();

    // Simulated process restart: a fresh facade over the same store.
    let reopened = AppData::init(test_config(), kv).unwrap();
    assert_eq!(reopened.objects(), app.objects());
    assert_eq!(reopened.news(), app.news());
    assert_eq!(reopened.reports(), app.reports());
    assert_eq!(reopened.positions(), app.positions());
    assert_eq!(reopened.users(), app.users());
}

#[test]
fn position_updates_merge_shallowly() {
    let (_kv, mut app) = setup_app();
    register_admin(&mut app);

    let position = app
        .create_position(NewPosition {
            name: "Archivist".to_string(),
            description: "Maintains the archive.".to_string(),
            clearance_level: 2,
        })
        .unwrap();

    let updated = app
        .update_position(
            &position.id,
            PositionPatch {
                clearance_level: Some(3),
                ..PositionPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Archivist");
    assert_eq!(updated.clearance_level, 3);
}

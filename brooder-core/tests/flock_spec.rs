use speculate2::speculate;

speculate! {
    use brooder_core::db::{seed, Database};
    use brooder_core::error::CoreError;
    use brooder_core::models::{
        CreateFlockInput, CreateChickInput, FlockStatus, UpdateFlockInput,
    };
    use brooder_core::schedule;
    use chrono::{Duration, Utc};

    fn setup_db() -> Database {
        let db = Database::open_memory().expect("Failed to create test database");
        db.migrate().expect("Failed to migrate");
        db
    }

    fn seeded_db() -> Database {
        let db = setup_db();
        seed::load_catalog(&db).expect("Failed to seed catalog");
        db
    }

    describe "flock creation" {
        it "defaults to preparing in week 0 with the default name" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();

            assert_eq!(flock.name, "My Flock");
            assert_eq!(flock.status, FlockStatus::Preparing);
            assert_eq!(flock.current_week, 0);
            assert!(flock.start_date.is_none());
        }

        it "starts active in week 1 when created with a start date" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: Some("Spring Batch".into()),
                start_date: Some(Utc::now()),
            }).unwrap();

            assert_eq!(flock.status, FlockStatus::Active);
            assert_eq!(flock.current_week, 1);
            assert!(flock.start_date.is_some());
        }

        it "rejects an empty name" {
            let db = setup_db();
            let err = db.create_flock("user-1", CreateFlockInput {
                name: Some("   ".into()),
                start_date: None,
            }).unwrap_err();

            assert!(matches!(err, CoreError::Validation(_)));
        }

        it "rejects a name over fifty characters" {
            let db = setup_db();
            let err = db.create_flock("user-1", CreateFlockInput {
                name: Some("c".repeat(51)),
                start_date: None,
            }).unwrap_err();

            assert!(matches!(err, CoreError::Validation(_)));
        }
    }

    describe "listing" {
        it "only returns the owner's flocks" {
            let db = setup_db();
            db.create_flock("alice", CreateFlockInput::default()).unwrap();
            db.create_flock("alice", CreateFlockInput::default()).unwrap();
            db.create_flock("bob", CreateFlockInput::default()).unwrap();

            assert_eq!(db.list_flocks_for_user("alice").unwrap().len(), 2);
            assert_eq!(db.list_flocks_for_user("bob").unwrap().len(), 1);
            assert!(db.list_flocks_for_user("carol").unwrap().is_empty());
        }
    }

    describe "starting a flock" {
        it "moves preparing to active with week 1 and a start date" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();

            let start = Utc::now();
            let started = db.start_flock(flock.id, start).unwrap();

            assert_eq!(started.status, FlockStatus::Active);
            assert_eq!(started.current_week, 1);
            assert_eq!(started.start_date, Some(start));
        }

        it "rejects starting an already active flock" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();
            db.start_flock(flock.id, Utc::now()).unwrap();

            let err = db.start_flock(flock.id, Utc::now()).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTransition(_)));
        }

        it "rejects starting a graduated flock" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(Utc::now()),
            }).unwrap();
            db.update_flock(flock.id, UpdateFlockInput {
                status: Some(FlockStatus::Graduated),
                ..Default::default()
            }).unwrap();

            let err = db.start_flock(flock.id, Utc::now()).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTransition(_)));
        }

        it "errors on an unknown flock" {
            let db = setup_db();
            let err = db.start_flock(uuid::Uuid::new_v4(), Utc::now()).unwrap_err();
            assert!(matches!(err, CoreError::NotFound("flock")));
        }
    }

    describe "updating" {
        it "renames without touching other fields" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();

            let renamed = db.update_flock(flock.id, UpdateFlockInput {
                name: Some("The Peepers".into()),
                ..Default::default()
            }).unwrap();

            assert_eq!(renamed.name, "The Peepers");
            assert_eq!(renamed.status, FlockStatus::Preparing);
            assert_eq!(renamed.current_week, 0);
        }

        it "validates the new name" {
            let db = setup_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();

            let err = db.update_flock(flock.id, UpdateFlockInput {
                name: Some(String::new()),
                ..Default::default()
            }).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
    }

    describe "deletion" {
        it "cascades to chicks and the completion ledger" {
            let db = seeded_db();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(Utc::now()),
            }).unwrap();
            let chick = db.create_chick(flock.id, CreateChickInput {
                name: "Pepper".into(),
                breed: None,
                hatch_date: None,
                description: None,
                photo_url: None,
            }).unwrap();
            let task = db.tasks_for_week(1).unwrap()[0].clone();
            db.complete_task(flock.id, task.id, Utc::now().date_naive(), None).unwrap();

            assert!(db.delete_flock(flock.id).unwrap());

            assert!(db.get_flock(flock.id).unwrap().is_none());
            assert!(db.get_chick(chick.id).unwrap().is_none());
            let rows: i64 = db.with_connection(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM task_completions", [], |r| r.get(0))?)
            }).unwrap();
            assert_eq!(rows, 0);
        }

        it "returns false for an unknown flock" {
            let db = setup_db();
            assert!(!db.delete_flock(uuid::Uuid::new_v4()).unwrap());
        }
    }

    describe "week resolution" {
        it "shows week 0 at day 0 for a preparing flock" {
            let db = seeded_db();
            let flock = db.create_flock("user-1", CreateFlockInput::default()).unwrap();

            let view = schedule::resolve_week(&db, &flock, None, Utc::now()).unwrap();

            assert_eq!(view.current_week, 0);
            assert_eq!(view.current_day, 0);
            assert_eq!(view.flock_status, FlockStatus::Preparing);
            assert!(view.tasks.iter().all(|t| t.task.week_number == 0));
        }

        it "is week 1 day 1 right after starting" {
            let db = seeded_db();
            let start = Utc::now();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(start),
            }).unwrap();

            let view = schedule::resolve_week(&db, &flock, None, start + Duration::hours(1)).unwrap();

            assert_eq!(view.current_week, 1);
            assert_eq!(view.current_day, 1);
        }

        it "advances one week per seven days and caps at week 8" {
            let db = seeded_db();
            let start = Utc::now();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(start),
            }).unwrap();

            let day_8 = schedule::resolve_week(&db, &flock, None, start + Duration::days(7)).unwrap();
            assert_eq!(day_8.current_week, 2);

            let much_later = schedule::resolve_week(&db, &flock, None, start + Duration::days(365)).unwrap();
            assert_eq!(much_later.current_week, 8);
        }

        it "serves a requested week without changing the current one" {
            let db = seeded_db();
            let start = Utc::now();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(start),
            }).unwrap();

            let view = schedule::resolve_week(&db, &flock, Some(3), start + Duration::hours(1)).unwrap();

            assert_eq!(view.current_week, 1);
            assert!(view.tasks.iter().all(|t| t.task.week_number == 3));
            // Temperature target follows the viewed week, not the current one.
            assert_eq!(view.recommended_temp_f, 85);
        }

        it "overlays only completions logged for today" {
            let db = seeded_db();
            let now = Utc::now();
            let flock = db.create_flock("user-1", CreateFlockInput {
                name: None,
                start_date: Some(now),
            }).unwrap();
            let task = db.tasks_for_week(1).unwrap()[0].clone();
            let today = brooder_core::calendar::reference_day(now);
            db.complete_task(flock.id, task.id, today, None).unwrap();

            let same_day = schedule::resolve_week(&db, &flock, None, now).unwrap();
            let entry = same_day.tasks.iter().find(|t| t.task.id == task.id).unwrap();
            assert!(entry.is_completed);

            // Viewed two days later the ledger row is off-screen.
            let later = schedule::resolve_week(&db, &flock, None, now + Duration::days(2)).unwrap();
            let entry = later.tasks.iter().find(|t| t.task.id == task.id).unwrap();
            assert!(!entry.is_completed);
        }

        it "orders pinned-day tasks before open daily tasks within a week" {
            let db = seeded_db();
            let tasks = db.tasks_for_week(1).unwrap();

            let first_null = tasks.iter().position(|t| t.day_number.is_none());
            let last_pinned = tasks.iter().rposition(|t| t.day_number.is_some());
            if let (Some(first_null), Some(last_pinned)) = (first_null, last_pinned) {
                assert!(last_pinned < first_null);
            }
        }
    }
}

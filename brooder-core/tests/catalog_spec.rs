use speculate2::speculate;

speculate! {
    use brooder_core::db::{seed, Database};
    use brooder_core::models::{TaskCategory, TaskFrequency};

    fn seeded_db() -> Database {
        let db = Database::open_memory().expect("Failed to create test database");
        db.migrate().expect("Failed to migrate");
        seed::load_catalog(&db).expect("Failed to seed catalog");
        db
    }

    describe "the built-in curriculum" {
        it "loads sixty-five tasks across weeks 0 through 5" {
            let db = seeded_db();

            assert_eq!(db.task_count().unwrap(), 65);
            let all = db.all_tasks().unwrap();
            assert_eq!(all.len(), 65);
            assert!(all.iter().all(|t| (0..=5).contains(&t.week_number)));
        }

        it "makes week 0 pure one-time preparation" {
            let db = seeded_db();
            let prep = db.tasks_for_week(0).unwrap();

            assert_eq!(prep.len(), 7);
            assert!(prep.iter().all(|t| t.frequency == TaskFrequency::Once));
            assert!(prep.iter().all(|t| t.category == TaskCategory::Preparation));
            assert!(prep.iter().all(|t| t.day_number.is_none()));
        }

        it "reloading replaces rather than duplicates the catalog" {
            let db = seeded_db();
            seed::load_catalog(&db).unwrap();

            assert_eq!(db.task_count().unwrap(), 65);
        }
    }

    describe "day-level queries" {
        it "selects pinned tasks for the day plus the week's dailies" {
            let db = seeded_db();

            // Day 1 of week 1: arrival tasks plus every daily.
            let arrival = db.tasks_for_week_and_day(1, 1).unwrap();
            assert!(arrival.iter().any(|t| t.day_number == Some(1)));
            assert!(arrival.iter().any(|t| t.frequency == TaskFrequency::Daily));
            assert!(arrival.iter().all(|t| {
                t.day_number == Some(1)
                    || (t.day_number.is_none() && t.frequency == TaskFrequency::Daily)
            }));

            // Day 6 of week 1 has nothing pinned, so only the dailies.
            let quiet_day = db.tasks_for_week_and_day(1, 6).unwrap();
            assert!(quiet_day.iter().all(|t| t.frequency == TaskFrequency::Daily));
        }

        it "filters by category across weeks" {
            let db = seeded_db();
            let milestones = db.tasks_for_category(TaskCategory::Milestone).unwrap();

            assert!(!milestones.is_empty());
            assert!(milestones.iter().all(|t| t.category == TaskCategory::Milestone));
            // One milestone review closes each of weeks 1 through 5.
            for week in 1..=5 {
                assert!(milestones.iter().any(|t| t.week_number == week));
            }
        }
    }
}

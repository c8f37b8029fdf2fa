pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS flocks (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'preparing' CHECK (status IN ('preparing', 'active', 'graduated')),
    start_date TEXT,
    current_week INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    detailed_content TEXT NOT NULL,
    week_number INTEGER NOT NULL,
    day_number INTEGER,
    frequency TEXT NOT NULL CHECK (frequency IN ('once', 'daily', 'weekly')),
    category TEXT NOT NULL CHECK (category IN ('preparation', 'brooder_care', 'feeding_water', 'health_check', 'environment', 'milestone')),
    sort_order INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS task_completions (
    id TEXT PRIMARY KEY,
    flock_id TEXT NOT NULL REFERENCES flocks(id) ON DELETE CASCADE,
    task_id TEXT NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
    day_date TEXT NOT NULL,
    completed_at TEXT NOT NULL,
    undone_at TEXT,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS chicks (
    id TEXT PRIMARY KEY,
    flock_id TEXT NOT NULL REFERENCES flocks(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    breed TEXT,
    hatch_date TEXT,
    description TEXT,
    photo_url TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS chick_photos (
    id TEXT PRIMARY KEY,
    chick_id TEXT NOT NULL REFERENCES chicks(id) ON DELETE CASCADE,
    image_url TEXT NOT NULL,
    thumbnail_url TEXT NOT NULL,
    taken_at TEXT NOT NULL,
    week_number INTEGER
);

CREATE TABLE IF NOT EXISTS chick_notes (
    id TEXT PRIMARY KEY,
    chick_id TEXT NOT NULL REFERENCES chicks(id) ON DELETE CASCADE,
    content TEXT NOT NULL,
    week_number INTEGER,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_flocks_user ON flocks(user_id);
CREATE INDEX IF NOT EXISTS idx_tasks_week ON tasks(week_number);
CREATE INDEX IF NOT EXISTS idx_completions_flock_day ON task_completions(flock_id, day_date);
CREATE INDEX IF NOT EXISTS idx_chicks_flock ON chicks(flock_id);
CREATE INDEX IF NOT EXISTS idx_photos_chick ON chick_photos(chick_id);
CREATE INDEX IF NOT EXISTS idx_notes_chick ON chick_notes(chick_id);

-- At most one ledger row per task per calendar day per flock; the
-- complete upsert races against this index, not application checks
CREATE UNIQUE INDEX IF NOT EXISTS idx_completion_key
    ON task_completions(flock_id, task_id, day_date);
"#;

use crate::db::create::{
    AlarmCreate, NoteCreate, QuickLinkCreate, RecordCreate, RecordKind, ReminderCreate,
    TimerCreate,
};
use crate::db::models::{DbAlarm, DbNote, DbQuickLink, DbReminder, DbTimer, RecordCounts};
use crate::db::schema::SQLITE_INIT;
use crate::error::DashError;
use chrono::Local;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::collections::HashMap;
use std::path::Path;
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a validated record and return its id.
    Create(RecordCreate, RpcReplyPort<Result<i64, DashError>>),

    /// Delete by id. Replies whether a row was removed.
    Delete(RecordKind, i64, RpcReplyPort<Result<bool, DashError>>),

    /// Flip `is_done` on a reminder. Replies whether a row was updated.
    ToggleReminder(i64, RpcReplyPort<Result<bool, DashError>>),

    ListNotes(Option<u32>, RpcReplyPort<Result<Vec<DbNote>, DashError>>),
    ListReminders(Option<u32>, RpcReplyPort<Result<Vec<DbReminder>, DashError>>),
    ListAlarms(RpcReplyPort<Result<Vec<DbAlarm>, DashError>>),
    ListTimers(RpcReplyPort<Result<Vec<DbTimer>, DashError>>),
    ListQuickLinks(Option<u32>, RpcReplyPort<Result<Vec<DbQuickLink>, DashError>>),

    /// Dashboard totals (open reminders only).
    Counts(RpcReplyPort<Result<RecordCounts, DashError>>),

    /// Upsert one setting.
    SetSetting(String, String, RpcReplyPort<Result<(), DashError>>),

    /// All settings, or those whose key starts with the given prefix.
    GetSettings(
        Option<String>,
        RpcReplyPort<Result<HashMap<String, String>, DashError>>,
    ),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create(&self, create: impl Into<RecordCreate>) -> Result<i64, DashError> {
        ractor::call!(self.actor, DbActorMessage::Create, create.into())
            .map_err(|e| DashError::RactorError(format!("DbActor Create RPC failed: {e}")))?
    }

    pub async fn add_note(&self, title: &str, content: &str) -> Result<i64, DashError> {
        self.create(NoteCreate::new(title, content)?).await
    }

    pub async fn add_reminder(&self, text: &str, due_at: Option<&str>) -> Result<i64, DashError> {
        self.create(ReminderCreate::new(text, due_at)?).await
    }

    pub async fn add_alarm(&self, label: &str, time_of_day: &str) -> Result<i64, DashError> {
        self.create(AlarmCreate::new(label, time_of_day)?).await
    }

    pub async fn add_timer(&self, label: &str, seconds: i64) -> Result<i64, DashError> {
        self.create(TimerCreate::new(label, seconds)?).await
    }

    pub async fn add_quick_link(&self, title: &str, url: &str) -> Result<i64, DashError> {
        self.create(QuickLinkCreate::new(title, url)?).await
    }

    pub async fn delete(&self, kind: RecordKind, id: i64) -> Result<bool, DashError> {
        ractor::call!(self.actor, DbActorMessage::Delete, kind, id)
            .map_err(|e| DashError::RactorError(format!("DbActor Delete RPC failed: {e}")))?
    }

    pub async fn toggle_reminder(&self, id: i64) -> Result<bool, DashError> {
        ractor::call!(self.actor, DbActorMessage::ToggleReminder, id).map_err(|e| {
            DashError::RactorError(format!("DbActor ToggleReminder RPC failed: {e}"))
        })?
    }

    pub async fn list_notes(&self, limit: Option<u32>) -> Result<Vec<DbNote>, DashError> {
        ractor::call!(self.actor, DbActorMessage::ListNotes, limit)
            .map_err(|e| DashError::RactorError(format!("DbActor ListNotes RPC failed: {e}")))?
    }

    pub async fn list_reminders(&self, limit: Option<u32>) -> Result<Vec<DbReminder>, DashError> {
        ractor::call!(self.actor, DbActorMessage::ListReminders, limit).map_err(|e| {
            DashError::RactorError(format!("DbActor ListReminders RPC failed: {e}"))
        })?
    }

    pub async fn list_alarms(&self) -> Result<Vec<DbAlarm>, DashError> {
        ractor::call!(self.actor, DbActorMessage::ListAlarms)
            .map_err(|e| DashError::RactorError(format!("DbActor ListAlarms RPC failed: {e}")))?
    }

    pub async fn list_timers(&self) -> Result<Vec<DbTimer>, DashError> {
        ractor::call!(self.actor, DbActorMessage::ListTimers)
            .map_err(|e| DashError::RactorError(format!("DbActor ListTimers RPC failed: {e}")))?
    }

    pub async fn list_quick_links(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<DbQuickLink>, DashError> {
        ractor::call!(self.actor, DbActorMessage::ListQuickLinks, limit).map_err(|e| {
            DashError::RactorError(format!("DbActor ListQuickLinks RPC failed: {e}"))
        })?
    }

    pub async fn counts(&self) -> Result<RecordCounts, DashError> {
        ractor::call!(self.actor, DbActorMessage::Counts)
            .map_err(|e| DashError::RactorError(format!("DbActor Counts RPC failed: {e}")))?
    }

    pub async fn set_setting(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DashError> {
        ractor::call!(
            self.actor,
            DbActorMessage::SetSetting,
            key.into(),
            value.into()
        )
        .map_err(|e| DashError::RactorError(format!("DbActor SetSetting RPC failed: {e}")))?
    }

    pub async fn get_settings(
        &self,
        prefix: Option<&str>,
    ) -> Result<HashMap<String, String>, DashError> {
        let prefix = prefix.map(str::to_string);
        ractor::call!(self.actor, DbActorMessage::GetSettings, prefix)
            .map_err(|e| DashError::RactorError(format!("DbActor GetSettings RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        ensure_parent_dir(connect_opts.get_filename())
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db directory init failed: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Create(create, reply) => {
                let res = self.create_record(&state.pool, create).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Delete(kind, id, reply) => {
                let res = self.delete_record(&state.pool, kind, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ToggleReminder(id, reply) => {
                let res = self.toggle_reminder(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListNotes(limit, reply) => {
                let res = self.list_notes(&state.pool, limit).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListReminders(limit, reply) => {
                let res = self.list_reminders(&state.pool, limit).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListAlarms(reply) => {
                let res = self.list_alarms(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListTimers(reply) => {
                let res = self.list_timers(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListQuickLinks(limit, reply) => {
                let res = self.list_quick_links(&state.pool, limit).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Counts(reply) => {
                let res = self.counts(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::SetSetting(key, value, reply) => {
                let res = self.set_setting(&state.pool, key, value).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetSettings(prefix, reply) => {
                let res = self.get_settings(&state.pool, prefix).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn create_record(
        &self,
        pool: &SqlitePool,
        create: RecordCreate,
    ) -> Result<i64, DashError> {
        let kind = create.kind();
        let mut tx = pool.begin().await?;

        let id: i64 = match create {
            RecordCreate::Note(c) => {
                sqlx::query_scalar(
                    r#"
                INSERT INTO notes (title, content, created_at)
                VALUES (?, ?, ?)
                RETURNING id
                "#,
                )
                .bind(c.title)
                .bind(c.content)
                .bind(local_timestamp())
                .fetch_one(&mut *tx)
                .await?
            }
            RecordCreate::Reminder(c) => {
                sqlx::query_scalar(
                    r#"
                INSERT INTO reminders (text, due_at, created_at)
                VALUES (?, ?, ?)
                RETURNING id
                "#,
                )
                .bind(c.text)
                .bind(c.due_at)
                .bind(local_timestamp())
                .fetch_one(&mut *tx)
                .await?
            }
            RecordCreate::Alarm(c) => {
                sqlx::query_scalar(
                    r#"
                INSERT INTO alarms (label, time_of_day)
                VALUES (?, ?)
                RETURNING id
                "#,
                )
                .bind(c.label)
                .bind(c.time_of_day)
                .fetch_one(&mut *tx)
                .await?
            }
            RecordCreate::Timer(c) => {
                sqlx::query_scalar(
                    r#"
                INSERT INTO timers (label, seconds)
                VALUES (?, ?)
                RETURNING id
                "#,
                )
                .bind(c.label)
                .bind(c.seconds)
                .fetch_one(&mut *tx)
                .await?
            }
            RecordCreate::QuickLink(c) => {
                sqlx::query_scalar(
                    r#"
                INSERT INTO quick_links (title, url)
                VALUES (?, ?)
                RETURNING id
                "#,
                )
                .bind(c.title)
                .bind(c.url)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        info!(table = kind.table(), id, "record created");
        Ok(id)
    }

    async fn delete_record(
        &self,
        pool: &SqlitePool,
        kind: RecordKind,
        id: i64,
    ) -> Result<bool, DashError> {
        // Table names come from a closed enum, never from input.
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        debug!(table = kind.table(), id, affected, "delete");
        Ok(affected > 0)
    }

    async fn toggle_reminder(&self, pool: &SqlitePool, id: i64) -> Result<bool, DashError> {
        let mut tx = pool.begin().await?;
        let affected = sqlx::query(
            r#"
        UPDATE reminders
        SET is_done = CASE WHEN is_done = 1 THEN 0 ELSE 1 END
        WHERE id = ?
        "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        tx.commit().await?;

        debug!(id, affected, "reminder toggled");
        Ok(affected > 0)
    }

    async fn list_notes(
        &self,
        pool: &SqlitePool,
        limit: Option<u32>,
    ) -> Result<Vec<DbNote>, DashError> {
        let rows = sqlx::query_as::<_, DbNote>(
            r#"
        SELECT id, title, content, created_at
        FROM notes
        ORDER BY id DESC
        LIMIT ?
        "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_reminders(
        &self,
        pool: &SqlitePool,
        limit: Option<u32>,
    ) -> Result<Vec<DbReminder>, DashError> {
        let rows = sqlx::query_as::<_, DbReminder>(
            r#"
        SELECT id, text, due_at, is_done, created_at
        FROM reminders
        ORDER BY is_done ASC, due_at IS NULL ASC, due_at ASC, id DESC
        LIMIT ?
        "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_alarms(&self, pool: &SqlitePool) -> Result<Vec<DbAlarm>, DashError> {
        let rows = sqlx::query_as::<_, DbAlarm>(
            r#"
        SELECT id, label, time_of_day, enabled
        FROM alarms
        ORDER BY time_of_day ASC, id ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_timers(&self, pool: &SqlitePool) -> Result<Vec<DbTimer>, DashError> {
        let rows = sqlx::query_as::<_, DbTimer>(
            r#"
        SELECT id, label, seconds
        FROM timers
        ORDER BY seconds ASC, id ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_quick_links(
        &self,
        pool: &SqlitePool,
        limit: Option<u32>,
    ) -> Result<Vec<DbQuickLink>, DashError> {
        let rows = sqlx::query_as::<_, DbQuickLink>(
            r#"
        SELECT id, title, url
        FROM quick_links
        ORDER BY id DESC
        LIMIT ?
        "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn counts(&self, pool: &SqlitePool) -> Result<RecordCounts, DashError> {
        let row = sqlx::query_as::<_, RecordCounts>(
            r#"
        SELECT
            (SELECT COUNT(*) FROM notes) AS notes,
            (SELECT COUNT(*) FROM reminders WHERE is_done = 0) AS reminders,
            (SELECT COUNT(*) FROM alarms) AS alarms,
            (SELECT COUNT(*) FROM timers) AS timers,
            (SELECT COUNT(*) FROM quick_links) AS quick_links
        "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn set_setting(
        &self,
        pool: &SqlitePool,
        key: String,
        value: String,
    ) -> Result<(), DashError> {
        let mut tx = pool.begin().await?;
        sqlx::query(
            r#"
        INSERT INTO settings (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
        )
        .bind(&key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(key = %key, "setting stored");
        Ok(())
    }

    async fn get_settings(
        &self,
        pool: &SqlitePool,
        prefix: Option<String>,
    ) -> Result<HashMap<String, String>, DashError> {
        // `substr` rather than LIKE so `_` and `%` in the prefix match literally.
        let rows: Vec<(String, String)> = match prefix {
            Some(prefix) => {
                sqlx::query_as(
                    r#"
                SELECT key, value
                FROM settings
                WHERE substr(key, 1, length(?)) = ?
                "#,
                )
                .bind(&prefix)
                .bind(&prefix)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT key, value FROM settings")
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows.into_iter().collect())
    }
}

/// SQLite treats a negative LIMIT as "no limit". A zero limit also means uncapped.
fn sql_limit(limit: Option<u32>) -> i64 {
    limit.filter(|n| *n > 0).map_or(-1, i64::from)
}

fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

async fn ensure_parent_dir(filename: &Path) -> std::io::Result<()> {
    match filename.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await,
        _ => Ok(()),
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, DashError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| DashError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), DashError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::sql_limit;

    #[test]
    fn limit_maps_to_sqlite_semantics() {
        assert_eq!(sql_limit(None), -1);
        assert_eq!(sql_limit(Some(0)), -1);
        assert_eq!(sql_limit(Some(5)), 5);
    }
}

use diesel::prelude::*;
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::{
    models::waitlist_models::{NewWaitlistEntry, WaitlistEntry},
    schema::waitlist,
    db::DbPool,
};

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] DieselError),
    #[error("timestamp {0} does not fit the created_at column")]
    TimestampOutOfRange(i64),
}

// created_at is a 32-bit epoch column
fn epoch_seconds(timestamp: i64) -> Result<i32, RepositoryError> {
    i32::try_from(timestamp).map_err(|_| RepositoryError::TimestampOutOfRange(timestamp))
}

pub struct Joined {
    pub entry: WaitlistEntry,
    pub newly_added: bool,
}

pub struct WaitlistRepository {
    pool: DbPool
}

impl WaitlistRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Adds the email unless it is already listed. Joining twice is not an error.
    pub fn join(&self, email: &str) -> Result<Joined, RepositoryError> {
        let mut conn = self.pool.get()?;
        let now = epoch_seconds(chrono::Utc::now().timestamp())?;

        let inserted = diesel::insert_or_ignore_into(waitlist::table)
            .values(&NewWaitlistEntry { email, created_at: now })
            .execute(&mut conn)?;

        let entry = waitlist::table
            .filter(waitlist::email.eq(email))
            .select(WaitlistEntry::as_select())
            .first(&mut conn)?;

        Ok(Joined {
            entry,
            newly_added: inserted == 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::establish_pool;

    fn repository() -> WaitlistRepository {
        WaitlistRepository::new(establish_pool(":memory:", 1).unwrap())
    }

    #[test]
    fn epoch_seconds_rejects_values_past_2038() {
        assert_eq!(epoch_seconds(1_700_000_000).unwrap(), 1_700_000_000);
        let overflow = i64::from(i32::MAX) + 1;
        assert!(matches!(
            epoch_seconds(overflow),
            Err(RepositoryError::TimestampOutOfRange(value)) if value == overflow
        ));
    }

    #[test]
    fn concurrent_joins_on_a_file_database_all_succeed() {
        let dir = std::env::temp_dir().join(format!("peerai-concurrent-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("waitlist.db");
        let pool = establish_pool(path.to_str().unwrap(), 8).unwrap();
        let repo = WaitlistRepository::new(pool.clone());

        let failures: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|t| {
                    let repo = &repo;
                    scope.spawn(move || {
                        (0..25)
                            .filter(|i| repo.join(&format!("u{}_{}@x.com", t, i)).is_err())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        let stored: i64 = waitlist::table
            .count()
            .get_result(&mut pool.get().unwrap())
            .unwrap();
        drop(repo);
        drop(pool);
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(failures, 0);
        assert_eq!(stored, 200);
    }

    #[test]
    fn join_adds_new_email() {
        let repo = repository();

        let joined = repo.join("a@b.com").unwrap();

        assert!(joined.newly_added);
        assert_eq!(joined.entry.email, "a@b.com");
        assert!(joined.entry.id.is_some());
        assert!(joined.entry.created_at > 0);
    }

    #[test]
    fn joining_twice_keeps_the_first_entry() {
        let repo = repository();

        let first = repo.join("a@b.com").unwrap();
        let second = repo.join("a@b.com").unwrap();

        assert!(!second.newly_added);
        assert_eq!(first.entry.id, second.entry.id);
        assert_eq!(first.entry.created_at, second.entry.created_at);
    }
}

use diesel::prelude::*;
use crate::schema::waitlist;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = waitlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WaitlistEntry {
    pub id: Option<i32>,
    pub email: String, // trimmed and lowercased
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Insertable)]
#[diesel(table_name = waitlist)]
pub struct NewWaitlistEntry<'a> {
    pub email: &'a str,
    pub created_at: i32,
}

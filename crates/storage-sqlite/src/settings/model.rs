//! Database model for the key/value settings store.

use diesel::prelude::*;

#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AppSettingDB {
    pub setting_key: String,
    pub setting_value: String,
}

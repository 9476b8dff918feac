use sea_orm::entity::prelude::*;

/// Legacy wire schema: column names are fixed so existing `Admins.db`
/// files stay readable.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Administrators")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "AdminID")]
    pub id: i32,

    #[sea_orm(unique, column_name = "Username")]
    pub username: String,

    /// Lowercase hex SHA-256 digest of the plaintext password.
    #[sea_orm(column_name = "Password")]
    pub password_hash: String,

    /// RFC 3339, set once at registration.
    #[sea_orm(column_name = "RegistrationDateTime")]
    pub registered_at: String,

    /// Null until the first successful login.
    #[sea_orm(column_name = "LastLoginDateTime")]
    pub last_login_at: Option<String>,

    /// Legacy "; "-joined action labels. Grows by append only.
    #[sea_orm(column_name = "ActionLog")]
    pub action_log: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

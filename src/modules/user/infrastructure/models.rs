use crate::modules::user::domain::{NewUser, User};
use crate::schema::{friendships, users};
use chrono::NaiveDate;
use diesel::prelude::*;

// ============= USER MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

// For inserting new users (id comes from the sequence)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserModel {
    pub login: String,
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

// Full overwrite of an existing user (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub login: String,
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

// ============= FRIENDSHIP EDGES =============

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = friendships)]
pub struct NewFriendship {
    pub user_id: i64,
    pub friend_id: i64,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            login: model.login,
            name: model.name,
            email: model.email,
            birthday: model.birthday,
        }
    }
}

impl From<NewUser> for NewUserModel {
    fn from(user: NewUser) -> Self {
        NewUserModel {
            login: user.login,
            name: user.name.unwrap_or_default(),
            email: user.email,
            birthday: user.birthday,
        }
    }
}

impl From<User> for UserChangeset {
    fn from(user: User) -> Self {
        UserChangeset {
            login: user.login,
            name: user.name,
            email: user.email,
            birthday: user.birthday,
        }
    }
}
